//! Migration difficulty over a vendor's task set.

use super::clamp_score;
use crate::core::MigrationTask;

/// Score substituted when a vendor has no recorded tasks.
///
/// Absence of data reads as "unknown/average", not as trivially easy, so
/// the default sits at the middle of the scale rather than zero.
pub const NEUTRAL_DIFFICULTY: f64 = 50.0;

// Normalization reference points for a "large migration". A plan at or
// beyond all three saturates the score.
const DAYS_REFERENCE: f64 = 180.0;
const TASK_COUNT_REFERENCE: f64 = 20.0;
const DIFFICULTY_REFERENCE: f64 = 10.0;

/// How hard a vendor migration looks given its pending task set, 0-100.
///
/// Combines total duration (0-40), task count (0-30), and average task
/// difficulty (0-30), each saturating at its reference point. An empty
/// task set returns exactly [`NEUTRAL_DIFFICULTY`].
pub fn migration_difficulty_score<'a, I>(tasks: I) -> f64
where
    I: IntoIterator<Item = &'a MigrationTask>,
{
    let mut count: usize = 0;
    let mut total_days: u64 = 0;
    let mut difficulty_sum: f64 = 0.0;
    for task in tasks {
        count += 1;
        total_days += u64::from(task.estimated_days);
        difficulty_sum += f64::from(task.difficulty);
    }

    if count == 0 {
        return NEUTRAL_DIFFICULTY;
    }

    let avg_difficulty = difficulty_sum / count as f64;
    let time_factor = (total_days as f64 / DAYS_REFERENCE * 40.0).min(40.0);
    let task_count_factor = (count as f64 / TASK_COUNT_REFERENCE * 30.0).min(30.0);
    let complexity_factor = (avg_difficulty / DIFFICULTY_REFERENCE * 30.0).min(30.0);

    clamp_score(time_factor + task_count_factor + complexity_factor)
}
