//! Migration analysis: per-vendor task graphs composed with the scoring
//! model.
//!
//! The analyzer owns one [`TaskGraph`] per vendor id, created lazily on
//! the first task. Vendors are fully independent of one another; every
//! query against an id with no recorded tasks returns the documented
//! "no data yet" default instead of failing.

use crate::core::{Error, MigrationTask, Result};
use crate::graph::{ExecutionOrder, TaskGraph};
use crate::scoring::{self, NEUTRAL_DIFFICULTY};
use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Urgency-ordered view of one task, produced by
/// [`MigrationAnalyzer::prioritized_tasks`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPriority {
    pub task_id: String,
    /// difficulty x 10 + dependency count x 5
    pub priority: u32,
}

/// Per-vendor migration difficulty, duration, and sequencing.
#[derive(Debug, Clone, Default)]
pub struct MigrationAnalyzer {
    graphs: HashMap<String, TaskGraph>,
    insertion_order: Vector<String>,
}

impl MigrationAnalyzer {
    pub fn new() -> Self {
        Self {
            graphs: HashMap::new(),
            insertion_order: Vector::new(),
        }
    }

    /// Add a task to a vendor's graph, creating the graph on first use.
    pub fn add_task(&mut self, vendor_id: &str, task: MigrationTask) -> Result<()> {
        if vendor_id.is_empty() {
            return Err(Error::InvalidVendorId);
        }
        if task.task_id.is_empty() {
            return Err(Error::InvalidTaskId);
        }
        if !self.graphs.contains_key(vendor_id) {
            self.insertion_order.push_back(vendor_id.to_string());
            self.graphs.insert(vendor_id.to_string(), TaskGraph::new());
        }
        if let Some(graph) = self.graphs.get_mut(vendor_id) {
            graph.add_task(task);
        }
        Ok(())
    }

    /// Vendor ids with at least one recorded task, in first-seen order.
    pub fn vendors(&self) -> impl Iterator<Item = &str> {
        self.insertion_order.iter().map(String::as_str)
    }

    pub fn graph(&self, vendor_id: &str) -> Option<&TaskGraph> {
        self.graphs.get(vendor_id)
    }

    pub fn task_count(&self, vendor_id: &str) -> usize {
        self.graphs.get(vendor_id).map_or(0, TaskGraph::len)
    }

    /// Migration difficulty over the vendor's current task set.
    ///
    /// An unknown vendor id scores [`NEUTRAL_DIFFICULTY`], matching the
    /// empty-task-set default of the scoring model.
    pub fn difficulty_score(&self, vendor_id: &str) -> f64 {
        match self.graphs.get(vendor_id) {
            Some(graph) => scoring::migration_difficulty_score(graph.tasks()),
            None => NEUTRAL_DIFFICULTY,
        }
    }

    /// Total estimated days across the vendor's task set; 0 when unknown.
    pub fn total_days(&self, vendor_id: &str) -> u32 {
        self.graphs.get(vendor_id).map_or(0, TaskGraph::total_days)
    }

    /// Dependency-respecting execution order for the vendor's tasks; an
    /// empty order when the vendor is unknown.
    pub fn optimal_sequence(&self, vendor_id: &str) -> ExecutionOrder {
        self.graphs
            .get(vendor_id)
            .map_or_else(ExecutionOrder::default, TaskGraph::execution_order)
    }

    /// The vendor's longest dependency chain by cumulative days.
    pub fn critical_path(&self, vendor_id: &str) -> Vec<String> {
        self.graphs
            .get(vendor_id)
            .map_or_else(Vec::new, TaskGraph::critical_path)
    }

    /// Tasks ordered by urgency, most urgent first; ties break by
    /// ascending task id.
    pub fn prioritized_tasks(&self, vendor_id: &str) -> Vec<TaskPriority> {
        let Some(graph) = self.graphs.get(vendor_id) else {
            return Vec::new();
        };
        let mut prioritized: Vec<TaskPriority> = graph
            .tasks()
            .map(|task| TaskPriority {
                task_id: task.task_id.clone(),
                priority: u32::from(task.difficulty) * 10 + task.dependencies.len() as u32 * 5,
            })
            .collect();
        prioritized.sort_by(|a, b| match b.priority.cmp(&a.priority) {
            Ordering::Equal => a.task_id.cmp(&b.task_id),
            other => other,
        });
        prioritized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vendor_gets_documented_defaults() {
        let analyzer = MigrationAnalyzer::new();
        assert_eq!(analyzer.difficulty_score("ghost"), 50.0);
        assert_eq!(analyzer.total_days("ghost"), 0);
        assert!(analyzer.optimal_sequence("ghost").sequence.is_empty());
        assert!(analyzer.prioritized_tasks("ghost").is_empty());
    }

    #[test]
    fn empty_identifiers_are_rejected() {
        let mut analyzer = MigrationAnalyzer::new();
        assert!(matches!(
            analyzer.add_task("", MigrationTask::new("T-1", "work", 1, 1)),
            Err(Error::InvalidVendorId)
        ));
        assert!(matches!(
            analyzer.add_task("V-1", MigrationTask::new("", "work", 1, 1)),
            Err(Error::InvalidTaskId)
        ));
    }

    #[test]
    fn prioritized_tasks_sort_by_urgency_then_id() {
        let mut analyzer = MigrationAnalyzer::new();
        analyzer
            .add_task("V-1", MigrationTask::new("T-B", "b", 4, 1))
            .unwrap();
        analyzer
            .add_task(
                "V-1",
                MigrationTask::new("T-C", "c", 3, 1)
                    .with_dependencies(vec!["T-B".to_string(), "T-A".to_string()]),
            )
            .unwrap();
        analyzer
            .add_task("V-1", MigrationTask::new("T-A", "a", 4, 1))
            .unwrap();

        let prioritized = analyzer.prioritized_tasks("V-1");
        let ids: Vec<&str> = prioritized.iter().map(|p| p.task_id.as_str()).collect();
        // T-B and T-A tie at 40; T-C scores 3*10 + 2*5 = 40 as well, so the
        // whole set ties and ascending id decides.
        assert_eq!(ids, vec!["T-A", "T-B", "T-C"]);
        assert!(prioritized.iter().all(|p| p.priority == 40));
    }
}
