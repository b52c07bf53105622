use pretty_assertions::assert_eq;
use vendormap::analyzer::MigrationAnalyzer;
use vendormap::core::MigrationTask;

fn seeded_analyzer() -> MigrationAnalyzer {
    let mut analyzer = MigrationAnalyzer::new();
    analyzer
        .add_task("AWS-001", MigrationTask::new("TASK-001", "Inventory S3 buckets", 3, 10))
        .unwrap();
    analyzer
        .add_task("AWS-001", MigrationTask::new("TASK-002", "Map IAM policies", 4, 5))
        .unwrap();
    analyzer
        .add_task(
            "AWS-001",
            MigrationTask::new("TASK-003", "Replicate object store", 7, 30)
                .with_dependencies(vec!["TASK-001".to_string()]),
        )
        .unwrap();
    analyzer
        .add_task(
            "AWS-001",
            MigrationTask::new("TASK-004", "Cut over traffic", 6, 3)
                .with_dependencies(vec!["TASK-002".to_string(), "TASK-003".to_string()]),
        )
        .unwrap();
    analyzer
}

#[test]
fn optimal_sequence_respects_dependencies_and_insertion_order() {
    let analyzer = seeded_analyzer();
    let order = analyzer.optimal_sequence("AWS-001");
    assert_eq!(
        order.sequence,
        vec![
            "TASK-001".to_string(),
            "TASK-002".to_string(),
            "TASK-003".to_string(),
            "TASK-004".to_string(),
        ]
    );
    assert!(order.is_reliable());
}

#[test]
fn total_days_accumulates_across_the_task_set() {
    assert_eq!(seeded_analyzer().total_days("AWS-001"), 48);
}

#[test]
fn difficulty_score_reflects_the_recorded_tasks() {
    // 48 days, 4 tasks, average difficulty 5:
    // time 48/180*40, count 4/20*30 = 6, complexity 5/10*30 = 15
    let expected = 48.0 / 180.0 * 40.0 + 6.0 + 15.0;
    assert_eq!(seeded_analyzer().difficulty_score("AWS-001"), expected);
}

#[test]
fn unknown_vendor_defaults_are_neutral_not_errors() {
    let analyzer = MigrationAnalyzer::new();
    assert_eq!(analyzer.difficulty_score("GHOST-001"), 50.0);
    assert_eq!(analyzer.total_days("GHOST-001"), 0);
    assert!(analyzer.optimal_sequence("GHOST-001").sequence.is_empty());
    assert!(analyzer.critical_path("GHOST-001").is_empty());
}

#[test]
fn vendors_are_fully_independent() {
    let mut analyzer = seeded_analyzer();
    analyzer
        .add_task("GCP-001", MigrationTask::new("TASK-001", "Export BigQuery", 2, 4))
        .unwrap();

    assert_eq!(analyzer.task_count("AWS-001"), 4);
    assert_eq!(analyzer.task_count("GCP-001"), 1);
    assert_eq!(analyzer.total_days("GCP-001"), 4);
    // Same task id in another vendor's set does not collide.
    assert_eq!(analyzer.optimal_sequence("GCP-001").sequence, vec!["TASK-001".to_string()]);
}

#[test]
fn critical_path_tracks_the_longest_chain_of_days() {
    assert_eq!(
        seeded_analyzer().critical_path("AWS-001"),
        vec![
            "TASK-001".to_string(),
            "TASK-003".to_string(),
            "TASK-004".to_string(),
        ]
    );
}

#[test]
fn prioritized_tasks_rank_by_difficulty_and_fan_in() {
    let prioritized = seeded_analyzer().prioritized_tasks("AWS-001");
    let pairs: Vec<(&str, u32)> = prioritized
        .iter()
        .map(|p| (p.task_id.as_str(), p.priority))
        .collect();
    // TASK-003: 7*10 + 1*5 = 75, TASK-004: 6*10 + 2*5 = 70,
    // TASK-002: 4*10 = 40, TASK-001: 3*10 = 30
    assert_eq!(
        pairs,
        vec![("TASK-003", 75), ("TASK-004", 70), ("TASK-002", 40), ("TASK-001", 30)]
    );
}
