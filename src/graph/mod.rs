//! Directed task dependency graph with deterministic scheduling.
//!
//! One graph holds one vendor's migration tasks. Edges run from a
//! dependency to its dependent; [`TaskGraph::execution_order`] linearizes
//! the graph with Kahn's algorithm, breaking ties by original insertion
//! order so repeated runs over the same graph produce identical output.

use crate::core::MigrationTask;
use im::{HashMap, Vector};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap as StdHashMap, HashSet};

/// Result of scheduling a task graph.
///
/// `sequence` always contains every task id exactly once. When the graph
/// has a dependency cycle the members of the cycle could not be ordered;
/// they are appended after the resolved prefix in insertion order and
/// listed in `unresolved`. Dependency references to ids that were never
/// added are tolerated (treated as already satisfied) and surfaced in
/// `dangling`. Check [`ExecutionOrder::is_reliable`] before trusting the
/// sequence as a full schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOrder {
    /// Every task id, dependencies-first where resolvable
    pub sequence: Vec<String>,
    /// Tasks stuck in a dependency cycle, in insertion order
    pub unresolved: Vec<String>,
    /// Referenced dependency ids not present in the graph
    pub dangling: Vec<String>,
}

impl ExecutionOrder {
    /// True when every dependency resolved and no cycle was found.
    pub fn is_reliable(&self) -> bool {
        self.unresolved.is_empty() && self.dangling.is_empty()
    }
}

/// One vendor's migration tasks and their dependency edges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskGraph {
    nodes: HashMap<String, MigrationTask>,
    insertion_order: Vector<String>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            insertion_order: Vector::new(),
        }
    }

    /// Insert a task. Re-adding an existing id overwrites its payload and
    /// edges but keeps the original insertion rank for tie-breaking.
    pub fn add_task(&mut self, task: MigrationTask) {
        if !self.nodes.contains_key(&task.task_id) {
            self.insertion_order.push_back(task.task_id.clone());
        }
        self.nodes.insert(task.task_id.clone(), task);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.nodes.contains_key(task_id)
    }

    pub fn get(&self, task_id: &str) -> Option<&MigrationTask> {
        self.nodes.get(task_id)
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &MigrationTask> {
        self.insertion_order
            .iter()
            .filter_map(move |id| self.nodes.get(id))
    }

    /// Sum of estimated days across the whole task set.
    pub fn total_days(&self) -> u32 {
        self.tasks().map(|task| task.estimated_days).sum()
    }

    /// Linearize the graph with Kahn's algorithm.
    ///
    /// In-degree counts only dependencies present in the graph. Among
    /// several ready tasks the one inserted first wins, so the order is
    /// stable across repeated calls. The scheduler always terminates:
    /// cycle members are appended after the resolved prefix rather than
    /// looping or failing.
    pub fn execution_order(&self) -> ExecutionOrder {
        let order: Vec<&str> = self.insertion_order.iter().map(String::as_str).collect();
        let rank: StdHashMap<&str, usize> =
            order.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut in_degree: StdHashMap<&str, usize> = StdHashMap::new();
        let mut dependents: StdHashMap<&str, Vec<&str>> = StdHashMap::new();
        let mut dangling: Vec<String> = Vec::new();

        for &id in &order {
            let Some(task) = self.nodes.get(id) else {
                continue;
            };
            let mut degree = 0;
            let mut counted: HashSet<&str> = HashSet::new();
            for dep in &task.dependencies {
                if !self.nodes.contains_key(dep) {
                    if !dangling.contains(dep) {
                        dangling.push(dep.clone());
                    }
                    continue;
                }
                if counted.insert(dep.as_str()) {
                    degree += 1;
                    dependents.entry(dep.as_str()).or_default().push(id);
                }
            }
            in_degree.insert(id, degree);
        }

        // Min-heap on insertion rank: the earliest-inserted ready task is
        // always emitted next.
        let mut ready: BinaryHeap<Reverse<usize>> = order
            .iter()
            .enumerate()
            .filter(|(_, id)| in_degree.get(**id) == Some(&0))
            .map(|(i, _)| Reverse(i))
            .collect();

        let mut sequence: Vec<String> = Vec::with_capacity(order.len());
        let mut emitted: HashSet<&str> = HashSet::new();

        while let Some(Reverse(r)) = ready.pop() {
            let id = order[r];
            sequence.push(id.to_string());
            emitted.insert(id);
            if let Some(next) = dependents.get(id) {
                for &dependent in next {
                    if let Some(degree) = in_degree.get_mut(dependent) {
                        *degree -= 1;
                        if *degree == 0 {
                            ready.push(Reverse(rank[dependent]));
                        }
                    }
                }
            }
        }

        let unresolved: Vec<String> = order
            .iter()
            .filter(|id| !emitted.contains(*id))
            .map(|id| id.to_string())
            .collect();
        sequence.extend(unresolved.iter().cloned());

        ExecutionOrder {
            sequence,
            unresolved,
            dangling,
        }
    }

    /// The longest dependency chain by cumulative estimated days,
    /// dependency-first.
    ///
    /// Computed over the resolved prefix of [`Self::execution_order`];
    /// tasks stuck in a cycle are excluded.
    pub fn critical_path(&self) -> Vec<String> {
        let order = self.execution_order();
        let resolved_len = order.sequence.len() - order.unresolved.len();
        let resolved = &order.sequence[..resolved_len];

        // Longest-path DP in topological order: cost is the chain's total
        // days ending at the task, prev links reconstruct the chain.
        let mut best: StdHashMap<&str, (u64, Option<&str>)> = StdHashMap::new();
        for id in resolved {
            let Some(task) = self.nodes.get(id) else {
                continue;
            };
            let own_days = u64::from(task.estimated_days);
            let mut cost = own_days;
            let mut prev: Option<&str> = None;
            for dep in &task.dependencies {
                if let Some(&(dep_cost, _)) = best.get(dep.as_str()) {
                    if dep_cost + own_days > cost {
                        cost = dep_cost + own_days;
                        prev = Some(dep.as_str());
                    }
                }
            }
            best.insert(id.as_str(), (cost, prev));
        }

        // First task (in topological order) with the maximal chain cost
        // ends the path; strict comparison keeps the choice deterministic.
        let mut end: Option<&str> = None;
        let mut max_cost = 0u64;
        for id in resolved {
            if let Some(&(cost, _)) = best.get(id.as_str()) {
                if cost > max_cost || end.is_none() {
                    max_cost = cost;
                    end = Some(id.as_str());
                }
            }
        }

        let mut path: Vec<String> = Vec::new();
        let mut cursor = end;
        while let Some(id) = cursor {
            path.push(id.to_string());
            cursor = best.get(id).and_then(|&(_, prev)| prev);
        }
        path.reverse();
        path
    }
}
