//! Shortest paths over a movement graph.

use std::collections::{HashMap, VecDeque};

use thiserror::Error;

use super::graph::MovementGraph;
use crate::maze::Pos;

/// A shortest path from start to goal, distance counted in edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// The goal position the path reaches.
    pub dest: Pos,
    /// Number of edges on the path.
    pub distance: u32,
    /// Every position from start to goal inclusive (`distance + 1` entries).
    pub trace: Vec<Pos>,
}

/// Precondition violations on a shortest-path query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("start position {0:?} is not a vacancy")]
    StartNotVacant(Pos),
    #[error("goal position {0:?} is not a vacancy")]
    GoalNotVacant(Pos),
}

/// Breadth-first shortest path from `start` to `goal`.
///
/// Every edge costs one, so the FIFO frontier settles each node at its final
/// distance on first visit and no node is ever re-enqueued. `Ok(None)` means
/// the goal is simply unreachable; the evolution loop consumes that as a
/// rejection signal for the candidate, not as a failure.
pub fn shortest(
    graph: &MovementGraph,
    start: Pos,
    goal: Pos,
) -> Result<Option<PathResult>, PathError> {
    if !graph.is_vacancy(start) {
        return Err(PathError::StartNotVacant(start));
    }
    if !graph.is_vacancy(goal) {
        return Err(PathError::GoalNotVacant(goal));
    }

    let mut distance: HashMap<Pos, u32> = HashMap::new();
    let mut parent: HashMap<Pos, Pos> = HashMap::new();
    let mut frontier = VecDeque::new();
    distance.insert(start, 0);
    frontier.push_back(start);

    while let Some(node) = frontier.pop_front() {
        let step_distance = distance[&node] + 1;
        for &neighbour in graph.edges_from(node) {
            if !distance.contains_key(&neighbour) {
                distance.insert(neighbour, step_distance);
                parent.insert(neighbour, node);
                frontier.push_back(neighbour);
            }
        }
    }

    let Some(&goal_distance) = distance.get(&goal) else {
        return Ok(None);
    };

    let mut trace = vec![goal];
    let mut current = goal;
    while current != start {
        current = parent[&current];
        trace.push(current);
    }
    trace.reverse();

    Ok(Some(PathResult {
        dest: goal,
        distance: goal_distance,
        trace,
    }))
}
