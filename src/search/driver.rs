use std::collections::HashSet;
use tracing::{debug, info, trace};
use crate::core::{estimate_remaining, is_dead, step, Direction, GameState, GameUpdate, SharedGameState, StateKey};
use crate::search::config::SolverConfig;
use crate::search::frontier::Frontier;
use crate::search::models::{SearchNode, SearchStats, SearchStep, Solution};

/// Best-first search over reachable configurations, ordered by `g + h`.
///
/// Drive it to completion with [`Search::run`], or call [`Search::step`] repeatedly to
/// interleave other work between expansions.
pub struct Search<'a> {
    shared: &'a SharedGameState,
    config: SolverConfig,
    frontier: Frontier,
    visited: HashSet<StateKey>,
    stats: SearchStats,
    finished: Option<Solution>,
}

impl<'a> Search<'a> {
    pub fn new(shared: &'a SharedGameState, initial: GameState, config: SolverConfig) -> Self {
        let heuristic = estimate_remaining(shared, &initial, config.heuristic);
        debug!(
            width = shared.width(),
            height = shared.height(),
            boxes = initial.iter_boxes().count(),
            targets = shared.total_targets(),
            heuristic,
            ?config,
            "starting search"
        );

        let mut search = Search {
            shared,
            config,
            frontier: Frontier::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
            finished: None,
        };

        if config.prune_deadlocks && is_dead(shared, &initial) {
            debug!("initial state is already a deadlock");
            search.finished = Some(Solution::NoSolution);
            return search;
        }

        search.frontier.push(SearchNode {
            game: initial,
            path: String::new(),
            cost: 0,
            heuristic,
        });
        search.stats.max_frontier = 1;
        search
    }

    pub fn step(&mut self) -> SearchStep {
        if let Some(solution) = &self.finished {
            return SearchStep::Finished(solution.clone());
        }

        let Some(node) = self.frontier.pop() else {
            return self.finish(Solution::NoSolution);
        };
        debug_assert_eq!(node.path.len(), node.cost as usize);

        if node.game.is_won(self.shared) {
            return self.finish(Solution::Solved(node.path));
        }

        if !self.visited.insert(node.game.state_key()) {
            self.stats.duplicates += 1;
            return SearchStep::Duplicate;
        }

        trace!(cost = node.cost, heuristic = node.heuristic, path = %node.path, "expanding");
        self.expand_node(&node);
        self.stats.expanded += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
        SearchStep::Expanded
    }

    pub fn run(&mut self) -> Solution {
        loop {
            if let SearchStep::Finished(solution) = self.step() {
                return solution;
            }
        }
    }

    fn expand_node(&mut self, node: &SearchNode) {
        for direction in Direction::ALL {
            let GameUpdate::NextState(game, _change_type) = step(self.shared, &node.game, direction) else {
                self.stats.rejected_moves += 1;
                continue;
            };

            if self.config.prune_deadlocks && is_dead(self.shared, &game) {
                self.stats.pruned_deadlocks += 1;
                continue;
            }

            let heuristic = estimate_remaining(self.shared, &game, self.config.heuristic);
            let mut path = String::with_capacity(node.path.len() + 1);
            path.push_str(&node.path);
            path.push(direction.as_char());

            self.frontier.push(SearchNode {
                game,
                path,
                cost: node.cost + 1,
                heuristic,
            });
            self.stats.generated += 1;
        }
    }

    fn finish(&mut self, solution: Solution) -> SearchStep {
        info!(
            solved = solution.is_solved(),
            moves = solution.moves().map(str::len),
            expanded = self.stats.expanded,
            duplicates = self.stats.duplicates,
            pruned = self.stats.pruned_deadlocks,
            "search finished"
        );
        self.finished = Some(solution.clone());
        SearchStep::Finished(solution)
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.finished.as_ref()
    }
}
