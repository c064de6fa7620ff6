use std::collections::{BinaryHeap, HashMap, HashSet};

use squadpath_core::HexCoordinate;

use crate::error::SearchError;
use crate::params::{ActionBudget, SearchParameters};
use crate::path::{SearchPath, compare_search_paths};
use crate::results::SearchResults;

/// Queue entry, ordered so `BinaryHeap` (a max-heap) pops the best path first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueuedPath(pub(crate) SearchPath);

impl Ord for QueuedPath {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare_search_paths(&other.0, &self.0)
    }
}

impl PartialOrd for QueuedPath {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// What a queued path still has to work with when it stands on a tile.
///
/// A label covers another when it is no more expensive and no worse off in
/// every resource that limits further movement. Anything the covered path
/// could still do, the covering one can do at least as cheaply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Label {
    total_cost: u32,
    // zero under an unbounded budget, where the count never limits anything
    legs: u32,
    leg_cost: u32,
    // only tracked when a step cap exists
    steps: Option<u32>,
    // steps counted toward the minimum distance, saturating at it
    progress: u32,
}

impl Label {
    pub(crate) fn of(path: &SearchPath, params: &SearchParameters) -> Self {
        let steps = path.total_distance();
        Self {
            total_cost: path.total_movement_cost(),
            legs: match params.action_budget() {
                ActionBudget::Limited(_) => path.number_of_legs() as u32,
                ActionBudget::Unbounded => 0,
            },
            leg_cost: path.current_leg_cost(),
            steps: params.maximum_distance_moved().map(|_| steps),
            progress: steps.min(params.minimum_distance_moved()),
        }
    }

    pub(crate) fn covers(&self, other: &Self) -> bool {
        self.total_cost <= other.total_cost
            && self.legs <= other.legs
            && self.leg_cost <= other.leg_cost
            && self.progress >= other.progress
            && match (self.steps, other.steps) {
                (Some(a), Some(b)) => a <= b,
                _ => true,
            }
    }
}

/// Scratch space for a single query. Built at the start of a search and
/// consumed into its [`SearchResults`] at the end.
pub(crate) struct SearchState {
    pub(crate) queue: BinaryHeap<QueuedPath>,
    // labels accepted so far, per tile
    labels: HashMap<HexCoordinate, Vec<Label>>,
    pub(crate) confirmed: HashSet<HexCoordinate>,
    pub(crate) ever_visited: HashSet<HexCoordinate>,
    pub(crate) actions_explored: u32,
    pub(crate) results: SearchResults,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<HexCoordinate>,
}

impl SearchState {
    pub(crate) fn new(stop_coordinate: Option<HexCoordinate>) -> Self {
        Self {
            queue: BinaryHeap::new(),
            labels: HashMap::new(),
            confirmed: HashSet::new(),
            ever_visited: HashSet::new(),
            actions_explored: 0,
            results: SearchResults::new(stop_coordinate),
            nbuf: Vec::with_capacity(6),
        }
    }

    /// Queue `path` unless a path already queued for the same tile covers it.
    pub(crate) fn offer(&mut self, path: SearchPath, params: &SearchParameters) -> bool {
        let label = Label::of(&path, params);
        let seen = self.labels.entry(path.destination()).or_default();
        if seen.iter().any(|l| l.covers(&label)) {
            return false;
        }
        seen.retain(|l| !label.covers(l));
        seen.push(label);
        self.queue.push(QueuedPath(path));
        true
    }

    /// Record `path` as the winning route to its tile.
    pub(crate) fn confirm(&mut self, path: SearchPath) -> Result<(), SearchError> {
        let c = path.destination();
        if !self.confirmed.insert(c) {
            return Err(SearchError::DuplicateRouteConfirmation { coordinate: c });
        }
        self.results.record_route(path)
    }

    pub(crate) fn into_results(mut self) -> SearchResults {
        self.results.set_rounds_searched(self.actions_explored);
        self.results
    }
}
