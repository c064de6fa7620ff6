//! Query descriptions: [`SearchParameters`] and its builder.
//!
//! Parameters are a read-only snapshot. Derive modified copies with
//! [`SearchParameters::with_stop_coordinate`] and friends instead of mutating.

use squadpath_core::{Affiliation, HexCoordinate, MovementCost, SquaddieId};

use crate::error::ParameterError;

// ---------------------------------------------------------------------------
// Rule types
// ---------------------------------------------------------------------------

/// How many movement actions a search may spend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionBudget {
    Limited(u32),
    /// Spend as many actions as it takes. The search ends only when nothing
    /// new can be reached, so the map must be finite or the query must set
    /// a maximum distance.
    Unbounded,
}

impl ActionBudget {
    /// Whether the `action`-th action (1-based) may be spent.
    pub fn allows(self, action: u32) -> bool {
        match self {
            Self::Limited(n) => action <= n,
            Self::Unbounded => true,
        }
    }
}

impl Default for ActionBudget {
    fn default() -> Self {
        Self::Limited(1)
    }
}

/// Which occupants block passage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockingRule {
    /// Living units not friendly with the searcher block. Units of unknown
    /// status always block.
    #[default]
    Unfriendly,
    /// Nobody blocks.
    Nobody,
}

/// Occupancy part of a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyRules {
    /// The moving unit. Its own tile never blocks it.
    pub searcher: Option<SquaddieId>,
    pub affiliation: Affiliation,
    pub blocking: BlockingRule,
    /// Whether the search may end on a tile held by another living unit.
    pub can_stop_on_squaddies: bool,
}

/// Terrain part of a query.
///
/// Wall and pit permissions are independent of `ignore_terrain_cost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainRules {
    /// Every enterable tile costs 1.
    pub ignore_terrain_cost: bool,
    pub can_pass_through_walls: bool,
    pub can_pass_over_pits: bool,
}

impl TerrainRules {
    /// Whether `class` may be entered at all.
    pub fn can_enter(&self, class: MovementCost) -> bool {
        match class {
            MovementCost::Wall => self.can_pass_through_walls,
            MovementCost::Pit => self.can_pass_over_pits,
            MovementCost::Open | MovementCost::Difficult(_) => true,
        }
    }

    /// Cost of entering a tile of `class`, or `None` if it cannot be entered.
    /// Crossable walls and pits cost 1.
    pub fn entry_cost(&self, class: MovementCost) -> Option<u32> {
        if !self.can_enter(class) {
            return None;
        }
        if self.ignore_terrain_cost {
            return Some(1);
        }
        Some(class.base_cost().unwrap_or(1).max(1))
    }
}

// ---------------------------------------------------------------------------
// SearchParameters
// ---------------------------------------------------------------------------

/// Immutable description of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParameters {
    start_coordinates: Vec<HexCoordinate>,
    stop_coordinate: Option<HexCoordinate>,
    movement_per_action: u32,
    action_budget: ActionBudget,
    minimum_distance_moved: u32,
    maximum_distance_moved: Option<u32>,
    occupancy: OccupancyRules,
    terrain: TerrainRules,
}

impl SearchParameters {
    pub fn builder() -> SearchParametersBuilder {
        SearchParametersBuilder::default()
    }

    pub fn start_coordinates(&self) -> &[HexCoordinate] {
        &self.start_coordinates
    }

    pub fn stop_coordinate(&self) -> Option<HexCoordinate> {
        self.stop_coordinate
    }

    pub fn movement_per_action(&self) -> u32 {
        self.movement_per_action
    }

    pub fn action_budget(&self) -> ActionBudget {
        self.action_budget
    }

    /// Fewest steps a route must take before it may stop.
    pub fn minimum_distance_moved(&self) -> u32 {
        self.minimum_distance_moved
    }

    /// Most steps a route may take in total.
    pub fn maximum_distance_moved(&self) -> Option<u32> {
        self.maximum_distance_moved
    }

    pub fn occupancy(&self) -> &OccupancyRules {
        &self.occupancy
    }

    pub fn terrain(&self) -> TerrainRules {
        self.terrain
    }

    /// A copy of these parameters aimed at `stop`.
    pub fn with_stop_coordinate(&self, stop: HexCoordinate) -> Self {
        Self {
            stop_coordinate: Some(stop),
            ..self.clone()
        }
    }

    /// A copy of these parameters with no destination.
    pub fn without_stop_coordinate(&self) -> Self {
        Self {
            stop_coordinate: None,
            ..self.clone()
        }
    }

    /// A copy of these parameters starting from `starts`.
    pub fn with_start_coordinates(&self, starts: Vec<HexCoordinate>) -> Self {
        Self {
            start_coordinates: starts,
            ..self.clone()
        }
    }

    /// Check the invariants the builder enforces. Useful for parameters that
    /// were deserialized rather than built.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.start_coordinates.is_empty() {
            return Err(ParameterError::NoStartCoordinates);
        }
        if self.movement_per_action == 0 {
            return Err(ParameterError::ZeroMovementPerAction);
        }
        if self.action_budget == ActionBudget::Limited(0) {
            return Err(ParameterError::ZeroActionBudget);
        }
        if let Some(maximum) = self.maximum_distance_moved {
            if self.minimum_distance_moved > maximum {
                return Err(ParameterError::DistanceBoundsInverted {
                    minimum: self.minimum_distance_moved,
                    maximum,
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`SearchParameters`].
///
/// Defaults: one action, movement 1 per action, no distance bounds, no
/// destination, unknown affiliation, terrain respected.
#[derive(Debug, Clone)]
pub struct SearchParametersBuilder {
    params: SearchParameters,
}

impl Default for SearchParametersBuilder {
    fn default() -> Self {
        Self {
            params: SearchParameters {
                start_coordinates: Vec::new(),
                stop_coordinate: None,
                movement_per_action: 1,
                action_budget: ActionBudget::default(),
                minimum_distance_moved: 0,
                maximum_distance_moved: None,
                occupancy: OccupancyRules::default(),
                terrain: TerrainRules::default(),
            },
        }
    }
}

impl SearchParametersBuilder {
    pub fn start(mut self, c: HexCoordinate) -> Self {
        self.params.start_coordinates.push(c);
        self
    }

    pub fn starts(mut self, cs: impl IntoIterator<Item = HexCoordinate>) -> Self {
        self.params.start_coordinates.extend(cs);
        self
    }

    pub fn stop(mut self, c: HexCoordinate) -> Self {
        self.params.stop_coordinate = Some(c);
        self
    }

    pub fn movement_per_action(mut self, movement: u32) -> Self {
        self.params.movement_per_action = movement;
        self
    }

    pub fn actions(mut self, actions: u32) -> Self {
        self.params.action_budget = ActionBudget::Limited(actions);
        self
    }

    pub fn unbounded_actions(mut self) -> Self {
        self.params.action_budget = ActionBudget::Unbounded;
        self
    }

    pub fn minimum_distance(mut self, distance: u32) -> Self {
        self.params.minimum_distance_moved = distance;
        self
    }

    pub fn maximum_distance(mut self, distance: u32) -> Self {
        self.params.maximum_distance_moved = Some(distance);
        self
    }

    pub fn searcher(mut self, id: impl Into<SquaddieId>, affiliation: Affiliation) -> Self {
        self.params.occupancy.searcher = Some(id.into());
        self.params.occupancy.affiliation = affiliation;
        self
    }

    pub fn affiliation(mut self, affiliation: Affiliation) -> Self {
        self.params.occupancy.affiliation = affiliation;
        self
    }

    pub fn blocking(mut self, rule: BlockingRule) -> Self {
        self.params.occupancy.blocking = rule;
        self
    }

    pub fn can_stop_on_squaddies(mut self, allowed: bool) -> Self {
        self.params.occupancy.can_stop_on_squaddies = allowed;
        self
    }

    pub fn ignore_terrain_cost(mut self, ignore: bool) -> Self {
        self.params.terrain.ignore_terrain_cost = ignore;
        self
    }

    pub fn pass_through_walls(mut self, allowed: bool) -> Self {
        self.params.terrain.can_pass_through_walls = allowed;
        self
    }

    pub fn pass_over_pits(mut self, allowed: bool) -> Self {
        self.params.terrain.can_pass_over_pits = allowed;
        self
    }

    pub fn build(self) -> Result<SearchParameters, ParameterError> {
        self.params.validate()?;
        Ok(self.params)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn parameters_round_trip() {
        let p = SearchParameters::builder()
            .start(HexCoordinate::new(1, 2))
            .stop(HexCoordinate::new(4, 2))
            .movement_per_action(3)
            .unbounded_actions()
            .searcher("knight", Affiliation::Player)
            .pass_over_pits(true)
            .build()
            .unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: SearchParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
        assert!(back.validate().is_ok());
    }
}
