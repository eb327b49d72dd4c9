//! Assembled multi-room seating plans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::{SeatingError, SeatingResult};
use crate::grid::SeatGrid;
use crate::model::RoomId;

/// Lifecycle of a plan. The engine only ever produces [`PlanStatus::Draft`];
/// later transitions belong to whoever persists the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    #[default]
    Draft,
    Final,
    Published,
}

impl PlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "draft",
            PlanStatus::Final => "final",
            PlanStatus::Published => "published",
        }
    }

    /// Draft → Final → Published, Draft → Published, and Final → Draft to reopen.
    pub fn can_transition_to(&self, next: PlanStatus) -> bool {
        matches!(
            (self, next),
            (PlanStatus::Draft, PlanStatus::Final)
                | (PlanStatus::Draft, PlanStatus::Published)
                | (PlanStatus::Final, PlanStatus::Published)
                | (PlanStatus::Final, PlanStatus::Draft)
        )
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Occupancy figures for one room's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomStats {
    pub occupied: usize,
    pub empty: usize,
    /// Distinct groups seated in the room.
    pub groups: usize,
    /// Orthogonally adjacent occupied pairs that share a group.
    pub same_group_neighbours: usize,
}

/// One room of an assembled plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRoom {
    pub room_id: RoomId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    pub rows: u32,
    pub columns: u32,
    pub capacity: u32,
    #[serde(default)]
    pub invigilators: Vec<String>,
    pub stats: RoomStats,
    pub grid: SeatGrid,
}

/// A seating plan for one exam across all of its rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub exam_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub algorithm: Algorithm,
    #[serde(default)]
    pub status: PlanStatus,
    pub rooms: Vec<PlanRoom>,
}

impl SeatingPlan {
    pub fn draft(exam_id: impl Into<String>, algorithm: Algorithm, rooms: Vec<PlanRoom>) -> Self {
        Self {
            exam_id: exam_id.into(),
            title: None,
            algorithm,
            status: PlanStatus::Draft,
            rooms,
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Move the plan to `next`, rejecting transitions the lifecycle forbids.
    pub fn transition(&mut self, next: PlanStatus) -> SeatingResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(SeatingError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    pub fn room(&self, room_id: &str) -> Option<&PlanRoom> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    /// Locate a candidate: `(room_id, row, column)`.
    pub fn find_candidate(&self, candidate_id: &str) -> Option<(&str, u32, u32)> {
        self.rooms.iter().find_map(|room| {
            room.grid
                .occupied()
                .find(|s| s.candidate_id.as_deref() == Some(candidate_id))
                .map(|s| (room.room_id.as_str(), s.row, s.column))
        })
    }

    /// Sum of per-room stats. `groups` is summed per room, not deduplicated.
    pub fn totals(&self) -> RoomStats {
        self.rooms.iter().fold(RoomStats::default(), |acc, r| RoomStats {
            occupied: acc.occupied + r.stats.occupied,
            empty: acc.empty + r.stats.empty,
            groups: acc.groups + r.stats.groups,
            same_group_neighbours: acc.same_group_neighbours + r.stats.same_group_neighbours,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
