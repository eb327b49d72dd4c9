//! Input types for a planning call: rooms, candidates, and room assignments.
//!
//! All of these are constructed fresh from caller data for each call and
//! are never mutated by the engine.

use serde::{Deserialize, Serialize};

use crate::error::{SeatingError, SeatingResult};

/// Identifier of a room.
pub type RoomId = String;

/// Identifier of a candidate (student).
pub type CandidateId = String;

// ── Room ───────────────────────────────────────────────────────────

/// An exam room with a rectangular seat grid.
///
/// `capacity` is an admission cap checked upstream of the strategies and
/// is not required to equal `rows * columns`. Grid size always comes from
/// `rows` and `columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoomFields")]
pub struct Room {
    pub id: RoomId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    rows: u32,
    columns: u32,
    capacity: u32,
}

impl Room {
    /// Create a room, rejecting grids with no rows or no columns.
    pub fn new(id: impl Into<RoomId>, rows: u32, columns: u32, capacity: u32) -> SeatingResult<Self> {
        if rows < 1 || columns < 1 {
            return Err(SeatingError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            id: id.into(),
            name: None,
            building: None,
            rows,
            columns,
            capacity,
        })
    }

    /// A room whose capacity is exactly its grid size.
    pub fn with_grid(id: impl Into<RoomId>, rows: u32, columns: u32) -> SeatingResult<Self> {
        Self::new(id, rows, columns, rows.saturating_mul(columns))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn in_building(mut self, building: impl Into<String>) -> Self {
        self.building = Some(building.into());
        self
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Number of physical seats in the grid.
    pub fn seat_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}

/// Unvalidated wire form of [`Room`]; deserialization goes through [`Room::new`].
#[derive(Deserialize)]
struct RoomFields {
    id: RoomId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    building: Option<String>,
    rows: u32,
    columns: u32,
    capacity: Option<u32>,
}

impl TryFrom<RoomFields> for Room {
    type Error = SeatingError;

    fn try_from(fields: RoomFields) -> SeatingResult<Self> {
        let capacity = fields
            .capacity
            .unwrap_or_else(|| fields.rows.saturating_mul(fields.columns));
        let mut room = Room::new(fields.id, fields.rows, fields.columns, capacity)?;
        room.name = fields.name;
        room.building = fields.building;
        Ok(room)
    }
}

// ── Candidate ──────────────────────────────────────────────────────

/// A student eligible for seating in one room for one exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    #[serde(default, rename = "name")]
    pub display_name: String,
    /// Grouping attribute (usually the department). Empty is a group of its own.
    #[serde(default)]
    pub group: String,
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>, display_name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            group: group.into(),
        }
    }
}

// ── Room assignment ────────────────────────────────────────────────

/// A room together with the roster the distribution step assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAssignment {
    pub room: Room,
    pub roster: Vec<Candidate>,
    /// Opaque invigilator references, copied into the plan untouched.
    #[serde(default)]
    pub invigilators: Vec<String>,
}

impl RoomAssignment {
    pub fn new(room: Room, roster: Vec<Candidate>) -> Self {
        Self {
            room,
            roster,
            invigilators: Vec::new(),
        }
    }

    pub fn with_invigilators(mut self, invigilators: Vec<String>) -> Self {
        self.invigilators = invigilators;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_rejects_zero_rows() {
        let err = Room::new("r1", 0, 4, 0).unwrap_err();
        assert_eq!(err, SeatingError::InvalidDimensions { rows: 0, columns: 4 });
    }

    #[test]
    fn room_rejects_zero_columns() {
        assert!(Room::new("r1", 3, 0, 0).is_err());
    }

    #[test]
    fn capacity_is_independent_of_grid() {
        let room = Room::new("r1", 4, 5, 12).unwrap();
        assert_eq!(room.seat_count(), 20);
        assert_eq!(room.capacity(), 12);
    }

    #[test]
    fn with_grid_uses_full_grid_as_capacity() {
        let room = Room::with_grid("r1", 3, 3).unwrap().named("Hall A");
        assert_eq!(room.capacity(), 9);
        assert_eq!(room.name.as_deref(), Some("Hall A"));
    }

    #[test]
    fn deserialized_room_is_validated() {
        let err = serde_json::from_str::<Room>(r#"{"id":"r1","rows":0,"columns":3}"#);
        assert!(err.is_err());

        let room: Room = serde_json::from_str(r#"{"id":"r1","rows":2,"columns":3}"#).unwrap();
        assert_eq!(room.capacity(), 6);
    }

    #[test]
    fn candidate_group_defaults_to_empty() {
        let c: Candidate = serde_json::from_str(r#"{"id":"S1","name":"Ada"}"#).unwrap();
        assert_eq!(c.display_name, "Ada");
        assert_eq!(c.group, "");
    }
}
