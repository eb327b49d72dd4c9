//! Room grid model: the row-major seat matrix of a single room.
//!
//! A [`SeatGrid`] always holds exactly `rows * columns` seats, ordered
//! row 1 left to right, then row 2 left to right, and so on. Strategies
//! may visit seats in any order; they write through [`SeatGrid::assign`]
//! so the stored order never changes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{SeatingError, SeatingResult};
use crate::model::CandidateId;

/// A single seat, 1-based coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub row: u32,
    pub column: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<CandidateId>,
    /// Mirrors `candidate_id.is_none()`; kept explicit for consumers of the JSON form.
    pub is_empty: bool,
}

impl Seat {
    pub fn empty(row: u32, column: u32) -> Self {
        Self {
            row,
            column,
            candidate_id: None,
            is_empty: true,
        }
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty
    }
}

/// Full seat matrix of one room, including empty seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeatGridFields")]
pub struct SeatGrid {
    rows: u32,
    columns: u32,
    seats: Vec<Seat>,
}

impl SeatGrid {
    /// Build an all-empty grid in row-major order.
    pub fn empty(rows: u32, columns: u32) -> SeatingResult<Self> {
        if rows < 1 || columns < 1 {
            return Err(SeatingError::InvalidDimensions { rows, columns });
        }
        let seats = (1..=rows)
            .flat_map(|row| (1..=columns).map(move |column| Seat::empty(row, column)))
            .collect();
        Ok(Self { rows, columns, seats })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Seat> {
        self.seats.iter()
    }

    fn index(&self, row: u32, column: u32) -> Option<usize> {
        if row < 1 || row > self.rows || column < 1 || column > self.columns {
            return None;
        }
        Some((row as usize - 1) * self.columns as usize + (column as usize - 1))
    }

    /// Seat at `(row, column)`, or `None` outside the grid.
    pub fn get(&self, row: u32, column: u32) -> Option<&Seat> {
        self.index(row, column).map(|i| &self.seats[i])
    }

    /// Candidate seated at `(row, column)`, if any.
    pub fn occupant(&self, row: u32, column: u32) -> Option<&str> {
        self.get(row, column).and_then(|s| s.candidate_id.as_deref())
    }

    /// Seat a candidate. Returns `false` when the coordinate is off-grid.
    pub fn assign(&mut self, row: u32, column: u32, candidate_id: impl Into<CandidateId>) -> bool {
        match self.index(row, column) {
            Some(i) => {
                let seat = &mut self.seats[i];
                seat.candidate_id = Some(candidate_id.into());
                seat.is_empty = false;
                true
            }
            None => false,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.seats.len() - self.occupied_count()
    }

    /// Occupied seats in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_occupied())
    }

    /// Whether every coordinate appears exactly once, in row-major order,
    /// and no candidate holds two seats.
    pub fn is_well_formed(&self) -> bool {
        if self.seats.len() != self.rows as usize * self.columns as usize {
            return false;
        }
        let mut seen = HashSet::new();
        for (i, seat) in self.seats.iter().enumerate() {
            let row = (i / self.columns as usize) as u32 + 1;
            let column = (i % self.columns as usize) as u32 + 1;
            if seat.row != row || seat.column != column {
                return false;
            }
            if seat.is_empty != seat.candidate_id.is_none() {
                return false;
            }
            if let Some(id) = &seat.candidate_id {
                if !seen.insert(id.as_str()) {
                    return false;
                }
            }
        }
        true
    }
}

#[derive(Deserialize)]
struct SeatGridFields {
    rows: u32,
    columns: u32,
    seats: Vec<Seat>,
}

impl TryFrom<SeatGridFields> for SeatGrid {
    type Error = SeatingError;

    fn try_from(fields: SeatGridFields) -> SeatingResult<Self> {
        if fields.rows < 1 || fields.columns < 1 {
            return Err(SeatingError::InvalidDimensions {
                rows: fields.rows,
                columns: fields.columns,
            });
        }
        let grid = SeatGrid {
            rows: fields.rows,
            columns: fields.columns,
            seats: fields.seats,
        };
        if !grid.is_well_formed() {
            return Err(SeatingError::MalformedGrid {
                rows: grid.rows,
                columns: grid.columns,
                seats: grid.seats.len(),
            });
        }
        Ok(grid)
    }
}

impl<'a> IntoIterator for &'a SeatGrid {
    type Item = &'a Seat;
    type IntoIter = std::slice::Iter<'a, Seat>;

    fn into_iter(self) -> Self::IntoIter {
        self.seats.iter()
    }
}
