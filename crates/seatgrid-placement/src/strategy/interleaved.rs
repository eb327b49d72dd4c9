//! Interleaved row-major placement.
//!
//! Builds one sequence by taking the first member of every group in
//! first-seen order, then the second member of every group, and so on,
//! and pours it into the grid row by row.

use seatgrid_core::{Candidate, Room, SeatGrid, SeatingResult};

use super::{SeatingStrategy, fill_row_major};
use crate::partition::Roster;

#[derive(Debug, Clone, Copy, Default)]
pub struct Interleaved;

impl Interleaved {
    /// The round-robin sequence for `roster`.
    pub fn sequence<'a>(roster: &Roster<'a>) -> Vec<&'a Candidate> {
        let longest = roster.groups().iter().map(|g| g.members.len()).max().unwrap_or(0);
        let mut out = Vec::with_capacity(roster.candidate_count());
        for i in 0..longest {
            out.extend(roster.groups().iter().filter_map(|g| g.members.get(i).copied()));
        }
        out
    }
}

impl SeatingStrategy for Interleaved {
    fn name(&self) -> &str {
        "interleaved"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        fill_row_major(&mut grid, Self::sequence(roster));
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn sequence_round_robins_groups() {
        let cs = make_candidates(&[("x1", "X"), ("x2", "X"), ("x3", "X"), ("y1", "Y"), ("z1", "Z")]);
        let roster = Roster::partition(&cs);
        let ids: Vec<&str> = Interleaved::sequence(&roster).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["x1", "y1", "z1", "x2", "x3"]);
    }

    #[test]
    fn fills_row_major() {
        let cs = make_candidates(&[("x1", "X"), ("x2", "X"), ("y1", "Y")]);
        let grid = Interleaved.place(&make_room(2, 2), &Roster::partition(&cs)).unwrap();
        assert_eq!(layout(&grid), vec!["x1", "y1", "x2", "-"]);
    }
}
