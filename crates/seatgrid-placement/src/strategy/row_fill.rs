//! Row-major fill bounded by the grid size.
//!
//! Seats candidates group by group, in first-seen order, row 1 left to
//! right, then row 2, until the grid or the roster runs out. With an empty
//! roster this is the all-empty grid the assembler emits for rooms nobody
//! was assigned to.

use seatgrid_core::{Room, SeatGrid, SeatingResult};

use super::{SeatingStrategy, fill_row_major};
use crate::partition::Roster;

#[derive(Debug, Clone, Copy, Default)]
pub struct RowFill;

impl SeatingStrategy for RowFill {
    fn name(&self) -> &str {
        "row-fill"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        let sequence = roster.groups().iter().flat_map(|g| g.members.iter().copied());
        fill_row_major(&mut grid, sequence);
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn empty_roster_gives_all_empty_row_major_grid() {
        let grid = RowFill.place(&make_room(2, 3), &Roster::partition(&[])).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.is_well_formed());
    }

    #[test]
    fn fills_by_group_then_row() {
        let cs = make_candidates(&[("x1", "X"), ("y1", "Y"), ("x2", "X")]);
        let grid = RowFill.place(&make_room(2, 2), &Roster::partition(&cs)).unwrap();
        assert_eq!(layout(&grid), vec!["x1", "x2", "y1", "-"]);
    }
}
