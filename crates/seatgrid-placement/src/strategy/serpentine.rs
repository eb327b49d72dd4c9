//! Serpentine placement with round-robin group interleaving.
//!
//! Rows are walked boustrophedon style: row 1 left to right, row 2 right
//! to left, and so on. A persistent cursor over the first-seen group order
//! picks the group for each seat; exhausted groups are skipped, and after
//! a pick the cursor moves to the group after the one picked. When every
//! group is exhausted the remaining seats stay empty.
//!
//! Interleaving follows the traversal path only. Seats that touch across
//! a row boundary can still hold the same group.

use seatgrid_core::{Room, SeatGrid, SeatingResult};

use super::SeatingStrategy;
use crate::partition::{GroupQueues, Roster};

#[derive(Debug, Clone, Copy, Default)]
pub struct Serpentine;

impl Serpentine {
    /// Seat coordinates in traversal order.
    pub fn traversal(rows: u32, columns: u32) -> impl Iterator<Item = (u32, u32)> {
        (1..=rows).flat_map(move |row| {
            let forward = row % 2 == 1;
            (0..columns).map(move |i| {
                let column = if forward { i + 1 } else { columns - i };
                (row, column)
            })
        })
    }
}

/// Next group at or after `cursor` (wrapping) that still has members.
fn next_group(queues: &GroupQueues<'_, '_>, cursor: usize) -> Option<usize> {
    let n = queues.group_count();
    (0..n)
        .map(|offset| (cursor + offset) % n)
        .find(|&g| !queues.is_exhausted(g))
}

impl SeatingStrategy for Serpentine {
    fn name(&self) -> &str {
        "serpentine"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        let mut queues = roster.queues();
        let group_count = queues.group_count();
        let mut cursor = 0;

        for (row, column) in Self::traversal(room.rows(), room.columns()) {
            let Some(group) = next_group(&queues, cursor) else { break };
            if let Some(candidate) = queues.pop(group) {
                grid.assign(row, column, candidate.id.clone());
            }
            cursor = (group + 1) % group_count;
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn traversal_snakes() {
        let path: Vec<(u32, u32)> = Serpentine::traversal(3, 2).collect();
        assert_eq!(path, vec![(1, 1), (1, 2), (2, 2), (2, 1), (3, 1), (3, 2)]);
    }

    #[test]
    fn two_by_two_scenario() {
        let room = make_room(2, 2);
        let cs = make_candidates(&[("A1", "deptX"), ("A2", "deptX"), ("A3", "deptY")]);
        let grid = Serpentine.place(&room, &Roster::partition(&cs)).unwrap();

        assert_eq!(grid.occupant(1, 1), Some("A1"));
        assert_eq!(grid.occupant(1, 2), Some("A3"));
        assert_eq!(grid.occupant(2, 2), Some("A2"));
        assert_eq!(grid.occupant(2, 1), None);
    }

    #[test]
    fn round_robin_skips_exhausted_groups() {
        // X:3, Y:1, Z:2 along a 1x6 path.
        let room = make_room(1, 6);
        let cs = make_candidates(&[
            ("x1", "X"),
            ("x2", "X"),
            ("x3", "X"),
            ("y1", "Y"),
            ("z1", "Z"),
            ("z2", "Z"),
        ]);
        let grid = Serpentine.place(&room, &Roster::partition(&cs)).unwrap();
        assert_eq!(layout(&grid), vec!["x1", "y1", "z1", "x2", "z2", "x3"]);
    }

    #[test]
    fn seats_everyone_that_fits() {
        let room = make_room(3, 3);
        let cs = make_candidates(&[
            ("a", "X"),
            ("b", "X"),
            ("c", "X"),
            ("d", "X"),
            ("e", "Y"),
            ("f", "Z"),
            ("g", "X"),
        ]);
        let grid = Serpentine.place(&room, &Roster::partition(&cs)).unwrap();
        assert_eq!(grid.occupied_count(), 7);
        assert!(grid.is_well_formed());
    }

    #[test]
    fn empty_roster_yields_empty_grid() {
        let grid = Serpentine.place(&make_room(2, 2), &Roster::partition(&[])).unwrap();
        assert_eq!(grid.occupied_count(), 0);
    }
}
