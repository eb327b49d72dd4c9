//! Adjacency-avoiding placement.
//!
//! Seats are visited in row-major order. For each seat the groups of the
//! occupied seat directly above and the occupied seat directly to the left
//! are excluded, and the first remaining group in first-seen order gives
//! up its next candidate. If every group with members left is excluded,
//! the seat stays empty. Candidates still waiting after the last seat make
//! the whole room [`SeatingError::Infeasible`].

use seatgrid_core::{Room, SeatGrid, SeatingError, SeatingResult};
use tracing::warn;

use super::SeatingStrategy;
use crate::partition::Roster;

#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacencyAvoiding;

impl SeatingStrategy for AdjacencyAvoiding {
    fn name(&self) -> &str {
        "adjacency-avoiding"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        let mut queues = roster.queues();
        let columns = room.columns() as usize;

        // Group index seated at each cell, row-major.
        let mut seated: Vec<Option<usize>> = vec![None; room.seat_count()];

        for row in 1..=room.rows() {
            for column in 1..=room.columns() {
                if queues.remaining() == 0 {
                    break;
                }
                let cell = (row as usize - 1) * columns + (column as usize - 1);
                let above = if row > 1 { seated[cell - columns] } else { None };
                let left = if column > 1 { seated[cell - 1] } else { None };

                let pick = queues.first_available(|g| Some(g) != above && Some(g) != left);
                let Some(group) = pick else { continue };
                if let Some(candidate) = queues.pop(group) {
                    grid.assign(row, column, candidate.id.clone());
                    seated[cell] = Some(group);
                }
            }
        }

        let unassigned = queues.remaining();
        if unassigned > 0 {
            warn!(
                room = %room.id,
                unassigned,
                "adjacency constraints left candidates unseated"
            );
            return Err(SeatingError::Infeasible {
                room_id: room.id.clone(),
                unassigned,
            });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    fn same_group_neighbours(grid: &SeatGrid, group_of: impl Fn(&str) -> String) -> usize {
        let mut count = 0;
        for seat in grid.occupied() {
            let Some(id) = seat.candidate_id.as_deref() else { continue };
            let g = group_of(id);
            if let Some(up) = grid.occupant(seat.row.wrapping_sub(1), seat.column) {
                count += usize::from(group_of(up) == g);
            }
            if let Some(left) = grid.occupant(seat.row, seat.column.wrapping_sub(1)) {
                count += usize::from(group_of(left) == g);
            }
        }
        count
    }

    #[test]
    fn alternates_two_groups_like_a_checkerboard() {
        let room = make_room(2, 2);
        let cs = make_candidates(&[("x1", "X"), ("x2", "X"), ("y1", "Y"), ("y2", "Y")]);
        let grid = AdjacencyAvoiding.place(&room, &Roster::partition(&cs)).unwrap();
        assert_eq!(layout(&grid), vec!["x1", "y1", "y2", "x2"]);
    }

    #[test]
    fn no_group_sits_above_or_left_of_itself() {
        let room = make_room(4, 4);
        let cs = make_candidates(&[
            ("a1", "A"),
            ("b1", "B"),
            ("c1", "C"),
            ("a2", "A"),
            ("b2", "B"),
            ("c2", "C"),
            ("a3", "A"),
            ("b3", "B"),
            ("c3", "C"),
            ("a4", "A"),
            ("b4", "B"),
        ]);
        let grid = AdjacencyAvoiding.place(&room, &Roster::partition(&cs)).unwrap();
        assert_eq!(grid.occupied_count(), 11);
        assert_eq!(same_group_neighbours(&grid, |id| id[..1].to_string()), 0);
    }

    #[test]
    fn single_group_row_is_infeasible() {
        // Seat 1 takes x1, seat 2 is blocked by x1, seat 3 has an empty
        // left neighbour and takes x2.
        let room = make_room(1, 3);
        let cs = make_candidates(&[("x1", "X"), ("x2", "X"), ("x3", "X")]);
        let err = AdjacencyAvoiding.place(&room, &Roster::partition(&cs)).unwrap_err();
        assert_eq!(
            err,
            SeatingError::Infeasible {
                room_id: "room-1".to_string(),
                unassigned: 1
            }
        );
    }

    #[test]
    fn single_group_overflow_counts_every_unseated_candidate() {
        let room = make_room(1, 3);
        let cs = make_candidates(&[("x1", "X"), ("x2", "X"), ("x3", "X"), ("x4", "X")]);
        let err = AdjacencyAvoiding.place(&room, &Roster::partition(&cs)).unwrap_err();
        assert!(matches!(err, SeatingError::Infeasible { unassigned: 2, .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn blocked_seat_is_left_empty_while_others_wait() {
        let room = make_room(2, 2);
        let cs = make_candidates(&[("x1", "X"), ("y1", "Y"), ("x2", "X")]);
        let grid = AdjacencyAvoiding.place(&room, &Roster::partition(&cs)).unwrap();
        // (1,1)=x1, (1,2)=y1, (2,1): above X -> Y exhausted -> empty, (2,2): above Y -> x2.
        assert_eq!(layout(&grid), vec!["x1", "y1", "-", "x2"]);
    }

    #[test]
    fn empty_roster_is_feasible() {
        let grid = AdjacencyAvoiding.place(&make_room(3, 3), &Roster::partition(&[])).unwrap();
        assert_eq!(grid.occupied_count(), 0);
    }
}
