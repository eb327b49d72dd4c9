//! Per-room seating statistics.

use std::collections::{HashMap, HashSet};

use seatgrid_core::{Candidate, RoomStats, SeatGrid};

/// Occupancy and same-group adjacency for a placed grid.
///
/// `roster` supplies the group of every seated candidate; seats whose
/// candidate is not in the roster count as occupied but never as a
/// same-group neighbour.
pub fn room_stats(grid: &SeatGrid, roster: &[Candidate]) -> RoomStats {
    let group_of: HashMap<&str, &str> = roster
        .iter()
        .map(|c| (c.id.as_str(), c.group.as_str()))
        .collect();
    let group_at = |row: u32, column: u32| {
        grid.occupant(row, column)
            .and_then(|id| group_of.get(id).copied())
    };

    let mut groups = HashSet::new();
    let mut same_group_neighbours = 0;
    for seat in grid.occupied() {
        let Some(group) = group_at(seat.row, seat.column) else { continue };
        groups.insert(group);
        // Count each pair once: look right and down only.
        if group_at(seat.row, seat.column + 1) == Some(group) {
            same_group_neighbours += 1;
        }
        if group_at(seat.row + 1, seat.column) == Some(group) {
            same_group_neighbours += 1;
        }
    }

    let occupied = grid.occupied_count();
    RoomStats {
        occupied,
        empty: grid.len() - occupied,
        groups: groups.len(),
        same_group_neighbours,
    }
}
