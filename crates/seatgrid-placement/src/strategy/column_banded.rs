//! Column-banded placement.
//!
//! Column `j` belongs to group `groups[j mod len(groups)]`. Each column is
//! filled top to bottom from its group's queue; once that queue runs dry
//! the rest of the column stays empty. Leftover candidates are never moved
//! into another group's column.

use seatgrid_core::{Room, SeatGrid, SeatingResult};

use super::SeatingStrategy;
use crate::partition::Roster;

#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnBanded;

impl SeatingStrategy for ColumnBanded {
    fn name(&self) -> &str {
        "column-banded"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        let group_count = roster.group_count();
        if group_count == 0 {
            return Ok(grid);
        }

        let mut queues = roster.queues();
        for column in 1..=room.columns() {
            let group = (column as usize - 1) % group_count;
            for row in 1..=room.rows() {
                let Some(candidate) = queues.pop(group) else { break };
                grid.assign(row, column, candidate.id.clone());
            }
        }
        Ok(grid)
    }
}
