//! Seeded random placement.
//!
//! The roster is permuted with a [`StdRng`] seeded by the caller and then
//! poured into the grid row by row. The same seed and roster always give
//! the same grid; nothing here reads the clock or thread-local entropy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use seatgrid_core::{Candidate, Room, SeatGrid, SeatingResult};

use super::{SeatingStrategy, fill_row_major};
use crate::partition::Roster;

#[derive(Debug, Clone, Copy, Default)]
pub struct Shuffled {
    seed: u64,
}

impl Shuffled {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SeatingStrategy for Shuffled {
    fn name(&self) -> &str {
        "shuffled"
    }

    fn place(&self, room: &Room, roster: &Roster<'_>) -> SeatingResult<SeatGrid> {
        let mut grid = SeatGrid::empty(room.rows(), room.columns())?;
        let mut order: Vec<&Candidate> = roster
            .groups()
            .iter()
            .flat_map(|g| g.members.iter().copied())
            .collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);
        fill_row_major(&mut grid, order);
        Ok(grid)
    }
}
