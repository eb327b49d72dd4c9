//! Plan assembler. Runs one strategy over every room of an exam.
//!
//! 1. Checks total demand against total capacity before any placement
//! 2. Partitions each room's roster and applies the chosen strategy
//!    (rooms with nobody assigned get an all-empty grid)
//! 3. Collects the per-room grids into a draft [`SeatingPlan`]
//!
//! The first infeasible room, in room order, fails the whole plan. There
//! is no fallback to another strategy; that is the caller's call.

use rayon::prelude::*;
use seatgrid_core::{
    Algorithm, PlanRoom, RoomAssignment, SeatingError, SeatingPlan, SeatingResult,
};
use tracing::{debug, info, warn};

use crate::partition::Roster;
use crate::stats::room_stats;
use crate::strategy::{RowFill, SeatingStrategy, strategy_for};

/// Builds seating plans with a fixed algorithm.
#[derive(Debug, Clone, Copy)]
pub struct PlanAssembler {
    algorithm: Algorithm,
    seed: u64,
    parallel: bool,
}

impl PlanAssembler {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            seed: 0,
            parallel: false,
        }
    }

    /// Parse a selector string; unknown selectors fail with `InvalidAlgorithm`.
    pub fn from_selector(selector: &str) -> SeatingResult<Self> {
        Ok(Self::new(selector.parse()?))
    }

    /// Base seed for randomized strategies. Room `i` uses `seed + i`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Plan rooms on the rayon pool instead of one after another.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Assemble a draft plan for `exam_id`.
    pub fn assemble(&self, exam_id: &str, rooms: &[RoomAssignment]) -> SeatingResult<SeatingPlan> {
        check_capacity(exam_id, rooms)?;

        let planned: Vec<PlanRoom> = if self.parallel {
            let results: Vec<SeatingResult<PlanRoom>> = rooms
                .par_iter()
                .enumerate()
                .map(|(index, assignment)| self.plan_room(index, assignment))
                .collect();
            results.into_iter().collect::<SeatingResult<_>>()?
        } else {
            rooms
                .iter()
                .enumerate()
                .map(|(index, assignment)| self.plan_room(index, assignment))
                .collect::<SeatingResult<_>>()?
        };

        let plan = SeatingPlan::draft(exam_id, self.algorithm, planned);
        let totals = plan.totals();
        info!(
            exam = exam_id,
            algorithm = %self.algorithm,
            rooms = plan.rooms.len(),
            seated = totals.occupied,
            same_group_neighbours = totals.same_group_neighbours,
            "seating plan assembled"
        );
        Ok(plan)
    }

    fn plan_room(&self, index: usize, assignment: &RoomAssignment) -> SeatingResult<PlanRoom> {
        let room = &assignment.room;
        let roster = Roster::partition(&assignment.roster);

        let grid = if roster.is_empty() {
            RowFill.place(room, &roster)?
        } else {
            let strategy = strategy_for(self.algorithm, self.seed.wrapping_add(index as u64));
            strategy.place(room, &roster)?
        };

        let stats = room_stats(&grid, &assignment.roster);
        debug!(
            room = %room.id,
            groups = roster.group_count(),
            occupied = stats.occupied,
            empty = stats.empty,
            "room planned"
        );

        Ok(PlanRoom {
            room_id: room.id.clone(),
            name: room.name.clone(),
            building: room.building.clone(),
            rows: room.rows(),
            columns: room.columns(),
            capacity: room.capacity(),
            invigilators: assignment.invigilators.clone(),
            stats,
            grid,
        })
    }
}

/// Demand must fit total capacity, and every roster must fit its own grid.
fn check_capacity(exam_id: &str, rooms: &[RoomAssignment]) -> SeatingResult<()> {
    let demand: usize = rooms.iter().map(|a| a.roster.len()).sum();
    let supply: usize = rooms.iter().map(|a| a.room.capacity() as usize).sum();
    if demand > supply {
        warn!(exam = exam_id, demand, supply, "candidates exceed total room capacity");
        return Err(SeatingError::CapacityExceeded { demand, supply });
    }

    for assignment in rooms {
        let seats = assignment.room.seat_count();
        if assignment.roster.len() > seats {
            warn!(
                exam = exam_id,
                room = %assignment.room.id,
                roster = assignment.roster.len(),
                seats,
                "roster does not fit the room grid"
            );
            return Err(SeatingError::CapacityExceeded {
                demand: assignment.roster.len(),
                supply: seats,
            });
        }
    }
    Ok(())
}

/// Assemble a plan from a selector string.
///
/// Fails with `InvalidAlgorithm` before looking at any room.
pub fn assemble_plan(exam_id: &str, rooms: &[RoomAssignment], algorithm: &str) -> SeatingResult<SeatingPlan> {
    PlanAssembler::from_selector(algorithm)?.assemble(exam_id, rooms)
}
