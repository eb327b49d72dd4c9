//! seatgrid-core: data model for exam seating.
//!
//! Rooms, candidates, seat grids, and assembled plans, plus the error
//! taxonomy and the exam request file format. Everything here is plain
//! data; the placement algorithms live in `seatgrid-placement`.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod plan;

pub use algorithm::Algorithm;
pub use config::SeatingConfig;
pub use error::{SeatingError, SeatingResult};
pub use grid::{Seat, SeatGrid};
pub use model::*;
pub use plan::{PlanRoom, PlanStatus, RoomStats, SeatingPlan};
