//! SeatGrid placement engine. Assigns exam candidates to seats.
//!
//! This crate turns rooms and rosters into seat grids. It does not load
//! or store anything; callers resolve identities and persist the returned
//! plan themselves.
//!
//! # Components
//!
//! - **`partition`**: Roster grouping in first-seen order, FIFO group queues
//! - **`strategy`**: Column-banded, serpentine, adjacency-avoiding,
//!   interleaved, shuffled and row-fill placement
//! - **`assembler`**: Capacity checks and per-room strategy runs across an exam
//! - **`distribute`**: Sequential room filling from one candidate list
//! - **`stats`**: Occupancy and same-group adjacency per room
//!
//! # Example
//!
//! ```
//! use seatgrid_core::{Candidate, Room, RoomAssignment};
//! use seatgrid_placement::assemble_plan;
//!
//! let room = Room::with_grid("hall-a", 2, 2).unwrap();
//! let roster = vec![
//!     Candidate::new("A1", "Ada", "deptX"),
//!     Candidate::new("A2", "Alan", "deptX"),
//!     Candidate::new("A3", "Grace", "deptY"),
//! ];
//! let plan = assemble_plan("exam-1", &[RoomAssignment::new(room, roster)], "serpentine").unwrap();
//! assert_eq!(plan.rooms[0].grid.occupant(1, 2), Some("A3"));
//! ```

pub mod assembler;
pub mod distribute;
pub mod partition;
pub mod stats;
pub mod strategy;

pub use assembler::{PlanAssembler, assemble_plan};
pub use distribute::{Distribution, distribute};
pub use partition::{Group, GroupQueues, Roster};
pub use stats::room_stats;
pub use strategy::{SeatingStrategy, place_seats, strategy_for};
