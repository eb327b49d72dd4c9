//! Seating error types.

use thiserror::Error;

use crate::plan::PlanStatus;

/// Errors that can occur while building or planning seats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatingError {
    /// A room grid with zero rows or zero columns.
    #[error("invalid room dimensions: {rows} rows x {columns} columns")]
    InvalidDimensions { rows: u32, columns: u32 },

    /// A selector that names no known algorithm or alias.
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),

    /// A seat list that does not cover its grid exactly once in row-major order.
    #[error("malformed seat grid: {seats} seats for {rows} rows x {columns} columns")]
    MalformedGrid { rows: u32, columns: u32, seats: usize },

    /// More candidates than the exam's rooms can admit in total.
    #[error("capacity exceeded: {demand} candidates for {supply} seats")]
    CapacityExceeded { demand: usize, supply: usize },

    /// Adjacency constraints left candidates without a seat.
    #[error("room {room_id}: {unassigned} candidates could not be seated without same-group neighbours")]
    Infeasible { room_id: String, unassigned: usize },

    /// A plan status change the lifecycle does not allow.
    #[error("invalid plan status transition: {from} -> {to}")]
    InvalidStatusTransition { from: PlanStatus, to: PlanStatus },
}

impl SeatingError {
    /// Whether a caller may reasonably retry, e.g. with another algorithm.
    ///
    /// Only [`SeatingError::Infeasible`] qualifies; everything else is a
    /// caller error that retrying unchanged would reproduce.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SeatingError::Infeasible { .. })
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
