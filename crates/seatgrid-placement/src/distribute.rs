//! Room distribution: splits one exam's candidate list across its rooms.
//!
//! Rooms are filled in the order given, each up to its `capacity` (or its
//! grid size, if that is smaller).
//! Candidates with an empty id, or whose id already landed in an earlier
//! room, are skipped. Whatever does not fit is returned as overflow.

use std::collections::HashSet;

use seatgrid_core::{Candidate, Room, RoomAssignment};
use tracing::{debug, warn};

/// Result of distributing candidates across rooms.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub assignments: Vec<RoomAssignment>,
    /// Candidates that found no room, in input order.
    pub overflow: Vec<Candidate>,
    /// Candidates dropped for an empty or repeated id.
    pub skipped: usize,
}

impl Distribution {
    pub fn assigned_count(&self) -> usize {
        self.assignments.iter().map(|a| a.roster.len()).sum()
    }

    /// Seats the rooms can admit in total.
    pub fn supply(&self) -> usize {
        self.assignments.iter().map(|a| admissible(&a.room)).sum()
    }
}

/// A room admits up to its capacity, and never more than its grid holds.
fn admissible(room: &Room) -> usize {
    (room.capacity() as usize).min(room.seat_count())
}

/// Fill `rooms` in order from `candidates`.
pub fn distribute(candidates: &[Candidate], rooms: &[Room]) -> Distribution {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut unique = Vec::with_capacity(candidates.len());
    let mut skipped = 0;
    for candidate in candidates {
        if candidate.id.is_empty() || !seen.insert(candidate.id.as_str()) {
            skipped += 1;
            continue;
        }
        unique.push(candidate);
    }

    let mut pending = unique.into_iter();
    let mut assignments = Vec::with_capacity(rooms.len());
    for room in rooms {
        let take = admissible(room);
        let roster: Vec<Candidate> = pending.by_ref().take(take).cloned().collect();
        debug!(room = %room.id, assigned = roster.len(), capacity = take, "room filled");
        assignments.push(RoomAssignment::new(room.clone(), roster));
    }

    let overflow: Vec<Candidate> = pending.cloned().collect();
    if !overflow.is_empty() {
        warn!(
            overflow = overflow.len(),
            "not enough room capacity for every candidate"
        );
    }
    if skipped > 0 {
        debug!(skipped, "skipped candidates with empty or duplicate ids");
    }

    Distribution {
        assignments,
        overflow,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidates(ids: &[&str]) -> Vec<Candidate> {
        ids.iter().map(|id| Candidate::new(*id, *id, "G")).collect()
    }

    fn make_room(id: &str, capacity: u32) -> Room {
        Room::new(id, 4, 4, capacity).unwrap()
    }

    #[test]
    fn fills_rooms_in_order() {
        let cs = make_candidates(&["a", "b", "c", "d", "e"]);
        let rooms = vec![make_room("r1", 2), make_room("r2", 4)];
        let dist = distribute(&cs, &rooms);

        let r1: Vec<&str> = dist.assignments[0].roster.iter().map(|c| c.id.as_str()).collect();
        let r2: Vec<&str> = dist.assignments[1].roster.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(r1, vec!["a", "b"]);
        assert_eq!(r2, vec!["c", "d", "e"]);
        assert!(dist.overflow.is_empty());
        assert_eq!(dist.assigned_count(), 5);
        assert_eq!(dist.supply(), 6);
    }

    #[test]
    fn duplicates_and_blank_ids_are_skipped() {
        let cs = make_candidates(&["a", "", "a", "b"]);
        let dist = distribute(&cs, &[make_room("r1", 10)]);
        assert_eq!(dist.assignments[0].roster.len(), 2);
        assert_eq!(dist.skipped, 2);
    }

    #[test]
    fn overflow_is_reported() {
        let cs = make_candidates(&["a", "b", "c"]);
        let dist = distribute(&cs, &[make_room("r1", 2)]);
        assert_eq!(dist.overflow.len(), 1);
        assert_eq!(dist.overflow[0].id, "c");
    }

    #[test]
    fn capacity_above_grid_size_is_clamped() {
        let cs = make_candidates(&["a", "b", "c"]);
        let room = Room::new("r1", 1, 2, 10).unwrap();
        let dist = distribute(&cs, &[room]);
        assert_eq!(dist.assignments[0].roster.len(), 2);
        assert_eq!(dist.overflow.len(), 1);
    }

    #[test]
    fn no_rooms_overflows_everyone() {
        let cs = make_candidates(&["a", "b"]);
        let dist = distribute(&cs, &[]);
        assert!(dist.assignments.is_empty());
        assert_eq!(dist.overflow.len(), 2);
    }
}
