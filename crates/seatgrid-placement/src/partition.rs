//! Roster partitioning by group.
//!
//! Groups are kept in first-seen order and members in roster order, so
//! every strategy that walks "the groups" produces the same output for
//! the same input order. Nothing here depends on hash iteration order.

use std::collections::HashMap;

use seatgrid_core::Candidate;

/// Candidates of one group, in roster order.
#[derive(Debug, Clone)]
pub struct Group<'a> {
    pub name: &'a str,
    pub members: Vec<&'a Candidate>,
}

/// A roster split by group.
#[derive(Debug, Clone, Default)]
pub struct Roster<'a> {
    groups: Vec<Group<'a>>,
    by_name: HashMap<&'a str, usize>,
}

impl<'a> Roster<'a> {
    /// Partition `candidates` by `group`. Never fails; empty in, empty out.
    pub fn partition(candidates: &'a [Candidate]) -> Self {
        let mut roster = Roster::default();
        for candidate in candidates {
            let name = candidate.group.as_str();
            let idx = match roster.by_name.get(name) {
                Some(&idx) => idx,
                None => {
                    roster.groups.push(Group {
                        name,
                        members: Vec::new(),
                    });
                    let idx = roster.groups.len() - 1;
                    roster.by_name.insert(name, idx);
                    idx
                }
            };
            roster.groups[idx].members.push(candidate);
        }
        roster
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    /// Distinct group names in first-seen order.
    pub fn group_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.name)
    }

    pub fn get(&self, name: &str) -> Option<&Group<'a>> {
        self.by_name.get(name).map(|&i| &self.groups[i])
    }

    /// Position of `name` in first-seen order.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.groups.iter().map(|g| g.members.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Fresh FIFO queues over this roster.
    pub fn queues(&self) -> GroupQueues<'_, 'a> {
        GroupQueues {
            roster: self,
            cursors: vec![0; self.groups.len()],
        }
    }
}

/// Per-call FIFO queues over a [`Roster`], one index cursor per group.
///
/// The roster itself is never mutated, so queues for different rooms or
/// different strategies never alias.
#[derive(Debug, Clone)]
pub struct GroupQueues<'r, 'a> {
    roster: &'r Roster<'a>,
    cursors: Vec<usize>,
}

impl<'r, 'a> GroupQueues<'r, 'a> {
    pub fn group_count(&self) -> usize {
        self.cursors.len()
    }

    pub fn group_name(&self, group: usize) -> &'a str {
        self.roster.groups[group].name
    }

    pub fn is_exhausted(&self, group: usize) -> bool {
        self.cursors[group] >= self.roster.groups[group].members.len()
    }

    /// Next candidate of `group` without consuming it.
    pub fn peek(&self, group: usize) -> Option<&'a Candidate> {
        self.roster.groups[group].members.get(self.cursors[group]).copied()
    }

    /// Consume the next candidate of `group`.
    pub fn pop(&mut self, group: usize) -> Option<&'a Candidate> {
        let next = self.peek(group)?;
        self.cursors[group] += 1;
        Some(next)
    }

    /// Candidates not yet consumed, across all groups.
    pub fn remaining(&self) -> usize {
        self.roster
            .groups
            .iter()
            .zip(&self.cursors)
            .map(|(g, &c)| g.members.len().saturating_sub(c))
            .sum()
    }

    /// First non-exhausted group in first-seen order accepted by `allow`.
    pub fn first_available(&self, mut allow: impl FnMut(usize) -> bool) -> Option<usize> {
        (0..self.cursors.len()).find(|&g| !self.is_exhausted(g) && allow(g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_candidates(pairs: &[(&str, &str)]) -> Vec<Candidate> {
        pairs.iter()
            .map(|(id, group)| Candidate::new(*id, *id, *group))
            .collect()
    }

    #[test]
    fn groups_follow_first_seen_order() {
        let cs = make_candidates(&[("a", "Y"), ("b", "X"), ("c", "Y"), ("d", "Z"), ("e", "X")]);
        let roster = Roster::partition(&cs);

        let names: Vec<&str> = roster.group_names().collect();
        assert_eq!(names, vec!["Y", "X", "Z"]);

        let y: Vec<&str> = roster.get("Y").unwrap().members.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(y, vec!["a", "c"]);
        assert_eq!(roster.group_index("Z"), Some(2));
        assert_eq!(roster.candidate_count(), 5);
    }

    #[test]
    fn empty_group_is_its_own_group() {
        let cs = make_candidates(&[("a", ""), ("b", "X"), ("c", "")]);
        let roster = Roster::partition(&cs);
        assert_eq!(roster.group_count(), 2);
        assert_eq!(roster.get("").unwrap().members.len(), 2);
    }

    #[test]
    fn empty_roster() {
        let roster = Roster::partition(&[]);
        assert!(roster.is_empty());
        assert_eq!(roster.group_names().count(), 0);
        assert_eq!(roster.queues().remaining(), 0);
    }

    #[test]
    fn queues_are_fifo_and_independent() {
        let cs = make_candidates(&[("a", "X"), ("b", "X"), ("c", "Y")]);
        let roster = Roster::partition(&cs);

        let mut q1 = roster.queues();
        assert_eq!(q1.pop(0).map(|c| c.id.as_str()), Some("a"));
        assert_eq!(q1.pop(0).map(|c| c.id.as_str()), Some("b"));
        assert_eq!(q1.pop(0), None);
        assert!(q1.is_exhausted(0));
        assert_eq!(q1.remaining(), 1);

        let q2 = roster.queues();
        assert_eq!(q2.remaining(), 3);
        assert_eq!(q2.peek(0).map(|c| c.id.as_str()), Some("a"));
    }

    #[test]
    fn first_available_skips_exhausted_and_filtered() {
        let cs = make_candidates(&[("a", "X"), ("b", "Y"), ("c", "Z")]);
        let roster = Roster::partition(&cs);
        let mut q = roster.queues();
        q.pop(0);

        assert_eq!(q.first_available(|_| true), Some(1));
        assert_eq!(q.first_available(|g| g != 1), Some(2));
        assert_eq!(q.first_available(|_| false), None);
    }
}
