use std::{collections::BTreeSet, iter::FromIterator};

use crate::events::Event;

/// Pending events of a sweep.
///
/// An ordered set: events pop smallest first (see [`Event`]'s
/// ordering), and inserting an event equal to a pending one is a
/// no-op. Backed by a `BTreeSet`, so insert, pop and cancel are all
/// O(log n).
#[derive(Debug, Default, Clone)]
pub struct EventQueue {
    events: BTreeSet<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event`. Returns `false` if an equal event was already
    /// pending, in which case the queue is unchanged.
    pub fn insert(&mut self, event: Event) -> bool {
        self.events.insert(event)
    }

    /// Remove and return the smallest pending event.
    pub fn pop_min(&mut self) -> Option<Event> {
        self.events.pop_first()
    }

    /// Remove the pending event equal to `event`, if any.
    ///
    /// Returns whether something was removed. Safe to call for events
    /// that were never scheduled.
    pub fn cancel(&mut self, event: &Event) -> bool {
        self.events.remove(event)
    }

    pub fn peek(&self) -> Option<&Event> {
        self.events.iter().next()
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.contains(event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }
}

impl FromIterator<Event> for EventQueue {
    fn from_iter<T: IntoIterator<Item = Event>>(iter: T) -> Self {
        EventQueue {
            events: iter.into_iter().collect(),
        }
    }
}

impl Extend<Event> for EventQueue {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.events.extend(iter)
    }
}
