use std::{fmt::Debug, ops::RangeInclusive};

use slab::Slab;

use crate::{
    events::SweepPoint,
    segments::{above, Segment},
    utils::Precision,
};

/// An entry of the sweep status: a segment key and the point at which
/// the segment (re-)entered the status.
///
/// The sweep key is created fresh on every insertion; the segment in
/// storage is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Active {
    pub segment: usize,
    pub sweep_key: SweepPoint,
}

/// Segments crossing the sweep line, ordered top to bottom.
///
/// Ranks count from the top (rank `0` is the highest segment). A rank
/// is only meaningful until the next `insert` or `remove`.
///
/// Kept as a sorted `Vec`: the rank of a new entry is found by binary
/// search, but shifting on insert/remove and the identity lookup in
/// [`SweepStatus::index_of`] are linear in the number of active
/// segments.
#[derive(Debug, Default, Clone)]
pub struct SweepStatus {
    entries: Vec<Active>,
}

impl SweepStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `segment` entering at `sweep_key` and return its rank.
    ///
    /// The new entry goes below every entry it is not [`above`], so
    /// among entries comparing equal the newest one is lowest.
    pub fn insert(
        &mut self,
        segment: &Segment,
        sweep_key: SweepPoint,
        storage: &Slab<Segment>,
        precision: Precision,
    ) -> usize {
        debug_assert!(
            self.index_of(segment.key()).is_none(),
            "segment {} inserted twice",
            segment.key()
        );
        let rank = self
            .entries
            .partition_point(|e| !above(sweep_key, segment, &storage[e.segment], precision));
        self.entries.insert(
            rank,
            Active {
                segment: segment.key(),
                sweep_key,
            },
        );
        rank
    }

    /// Remove the entry of the segment with key `segment`, returning
    /// its rank before removal.
    ///
    /// Matches by identity only: distinct segments may compare equal
    /// at the current sweep position.
    pub fn remove(&mut self, segment: usize) -> Option<usize> {
        let rank = self.index_of(segment)?;
        self.entries.remove(rank);
        Some(rank)
    }

    /// Rank of the segment with key `segment`.
    pub fn index_of(&self, segment: usize) -> Option<usize> {
        self.entries.iter().position(|e| e.segment == segment)
    }

    /// Key of the segment at `rank`.
    pub fn at(&self, rank: usize) -> Option<usize> {
        self.entries.get(rank).map(|e| e.segment)
    }

    /// Keys of the segments directly above and below `rank`.
    pub fn neighbors(&self, rank: usize) -> (Option<usize>, Option<usize>) {
        let prev = rank.checked_sub(1).and_then(|r| self.at(r));
        let next = rank.checked_add(1).and_then(|r| self.at(r));
        (prev, next)
    }

    /// Ranks of the consecutive entries around `rank` whose segments
    /// pass through `point`. The range always includes `rank`.
    pub fn run_through(
        &self,
        rank: usize,
        point: SweepPoint,
        storage: &Slab<Segment>,
        precision: Precision,
    ) -> RangeInclusive<usize> {
        let through = |r: usize| storage[self.entries[r].segment].contains(point, precision);
        let mut first = rank;
        while first > 0 && through(first - 1) {
            first -= 1;
        }
        let mut last = rank;
        while last + 1 < self.entries.len() && through(last + 1) {
            last += 1;
        }
        first..=last
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Segment keys, top to bottom.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.segment)
    }

    pub fn entries(&self) -> &[Active] {
        &self.entries
    }
}
