use std::collections::BTreeSet;

use geo::{Coordinate, Line};
use log::{debug, trace, warn};
use slab::Slab;

use crate::{
    active::SweepStatus,
    error::{Result, SweepError},
    events::{Event, EventKind, SweepPoint},
    queue::EventQueue,
    segments::{intersect, Segment},
    utils::Precision,
};

/// Knobs of a sweep run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Rounding used by every comparison.
    pub precision: Precision,

    /// Maximum number of events to process before giving up. `None`
    /// uses the most a correct sweep over `n` segments can process:
    /// `2n` end points plus one crossing per pair.
    pub max_events: Option<usize>,

    /// Collect a [`Record`] for every status and queue mutation.
    pub record: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            precision: Precision::default(),
            max_events: None,
            record: false,
        }
    }
}

impl SweepConfig {
    pub fn precision(mut self, digits: u32) -> Self {
        self.precision = Precision::new(digits);
        self
    }

    pub fn max_events(mut self, limit: usize) -> Self {
        self.max_events = Some(limit);
        self
    }

    pub fn record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }
}

/// One mutation of the sweep state, collected when
/// [`SweepConfig::record`] is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Insert {
        segment: usize,
        rank: usize,
        key: SweepPoint,
    },
    Remove {
        segment: usize,
        rank: usize,
    },
    Schedule {
        point: SweepPoint,
        above: usize,
        below: usize,
    },
    Cancel {
        point: SweepPoint,
        above: usize,
        below: usize,
    },
}

/// Result of a sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepOutput {
    /// Intersection points in the order they were found.
    pub intersections: Vec<Coordinate<f64>>,

    /// Every processed event, in processing order.
    pub events: Vec<Event>,

    /// Mutation log; empty unless recording was enabled.
    pub records: Vec<Record>,
}

/// Sweep algorithm for detecting all intersections.
///
/// Implements the [Bentley-Ottman] sweep: a vertical line moves left
/// to right over the end points and the crossings found so far, keeps
/// the segments it currently crosses ordered top to bottom, and only
/// tests segments that become adjacent in that order. A crossing is
/// scheduled when its pair becomes adjacent and cancelled when
/// something comes between them first.
///
/// Use [`find_intersections`] for a one-shot run, or drive it with
/// [`Sweep::next_event`] to observe the state between events.
///
/// [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
#[derive(Debug)]
pub struct Sweep {
    segments: Slab<Segment>,
    events: EventQueue,
    active_segments: SweepStatus,
    config: SweepConfig,
    limit: usize,
    processed: usize,
    /// Points already reported.
    found: BTreeSet<SweepPoint>,
    output: SweepOutput,
}

impl Sweep {
    /// Store the segments and schedule their end points.
    ///
    /// Fails on zero-length or non-finite segments; keys are assigned
    /// in input order starting at zero.
    pub fn new<I: IntoIterator<Item = Line<f64>>>(iter: I, config: SweepConfig) -> Result<Self> {
        let iter = iter.into_iter();
        let size = {
            let (min_size, max_size) = iter.size_hint();
            max_size.unwrap_or(min_size)
        };

        let mut segments = Slab::with_capacity(size);
        let mut events = EventQueue::new();
        for line in iter {
            let key = Segment::create_in_slab(&mut segments, line)?;
            events.extend(segments[key].events().iter().copied());
        }

        let limit = config
            .max_events
            .unwrap_or_else(|| event_bound(segments.len()));
        debug!(
            "sweep over {n} segments, at most {limit} events",
            n = segments.len(),
            limit = limit
        );
        Ok(Sweep {
            segments,
            events,
            active_segments: SweepStatus::new(),
            config,
            limit,
            processed: 0,
            found: BTreeSet::new(),
            output: SweepOutput::default(),
        })
    }

    /// Process the next pending event and return it, or `None` once
    /// the queue is exhausted.
    pub fn next_event(&mut self) -> Result<Option<Event>> {
        let event = match self.events.pop_min() {
            Some(event) => event,
            None => return Ok(None),
        };
        if self.processed >= self.limit {
            return Err(SweepError::EventLimit { limit: self.limit });
        }
        self.processed += 1;

        self.handle_event(event)?;
        self.output.events.push(event);
        Ok(Some(event))
    }

    /// Run to completion.
    pub fn run(mut self) -> Result<SweepOutput> {
        while self.next_event()?.is_some() {}
        debug!(
            "sweep done: {k} intersections from {n} events",
            k = self.output.intersections.len(),
            n = self.processed
        );
        Ok(self.output)
    }

    /// Peek and return the next point in the sweep.
    #[inline]
    pub fn peek_point(&self) -> Option<SweepPoint> {
        self.events.peek().map(|e| e.point)
    }

    pub fn segments(&self) -> &Slab<Segment> {
        &self.segments
    }

    pub fn status(&self) -> &SweepStatus {
        &self.active_segments
    }

    pub fn queue(&self) -> &EventQueue {
        &self.events
    }

    /// Intersections reported so far.
    pub fn intersections(&self) -> &[Coordinate<f64>] {
        &self.output.intersections
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        trace!("handling event: {:?}", event);
        match event.kind {
            EventKind::Start { segment } => self.handle_start(event.point, segment),
            EventKind::End { segment } => self.handle_end(event.point, segment),
            EventKind::Intersection { above, below } => {
                self.handle_intersection(event.point, above, below)
            }
        }
    }

    fn handle_start(&mut self, point: SweepPoint, key: usize) -> Result<()> {
        let rank = self.insert_active(key, point)?;
        let (prev, next) = self.active_segments.neighbors(rank);

        // The new segment separates its neighbors. Cancel before
        // scheduling: a new crossing at the same point is the same queue
        // entry and would be cancelled with theirs.
        if let (Some(prev), Some(next)) = (prev, next) {
            self.cancel(prev, next, point);
        }
        if let Some(prev) = prev {
            self.schedule(prev, key, point);
        }
        if let Some(next) = next {
            self.schedule(key, next, point);
        }
        self.report_touch(point, rank);
        Ok(())
    }

    fn handle_end(&mut self, point: SweepPoint, key: usize) -> Result<()> {
        let rank = self.rank_of(key)?;
        self.report_touch(point, rank);
        let (prev, next) = self.active_segments.neighbors(rank);
        self.remove_active(key)?;

        if let (Some(prev), Some(next)) = (prev, next) {
            self.schedule(prev, next, point);
        }
        Ok(())
    }

    /// Swap the segments meeting at `point`.
    ///
    /// Every segment through the point takes part, not only the pair
    /// that scheduled the event: they are removed and re-inserted at
    /// `point`, which sorts them by slope. Doing this twice at the same
    /// point changes nothing.
    fn handle_intersection(&mut self, point: SweepPoint, above: usize, below: usize) -> Result<()> {
        let (upper, lower) = match (
            self.active_segments.index_of(above),
            self.active_segments.index_of(below),
        ) {
            (Some(upper), Some(lower)) => (upper, lower),
            _ => {
                warn!(
                    "skipping crossing at {:?}: segment {} or {} already left",
                    point.coord(),
                    above,
                    below
                );
                return Ok(());
            }
        };
        let run =
            self.active_segments
                .run_through(upper, point, &self.segments, self.config.precision);
        if run.start() == run.end() || !run.contains(&lower) {
            warn!(
                "skipping crossing at {:?}: segments {} and {} are not adjacent",
                point.coord(),
                above,
                below
            );
            return Ok(());
        }
        self.report(point);

        let meeting: Vec<usize> = run
            .clone()
            .filter_map(|rank| self.active_segments.at(rank))
            .collect();
        let (top, bottom) = match (meeting.first(), meeting.last()) {
            (Some(&top), Some(&bottom)) => (top, bottom),
            _ => return Ok(()),
        };

        // The outer neighbors lose their adjacency to the run.
        let (over, _) = self.active_segments.neighbors(*run.start());
        let (_, under) = self.active_segments.neighbors(*run.end());
        if let Some(over) = over {
            self.cancel(over, top, point);
        }
        if let Some(under) = under {
            self.cancel(bottom, under, point);
        }

        for &key in &meeting {
            self.remove_active(key)?;
        }
        for &key in meeting.iter().rev() {
            self.insert_active(key, point)?;
        }
        let ranks = meeting
            .iter()
            .map(|&key| self.rank_of(key))
            .collect::<Result<Vec<_>>>()?;
        let first = ranks.iter().copied().min().unwrap_or(*run.start());
        let last = ranks.iter().copied().max().unwrap_or(*run.end());

        let (over, _) = self.active_segments.neighbors(first);
        if let (Some(over), Some(top)) = (over, self.active_segments.at(first)) {
            self.schedule(over, top, point);
        }
        let (_, under) = self.active_segments.neighbors(last);
        if let (Some(bottom), Some(under)) = (self.active_segments.at(last), under) {
            self.schedule(bottom, under, point);
        }
        Ok(())
    }

    /// The crossing event of `above` and `below`, if they cross after
    /// `sweep`. Scheduling and cancelling both go through here, so a
    /// cancelled event is exactly the one that was scheduled.
    fn crossing(&self, above: usize, below: usize, sweep: SweepPoint) -> Option<Event> {
        let precision = self.config.precision;
        let a = self.segments.get(above)?;
        let b = self.segments.get(below)?;
        let point = intersect(a, b, precision)?;
        if point.is_after(&sweep, precision) {
            Some(Event::intersection(point, above, below))
        } else {
            None
        }
    }

    fn schedule(&mut self, above: usize, below: usize, sweep: SweepPoint) {
        if let Some(event) = self.crossing(above, below, sweep) {
            if self.events.insert(event) {
                debug!(
                    "scheduled crossing of {} and {} at {:?}",
                    above,
                    below,
                    event.point.coord()
                );
                self.record(Record::Schedule {
                    point: event.point,
                    above,
                    below,
                });
            }
        }
    }

    fn cancel(&mut self, above: usize, below: usize, sweep: SweepPoint) {
        if let Some(event) = self.crossing(above, below, sweep) {
            if self.events.cancel(&event) {
                debug!(
                    "cancelled crossing of {} and {} at {:?}",
                    above,
                    below,
                    event.point.coord()
                );
                self.record(Record::Cancel {
                    point: event.point,
                    above,
                    below,
                });
            }
        }
    }

    /// Report `point` unless a point within one resolution of it was
    /// reported already.
    fn report(&mut self, point: SweepPoint) {
        let precision = self.config.precision;
        let r = precision.resolution();
        let lo = SweepPoint::from((point.x() - r, f64::MIN));
        let hi = SweepPoint::from((point.x() + r, f64::MAX));
        let seen = self
            .found
            .range(lo..=hi)
            .any(|q| precision.close(q.y(), point.y()));
        if seen {
            debug!("intersection at {:?} already reported", point.coord());
        } else {
            debug!("intersection at {:?}", point.coord());
            self.found.insert(point);
            self.output.intersections.push(point.coord());
        }
    }

    /// Report `point` if segments of different slopes pass through it
    /// around `rank`: a segment starts or ends on another one.
    fn report_touch(&mut self, point: SweepPoint, rank: usize) {
        let precision = self.config.precision;
        let run = self
            .active_segments
            .run_through(rank, point, &self.segments, precision);
        let mut slopes = run
            .filter_map(|r| self.active_segments.at(r))
            .filter_map(|key| self.segments.get(key))
            .map(|s| precision.round(s.slope()));
        let touching = match slopes.next() {
            Some(first) => slopes.any(|slope| slope != first),
            None => false,
        };
        if touching {
            self.report(point);
        }
    }

    fn rank_of(&self, key: usize) -> Result<usize> {
        self.active_segments
            .index_of(key)
            .ok_or(SweepError::MissingSegment { segment: key })
    }

    fn insert_active(&mut self, key: usize, sweep_key: SweepPoint) -> Result<usize> {
        let segment = self
            .segments
            .get(key)
            .ok_or(SweepError::MissingSegment { segment: key })?;
        let rank =
            self.active_segments
                .insert(segment, sweep_key, &self.segments, self.config.precision);
        trace!("inserted segment {} at rank {}", key, rank);
        self.record(Record::Insert {
            segment: key,
            rank,
            key: sweep_key,
        });
        Ok(rank)
    }

    fn remove_active(&mut self, key: usize) -> Result<usize> {
        let rank = self
            .active_segments
            .remove(key)
            .ok_or(SweepError::MissingSegment { segment: key })?;
        trace!("removed segment {} from rank {}", key, rank);
        self.record(Record::Remove { segment: key, rank });
        Ok(rank)
    }

    fn record(&mut self, record: Record) {
        if self.config.record {
            self.output.records.push(record);
        }
    }
}

/// Most events a sweep over `n` segments processes.
fn event_bound(n: usize) -> usize {
    let pairs = n.saturating_mul(n.saturating_sub(1)) / 2;
    n.saturating_mul(2).saturating_add(pairs)
}

/// Find all intersection points of `lines`.
///
/// Returns the points in discovery order along with the processed
/// event trace.
pub fn find_intersections<I>(lines: I, config: SweepConfig) -> Result<SweepOutput>
where
    I: IntoIterator<Item = Line<f64>>,
{
    Sweep::new(lines, config)?.run()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use geo::Rect;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{
        naive::brute_force_lines,
        random::{integer_lines, uniform_lines},
    };

    pub(crate) fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn lines(coords: &[[f64; 4]]) -> Vec<Line<f64>> {
        coords
            .iter()
            .map(|&[x1, y1, x2, y2]| Line::from([(x1, y1), (x2, y2)]))
            .collect()
    }

    fn sweep(coords: &[[f64; 4]]) -> SweepOutput {
        init_log();
        find_intersections(lines(coords), SweepConfig::default().record(true)).unwrap()
    }

    /// Same points up to the default precision, ignoring order, and no
    /// point reported twice.
    fn assert_same_points(found: &[Coordinate<f64>], expected: &[Coordinate<f64>], context: &str) {
        let p = Precision::default();
        let near = |a: &Coordinate<f64>, b: &Coordinate<f64>| p.close(a.x, b.x) && p.close(a.y, b.y);
        for e in expected {
            assert!(
                found.iter().any(|f| near(f, e)),
                "{}: missing {:?} in {:?}",
                context,
                e,
                found
            );
        }
        for (i, f) in found.iter().enumerate() {
            assert!(
                expected.iter().any(|e| near(f, e)),
                "{}: unexpected {:?}",
                context,
                f
            );
            assert!(
                !found[..i].iter().any(|g| near(f, g)),
                "{}: {:?} reported twice",
                context,
                f
            );
        }
    }

    /// Every pending crossing belongs to a pair that is adjacent, in
    /// the recorded order, right now, or to two segments already
    /// meeting at its point.
    fn assert_no_stale_crossings(sweep: &Sweep) {
        let p = Precision::default();
        for event in sweep.queue().iter() {
            if let EventKind::Intersection { above, below } = event.kind {
                let upper = sweep.status().index_of(above);
                let lower = sweep.status().index_of(below);
                let meeting = sweep.segments()[above].contains(event.point, p)
                    && sweep.segments()[below].contains(event.point, p);
                assert!(
                    matches!((upper, lower), (Some(u), Some(l)) if l == u + 1 || meeting),
                    "stale crossing {:?} with status {:?}",
                    event,
                    sweep.status().keys().collect::<Vec<_>>()
                );
            }
        }
    }

    /// The status holds exactly the segments spanning the sweep line.
    fn assert_status_spans(sweep: &Sweep, at: SweepPoint, started: &BTreeSet<usize>) {
        let active: BTreeSet<_> = sweep.status().keys().collect();
        assert_eq!(&active, started);
        for key in active {
            let segment = &sweep.segments()[key];
            assert!(segment.left().x() <= at.x() && at.x() <= segment.right().x());
        }
    }

    /// Step through a sweep checking the invariants after every event.
    fn checked_sweep(input: Vec<Line<f64>>) -> Vec<Coordinate<f64>> {
        let mut sweep = Sweep::new(input, SweepConfig::default()).unwrap();
        let mut started = BTreeSet::new();
        while let Some(event) = sweep.next_event().unwrap() {
            match event.kind {
                EventKind::Start { segment } => {
                    started.insert(segment);
                }
                EventKind::End { segment } => {
                    started.remove(&segment);
                }
                EventKind::Intersection { .. } => {}
            }
            assert_no_stale_crossings(&sweep);
            assert_status_spans(&sweep, event.point, &started);
        }
        assert!(sweep.status().is_empty());
        sweep.intersections().to_vec()
    }

    #[test]
    fn test_crossing_diagonals() {
        let output = sweep(&[[0., 0., 4., 4.], [0., 4., 4., 0.]]);
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
        assert_eq!(output.events.len(), 5);
    }

    #[test]
    fn test_vertical_crosses_horizontal() {
        let output = sweep(&[[2., 0., 2., 5.], [0., 2., 4., 2.]]);
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
    }

    #[test]
    fn test_disjoint_and_parallel() {
        assert!(sweep(&[[0., 0., 1., 1.], [2., 0., 3., -1.]])
            .intersections
            .is_empty());
        assert!(sweep(&[[0., 0., 4., 0.], [0., 1., 4., 1.]])
            .intersections
            .is_empty());
    }

    #[test]
    fn test_unsorted_end_points() {
        let output = sweep(&[[4., 4., 0., 0.], [4., 0., 0., 4.]]);
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
    }

    #[test]
    fn test_event_trace() {
        let output = sweep(&[[0., 0., 4., 4.], [0., 4., 4., 0.], [1., -1., 3., -1.]]);
        let kinds: Vec<_> = output
            .events
            .iter()
            .map(|e| match e.kind {
                EventKind::Start { .. } => 'S',
                EventKind::End { .. } => 'E',
                EventKind::Intersection { .. } => 'X',
            })
            .collect();
        assert_eq!(kinds, vec!['S', 'S', 'S', 'X', 'E', 'E', 'E']);
        assert!(output.events.windows(2).all(|w| w[0].point <= w[1].point));
    }

    #[test]
    fn test_cancel_when_segment_separates_pair() {
        // The third segment starts between the crossing diagonals and
        // crosses both before they meet.
        let output = sweep(&[[0., 0., 10., 10.], [0., 10., 10., 0.], [2., 5., 10., 6.]]);
        let diagonal = SweepPoint::from((5., 5.));

        let schedules: Vec<_> = output
            .records
            .iter()
            .filter(|r| matches!(r, Record::Schedule { point, .. } if *point == diagonal))
            .collect();
        let cancels: Vec<_> = output
            .records
            .iter()
            .filter(|r| matches!(r, Record::Cancel { point, .. } if *point == diagonal))
            .collect();
        assert_eq!(schedules.len(), 2);
        assert_eq!(
            cancels,
            vec![&Record::Cancel {
                point: diagonal,
                above: 1,
                below: 0
            }]
        );

        assert_eq!(output.intersections.len(), 3);
        assert_eq!(output.intersections[1], Coordinate { x: 5., y: 5. });
        assert_eq!(output.events.len(), 9);
    }

    #[test]
    fn test_records_insert_and_remove() {
        let output = sweep(&[[0., 0., 4., 4.], [0., 4., 4., 0.]]);
        let inserts = output
            .records
            .iter()
            .filter(|r| matches!(r, Record::Insert { .. }))
            .count();
        let removes = output
            .records
            .iter()
            .filter(|r| matches!(r, Record::Remove { .. }))
            .count();
        // Two starts, and one remove/insert pair per swapped segment.
        assert_eq!(inserts, 4);
        assert_eq!(removes, 4);
        assert!(output.records.contains(&Record::Insert {
            segment: 1,
            rank: 0,
            key: (0., 4.).into()
        }));
    }

    #[test]
    fn test_records_off_by_default() {
        let output =
            find_intersections(lines(&[[0., 0., 4., 4.], [0., 4., 4., 0.]]), SweepConfig::default())
                .unwrap();
        assert!(output.records.is_empty());
        assert_eq!(output.intersections.len(), 1);
    }

    #[test]
    fn test_shared_start_point() {
        // Segments fanning out from one point meet there, then a later
        // line crosses all of them.
        let output = sweep(&[
            [0., 0., 10., 0.],
            [0., 0., 10., 5.],
            [0., 0., 10., 10.],
            [5., -1., 5.5, 12.],
        ]);
        assert_eq!(output.intersections.len(), 4);
        assert_eq!(output.intersections[0], Coordinate { x: 0., y: 0. });
        assert_eq!(
            output
                .events
                .iter()
                .filter(|e| matches!(e.kind, EventKind::Start { .. }))
                .count(),
            4
        );
    }

    #[test]
    fn test_touching_end_points() {
        let single = |coords: &[[f64; 4]], x: f64, y: f64| {
            let output = sweep(coords);
            assert_eq!(output.intersections, vec![Coordinate { x, y }], "{:?}", coords);
        };
        // Shared right end, where the computed point is off by rounding.
        single(&[[-9., -9., 7., 3.], [-8., 5., 7., 3.]], 7., 3.);
        // One segment starts on the other.
        single(&[[0., 0., 4., 4.], [2., 2., 5., 0.]], 2., 2.);
        // One segment ends on the other.
        single(&[[0., 0., 4., 4.], [0., 4., 2., 2.]], 2., 2.);
        // A chain with a bend.
        single(&[[0., 0., 2., 2.], [2., 2., 4., 0.]], 2., 2.);
        // Vertical segments.
        single(&[[2., 0., 2., 4.], [2., 2., 5., 2.]], 2., 2.);
        single(&[[2., 0., 2., 4.], [0., 1., 2., 1.]], 2., 1.);

        // A straight chain has equal slopes: nothing to report.
        assert!(sweep(&[[0., 0., 2., 2.], [2., 2., 4., 4.]])
            .intersections
            .is_empty());
    }

    #[test]
    fn test_shared_right_end_point_from_file() {
        init_log();
        let input = crate::io::parse_segments("2\n-9 -9 7 3\n-8 5 7 3\n").unwrap();
        let output = find_intersections(input, SweepConfig::default()).unwrap();
        assert_eq!(output.intersections, vec![Coordinate { x: 7., y: 3. }]);
        assert_eq!(output.events.len(), 5);
    }

    #[test]
    fn test_concurrent_segments_report_once() {
        // Four segments through (2, 2).
        let output = sweep(&[
            [0., 0., 4., 4.],
            [0., 4., 4., 0.],
            [0., 2., 4., 2.],
            [2., 0., 2., 4.],
        ]);
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
        assert_eq!(output.events.len(), 9);

        // A duplicated segment crossed once.
        let output = sweep(&[[0., 0., 4., 4.], [0., 0., 4., 4.], [0., 4., 4., 0.]]);
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
    }

    #[test]
    fn test_precision_out_of_range_is_clamped() {
        init_log();
        let input = lines(&[[0., 0., 4., 4.], [0., 4., 4., 0.], [5., 0., 5., 4.]]);
        let output = find_intersections(input, SweepConfig::default().precision(400)).unwrap();
        assert_eq!(output.intersections, vec![Coordinate { x: 2., y: 2. }]);
    }

    #[test]
    fn test_zero_length_segment_is_rejected() {
        let result = find_intersections(lines(&[[0., 0., 1., 1.], [2., 2., 2., 2.]]), SweepConfig::default());
        assert_eq!(result, Err(SweepError::ZeroLength { segment: 1 }));
    }

    #[test]
    fn test_event_limit() {
        let input = lines(&[[0., 0., 4., 4.], [0., 4., 4., 0.]]);
        let result = find_intersections(input.clone(), SweepConfig::default().max_events(3));
        assert_eq!(result, Err(SweepError::EventLimit { limit: 3 }));
        assert!(find_intersections(input, SweepConfig::default().max_events(5)).is_ok());
        assert_eq!(event_bound(2), 5);
        assert_eq!(event_bound(0), 0);
    }

    #[test]
    fn test_stepping() {
        init_log();
        let mut sweep = Sweep::new(
            lines(&[[0., 0., 4., 4.], [0., 4., 4., 0.]]),
            SweepConfig::default(),
        )
        .unwrap();
        assert_eq!(sweep.peek_point(), Some(SweepPoint::from((0., 0.))));
        sweep.next_event().unwrap();
        sweep.next_event().unwrap();
        assert_eq!(sweep.status().keys().collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(sweep.peek_point(), Some(SweepPoint::from((2., 2.))));
        sweep.next_event().unwrap();
        assert_eq!(sweep.status().keys().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(sweep.intersections(), &[Coordinate { x: 2., y: 2. }]);
        while sweep.next_event().unwrap().is_some() {}
        assert_eq!(sweep.peek_point(), None);
        assert!(sweep.queue().is_empty());
    }

    #[test]
    fn test_matches_brute_force() {
        init_log();
        let bounds = Rect::new([0., 0.], [100., 100.]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let input = uniform_lines(&mut rng, bounds, 24);
            let expected = brute_force_lines(input.clone(), Precision::default()).unwrap();
            let found = checked_sweep(input);
            assert_same_points(&found, &expected, &format!("seed {}", seed));
        }
    }

    #[test]
    fn test_short_lines_match_brute_force() {
        init_log();
        let bounds = Rect::new([0., 0.], [1000., 1000.]);
        for seed in 100..110 {
            let mut rng = StdRng::seed_from_u64(seed);
            let input: Vec<_> = uniform_lines(&mut rng, bounds, 200)
                .into_iter()
                .map(|l| Line::new(l.start, l.start + (l.delta() / 8.)))
                .collect();
            let expected = brute_force_lines(input.clone(), Precision::default()).unwrap();
            let found = checked_sweep(input);
            assert_same_points(&found, &expected, &format!("seed {}", seed));
        }
    }

    #[test]
    fn test_integer_lines_match_brute_force() {
        init_log();
        // Small grids give shared end points, T-junctions, collinear
        // overlaps and repeated segments.
        let grids = [
            (Rect::new([-30., -30.], [30., 30.]), 12, 0..100),
            (Rect::new([-10., -10.], [10., 10.]), 10, 100..200),
            (Rect::new([-3., -3.], [3., 3.]), 8, 200..300),
        ];
        for (bounds, n, seeds) in grids {
            for seed in seeds {
                let mut rng = StdRng::seed_from_u64(seed);
                let input = integer_lines(&mut rng, bounds, n);
                let expected = brute_force_lines(input.clone(), Precision::default()).unwrap();
                let found = checked_sweep(input);
                assert_same_points(&found, &expected, &format!("seed {}", seed));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let bounds = Rect::new([0., 0.], [50., 50.]);
        let mut rng = StdRng::seed_from_u64(7);
        let input = uniform_lines(&mut rng, bounds, 30);
        let first = find_intersections(input.clone(), SweepConfig::default()).unwrap();
        let second = find_intersections(input, SweepConfig::default()).unwrap();
        assert_eq!(first, second);
    }
}
