//! Brute-force intersection of all pairs.
//!
//! Quadratic, and only meant as a reference to check the sweep
//! against. Uses the same [`intersect`] routine as the sweep, so for
//! inputs in general position both report bit-identical points.
use geo::{Coordinate, Line};
use itertools::Itertools;

use crate::{
    error::Result,
    segments::{intersect, Segment},
    utils::Precision,
};

/// Intersect every unordered pair of `segments`, in pair order.
///
/// One point per intersecting pair: a point where several segments
/// meet is reported once for each pair.
pub fn brute_force(segments: &[Segment], precision: Precision) -> Vec<Coordinate<f64>> {
    segments
        .iter()
        .tuple_combinations()
        .filter_map(|(a, b)| intersect(a, b, precision))
        .map(|p| p.coord())
        .collect()
}

/// [`brute_force`] over lines, keyed in input order like the sweep.
pub fn brute_force_lines<I>(lines: I, precision: Precision) -> Result<Vec<Coordinate<f64>>>
where
    I: IntoIterator<Item = Line<f64>>,
{
    let segments = lines
        .into_iter()
        .enumerate()
        .map(|(key, line)| Segment::new(key, line.start, line.end))
        .collect::<Result<Vec<_>>>()?;
    Ok(brute_force(&segments, precision))
}
