//! Reports the intersection points of a set of line segments with a
//! [Bentley-Ottman] plane sweep.
//!
//! # Usage
//!
//! The simplest entry point is [`find_intersections`], which takes
//! any iterator of [`Line`]s and returns the distinct crossing points
//! in the order the sweep found them (left to right). This is a
//! drop-in replacement for intersecting all pairs (see
//! [`naive::brute_force`]), but only tests segments that become
//! adjacent on the sweep line.
//!
//! ```rust
//! use geo::Line;
//! use sweep_crossings::{find_intersections, SweepConfig};
//! let input = vec![
//!     Line::from([(0., 0.), (4., 4.)]),
//!     Line::from([(0., 4.), (4., 0.)]),
//!     Line::from([(5., 0.), (5., 3.)]),
//! ];
//! let output = find_intersections(input, SweepConfig::default()).unwrap();
//! assert_eq!(output.intersections.len(), 1);
//! assert_eq!((output.intersections[0].x, output.intersections[0].y), (2., 2.));
//! ```
//!
//! To inspect the state between events, drive a [`Sweep`] with
//! [`Sweep::next_event`]; [`SweepConfig::record`] additionally logs
//! every insertion, removal, scheduled and cancelled crossing.
//!
//! # Precision
//!
//! Floating point comparisons (equal slopes, points on a segment,
//! the sweep line order) are made on values floored to a fixed number
//! of decimals, 5 by default and at most 15. Points less than one
//! `10^-digits` apart count as the same point. See [`Precision`].
//!
//! # Degenerate input
//!
//! Zero-length and non-finite segments are rejected up front.
//! Segments that touch at an end point, or where one ends on the
//! other, intersect at that point. Segments of equal slope never
//! intersect, so overlapping collinear segments report nothing, not
//! even a shared end point. Two vertical segments never intersect
//! either. Any number of segments through one point report it once.
//!
//! [Bentley-Ottman]: //en.wikipedia.org/wiki/Bentley%E2%80%93Ottmann_algorithm
//! [`Line`]: geo::Line
mod events;
pub use events::{Event, EventKind, SweepPoint};

mod segments;
pub use segments::{above, intersect, Segment};

mod queue;
pub use queue::EventQueue;

mod active;
pub use active::{Active, SweepStatus};

mod sweep;
pub use sweep::{find_intersections, Record, Sweep, SweepConfig, SweepOutput};

pub mod io;
pub mod naive;

mod error;
pub use error::{LoadError, SweepError};

mod utils;
pub use utils::Precision;

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;
