#![allow(dead_code)]
use std::f64::consts::PI;

use geo::{rotate::RotatePoint, Coordinate, Line, Rect};

use rand::Rng;
use rand_distr::{Standard, Uniform};

#[inline]
pub fn uniform_point<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Coordinate<f64> {
    Coordinate {
        x: rng.sample(Uniform::new(bounds.min().x, bounds.max().x)),
        y: rng.sample(Uniform::new(bounds.min().y, bounds.max().y)),
    }
}

#[inline]
pub fn uniform_line<R: Rng>(rng: &mut R, bounds: Rect<f64>) -> Line<f64> {
    Line::new(uniform_point(rng, bounds), uniform_point(rng, bounds))
}

/// `n` lines with both end points uniform in `bounds`.
pub fn uniform_lines<R: Rng>(rng: &mut R, bounds: Rect<f64>, n: usize) -> Vec<Line<f64>> {
    (0..n).map(|_| uniform_line(rng, bounds)).collect()
}

#[inline]
pub fn uniform_line_with_length<R: Rng>(rng: &mut R, bounds: Rect<f64>, length: f64) -> Line<f64> {
    let start = uniform_point(rng, bounds);
    let line = Line::new(start, start + (length, 0.).into());
    let angle = rng.sample::<f64, _>(Standard) * 2. * PI;
    line.rotate_around_point(angle, start.into())
}

/// Lines with integer end points, as read from an input file.
pub fn integer_lines<R: Rng>(rng: &mut R, bounds: Rect<f64>, n: usize) -> Vec<Line<f64>> {
    let mut lines = Vec::with_capacity(n);
    while lines.len() < n {
        let l = uniform_line(rng, bounds);
        let (s, e) = (l.start, l.end);
        let l = Line::from([(s.x.round(), s.y.round()), (e.x.round(), e.y.round())]);
        if l.start != l.end {
            lines.push(l);
        }
    }
    lines
}
