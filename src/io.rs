//! Reading segment files and writing intersection files.
//!
//! Input: a line with the number of segments `N`, then `N` lines of
//! four integers `x1 y1 x2 y2`. Output: a line with the number of
//! points `K`, then one `x y` line per point.
use std::{fs, path::Path};

use geo::{Coordinate, Line};
use log::debug;

use crate::error::LoadError;

/// Parse segments from the contents of an input file.
///
/// End points are swapped where needed so the first one has the
/// smaller `x`. Blank lines after the count are ignored.
pub fn parse_segments(input: &str) -> Result<Vec<Line<f64>>, LoadError> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l));

    let count = lines.next().ok_or(LoadError::MissingCount)?.1.trim();
    if count.is_empty() {
        return Err(LoadError::MissingCount);
    }
    let expected: usize = count.parse().map_err(|_| LoadError::InvalidCount {
        token: count.to_string(),
    })?;

    let mut segments = Vec::with_capacity(expected);
    for (line, text) in lines {
        let tokens: Vec<_> = text.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 4 {
            return Err(LoadError::WrongTokenCount {
                line,
                found: tokens.len(),
            });
        }
        let mut values = [0i64; 4];
        for (value, token) in values.iter_mut().zip(&tokens) {
            *value = token.parse().map_err(|_| LoadError::InvalidToken {
                line,
                token: token.to_string(),
            })?;
        }

        let [mut x1, mut y1, mut x2, mut y2] = values;
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }
        if x1 == x2 && y1 == y2 {
            return Err(LoadError::ZeroLength { line });
        }
        segments.push(Line::from([
            (x1 as f64, y1 as f64),
            (x2 as f64, y2 as f64),
        ]));
    }

    if segments.len() != expected {
        return Err(LoadError::CountMismatch {
            expected,
            found: segments.len(),
        });
    }
    Ok(segments)
}

/// Read and parse the segment file at `path`.
pub fn read_segments<P: AsRef<Path>>(path: P) -> Result<Vec<Line<f64>>, LoadError> {
    let input = fs::read_to_string(path.as_ref())?;
    let segments = parse_segments(&input)?;
    debug!(
        "read {n} segments from {path}",
        n = segments.len(),
        path = path.as_ref().display()
    );
    Ok(segments)
}

/// Format points in the output file layout.
pub fn format_points(points: &[Coordinate<f64>]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{:?} {:?}\n", p.x, p.y));
    }
    out
}

/// Write points to `path` in the output file layout.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Coordinate<f64>]) -> std::io::Result<()> {
    fs::write(path, format_points(points))
}
