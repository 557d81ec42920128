use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use sweep_crossings::{find_intersections, io, naive::brute_force_lines, EventKind, SweepConfig};

/// Report all intersection points of the segments in a file.
#[derive(Parser)]
struct Cli {
    /// Segment file: a count, then one `x1 y1 x2 y2` line per segment.
    input: PathBuf,

    /// Where to write the points. Defaults to `output_ps.txt`, or
    /// `output_bf.txt` with `--brute-force`.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Decimal digits kept by floating point comparisons, at most 15.
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=15))]
    precision: u32,

    /// Intersect all pairs instead of sweeping.
    #[arg(long)]
    brute_force: bool,

    /// Print every processed event.
    #[arg(long)]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lines = io::read_segments(&cli.input)
        .with_context(|| format!("reading segments from {}", cli.input.display()))?;
    let config = SweepConfig::default().precision(cli.precision);

    let (points, default_output) = if cli.brute_force {
        let points = brute_force_lines(lines.iter().copied(), config.precision)?;
        (points, "output_bf.txt")
    } else {
        let output = find_intersections(lines.iter().copied(), config)?;
        if cli.trace {
            for event in &output.events {
                let (x, y) = (event.point.x(), event.point.y());
                match event.kind {
                    EventKind::Start { segment } => println!("start {segment} at ({x}, {y})"),
                    EventKind::End { segment } => println!("end {segment} at ({x}, {y})"),
                    EventKind::Intersection { above, below } => {
                        println!("cross {above} / {below} at ({x}, {y})")
                    }
                }
            }
        }
        (output.intersections, "output_ps.txt")
    };

    let output = cli.output.unwrap_or_else(|| default_output.into());
    io::write_points(&output, &points)
        .with_context(|| format!("writing points to {}", output.display()))?;
    info!(
        "{n} segments, {k} intersections written to {path}",
        n = lines.len(),
        k = points.len(),
        path = output.display()
    );
    Ok(())
}
