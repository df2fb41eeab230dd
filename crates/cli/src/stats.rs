use std::io::Write;

use anyhow::Context;
use muffle::{Assembly, BuildConfig};
use muffle_mesh::{Precision, TriangleMesh};

use crate::args;

pub fn stats_command(args: args::StatsArgs) -> anyhow::Result<()> {
    let config = BuildConfig::with_precision(Precision::decimals(args.precision));
    let assembly = Assembly::build(&config).context("failed to build the headphones")?;
    log::info!("built {} parts at precision {}", assembly.parts().len(), config.precision.get());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{:<24} {:<20} {:>8} {:>10}",
        "part", "parent", "points", "triangles"
    )?;

    let (mut points, mut triangles) = (0, 0);
    for part in assembly.parts() {
        let parent = part
            .parent
            .and_then(|id| assembly.part(id))
            .map_or("-", |p| p.name.as_str());
        let (p, t) = part
            .mesh
            .as_ref()
            .map_or((0, 0), |m| (m.points.len(), m.triangle_count()));
        writeln!(out, "{:<24} {:<20} {:>8} {:>10}", part.name, parent, p, t)?;
        points += p;
        triangles += t;
    }
    writeln!(out, "{:<24} {:<20} {:>8} {:>10}", "total", "", points, triangles)?;
    Ok(())
}
