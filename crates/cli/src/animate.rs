use std::io::Write;

use anyhow::Context;
use muffle::{Assembly, BuildConfig, Intent, Rig};
use muffle_mesh::Precision;
use muffle_motion::Oscillator;

use crate::args;

/// Slider units per millisecond when sweeping: a full pass takes two seconds.
const SWEEP_SPEED: f64 = 100.0 / 2000.0;

pub fn animate_command(args: args::AnimateArgs) -> anyhow::Result<()> {
    let config = BuildConfig::with_precision(Precision::decimals(args.precision));
    let mut assembly = Assembly::build(&config).context("failed to build the headphones")?;
    let mut rig = Rig::new();
    let mut sweep = args.sweep.then(|| Oscillator::new(0.0, 100.0, SWEEP_SPEED));
    log::info!(
        "animating {} ticks of {}ms{}",
        args.ticks,
        args.delta_ms,
        if sweep.is_some() { " (sweep)" } else { "" }
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:>6} {:>10} {:>10} {:>10}", "tick", "yaw", "tilt", "extension")?;

    for tick in 0..args.ticks {
        let intent = match sweep.as_mut() {
            Some(oscillator) => {
                let factor = oscillator.update(args.delta_ms);
                Intent {
                    muff_yaw: factor,
                    muff_tilt: factor,
                    extension: factor,
                }
            }
            None => Intent {
                muff_yaw: args.muff_yaw,
                muff_tilt: args.muff_tilt,
                extension: args.extension,
            },
        };

        let joints = rig.tick(&mut assembly, &intent, args.delta_ms);
        writeln!(
            out,
            "{:>6} {:>10.5} {:>10.5} {:>10.5}",
            tick, joints.muff_yaw, joints.muff_tilt, joints.extension
        )?;
    }
    Ok(())
}
