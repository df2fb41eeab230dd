use clap::{Parser, Subcommand};

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    /// Decimal places points are rounded to when welding.
    #[arg(short, long, default_value_t = 5)]
    pub precision: u32,
}

#[derive(clap::Args, Debug)]
pub struct AnimateArgs {
    /// Number of frames to simulate.
    #[arg(short, long, default_value_t = 60)]
    pub ticks: usize,

    /// Frame time in milliseconds.
    #[arg(short, long, default_value_t = 16.0)]
    pub delta_ms: f64,

    /// Cup swivel slider, 0 to 100.
    #[arg(long, default_value_t = 20.0)]
    pub muff_yaw: f64,

    /// Cup tilt slider, 0 to 100.
    #[arg(long, default_value_t = 50.0)]
    pub muff_tilt: f64,

    /// Band extension slider, 0 to 100.
    #[arg(long, default_value_t = 50.0)]
    pub extension: f64,

    /// Ignore the sliders and sweep all of them back and forth.
    #[arg(long)]
    pub sweep: bool,

    #[arg(short, long, default_value_t = 5)]
    pub precision: u32,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the headphones and print the size of every part.
    Stats(StatsArgs),
    /// Tick the rig and print the joint values of every frame.
    Animate(AnimateArgs),
}
