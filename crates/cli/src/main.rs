use clap::Parser;

mod animate;
mod args;
mod stats;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = args::Args::parse();
    match args.command {
        args::Commands::Stats(args) => stats::stats_command(args),
        args::Commands::Animate(args) => animate::animate_command(args),
    }
}
