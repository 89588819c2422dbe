use clap::Parser;

mod args;
mod info;
mod progress;
mod volume;

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match args.command {
        args::Commands::Volume(a) => volume::volume_command(a),
        args::Commands::Info(a) => info::info_command(a),
    }
}
