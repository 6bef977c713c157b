use std::io;

use clap::Parser;
use colormap_sampler::cli::{self, Cli};
use colormap_sampler::BuiltinColormaps;
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let source = BuiltinColormaps::new().interpolation(cli.interpolation());
    let stdout = io::stdout();
    cli::run(&cli, source, &mut stdout.lock())?;

    Ok(())
}
