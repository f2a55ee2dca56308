//! CLI entry point for generating grids and listing neighbour orderings

use clap::Parser;
use gridl::io::cli::{Cli, GridRunner};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

// Allow print for the report, which is the program's output
#[allow(clippy::print_stdout)]
fn main() -> gridl::Result<()> {
    let cli = Cli::parse();

    let config = ConfigBuilder::new().set_time_level(log::LevelFilter::Off).build();
    // Fails only if a logger is already installed, which leaves that one active
    TermLogger::init(
        cli.log_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    let runner = GridRunner::new(cli);
    let report = runner.run()?;
    println!("{report}");
    Ok(())
}
