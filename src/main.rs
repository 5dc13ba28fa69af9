use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cognitive_guard::cli::{Cli, Commands};
use cognitive_guard::commands::{run_check, run_scan};

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Scan(args) => run_scan(args, &cli),
    };

    std::process::exit(exit_code);
}
