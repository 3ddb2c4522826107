//! CLI entry point - the composition root.
//!
//! Wires the configuration store from arguments, bootstraps the runtime
//! pieces, and runs the startup sequence. The only non-zero exit this
//! binary produces on its own is the fatal startup-post failure.

use clap::Parser;

use casalog_cli::{BootstrapConfig, Cli, Commands, bootstrap, run_respawn, run_startup};
use casalog_runtime::SpawnOutcome;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Bootstrap the CLI context (composition root)
    let config = BootstrapConfig::from_cli(&cli);
    let mut ctx = bootstrap(config);

    let result = match cli.command {
        Some(Commands::Respawn) => respawn(&mut ctx),
        None => startup(&mut ctx),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn startup(ctx: &mut casalog_cli::CliContext) -> anyhow::Result<()> {
    run_startup(ctx, casalog_build_info::LONG_VERSION)?;
    Ok(())
}

fn respawn(ctx: &mut casalog_cli::CliContext) -> anyhow::Result<()> {
    match run_respawn(ctx)? {
        SpawnOutcome::Launched(pid) => println!("Log viewer launched (pid {pid})"),
        SpawnOutcome::Unsupported => println!("No logger available for this platform"),
    }
    Ok(())
}
