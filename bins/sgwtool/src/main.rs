//! sgwtool - sector gateway configuration utility.
//!
//! Writes, inspects, and reloads the FRR and nftables configuration of a
//! gateway host sitting between a sector network (eth0) and a backplane
//! network (eth1). Must be run as root.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sgwtool", version, about = "Sector gateway configuration tool")]
struct Cli {
    /// Output JSON (get commands only).
    #[arg(short = 'j', long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage FRR routing configuration.
    Frr(commands::frr::FrrCmd),

    /// Manage nftables firewall configuration.
    Nftables(commands::nftables::NftablesCmd),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> sgw::Result<()> {
    // Every domain action is privileged; check once, up front.
    sgw::guard::ensure_root()?;

    match cli.command {
        Command::Frr(cmd) => cmd.run(cli.json),
        Command::Nftables(cmd) => cmd.run(cli.json),
    }
}
