//! nftables command implementation.

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};
use sgw::nftables::{self, FirewallParams};
use sgw::{guard, service, table, Result};
use tracing::debug;

#[derive(Args)]
pub struct NftablesCmd {
    #[command(subcommand)]
    pub action: NftablesAction,
}

#[derive(Subcommand)]
pub enum NftablesAction {
    /// Write a fresh nftables NAT ruleset.
    Set(SetArgs),

    /// Show the current nftables configuration.
    Get,

    /// Reload nftables rules.
    Restart,
}

#[derive(Args)]
pub struct SetArgs {
    /// Primary sector gateway IPv4 address (X.X.X.X). This is usually the
    /// X.X.X.1/Y address of the entire sector CIDR.
    #[arg(long = "primary-sector-ip")]
    pub primary_sector_ip: String,

    /// Backplane network CIDR block (X.X.X.X/Y).
    #[arg(long = "backplane-network")]
    pub backplane_network: String,
}

impl NftablesCmd {
    pub fn run(self, json: bool) -> Result<()> {
        let config = Path::new(nftables::CONFIG_PATH);
        match self.action {
            NftablesAction::Set(args) => set(&args, config),
            NftablesAction::Get => get(config, json),
            NftablesAction::Restart => restart(config),
        }
    }
}

fn set(args: &SetArgs, config: &Path) -> Result<()> {
    guard::ensure_parent(config)?;

    let params = FirewallParams {
        primary_sector_ip: args.primary_sector_ip.clone(),
        backplane_network: args.backplane_network.clone(),
    };
    debug!(config = %config.display(), "writing nftables configuration");
    fs::write(config, nftables::render(&params))?;

    println!("Wrote nftables configuration to {}", config.display());
    Ok(())
}

fn get(config: &Path, json: bool) -> Result<()> {
    guard::pre_checks(config)?;

    let parsed = nftables::parse(&fs::read_to_string(config)?);

    if json {
        let value = serde_json::json!({
            "prerouting_rule": parsed.prerouting_rule,
            "postrouting_rule": parsed.postrouting_rule,
            "config_path": config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let rows = vec![
            vec!["Prerouting Rule".to_string(), parsed.prerouting_rule],
            vec!["Postrouting Rule".to_string(), parsed.postrouting_rule],
            vec!["Config Path".to_string(), config.display().to_string()],
        ];
        println!("{}", table::format_table(&["Field", "Value"], &rows));
    }
    Ok(())
}

fn restart(config: &Path) -> Result<()> {
    guard::pre_checks(config)?;
    service::restart(nftables::SERVICE_UNIT)?;
    println!("nftables restarted successfully");
    Ok(())
}
