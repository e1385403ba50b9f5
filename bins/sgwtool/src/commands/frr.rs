//! frr command implementation.

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};
use sgw::frr::{self, RoutingParams};
use sgw::{guard, service, table, Result};
use tracing::debug;

#[derive(Args)]
pub struct FrrCmd {
    #[command(subcommand)]
    pub action: FrrAction,
}

#[derive(Subcommand)]
pub enum FrrAction {
    /// Write a fresh FRR configuration.
    Set(SetArgs),

    /// Show the current FRR configuration.
    Get,

    /// Restart the FRR service.
    Restart,
}

#[derive(Args)]
pub struct SetArgs {
    /// Sector subnet IPv4 address with CIDR bit (X.X.X.X/Y). Repeat for
    /// each subnet; order is preserved in the generated config.
    #[arg(long = "sector-subnet-addr", required = true)]
    pub sector_subnet_addr: Vec<String>,

    /// Backplane IPv4 address with CIDR bit assigned to the router
    /// (X.X.X.X/Y).
    #[arg(long = "backplane-assigned-addr")]
    pub backplane_assigned_addr: String,

    /// Backplane gateway IPv4 address (X.X.X.X).
    #[arg(long = "backplane-gw-ip")]
    pub backplane_gw_ip: String,
}

impl FrrCmd {
    pub fn run(self, json: bool) -> Result<()> {
        let config = Path::new(frr::CONFIG_PATH);
        match self.action {
            FrrAction::Set(args) => set(&args, config),
            FrrAction::Get => get(config, json),
            FrrAction::Restart => restart(config),
        }
    }
}

fn set(args: &SetArgs, config: &Path) -> Result<()> {
    guard::ensure_parent(config)?;

    let params = RoutingParams {
        sector_addresses: args.sector_subnet_addr.clone(),
        backplane_assigned_addr: args.backplane_assigned_addr.clone(),
        backplane_gw_ip: args.backplane_gw_ip.clone(),
    };
    debug!(config = %config.display(), "writing FRR configuration");
    fs::write(config, frr::render(&params))?;

    println!("Wrote FRR configuration to {}", config.display());
    Ok(())
}

fn get(config: &Path, json: bool) -> Result<()> {
    guard::pre_checks(config)?;

    let parsed = frr::parse(&fs::read_to_string(config)?);

    if json {
        let value = serde_json::json!({
            "sector_gateways": parsed.sector_addresses,
            "backplane_address": parsed.backplane_addr,
            "backplane_gateway": parsed.backplane_gateway,
            "config_path": config,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let rows = vec![
            vec![
                "Sector Gateways".to_string(),
                parsed.sector_addresses.join(", "),
            ],
            vec!["Backplane Address".to_string(), parsed.backplane_addr],
            vec!["Backplane Gateway".to_string(), parsed.backplane_gateway],
            vec!["Config Path".to_string(), config.display().to_string()],
        ];
        println!("{}", table::format_table(&["Field", "Value"], &rows));
    }
    Ok(())
}

fn restart(config: &Path) -> Result<()> {
    guard::pre_checks(config)?;
    service::restart(frr::SERVICE_UNIT)?;
    println!("FRR restarted successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_args() -> SetArgs {
        SetArgs {
            sector_subnet_addr: vec!["10.1.1.1/24".into(), "10.1.2.1/24".into()],
            backplane_assigned_addr: "192.168.1.100/24".into(),
            backplane_gw_ip: "192.168.1.1".into(),
        }
    }

    #[test]
    fn test_set_writes_ordered_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("frr").join("frr.conf");

        set(&set_args(), &config).unwrap();

        let written = fs::read_to_string(&config).unwrap();
        assert!(written.contains("interface eth0"));
        let first = written.find(" ip address 10.1.1.1/24").unwrap();
        let second = written.find(" ip address 10.1.2.1/24").unwrap();
        assert!(first < second);
        assert!(written.contains(" ip address 192.168.1.100/24"));
        assert!(written.lines().any(|l| l == "ip route 0.0.0.0/0 192.168.1.1"));
    }

    #[test]
    fn test_set_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("frr.conf");
        fs::write(&config, "stale content\n").unwrap();

        set(&set_args(), &config).unwrap();

        let written = fs::read_to_string(&config).unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.starts_with("frr defaults traditional"));
    }

    #[test]
    fn test_get_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("frr.conf");

        let err = get(&config, false).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_get_reads_back_written_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("frr.conf");
        set(&set_args(), &config).unwrap();

        assert!(get(&config, false).is_ok());
        assert!(get(&config, true).is_ok());
    }

    #[test]
    fn test_restart_fails_before_invoking_service_manager() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("frr.conf");

        // Missing config fails the precondition; systemctl is never run.
        let err = restart(&config).unwrap_err();
        assert!(matches!(err, sgw::Error::MissingConfig { .. }));
    }
}
