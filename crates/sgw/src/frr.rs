//! FRR routing configuration codec.
//!
//! `render` emits a complete `frr.conf`: global defaults, the sector
//! interface block (one address per sector subnet), the backplane interface
//! block, and a default route via the backplane gateway. `parse` is the
//! line scanner that inverts it: it tracks which interface block is open
//! and collects only the address and route lines this tool writes,
//! ignoring everything else.

use serde::Serialize;
use tracing::debug;

use crate::{BACKPLANE_IFACE, SECTOR_IFACE};

/// Default location of the FRR daemon configuration.
pub const CONFIG_PATH: &str = "/etc/frr/frr.conf";

/// systemd unit restarted by `frr restart`.
pub const SERVICE_UNIT: &str = "frr";

/// Input for rendering an FRR configuration.
#[derive(Debug, Clone)]
pub struct RoutingParams {
    /// Sector-side gateway addresses (CIDR), one `ip address` line each,
    /// emitted in this order. Must be non-empty.
    pub sector_addresses: Vec<String>,
    /// Address (CIDR) assigned to this router on the backplane.
    pub backplane_assigned_addr: String,
    /// Backplane gateway used for the default route.
    pub backplane_gw_ip: String,
}

/// Fields recovered from an existing FRR configuration.
///
/// Absent fields stay empty; parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutingConfig {
    /// Sector gateway addresses in file order.
    pub sector_addresses: Vec<String>,
    /// Address assigned on the backplane interface.
    pub backplane_addr: String,
    /// Gateway of the default route.
    pub backplane_gateway: String,
}

/// Render a complete FRR configuration. Deterministic; depends only on
/// `params`.
pub fn render(params: &RoutingParams) -> String {
    let mut lines = vec![
        "frr defaults traditional".to_string(),
        "log syslog warning".to_string(),
        "ip forwarding".to_string(),
        "!".to_string(),
        format!("interface {SECTOR_IFACE}"),
    ];
    for addr in &params.sector_addresses {
        lines.push(format!(" ip address {addr}"));
    }
    lines.push(" no shutdown".to_string());
    lines.push("!".to_string());
    lines.push(format!("interface {BACKPLANE_IFACE}"));
    lines.push(format!(" ip address {}", params.backplane_assigned_addr));
    lines.push(" no shutdown".to_string());
    lines.push("!".to_string());
    lines.push(format!("ip route 0.0.0.0/0 {}", params.backplane_gw_ip));
    lines.push("!".to_string());
    lines.push("end".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Which interface block the scanner is currently inside.
#[derive(Clone, Copy)]
enum Block {
    None,
    Sector,
    Backplane,
}

/// Extract the fields written by [`render`] from FRR configuration text.
///
/// Best effort: not a grammar for frr.conf, only the inverse of this
/// tool's own output. Unrecognized lines (comments, `hostname`, anything
/// hand-added) are skipped and malformed input yields empty fields.
pub fn parse(text: &str) -> RoutingConfig {
    let mut config = RoutingConfig::default();
    let mut block = Block::None;

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with("interface") {
            block = if line.contains(SECTOR_IFACE) {
                Block::Sector
            } else {
                Block::Backplane
            };
        }

        if let Some(addr) = line.strip_prefix("ip address ") {
            match block {
                Block::Sector => config.sector_addresses.push(addr.to_string()),
                Block::Backplane => {
                    // Only the first backplane address counts; render
                    // emits exactly one.
                    config.backplane_addr = addr.to_string();
                    block = Block::None;
                }
                Block::None => {}
            }
        } else if line.starts_with("ip route 0.0.0.0/0") {
            if let Some(gateway) = line.split_whitespace().last() {
                config.backplane_gateway = gateway.to_string();
            }
        }
    }

    debug!(
        sector = config.sector_addresses.len(),
        backplane = %config.backplane_addr,
        gateway = %config.backplane_gateway,
        "parsed FRR configuration"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RoutingParams {
        RoutingParams {
            sector_addresses: vec!["10.1.1.1/24".into(), "10.1.2.1/24".into()],
            backplane_assigned_addr: "192.168.1.100/24".into(),
            backplane_gw_ip: "192.168.1.1".into(),
        }
    }

    #[test]
    fn test_render_layout() {
        let text = render(&params());
        let expected = "\
frr defaults traditional
log syslog warning
ip forwarding
!
interface eth0
 ip address 10.1.1.1/24
 ip address 10.1.2.1/24
 no shutdown
!
interface eth1
 ip address 192.168.1.100/24
 no shutdown
!
ip route 0.0.0.0/0 192.168.1.1
!
end
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_preserves_address_order() {
        let mut p = params();
        p.sector_addresses = vec!["10.9.9.1/24".into(), "10.1.1.1/24".into()];
        let text = render(&p);
        let first = text.find("10.9.9.1/24").unwrap();
        let second = text.find("10.1.1.1/24").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(&params()), render(&params()));
    }

    #[test]
    fn test_round_trip() {
        let p = params();
        let config = parse(&render(&p));
        assert_eq!(config.sector_addresses, p.sector_addresses);
        assert_eq!(config.backplane_addr, p.backplane_assigned_addr);
        assert_eq!(config.backplane_gateway, p.backplane_gw_ip);
    }

    #[test]
    fn test_parse_tolerates_foreign_lines() {
        // Hand-edited file with an extra hostname directive.
        let text = "\
frr defaults traditional
log syslog warning
ip forwarding
!
interface eth0
 ip address 10.1.1.1/24
 ip address 10.1.2.1/24
 no shutdown
!
interface eth1
 ip address 192.168.1.100/24
 no shutdown
!
ip route 0.0.0.0/0 192.168.1.1
!
hostname testhost
end
";
        let config = parse(text);
        assert_eq!(config.sector_addresses, vec!["10.1.1.1/24", "10.1.2.1/24"]);
        assert_eq!(config.backplane_addr, "192.168.1.100/24");
        assert_eq!(config.backplane_gateway, "192.168.1.1");
    }

    #[test]
    fn test_parse_only_first_backplane_address() {
        let text = "interface eth1\n ip address 192.168.1.100/24\n ip address 192.168.2.100/24\n";
        let config = parse(text);
        assert_eq!(config.backplane_addr, "192.168.1.100/24");
    }

    #[test]
    fn test_parse_malformed_input_yields_empty_fields() {
        let config = parse("complete nonsense\nnot a config at all\n");
        assert_eq!(config, RoutingConfig::default());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), RoutingConfig::default());
    }
}
