//! nftables NAT configuration codec.
//!
//! `render` emits an `ip nat` table: a prerouting chain that DNATs traffic
//! arriving on the backplane for the backplane network to the primary
//! sector gateway (and drops the same destinations arriving on the sector
//! side, guarding against spoofed/asymmetric paths), plus a postrouting
//! chain that masquerades everything leaving on the backplane. `parse`
//! recovers the two rule lines for display.

use serde::Serialize;
use tracing::debug;

use crate::{BACKPLANE_IFACE, SECTOR_IFACE};

/// Default location of the nftables ruleset.
pub const CONFIG_PATH: &str = "/etc/nftables.conf";

/// systemd unit restarted by `nftables restart`.
pub const SERVICE_UNIT: &str = "nftables";

/// Input for rendering the NAT ruleset.
#[derive(Debug, Clone)]
pub struct FirewallParams {
    /// Primary sector gateway address, DNAT target for backplane ingress.
    pub primary_sector_ip: String,
    /// Backplane network (CIDR) whose destinations are translated.
    pub backplane_network: String,
}

/// Rule lines recovered from an existing nftables configuration.
///
/// Absent rules stay empty; parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FirewallConfig {
    /// DNAT rule from the prerouting chain.
    pub prerouting_rule: String,
    /// Masquerade rule from the postrouting chain.
    pub postrouting_rule: String,
}

/// Render the complete NAT ruleset. Deterministic; depends only on
/// `params`.
pub fn render(params: &FirewallParams) -> String {
    let net = &params.backplane_network;
    let ip = &params.primary_sector_ip;

    let lines = [
        "table ip nat {".to_string(),
        "  chain prerouting {".to_string(),
        "    type nat hook prerouting priority -100;".to_string(),
        format!("    iif \"{BACKPLANE_IFACE}\" ip daddr {net} dnat to {ip}"),
        format!("    iif \"{SECTOR_IFACE}\" ip daddr {net} drop"),
        "  }".to_string(),
        String::new(),
        "  chain postrouting {".to_string(),
        "    type nat hook postrouting priority 100;".to_string(),
        format!("    oif \"{BACKPLANE_IFACE}\" masquerade"),
        "  }".to_string(),
        "}".to_string(),
        String::new(),
    ];

    lines.join("\n")
}

/// Extract the rule lines written by [`render`] from nftables text.
///
/// Last match wins for both rules. Render emits exactly one of each, so
/// this only matters for hand-edited files, where the duplicate closest to
/// the end is shown.
pub fn parse(text: &str) -> FirewallConfig {
    let ingress = format!("iif \"{BACKPLANE_IFACE}\"");
    let egress = format!("oif \"{BACKPLANE_IFACE}\"");
    let mut config = FirewallConfig::default();

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with(&ingress) {
            config.prerouting_rule = line.to_string();
        } else if line.starts_with(&egress) {
            config.postrouting_rule = line.to_string();
        }
    }

    debug!(
        prerouting = %config.prerouting_rule,
        postrouting = %config.postrouting_rule,
        "parsed nftables configuration"
    );
    config
}
