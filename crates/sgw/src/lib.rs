//! Sector gateway configuration library.
//!
//! This crate holds the pieces shared by the `sgwtool` binary: the FRR and
//! nftables config codecs (render to text, parse the fields back out), the
//! aligned-table formatter used by `get` commands, the root/precondition
//! guard, and the service restart wrapper.
//!
//! Both codecs are deliberately narrow. `render` produces the whole config
//! file from scratch, and `parse` only recovers the fields this tool itself
//! writes. Neither is a general parser for the FRR or nftables grammar;
//! unrecognized lines are skipped and malformed input degrades to empty
//! fields rather than an error.
//!
//! # Example
//!
//! ```
//! use sgw::frr::{self, RoutingParams};
//!
//! let params = RoutingParams {
//!     sector_addresses: vec!["10.1.1.1/24".into()],
//!     backplane_assigned_addr: "192.168.1.100/24".into(),
//!     backplane_gw_ip: "192.168.1.1".into(),
//! };
//!
//! let text = frr::render(&params);
//! let config = frr::parse(&text);
//! assert_eq!(config.sector_addresses, params.sector_addresses);
//! ```

pub mod error;
pub mod frr;
pub mod guard;
pub mod nftables;
pub mod service;
pub mod table;

// Re-export common types at crate root for convenience
pub use error::{Error, Result};

/// Interface facing the sector (access-side) networks.
pub const SECTOR_IFACE: &str = "eth0";

/// Interface facing the backplane (upstream/transit) network.
pub const BACKPLANE_IFACE: &str = "eth1";
