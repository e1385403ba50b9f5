//! Per-domain command implementations.

pub mod frr;
pub mod nftables;
