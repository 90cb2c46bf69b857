//! VIP-first, first-fit cargo distribution.
//!
//! - [`vip_first_order`] — Stable partition placing VIP clients first
//! - [`first_fit`] — Single distribution pass over a fleet, O(clients × vehicles)
//! - [`DistributionOptions`] — Run options (reset before run)
//! - [`DistributionReport`] — Per-vehicle outcome and unplaced-client warnings

mod first_fit;
mod options;
mod report;

pub use first_fit::{first_fit, vip_first_order};
pub use options::DistributionOptions;
pub use report::{ClientSummary, DistributionReport, DistributionWarning, VehicleSummary};
