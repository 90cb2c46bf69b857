//! Domain model types for cargo distribution.
//!
//! Provides the two entities the distribution pass works on: clients with a
//! cargo weight and VIP flag, and vehicles (trucks and trains) with a fixed
//! capacity and a running load.

mod client;
mod vehicle;

pub(crate) use client::write_client_line;
pub use client::{Client, ClientId};
pub(crate) use vehicle::write_vehicle_line;
pub use vehicle::{Vehicle, VehicleId, VehicleKind};
