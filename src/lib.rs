//! # u-fleet
//!
//! Cargo distribution for a transport company: client loads are assigned to
//! trucks and trains by capacity, VIP clients first, each client to the
//! first vehicle with room.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Client, Vehicle, VehicleKind)
//! - [`company`] — Fleet registry that owns clients and vehicles
//! - [`distribution`] — VIP-first ordering, first-fit pass, run report
//! - [`error`] — Validation, registration, and precondition errors

pub mod company;
pub mod distribution;
pub mod error;
pub mod models;
