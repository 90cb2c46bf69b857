//! Error types for construction, registration, and distribution.

use thiserror::Error;

use crate::models::{ClientId, VehicleId};

/// A field rejected while constructing a [`Client`](crate::models::Client)
/// or [`Vehicle`](crate::models::Vehicle).
///
/// No entity is produced when construction fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Client name is empty or whitespace only.
    #[error("client name must not be empty")]
    EmptyName,

    /// Cargo weight is negative, NaN, or infinite.
    #[error("cargo weight must be a non-negative number, got {0}")]
    InvalidCargoWeight(f64),

    /// Vehicle capacity is zero, negative, NaN, or infinite.
    #[error("capacity must be a positive number, got {0}")]
    InvalidCapacity(f64),

    /// A train was declared with zero cars.
    #[error("number of cars must be a positive integer")]
    InvalidCarCount,
}

/// A rejected `add_client` / `add_vehicle` call.
///
/// The registry is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// A client with this ID is already registered.
    #[error("client {0} is already registered")]
    DuplicateClient(ClientId),

    /// A vehicle with this ID is already registered.
    #[error("vehicle {0} is already registered")]
    DuplicateVehicle(VehicleId),
}

/// Precondition failure checked before a distribution pass.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionError {
    /// The company has no clients.
    #[error("no clients registered")]
    NoClients,

    /// The company has no vehicles.
    #[error("no vehicles registered")]
    NoVehicles,
}
