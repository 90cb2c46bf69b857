//! Vehicle type with capacity and load state.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::{Client, ClientId};
use crate::error::ValidationError;

/// Unique identifier of a vehicle, generated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VehicleId(Uuid);

impl VehicleId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Variant-specific vehicle data.
///
/// Only used for display; loading never looks at the kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VehicleKind {
    /// A road truck.
    Truck {
        /// Paint color.
        color: String,
    },
    /// A freight train.
    Train {
        /// Number of cars, always at least one.
        number_of_cars: u32,
    },
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleKind::Truck { color } => write!(f, "Truck {color}"),
            VehicleKind::Train { number_of_cars } => write!(f, "Train with {number_of_cars} cars"),
        }
    }
}

/// A carrier with a fixed capacity and a one-way fill state.
///
/// The load only changes through [`attempt_load`](Self::attempt_load),
/// [`release`](Self::release), and [`reset`](Self::reset). At all times
/// `current_load` equals the sum of the assigned clients' weights (added in
/// load order) and never exceeds `capacity`.
///
/// A clone is the same vehicle (same [`VehicleId`]) frozen at clone time,
/// not a new one; registering it next to the original fails with
/// [`RegistrationError::DuplicateVehicle`](crate::error::RegistrationError::DuplicateVehicle).
/// Build a new vehicle with [`truck`](Self::truck) or [`train`](Self::train)
/// to get a fresh ID.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_fleet::models::{Client, Vehicle};
///
/// let mut truck = Vehicle::truck(10.0, "red").unwrap();
/// let small = Arc::new(Client::new("Ivan", 4.0, false).unwrap());
/// let large = Arc::new(Client::new("Petr", 7.0, false).unwrap());
///
/// assert!(truck.attempt_load(&small));
/// assert!(!truck.attempt_load(&large));
/// assert_eq!(truck.current_load(), 4.0);
/// assert_eq!(truck.assigned_clients().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    capacity: f64,
    current_load: f64,
    assigned: Vec<Arc<Client>>,
    kind: VehicleKind,
}

impl Vehicle {
    fn new(capacity: f64, kind: VehicleKind) -> Result<Self, ValidationError> {
        if !capacity.is_finite() || capacity <= 0.0 {
            return Err(ValidationError::InvalidCapacity(capacity));
        }
        Ok(Self {
            id: VehicleId::generate(),
            capacity,
            current_load: 0.0,
            assigned: Vec::new(),
            kind,
        })
    }

    /// Creates an empty truck.
    ///
    /// Fails if `capacity` is not a positive finite number.
    pub fn truck(capacity: f64, color: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            capacity,
            VehicleKind::Truck {
                color: color.into(),
            },
        )
    }

    /// Creates an empty train.
    ///
    /// Fails if `capacity` is not a positive finite number or the train has
    /// no cars.
    pub fn train(capacity: f64, number_of_cars: u32) -> Result<Self, ValidationError> {
        if number_of_cars == 0 {
            return Err(ValidationError::InvalidCarCount);
        }
        Self::new(capacity, VehicleKind::Train { number_of_cars })
    }

    /// Vehicle ID.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Variant-specific data.
    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    /// Maximum load, in tonnes.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sum of the assigned clients' cargo weights.
    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// Capacity still free.
    pub fn remaining_capacity(&self) -> f64 {
        self.capacity - self.current_load
    }

    /// Clients loaded on this vehicle, in load order.
    pub fn assigned_clients(&self) -> &[Arc<Client>] {
        &self.assigned
    }

    /// Returns `true` if nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Tries to load the client's cargo.
    ///
    /// Returns `false` and leaves the vehicle untouched when the cargo does
    /// not fit. Otherwise appends the client and adds its weight.
    pub fn attempt_load(&mut self, client: &Arc<Client>) -> bool {
        let new_load = self.current_load + client.cargo_weight();
        if new_load > self.capacity {
            debug!(
                vehicle = %self.id,
                client = client.name(),
                cargo_weight = client.cargo_weight(),
                remaining = self.remaining_capacity(),
                "insufficient space"
            );
            return false;
        }

        self.assigned.push(Arc::clone(client));
        self.current_load = new_load;
        debug!(
            vehicle = %self.id,
            client = client.name(),
            current_load = self.current_load,
            "client loaded"
        );
        true
    }

    /// Unloads one client, returning it if it was assigned here.
    ///
    /// The load is recomputed from the remaining clients so it stays equal
    /// to their sum.
    pub fn release(&mut self, client_id: ClientId) -> Option<Arc<Client>> {
        let pos = self.assigned.iter().position(|c| c.id() == client_id)?;
        let client = self.assigned.remove(pos);
        self.current_load = self
            .assigned
            .iter()
            .fold(0.0, |load, c| load + c.cargo_weight());
        Some(client)
    }

    /// Unloads every client.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.current_load = 0.0;
    }
}

/// Writes the one-line vehicle description shared by every vehicle view.
pub(crate) fn write_vehicle_line(
    f: &mut fmt::Formatter<'_>,
    kind: &VehicleKind,
    id: VehicleId,
    capacity: f64,
    current_load: f64,
) -> fmt::Result {
    write!(
        f,
        "{kind}, ID: {id}, capacity: {capacity} t, current load: {current_load} t"
    )
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vehicle_line(f, &self.kind, self.id, self.capacity, self.current_load)
    }
}
