//! Distribution report and warning types.

use std::fmt;

use serde::Serialize;

use crate::models::{
    write_client_line, write_vehicle_line, Client, ClientId, Vehicle, VehicleId, VehicleKind,
};

/// A non-fatal problem found during a distribution pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionWarning {
    /// No vehicle had room for the client's cargo.
    Unplaced {
        /// Client left without a vehicle.
        client_id: ClientId,
        /// Client name, for display.
        client_name: String,
        /// Cargo weight that did not fit.
        cargo_weight: f64,
    },
}

impl DistributionWarning {
    pub(crate) fn unplaced(client: &Client) -> Self {
        Self::Unplaced {
            client_id: client.id(),
            client_name: client.name().to_string(),
            cargo_weight: client.cargo_weight(),
        }
    }

    /// The client this warning is about.
    pub fn client_id(&self) -> ClientId {
        match self {
            Self::Unplaced { client_id, .. } => *client_id,
        }
    }
}

impl fmt::Display for DistributionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unplaced {
                client_name,
                cargo_weight,
                ..
            } => write!(
                f,
                "could not load client {client_name} ({cargo_weight} t), not enough space"
            ),
        }
    }
}

/// Snapshot of one loaded client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSummary {
    /// Client ID.
    pub id: ClientId,
    /// Client name.
    pub name: String,
    /// Cargo weight, in tonnes.
    pub cargo_weight: f64,
    /// Whether the client is VIP.
    pub is_vip: bool,
}

impl From<&Client> for ClientSummary {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id(),
            name: client.name().to_string(),
            cargo_weight: client.cargo_weight(),
            is_vip: client.is_vip(),
        }
    }
}

impl fmt::Display for ClientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_client_line(f, &self.name, self.cargo_weight, self.is_vip)
    }
}

/// Snapshot of one vehicle and its assigned clients, in load order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSummary {
    /// Vehicle ID.
    pub id: VehicleId,
    /// Truck or train data.
    pub kind: VehicleKind,
    /// Maximum load, in tonnes.
    pub capacity: f64,
    /// Load at snapshot time.
    pub current_load: f64,
    /// Loaded clients, in load order.
    pub clients: Vec<ClientSummary>,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            kind: vehicle.kind().clone(),
            capacity: vehicle.capacity(),
            current_load: vehicle.current_load(),
            clients: vehicle
                .assigned_clients()
                .iter()
                .map(|c| ClientSummary::from(c.as_ref()))
                .collect(),
        }
    }
}

impl fmt::Display for VehicleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vehicle_line(f, &self.kind, self.id, self.capacity, self.current_load)
    }
}

/// Outcome of a distribution pass over one company's fleet.
///
/// Holds a snapshot of every vehicle (registration order) and the warnings
/// raised for clients that could not be placed. The `Display` form is the
/// plain-text listing shown to operators.
///
/// # Examples
///
/// ```
/// use u_fleet::company::Company;
/// use u_fleet::models::{Client, Vehicle};
///
/// let mut company = Company::new("MegaTrans");
/// company.add_client(Client::new("Ivan", 5.0, false).unwrap()).unwrap();
/// company.add_vehicle(Vehicle::truck(10.0, "red").unwrap()).unwrap();
///
/// let report = company.distribute();
/// assert!(report.is_complete());
/// assert_eq!(report.placed_count(), 1);
/// assert!(report.to_string().starts_with("Cargo distribution for company 'MegaTrans':"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    /// Company name.
    pub company: String,
    /// Every vehicle, in registration order.
    pub vehicles: Vec<VehicleSummary>,
    /// Clients no vehicle could take, in processing order.
    pub unplaced: Vec<DistributionWarning>,
}

impl DistributionReport {
    /// Builds a report from the current state of a fleet.
    pub fn new(
        company: impl Into<String>,
        vehicles: &[Vehicle],
        unplaced: Vec<DistributionWarning>,
    ) -> Self {
        Self {
            company: company.into(),
            vehicles: vehicles.iter().map(VehicleSummary::from).collect(),
            unplaced,
        }
    }

    /// Returns `true` if every client found a vehicle.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Number of client loads across all vehicles.
    pub fn placed_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.clients.len()).sum()
    }

    /// Number of clients left without a vehicle.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Total load across all vehicles.
    pub fn total_load(&self) -> f64 {
        self.vehicles.iter().map(|v| v.current_load).sum()
    }

    /// Serializes the report as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DistributionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cargo distribution for company '{}':", self.company)?;
        for vehicle in &self.vehicles {
            writeln!(f, "{vehicle}")?;
            if vehicle.clients.is_empty() {
                writeln!(f, "  No clients loaded.")?;
                continue;
            }
            for client in &vehicle.clients {
                writeln!(f, "  - {client}")?;
            }
        }
        for warning in &self.unplaced {
            writeln!(f, "Warning: {warning}")?;
        }
        Ok(())
    }
}
