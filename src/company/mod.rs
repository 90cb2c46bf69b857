//! Fleet registry.
//!
//! A [`Company`] owns its clients and vehicles and runs distribution passes
//! over them. Companies are independent of each other; nothing here is
//! global.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use crate::distribution::{
    first_fit, vip_first_order, DistributionOptions, DistributionReport, DistributionWarning,
};
use crate::error::{DistributionError, RegistrationError};
use crate::models::{Client, ClientId, Vehicle, VehicleId};

/// A transport company: a named registry of clients and vehicles.
///
/// Both collections keep registration order, which drives tie-breaking in
/// the distribution pass.
///
/// Distribution never resets vehicles on its own. Calling
/// [`distribute`](Self::distribute) twice books every client again; use
/// [`reset`](Self::reset) or [`DistributionOptions::with_reset_before_run`]
/// to re-run from scratch.
///
/// `Company` is `Send + Sync`. A service sharing one across threads must
/// guard it with a single lock, since a pass reads and writes every vehicle.
///
/// # Examples
///
/// ```
/// use u_fleet::company::Company;
/// use u_fleet::models::{Client, Vehicle};
///
/// let mut company = Company::new("MegaTrans");
/// company.add_client(Client::new("Ivan", 5.0, false).unwrap()).unwrap();
/// company.add_client(Client::new("Maria", 7.0, true).unwrap()).unwrap();
/// company.add_client(Client::new("Petr", 3.0, false).unwrap()).unwrap();
/// company.add_vehicle(Vehicle::truck(10.0, "red").unwrap()).unwrap();
/// company.add_vehicle(Vehicle::train(15.0, 3).unwrap()).unwrap();
///
/// let report = company.try_distribute().unwrap();
/// assert!(report.is_complete());
///
/// // Maria (VIP) and Petr fit the truck; Ivan goes to the train
/// assert_eq!(company.vehicles()[0].current_load(), 10.0);
/// assert_eq!(company.vehicles()[1].current_load(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    clients: Vec<Arc<Client>>,
    vehicles: Vec<Vehicle>,
}

impl Company {
    /// Creates a company with no clients or vehicles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            clients: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Company name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered clients, in registration order.
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    /// Registered vehicles, in registration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Looks up a vehicle by ID.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    /// Looks up a client by ID.
    pub fn client(&self, id: ClientId) -> Option<&Arc<Client>> {
        self.clients.iter().find(|c| c.id() == id)
    }

    /// Registers a client.
    ///
    /// Fails without changing the registry if a client with the same ID is
    /// already present.
    pub fn add_client(&mut self, client: Client) -> Result<ClientId, RegistrationError> {
        let id = client.id();
        if self.client(id).is_some() {
            return Err(RegistrationError::DuplicateClient(id));
        }
        info!(company = %self.name, client = %client, "client added");
        self.clients.push(Arc::new(client));
        Ok(id)
    }

    /// Registers a vehicle.
    ///
    /// Fails without changing the registry if a vehicle with the same ID is
    /// already present.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<VehicleId, RegistrationError> {
        let id = vehicle.id();
        if self.vehicle(id).is_some() {
            return Err(RegistrationError::DuplicateVehicle(id));
        }
        info!(company = %self.name, vehicle = %vehicle, "vehicle added");
        self.vehicles.push(vehicle);
        Ok(id)
    }

    /// Display lines for every vehicle, in registration order.
    pub fn list_vehicles(&self) -> Vec<String> {
        self.vehicles.iter().map(|v| v.to_string()).collect()
    }

    /// Checks that there is something to distribute.
    pub fn ensure_ready(&self) -> Result<(), DistributionError> {
        if self.clients.is_empty() {
            return Err(DistributionError::NoClients);
        }
        if self.vehicles.is_empty() {
            return Err(DistributionError::NoVehicles);
        }
        Ok(())
    }

    /// Runs one distribution pass with default options.
    ///
    /// Existing loads are kept. See [`distribute_with`](Self::distribute_with).
    pub fn distribute(&mut self) -> DistributionReport {
        self.distribute_with(&DistributionOptions::default())
    }

    /// Runs one distribution pass.
    ///
    /// VIP clients are placed first; each client goes to the first vehicle
    /// with room. Clients that fit nowhere are listed in the report's
    /// warnings and the pass carries on.
    pub fn distribute_with(&mut self, options: &DistributionOptions) -> DistributionReport {
        if options.reset_before_run() {
            self.reset();
        }

        info!(
            company = %self.name,
            clients = self.clients.len(),
            vehicles = self.vehicles.len(),
            "starting cargo distribution"
        );
        let unplaced = first_fit(&self.clients, &mut self.vehicles);
        let report = DistributionReport::new(self.name.clone(), &self.vehicles, unplaced);
        info!(
            company = %self.name,
            placed = report.placed_count(),
            unplaced = report.unplaced_count(),
            "cargo distribution finished"
        );
        report
    }

    /// Checks [`ensure_ready`](Self::ensure_ready), then runs
    /// [`distribute`](Self::distribute).
    pub fn try_distribute(&mut self) -> Result<DistributionReport, DistributionError> {
        self.ensure_ready()?;
        Ok(self.distribute())
    }

    /// Unloads every vehicle.
    pub fn reset(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.reset();
        }
    }

    /// Snapshot of the current fleet state, without running a pass.
    ///
    /// Every registered client that sits on no vehicle is listed as
    /// unplaced, in processing order (VIP first).
    pub fn report(&self) -> DistributionReport {
        let loaded: HashSet<ClientId> = self
            .vehicles
            .iter()
            .flat_map(|v| v.assigned_clients().iter().map(|c| c.id()))
            .collect();
        let unplaced = vip_first_order(&self.clients)
            .into_iter()
            .filter(|c| !loaded.contains(&c.id()))
            .map(|c| DistributionWarning::unplaced(c))
            .collect();
        DistributionReport::new(self.name.clone(), &self.vehicles, unplaced)
    }
}
