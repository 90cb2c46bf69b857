//! First-fit distribution with VIP priority.
//!
//! Clients are stably partitioned so VIP clients come first, then each
//! client is offered to the vehicles in registration order and loaded on
//! the first one with enough free capacity. A client that fits nowhere is
//! reported and skipped; the pass never aborts.
//!
//! # Complexity
//!
//! O(n log n + n·m) for n clients and m vehicles.

use std::sync::Arc;

use tracing::warn;

use super::DistributionWarning;
use crate::models::{Client, Vehicle};

/// Returns the clients in processing order: VIP clients first, each group in
/// its original order.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_fleet::models::Client;
/// use u_fleet::distribution::vip_first_order;
///
/// let clients = vec![
///     Arc::new(Client::new("A", 1.0, false).unwrap()),
///     Arc::new(Client::new("B", 1.0, true).unwrap()),
///     Arc::new(Client::new("C", 1.0, false).unwrap()),
/// ];
/// let names: Vec<&str> = vip_first_order(&clients).iter().map(|c| c.name()).collect();
/// assert_eq!(names, vec!["B", "A", "C"]);
/// ```
pub fn vip_first_order(clients: &[Arc<Client>]) -> Vec<&Arc<Client>> {
    let mut order: Vec<&Arc<Client>> = clients.iter().collect();
    // sort_by_key is stable: registration order survives within each group
    order.sort_by_key(|c| !c.is_vip());
    order
}

/// Runs one distribution pass, loading clients onto `vehicles` in place.
///
/// Vehicles keep whatever they already carry. Returns one warning per client
/// that no vehicle could accept.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_fleet::models::{Client, Vehicle};
/// use u_fleet::distribution::first_fit;
///
/// let clients = vec![
///     Arc::new(Client::new("A", 8.0, false).unwrap()),
///     Arc::new(Client::new("B", 5.0, true).unwrap()),
/// ];
/// let mut vehicles = vec![Vehicle::truck(10.0, "red").unwrap()];
///
/// let unplaced = first_fit(&clients, &mut vehicles);
/// assert_eq!(vehicles[0].current_load(), 5.0);
/// assert_eq!(unplaced.len(), 1);
/// ```
pub fn first_fit(clients: &[Arc<Client>], vehicles: &mut [Vehicle]) -> Vec<DistributionWarning> {
    let mut unplaced = Vec::new();

    for client in vip_first_order(clients) {
        let placed = vehicles.iter_mut().any(|v| v.attempt_load(client));
        if !placed {
            warn!(
                client = client.name(),
                cargo_weight = client.cargo_weight(),
                "could not load client, not enough space"
            );
            unplaced.push(DistributionWarning::unplaced(client));
        }
    }

    unplaced
}
