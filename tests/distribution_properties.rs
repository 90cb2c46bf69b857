//! Property tests for the data model and distribution pass.

use std::collections::HashMap;
use std::sync::Arc;

use proptest::prelude::*;
use u_fleet::company::Company;
use u_fleet::models::{Client, ClientId, Vehicle};

fn summed_weight(vehicle: &Vehicle) -> f64 {
    vehicle
        .assigned_clients()
        .iter()
        .fold(0.0, |load, c| load + c.cargo_weight())
}

fn client_strategy() -> impl Strategy<Value = (f64, bool)> {
    (0.0f64..20.0, any::<bool>())
}

fn build_company(clients: &[(f64, bool)], capacities: &[f64]) -> Company {
    let mut company = Company::new("Prop");
    for (i, &(weight, vip)) in clients.iter().enumerate() {
        company
            .add_client(Client::new(format!("c{i}"), weight, vip).expect("valid client"))
            .expect("registered");
    }
    for &cap in capacities {
        company
            .add_vehicle(Vehicle::train(cap, 2).expect("valid vehicle"))
            .expect("registered");
    }
    company
}

proptest! {
    #[test]
    fn load_never_exceeds_capacity(
        capacity in 0.1f64..50.0,
        weights in prop::collection::vec(0.0f64..20.0, 0..30),
    ) {
        let mut vehicle = Vehicle::truck(capacity, "grey").expect("valid");
        for (i, w) in weights.into_iter().enumerate() {
            let client = Arc::new(Client::new(format!("c{i}"), w, false).expect("valid"));
            let before = vehicle.current_load();
            let loaded = vehicle.attempt_load(&client);
            if !loaded {
                prop_assert_eq!(vehicle.current_load(), before);
            }
            prop_assert!(vehicle.current_load() <= vehicle.capacity());
            prop_assert_eq!(vehicle.current_load(), summed_weight(&vehicle));
        }
    }

    #[test]
    fn release_keeps_load_equal_to_sum(
        weights in prop::collection::vec(0.0f64..5.0, 1..15),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut vehicle = Vehicle::truck(100.0, "grey").expect("valid");
        let clients: Vec<Arc<Client>> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Arc::new(Client::new(format!("c{i}"), w, false).expect("valid")))
            .collect();
        for c in &clients {
            prop_assert!(vehicle.attempt_load(c));
        }

        let target = &clients[pick.index(clients.len())];
        prop_assert!(vehicle.release(target.id()).is_some());
        prop_assert_eq!(vehicle.assigned_clients().len(), clients.len() - 1);
        prop_assert_eq!(vehicle.current_load(), summed_weight(&vehicle));
    }

    #[test]
    fn every_client_accounted_for_once(
        clients in prop::collection::vec(client_strategy(), 0..25),
        capacities in prop::collection::vec(0.5f64..30.0, 0..5),
    ) {
        let mut company = build_company(&clients, &capacities);
        let report = company.distribute();

        prop_assert_eq!(report.placed_count() + report.unplaced_count(), clients.len());
        for vehicle in company.vehicles() {
            prop_assert!(vehicle.current_load() <= vehicle.capacity());
            prop_assert_eq!(vehicle.current_load(), summed_weight(vehicle));
        }
    }

    #[test]
    fn vip_first_and_stable_within_groups(
        clients in prop::collection::vec(client_strategy(), 0..25),
        capacities in prop::collection::vec(0.5f64..30.0, 1..5),
    ) {
        let mut company = build_company(&clients, &capacities);
        let report = company.distribute();

        let position: HashMap<ClientId, usize> = company
            .clients()
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id(), i))
            .collect();
        let rank = |c: &Client| (!c.is_vip(), position[&c.id()]);

        for vehicle in company.vehicles() {
            let ranks: Vec<_> = vehicle
                .assigned_clients()
                .iter()
                .map(|c| rank(c.as_ref()))
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        }

        let unplaced: Vec<_> = report
            .unplaced
            .iter()
            .map(|w| {
                let c = company.client(w.client_id()).expect("registered");
                rank(c.as_ref())
            })
            .collect();
        prop_assert!(unplaced.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn vip_wins_contested_space(
        capacity in 1.0f64..50.0,
        vip_share in 0.51f64..1.0,
        regular_share in 0.51f64..1.0,
    ) {
        // each client fits alone, both together do not
        let mut company = Company::new("Prop");
        company
            .add_client(Client::new("regular", capacity * regular_share, false).expect("valid"))
            .expect("registered");
        let vip = company
            .add_client(Client::new("vip", capacity * vip_share, true).expect("valid"))
            .expect("registered");
        company
            .add_vehicle(Vehicle::truck(capacity, "grey").expect("valid"))
            .expect("registered");

        let report = company.distribute();
        let loaded = company.vehicles()[0].assigned_clients();
        prop_assert_eq!(loaded.len(), 1);
        prop_assert_eq!(loaded[0].id(), vip);
        prop_assert_eq!(report.unplaced_count(), 1);
    }

    #[test]
    fn reset_run_matches_first_run(
        clients in prop::collection::vec(client_strategy(), 0..20),
        capacities in prop::collection::vec(0.5f64..30.0, 1..4),
    ) {
        let mut company = build_company(&clients, &capacities);
        let first = company.distribute();
        company.reset();
        let second = company.distribute();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn snapshot_agrees_with_run(
        clients in prop::collection::vec(client_strategy(), 0..20),
        capacities in prop::collection::vec(0.5f64..30.0, 0..4),
    ) {
        let mut company = build_company(&clients, &capacities);
        let run = company.distribute();
        let snapshot = company.report();
        prop_assert_eq!(run.is_complete(), snapshot.is_complete());
        prop_assert_eq!(run, snapshot);
    }

    #[test]
    fn invalid_fields_never_construct(
        weight in -100.0f64..-0.001,
        capacity in -100.0f64..=0.0,
    ) {
        prop_assert!(Client::new("x", weight, false).is_err());
        prop_assert!(Vehicle::truck(capacity, "grey").is_err());
        prop_assert!(Vehicle::train(capacity, 3).is_err());
        prop_assert!(Vehicle::train(10.0, 0).is_err());
    }
}
