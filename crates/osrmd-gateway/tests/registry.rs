#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use osrmd_core::protocol::{Payload, Reply};
use osrmd_gateway::config::EngineConfig;
use osrmd_gateway::dispatch::{QueryService, ServiceRegistry};

use common::{echo_engine, engine_config, FixedService};

fn ok_reply() -> Reply {
    Reply::ok(Payload::Json(serde_json::json!({ "code": "Ok" })))
}

#[test]
fn builtin_registry_has_six_services() {
    let registry = ServiceRegistry::from_config(&engine_config(), echo_engine()).unwrap();

    assert_eq!(
        registry.names(),
        vec!["match", "nearest", "route", "table", "tile", "trip"]
    );
    for (_, svc) in registry.iter() {
        assert_eq!(svc.version(), 1);
        assert_eq!(svc.usage(), 0);
    }
}

#[test]
fn invalid_engine_config_fails_construction() {
    let cfg = EngineConfig::default(); // neither dataset nor shared memory
    let err = ServiceRegistry::from_config(&cfg, echo_engine()).err().expect("must fail");
    assert_eq!(err.code().as_str(), "InvalidOptions");

    let cfg = EngineConfig {
        max_locations_trip: 0,
        ..engine_config()
    };
    assert!(ServiceRegistry::from_config(&cfg, echo_engine()).is_err());
}

#[test]
fn reserved_error_bucket_name_is_refused() {
    let services: Vec<Arc<dyn QueryService>> = vec![FixedService::new("invalid", 1, ok_reply())];
    let err = ServiceRegistry::new(services).err().expect("must fail");
    assert!(err.to_string().contains("reserved"));
}

#[test]
fn duplicate_names_are_refused() {
    let services: Vec<Arc<dyn QueryService>> = vec![
        FixedService::new("route", 1, ok_reply()),
        FixedService::new("route", 5, ok_reply()),
    ];
    assert!(ServiceRegistry::new(services).is_err());
}

#[test]
fn empty_registry_is_refused() {
    assert!(ServiceRegistry::new(Vec::new()).is_err());
}

#[test]
fn lookup_is_exact() {
    let services: Vec<Arc<dyn QueryService>> = vec![FixedService::new("route", 1, ok_reply())];
    let registry = ServiceRegistry::new(services).unwrap();

    assert!(registry.get("route").is_some());
    assert!(registry.get("Route").is_none());
    assert!(registry.get("").is_none());
    assert_eq!(registry.len(), 1);
}
