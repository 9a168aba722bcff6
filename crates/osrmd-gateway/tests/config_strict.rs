#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use osrmd_gateway::config::{self, Algorithm};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:5000"
engine:
  dataset: "berlin.osrm"
  max_locations_tirp: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "InvalidOptions");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
engine:
  dataset: "berlin.osrm"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:5000");
    assert_eq!(cfg.server.working_threads, 8);
    assert_eq!(cfg.engine.algorithm, Algorithm::Ch);
    assert_eq!(cfg.engine.max_locations_viaroute, -1);
}

#[test]
fn shared_memory_needs_no_dataset() {
    let ok = r#"
version: 1
engine:
  algorithm: mld
  use_shared_memory: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.engine.algorithm, Algorithm::Mld);
}

#[test]
fn missing_dataset_is_fatal() {
    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert!(err.to_string().contains("dataset"), "{err}");
}

#[test]
fn bad_limits_and_threads_are_rejected() {
    let zero_limit = r#"
version: 1
engine:
  dataset: "berlin.osrm"
  max_results_nearest: 0
"#;
    assert!(config::load_from_str(zero_limit).is_err());

    let no_threads = r#"
version: 1
server:
  working_threads: 0
engine:
  dataset: "berlin.osrm"
"#;
    assert!(config::load_from_str(no_threads).is_err());

    let bad_listen = r#"
version: 1
server:
  listen: "not-an-address"
engine:
  dataset: "berlin.osrm"
"#;
    assert!(config::load_from_str(bad_listen).is_err());
}

#[test]
fn unsupported_config_version() {
    let err = config::load_from_str("version: 2\nengine:\n  dataset: x\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "InvalidOptions");
}
