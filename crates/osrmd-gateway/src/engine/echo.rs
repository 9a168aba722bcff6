//! Echo engine: answers every query with a document describing what it
//! received. Useful to prove service routing without a dataset loaded.

use bytes::Bytes;
use serde_json::json;

use osrmd_core::protocol::Payload;

use super::{Engine, EngineFailure, EngineInfo};
use crate::config::EngineConfig;
use crate::services::ServiceKind;

pub struct EchoEngine {
    info: EngineInfo,
    limits: Limits,
}

struct Limits {
    trip: i64,
    viaroute: i64,
    distance_table: i64,
    map_matching: i64,
}

impl EchoEngine {
    pub fn new(cfg: &EngineConfig) -> Self {
        let mut info = EngineInfo::new();
        info.insert("algorithm".into(), cfg.algorithm.as_str().into());
        info.insert(
            "dataset_name".into(),
            cfg.dataset_name.clone().unwrap_or_default(),
        );
        info.insert("shared_memory".into(), cfg.use_shared_memory.to_string());

        Self {
            info,
            limits: Limits {
                trip: cfg.max_locations_trip,
                viaroute: cfg.max_locations_viaroute,
                distance_table: cfg.max_locations_distance_table,
                map_matching: cfg.max_locations_map_matching,
            },
        }
    }

    fn max_locations(&self, kind: ServiceKind) -> Option<i64> {
        let limit = match kind {
            ServiceKind::Route => self.limits.viaroute,
            ServiceKind::Table => self.limits.distance_table,
            ServiceKind::Trip => self.limits.trip,
            ServiceKind::Match => self.limits.map_matching,
            ServiceKind::Nearest => 1,
            ServiceKind::Tile => return None,
        };
        (limit != -1).then_some(limit)
    }
}

/// Number of `;`-separated locations before the options part (`?...`).
fn count_locations(query: &str) -> usize {
    let coords = query.split_once('?').map_or(query, |(c, _)| c);
    if coords.is_empty() {
        0
    } else {
        coords.split(';').count()
    }
}

impl Engine for EchoEngine {
    fn info(&self) -> &EngineInfo {
        &self.info
    }

    fn run(
        &self,
        kind: ServiceKind,
        prefix_length: usize,
        query: &str,
    ) -> std::result::Result<Payload, EngineFailure> {
        if kind == ServiceKind::Tile {
            return Ok(Payload::Binary(Bytes::copy_from_slice(query.as_bytes())));
        }

        let locations = count_locations(query);
        if locations == 0 {
            return Err(EngineFailure::new(
                "InvalidQuery",
                format!("Query string malformed close to position {prefix_length}"),
            ));
        }
        if let Some(max) = self.max_locations(kind) {
            if locations as i64 > max {
                return Err(EngineFailure::new(
                    "TooBig",
                    format!("Too many locations ({locations} > {max})"),
                ));
            }
        }

        Ok(Payload::Json(json!({
            "code": "Ok",
            "service": kind.name(),
            "prefix_length": prefix_length,
            "locations": locations,
            "query": query,
        })))
    }
}
