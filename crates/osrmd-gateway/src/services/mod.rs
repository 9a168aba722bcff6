//! Built-in query services.

pub mod engine_service;

pub use engine_service::EngineService;

/// The fixed set of services the daemon exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Route,
    Table,
    Nearest,
    Trip,
    Match,
    Tile,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::Route,
        ServiceKind::Table,
        ServiceKind::Nearest,
        ServiceKind::Trip,
        ServiceKind::Match,
        ServiceKind::Tile,
    ];

    /// Name used for lookup and as the `plugin` metric label.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Route => "route",
            ServiceKind::Table => "table",
            ServiceKind::Nearest => "nearest",
            ServiceKind::Trip => "trip",
            ServiceKind::Match => "match",
            ServiceKind::Tile => "tile",
        }
    }

    /// Protocol version each service speaks.
    pub fn version(self) -> u32 {
        1
    }
}
