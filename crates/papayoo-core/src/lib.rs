#![deny(warnings)]
pub mod error;
pub mod game;
pub mod model;

pub use error::PapayooError;
pub use game::engine::{RoundEngine, StepOutcome};
pub use game::snapshot::RoundSnapshot;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "papayoo"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
