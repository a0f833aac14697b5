pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, Quackologist, RecordingSink};
pub use core::{
    counter::{QuackCounter, QuackTally},
    factory::{factory_for, CountingDuckFactory, DuckFactory},
    flock::Flock,
    goose::{Goose, GooseAdapter},
    simulator::DuckSimulator,
};
pub use utils::error::{DuckError, Result};
