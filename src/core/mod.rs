pub mod counter;
pub mod ducks;
pub mod factory;
pub mod flock;
pub mod goose;
pub mod observable;
pub mod simulator;

pub use crate::domain::model::{DuckKind, FactoryKind, Scene, SimulationReport, Sound};
pub use crate::domain::ports::{
    AbstractDuckFactory, QuackObservable, QuackObserver, SoundProducer, SoundSink,
};
pub use crate::utils::error::Result;
