use crate::domain::model::{DuckKind, FactoryKind};
use crate::utils::error::Result;
use std::rc::Weak;

/// Anything that emits one sound on command.
pub trait SoundProducer {
    fn produce(&self);

    /// The subject role, for the variants that carry one.
    fn as_observable_mut(&mut self) -> Option<&mut dyn QuackObservable> {
        None
    }
}

pub trait QuackObservable {
    fn register_observer(&mut self, observer: Weak<dyn QuackObserver>) -> Result<()>;
    fn notify_observers(&self);
    fn name(&self) -> &'static str;
}

pub trait QuackObserver {
    fn update(&self, duck: &dyn QuackObservable);
}

/// Destination of every emitted line.
pub trait SoundSink {
    fn emit(&self, line: &str);
}

pub trait AbstractDuckFactory {
    fn create_mallard_duck(&self) -> Box<dyn SoundProducer>;
    fn create_red_head_duck(&self) -> Box<dyn SoundProducer>;
    fn create_duck_call(&self) -> Box<dyn SoundProducer>;
    fn create_rubber_duck(&self) -> Box<dyn SoundProducer>;

    fn kind(&self) -> FactoryKind;

    /// Decorated emissions so far, or `None` if this factory does not count.
    fn tally(&self) -> Option<u64>;

    fn create(&self, kind: DuckKind) -> Box<dyn SoundProducer> {
        match kind {
            DuckKind::Mallard => self.create_mallard_duck(),
            DuckKind::RedHead => self.create_red_head_duck(),
            DuckKind::DuckCall => self.create_duck_call(),
            DuckKind::Rubber => self.create_rubber_duck(),
        }
    }
}
