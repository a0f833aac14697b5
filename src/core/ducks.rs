use crate::core::observable::Observable;
use crate::domain::model::Sound;
use crate::domain::ports::{QuackObservable, QuackObserver, SoundProducer, SoundSink};
use crate::utils::error::Result;
use std::rc::{Rc, Weak};

/// The only variant with a subject role; the subject is an owned field, not a base.
pub struct MallardDuck {
    sink: Rc<dyn SoundSink>,
    observable: Observable,
}

impl MallardDuck {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self {
            sink,
            observable: Observable::new(),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observable.len()
    }
}

impl SoundProducer for MallardDuck {
    fn produce(&self) {
        self.sink.emit(Sound::Quack.as_str());
        self.notify_observers();
    }

    fn as_observable_mut(&mut self) -> Option<&mut dyn QuackObservable> {
        Some(self)
    }
}

impl QuackObservable for MallardDuck {
    fn register_observer(&mut self, observer: Weak<dyn QuackObserver>) -> Result<()> {
        self.observable.register(observer)
    }

    fn notify_observers(&self) {
        self.observable.notify(self);
    }

    fn name(&self) -> &'static str {
        "Mallard Duck"
    }
}

pub struct RedHeadDuck {
    sink: Rc<dyn SoundSink>,
}

impl RedHeadDuck {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self { sink }
    }
}

impl SoundProducer for RedHeadDuck {
    fn produce(&self) {
        self.sink.emit(Sound::Quack.as_str());
    }
}

pub struct DuckCall {
    sink: Rc<dyn SoundSink>,
}

impl DuckCall {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self { sink }
    }
}

impl SoundProducer for DuckCall {
    fn produce(&self) {
        self.sink.emit(Sound::Kwak.as_str());
    }
}

pub struct RubberDuck {
    sink: Rc<dyn SoundSink>,
}

impl RubberDuck {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self { sink }
    }
}

impl SoundProducer for RubberDuck {
    fn produce(&self) {
        self.sink.emit(Sound::Squeak.as_str());
    }
}
