use crate::domain::ports::{QuackObservable, QuackObserver, SoundSink};
use std::cell::Cell;
use std::rc::Rc;

/// Observer that reports every quack it hears about.
pub struct Quackologist {
    sink: Rc<dyn SoundSink>,
    sightings: Cell<u64>,
}

impl Quackologist {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self {
            sink,
            sightings: Cell::new(0),
        }
    }

    pub fn sightings(&self) -> u64 {
        self.sightings.get()
    }
}

impl QuackObserver for Quackologist {
    fn update(&self, duck: &dyn QuackObservable) {
        self.sightings.set(self.sightings.get() + 1);
        tracing::debug!("Quackologist notified by {}", duck.name());
        self.sink
            .emit(&format!("Quackologist: {} just quacked.", duck.name()));
    }
}
