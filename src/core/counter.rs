use crate::domain::ports::{QuackObservable, SoundProducer};
use std::cell::Cell;
use std::rc::Rc;

/// Run-wide count of decorated emissions. Starts at zero and is never reset.
#[derive(Debug, Default)]
pub struct QuackTally {
    count: Cell<u64>,
}

impl QuackTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quacks(&self) -> u64 {
        self.count.get()
    }

    fn increment(&self) {
        self.count.set(self.count.get() + 1);
    }
}

/// Decorator that bumps the shared tally, then delegates.
pub struct QuackCounter {
    duck: Box<dyn SoundProducer>,
    tally: Rc<QuackTally>,
}

impl QuackCounter {
    pub fn new(duck: Box<dyn SoundProducer>, tally: Rc<QuackTally>) -> Self {
        Self { duck, tally }
    }

    pub fn quacks(&self) -> u64 {
        self.tally.quacks()
    }
}

impl SoundProducer for QuackCounter {
    fn produce(&self) {
        self.tally.increment();
        self.duck.produce();
    }

    fn as_observable_mut(&mut self) -> Option<&mut dyn QuackObservable> {
        self.duck.as_observable_mut()
    }
}
