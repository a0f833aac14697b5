use crate::core::counter::{QuackCounter, QuackTally};
use crate::core::ducks::{DuckCall, MallardDuck, RedHeadDuck, RubberDuck};
use crate::domain::model::FactoryKind;
use crate::domain::ports::{AbstractDuckFactory, SoundProducer, SoundSink};
use std::rc::Rc;

/// Builds bare ducks.
pub struct DuckFactory {
    sink: Rc<dyn SoundSink>,
}

impl DuckFactory {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self { sink }
    }
}

impl AbstractDuckFactory for DuckFactory {
    fn create_mallard_duck(&self) -> Box<dyn SoundProducer> {
        Box::new(MallardDuck::new(self.sink.clone()))
    }

    fn create_red_head_duck(&self) -> Box<dyn SoundProducer> {
        Box::new(RedHeadDuck::new(self.sink.clone()))
    }

    fn create_duck_call(&self) -> Box<dyn SoundProducer> {
        Box::new(DuckCall::new(self.sink.clone()))
    }

    fn create_rubber_duck(&self) -> Box<dyn SoundProducer> {
        Box::new(RubberDuck::new(self.sink.clone()))
    }

    fn kind(&self) -> FactoryKind {
        FactoryKind::Plain
    }

    fn tally(&self) -> Option<u64> {
        None
    }
}

/// Builds every duck pre-wrapped in a [`QuackCounter`] sharing one tally.
pub struct CountingDuckFactory {
    ducks: DuckFactory,
    tally: Rc<QuackTally>,
}

impl CountingDuckFactory {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self::with_tally(sink, Rc::new(QuackTally::new()))
    }

    pub fn with_tally(sink: Rc<dyn SoundSink>, tally: Rc<QuackTally>) -> Self {
        Self {
            ducks: DuckFactory::new(sink),
            tally,
        }
    }

    fn counted(&self, duck: Box<dyn SoundProducer>) -> Box<dyn SoundProducer> {
        Box::new(QuackCounter::new(duck, self.tally.clone()))
    }
}

impl AbstractDuckFactory for CountingDuckFactory {
    fn create_mallard_duck(&self) -> Box<dyn SoundProducer> {
        self.counted(self.ducks.create_mallard_duck())
    }

    fn create_red_head_duck(&self) -> Box<dyn SoundProducer> {
        self.counted(self.ducks.create_red_head_duck())
    }

    fn create_duck_call(&self) -> Box<dyn SoundProducer> {
        self.counted(self.ducks.create_duck_call())
    }

    fn create_rubber_duck(&self) -> Box<dyn SoundProducer> {
        self.counted(self.ducks.create_rubber_duck())
    }

    fn kind(&self) -> FactoryKind {
        FactoryKind::Counting
    }

    fn tally(&self) -> Option<u64> {
        Some(self.tally.quacks())
    }
}

/// Picks the factory family for a run.
pub fn factory_for(kind: FactoryKind, sink: Rc<dyn SoundSink>) -> Box<dyn AbstractDuckFactory> {
    match kind {
        FactoryKind::Plain => Box::new(DuckFactory::new(sink)),
        FactoryKind::Counting => Box::new(CountingDuckFactory::new(sink)),
    }
}
