use crate::core::flock::Flock;
use crate::core::goose::{Goose, GooseAdapter};
use crate::domain::model::{DuckKind, Scene, SimulationReport};
use crate::domain::ports::{AbstractDuckFactory, QuackObserver, SoundProducer, SoundSink};
use crate::utils::error::Result;
use std::rc::{Rc, Weak};

pub const BANNER: &str = "Duck Simulator";
const MALLARDS_PER_FLOCK: usize = 4;

/// Builds a scene from a factory and drives it.
pub struct DuckSimulator {
    sink: Rc<dyn SoundSink>,
    observer: Option<Weak<dyn QuackObserver>>,
}

impl DuckSimulator {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self {
            sink,
            observer: None,
        }
    }

    /// Registers `observer` on every mallard this simulator builds.
    pub fn with_observer(mut self, observer: Weak<dyn QuackObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn simulate(
        &self,
        factory: &dyn AbstractDuckFactory,
        scene: Scene,
    ) -> Result<SimulationReport> {
        tracing::info!("Simulating {:?} scene with {:?} factory", scene, factory.kind());

        match scene {
            Scene::Nested => self.simulate_nested(factory)?,
            Scene::Flat => self.simulate_flat(factory)?,
        }

        let report = SimulationReport {
            scene,
            factory: factory.kind(),
            quacks: factory.tally(),
        };
        if let Some(summary) = report.summary_line() {
            self.sink.emit(&summary);
        }

        tracing::info!("Simulation finished: {:?}", report);
        Ok(report)
    }

    pub fn simulate_producer(&self, duck: &dyn SoundProducer) {
        duck.produce();
    }

    fn simulate_nested(&self, factory: &dyn AbstractDuckFactory) -> Result<()> {
        self.sink.emit(BANNER);

        let mut flock_of_ducks = Flock::new();
        flock_of_ducks.add(self.create(factory, DuckKind::RedHead)?)?;
        flock_of_ducks.add(self.create(factory, DuckKind::DuckCall)?)?;
        flock_of_ducks.add(self.create(factory, DuckKind::Rubber)?)?;
        flock_of_ducks.add(Box::new(GooseAdapter::new(Goose::new(self.sink.clone()))))?;

        let mut flock_of_mallards = Flock::new();
        for _ in 0..MALLARDS_PER_FLOCK {
            flock_of_mallards.add(self.create(factory, DuckKind::Mallard)?)?;
        }
        flock_of_ducks.add(Box::new(flock_of_mallards))?;

        tracing::debug!("Built flock of {} members", flock_of_ducks.len());
        self.simulate_producer(&flock_of_ducks);
        Ok(())
    }

    fn simulate_flat(&self, factory: &dyn AbstractDuckFactory) -> Result<()> {
        let ducks = DuckKind::ALL
            .iter()
            .map(|kind| self.create(factory, *kind))
            .collect::<Result<Vec<_>>>()?;

        self.sink.emit(BANNER);
        for duck in &ducks {
            self.simulate_producer(duck.as_ref());
        }
        Ok(())
    }

    fn create(
        &self,
        factory: &dyn AbstractDuckFactory,
        kind: DuckKind,
    ) -> Result<Box<dyn SoundProducer>> {
        let mut duck = factory.create(kind);
        if let Some(observer) = &self.observer {
            if let Some(observable) = duck.as_observable_mut() {
                tracing::debug!("Attaching observer to {}", observable.name());
                observable.register_observer(observer.clone())?;
            }
        }
        Ok(duck)
    }
}
