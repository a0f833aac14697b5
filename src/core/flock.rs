use crate::domain::ports::SoundProducer;
use crate::utils::error::{DuckError, Result};

/// Composite producer. Owns its members and drives them in insertion order.
#[derive(Default)]
pub struct Flock {
    quackers: Vec<Box<dyn SoundProducer>>,
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `duck`; the flock becomes its sole owner.
    pub fn add(&mut self, duck: Box<dyn SoundProducer>) -> Result<()> {
        self.quackers
            .try_reserve(1)
            .map_err(|e| DuckError::construction("flock", e))?;
        self.quackers.push(duck);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.quackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quackers.is_empty()
    }
}

impl SoundProducer for Flock {
    fn produce(&self) {
        for duck in &self.quackers {
            duck.produce();
        }
    }
}
