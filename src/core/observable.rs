use crate::domain::ports::{QuackObservable, QuackObserver};
use crate::utils::error::{DuckError, Result};
use std::rc::Weak;

/// Subject state owned by an observable producer.
///
/// Observers are held weakly: the subject never keeps one alive, and a dropped
/// observer is skipped. Registration order is notification order, and the same
/// observer registered twice is notified twice.
#[derive(Default)]
pub struct Observable {
    observers: Vec<Weak<dyn QuackObserver>>,
}

impl Observable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Weak<dyn QuackObserver>) -> Result<()> {
        self.observers
            .try_reserve(1)
            .map_err(|e| DuckError::construction("observer list", e))?;
        self.observers.push(observer);
        Ok(())
    }

    /// Notifies every live observer with `source` as the event payload.
    pub fn notify(&self, source: &dyn QuackObservable) {
        for observer in &self.observers {
            match observer.upgrade() {
                Some(observer) => observer.update(source),
                None => tracing::trace!("skipping dropped observer of {}", source.name()),
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }
}
