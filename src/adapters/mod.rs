// Adapters layer: where emitted sounds end up, and who listens to them.

pub mod quackologist;
pub mod sink;

pub use quackologist::Quackologist;
pub use sink::{ConsoleSink, RecordingSink};
