use crate::domain::model::Sound;
use crate::domain::ports::{SoundProducer, SoundSink};
use std::rc::Rc;

/// Not a duck. Honks instead of producing.
pub struct Goose {
    sink: Rc<dyn SoundSink>,
}

impl Goose {
    pub fn new(sink: Rc<dyn SoundSink>) -> Self {
        Self { sink }
    }

    pub fn honk(&self) {
        self.sink.emit(Sound::Honk.as_str());
    }
}

/// Lets a goose stand in wherever a sound producer is expected.
pub struct GooseAdapter {
    goose: Goose,
}

impl GooseAdapter {
    pub fn new(goose: Goose) -> Self {
        Self { goose }
    }
}

impl SoundProducer for GooseAdapter {
    fn produce(&self) {
        self.goose.honk();
    }
}
