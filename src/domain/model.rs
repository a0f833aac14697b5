use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal each producer variant emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Quack,
    Kwak,
    Squeak,
    Honk,
}

impl Sound {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Quack => "Quack",
            Sound::Kwak => "Kwak",
            Sound::Squeak => "Squeak",
            Sound::Honk => "Honk",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four leaf variants a factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuckKind {
    Mallard,
    RedHead,
    DuckCall,
    Rubber,
}

impl DuckKind {
    pub const ALL: [DuckKind; 4] = [
        DuckKind::Mallard,
        DuckKind::RedHead,
        DuckKind::DuckCall,
        DuckKind::Rubber,
    ];
}

/// Which factory family builds the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    Plain,
    #[default]
    Counting,
}

/// Topology of the demonstration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    /// Top flock with a goose and a nested flock of four mallards, driven once.
    #[default]
    Nested,
    /// Mallard, red-head, duck call and rubber duck, each driven individually.
    Flat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub scene: Scene,
    pub factory: FactoryKind,
    /// Final tally; `None` when the factory does not count.
    pub quacks: Option<u64>,
}

impl SimulationReport {
    pub fn summary_line(&self) -> Option<String> {
        self.quacks
            .map(|n| format!("The duck quacked {} times", n))
    }
}
