use crate::domain::model::{FactoryKind, Scene};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "simu-ducks")]
#[command(about = "Duck simulator: observer, decorator, adapter, factory and composite in one flock")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = FactoryKind::Counting)]
    pub factory: FactoryKind,

    #[arg(long, value_enum, default_value_t = Scene::Nested)]
    pub scene: Scene,

    #[arg(long, help = "Attach a quackologist to every mallard")]
    pub quackologist: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_select_counted_nested_scene() {
        let config = CliConfig::parse_from(["simu-ducks"]);

        assert_eq!(config.factory, FactoryKind::Counting);
        assert_eq!(config.scene, Scene::Nested);
        assert!(!config.quackologist);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "simu-ducks",
            "--factory",
            "plain",
            "--scene",
            "flat",
            "--quackologist",
        ]);

        assert_eq!(config.factory, FactoryKind::Plain);
        assert_eq!(config.scene, Scene::Flat);
        assert!(config.quackologist);
    }

    #[test]
    fn test_rejects_unknown_factory() {
        assert!(CliConfig::try_parse_from(["simu-ducks", "--factory", "wooden"]).is_err());
    }

    #[test]
    fn test_serializes_lowercase_selectors() {
        let json = serde_json::to_value(CliConfig::default()).unwrap();

        assert_eq!(json["factory"], "counting");
        assert_eq!(json["scene"], "nested");
    }
}
