use clap::Parser;
use simu_ducks::core::{QuackObserver, SoundSink};
use simu_ducks::utils::logger;
use simu_ducks::{factory_for, CliConfig, ConsoleSink, DuckSimulator, Quackologist};
use std::rc::Rc;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting simu-ducks");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let sink: Rc<dyn SoundSink> = Rc::new(ConsoleSink);
    let factory = factory_for(config.factory, sink.clone());

    let mut simulator = DuckSimulator::new(sink.clone());
    let quackologist: Option<Rc<dyn QuackObserver>> = config
        .quackologist
        .then(|| Rc::new(Quackologist::new(sink.clone())) as Rc<dyn QuackObserver>);
    if let Some(observer) = &quackologist {
        simulator = simulator.with_observer(Rc::downgrade(observer));
    }

    match simulator.simulate(factory.as_ref(), config.scene) {
        Ok(report) => {
            tracing::debug!("Report: {:?}", report);
        }
        Err(e) => {
            tracing::error!("Simulation failed: {}", e);
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
