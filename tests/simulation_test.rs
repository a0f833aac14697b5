use anyhow::Result;
use simu_ducks::core::{
    AbstractDuckFactory, DuckKind, FactoryKind, QuackObserver, Scene, SoundProducer, SoundSink,
};
use simu_ducks::{
    CountingDuckFactory, DuckFactory, DuckSimulator, Flock, Goose, GooseAdapter, QuackCounter,
    QuackTally, Quackologist, RecordingSink,
};
use std::rc::Rc;

fn recording() -> (Rc<RecordingSink>, Rc<dyn SoundSink>) {
    let recording = Rc::new(RecordingSink::new());
    let sink: Rc<dyn SoundSink> = recording.clone();
    (recording, sink)
}

#[test]
fn test_flat_scene_with_counting_factory() -> Result<()> {
    let (recording, sink) = recording();
    let factory = CountingDuckFactory::new(sink.clone());

    let report = DuckSimulator::new(sink).simulate(&factory, Scene::Flat)?;

    assert_eq!(report.scene, Scene::Flat);
    assert_eq!(report.quacks, Some(4));
    assert_eq!(
        recording.lines(),
        vec![
            "Duck Simulator",
            "Quack",
            "Quack",
            "Kwak",
            "Squeak",
            "The duck quacked 4 times"
        ]
    );
    Ok(())
}

#[test]
fn test_nested_scene_with_counting_factory() -> Result<()> {
    let (recording, sink) = recording();
    let factory = CountingDuckFactory::new(sink.clone());

    let report = DuckSimulator::new(sink).simulate(&factory, Scene::Nested)?;

    // The goose is not built by the factory, so it is not counted.
    assert_eq!(report.quacks, Some(7));
    assert_eq!(report.factory, FactoryKind::Counting);
    assert_eq!(
        recording.lines(),
        vec![
            "Duck Simulator",
            "Quack",
            "Kwak",
            "Squeak",
            "Honk",
            "Quack",
            "Quack",
            "Quack",
            "Quack",
            "The duck quacked 7 times"
        ]
    );
    Ok(())
}

#[test]
fn test_flat_scene_with_plain_factory_skips_summary() -> Result<()> {
    let (recording, sink) = recording();
    let factory = DuckFactory::new(sink.clone());

    let report = DuckSimulator::new(sink).simulate(&factory, Scene::Flat)?;

    assert_eq!(report.quacks, None);
    assert_eq!(recording.lines().last().map(String::as_str), Some("Squeak"));
    Ok(())
}

#[test]
fn test_tally_spans_runs_without_reset() -> Result<()> {
    let (_, sink) = recording();
    let factory = CountingDuckFactory::new(sink.clone());
    let simulator = DuckSimulator::new(sink);

    simulator.simulate(&factory, Scene::Flat)?;
    let report = simulator.simulate(&factory, Scene::Nested)?;

    assert_eq!(report.quacks, Some(11));
    Ok(())
}

#[test]
fn test_counting_is_independent_of_nesting_depth() -> Result<()> {
    let (recording, sink) = recording();
    let tally = Rc::new(QuackTally::new());
    let factory = CountingDuckFactory::with_tally(sink.clone(), tally.clone());

    let mut deepest = Flock::new();
    deepest.add(factory.create(DuckKind::Rubber))?;
    let mut middle = Flock::new();
    middle.add(Box::new(deepest))?;
    middle.add(factory.create(DuckKind::DuckCall))?;
    let mut top = Flock::new();
    top.add(Box::new(middle))?;
    top.add(Box::new(QuackCounter::new(
        Box::new(GooseAdapter::new(Goose::new(sink))),
        tally.clone(),
    )))?;

    top.produce();
    top.produce();

    assert_eq!(tally.quacks(), 6);
    assert_eq!(factory.tally(), Some(6));
    assert_eq!(
        recording.lines(),
        vec!["Squeak", "Kwak", "Honk", "Squeak", "Kwak", "Honk"]
    );
    Ok(())
}

#[test]
fn test_quackologist_follows_counted_mallards() -> Result<()> {
    let (recording, sink) = recording();
    let watcher = Rc::new(Quackologist::new(sink.clone()));
    let observer: Rc<dyn QuackObserver> = watcher.clone();
    let factory = CountingDuckFactory::new(sink.clone());

    let simulator = DuckSimulator::new(sink).with_observer(Rc::downgrade(&observer));
    let report = simulator.simulate(&factory, Scene::Flat)?;

    assert_eq!(report.quacks, Some(4));
    assert_eq!(watcher.sightings(), 1);
    assert_eq!(
        recording.lines()[1..3],
        ["Quack", "Quackologist: Mallard Duck just quacked."]
    );
    Ok(())
}

#[test]
fn test_report_serializes() -> Result<()> {
    let (_, sink) = recording();
    let factory = CountingDuckFactory::new(sink.clone());
    let report = DuckSimulator::new(sink).simulate(&factory, Scene::Flat)?;

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["scene"], "flat");
    assert_eq!(json["factory"], "counting");
    assert_eq!(json["quacks"], 4);
    Ok(())
}
