//! Demonstrates enabling verbose logging for kgoertzel.
use kgoertzel::{GoertzelBlock, GoertzelFilter};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut filter = GoertzelFilter::<f64>::new(1000.0, 8000.0);
    filter.process(&[0.0, 1.0, 0.0, -1.0]);
    filter.reset();

    let mut block = GoertzelBlock::<f64>::new(1000.0, 8000.0, 2);
    block.push(1.0);
    block.push(-1.0);

    let _ = GoertzelFilter::<f64>::try_new(6000.0, 8000.0);
}
