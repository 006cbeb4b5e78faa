mod ladder;
mod oscillator;

pub use ladder::bench_ladder;
pub use oscillator::bench_oscillator;
