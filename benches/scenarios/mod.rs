mod machine;

pub use machine::{bench_drum_machine, bench_filter_synth};
