#[path = "driver/run.rs"]
mod run;

#[path = "driver/benchmark.rs"]
mod benchmark;

pub use benchmark::BenchmarkDriver;
pub use run::BenchmarkRun;
