//! Command implementations

pub mod benchmark;
pub mod shell;
pub mod simple;

pub use benchmark::{BenchmarkResult, pick_words, run_benchmark};
pub use shell::{run_shell, serve};
pub use simple::{play, run_simple};
