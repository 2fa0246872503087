//! Output module for writing generated files and reporting on a run
//!
//! This module handles:
//! - Writing sitemap and sitemap index files, plain or gzip-compressed
//! - Measuring and printing run statistics

pub mod stats;
mod writer;

pub use stats::{print_statistics, RunStatistics};
pub use writer::{compression_available, write_gzip, write_plain, write_sitemap_set};
