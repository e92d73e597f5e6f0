//! Test utilities
//!
//! They contain:
//! * A [TestLogger] writing to stdout or to a file
//! * A [TempDir] helper to get a per test directory
//! * [Fake data][fake_data] record types implementing [Mockable][crate::Mockable]

pub mod fake_data;
mod temp_dir;
mod test_logger;

pub use temp_dir::TempDir;
pub use test_logger::TestLogger;
