//! File-backed plan directory

pub mod atomic;
pub mod fs_directory;

pub use fs_directory::{DirectoryFileV0, FsPlanDirectory};
