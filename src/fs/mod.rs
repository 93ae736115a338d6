//! Filesystem utilities for prjmgr.

pub mod atomic;

pub use atomic::atomic_write_file;
