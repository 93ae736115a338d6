//! Configuration model for prjmgr.
//!
//! This module defines the Config struct that represents `prjmgr.yaml` at the
//! project root. The file is optional: every field has a default matching the
//! conventional project layout, unknown fields are ignored, and values are
//! validated after parsing.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::Config;
