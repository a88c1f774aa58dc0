//! Archive orchestration.
//!
//! This module provides the [`Archiver`] and the [`build_archive`] entry point.
//!
//! # Module Organization
//!
//! - [`collect`] - Source tree enumeration and archive naming
//! - [`orchestrator`] - [`Archiver`] and [`build_archive`]
//! - [`writer`] - Zip serialization with normalized entry metadata

mod collect;
mod orchestrator;
mod writer;

pub use orchestrator::{Archiver, build_archive};
