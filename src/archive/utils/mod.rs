//! Helper utilities for archive operations.

pub(crate) mod fs;
