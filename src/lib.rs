// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! onemil-backfill: synthetic event generation and validation for the OneMil
//! marketing platform.
//!
//! The core is deterministic: every random choice flows through an injected
//! `rand::Rng`, so a seeded generator reproduces a run exactly while
//! production uses OS entropy. No I/O happens here; the node crate owns the
//! store round trips.

pub mod event;
pub mod generate;
pub mod report;
pub mod templates;
pub mod validate;
