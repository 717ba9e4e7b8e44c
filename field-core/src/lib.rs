//! Core simulation library for the ambient particle background.
//!
//! Main components:
//! - [`particle`] — a single particle's position and velocity.
//! - [`field`] — the particle field: state, lifecycle and link queries.
//! - [`steps`] — per-tick simulation steps (integration, repulsion).
//! - [`trail`] — lagged cursor followers (low-pass position trackers).
//! - [`reveal`] — visibility latch for scroll-revealed sections.
//! - [`config`] — tuning parameters for all of the above.
//! - [`types`] — shared type aliases and IDs.

pub mod config;
pub mod field;
pub mod particle;
pub mod reveal;
pub mod steps;
pub mod trail;
pub mod types;
