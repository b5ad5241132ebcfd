//! Shared API, exported to `tabtwin-detector` and to host integrations.
//!
//! The snapshot a host captures, the identities it hands over, and the markers
//! it renders are all described in this crate.

pub mod config;
pub mod env;
pub mod marker;
pub mod snapshot;
pub mod tab;
