//! Matomo Chat Core - Shared types library.
//!
//! This crate provides the types used across all Matomo chat components:
//! - `server` - Tool facade and HTTP surface over the Matomo Reporting API
//! - `cli` - Command-line client for the same tools
//!
//! # Architecture
//!
//! The core crate contains only types and lookup tables - no I/O, no HTTP
//! clients. Resolving "GalacticaIA" or "últimos 7 días" into Matomo request
//! parameters is pure and lives here so every component agrees on it.
//!
//! # Modules
//!
//! - [`types`] - Site ids, site designators, reporting periods and resolution outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
