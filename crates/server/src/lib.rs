//! Matomo chat server library.
//!
//! Exposes Matomo web analytics as a small set of tools a conversational
//! agent can call: visit summaries, top pages, referrers, countries,
//! devices, live visitors, search keywords and a multi-site comparison.
//!
//! The library holds everything the binary serves so the facade can be
//! driven directly from tests and the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod matomo;
pub mod reports;
pub mod routes;
pub mod state;
pub mod tools;
