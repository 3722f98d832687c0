//! Domain logic for the interview-preparation catalog.
//!
//! Everything in this crate is pure: no I/O, no async, no global state. The
//! fixtures and API crates build on these types.

pub mod catalog;
pub mod error;
pub mod forms;
pub mod notice;
pub mod preferences;
pub mod search;
pub mod stats;
pub mod tags;
pub mod types;
pub mod views;
