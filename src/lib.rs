//! RentFlow - rental property management dashboard
//!
//! RentFlow tracks tenants, rent/expense ledgers, maintenance work items,
//! notices and tenant documents for a small rental portfolio. Records live in
//! a hosted database service reached over HTTP; two AI helper calls (document
//! description, notice drafting) go through a generative-AI provider.
//!
//! The desktop GUI is the primary surface. UI labels come from a per-user
//! settings slot, and destructive actions sit behind a session passcode gate.

pub mod ai;
pub mod config;
pub mod db;
pub mod domain;
pub mod gui;
pub mod protection;

pub use domain::*;
