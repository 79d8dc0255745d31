//! HTTP client for the hosted database service
//!
//! Records live in a hosted relational service exposing a REST interface
//! under `{base_url}/rest/v1/{collection}`. Every operation is a single
//! synchronous request/response round trip; there are no retries. Errors come
//! back as a JSON descriptor with a human-readable `message`, which is
//! surfaced verbatim to the operator.

mod client;
mod collections;

pub use client::{DbClient, DbError, ANON_KEY_VAR, SERVICE_KEY_VAR};
