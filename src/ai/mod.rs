//! Client for the generative-AI collaborator
//!
//! Two helper operations, each a single request/response with a typed
//! input/output contract validated on both sides of the call:
//!
//! - describe a document image (base64 data URI in, one sentence out)
//! - draft a notice (free-text bullet points in, prose out)
//!
//! There is no retry, no streaming and no cancellation; a failed call is
//! reported to the operator and may simply be re-submitted.

mod client;
mod flows;

pub use client::{AiClient, AiError};
