//! Thin collaborator for the remote user collection: raw DTOs plus the
//! reqwest-backed client behind the [`UserApi`] seam.

pub mod client;
pub mod dto;

pub use client::*;
pub use dto::*;
