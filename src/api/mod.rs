//! EmojiHub API client
//!
//! Builds requests against the configured API root, checks the status and
//! decodes JSON into the shapes in `crate::types`.

mod client;
mod endpoints;
pub mod transport;

pub use client::EmojiHubClient;
pub use transport::{HttpTransport, RawResponse, Transport};
