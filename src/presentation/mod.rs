//! Presentation mapping
//!
//! Turns API records into render descriptors. Field defaults for missing
//! values are applied here so the client stays a plain decoder.

pub mod card;
pub mod results;

pub use card::{render_card, RenderDescriptor};
pub use results::{SearchResults, NO_RESULTS_MESSAGE};
