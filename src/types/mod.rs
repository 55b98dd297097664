//! Core types for libemojihub

pub mod emoji;
pub mod mode;

// Re-export for convenience
pub use emoji::EmojiRecord;
pub use mode::Mode;
