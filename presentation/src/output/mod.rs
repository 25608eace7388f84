//! Terminal output: styled text and markdown rendering

pub mod console;
pub mod markdown;
