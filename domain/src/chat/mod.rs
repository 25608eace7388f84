//! Chat domain.
//!
//! - [`value_objects::Message`]: one immutable transcript entry
//! - [`session::ChatSession`]: the transcript plus input buffer and turn state
//! - [`messages`]: the concierge's fixed lines

pub mod messages;
pub mod session;
pub mod value_objects;
