//! Tolerant decoding for task files written by earlier versions
//!
//! Files produced by the earlier desktop tool differ from the current layout in
//! two ways this module absorbs:
//!
//! - `isCompleted` may be missing (handled by `#[serde(default)]` on [`crate::Task`])
//! - `createdAt` may be a number of seconds since 2001-01-01T00:00:00Z instead of
//!   an RFC 3339 string
//!
//! Both forms decode into the same [`crate::Task`]; the current format is always
//! written back.

mod timestamps;

pub use timestamps::{REFERENCE_DATE_UNIX_SECONDS, deserialize_created_at, from_reference_seconds};
