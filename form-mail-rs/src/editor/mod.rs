//! Configuration-holding layer of the editor
//!
//! Keeps the two variants, applies copy-on-write edits and enforces the
//! one-way field sync between them.

pub mod session;

pub use session::{EditorSession, Variant};
