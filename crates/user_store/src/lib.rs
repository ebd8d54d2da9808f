//! User storage for the user directory
//!
//! This crate provides a repository abstraction over user records so the HTTP
//! layer never touches the underlying collection directly. The in-memory
//! implementation is the only backend; a persistent store can be added behind
//! the same trait.

mod error;
mod memory;
mod seed;
mod traits;

pub use error::*;
pub use memory::*;
pub use seed::*;
pub use traits::*;
