//! Core entity definitions for the user directory.
//!
//! This crate defines the data types shared between the store and the HTTP
//! server: the stored `User` record and the `NewUser` creation draft.

mod user;

pub use user::*;
