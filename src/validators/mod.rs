//! Request validators.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;
