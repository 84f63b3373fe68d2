//! Route page components.

pub mod login;
pub mod portal;
