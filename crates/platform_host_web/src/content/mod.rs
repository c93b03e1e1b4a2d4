//! Hosted content database adapter.

pub mod hosted;
