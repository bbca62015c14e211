//! Dispatch progress reporters

pub mod reporter;
