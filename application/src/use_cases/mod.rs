//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod dispatch;
pub mod health_check;
pub(crate) mod shared;
pub mod task_board;

#[cfg(test)]
pub(crate) mod test_support;
