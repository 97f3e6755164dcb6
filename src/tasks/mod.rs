//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Cleanup: removes expired entries and trims over-capacity instances at
//!   configured intervals, one task per cache instance

mod cleanup;

pub use cleanup::spawn_cleanup_task;
