//! Analytics over the roster.
//!
//! Everything here borrows the roster immutably; nothing derived is
//! stored.

pub mod aggregator;
pub mod grading;

pub use aggregator::*;
pub use grading::*;
