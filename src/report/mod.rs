//! Report rendering.
//!
//! Turns roster data and analytics results into the text blocks printed
//! by the menu, plus a JSON form of the class summary.

pub mod generator;

pub use generator::*;
