//! Menu records, their field rules and the seed menu
//!
//! Provides the validation contract every stored item is held to.

pub mod menu;
pub mod seed;
pub mod validation;
