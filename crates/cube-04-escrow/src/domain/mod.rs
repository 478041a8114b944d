//! # Domain Module
//!
//! Accounts, their binary layout, configuration, validation and errors.

pub mod accounts;
pub mod config;
pub mod errors;
pub mod layout;
pub mod validation;

pub use accounts::*;
pub use config::*;
pub use errors::*;
pub use layout::*;
pub use validation::*;
