//! Shared utilities: operation logging and test support

pub mod logging;
pub mod test;
