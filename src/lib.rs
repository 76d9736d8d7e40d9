#![doc = include_str!("../README.md")]

/// Command implementations and argument types.
pub mod commands;
/// Version extraction helpers.
pub mod version;
