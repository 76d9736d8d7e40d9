//! Command implementations.

mod extract;

pub use extract::{
    ExtractArgs,
    extract,
};
