//! ZQLZ Core - Shared vocabulary for query synthesis
//!
//! This crate provides the types that every other ZQLZ crate depends on:
//!
//! - `QueryDialect` - target output family and its comment syntax
//! - `ZqlzError` / `Result` - errors raised when decoding untyped input

mod dialect;
mod error;

pub use dialect::*;
pub use error::*;
