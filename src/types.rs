//! SLP Decoder - Type System
//!
//! - `slp`: Protocol constants, token type registry, token id and amount types
//! - `token`: Token-level views (display details, baton and mint capability)

pub mod slp;
pub mod token;

pub use slp::*;
pub use token::{BatonAndMint, TokenDetails};
