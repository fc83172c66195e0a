//! Simple Ledger Protocol (SLP) Decoder
//!
//! Decodes and validates SLP token messages (GENESIS, MINT, SEND) carried in
//! OP_RETURN outputs.

pub mod cli;
pub mod config;
pub mod decoder;
pub mod errors;
pub mod types;

pub use decoder::{
    decode_script, decode_script_hex, DecodeResult, GenesisMessage, MintMessage, SendMessage,
    SlpError, SlpMessage, SlpMessageDecoder,
};
pub use types::{BatonAndMint, Chunk, SlpTokenType, TokenAmount, TokenDetails, TokenId};
