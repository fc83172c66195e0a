//! SLP message decoding
//!
//! Every SLP message type implements [`SlpMessageDecoder`] over its own chunk
//! layout. [`SlpMessage::parse`] checks the shared header (lokad prefix,
//! token type, message type tag) and hands the chunks to the matching
//! decoder.
//!
//! Decoders are pure functions of their inputs and may be called
//! concurrently without coordination.

use serde::Serialize;
use tracing::debug;

use crate::types::{
    chunk_at, positions, BatonAndMint, Chunk, SlpMessageType, SlpTokenType, TokenId, LOKAD_ID,
};

pub mod error;
pub mod fields;
pub mod genesis;
pub mod mint;
pub mod report;
pub mod script;
pub mod send;

pub use error::{DecodeResult, DecoderError, DecoderResult, ScriptError, SlpError};
pub use genesis::GenesisMessage;
pub use mint::MintMessage;
pub use report::{DecodeReport, DecodeStatus};
pub use script::{extract_chunks, extract_chunks_hex};
pub use send::SendMessage;

/// Decode contract shared by GENESIS, MINT and SEND.
///
/// Implementations validate their fields positionally and stop at the first
/// violated rule. `Ok(None)` signals a missing required chunk.
pub trait SlpMessageDecoder: Sized {
    /// Message type tag this decoder handles
    const MESSAGE_TYPE: SlpMessageType;

    fn decode(
        token_type: SlpTokenType,
        token_id: TokenId,
        chunks: &[Chunk],
    ) -> DecodeResult<Self>;
}

/// A decoded SLP message of any type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "message_type", rename_all = "UPPERCASE")]
pub enum SlpMessage {
    Genesis(GenesisMessage),
    Mint(MintMessage),
    Send(SendMessage),
}

impl SlpMessage {
    /// Dispatch a chunk list to the decoder named by its message type tag.
    ///
    /// `txid` is the id of the transaction carrying the output; for GENESIS
    /// it becomes the token id. Outputs without the SLP lokad prefix or with
    /// an unregistered token type are not SLP messages and yield `Ok(None)`.
    pub fn parse(chunks: &[Chunk], txid: &TokenId) -> DecodeResult<Self> {
        if chunk_at(chunks, positions::LOKAD_ID) != Some(LOKAD_ID) {
            debug!("Output {} does not carry the SLP lokad id", txid);
            return Ok(None);
        }

        let token_type_chunk = chunk_at(chunks, positions::TOKEN_TYPE).unwrap_or_default();
        let Some(token_type) = SlpTokenType::from_chunk(token_type_chunk) else {
            debug!(
                "Ignoring SLP output {} with unsupported token type 0x{}",
                txid,
                hex::encode(token_type_chunk)
            );
            return Ok(None);
        };

        let message_type = chunk_at(chunks, positions::MESSAGE_TYPE)
            .and_then(SlpMessageType::from_tag)
            .ok_or(SlpError::UnknownMessageType)?;

        match message_type {
            SlpMessageType::Genesis => {
                decode_as::<GenesisMessage>(token_type, *txid, chunks)
                    .map(|m| m.map(Self::Genesis))
            }
            SlpMessageType::Mint => {
                let token_id = referenced_token_id(chunks)?;
                decode_as::<MintMessage>(token_type, token_id, chunks).map(|m| m.map(Self::Mint))
            }
            SlpMessageType::Send => {
                let token_id = referenced_token_id(chunks)?;
                decode_as::<SendMessage>(token_type, token_id, chunks).map(|m| m.map(Self::Send))
            }
        }
    }

    pub fn message_type(&self) -> SlpMessageType {
        match self {
            Self::Genesis(_) => SlpMessageType::Genesis,
            Self::Mint(_) => SlpMessageType::Mint,
            Self::Send(_) => SlpMessageType::Send,
        }
    }

    pub fn token_type(&self) -> SlpTokenType {
        match self {
            Self::Genesis(m) => m.token_type(),
            Self::Mint(m) => m.token_type(),
            Self::Send(m) => m.token_type(),
        }
    }

    pub fn token_id(&self) -> &TokenId {
        match self {
            Self::Genesis(m) => m.token_id(),
            Self::Mint(m) => m.token_id(),
            Self::Send(m) => m.token_id(),
        }
    }

    /// Supply view for messages that mint tokens
    pub fn as_baton_and_mint(&self) -> Option<&dyn BatonAndMint> {
        match self {
            Self::Genesis(m) => Some(m as &dyn BatonAndMint),
            Self::Mint(m) => Some(m as &dyn BatonAndMint),
            Self::Send(_) => None,
        }
    }
}

/// Extract chunks from an OP_RETURN script and decode them
pub fn decode_script(script: &[u8], txid: &TokenId) -> DecoderResult<Option<SlpMessage>> {
    let chunks = extract_chunks(script)?;
    Ok(SlpMessage::parse(&chunks, txid)?)
}

/// Hex-encoded variant of [`decode_script`]
pub fn decode_script_hex(script_hex: &str, txid: &TokenId) -> DecoderResult<Option<SlpMessage>> {
    let chunks = extract_chunks_hex(script_hex)?;
    Ok(SlpMessage::parse(&chunks, txid)?)
}

fn decode_as<D: SlpMessageDecoder>(
    token_type: SlpTokenType,
    token_id: TokenId,
    chunks: &[Chunk],
) -> DecodeResult<D> {
    let result = D::decode(token_type, token_id, chunks);
    match &result {
        Ok(Some(_)) => debug!(
            "Decoded {} {} for token {}",
            token_type,
            D::MESSAGE_TYPE,
            token_id
        ),
        Ok(None) => debug!(
            "{} for token {} is missing a required field",
            D::MESSAGE_TYPE,
            token_id
        ),
        Err(e) => debug!("Rejected {} for token {}: {}", D::MESSAGE_TYPE, token_id, e),
    }
    result
}

fn referenced_token_id(chunks: &[Chunk]) -> Result<TokenId, SlpError> {
    chunk_at(chunks, positions::TOKEN_ID)
        .and_then(TokenId::from_slice)
        .ok_or(SlpError::InvalidTokenId)
}
