//! SLP SEND message decoder
//!
//! Layout: `[4]` token id, `[5..]` one 8 byte quantity per receiving output.
//! The quantity at position 5 is credited to output 1, position 6 to
//! output 2, and so on.

use serde::Serialize;

use super::error::{DecodeResult, SlpError};
use super::fields::{check_token_id, decode_quantity};
use super::SlpMessageDecoder;
use crate::types::{
    chunk_at, positions as common, Chunk, SlpMessageType, SlpTokenType, TokenAmount, TokenId,
};

/// Position of the first output quantity
pub const FIRST_QUANTITY: usize = 5;

/// Maximum number of receiving outputs
pub const MAX_OUTPUTS: usize = 19;

/// Maximum number of chunks in a SEND output
pub const MAX_CHUNKS: usize = FIRST_QUANTITY + MAX_OUTPUTS;

/// Validated SEND message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessage {
    token_type: SlpTokenType,
    token_id: TokenId,
    output_amounts: Vec<TokenAmount>,
}

impl SendMessage {
    pub fn token_type(&self) -> SlpTokenType {
        self.token_type
    }

    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    /// Quantities in output order, starting at output 1
    pub fn output_amounts(&self) -> &[TokenAmount] {
        &self.output_amounts
    }

    /// Quantity credited to a transaction output, if any
    pub fn amount_for_vout(&self, vout: usize) -> Option<TokenAmount> {
        vout.checked_sub(1)
            .and_then(|index| self.output_amounts.get(index))
            .cloned()
    }
}

impl SlpMessageDecoder for SendMessage {
    const MESSAGE_TYPE: SlpMessageType = SlpMessageType::Send;

    fn decode(
        token_type: SlpTokenType,
        token_id: TokenId,
        chunks: &[Chunk],
    ) -> DecodeResult<Self> {
        if chunks.len() > MAX_CHUNKS {
            return Err(SlpError::InvalidChunkCount);
        }

        check_token_id(chunk_at(chunks, common::TOKEN_ID), &token_id)?;

        let quantities = chunks.get(FIRST_QUANTITY..).unwrap_or_default();
        if quantities.is_empty() {
            return Err(SlpError::InvalidOutputCount);
        }

        let mut output_amounts = Vec::with_capacity(quantities.len());
        for quantity in quantities {
            let Some(quantity) = quantity.as_deref() else {
                return Ok(None);
            };
            output_amounts.push(decode_quantity(quantity)?);
        }

        Ok(Some(Self {
            token_type,
            token_id,
            output_amounts,
        }))
    }
}
