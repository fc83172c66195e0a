//! SLP MINT message decoder
//!
//! Layout: `[4]` token id, `[5]` baton vout, `[6]` 8 byte quantity.

use serde::Serialize;

use super::error::{DecodeResult, SlpError};
use super::fields::{check_token_id, decode_baton, decode_quantity};
use super::SlpMessageDecoder;
use crate::types::{
    chunk_at, positions as common, BatonAndMint, Chunk, SlpMessageType, SlpTokenType,
    TokenAmount, TokenId,
};

pub mod positions {
    pub const BATON_VOUT: usize = 5;
    pub const ADDITIONAL_QUANTITY: usize = 6;
}

/// Maximum number of chunks in a MINT output
pub const MAX_CHUNKS: usize = 7;

/// Validated MINT message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MintMessage {
    token_type: SlpTokenType,
    token_id: TokenId,
    baton_vout: Option<u8>,
    minted_amount: TokenAmount,
}

impl MintMessage {
    pub fn token_type(&self) -> SlpTokenType {
        self.token_type
    }

    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }
}

impl SlpMessageDecoder for MintMessage {
    const MESSAGE_TYPE: SlpMessageType = SlpMessageType::Mint;

    fn decode(
        token_type: SlpTokenType,
        token_id: TokenId,
        chunks: &[Chunk],
    ) -> DecodeResult<Self> {
        if chunks.len() > MAX_CHUNKS {
            return Err(SlpError::InvalidChunkCount);
        }
        // NFT1 children are created with a fixed supply of one
        if token_type == SlpTokenType::Nft1Child {
            return Err(SlpError::UnsupportedMessage {
                message_type: SlpMessageType::Mint,
                token_type,
            });
        }

        check_token_id(chunk_at(chunks, common::TOKEN_ID), &token_id)?;

        let baton_vout = decode_baton(chunk_at(chunks, positions::BATON_VOUT), token_type)?;

        let Some(quantity) = chunk_at(chunks, positions::ADDITIONAL_QUANTITY) else {
            return Ok(None);
        };
        let minted_amount = decode_quantity(quantity)?;

        Ok(Some(Self {
            token_type,
            token_id,
            baton_vout,
            minted_amount,
        }))
    }
}

impl BatonAndMint for MintMessage {
    fn baton_vout(&self) -> Option<u8> {
        self.baton_vout
    }

    fn minted_amount(&self) -> TokenAmount {
        self.minted_amount.clone()
    }
}
