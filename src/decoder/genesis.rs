//! SLP GENESIS message decoder
//!
//! A GENESIS transaction creates a token. Apart from fixing the token's
//! metadata it behaves exactly like MINT: the initial quantity is credited to
//! output 1 and an optional baton output authorises future minting.
//!
//! Chunk layout (position 0 is the OP_RETURN opcode):
//!
//! | Pos | Field          | Rule                                   |
//! |-----|----------------|----------------------------------------|
//! | 4   | ticker         | text, NUL -> ' '                       |
//! | 5   | name           | text, NUL -> ' '                       |
//! | 6   | document URI   | text, NUL -> '0'                       |
//! | 7   | document hash  | 0 or 32 bytes, stored as text          |
//! | 8   | decimals       | required, 1 byte, 0..=9                |
//! | 9   | baton vout     | optional, 1 byte, >= 2                 |
//! | 10  | quantity       | required, unsigned big-endian          |

use once_cell::sync::OnceCell;
use serde::Serialize;

use super::error::{DecodeResult, SlpError};
use super::fields::{
    decode_baton, decode_text, DOCUMENT_NUL_REPLACEMENT, METADATA_NUL_REPLACEMENT,
};
use super::SlpMessageDecoder;
use crate::types::{
    chunk_at, BatonAndMint, Chunk, SlpMessageType, SlpTokenType, TokenAmount, TokenDetails,
    TokenId,
};

/// Chunk positions of the GENESIS layout
pub mod positions {
    pub const TICKER: usize = 4;
    pub const NAME: usize = 5;
    pub const DOCUMENT_URI: usize = 6;
    pub const DOCUMENT_HASH: usize = 7;
    pub const DECIMALS: usize = 8;
    pub const BATON_VOUT: usize = 9;
    pub const INITIAL_QUANTITY: usize = 10;
}

/// Maximum number of chunks in a GENESIS output
pub const MAX_CHUNKS: usize = 11;

/// Largest permitted decimals value
pub const MAX_DECIMALS: u8 = 9;

/// Accepted document hash lengths
pub const DOCUMENT_HASH_LENGTHS: [usize; 2] = [0, 32];

/// Validated GENESIS message. Immutable once decoded.
#[derive(Debug, Clone, Serialize)]
pub struct GenesisMessage {
    token_type: SlpTokenType,
    token_id: TokenId,
    ticker: String,
    name: String,
    decimals: u8,
    baton_vout: Option<u8>,
    minted_amount: TokenAmount,
    document_uri: String,
    document_hash: String,
    #[serde(skip)]
    details: OnceCell<TokenDetails>,
}

impl GenesisMessage {
    /// Decode and validate a GENESIS message.
    ///
    /// Rules are applied in a fixed order and the first violation is
    /// returned. A missing decimals or quantity chunk yields `Ok(None)`.
    pub fn decode(
        token_type: SlpTokenType,
        token_id: TokenId,
        chunks: &[Chunk],
    ) -> DecodeResult<Self> {
        if chunks.len() > MAX_CHUNKS {
            return Err(SlpError::InvalidChunkCount);
        }

        let Some(decimals) = chunk_at(chunks, positions::DECIMALS) else {
            return Ok(None);
        };
        let decimals = validate_decimals(decimals, token_type)?;

        let baton_vout = decode_baton(chunk_at(chunks, positions::BATON_VOUT), token_type)?;

        let Some(quantity) = chunk_at(chunks, positions::INITIAL_QUANTITY) else {
            return Ok(None);
        };
        let minted_amount = validate_quantity(quantity, token_type)?;

        let document_uri = decode_text(
            chunk_at(chunks, positions::DOCUMENT_URI),
            DOCUMENT_NUL_REPLACEMENT,
        );

        let document_hash = chunk_at(chunks, positions::DOCUMENT_HASH)
            .map(validate_document_hash)
            .transpose()?;
        let document_hash = decode_text(document_hash, DOCUMENT_NUL_REPLACEMENT);

        let ticker = decode_text(chunk_at(chunks, positions::TICKER), METADATA_NUL_REPLACEMENT);
        let name = decode_text(chunk_at(chunks, positions::NAME), METADATA_NUL_REPLACEMENT);

        Ok(Some(Self {
            token_type,
            token_id,
            ticker,
            name,
            decimals,
            baton_vout,
            minted_amount,
            document_uri,
            document_hash,
            details: OnceCell::new(),
        }))
    }

    pub fn token_type(&self) -> SlpTokenType {
        self.token_type
    }

    pub fn token_id(&self) -> &TokenId {
        &self.token_id
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn document_uri(&self) -> &str {
        &self.document_uri
    }

    /// Document hash as NUL-patched text.
    ///
    /// Hash bytes that are not valid UTF-8 do not survive this conversion.
    pub fn document_hash(&self) -> &str {
        &self.document_hash
    }

    /// Display metadata for this token, built on first access
    pub fn token_details(&self) -> &TokenDetails {
        self.details.get_or_init(|| TokenDetails {
            token_id: self.token_id,
            ticker: self.ticker.clone(),
            name: self.name.clone(),
            decimals: self.decimals,
            document_uri: self.document_uri.clone(),
        })
    }
}

impl PartialEq for GenesisMessage {
    fn eq(&self, other: &Self) -> bool {
        self.token_type == other.token_type
            && self.token_id == other.token_id
            && self.ticker == other.ticker
            && self.name == other.name
            && self.decimals == other.decimals
            && self.baton_vout == other.baton_vout
            && self.minted_amount == other.minted_amount
            && self.document_uri == other.document_uri
            && self.document_hash == other.document_hash
    }
}

impl Eq for GenesisMessage {}

impl BatonAndMint for GenesisMessage {
    fn baton_vout(&self) -> Option<u8> {
        self.baton_vout
    }

    fn minted_amount(&self) -> TokenAmount {
        self.minted_amount.clone()
    }
}

impl SlpMessageDecoder for GenesisMessage {
    const MESSAGE_TYPE: SlpMessageType = SlpMessageType::Genesis;

    fn decode(
        token_type: SlpTokenType,
        token_id: TokenId,
        chunks: &[Chunk],
    ) -> DecodeResult<Self> {
        GenesisMessage::decode(token_type, token_id, chunks)
    }
}

fn validate_decimals(chunk: &[u8], token_type: SlpTokenType) -> Result<u8, SlpError> {
    let [decimals] = chunk else {
        return Err(SlpError::InvalidDecimals);
    };
    if *decimals > MAX_DECIMALS {
        return Err(SlpError::InvalidDecimals);
    }
    if token_type == SlpTokenType::Nft1Child && *decimals != 0 {
        return Err(SlpError::InvalidDecimals);
    }
    Ok(*decimals)
}

fn validate_quantity(chunk: &[u8], token_type: SlpTokenType) -> Result<TokenAmount, SlpError> {
    // A zero-length push has no integer value
    if chunk.is_empty() {
        return Err(SlpError::InvalidQuantity);
    }
    let amount = TokenAmount::from_be_slice(chunk);
    if token_type == SlpTokenType::Nft1Child && !amount.is_one() {
        return Err(SlpError::InvalidNftQuantity);
    }
    Ok(amount)
}

fn validate_document_hash(chunk: &[u8]) -> Result<&[u8], SlpError> {
    if DOCUMENT_HASH_LENGTHS.contains(&chunk.len()) {
        Ok(chunk)
    } else {
        Err(SlpError::InvalidDocumentHash)
    }
}
