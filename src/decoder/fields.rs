//! Field-level decoding rules shared by the SLP message decoders

use super::error::SlpError;
use crate::types::{SlpTokenType, TokenAmount, TokenId};

/// Replacement for NUL bytes in ticker and name fields
pub const METADATA_NUL_REPLACEMENT: char = ' ';

/// Replacement for NUL bytes in document URI and hash fields
pub const DOCUMENT_NUL_REPLACEMENT: char = '0';

/// Width of a MINT or SEND quantity on the wire
pub const QUANTITY_LEN: usize = 8;

/// Decode a text field, patching NUL bytes; absent chunks decode to "".
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_text(chunk: Option<&[u8]>, nul_replacement: char) -> String {
    chunk
        .map(|bytes| String::from_utf8_lossy(bytes).replace('\0', &nul_replacement.to_string()))
        .unwrap_or_default()
}

/// Validate a mint baton chunk.
///
/// An absent chunk or a zero-length push carries no baton. A baton must be a
/// single byte naming an output other than 0 (the OP_RETURN) or 1 (the
/// minted quantity), and NFT1 children can never carry one.
pub fn decode_baton(
    chunk: Option<&[u8]>,
    token_type: SlpTokenType,
) -> Result<Option<u8>, SlpError> {
    let vout = match chunk {
        None | Some([]) => return Ok(None),
        Some([vout]) => *vout,
        Some(_) => return Err(SlpError::InvalidBaton),
    };

    if vout == 0 || vout == 1 {
        return Err(SlpError::InvalidBaton);
    }
    if token_type == SlpTokenType::Nft1Child {
        return Err(SlpError::InvalidBaton);
    }

    Ok(Some(vout))
}

/// Decode a fixed-width 8 byte quantity used by MINT and SEND
pub fn decode_quantity(bytes: &[u8]) -> Result<TokenAmount, SlpError> {
    if bytes.len() != QUANTITY_LEN {
        return Err(SlpError::InvalidQuantity);
    }
    Ok(TokenAmount::from_be_slice(bytes))
}

/// Check the token id chunk of a MINT or SEND against the expected id
pub fn check_token_id(chunk: Option<&[u8]>, token_id: &TokenId) -> Result<(), SlpError> {
    match chunk.and_then(TokenId::from_slice) {
        Some(id) if id == *token_id => Ok(()),
        _ => Err(SlpError::InvalidTokenId),
    }
}
