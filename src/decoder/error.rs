//! Decoder-specific error types

/// Outcome of decoding a single SLP message.
///
/// `Ok(None)` means a required field was missing and the output is not a
/// usable SLP message (ignore it); `Err` means the SLP data is malformed.
pub type DecodeResult<T> = Result<Option<T>, SlpError>;

/// Reasons an SLP message is rejected. The first violated rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlpError {
    #[error("Invalid chunk count")]
    InvalidChunkCount,

    #[error("Invalid decimals")]
    InvalidDecimals,

    #[error("Invalid baton")]
    InvalidBaton,

    #[error("NFT cannot have quantity other than 1")]
    InvalidNftQuantity,

    #[error("Invalid document hash")]
    InvalidDocumentHash,

    #[error("Invalid token quantity")]
    InvalidQuantity,

    #[error("Invalid token id")]
    InvalidTokenId,

    #[error("Invalid output count")]
    InvalidOutputCount,

    #[error("{message_type} is not permitted for {token_type} tokens")]
    UnsupportedMessage {
        message_type: crate::types::SlpMessageType,
        token_type: crate::types::SlpTokenType,
    },

    #[error("Unknown message type")]
    UnknownMessageType,
}

/// Errors raised while extracting push-data chunks from a script
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("Script is not an OP_RETURN output")]
    NotOpReturn,

    #[error("Push at offset {offset} runs past the end of the script")]
    TruncatedPush { offset: usize },

    #[error("Invalid script hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type for decoding a whole OP_RETURN script
pub type DecoderResult<T> = Result<T, DecoderError>;

/// Failure to decode an OP_RETURN script as an SLP message
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecoderError {
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    #[error("SLP error: {0}")]
    Slp(#[from] SlpError),
}
