//! Simple Ledger Protocol constants and identifier types
//!
//! SLP messages live in an OP_RETURN output. After push-data extraction the
//! output is a positional list of chunks where position 0 is the OP_RETURN
//! opcode itself, followed by the lokad prefix, the token type and the
//! message type tag. Everything after that is message specific.

use num_bigint::BigUint;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// One positional data field of an SLP OP_RETURN output.
///
/// `None` means the position held no push data (or lies past the end of the
/// script); `Some(vec![])` is a push of zero bytes. Validation treats the two
/// differently depending on the field.
pub type Chunk = Option<Vec<u8>>;

/// Chunk positions shared by every SLP message type
pub mod positions {
    /// Lokad protocol identifier (`SLP\0`)
    pub const LOKAD_ID: usize = 1;
    /// Token type, 1 or 2 bytes big-endian
    pub const TOKEN_TYPE: usize = 2;
    /// Message type tag (`GENESIS`, `MINT`, `SEND`)
    pub const MESSAGE_TYPE: usize = 3;
    /// Token id for MINT and SEND
    pub const TOKEN_ID: usize = 4;
}

/// Lokad id prefix identifying SLP outputs
pub const LOKAD_ID: &[u8] = b"SLP\x00";

/// Length of a token id in bytes
pub const TOKEN_ID_LEN: usize = 32;

/// Look up a chunk by position, treating positions past the end as absent
pub fn chunk_at(chunks: &[Chunk], position: usize) -> Option<&[u8]> {
    chunks.get(position).and_then(|chunk| chunk.as_deref())
}

/// SLP token types understood by this decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlpTokenType {
    /// Type 1 fungible token
    Fungible,
    /// NFT1 child: a single indivisible token belonging to a group
    Nft1Child,
    /// NFT1 group: fungible token used to create NFT1 children
    Nft1Group,
}

impl SlpTokenType {
    /// Every registered token type
    pub const ALL: [SlpTokenType; 3] = [Self::Fungible, Self::Nft1Child, Self::Nft1Group];

    /// Protocol code for this token type
    pub fn code(&self) -> u16 {
        match self {
            Self::Fungible => 0x01,
            Self::Nft1Child => 0x41,
            Self::Nft1Group => 0x81,
        }
    }

    /// Resolve a protocol code to a registered token type
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|token_type| token_type.code() == code)
    }

    /// Parse the token type chunk (1 or 2 bytes, big-endian)
    pub fn from_chunk(chunk: &[u8]) -> Option<Self> {
        let code = match chunk {
            [b] => *b as u16,
            [hi, lo] => u16::from_be_bytes([*hi, *lo]),
            _ => return None,
        };
        Self::from_code(code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Fungible => "Fungible",
            Self::Nft1Child => "NFT1-Child",
            Self::Nft1Group => "NFT1-Group",
        }
    }
}

impl fmt::Display for SlpTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// SLP message type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlpMessageType {
    Genesis,
    Mint,
    Send,
}

impl SlpMessageType {
    /// The ASCII tag carried in the message type chunk
    pub fn tag(&self) -> &'static [u8] {
        match self {
            Self::Genesis => b"GENESIS",
            Self::Mint => b"MINT",
            Self::Send => b"SEND",
        }
    }

    pub fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"GENESIS" => Some(Self::Genesis),
            b"MINT" => Some(Self::Mint),
            b"SEND" => Some(Self::Send),
            _ => None,
        }
    }
}

impl fmt::Display for SlpMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Genesis => "GENESIS",
            Self::Mint => "MINT",
            Self::Send => "SEND",
        })
    }
}

/// 32-byte token identifier (the txid of the token's GENESIS transaction)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId([u8; TOKEN_ID_LEN]);

impl TokenId {
    pub fn new(bytes: [u8; TOKEN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a token id from a chunk, which must be exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        <[u8; TOKEN_ID_LEN]>::try_from(bytes).ok().map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; TOKEN_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenId({})", self.to_hex())
    }
}

impl FromStr for TokenId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; TOKEN_ID_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl Serialize for TokenId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Unsigned token quantity in base units
///
/// MINT and SEND quantities are 8 bytes on the wire but GENESIS accepts any
/// width, so amounts are arbitrary-precision.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenAmount(BigUint);

impl TokenAmount {
    /// Decode an unsigned big-endian integer of any width
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }

    pub fn one() -> Self {
        Self(BigUint::from(1u8))
    }

    pub fn is_one(&self) -> bool {
        self.0 == BigUint::from(1u8)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl Add for TokenAmount {
    type Output = TokenAmount;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for TokenAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}
