//! Token-level views shared across SLP message types

use super::slp::{TokenAmount, TokenId};
use serde::Serialize;

/// Display metadata for a token, derived from its GENESIS message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenDetails {
    pub token_id: TokenId,
    pub ticker: String,
    pub name: String,
    pub decimals: u8,
    pub document_uri: String,
}

/// Supply-affecting view of messages that create tokens (GENESIS and MINT).
///
/// The minted amount is credited to output 1 of the transaction; the baton,
/// when present, authorises the next MINT.
pub trait BatonAndMint {
    /// Output index holding the mint baton, `None` when the baton is destroyed
    fn baton_vout(&self) -> Option<u8>;

    /// Quantity credited to output 1
    fn minted_amount(&self) -> TokenAmount;

    /// Whether further minting remains possible after this message
    fn keeps_baton(&self) -> bool {
        self.baton_vout().is_some()
    }
}
