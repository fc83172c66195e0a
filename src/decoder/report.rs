//! Printable summaries of decode outcomes
//!
//! Wraps the three outcome shapes of a decode (message, not SLP, rejected)
//! into a single serialisable report used by the CLI.

use serde::Serialize;
use std::fmt::Write;

use super::{DecoderError, DecoderResult, SlpMessage};
use crate::types::TokenId;

/// Classification of a decode outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStatus {
    Decoded,
    NotSlp,
    Invalid,
}

/// Outcome of decoding one OP_RETURN output
#[derive(Debug, Clone, Serialize)]
pub struct DecodeReport {
    pub txid: String,
    pub status: DecodeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<SlpMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeReport {
    pub fn from_outcome(txid: &TokenId, outcome: DecoderResult<Option<SlpMessage>>) -> Self {
        match outcome {
            Ok(Some(message)) => Self::decoded(txid.to_string(), message),
            Ok(None) => Self::not_slp(txid.to_string()),
            Err(e) => Self::invalid(txid.to_string(), &e),
        }
    }

    pub fn decoded(txid: String, message: SlpMessage) -> Self {
        Self {
            txid,
            status: DecodeStatus::Decoded,
            message: Some(message),
            error: None,
        }
    }

    pub fn not_slp(txid: String) -> Self {
        Self {
            txid,
            status: DecodeStatus::NotSlp,
            message: None,
            error: None,
        }
    }

    pub fn invalid(txid: String, error: &DecoderError) -> Self {
        Self::rejected(txid, error.to_string())
    }

    /// Report for input that never reached the decoder (bad txid, bad row)
    pub fn rejected(txid: String, reason: String) -> Self {
        Self {
            txid,
            status: DecodeStatus::Invalid,
            message: None,
            error: Some(reason),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    /// Human-readable multi-line rendering
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "TXID: {}", self.txid);

        match (&self.status, &self.message) {
            (DecodeStatus::Decoded, Some(message)) => write_message(&mut out, message),
            (DecodeStatus::NotSlp, _) => {
                let _ = writeln!(out, "Not an SLP message");
            }
            _ => {
                let _ = writeln!(
                    out,
                    "Invalid SLP message: {}",
                    self.error.as_deref().unwrap_or("unknown error")
                );
            }
        }

        out
    }
}

fn write_message(out: &mut String, message: &SlpMessage) {
    let _ = writeln!(out, "Message: {}", message.message_type());
    let _ = writeln!(out, "Token type: {}", message.token_type());
    let _ = writeln!(out, "Token id: {}", message.token_id());

    match message {
        SlpMessage::Genesis(genesis) => {
            let _ = writeln!(out, "Ticker: {}", genesis.ticker());
            let _ = writeln!(out, "Name: {}", genesis.name());
            let _ = writeln!(out, "Decimals: {}", genesis.decimals());
            let _ = writeln!(out, "Document URI: {}", genesis.document_uri());
        }
        SlpMessage::Mint(_) => {}
        SlpMessage::Send(send) => {
            for (index, amount) in send.output_amounts().iter().enumerate() {
                let _ = writeln!(out, "Output {}: {}", index + 1, amount);
            }
        }
    }

    if let Some(minting) = message.as_baton_and_mint() {
        let _ = writeln!(out, "Minted amount: {}", minting.minted_amount());
        match minting.baton_vout() {
            Some(vout) => {
                let _ = writeln!(out, "Baton vout: {}", vout);
            }
            None => {
                let _ = writeln!(out, "Baton vout: none (minting closed)");
            }
        }
    }
}
