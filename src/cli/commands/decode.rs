use crate::config::{AppConfig, OutputFormat};
use crate::decoder::{decode_script_hex, DecodeReport, DecodeStatus};
use crate::errors::{AppError, AppResult};
use crate::types::TokenId;
use clap::Args;
use tracing::{info, warn};

use super::render_report;

/// Decode an OP_RETURN script as an SLP message
#[derive(Args)]
pub struct DecodeCommand {
    /// OP_RETURN script, hex-encoded (starting with 6a)
    pub script_hex: String,

    /// Transaction id carrying the output; becomes the token id of a GENESIS
    #[arg(long)]
    pub txid: Option<String>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl DecodeCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        let txid = parse_txid(self.txid.as_deref())?;

        let report = DecodeReport::from_outcome(&txid, decode_script_hex(&self.script_hex, &txid));
        match report.status {
            DecodeStatus::Decoded => info!("Decoded SLP message for {}", txid),
            DecodeStatus::NotSlp => info!("Script for {} is not an SLP message", txid),
            DecodeStatus::Invalid => warn!(
                "Invalid SLP message for {}: {}",
                txid,
                report.error.as_deref().unwrap_or_default()
            ),
        }

        println!(
            "{}",
            render_report(&report, self.format, config, config.output.pretty)?
        );
        Ok(())
    }
}

/// Parse a txid argument; a missing txid decodes against the all-zero id
pub(crate) fn parse_txid(txid: Option<&str>) -> AppResult<TokenId> {
    match txid {
        Some(txid) => txid
            .trim()
            .parse()
            .map_err(|e| AppError::InvalidData(format!("Invalid txid '{}': {}", txid, e))),
        None => {
            warn!("No --txid given; GENESIS token ids will be all zeros");
            Ok(TokenId::new([0u8; 32]))
        }
    }
}
