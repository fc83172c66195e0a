use crate::config::{AppConfig, OutputFormat};
use crate::decoder::{decode_script_hex, DecodeReport, DecodeStatus};
use crate::errors::{AppError, AppResult};
use crate::types::TokenId;
use anyhow::Context;
use clap::Args;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::render_report;

/// Decode every row of a CSV file of txid,script_hex pairs
#[derive(Args)]
pub struct BatchCommand {
    /// CSV file with a `txid,script_hex` header row
    pub input: PathBuf,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// One row of batch input
#[derive(Debug, Deserialize)]
pub struct BatchRecord {
    pub txid: String,
    pub script_hex: String,
}

/// Tally of batch outcomes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub decoded: usize,
    pub not_slp: usize,
    pub invalid: usize,
}

impl BatchSummary {
    fn record(&mut self, status: DecodeStatus) {
        match status {
            DecodeStatus::Decoded => self.decoded += 1,
            DecodeStatus::NotSlp => self.not_slp += 1,
            DecodeStatus::Invalid => self.invalid += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.decoded + self.not_slp + self.invalid
    }
}

impl BatchCommand {
    pub fn run(&self, config: &AppConfig) -> AppResult<()> {
        info!("Starting batch decode of {}", self.input.display());

        let records = read_records(&self.input)
            .map_err(|e| AppError::InvalidData(format!("{:#}", e)))?;

        let (reports, summary) = decode_records(&records);
        for report in &reports {
            // One line per row keeps JSON output streamable
            println!("{}", render_report(report, self.format, config, false)?);
        }

        info!(
            "Batch complete: {} rows, {} decoded, {} not SLP, {} invalid",
            summary.total(),
            summary.decoded,
            summary.not_slp,
            summary.invalid
        );
        Ok(())
    }
}

/// Read batch rows from a CSV file
pub fn read_records(path: &Path) -> anyhow::Result<Vec<BatchRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open batch file {}", path.display()))?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        // Header is line 1
        let record: BatchRecord =
            row.with_context(|| format!("Malformed batch row at line {}", index + 2))?;
        records.push(record);
    }
    Ok(records)
}

/// Decode each row independently
pub fn decode_records(records: &[BatchRecord]) -> (Vec<DecodeReport>, BatchSummary) {
    let mut summary = BatchSummary::default();
    let reports: Vec<DecodeReport> = records
        .iter()
        .map(|record| {
            let report = match record.txid.trim().parse::<TokenId>() {
                Ok(txid) => {
                    DecodeReport::from_outcome(&txid, decode_script_hex(&record.script_hex, &txid))
                }
                Err(e) => {
                    DecodeReport::rejected(record.txid.clone(), format!("Invalid txid: {}", e))
                }
            };
            debug!("Row {}: {:?}", record.txid, report.status);
            summary.record(report.status);
            report
        })
        .collect();
    (reports, summary)
}
