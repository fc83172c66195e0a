use crate::decoder::extract_chunks_hex;
use crate::errors::AppResult;
use clap::Args;
use tracing::info;

/// Show the push-data chunks of an OP_RETURN script
#[derive(Args)]
pub struct ChunksCommand {
    /// OP_RETURN script, hex-encoded (starting with 6a)
    pub script_hex: String,
}

impl ChunksCommand {
    pub fn run(&self) -> AppResult<()> {
        let chunks = extract_chunks_hex(&self.script_hex)?;
        info!("Extracted {} chunks", chunks.len());

        for (position, chunk) in chunks.iter().enumerate() {
            match chunk {
                Some(bytes) => println!(
                    "[{:2}] {:3} bytes  {}  {}",
                    position,
                    bytes.len(),
                    hex::encode(bytes),
                    ascii_preview(bytes)
                ),
                None => println!("[{:2}] <absent>", position),
            }
        }
        Ok(())
    }
}

fn ascii_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '.'
            }
        })
        .collect()
}
