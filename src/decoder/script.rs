//! OP_RETURN push-data extraction
//!
//! Splits an OP_RETURN script into the positional chunk list consumed by the
//! SLP decoders. Only the script bytes are inspected; locating the output
//! inside a transaction is the caller's job.

use super::error::ScriptError;
use crate::types::Chunk;

const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;
const OP_RETURN: u8 = 0x6a;

/// Split an OP_RETURN script into chunks.
///
/// Position 0 is the OP_RETURN opcode and is always absent. Each following
/// opcode contributes one chunk: data pushes (including OP_0, an empty push)
/// are present, any other opcode is absent. Declared push lengths must fit
/// inside the script.
pub fn extract_chunks(script: &[u8]) -> Result<Vec<Chunk>, ScriptError> {
    if script.first() != Some(&OP_RETURN) {
        return Err(ScriptError::NotOpReturn);
    }

    let mut chunks: Vec<Chunk> = vec![None];
    let mut pos = 1;

    while pos < script.len() {
        let offset = pos;
        let opcode = script[pos];
        pos += 1;

        let (len_bytes, declared_len) = match opcode {
            OP_0 => (0, Some(0)),
            op @ 0x01..=0x4b => (0, Some(op as usize)),
            OP_PUSHDATA1 => (1, None),
            OP_PUSHDATA2 => (2, None),
            OP_PUSHDATA4 => (4, None),
            _ => {
                chunks.push(None);
                continue;
            }
        };

        let len = match declared_len {
            Some(len) => len,
            None => {
                let len_field = script
                    .get(pos..pos + len_bytes)
                    .ok_or(ScriptError::TruncatedPush { offset })?;
                pos += len_bytes;
                // Push lengths are little-endian
                len_field
                    .iter()
                    .rev()
                    .fold(0usize, |acc, b| (acc << 8) | *b as usize)
            }
        };

        let data = pos
            .checked_add(len)
            .and_then(|end| script.get(pos..end))
            .ok_or(ScriptError::TruncatedPush { offset })?;
        chunks.push(Some(data.to_vec()));
        pos += len;
    }

    Ok(chunks)
}

/// Hex-encoded variant of [`extract_chunks`]
pub fn extract_chunks_hex(script_hex: &str) -> Result<Vec<Chunk>, ScriptError> {
    let script = hex::decode(script_hex.trim())?;
    extract_chunks(&script)
}
