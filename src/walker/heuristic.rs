//! Binary/text classification from a bounded prefix of a file.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::error::{PathContext, WhitespaceResult};

/// Bytes sampled from the start of a file
pub const SAMPLE_SIZE: u64 = 4096;

/// Largest share of suspicious bytes a text sample may contain
pub const MAX_NON_TEXT_RATIO: f64 = 0.30;

/// Report whether the file at `path` looks like text.
///
/// Symlinks are resolved by the OS. Only regular files are opened; a
/// directory, FIFO, socket or device node is never text. Empty files count
/// as text.
pub fn looks_text(path: &Path) -> WhitespaceResult<bool> {
    let metadata = fs::metadata(path).at(path)?;
    if !metadata.is_file() {
        return Ok(false);
    }

    let file = File::open(path).at(path)?;
    let mut sample = Vec::with_capacity(SAMPLE_SIZE as usize);
    file.take(SAMPLE_SIZE).read_to_end(&mut sample).at(path)?;

    Ok(sample_looks_text(&sample))
}

/// Classify an in-memory sample with the same rules as [`looks_text`]
pub fn sample_looks_text(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }

    if sample.contains(&0x00) {
        return false;
    }

    let non_text = count_non_text(sample);
    non_text as f64 <= MAX_NON_TEXT_RATIO * sample.len() as f64
}

/// Count disallowed control bytes and stray high bytes.
///
/// Valid multi-byte UTF-8 sequences are skipped as a whole.
fn count_non_text(sample: &[u8]) -> usize {
    let mut non_text = 0;
    let mut i = 0;

    while i < sample.len() {
        let b = sample[i];
        if b < 0x80 {
            if b < 0x20 && !matches!(b, b'\n' | b'\r' | b'\t') {
                non_text += 1;
            }
            i += 1;
            continue;
        }

        match utf8_sequence_len(&sample[i..]) {
            Some(width) => i += width,
            None => {
                non_text += 1;
                i += 1;
            }
        }
    }

    non_text
}

/// Width of the valid UTF-8 sequence starting at `bytes[0]`, if there is one
fn utf8_sequence_len(bytes: &[u8]) -> Option<usize> {
    let width = match bytes[0] {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };

    let candidate = bytes.get(..width)?;
    std::str::from_utf8(candidate).ok().map(|_| width)
}
