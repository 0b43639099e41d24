// File:    pad_generator.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Produces pad material by mapping entropy bytes into an alphabet, and records generated pads.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Pad material generation.
//!
//! Entropy comes from a hardware device path such as `/dev/hwrng` when one
//! is supplied, or from the operating system RNG otherwise. Each raw byte is
//! mapped into the alphabet as `byte mod N`. The cipher core never touches
//! this module; it only consumes the resulting symbol sequence.

use crate::alphabet::{Alphabet, Charset};
use log::info;
use rand::rngs::OsRng;
use rand::TryRngCore;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Sidecar metadata describing a generated pad file.
///
/// Informational only; the cipher core never reads it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PadRecord {
    /// A unique identifier for the pad.
    pub id: String,
    /// The name of the file containing the pad text.
    pub file_name: String,
    /// The pad length in symbols.
    pub length: usize,
    /// The charset selection the pad was generated for.
    pub charset: Charset,
}

/// Reads `count` entropy bytes.
///
/// With a `device` path the bytes come from that file (typically
/// `/dev/hwrng`); without one they come from the operating system RNG.
///
/// # Errors
///
/// Returns an error if the device cannot be opened or does not yield
/// `count` bytes, or if the OS RNG fails.
pub fn read_entropy(device: Option<&Path>, count: usize) -> std::io::Result<Vec<u8>> {
    let mut buffer = vec![0u8; count];
    match device {
        Some(path) => {
            let mut file = File::open(path)?;
            file.read_exact(&mut buffer)?;
        }
        None => {
            let mut rng = OsRng;
            // Use the failable `try_fill_bytes` and map the error to an `io::Error`.
            rng.try_fill_bytes(&mut buffer)
                .map_err(std::io::Error::other)?;
        }
    }
    Ok(buffer)
}

/// Maps raw entropy bytes into pad text, one symbol per byte via
/// `byte mod N`.
#[must_use]
pub fn pad_text_from_bytes(alphabet: &Alphabet, bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| alphabet.symbol_at_reduced(usize::from(byte) % alphabet.len()))
        .collect()
}

/// Generates a pad file of `length` symbols at `path` and writes a JSON
/// [`PadRecord`] sidecar next to it.
///
/// # Errors
///
/// Returns an error if entropy cannot be read or either file cannot be
/// written.
pub fn generate_pad(
    path: &Path,
    alphabet: &Alphabet,
    charset: Charset,
    length: usize,
    device: Option<&Path>,
) -> std::io::Result<PadRecord> {
    let bytes = read_entropy(device, length)?;
    let text = pad_text_from_bytes(alphabet, &bytes);
    fs::write(path, &text)?;

    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let record = PadRecord {
        id: Uuid::new_v4().to_string(),
        file_name,
        length,
        charset,
    };
    save_record(&record_path(path), &record)?;
    info!("generated pad {} ({length} symbols) at '{}'", record.id, path.display());
    Ok(record)
}

/// The sidecar path for a pad file: the pad path with `.json` appended.
#[must_use]
pub fn record_path(pad_path: &Path) -> PathBuf {
    let mut name = OsString::from(pad_path.as_os_str());
    name.push(".json");
    PathBuf::from(name)
}

/// Saves a pad record as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized or written.
pub fn save_record(path: &Path, record: &PadRecord) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(record).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/// Loads a pad record from its JSON sidecar.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_record(path: &Path) -> std::io::Result<PadRecord> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(std::io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_map_modulo_alphabet_size() {
        let alphabet = Alphabet::build(Charset::Base64, None).unwrap();
        let text = pad_text_from_bytes(&alphabet, &[0, 63, 64, 65, 255]);
        // 64 wraps to 0, 65 to 1, 255 to 63.
        assert_eq!(text, "A/AB/");
    }

    #[test]
    fn test_generated_pad_contains_only_alphabet_symbols() {
        let alphabet = Alphabet::build(Charset::Printable, None).unwrap();
        let bytes = read_entropy(None, 500).unwrap();
        let text = pad_text_from_bytes(&alphabet, &bytes);
        assert_eq!(text.chars().count(), 500);
        assert!(alphabet.validate(&text).is_ok());
    }

    #[test]
    fn test_generate_pad_writes_file_and_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pad_path = temp_dir.path().join("test.pad");
        let alphabet = Alphabet::build(Charset::Base64, None).unwrap();

        let record =
            generate_pad(&pad_path, &alphabet, Charset::Base64, 128, None).unwrap();
        assert_eq!(record.length, 128);
        assert_eq!(record.file_name, "test.pad");

        let text = fs::read_to_string(&pad_path).unwrap();
        assert_eq!(text.chars().count(), 128);
        assert!(alphabet.validate(&text).is_ok());

        let loaded = load_record(&record_path(&pad_path)).unwrap();
        assert_eq!(loaded.id, record.id);
        assert_eq!(loaded.charset, Charset::Base64);
    }
}
