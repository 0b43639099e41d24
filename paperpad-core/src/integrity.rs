// File:    integrity.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Wraps the cipher engine to append a checksum before encryption and verify it after decryption.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The integrity frame: checksum computation, framing, and verification.
//!
//! A checksum is a pure function of the message body alone; the same body
//! always yields the same tag under the same kind. That determinism is what
//! makes decrypt-side re-verification possible, and it also means the tag of
//! a given plaintext is invariant across runs. Callers who need
//! unlinkability across repeated messages must treat this as a documented
//! limitation of the scheme.
//!
//! Tags render as lowercase hex, and all built-in charset selections
//! contain the sixteen hex symbols, so a framed message stays expressible
//! in its alphabet.

use crate::alphabet::Alphabet;
use crate::crypto;
use crate::error::CipherError;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// The supported checksum kinds.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumKind {
    /// CRC-32, rendered as 8 lowercase hex symbols. Detects corruption,
    /// not tampering.
    Crc32,
    /// SHA-256 truncated to its first 8 bytes, rendered as 16 lowercase
    /// hex symbols.
    Sha256,
}

impl ChecksumKind {
    /// The fixed tag length in symbols for this kind.
    #[must_use]
    pub const fn tag_len(self) -> usize {
        match self {
            Self::Crc32 => 8,
            Self::Sha256 => 16,
        }
    }
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crc32 => f.write_str("crc32"),
            Self::Sha256 => f.write_str("sha256"),
        }
    }
}

/// Computes the checksum of `body` under `kind`.
///
/// Deterministic and dependent on the body alone; there is no pad or nonce
/// in the input.
#[must_use]
pub fn compute_checksum(body: &str, kind: ChecksumKind) -> String {
    match kind {
        ChecksumKind::Crc32 => format!("{:08x}", crc32fast::hash(body.as_bytes())),
        ChecksumKind::Sha256 => {
            let digest = Sha256::digest(body.as_bytes());
            hex::encode(&digest[..8])
        }
    }
}

/// Encrypts `message`, appending a checksum tag first when `checksum` is
/// set.
///
/// The pad-length requirement counts the framed message, tag included.
///
/// # Errors
///
/// Returns [`CipherError::PadTooShort`] if the pad has fewer symbols than
/// the framed message, and [`CipherError::UnsupportedSymbol`] if the framed
/// message or the consumed pad prefix contains a symbol outside the
/// alphabet.
pub fn encrypt_with_integrity(
    message: &str,
    pad: &str,
    alphabet: &Alphabet,
    checksum: Option<ChecksumKind>,
) -> Result<String, CipherError> {
    let framed = match checksum {
        Some(kind) => {
            let tag = compute_checksum(message, kind);
            debug!("appending {kind} tag of {} symbols", tag.len());
            let mut framed = String::with_capacity(message.len() + tag.len());
            framed.push_str(message);
            framed.push_str(&tag);
            framed
        }
        None => message.to_owned(),
    };
    crypto::encrypt(&framed, pad, alphabet)
}

/// Decrypts `ciphertext`, then verifies and strips the trailing checksum
/// tag when `checksum` is set.
///
/// On verification failure no part of the decrypted frame is returned.
///
/// # Errors
///
/// Returns the cipher engine errors of [`crypto::decrypt`], and
/// [`CipherError::ChecksumMismatch`] when the recomputed checksum differs
/// from the transmitted tag or the frame is shorter than the tag.
pub fn decrypt_with_integrity(
    ciphertext: &str,
    pad: &str,
    alphabet: &Alphabet,
    checksum: Option<ChecksumKind>,
) -> Result<String, CipherError> {
    let framed = crypto::decrypt(ciphertext, pad, alphabet)?;
    let Some(kind) = checksum else {
        return Ok(framed);
    };

    let symbols: Vec<char> = framed.chars().collect();
    let tag_len = kind.tag_len();
    if symbols.len() < tag_len {
        return Err(CipherError::ChecksumMismatch { kind });
    }

    let split = symbols.len() - tag_len;
    let body: String = symbols[..split].iter().collect();
    let tag: String = symbols[split..].iter().collect();
    if compute_checksum(&body, kind) != tag {
        return Err(CipherError::ChecksumMismatch { kind });
    }
    debug!("{kind} tag verified over {split} body symbols");
    Ok(body)
}
