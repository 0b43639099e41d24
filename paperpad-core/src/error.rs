// File:    error.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Error types shared by the alphabet, cipher, and integrity layers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the paperpad core library.

use crate::integrity::ChecksumKind;
use thiserror::Error;

/// Errors produced by alphabet construction and cipher operations.
///
/// Every variant is terminal for the operation that raised it; nothing is
/// retried internally and no partial result is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Alphabet construction would map the same symbol to two indices.
    #[error("duplicate symbol {symbol:?} in alphabet")]
    DuplicateSymbol {
        /// The symbol that appeared more than once.
        symbol: char,
    },

    /// A message or pad contains a symbol outside the alphabet.
    #[error("unsupported symbol {symbol:?} at position {position}")]
    UnsupportedSymbol {
        /// The offending symbol.
        symbol: char,
        /// Zero-based position of the symbol within its sequence.
        position: usize,
    },

    /// The pad is shorter than the framed message.
    #[error("pad too short: {required} symbols required, {available} available")]
    PadTooShort {
        /// Length of the framed message in symbols.
        required: usize,
        /// Length of the supplied pad in symbols.
        available: usize,
    },

    /// The checksum recomputed after decryption does not match the
    /// transmitted tag, or the decrypted frame is shorter than the tag.
    #[error("{kind} checksum verification failed")]
    ChecksumMismatch {
        /// The checksum kind that was being verified.
        kind: ChecksumKind,
    },
}
