// File:    crypto.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Handles the core cipher operations, modular addition and subtraction of message and pad over the alphabet index space.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The cipher engine: modular addition and subtraction over an alphabet.
//!
//! Both directions run the same preparation pass (length check, then full
//! validation of the message and the consumed pad prefix) before any
//! arithmetic, so an invalid-symbol error can never be confused with a
//! silently corrupted result.

use crate::alphabet::Alphabet;
use crate::error::CipherError;
use log::debug;

/// Encrypts `message` with `pad` by adding symbol indices modulo the
/// alphabet size.
///
/// Pad symbols beyond the message length are ignored and never read.
///
/// # Errors
///
/// Returns [`CipherError::PadTooShort`] if the pad has fewer symbols than
/// the message, and [`CipherError::UnsupportedSymbol`] if the message or
/// the consumed pad prefix contains a symbol outside the alphabet.
pub fn encrypt(message: &str, pad: &str, alphabet: &Alphabet) -> Result<String, CipherError> {
    let (message, pad) = prepare(message, pad, alphabet)?;
    let n = alphabet.len();
    debug!("encrypting {} symbols over alphabet of {n}", message.len());
    Ok(message
        .iter()
        .zip(&pad)
        .map(|(&m, &p)| alphabet.symbol_at_reduced((m + p) % n))
        .collect())
}

/// Decrypts `ciphertext` with `pad` by subtracting symbol indices modulo
/// the alphabet size.
///
/// # Errors
///
/// Returns [`CipherError::PadTooShort`] if the pad has fewer symbols than
/// the ciphertext, and [`CipherError::UnsupportedSymbol`] if the
/// ciphertext or the consumed pad prefix contains a symbol outside the
/// alphabet.
pub fn decrypt(ciphertext: &str, pad: &str, alphabet: &Alphabet) -> Result<String, CipherError> {
    let (ciphertext, pad) = prepare(ciphertext, pad, alphabet)?;
    let n = alphabet.len();
    debug!("decrypting {} symbols over alphabet of {n}", ciphertext.len());
    Ok(ciphertext
        .iter()
        .zip(&pad)
        .map(|(&c, &p)| alphabet.symbol_at_reduced(sub_mod(c, p, n)))
        .collect())
}

/// Length check and validation shared by both cipher directions.
///
/// Returns the index sequences for the text and for the pad prefix of the
/// same length. Validation happens here in full, before any arithmetic.
fn prepare(
    text: &str,
    pad: &str,
    alphabet: &Alphabet,
) -> Result<(Vec<usize>, Vec<usize>), CipherError> {
    let required = text.chars().count();
    let available = pad.chars().count();
    if available < required {
        return Err(CipherError::PadTooShort {
            required,
            available,
        });
    }

    let text_indices = alphabet.indices(text)?;
    let pad_prefix: String = pad.chars().take(required).collect();
    let pad_indices = alphabet.indices(&pad_prefix)?;
    Ok((text_indices, pad_indices))
}

/// Subtraction modulo `n` with a result always in `[0, n)`.
///
/// Operands must already be reduced modulo `n`; the `+ n` keeps the
/// intermediate value non-negative so the remainder never is either.
const fn sub_mod(a: usize, b: usize, n: usize) -> usize {
    (a + n - b) % n
}
