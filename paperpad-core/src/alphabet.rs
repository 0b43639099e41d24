// File:    alphabet.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Defines the ordered symbol set and the symbol/index bijection used by the cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The finite ordered symbol set and its symbol/index bijection.
//!
//! Both cipher directions derive from the single [`Alphabet::index_of`] /
//! [`Alphabet::symbol_at`] pair, so the encode and decode paths can never
//! disagree on where a symbol sits in the index space.

use crate::error::CipherError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The base64 symbol table, in RFC 4648 order.
const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Selects which symbol set an [`Alphabet`] is built from.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// The 64-symbol base64 table.
    Base64,
    /// The base64 table followed by caller-supplied extra symbols.
    Base64Extended,
    /// The printable ASCII range, space through tilde (95 symbols).
    Printable,
}

/// An immutable ordered set of distinct symbols with a total bijection
/// between symbols and indices in `[0, N)`.
///
/// Built once per operation and never mutated afterwards; concurrent
/// operations with different alphabets cannot interfere.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from a charset selection.
    ///
    /// `extra_symbols` is consumed only by [`Charset::Base64Extended`] and
    /// ignored for the other selections.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::DuplicateSymbol`] if the resulting symbol set
    /// contains the same symbol twice, which would make the index mapping
    /// ambiguous.
    pub fn build(charset: Charset, extra_symbols: Option<&str>) -> Result<Self, CipherError> {
        let symbols: Vec<char> = match charset {
            Charset::Base64 => BASE64.chars().collect(),
            Charset::Base64Extended => {
                let mut symbols: Vec<char> = BASE64.chars().collect();
                if let Some(extra) = extra_symbols {
                    symbols.extend(extra.chars());
                }
                symbols
            }
            Charset::Printable => (' '..='~').collect(),
        };

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, i).is_some() {
                return Err(CipherError::DuplicateSymbol { symbol });
            }
        }

        Ok(Self { symbols, index })
    }

    /// The number of symbols in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet contains no symbols. Never true for an
    /// alphabet produced by [`Alphabet::build`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The index of `symbol`, or `None` if it is not in the alphabet.
    #[must_use]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// The symbol at `index`, or `None` if the index is out of range.
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The ordered symbol listing, first index first.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }

    /// Checks that every symbol of `sequence` is in the alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::UnsupportedSymbol`] naming the first offending
    /// symbol and its zero-based position.
    pub fn validate(&self, sequence: &str) -> Result<(), CipherError> {
        match sequence
            .chars()
            .enumerate()
            .find(|&(_, symbol)| !self.index.contains_key(&symbol))
        {
            Some((position, symbol)) => Err(CipherError::UnsupportedSymbol { symbol, position }),
            None => Ok(()),
        }
    }

    /// Maps a sequence to its indices, failing on the first symbol that is
    /// not in the alphabet.
    pub(crate) fn indices(&self, sequence: &str) -> Result<Vec<usize>, CipherError> {
        sequence
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index
                    .get(&symbol)
                    .copied()
                    .ok_or(CipherError::UnsupportedSymbol { symbol, position })
            })
            .collect()
    }

    /// Symbol for an index already reduced modulo the alphabet size.
    pub(crate) fn symbol_at_reduced(&self, index: usize) -> char {
        self.symbols[index]
    }
}
