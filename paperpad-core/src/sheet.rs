// File:    sheet.rs
// Author:  paperpad
// Date:    2026-08-07
//
// Description: Renders pad material and an alphabet key table as a printable monospace page.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Printable pad sheets.
//!
//! A sheet is one monospace page: an instructional header, a column ruler
//! every 5 columns, the alphabet key table, and pad rows each prefixed with
//! the running symbol count. The default layout matches a letter page set
//! in 8 pt Courier with 3/4 inch margins: 100 symbols per row (a multiple
//! of 5) and 42 rows.
//!
//! Layout is an explicit value passed into rendering, never process-wide
//! state, so concurrent renders with different alphabets or page shapes
//! cannot interfere.

use crate::alphabet::Alphabet;

/// Page shape for a printable pad sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    /// Pad symbols per row. Rows read best as a multiple of 5, matching
    /// the column ruler.
    pub chars_per_line: usize,
    /// Pad rows per page.
    pub lines_per_page: usize,
}

impl SheetLayout {
    /// The number of pad symbols one page holds.
    #[must_use]
    pub const fn capacity(self) -> usize {
        self.chars_per_line * self.lines_per_page
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            chars_per_line: 100,
            lines_per_page: 42,
        }
    }
}

/// Renders one printable page of pad material.
///
/// Pad text beyond the page capacity is not rendered.
#[must_use]
pub fn render_sheet(pad_text: &str, alphabet: &Alphabet, layout: SheetLayout) -> String {
    // Data rows carry a 4-column running count; everything else is
    // indented to align with the data column.
    let indent = " ".repeat(4);
    let mut page = String::new();

    if let Some(first) = alphabet.symbol_at(0) {
        page.push_str(&format!(
            "{indent}position 0 of the key rows below is {first:?}\n"
        ));
    }
    let n = alphabet.len();
    page.push_str(&format!(
        "{indent}encryption is (message+otp)%{n}, decryption is (message-otp)%{n}\n"
    ));

    let mut ruler = String::with_capacity(layout.chars_per_line);
    for column in (0..layout.chars_per_line).step_by(5) {
        ruler.push_str(&format!("{column:<5}"));
    }
    page.push_str(&format!("{indent}{ruler}\n"));

    let key: Vec<char> = alphabet.symbols().collect();
    for row in key.chunks(layout.chars_per_line) {
        page.push_str(&indent);
        page.extend(row.iter());
        page.push('\n');
    }
    page.push('\n');

    let symbols: Vec<char> = pad_text.chars().collect();
    let mut count = 0_usize;
    for row in symbols
        .chunks(layout.chars_per_line)
        .take(layout.lines_per_page)
    {
        page.push_str(&format!("{count:<4}"));
        page.extend(row.iter());
        page.push('\n');
        count += row.len();
    }

    page
}
