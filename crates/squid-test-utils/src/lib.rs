//! Test utilities for squid development.
//!
//! Occupancy masks are written as ASCII art, one string per row: `'#'` is
//! superconductor, anything else is vacuum. Row `0` is `y = 0`.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use squid_grid::Mask;

/// Parse an ASCII-art occupancy mask.
///
/// # Panics
///
/// Panics on empty or ragged input.
pub fn mask_from_art(rows: &[&str]) -> Mask {
    let rows: Vec<Vec<bool>> = rows
        .iter()
        .map(|r| r.chars().map(|c| c == '#').collect())
        .collect();
    Mask::from_rows(rows).expect("fixture art must be rectangular and non-empty")
}

/// Render a mask back to ASCII art, for assertion messages.
pub fn mask_to_art(mask: &Mask) -> String {
    let mut out = String::with_capacity(mask.len() + mask.height());
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            out.push(if mask[(x, y)] { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
