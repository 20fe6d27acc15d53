//! Text encoding for the standard (non-embedded) PDF fonts.
//!
//! The standard 14 fonts are addressed with single byte codes, so text is converted to
//! `WinAnsiEncoding` (Windows code page 1252) before being written. Anything the encoding can't
//! represent is drawn as `?`.

/// Bytes written in place of characters WinAnsi has no code for
pub const REPLACEMENT: u8 = b'?';

/// Number of spaces a tab expands to
pub const TAB_WIDTH: usize = 4;

/// The printable characters of 0x80..=0x9F, where code page 1252 departs from Latin-1
const HIGH_CONTROL_RANGE: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];

fn win_ansi_byte(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u32 as u8),
        _ => HIGH_CONTROL_RANGE
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, b)| *b),
    }
}

/// Encode a line of text as WinAnsi bytes
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c == '\t' {
            bytes.extend(std::iter::repeat(b' ').take(TAB_WIDTH));
            continue;
        }
        bytes.push(win_ansi_byte(c).unwrap_or(REPLACEMENT));
    }
    bytes
}
