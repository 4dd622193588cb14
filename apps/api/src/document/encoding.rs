//! WinAnsiEncoding for the standard Type1 fonts.
//!
//! ASCII and Latin-1 map to themselves; the typographic punctuation that
//! Windows-1252 places in 0x80..0x9F is mapped explicitly. Anything else
//! becomes `?`.

/// Code points Windows-1252 assigns in 0x80..=0x9F.
const CP1252_HIGH: [(char, u8); 27] = [
    ('€', 0x80),
    ('‚', 0x82),
    ('ƒ', 0x83),
    ('„', 0x84),
    ('…', 0x85),
    ('†', 0x86),
    ('‡', 0x87),
    ('ˆ', 0x88),
    ('‰', 0x89),
    ('Š', 0x8A),
    ('‹', 0x8B),
    ('Œ', 0x8C),
    ('Ž', 0x8E),
    ('‘', 0x91),
    ('’', 0x92),
    ('“', 0x93),
    ('”', 0x94),
    ('•', 0x95),
    ('–', 0x96),
    ('—', 0x97),
    ('˜', 0x98),
    ('™', 0x99),
    ('š', 0x9A),
    ('›', 0x9B),
    ('œ', 0x9C),
    ('ž', 0x9E),
    ('Ÿ', 0x9F),
];

pub fn encode_char(c: char) -> u8 {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        0x09 | 0x0A | 0x0D => b' ',
        _ => CP1252_HIGH
            .iter()
            .find(|(glyph, _)| *glyph == c)
            .map(|(_, byte)| *byte)
            .unwrap_or(b'?'),
    }
}

/// Encodes a string for a `Tj` operand.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(encode_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        assert_eq!(encode_win_ansi("Jane Doe (2020)"), b"Jane Doe (2020)".to_vec());
    }

    #[test]
    fn test_typographic_punctuation() {
        assert_eq!(encode_win_ansi("• – —"), vec![0x95, b' ', 0x96, b' ', 0x97]);
        assert_eq!(encode_win_ansi("“ok”"), vec![0x93, b'o', b'k', 0x94]);
    }

    #[test]
    fn test_latin1_and_unmappable() {
        assert_eq!(encode_win_ansi("Résumé"), vec![b'R', 0xE9, b's', b'u', b'm', 0xE9]);
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
