//! Plausible-text detection for buffers no magic rule claimed.

/// Byte classes for the 8-bit encodings the classifier understands.
///
/// `T` is printable ASCII plus the control bytes that appear in ordinary
/// text files (HT LF FF CR ESC). `F` is a control byte that marks the
/// buffer as binary. `X` is the 0x80-0x9F range, invalid in Latin-1 text.
/// `I` is the Latin-1 international range.
const T: u8 = 0;
const F: u8 = 1;
const X: u8 = 2;
const I: u8 = 3;

#[rustfmt::skip]
static BYTE_CLASS: [u8; 256] = [
    /*                 HT LF VT FF CR       */
    F, F, F, F, F, F, F, F, F, T, T, F, T, T, F, F, /* 0x0X */
    /*                                ESC   */
    F, F, F, F, F, F, F, F, F, F, F, T, F, F, F, F, /* 0x1X */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x2X */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x3X */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x4X */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x5X */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, /* 0x6X */
    /*                                          DEL */
    T, T, T, T, T, T, T, T, T, T, T, T, T, T, T, F, /* 0x7X */
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, /* 0x8X */
    X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, X, /* 0x9X */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xaX */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xbX */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xcX */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xdX */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xeX */
    I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, I, /* 0xfX */
];

/// Byte-order marks the engine recognizes, longest first so the UTF-32
/// marks are not mistaken for their UTF-16 prefixes.
static BOMS: [&[u8]; 5] = [
    &[0xff, 0xfe, 0x00, 0x00],
    &[0x00, 0x00, 0xfe, 0xff],
    &[0xef, 0xbb, 0xbf],
    &[0xff, 0xfe],
    &[0xfe, 0xff],
];

pub(crate) fn has_bom(buf: &[u8]) -> bool {
    BOMS.iter().any(|bom| buf.starts_with(bom))
}

fn looks_utf8(buf: &[u8]) -> bool {
    std::str::from_utf8(buf).is_ok() && buf.iter().all(|&b| BYTE_CLASS[b as usize] != F)
}

fn looks_latin1(buf: &[u8]) -> bool {
    buf.iter()
        .all(|&b| matches!(BYTE_CLASS[b as usize], T | I))
}

/// Whether a buffer is plausibly text in any encoding family the engine
/// understands: BOM-marked Unicode, UTF-8, or a Latin-1-compatible 8-bit
/// encoding. Empty buffers are not text.
pub(crate) fn is_text(buf: &[u8]) -> bool {
    if buf.is_empty() {
        return false;
    }
    has_bom(buf) || looks_utf8(buf) || looks_latin1(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ascii() {
        assert!(is_text(b"Hello\n"));
        assert!(is_text(b"key = value\r\n# comment\ttrailer\n"));
    }

    #[test]
    fn test_empty_is_not_text() {
        assert!(!is_text(b""));
    }

    #[test]
    fn test_control_bytes_reject() {
        assert!(!is_text(b"Hello\x00world"));
        assert!(!is_text(&[0x00, 0x01, 0x02, 0x03]));
        assert!(!is_text(b"vertical\x0btab"));
    }

    #[test]
    fn test_permitted_controls() {
        // HT LF FF CR ESC all appear in real text files.
        assert!(is_text(b"a\tb\nc\x0cd\re\x1b[0m"));
    }

    #[test]
    fn test_utf8_multibyte() {
        assert!(is_text("héllo wörld — ✓\n".as_bytes()));
    }

    #[test]
    fn test_latin1() {
        // ISO-8859-15 text: "déjà" with 8-bit accents, not valid UTF-8.
        assert!(is_text(&[b'd', 0xe9, b'j', 0xe0, b'\n']));
    }

    #[test]
    fn test_c1_range_rejects_latin1() {
        assert!(!is_text(&[b'a', 0x85, b'b']));
    }

    #[test]
    fn test_boms() {
        assert!(has_bom(&[0xef, 0xbb, 0xbf, b'h', b'i']));
        assert!(has_bom(&[0xff, 0xfe, 0x00]));
        assert!(has_bom(&[0xfe, 0xff, 0x00, 0x41]));
        assert!(has_bom(&[0xff, 0xfe, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00]));
        assert!(has_bom(&[0x00, 0x00, 0xfe, 0xff, 0x00, 0x00, 0x00, 0x41]));
        assert!(!has_bom(b"plain"));
        // UTF-16 content is not valid UTF-8, but the BOM alone marks it text.
        assert!(is_text(&[0xff, 0xfe, b'h', 0x00, b'i', 0x00]));
    }
}
