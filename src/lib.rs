//! Content-based detection of MIME types.
//!
//! Classifies a byte buffer against a compiled-in snapshot of the
//! freedesktop.org shared-mime-info magic database, falling back to a
//! text/binary heuristic when no signature applies.
//!
//! ```
//! use mime_magic::match_magic;
//!
//! assert_eq!(match_magic(b"\x89PNG\r\n\x1a\n...."), "image/png");
//! assert_eq!(match_magic(b"#!/bin/sh\nexit 0\n"), "application/x-shellscript");
//! assert_eq!(match_magic(&[0x00, 0x01, 0x02, 0x03]), "application/octet-stream");
//! ```
//!
//! # Note
//!
//! Detection looks at file *contents* only. Formats whose on-disk encoding
//! is indistinguishable from a generic container (OOXML inside zip, say) or
//! from plain text (most source code) resolve to the container or to
//! `text/plain`; pairing this with a filename-based guesser is the caller's
//! business.
//!
//! Only the first [`MAGIC_MAX_LEN`] bytes are ever inspected, so callers
//! streaming from disk or a socket need not buffer more than that.

mod magic;
mod media_type;
mod text;

pub use crate::media_type::MediaType;

/// The maximum number of leading bytes any magic rule inspects. Passing a
/// longer buffer to [`match_magic`] is fine; the excess is ignored.
pub const MAGIC_MAX_LEN: usize = magic::MAGIC_MAX_LEN;

const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_PLAIN: &str = "text/plain";
const ZERO_SIZE: &str = "application/x-zerosize";

/// Threshold above which a rule match beats the byte-order-mark shortcut.
const BOM_OVERRIDE_PRIORITY: u8 = 80;

/// Classify a buffer by its leading bytes.
///
/// Every input yields a verdict: the best-matching magic rule if any
/// matches (ties broken by priority, then by matched-pattern length, then
/// by table order), `text/plain` for buffers that look like text in a
/// recognized encoding, and `application/octet-stream` otherwise. The
/// empty buffer is `application/x-zerosize`.
///
/// The function is pure and reentrant; the rule table is immutable static
/// data, so concurrent calls need no synchronization.
pub fn match_magic(buf: &[u8]) -> MediaType {
    let buf = &buf[..buf.len().min(MAGIC_MAX_LEN)];
    if buf.is_empty() {
        return MediaType::from_static(ZERO_SIZE);
    }

    let best = magic::best_match(buf);
    if let Some(rule) = best {
        if rule.priority >= BOM_OVERRIDE_PRIORITY {
            return MediaType::from_static(rule.media_type);
        }
    }
    // An explicit byte-order mark outranks anything but a high-priority
    // rule: the content is text in some Unicode encoding even when a weak
    // signature also happens to fire.
    if text::has_bom(buf) {
        return MediaType::from_static(TEXT_PLAIN);
    }
    if let Some(rule) = best {
        return MediaType::from_static(rule.media_type);
    }
    if text::is_text(buf) {
        MediaType::from_static(TEXT_PLAIN)
    } else {
        MediaType::from_static(OCTET_STREAM)
    }
}
