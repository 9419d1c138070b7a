//! The compiled magic-rule table and the matcher that evaluates it.
//!
//! The table is a forest flattened into two arenas: `RULES`, one entry per
//! media type with signatures, and `NODES`, every pattern node in the
//! database. Rules and nodes address their children as `(start, end)` index
//! ranges into `NODES`, so the whole database is plain `static` data with no
//! pointer graphs and nothing to initialize at runtime.

use memchr::memmem;

include!("generated/data.rs");

#[cfg(test)]
include!("generated/test_data.rs");

/// How a node's pattern is compared against the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Plain byte comparison, optionally masked.
    Bytes,
    /// Byte comparison folding ASCII letters to lower case, after masking.
    StringCi,
    /// Fixed-width integer comparison in the platform's byte order. These
    /// exist to preserve upstream rules authored against host order (both
    /// pcap magics, for instance); do not normalize them to a fixed order.
    // The source format defines host16; no rule in the current snapshot
    // uses it.
    #[allow(dead_code)]
    Host16,
    Host32,
    /// Fixed-width big-endian integer comparison.
    Big16,
    Big32,
    /// Fixed-width little-endian integer comparison.
    Little16,
    Little32,
}

/// One pattern check. The pattern may start at any offset in
/// `[offset_lo, offset_hi]`; offsets are absolute from the buffer start,
/// including for child nodes.
#[derive(Debug)]
pub(crate) struct MagicNode {
    pub(crate) kind: Kind,
    pub(crate) offset_lo: u32,
    pub(crate) offset_hi: u32,
    pub(crate) pattern: &'static [u8],
    /// Same length as `pattern` when present. Integer-kind masks are stored
    /// big-endian, like integer-kind patterns.
    pub(crate) mask: Option<&'static [u8]>,
    pub(crate) children: (u16, u16),
}

/// All signatures for one media type. Matches when any root walk succeeds.
#[derive(Debug)]
pub(crate) struct MagicRule {
    pub(crate) media_type: &'static str,
    pub(crate) priority: u8,
    pub(crate) roots: (u16, u16),
}

/// The outcome of scanning the table: the winning rule under the total
/// order (priority desc, specificity desc, table order asc).
pub(crate) fn best_match(buf: &[u8]) -> Option<&'static MagicRule> {
    let mut best: Option<(u8, usize, &MagicRule)> = None;
    for rule in RULES.iter() {
        if let Some((priority, _, _)) = best {
            // RULES is sorted by priority descending; nothing below the
            // current best's priority can win.
            if rule.priority < priority {
                break;
            }
        }
        if let Some(specificity) = rule_matches(rule, buf) {
            if best.map_or(true, |(p, s, _)| (rule.priority, specificity) > (p, s)) {
                best = Some((rule.priority, specificity, rule));
            }
        }
    }
    best.map(|(_, _, rule)| rule)
}

/// Evaluate a rule's forest of root nodes. On success, returns the summed
/// pattern length along the first satisfied root-to-node walk, the
/// specificity used to break priority ties.
pub(crate) fn rule_matches(rule: &MagicRule, buf: &[u8]) -> Option<usize> {
    let (start, end) = rule.roots;
    (start..end).find_map(|idx| walk(idx as usize, buf))
}

/// A walk succeeds at a node when the node matches and either it is a leaf
/// or some child walk succeeds. Out-of-range indices read as non-matching,
/// so a corrupt table degrades to fewer matches instead of a panic.
fn walk(idx: usize, buf: &[u8]) -> Option<usize> {
    let node = NODES.get(idx)?;
    if !node_matches(node, buf) {
        return None;
    }
    let (start, end) = node.children;
    if start == end {
        return Some(node.pattern.len());
    }
    (start..end)
        .find_map(|child| walk(child as usize, buf))
        .map(|specificity| node.pattern.len() + specificity)
}

/// Whether a single node's pattern occurs at any offset in its range.
/// Malformed nodes (empty pattern, inverted range, mask/width mismatch)
/// never match.
pub(crate) fn node_matches(node: &MagicNode, buf: &[u8]) -> bool {
    let len = node.pattern.len();
    if len == 0 || node.offset_lo > node.offset_hi {
        return false;
    }
    if node.mask.is_some_and(|mask| mask.len() != len) {
        return false;
    }
    if buf.len() < len {
        return false;
    }
    let lo = node.offset_lo as usize;
    // Last offset whose window still fits in the buffer.
    let hi = (node.offset_hi as usize).min(buf.len() - len);
    if lo > hi {
        return false;
    }

    match (node.kind, node.mask) {
        // The common case: an exact needle somewhere in a window. One
        // memmem scan replaces the per-offset loop.
        (Kind::Bytes, None) => {
            let window = &buf[lo..(hi + len).min(buf.len())];
            matches!(memmem::find(window, node.pattern), Some(pos) if lo + pos <= hi)
        }
        (Kind::Bytes, Some(mask)) => (lo..=hi).any(|o| {
            buf[o..o + len]
                .iter()
                .zip(node.pattern)
                .zip(mask)
                .all(|((&b, &p), &m)| b & m == p & m)
        }),
        (Kind::StringCi, mask) => {
            let mask = mask.unwrap_or(&[]);
            (lo..=hi).any(|o| {
                buf[o..o + len]
                    .iter()
                    .zip(node.pattern)
                    .enumerate()
                    .all(|(i, (&b, &p))| {
                        let m = mask.get(i).copied().unwrap_or(0xff);
                        (b & m).to_ascii_lowercase() == (p & m).to_ascii_lowercase()
                    })
            })
        }
        (kind, mask) => {
            let Some(want) = read_int(kind, Kind::Big32, node.pattern) else {
                return false;
            };
            let mask = match mask {
                Some(mask) => match read_int(kind, Kind::Big32, mask) {
                    Some(m) => m,
                    None => return false,
                },
                None => u32::MAX,
            };
            (lo..=hi).any(|o| {
                read_int(kind, kind, &buf[o..o + len])
                    .is_some_and(|got| got & mask == want & mask)
            })
        }
    }
}

/// Decode a 2- or 4-byte integer. `width` supplies the expected width (its
/// own byte order is ignored for that purpose); `order` supplies the byte
/// order to decode with. Table patterns and masks are always stored
/// big-endian; buffer bytes are decoded in the node's own order.
fn read_int(width: Kind, order: Kind, bytes: &[u8]) -> Option<u32> {
    match width {
        Kind::Host16 | Kind::Big16 | Kind::Little16 => {
            let raw: [u8; 2] = bytes.try_into().ok()?;
            Some(match order {
                Kind::Little16 | Kind::Little32 => u16::from_le_bytes(raw),
                Kind::Host16 | Kind::Host32 => u16::from_ne_bytes(raw),
                _ => u16::from_be_bytes(raw),
            } as u32)
        }
        Kind::Host32 | Kind::Big32 | Kind::Little32 => {
            let raw: [u8; 4] = bytes.try_into().ok()?;
            Some(match order {
                Kind::Little16 | Kind::Little32 => u32::from_le_bytes(raw),
                Kind::Host16 | Kind::Host32 => u32::from_ne_bytes(raw),
                _ => u32::from_be_bytes(raw),
            })
        }
        Kind::Bytes | Kind::StringCi => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media_type::MediaType;

    fn leaf(kind: Kind, lo: u32, hi: u32, pattern: &'static [u8], mask: Option<&'static [u8]>) -> MagicNode {
        MagicNode {
            kind,
            offset_lo: lo,
            offset_hi: hi,
            pattern,
            mask,
            children: (0, 0),
        }
    }

    #[test]
    fn test_bytes_exact() {
        let node = leaf(Kind::Bytes, 0, 0, b"%PDF-", None);
        assert!(node_matches(&node, b"%PDF-1.7"));
        assert!(!node_matches(&node, b" %PDF-1.7"));
        assert!(!node_matches(&node, b"%PDF"));
    }

    #[test]
    fn test_bytes_offset_range() {
        let node = leaf(Kind::Bytes, 0, 1024, b"%PDF-", None);
        assert!(node_matches(&node, b"\n\n  %PDF-1.4"));
        let mut far = vec![b' '; 1500];
        far.extend_from_slice(b"%PDF-1.4");
        assert!(!node_matches(&node, &far), "hit past offset_hi must not match");
        let mut edge = vec![b' '; 1024];
        edge.extend_from_slice(b"%PDF-1.4");
        assert!(node_matches(&node, &edge));
    }

    #[test]
    fn test_bytes_window_is_clamped_to_buffer() {
        let node = leaf(Kind::Bytes, 257, 257, b"ustar", None);
        assert!(!node_matches(&node, b"short"));
        let mut tar = vec![0u8; 257];
        tar.extend_from_slice(b"ustar\x0000");
        assert!(node_matches(&node, &tar));
    }

    #[test]
    fn test_bytes_masked() {
        // Match any of the first four bits' values but pin the rest.
        let node = leaf(Kind::Bytes, 0, 0, b"\xf0\x4b", Some(b"\xf0\xff"));
        assert!(node_matches(&node, &[0xf7, 0x4b]));
        assert!(!node_matches(&node, &[0xe7, 0x4b]));
        assert!(!node_matches(&node, &[0xf7, 0x4c]));
    }

    #[test]
    fn test_string_ci() {
        let node = leaf(Kind::StringCi, 0, 16, b"<!DOCTYPE HTML", None);
        assert!(node_matches(&node, b"<!doctype html>"));
        assert!(node_matches(&node, b"  <!DocType HTML PUBLIC"));
        assert!(!node_matches(&node, b"<!DOCTYPE TS>"));
        // Folding is ASCII-only: 0xC4 and 0xE4 differ.
        let umlaut = leaf(Kind::StringCi, 0, 0, b"\xc4", None);
        assert!(!node_matches(&umlaut, &[0xe4]));
    }

    #[test]
    fn test_big_endian_ints() {
        let node = leaf(Kind::Big32, 0, 0, &[0xca, 0xfe, 0xba, 0xbe], None);
        assert!(node_matches(&node, &[0xca, 0xfe, 0xba, 0xbe, 0x00]));
        assert!(!node_matches(&node, &[0xbe, 0xba, 0xfe, 0xca, 0x00]));
    }

    #[test]
    fn test_little_endian_ints() {
        // Pattern value 0x0001 stored big-endian; matches 01 00 on the wire.
        let node = leaf(Kind::Little16, 0, 0, &[0x00, 0x01], None);
        assert!(node_matches(&node, &[0x01, 0x00]));
        assert!(!node_matches(&node, &[0x00, 0x01]));
    }

    #[test]
    fn test_host_ints_follow_native_order() {
        let node = leaf(Kind::Host32, 0, 0, &[0xa1, 0xb2, 0xc3, 0xd4], None);
        let native = 0xa1b2c3d4u32.to_ne_bytes();
        assert!(node_matches(&node, &native));
        let swapped = 0xa1b2c3d4u32.swap_bytes().to_ne_bytes();
        assert!(!node_matches(&node, &swapped));
    }

    #[test]
    fn test_host16_follows_native_order() {
        let node = leaf(Kind::Host16, 0, 0, &[0x01, 0x4c], None);
        assert!(node_matches(&node, &0x014cu16.to_ne_bytes()));
        assert!(!node_matches(&node, &0x014cu16.swap_bytes().to_ne_bytes()));
    }

    #[test]
    fn test_little32() {
        // Zoo archive magic; the table stores the value big-endian.
        let node = leaf(Kind::Little32, 20, 20, &[0xfd, 0xc4, 0xa7, 0xdc], None);
        let mut buf = vec![0u8; 24];
        buf[20..24].copy_from_slice(&0xfdc4a7dc_u32.to_le_bytes());
        assert!(node_matches(&node, &buf));
        buf[20..24].copy_from_slice(&0xfdc4a7dc_u32.to_be_bytes());
        assert!(!node_matches(&node, &buf));
    }

    #[test]
    fn test_masked_int() {
        // MPEG audio sync: value 0xfffb, mask 0xfffe.
        let node = leaf(Kind::Big16, 0, 0, &[0xff, 0xfb], Some(&[0xff, 0xfe]));
        assert!(node_matches(&node, &[0xff, 0xfb, 0x90]));
        assert!(node_matches(&node, &[0xff, 0xfa, 0x90]));
        assert!(!node_matches(&node, &[0xff, 0xf9, 0x90]));
    }

    #[test]
    fn test_malformed_nodes_never_match() {
        let empty = leaf(Kind::Bytes, 0, 0, b"", None);
        assert!(!node_matches(&empty, b"anything"));
        let inverted = leaf(Kind::Bytes, 4, 1, b"ab", None);
        assert!(!node_matches(&inverted, b"zzabzz"));
        let bad_mask = leaf(Kind::Bytes, 0, 0, b"abc", Some(b"\xff"));
        assert!(!node_matches(&bad_mask, b"abc"));
        let bad_width = leaf(Kind::Big32, 0, 0, b"\x01\x02", None);
        assert!(!node_matches(&bad_width, b"\x01\x02\x03\x04"));
    }

    #[test]
    fn test_walk_requires_some_child() {
        // RIFF container: parent marker alone is not enough.
        let rule = RULES
            .iter()
            .find(|r| r.media_type == "image/webp")
            .expect("webp rule in table");
        let mut riff_only = b"RIFF\x10\x00\x00\x00WAVE".to_vec();
        assert_eq!(rule_matches(rule, &riff_only), None);
        riff_only[8..12].copy_from_slice(b"WEBP");
        assert_eq!(rule_matches(rule, &riff_only), Some(8));
    }

    #[test]
    fn test_specificity_sums_the_walk() {
        let deb = RULES
            .iter()
            .find(|r| r.media_type == "application/vnd.debian.binary-package")
            .expect("deb rule in table");
        let buf = b"!<arch>\ndebian-binary   ";
        assert_eq!(rule_matches(deb, buf), Some(7 + 13));
    }

    #[test]
    fn test_table_is_sorted_and_in_bounds() {
        for (rule, next) in RULES.iter().zip(RULES.iter().skip(1)) {
            assert!(
                rule.priority >= next.priority,
                "rules out of priority order: {} before {}",
                rule.media_type,
                next.media_type,
            );
            if rule.priority == next.priority {
                assert!(
                    rule.media_type <= next.media_type,
                    "rules out of name order: {} before {}",
                    rule.media_type,
                    next.media_type,
                );
            }
        }
        for rule in RULES {
            assert!(rule.priority <= 100, "{}", rule.media_type);
            let (start, end) = rule.roots;
            assert!(start < end, "{} has no roots", rule.media_type);
            assert!((end as usize) <= NODES.len(), "{}", rule.media_type);
        }
    }

    #[test]
    fn test_table_nodes_satisfy_invariants() {
        for (idx, node) in NODES.iter().enumerate() {
            assert!(!node.pattern.is_empty(), "node {idx} has an empty pattern");
            assert!(node.offset_lo <= node.offset_hi, "node {idx} range inverted");
            assert!(
                node.offset_hi as usize + node.pattern.len() <= MAGIC_MAX_LEN,
                "node {idx} reaches past the magic window",
            );
            if let Some(mask) = node.mask {
                assert_eq!(mask.len(), node.pattern.len(), "node {idx} mask length");
            }
            let expected_width = match node.kind {
                Kind::Host16 | Kind::Big16 | Kind::Little16 => Some(2),
                Kind::Host32 | Kind::Big32 | Kind::Little32 => Some(4),
                Kind::Bytes | Kind::StringCi => None,
            };
            if let Some(width) = expected_width {
                assert_eq!(node.pattern.len(), width, "node {idx} integer width");
            }
            let (start, end) = node.children;
            assert!(start <= end, "node {idx} child range inverted");
            assert!((end as usize) <= NODES.len(), "node {idx} children out of bounds");
        }
    }

    #[test]
    fn test_table_media_types_are_canonical() {
        for rule in RULES {
            assert!(
                MediaType::parse(rule.media_type).is_some(),
                "table media type does not parse: {:?}",
                rule.media_type,
            );
            rule.media_type
                .parse::<mime::Mime>()
                .unwrap_or_else(|e| panic!("{}: {e}", rule.media_type));
        }
    }
}
