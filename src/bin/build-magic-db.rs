//! Regenerates `src/magic/generated/data.rs` from the freedesktop.org
//! shared-mime-info database.
//!
//! Run with a release tag to fetch the XML from upstream, or with a path to
//! a local `freedesktop.org.xml`:
//!
//! ```text
//! cargo run --features db-gen --bin build-magic-db -- 2.4
//! cargo run --features db-gen --bin build-magic-db -- /usr/share/mime/packages/freedesktop.org.xml
//! ```

use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::{env, fs};

use xml::attribute::OwnedAttribute;
use xml::reader::XmlEvent;
use xml::EventReader;

const GENERATED_FILE: &str = "src/magic/generated/data.rs";

/// The prefix window the engine inspects. Match nodes reaching past it can
/// never fire and are dropped at generation time.
const MAGIC_MAX_LEN: usize = 4096;

#[derive(Debug, Clone)]
struct Match {
    kind: &'static str,
    offset_lo: u32,
    offset_hi: u32,
    pattern: Vec<u8>,
    mask: Option<Vec<u8>>,
    children: Vec<Match>,
}

#[derive(Debug)]
struct Rule {
    media_type: String,
    priority: u8,
    roots: Vec<Match>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);

    let Some(source) = args.next() else {
        println!(
            "usage: build-magic-db <release-tag | path-to-freedesktop.org.xml>\n\
             \n\
             where <release-tag> is a valid tag from\n\
             https://gitlab.freedesktop.org/xdg/shared-mime-info/-/tags"
        );
        return Ok(());
    };

    let xml = if fs::metadata(&source).is_ok() {
        fs::read_to_string(&source)?
    } else {
        let url = format!(
            "https://gitlab.freedesktop.org/xdg/shared-mime-info/-/raw/{source}/data/freedesktop.org.xml.in"
        );
        reqwest::blocking::get(&url)?.error_for_status()?.text()?
    };

    let mut rules = parse_mime_info(&xml)?;
    let dropped = prune_out_of_window(&mut rules);
    if dropped > 0 {
        eprintln!("dropped {dropped} match nodes outside the {MAGIC_MAX_LEN}-byte window");
    }
    rules.retain(|r| !r.roots.is_empty());
    rules.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.media_type.cmp(&b.media_type))
    });

    let mut out = BufWriter::new(File::create(GENERATED_FILE)?);
    write_table(&mut out, &rules)?;

    eprintln!("wrote {} rules to {GENERATED_FILE}", rules.len());
    Ok(())
}

/// Pull the `<mime-type>/<magic>/<match>` forest out of the database.
/// Multiple `<magic>` blocks for one media type merge into a single rule
/// carrying the highest block priority.
fn parse_mime_info(xml: &str) -> Result<Vec<Rule>, Box<dyn Error>> {
    let mut by_type: BTreeMap<String, (u8, Vec<Match>)> = BTreeMap::new();

    let mut media_type = String::new();
    let mut priority = 50u8;
    let mut in_magic = false;
    // Parents of the <match> currently open, innermost last.
    let mut stack: Vec<Match> = Vec::new();

    for event in EventReader::from_str(xml) {
        match event? {
            XmlEvent::StartElement { name, attributes, .. } => match name.local_name.as_str() {
                "mime-type" => {
                    media_type = attr(&attributes, "type").unwrap_or_default();
                }
                "magic" => {
                    in_magic = true;
                    priority = attr(&attributes, "priority")
                        .and_then(|p| p.parse().ok())
                        .unwrap_or(50);
                }
                "match" if in_magic => {
                    stack.push(parse_match(&attributes)?);
                }
                _ => {}
            },
            XmlEvent::EndElement { name } => match name.local_name.as_str() {
                "magic" => in_magic = false,
                "match" if in_magic => {
                    let node = stack.pop().expect("unbalanced match element");
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(node);
                    } else {
                        let entry = by_type
                            .entry(media_type.clone())
                            .or_insert_with(|| (priority, Vec::new()));
                        entry.0 = entry.0.max(priority);
                        entry.1.push(node);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(by_type
        .into_iter()
        .map(|(media_type, (priority, roots))| Rule {
            media_type,
            priority,
            roots,
        })
        .collect())
}

fn parse_match(attributes: &[OwnedAttribute]) -> Result<Match, Box<dyn Error>> {
    let ty = attr(attributes, "type").ok_or("match without type")?;
    let offset = attr(attributes, "offset").ok_or("match without offset")?;
    let value = attr(attributes, "value").ok_or("match without value")?;
    let mask = attr(attributes, "mask");

    let (offset_lo, offset_hi) = match offset.split_once(':') {
        Some((lo, hi)) => (lo.parse()?, hi.parse()?),
        None => {
            let off: u32 = offset.parse()?;
            (off, off)
        }
    };

    let (kind, pattern, mask) = match ty.as_str() {
        "string" => (
            "Bytes",
            unescape(&value)?,
            mask.map(|m| parse_hex_mask(&m)).transpose()?,
        ),
        "stringignorecase" => (
            "StringCi",
            unescape(&value)?,
            mask.map(|m| parse_hex_mask(&m)).transpose()?,
        ),
        "byte" => ("Bytes", vec![parse_num(&value)? as u8], mask_bytes(mask, 1)?),
        "host16" => ("Host16", num_bytes(&value, 2)?, mask_bytes(mask, 2)?),
        "host32" => ("Host32", num_bytes(&value, 4)?, mask_bytes(mask, 4)?),
        "big16" => ("Big16", num_bytes(&value, 2)?, mask_bytes(mask, 2)?),
        "big32" => ("Big32", num_bytes(&value, 4)?, mask_bytes(mask, 4)?),
        "little16" => ("Little16", num_bytes(&value, 2)?, mask_bytes(mask, 2)?),
        "little32" => ("Little32", num_bytes(&value, 4)?, mask_bytes(mask, 4)?),
        other => return Err(format!("unknown match type {other:?}").into()),
    };

    Ok(Match {
        kind,
        offset_lo,
        offset_hi,
        pattern,
        mask,
        children: Vec::new(),
    })
}

fn attr(attributes: &[OwnedAttribute], name: &str) -> Option<String> {
    attributes
        .iter()
        .find(|a| a.name.local_name == name)
        .map(|a| a.value.clone())
}

/// Decode the C-style escapes the database uses in string values.
fn unescape(value: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut out = Vec::with_capacity(value.len());
    let mut bytes = value.bytes().peekable();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        match bytes.next().ok_or("trailing backslash")? {
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'\\' => out.push(b'\\'),
            b'x' => {
                let mut v = 0u8;
                for _ in 0..2 {
                    let d = *bytes.peek().ok_or("bad hex escape")?;
                    let Some(d) = (d as char).to_digit(16) else { break };
                    v = v << 4 | d as u8;
                    bytes.next();
                }
                out.push(v);
            }
            d @ b'0'..=b'7' => {
                let mut v = (d - b'0') as u32;
                for _ in 0..2 {
                    match bytes.peek() {
                        Some(d @ b'0'..=b'7') => {
                            v = v << 3 | (d - b'0') as u32;
                            bytes.next();
                        }
                        _ => break,
                    }
                }
                out.push(v as u8);
            }
            other => return Err(format!("unknown escape \\{}", other as char).into()),
        }
    }
    Ok(out)
}

fn parse_num(value: &str) -> Result<u32, Box<dyn Error>> {
    let n = match value.strip_prefix("0x") {
        Some(hex) => u32::from_str_radix(hex, 16)?,
        None => value.parse()?,
    };
    Ok(n)
}

/// Numeric patterns are emitted big-endian regardless of the match kind;
/// the engine decodes the buffer side in the kind's own byte order.
fn num_bytes(value: &str, width: usize) -> Result<Vec<u8>, Box<dyn Error>> {
    Ok(parse_num(value)?.to_be_bytes()[4 - width..].to_vec())
}

fn mask_bytes(mask: Option<String>, width: usize) -> Result<Option<Vec<u8>>, Box<dyn Error>> {
    mask.map(|m| num_bytes(&m, width)).transpose()
}

/// String masks are long hex runs, `0xff00ff...`.
fn parse_hex_mask(mask: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    let hex = mask.strip_prefix("0x").ok_or("string mask without 0x")?;
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).map_err(Into::into))
        .collect()
}

fn prune_out_of_window(rules: &mut [Rule]) -> usize {
    fn prune(nodes: &mut Vec<Match>) -> usize {
        let before = nodes.len();
        nodes.retain(|n| n.offset_hi as usize + n.pattern.len() <= MAGIC_MAX_LEN);
        let mut dropped = before - nodes.len();
        for node in nodes {
            dropped += prune(&mut node.children);
        }
        dropped
    }
    rules.iter_mut().map(|r| prune(&mut r.roots)).sum()
}

/// Flatten the forest into the `RULES`/`NODES` arenas. Children of each
/// node occupy a contiguous index range, assigned breadth-first per rule.
fn write_table<W: Write>(out: &mut W, rules: &[Rule]) -> Result<(), Box<dyn Error>> {
    writeln!(
        out,
        "// Generated by build-magic-db from the shared-mime-info magic database.\n\
         // Do not edit by hand; rerun the tool to refresh.\n"
    )?;
    writeln!(out, "pub const MAGIC_MAX_LEN: usize = {MAGIC_MAX_LEN};\n")?;

    let mut nodes: Vec<(Match, (usize, usize))> = Vec::new();

    writeln!(out, "pub(crate) static RULES: &[MagicRule] = &[")?;
    for rule in rules {
        let start = nodes.len();
        let mut queue: Vec<(usize, Match)> = Vec::new();
        for (i, root) in rule.roots.iter().enumerate() {
            nodes.push((Match { children: Vec::new(), ..root.clone() }, (0, 0)));
            queue.push((start + i, root.clone()));
        }
        writeln!(
            out,
            "    MagicRule {{ media_type: {:?}, priority: {}, roots: ({}, {}) }},",
            rule.media_type,
            rule.priority,
            start,
            start + rule.roots.len(),
        )?;
        let mut cursor = 0;
        while cursor < queue.len() {
            let (idx, node) = queue[cursor].clone();
            cursor += 1;
            if !node.children.is_empty() {
                let kstart = nodes.len();
                for (j, child) in node.children.iter().enumerate() {
                    nodes.push((Match { children: Vec::new(), ..child.clone() }, (0, 0)));
                    queue.push((kstart + j, child.clone()));
                }
                nodes[idx].1 = (kstart, kstart + node.children.len());
            }
        }
    }
    writeln!(out, "];\n")?;

    writeln!(out, "pub(crate) static NODES: &[MagicNode] = &[")?;
    for (node, children) in &nodes {
        write!(
            out,
            "    MagicNode {{ kind: Kind::{}, offset_lo: {}, offset_hi: {}, pattern: ",
            node.kind, node.offset_lo, node.offset_hi,
        )?;
        write_bytes(out, &node.pattern)?;
        write!(out, ", mask: ")?;
        match &node.mask {
            Some(mask) => {
                write!(out, "Some(")?;
                write_bytes(out, mask)?;
                write!(out, ")")?;
            }
            None => write!(out, "None")?,
        }
        writeln!(out, ", children: ({}, {}) }},", children.0, children.1)?;
    }
    writeln!(out, "];")?;
    Ok(())
}

fn write_bytes<W: Write>(out: &mut W, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    write!(out, "b\"")?;
    for &b in bytes {
        match b {
            b'\\' => write!(out, "\\\\")?,
            b'"' => write!(out, "\\\"")?,
            b'\n' => write!(out, "\\n")?,
            b'\r' => write!(out, "\\r")?,
            b'\t' => write!(out, "\\t")?,
            0x20..=0x7e => write!(out, "{}", b as char)?,
            _ => write!(out, "\\x{b:02x}")?,
        }
    }
    write!(out, "\"")?;
    Ok(())
}
