//! YAML text to document tree and back.

use log::debug;
use serde_yaml::Value;

use crate::errors::KubecleanError;

/// Parses a single YAML document. Empty input parses as null.
///
/// Streams with more than one document (`---` separated) are rejected.
pub fn parse_document(text: &str) -> Result<Value, KubecleanError> {
    let document: Value = serde_yaml::from_str(text)?;
    debug!("Parsed input document ({} bytes).", text.len());
    Ok(document)
}

/// Plain scalars that YAML 1.1 readers, `kubectl` among them, load as booleans.
const YAML11_BOOLEANS: &[&str] = &[
    "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "on", "On", "ON", "off", "Off",
    "OFF",
];

/// Serializes a document as block-style YAML.
///
/// Long scalars are not wrapped. The output ends with a newline. Strings such
/// as `yes` or `off` are single-quoted so they stay strings when read back by
/// a YAML 1.1 parser.
pub fn serialize_document(document: &Value) -> Result<String, KubecleanError> {
    let yaml = serde_yaml::to_string(document)
        .map_err(|e| KubecleanError::SerializationError(e.to_string()))?;
    Ok(quote_yaml11_booleans(&yaml))
}

fn is_yaml11_boolean(token: &str) -> bool {
    YAML11_BOOLEANS.contains(&token)
}

fn is_block_scalar_header(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(chars.next(), Some('|' | '>')) && chars.all(|c| c.is_ascii_digit() || c == '-' || c == '+')
}

/// Quotes bare YAML 1.1 booleans in emitter output.
///
/// `serde_yaml` follows YAML 1.2, where these are ordinary strings, so it
/// writes them bare. Only whole keys, whole values and whole sequence items
/// are touched; block scalar bodies are copied as is.
fn quote_yaml11_booleans(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    // Lines indented at least this far belong to the current block scalar.
    let mut block_body_indent: Option<usize> = None;

    for line in yaml.split_inclusive('\n') {
        let content = line.trim_end_matches('\n');
        let indent = content.len() - content.trim_start_matches(' ').len();
        if let Some(min_indent) = block_body_indent {
            if content.is_empty() || indent >= min_indent {
                out.push_str(line);
                continue;
            }
            block_body_indent = None;
        }
        block_body_indent = quote_line(content, indent, &mut out);
        out.push_str(&line[content.len()..]);
    }
    out
}

/// Writes `line` to `out` with boolean-like scalars quoted. Returns the body
/// indent if the line opens a block scalar.
fn quote_line(line: &str, indent: usize, out: &mut String) -> Option<usize> {
    let mut node_start = indent;
    let mut dashes = 0;
    while line[node_start..].starts_with("- ") {
        node_start += 2;
        dashes += 1;
    }
    let (prefix, node) = line.split_at(node_start);
    out.push_str(prefix);

    if is_yaml11_boolean(node) {
        push_quoted(node, out);
        return None;
    }
    if is_block_scalar_header(node) {
        out.push_str(node);
        // The scalar hangs off the innermost dash, or is the whole document.
        return Some(if dashes == 0 { 0 } else { node_start - 1 });
    }

    let mut rest = node;
    if let Some((key, tail)) = node.split_once(':') {
        if is_yaml11_boolean(key) && (tail.is_empty() || tail.starts_with(' ')) {
            push_quoted(key, out);
            rest = &node[key.len()..];
        }
    }

    if let Some((head, value)) = rest.rsplit_once(": ") {
        if is_yaml11_boolean(value) {
            out.push_str(head);
            out.push_str(": ");
            push_quoted(value, out);
            return None;
        }
        if is_block_scalar_header(value) {
            out.push_str(rest);
            return Some(node_start + 1);
        }
    }
    out.push_str(rest);
    None
}

fn push_quoted(token: &str, out: &mut String) {
    out.push('\'');
    out.push_str(token);
    out.push('\'');
}
