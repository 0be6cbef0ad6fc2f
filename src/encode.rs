//! Compact and pretty UTF-8 encoders with a size-probing contract.
//!
//! Both encoders run the same walk over an [`Emit`] sink; the sink
//! decides what happens to the bytes.  Three sinks cover the contract:
//! a `Vec<u8>` builds the owned encoding, a counting sink computes the
//! exact output length without writing anything (the size probe), and a
//! fill sink writes as much as fits into a caller buffer while still
//! counting the total, so a return value larger than the buffer signals
//! truncation.
//!
//! Output rules: no whitespace between tokens (compact); strings escape
//! `"` and `\`, the named controls `\b \f \n \r \t`, every other byte in
//! 0x00..0x1F plus 0x7F as `\u00XX`, and the C1 range U+0080..U+009F
//! (the two-byte sequences 0xC2 0x80..0x9F) as `\u00XX`; all other
//! valid UTF-8 passes through untouched.  Integers print as shortest
//! decimal; floats through ryu, whose shortest round-trip form is
//! locale-independent.  `Raw` fragments are emitted verbatim.
//!
//! Encoding never fails; the only variable is the returned length.

use crate::value::Value;

/// Pretty-printing parameters: `left_margin` spaces of initial indent,
/// `indentation` further spaces per nesting level.
#[derive(Debug, Clone, Copy)]
pub struct Pretty {
    pub left_margin: usize,
    pub indentation: usize,
}

impl Default for Pretty {
    fn default() -> Self {
        Pretty {
            left_margin: 0,
            indentation: 2,
        }
    }
}

// ── Sinks ────────────────────────────────────────────────────

trait Emit {
    fn put(&mut self, bytes: &[u8]);
}

impl Emit for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Size probe: counts without writing.
struct Count(usize);

impl Emit for Count {
    fn put(&mut self, bytes: &[u8]) {
        self.0 += bytes.len();
    }
}

/// Writes the prefix that fits, counts the whole encoding.
struct Fill<'a> {
    buf: &'a mut [u8],
    written: usize,
    total: usize,
}

impl Emit for Fill<'_> {
    fn put(&mut self, bytes: &[u8]) {
        let room = self.buf.len() - self.written;
        let n = room.min(bytes.len());
        self.buf[self.written..self.written + n].copy_from_slice(&bytes[..n]);
        self.written += n;
        self.total += bytes.len();
    }
}

// ── Public surface ───────────────────────────────────────────

impl Value {
    /// Compact encoding as an owned string.
    pub fn encode(&self) -> String {
        let mut out = Vec::new();
        write_value(&mut out, self, None, 0);
        String::from_utf8(out).expect("encoder emits UTF-8")
    }

    /// Exact byte length of the compact encoding.
    pub fn encoded_len(&self) -> usize {
        let mut count = Count(0);
        write_value(&mut count, self, None, 0);
        count.0
    }

    /// Write the compact encoding into `buf` and return the total
    /// encoded length.  A return value larger than `buf.len()` means
    /// the output was truncated; an empty buffer turns the call into a
    /// pure size probe.
    pub fn encode_into(&self, buf: &mut [u8]) -> usize {
        let mut fill = Fill {
            buf,
            written: 0,
            total: 0,
        };
        write_value(&mut fill, self, None, 0);
        fill.total
    }

    /// Pretty encoding as an owned string.  The first line carries no
    /// indent and the output has no trailing newline.
    pub fn encode_pretty(&self, style: &Pretty) -> String {
        let mut out = Vec::new();
        write_value(&mut out, self, Some(style), 0);
        String::from_utf8(out).expect("encoder emits UTF-8")
    }

    /// Exact byte length of the pretty encoding.
    pub fn pretty_len(&self, style: &Pretty) -> usize {
        let mut count = Count(0);
        write_value(&mut count, self, Some(style), 0);
        count.0
    }

    /// Pretty counterpart of [`Value::encode_into`].
    pub fn encode_pretty_into(&self, style: &Pretty, buf: &mut [u8]) -> usize {
        let mut fill = Fill {
            buf,
            written: 0,
            total: 0,
        };
        write_value(&mut fill, self, Some(style), 0);
        fill.total
    }
}

/// Compact encoding; also backs `Display` and trace previews.
pub(crate) fn encode(value: &Value) -> String {
    value.encode()
}

// ── Walk ─────────────────────────────────────────────────────

fn write_value<E: Emit>(out: &mut E, value: &Value, style: Option<&Pretty>, depth: usize) {
    match value {
        Value::Null => out.put(b"null"),
        Value::Boolean(true) => out.put(b"true"),
        Value::Boolean(false) => out.put(b"false"),
        Value::Integer(i) => out.put(i.to_string().as_bytes()),
        Value::Unsigned(u) => out.put(u.to_string().as_bytes()),
        Value::Float(f) => {
            let mut buffer = ryu::Buffer::new();
            out.put(buffer.format_finite(*f).as_bytes());
        }
        Value::String(s) => write_string(out, s),
        Value::Raw(fragment) => out.put(fragment.as_bytes()),
        Value::Array(array) => {
            if array.is_empty() {
                out.put(b"[]");
                return;
            }
            out.put(b"[");
            for (i, child) in array.iter().enumerate() {
                if i > 0 {
                    out.put(b",");
                }
                if let Some(p) = style {
                    indent(out, p, depth + 1);
                }
                write_value(out, child, style, depth + 1);
            }
            if let Some(p) = style {
                indent(out, p, depth);
            }
            out.put(b"]");
        }
        Value::Object(object) => {
            if object.is_empty() {
                out.put(b"{}");
                return;
            }
            out.put(b"{");
            for (i, (key, child)) in object.iter().enumerate() {
                if i > 0 {
                    out.put(b",");
                }
                if let Some(p) = style {
                    indent(out, p, depth + 1);
                }
                write_string(out, key);
                out.put(if style.is_some() { &b": "[..] } else { &b":"[..] });
                write_value(out, child, style, depth + 1);
            }
            if let Some(p) = style {
                indent(out, p, depth);
            }
            out.put(b"}");
        }
    }
}

/// Newline plus the indent for `level`: left margin + level steps.
fn indent<E: Emit>(out: &mut E, style: &Pretty, level: usize) {
    const PAD: [u8; 64] = [b' '; 64];
    out.put(b"\n");
    let mut remaining = style.left_margin + level * style.indentation;
    while remaining > 0 {
        let n = remaining.min(PAD.len());
        out.put(&PAD[..n]);
        remaining -= n;
    }
}

// ── Strings ──────────────────────────────────────────────────

const HEX: &[u8; 16] = b"0123456789abcdef";

fn write_string<E: Emit>(out: &mut E, s: &str) {
    let bytes = s.as_bytes();
    out.put(b"\"");
    let mut run = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        let named: Option<&[u8]> = match b {
            b'"' => Some(b"\\\""),
            b'\\' => Some(b"\\\\"),
            0x08 => Some(b"\\b"),
            0x0C => Some(b"\\f"),
            b'\n' => Some(b"\\n"),
            b'\r' => Some(b"\\r"),
            b'\t' => Some(b"\\t"),
            _ => None,
        };
        if let Some(esc) = named {
            out.put(&bytes[run..i]);
            out.put(esc);
            i += 1;
            run = i;
        } else if b < 0x20 || b == 0x7F {
            out.put(&bytes[run..i]);
            put_control(out, b);
            i += 1;
            run = i;
        } else if b == 0xC2 && matches!(bytes.get(i + 1), Some(&(0x80..=0x9F))) {
            // U+0080..U+009F: Unicode controls, escaped like their
            // ASCII counterparts.  The code point equals the second
            // byte's value.
            out.put(&bytes[run..i]);
            put_control(out, bytes[i + 1]);
            i += 2;
            run = i;
        } else {
            i += 1;
        }
    }
    out.put(&bytes[run..]);
    out.put(b"\"");
}

fn put_control<E: Emit>(out: &mut E, value: u8) {
    out.put(&[
        b'\\',
        b'u',
        b'0',
        b'0',
        HEX[(value >> 4) as usize],
        HEX[(value & 0x0F) as usize],
    ]);
}
