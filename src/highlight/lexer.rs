// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Lexical scanner for serialized JSON text
//!
//! This is a token scan, not a parser: it classifies literal spans in
//! document order and passes everything else through untouched. Input is
//! expected to be text a JSON serializer produced; nesting is never
//! validated here. Indentation does not matter - the scanner works equally
//! on compact and pretty-printed output.

/// Syntactic role of a classified span, for display purposes only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Object key (a quoted string immediately followed by `:`)
    Key,
    /// Any other quoted string
    Str,
    /// Numeric literal
    Number,
    /// `true` or `false`
    Boolean,
    /// `null`
    Null,
}

impl TokenClass {
    /// CSS class name used in the rendered markup
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenClass::Key => "key",
            TokenClass::Str => "string",
            TokenClass::Number => "number",
            TokenClass::Boolean => "boolean",
            TokenClass::Null => "null",
        }
    }
}

/// One classified span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub class: TokenClass,
}

/// A piece of the scanned input: classified token or passthrough text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Token(Token<'a>),
    Raw(&'a str),
}

/// Scan `text` into classified tokens and passthrough segments
///
/// Priority order per position: quoted string (key when a `:` follows
/// immediately), `true`/`false`, `null`, number. Structural characters and
/// whitespace land in `Raw` segments. Token boundaries always fall on ASCII
/// bytes, so slicing is safe on any UTF-8 input.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut raw_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let matched = match bytes[i] {
            b'"' => scan_string(bytes, i).map(|end| {
                let class = if bytes.get(end) == Some(&b':') {
                    TokenClass::Key
                } else {
                    TokenClass::Str
                };
                (end, class)
            }),
            b't' => scan_literal(bytes, i, "true").map(|end| (end, TokenClass::Boolean)),
            b'f' => scan_literal(bytes, i, "false").map(|end| (end, TokenClass::Boolean)),
            b'n' => scan_literal(bytes, i, "null").map(|end| (end, TokenClass::Null)),
            b'-' | b'0'..=b'9' => scan_number(bytes, i).map(|end| (end, TokenClass::Number)),
            _ => None,
        };

        match matched {
            Some((end, class)) => {
                if raw_start < i {
                    segments.push(Segment::Raw(&text[raw_start..i]));
                }
                segments.push(Segment::Token(Token {
                    text: &text[i..end],
                    class,
                }));
                i = end;
                raw_start = i;
            }
            None => {
                // advance one whole character; continuation bytes never
                // match any token start, so ASCII stepping would also work
                i += char_width(bytes[i]);
            }
        }
    }

    if raw_start < bytes.len() {
        segments.push(Segment::Raw(&text[raw_start..]));
    }

    segments
}

/// Scan a quoted string starting at `start`; returns the index one past the
/// closing quote
///
/// Backslash escapes (including `\uXXXX`) are honored: the escaped character
/// never terminates the string. Unterminated strings do not match.
fn scan_string(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Match a bare literal with a word boundary on both sides
fn scan_literal(bytes: &[u8], start: usize, literal: &str) -> Option<usize> {
    let end = start + literal.len();
    if bytes.len() < end || &bytes[start..end] != literal.as_bytes() {
        return None;
    }
    if start > 0 && is_word_byte(bytes[start - 1]) {
        return None;
    }
    if bytes.get(end).is_some_and(|&b| is_word_byte(b)) {
        return None;
    }
    Some(end)
}

/// Scan a numeric literal: optional `-`, integer part, optional fraction,
/// optional exponent
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if bytes[i] == b'-' {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return None;
    }

    if bytes.get(i) == Some(&b'.') && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit()) {
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(i)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn char_width(first_byte: u8) -> usize {
    match first_byte {
        0x00..=0x7f => 1,
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        _ => 4,
    }
}
