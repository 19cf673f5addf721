// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-pass syntax highlighting for generated artifacts.
//!
//! Source text is split into typed [`Span`]s by one left-to-right scan, and
//! each span is escaped and wrapped exactly once. Annotation markup is never
//! produced before escaping, so it can never be mangled by it.

/// Keywords coloured in component-logic sources.
const KEYWORDS: &[&str] = &[
    "import", "export", "class", "const", "let", "var", "return", "if", "else", "for", "while",
    "function", "async", "await", "new", "this", "true", "false", "null", "undefined", "from",
    "default", "interface", "type", "extends", "implements", "public", "private", "protected",
    "readonly", "static",
];

/// Token class of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Plain,
    Comment,
    Keyword,
    Decorator,
    String,
    Tag,
    Attribute,
    Directive,
}

impl Category {
    /// Annotation colour; `None` for unannotated text.
    pub fn color(self) -> Option<&'static str> {
        match self {
            Category::Plain => None,
            Category::Comment => Some("#6a9955"),
            Category::Keyword => Some("#569cd6"),
            Category::Decorator | Category::Tag => Some("#4ec9b0"),
            Category::String => Some("#ce9178"),
            Category::Attribute => Some("#9cdcfe"),
            Category::Directive => Some("#c586c0"),
        }
    }
}

/// The two grammars the highlighter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// TypeScript component class.
    ComponentLogic,
    /// Angular HTML template.
    Markup,
}

impl Language {
    /// `ts`, `typescript` and `component` select component logic; every other tag is markup.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ts" | "typescript" | "component" => Language::ComponentLogic,
            _ => Language::Markup,
        }
    }
}

/// A slice of the source with its token class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub category: Category,
}

/// Split `source` into spans covering every byte exactly once, in order.
pub fn tokenize(source: &str, language: Language) -> Vec<Span<'_>> {
    let mut scanner = Scanner::new(source);
    match language {
        Language::ComponentLogic => scanner.scan_component(),
        Language::Markup => scanner.scan_markup(),
    }
    scanner.finish()
}

/// Render `source` as escaped text with colour annotations.
///
/// `&`, `<` and `>` are escaped once per span; the `<span>` wrappers are the
/// only unescaped markup in the output.
pub fn highlight(source: &str, language_tag: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let spans = tokenize(source, Language::from_tag(language_tag));
    let mut out = String::with_capacity(source.len() * 2);
    for span in spans {
        match span.category.color() {
            None => escape_into(&mut out, span.text),
            Some(color) => {
                out.push_str("<span style=\"color:");
                out.push_str(color);
                out.push_str("\">");
                escape_into(&mut out, span.text);
                out.push_str("</span>");
            }
        }
    }
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Byte scanner. Every delimiter is ASCII, so every cut lands on a char boundary.
struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    plain_start: usize,
    spans: Vec<Span<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            plain_start: 0,
            spans: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.bytes[self.pos..].starts_with(pat.as_bytes())
    }

    fn flush_plain(&mut self) {
        if self.plain_start < self.pos {
            self.spans.push(Span {
                text: &self.src[self.plain_start..self.pos],
                category: Category::Plain,
            });
        }
    }

    /// Emit `[pos, end)` as one span and continue after it.
    fn emit(&mut self, end: usize, category: Category) {
        self.flush_plain();
        self.spans.push(Span {
            text: &self.src[self.pos..end],
            category,
        });
        self.pos = end;
        self.plain_start = end;
    }

    fn finish(mut self) -> Vec<Span<'a>> {
        self.pos = self.bytes.len();
        self.flush_plain();
        self.spans
    }

    fn word_end(&self, from: usize, extra: &[u8]) -> usize {
        let mut end = from;
        while end < self.bytes.len() && is_word_byte(self.bytes[end], extra) {
            end += 1;
        }
        end
    }

    /// End of a quoted literal opened at `pos`; unterminated literals run to
    /// end of line (or end of input when `multiline`).
    fn quoted_end(&self, quote: u8, multiline: bool) -> usize {
        let mut i = self.pos + 1;
        while i < self.bytes.len() {
            match self.bytes[i] {
                b'\\' => i += 2,
                b'\n' if !multiline => return i,
                b if b == quote => return i + 1,
                _ => i += 1,
            }
        }
        self.bytes.len()
    }

    fn find_from(&self, from: usize, pat: &str) -> Option<usize> {
        self.src[from..].find(pat).map(|i| from + i)
    }

    fn scan_component(&mut self) {
        while let Some(b) = self.peek(0) {
            if self.starts_with("//") {
                let end = self.find_from(self.pos, "\n").unwrap_or(self.bytes.len());
                self.emit(end, Category::Comment);
            } else if self.starts_with("/*") {
                let end = self
                    .find_from(self.pos + 2, "*/")
                    .map_or(self.bytes.len(), |i| i + 2);
                self.emit(end, Category::Comment);
            } else if matches!(b, b'"' | b'\'' | b'`') {
                let end = self.quoted_end(b, b == b'`');
                self.emit(end, Category::String);
            } else if b == b'@' && self.peek(1).is_some_and(|n| is_word_byte(n, b"$")) {
                let end = self.word_end(self.pos + 1, b"$");
                self.emit(end, Category::Decorator);
            } else if is_word_byte(b, b"$") {
                let end = self.word_end(self.pos, b"$");
                let word = &self.src[self.pos..end];
                if KEYWORDS.iter().any(|k| *k == word) {
                    self.emit(end, Category::Keyword);
                } else {
                    self.pos = end;
                }
            } else {
                self.pos += 1;
            }
        }
    }

    fn scan_markup(&mut self) {
        let mut in_tag = false;
        while let Some(b) = self.peek(0) {
            if self.starts_with("<!--") {
                let end = self
                    .find_from(self.pos + 4, "-->")
                    .map_or(self.bytes.len(), |i| i + 3);
                self.emit(end, Category::Comment);
            } else if b == b'<' {
                let name_start = if self.peek(1) == Some(b'/') {
                    self.pos + 2
                } else {
                    self.pos + 1
                };
                let end = self.word_end(name_start, b"-");
                if end > name_start {
                    self.emit(end, Category::Tag);
                    in_tag = true;
                } else {
                    self.pos += 1;
                }
            } else if !in_tag {
                self.pos += 1;
            } else if b == b'>' {
                in_tag = false;
                self.pos += 1;
            } else if matches!(b, b'"' | b'\'') {
                let end = self.quoted_end(b, true);
                self.emit(end, Category::String);
            } else if b == b'*' && self.peek(1).is_some_and(|n| n.is_ascii_alphabetic()) {
                let end = self.word_end(self.pos + 1, b"");
                self.emit(end, Category::Directive);
            } else if self.starts_with("[(") {
                let inner_end = self.word_end(self.pos + 2, b".-");
                if inner_end > self.pos + 2
                    && self.bytes.get(inner_end..inner_end + 2) == Some(b")]".as_slice())
                {
                    self.emit(inner_end + 2, Category::Directive);
                } else {
                    self.pos += 1;
                }
            } else if let Some(close) = match b {
                b'[' => Some(b']'),
                b'(' => Some(b')'),
                _ => None,
            } {
                let inner_end = self.word_end(self.pos + 1, b".-");
                if inner_end > self.pos + 1 && self.bytes.get(inner_end) == Some(&close) {
                    self.emit(inner_end + 1, Category::Directive);
                } else {
                    self.pos += 1;
                }
            } else if is_word_byte(b, b"-") {
                let end = self.word_end(self.pos, b"-");
                if self.bytes.get(end) == Some(&b'=') {
                    self.emit(end + 1, Category::Attribute);
                } else {
                    self.pos = end;
                }
            } else {
                self.pos += 1;
            }
        }
    }
}

fn is_word_byte(b: u8, extra: &[u8]) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || extra.contains(&b)
}
