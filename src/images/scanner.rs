//! Locates `![caption](path)` image references in Markdown text.
//!
//! The scanner is deliberately narrow: it is a single regular expression,
//! not a Markdown parser. A reference sits on one line, captions may not
//! contain `]` and paths may not contain `)`; anything that does not fit
//! the pattern is left alone.

use std::ops::Range;

use regex::{Captures, Regex};

use crate::error::Result;

/// Neither group crosses a line break, so a stray `![` never pairs with a
/// link further down the document.
const IMAGE_PATTERN: &str = r"!\[(?P<caption>[^\]\r\n]*)\]\((?P<path>[^)\r\n]+)\)";

/// Separator that marks a reference path as a URL rather than a file.
const SCHEME_SEPARATOR: &str = "://";

/// Whether a reference points at a local file or a remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Local,
    Remote,
}

/// A single image reference found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef<'t> {
    /// Caption text between the brackets, verbatim.
    pub caption: &'t str,
    /// Path text between the parentheses, verbatim.
    pub path: &'t str,
    /// The whole matched reference.
    pub text: &'t str,
    /// Byte range of `text` within the scanned input.
    pub span: Range<usize>,
    pub kind: RefKind,
}

impl<'t> ImageRef<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let whole = caps.get(0)?;
        let caption = caps.name("caption")?.as_str();
        let path = caps.name("path")?.as_str();
        let kind = if path.contains(SCHEME_SEPARATOR) {
            RefKind::Remote
        } else {
            RefKind::Local
        };
        Some(Self {
            caption,
            path,
            text: whole.as_str(),
            span: whole.range(),
            kind,
        })
    }

    pub fn is_local(&self) -> bool {
        self.kind == RefKind::Local
    }
}

/// Compiled image-reference matcher.
#[derive(Debug, Clone)]
pub struct Scanner {
    pattern: Regex,
}

impl Scanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(IMAGE_PATTERN)?,
        })
    }

    /// Lazily yields every image reference in `text`, in order of
    /// appearance.
    pub fn scan<'s, 't>(&'s self, text: &'t str) -> impl Iterator<Item = ImageRef<'t>> + 's
    where
        't: 's,
    {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| ImageRef::from_captures(&caps))
    }

    /// Rebuilds `text`, replacing each reference with whatever `replace`
    /// returns for it. Text between references is copied through
    /// untouched. The first error aborts the rebuild.
    pub fn replace_all<F>(&self, text: &str, mut replace: F) -> Result<String>
    where
        F: FnMut(&ImageRef<'_>) -> Result<String>,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for image in self.scan(text) {
            out.push_str(&text[last..image.span.start]);
            out.push_str(&replace(&image)?);
            last = image.span.end;
        }
        out.push_str(&text[last..]);
        Ok(out)
    }
}
