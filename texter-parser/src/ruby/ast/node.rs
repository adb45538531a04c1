//! The structural node tree produced by a successful scan.
//!
//! One variant per grammar production. A `CodeSequence` owns an ordered run
//! of sibling regions; `BracedCode` and `Interpolation` nest a full
//! `CodeSequence`, which is what guarantees that braces stay balanced — a
//! `{` consumed inside a string, comment, or quote-like literal never
//! reaches the brace rule at all.

use serde::Serialize;

use super::range::SourceSpan;

/// An ordered run of sibling regions: the whole input, the interior of a
/// `{ ... }` block, or the interior of `#{ ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSequence {
    pub children: Vec<Node>,
}

/// One region of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    /// Characters with no structural meaning: a run of plain code, or a
    /// whole comment.
    Ignored(SourceSpan),
    /// A regex or percent literal, kept opaque so the quote characters
    /// inside it are never seen by the string rules.
    QuoteLike(SourceSpan),
    /// A `{ ... }` region whose interior is itself a full code scan.
    Braced(BracedCode),
    /// A single- or double-quoted string literal.
    Str(StringLiteral),
}

/// A brace-delimited block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracedCode {
    pub open: SourceSpan,
    pub body: CodeSequence,
    pub close: SourceSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StringKind {
    Single,
    Double,
}

/// A string literal, split into its quotes and an ordered body.
///
/// Only double-quoted strings can contain `Interpolated` or `ShorthandVar`
/// parts; a single-quoted body is at most one `Literal` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub kind: StringKind,
    pub open_quote: SourceSpan,
    pub body: Vec<StringBodyPart>,
    pub close_quote: SourceSpan,
}

impl StringLiteral {
    /// The span of the whole literal, quotes included.
    pub fn span(&self) -> SourceSpan {
        SourceSpan::new(self.open_quote.start, self.close_quote.end)
    }

    /// The raw text of the whole literal, quotes and escapes included.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span().text(source)
    }

    pub fn single_quoted(&self) -> bool {
        self.kind == StringKind::Single
    }

    pub fn double_quoted(&self) -> bool {
        self.kind == StringKind::Double
    }
}

/// One segment of a string body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StringBodyPart {
    /// Raw characters; escaped-quote sequences are kept verbatim.
    Literal(SourceSpan),
    /// `#{ ... }` with a full nested code scan between the braces.
    Interpolated(Interpolation),
    /// `#$var` / `#@var` shorthand. The span covers the leading `#`.
    ShorthandVar(SourceSpan),
}

impl StringBodyPart {
    /// Whether this part embeds code rather than literal text.
    pub fn is_code(&self) -> bool {
        !matches!(self, StringBodyPart::Literal(_))
    }

    /// Source text of the embedded code: the interior of `#{...}`, or the
    /// `$var`/`@var` of the shorthand form. `None` for literal parts.
    pub fn code_text<'a>(&self, source: &'a str) -> Option<&'a str> {
        match self {
            StringBodyPart::Literal(_) => None,
            StringBodyPart::Interpolated(interp) => Some(interp.inner_span().text(source)),
            StringBodyPart::ShorthandVar(span) => {
                Some(SourceSpan::new(span.start + 1, span.end).text(source))
            }
        }
    }
}

/// An embedded-code region inside a double-quoted string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpolation {
    /// The `#{` marker.
    pub open: SourceSpan,
    pub body: CodeSequence,
    /// The closing `}`.
    pub close: SourceSpan,
}

impl Interpolation {
    /// The span between the `#{` and the `}`.
    pub fn inner_span(&self) -> SourceSpan {
        SourceSpan::new(self.open.end, self.close.start)
    }
}
