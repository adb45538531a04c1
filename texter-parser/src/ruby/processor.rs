//! Tree traversal and output reconstruction.
//!
//! A pre-order walk over the node tree that asks a [`Handler`] what text
//! each region contributes and concatenates the answers. The walker is pure
//! with respect to the tree: it reads spans, never mutates, and carries no
//! state between runs — traversing the same tree twice gives the same
//! output. With [`PassThrough`] the result is byte-identical to the scanned
//! input.

use super::ast::{CodeSequence, Node, SourceSpan, StringBodyPart, StringKind, StringLiteral};

/// What the walker calls for each region it visits.
///
/// `ignored` covers plain code, comments, and quote-like literals; the
/// default passes the region through verbatim. `string` is called once per
/// string literal with a view over the literal and its source.
pub trait Handler {
    fn ignored(&mut self, text: &str) -> String {
        text.to_string()
    }

    fn string(&mut self, string: &StringView<'_>) -> String;
}

/// A string literal together with the source it was scanned from.
///
/// This is what a handler gets to look at: the raw text, the quote kind,
/// and the ordered body parts with literal text separated from embedded
/// code. Interpolation bodies are exposed as raw source text only — they
/// are never rewritten recursively.
pub struct StringView<'a> {
    source: &'a str,
    node: &'a StringLiteral,
}

/// One segment of a string body as the handler sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart<'a> {
    /// Literal characters, escape sequences included verbatim.
    Text(&'a str),
    /// Embedded code: the interior of `#{...}`, or the `$var`/`@var` of the
    /// shorthand form.
    Code(&'a str),
}

impl<'a> StringView<'a> {
    pub fn node(&self) -> &'a StringLiteral {
        self.node
    }

    pub fn span(&self) -> SourceSpan {
        self.node.span()
    }

    /// The whole literal verbatim, quotes included.
    pub fn raw(&self) -> &'a str {
        self.node.text(self.source)
    }

    pub fn kind(&self) -> StringKind {
        self.node.kind
    }

    pub fn single_quoted(&self) -> bool {
        self.node.single_quoted()
    }

    pub fn double_quoted(&self) -> bool {
        self.node.double_quoted()
    }

    pub fn open_quote(&self) -> &'a str {
        self.node.open_quote.text(self.source)
    }

    pub fn close_quote(&self) -> &'a str {
        self.node.close_quote.text(self.source)
    }

    /// Body parts in order.
    pub fn parts(&self) -> Vec<BodyPart<'a>> {
        self.node
            .body
            .iter()
            .map(|part| match part {
                StringBodyPart::Literal(span) => BodyPart::Text(span.text(self.source)),
                part => BodyPart::Code(
                    part.code_text(self.source)
                        .expect("non-literal parts expose code text"),
                ),
            })
            .collect()
    }
}

/// Walk `root` and rebuild the output text through `handler`.
pub fn reconstruct(source: &str, root: &CodeSequence, handler: &mut dyn Handler) -> String {
    let mut out = String::with_capacity(source.len());
    walk_sequence(source, root, handler, &mut out);
    out
}

fn walk_sequence(source: &str, seq: &CodeSequence, handler: &mut dyn Handler, out: &mut String) {
    for child in &seq.children {
        match child {
            Node::Ignored(span) | Node::QuoteLike(span) => {
                out.push_str(&handler.ignored(span.text(source)));
            }
            Node::Braced(braced) => {
                out.push('{');
                walk_sequence(source, &braced.body, handler, out);
                out.push('}');
            }
            Node::Str(node) => {
                out.push_str(&handler.string(&StringView { source, node }));
            }
        }
    }
}

/// Emits every region verbatim. Reconstruction with this handler reproduces
/// the scanned input byte for byte.
pub struct PassThrough;

impl Handler for PassThrough {
    fn string(&mut self, string: &StringView<'_>) -> String {
        string.raw().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruby::parsing::parse;

    #[test]
    fn pass_through_reproduces_input() {
        let source = "a = 'x' # note\nb { \"y#{z}\" }\n";
        let root = parse(source).unwrap();
        assert_eq!(reconstruct(source, &root, &mut PassThrough), source);
    }

    #[test]
    fn traversal_is_repeatable() {
        let source = "f(\"a#{b}c\") { 'd' }";
        let root = parse(source).unwrap();
        let first = reconstruct(source, &root, &mut PassThrough);
        let second = reconstruct(source, &root, &mut PassThrough);
        assert_eq!(first, second);
    }

    #[test]
    fn handler_output_is_interleaved_in_order() {
        struct Upcase;
        impl Handler for Upcase {
            fn string(&mut self, string: &StringView<'_>) -> String {
                string.raw().to_uppercase()
            }
        }

        let source = "x 'ab' y \"cd\" z";
        let root = parse(source).unwrap();
        assert_eq!(
            reconstruct(source, &root, &mut Upcase),
            "x 'AB' y \"CD\" z"
        );
    }

    #[test]
    fn braces_are_emitted_around_rewritten_bodies() {
        struct Drop;
        impl Handler for Drop {
            fn string(&mut self, _string: &StringView<'_>) -> String {
                String::new()
            }
        }

        let source = "a { 'b' }";
        let root = parse(source).unwrap();
        assert_eq!(reconstruct(source, &root, &mut Drop), "a {  }");
    }

    #[test]
    fn view_exposes_parts_and_quotes() {
        let source = r#"greet("hi #{name}!")"#;
        let root = parse(source).unwrap();

        struct Inspect {
            seen: Vec<String>,
        }
        impl Handler for Inspect {
            fn string(&mut self, string: &StringView<'_>) -> String {
                assert_eq!(string.open_quote(), "\"");
                assert_eq!(string.close_quote(), "\"");
                for part in string.parts() {
                    match part {
                        BodyPart::Text(t) => self.seen.push(format!("text:{t}")),
                        BodyPart::Code(c) => self.seen.push(format!("code:{c}")),
                    }
                }
                string.raw().to_string()
            }
        }

        let mut handler = Inspect { seen: Vec::new() };
        reconstruct(source, &root, &mut handler);
        assert_eq!(handler.seen, vec!["text:hi ", "code:name", "text:!"]);
    }
}
