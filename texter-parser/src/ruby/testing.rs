//! Test support: scripted handlers and tree rendering.
//!
//! Shared by the crate's own tests and by downstream test suites; not
//! compiled out because scripted handlers are also the natural way to drive
//! the walker non-interactively from tools.

use super::ast::{CodeSequence, Node, ParseError, StringBodyPart};
use super::parsing::parse;
use super::processor::{reconstruct, Handler, StringView};

/// Records the raw text of every string literal the walker reports, passing
/// all regions through unchanged.
#[derive(Default)]
pub struct CollectingHandler {
    pub strings: Vec<String>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for CollectingHandler {
    fn string(&mut self, string: &StringView<'_>) -> String {
        self.strings.push(string.raw().to_string());
        string.raw().to_string()
    }
}

/// Replaces each string literal with the next scripted answer, passing
/// everything else through. Panics when the script runs dry.
pub struct ScriptedHandler {
    answers: Vec<String>,
    next: usize,
}

impl ScriptedHandler {
    pub fn new(answers: Vec<String>) -> Self {
        Self { answers, next: 0 }
    }
}

impl Handler for ScriptedHandler {
    fn string(&mut self, _string: &StringView<'_>) -> String {
        let answer = self.answers[self.next].clone();
        self.next += 1;
        answer
    }
}

/// Scan `source` and collect the raw text of every string literal, in
/// walk order.
pub fn ruby_strings(source: &str) -> Result<Vec<String>, ParseError> {
    let root = parse(source)?;
    let mut handler = CollectingHandler::new();
    let _ = reconstruct(source, &root, &mut handler);
    Ok(handler.strings)
}

/// Render a scanned tree one node per line, for snapshot assertions.
pub fn render_tree(source: &str, root: &CodeSequence) -> String {
    let mut out = String::new();
    render_sequence(source, root, 0, &mut out);
    out
}

/// Serialize a scanned tree as pretty JSON, for snapshot assertions and
/// external tooling.
pub fn tree_json(root: &CodeSequence) -> String {
    serde_json::to_string_pretty(root).expect("node trees serialize")
}

fn render_sequence(source: &str, seq: &CodeSequence, depth: usize, out: &mut String) {
    for child in &seq.children {
        let indent = "  ".repeat(depth);
        match child {
            Node::Ignored(span) => {
                out.push_str(&format!("{indent}ignored {:?}\n", span.text(source)));
            }
            Node::QuoteLike(span) => {
                out.push_str(&format!("{indent}quote_like {:?}\n", span.text(source)));
            }
            Node::Braced(braced) => {
                out.push_str(&format!("{indent}braced\n"));
                render_sequence(source, &braced.body, depth + 1, out);
            }
            Node::Str(string) => {
                let kind = if string.single_quoted() {
                    "single"
                } else {
                    "double"
                };
                out.push_str(&format!("{indent}string {kind} {:?}\n", string.text(source)));
                for part in &string.body {
                    match part {
                        StringBodyPart::Literal(span) => {
                            out.push_str(&format!("{indent}  text {:?}\n", span.text(source)));
                        }
                        StringBodyPart::Interpolated(interp) => {
                            out.push_str(&format!(
                                "{indent}  interp {:?}\n",
                                interp.inner_span().text(source)
                            ));
                            render_sequence(source, &interp.body, depth + 2, out);
                        }
                        StringBodyPart::ShorthandVar(span) => {
                            out.push_str(&format!("{indent}  var {:?}\n", span.text(source)));
                        }
                    }
                }
            }
        }
    }
}
