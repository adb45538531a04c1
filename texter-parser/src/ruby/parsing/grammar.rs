//! The grammar productions.
//!
//! Each rule is a function over the cursor that returns `Some` on a match.
//! Alternatives are tried in a fixed priority order and the first match
//! wins. The ordering is load-bearing: `comment` and the quote-like rules
//! run before anything could open a string at the same position, which is
//! how a `"` inside `# ...`, `/.../`, or `%Q{...}` never starts a string
//! literal.

use super::cursor::Cursor;
use super::matchers::{attempt, literal, not_ahead, one_if};
use crate::ruby::ast::{
    BracedCode, CodeSequence, Interpolation, Node, ParseError, SourceSpan, StringBodyPart,
    StringKind, StringLiteral,
};

/// Scan `source` from offset 0 into a single root sequence spanning the
/// whole input.
///
/// Fails when input remains that no rule can claim — an unterminated
/// string, brace, interpolation, or a stray `}` — reporting the furthest
/// offset the scan reached before giving up.
pub fn parse(source: &str) -> Result<CodeSequence, ParseError> {
    let mut cur = Cursor::new(source);
    let root = code(&mut cur);
    if cur.is_eof() {
        Ok(root)
    } else {
        Err(ParseError::at(source, cur.furthest()))
    }
}

/// code := (ignored / string / braced_code)*
fn code(cur: &mut Cursor<'_>) -> CodeSequence {
    let mut children = Vec::new();
    loop {
        if let Some(node) = ignored(cur) {
            children.push(node);
        } else if let Some(string) = attempt(cur, string) {
            children.push(Node::Str(string));
        } else if let Some(braced) = attempt(cur, braced_code) {
            children.push(Node::Braced(braced));
        } else {
            break;
        }
    }
    CodeSequence { children }
}

/// braced_code := '{' code '}'
///
/// The nested `code` call is what keeps braces balanced: any brace consumed
/// by a string, comment, or quote-like rule never reaches this one.
fn braced_code(cur: &mut Cursor<'_>) -> Option<BracedCode> {
    let open_cp = cur.checkpoint();
    literal(cur, "{")?;
    let open = cur.span_from(open_cp);
    let body = code(cur);
    let close_cp = cur.checkpoint();
    literal(cur, "}")?;
    Some(BracedCode {
        open,
        body,
        close: cur.span_from(close_cp),
    })
}

/// ignored := comment / string_like / plain run
fn ignored(cur: &mut Cursor<'_>) -> Option<Node> {
    if let Some(span) = attempt(cur, comment) {
        return Some(Node::Ignored(span));
    }
    if let Some(span) = attempt(cur, string_like) {
        return Some(Node::QuoteLike(span));
    }
    plain_run(cur).map(Node::Ignored)
}

/// One character that is neither a quote nor a brace, plus the
/// uninterrupted run of such characters after it.
///
/// Merging is indistinguishable from matching one character at a time: the
/// run stops at every character where another rule could begin, so those
/// positions get re-offered to the full ordered choice.
fn plain_run(cur: &mut Cursor<'_>) -> Option<SourceSpan> {
    if !not_ahead(cur, is_quote) || !not_ahead(cur, is_brace) {
        return None;
    }
    let cp = cur.checkpoint();
    cur.bump()?;
    while one_if(cur, is_plain).is_some() {}
    Some(cur.span_from(cp))
}

fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

fn is_brace(c: char) -> bool {
    c == '{' || c == '}'
}

/// Characters at which no production other than the plain run can start.
fn is_plain(c: char) -> bool {
    !matches!(c, '"' | '\'' | '{' | '}' | '#' | '/' | '%')
}

fn is_linebreak_char(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// comment := '#' (!linebreak .)* (linebreak / end-of-input)
///
/// The terminating linebreak belongs to the comment. Quote characters
/// inside never start a string.
fn comment(cur: &mut Cursor<'_>) -> Option<SourceSpan> {
    let cp = cur.checkpoint();
    literal(cur, "#")?;
    while one_if(cur, |c| !is_linebreak_char(c)).is_some() {}
    let _ = linebreak(cur);
    Some(cur.span_from(cp))
}

/// linebreak := CRLF / LF / CR
fn linebreak(cur: &mut Cursor<'_>) -> Option<()> {
    literal(cur, "\r\n")
        .or_else(|| literal(cur, "\n"))
        .or_else(|| literal(cur, "\r"))
}

/// string_like := slash-delimited literal / percent literal
///
/// Consumed wholesale so the quote characters inside are never re-entered
/// by the string rules. The interior structure is not modeled.
fn string_like(cur: &mut Cursor<'_>) -> Option<SourceSpan> {
    attempt(cur, slash_literal).or_else(|| attempt(cur, percent_literal))
}

/// `/ ... /` with backslash escapes. Must close before the end of the line;
/// an unclosed `/` falls through to ordinary one-character consumption.
fn slash_literal(cur: &mut Cursor<'_>) -> Option<SourceSpan> {
    let cp = cur.checkpoint();
    literal(cur, "/")?;
    loop {
        match cur.peek() {
            None => return None,
            Some('/') => {
                cur.bump();
                return Some(cur.span_from(cp));
            }
            Some('\\') => {
                cur.bump();
                cur.bump()?;
            }
            Some(c) if is_linebreak_char(c) => return None,
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// `%`, an optional q/Q/r/w flag, then a `[...]`, `(...)`, or `{...}` body.
/// Escapes protect the closing delimiter; delimiters are not nesting.
fn percent_literal(cur: &mut Cursor<'_>) -> Option<SourceSpan> {
    let cp = cur.checkpoint();
    literal(cur, "%")?;
    let _ = one_if(cur, |c| matches!(c, 'q' | 'Q' | 'r' | 'w'));
    let close = match cur.bump()? {
        '[' => ']',
        '(' => ')',
        '{' => '}',
        _ => return None,
    };
    loop {
        match cur.bump() {
            None => return None,
            Some('\\') => {
                cur.bump()?;
            }
            Some(c) if c == close => return Some(cur.span_from(cp)),
            Some(_) => {}
        }
    }
}

/// string := double_string / single_string
fn string(cur: &mut Cursor<'_>) -> Option<StringLiteral> {
    attempt(cur, double_string).or_else(|| attempt(cur, single_string))
}

/// double_string := '"' (interpolated_code / double_string_body)* '"'
///
/// Body characters are collected into merged literal parts. `\"` is a
/// two-character unit, so the backslash protects the quote from
/// terminating the string; a trailing lone backslash is just a character.
fn double_string(cur: &mut Cursor<'_>) -> Option<StringLiteral> {
    let open_cp = cur.checkpoint();
    literal(cur, "\"")?;
    let open_quote = cur.span_from(open_cp);

    let mut body = Vec::new();
    let mut literal_start = cur.pos();
    loop {
        match cur.peek() {
            // unterminated: the whole rule fails
            None => return None,
            Some('"') => {
                push_literal(&mut body, literal_start, cur.pos());
                let close_cp = cur.checkpoint();
                cur.bump();
                return Some(StringLiteral {
                    kind: StringKind::Double,
                    open_quote,
                    body,
                    close_quote: cur.span_from(close_cp),
                });
            }
            Some('#') => {
                let before = cur.pos();
                if let Some(part) = attempt(cur, interpolated_code) {
                    push_literal(&mut body, literal_start, before);
                    body.push(part);
                    literal_start = cur.pos();
                } else {
                    // '#' with nothing interpolatable after it is body text
                    cur.bump();
                }
            }
            Some('\\') => {
                cur.bump();
                if cur.peek() == Some('"') {
                    cur.bump();
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

fn push_literal(body: &mut Vec<StringBodyPart>, start: usize, end: usize) {
    if end > start {
        body.push(StringBodyPart::Literal(SourceSpan::new(start, end)));
    }
}

/// single_string := `'` (escaped quote / any other char)* `'`
///
/// No interpolation; the body is kept as one merged literal part.
fn single_string(cur: &mut Cursor<'_>) -> Option<StringLiteral> {
    let open_cp = cur.checkpoint();
    literal(cur, "'")?;
    let open_quote = cur.span_from(open_cp);

    let body_start = cur.pos();
    loop {
        match cur.peek() {
            None => return None,
            Some('\'') => {
                let mut body = Vec::new();
                push_literal(&mut body, body_start, cur.pos());
                let close_cp = cur.checkpoint();
                cur.bump();
                return Some(StringLiteral {
                    kind: StringKind::Single,
                    open_quote,
                    body,
                    close_quote: cur.span_from(close_cp),
                });
            }
            Some('\\') => {
                cur.bump();
                if cur.peek() == Some('\'') {
                    cur.bump();
                }
            }
            Some(_) => {
                cur.bump();
            }
        }
    }
}

/// interpolated_code := '#{' code '}' / '#' [$@] identifier
fn interpolated_code(cur: &mut Cursor<'_>) -> Option<StringBodyPart> {
    attempt(cur, braced_interpolation).or_else(|| attempt(cur, shorthand_var))
}

/// `#{` with a full recursive code scan between the braces: arbitrary code,
/// further nested strings and braces included, may appear here.
fn braced_interpolation(cur: &mut Cursor<'_>) -> Option<StringBodyPart> {
    let open_cp = cur.checkpoint();
    literal(cur, "#{")?;
    let open = cur.span_from(open_cp);
    let body = code(cur);
    let close_cp = cur.checkpoint();
    literal(cur, "}")?;
    Some(StringBodyPart::Interpolated(Interpolation {
        open,
        body,
        close: cur.span_from(close_cp),
    }))
}

/// `#$global` / `#@ivar` interpolation shorthand. No body recursion.
fn shorthand_var(cur: &mut Cursor<'_>) -> Option<StringBodyPart> {
    let cp = cur.checkpoint();
    literal(cur, "#")?;
    one_if(cur, |c| c == '$' || c == '@')?;
    one_if(cur, is_ident_char)?;
    while one_if(cur, is_ident_char).is_some() {}
    Some(StringBodyPart::ShorthandVar(cur.span_from(cp)))
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
