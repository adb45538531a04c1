//! # texter-parser
//!
//! A structural scanner for Ruby source text.
//!
//! The scanner partitions a source file into plain code, comments, string
//! literals (with embedded interpolation), brace-delimited blocks, and
//! quote-like literals (regexes and percent literals) that must not be
//! mistaken for strings. The result is a span-carrying node tree that a
//! reconstruction walker turns back into text, delegating every string
//! literal to a pluggable handler. With the pass-through handler the output
//! is byte-identical to the input; the `texter` binary plugs in an
//! interactive handler that rewrites selected literals into `_("...")`
//! translation calls.
//!
//! The grammar is deliberately not a Ruby parser: it models only the lexical
//! skeleton needed to decide, character by character, whether a quote opens
//! a string, sits inside a comment or regex, or is escaped inside a string
//! body — and to keep `{`/`}` balanced so interpolation-closing braces are
//! never confused with braces in ordinary code.

pub mod ruby;
