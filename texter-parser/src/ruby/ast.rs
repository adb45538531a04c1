//! Node tree definitions and source-location utilities.
//!
//! Every node carries byte spans into the original input instead of text
//! copies; slicing is deferred until a consumer asks. The tree is built once
//! per scan, is immutable afterwards, and owns its children exclusively —
//! `BracedCode` and `Interpolation` nest a full `CodeSequence`, so the depth
//! of the tree is bounded only by the brace/interpolation nesting of the
//! input.

pub mod error;
pub mod node;
pub mod range;

pub use error::ParseError;
pub use node::{
    BracedCode, CodeSequence, Interpolation, Node, StringBodyPart, StringKind, StringLiteral,
};
pub use range::{Position, SourceLocation, SourceSpan};
