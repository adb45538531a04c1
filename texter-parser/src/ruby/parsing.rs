//! The scan pass: backtracking cursor, matching primitives, and the grammar
//! rules.
//!
//! The grammar is ordered-choice with backtracking: each rule tries its
//! alternatives left to right, the first success wins, and a failed
//! alternative rewinds the cursor before the next one runs. No failure
//! propagates past its own alternative; the scan as a whole fails only when
//! input remains that no rule can claim.

pub(crate) mod cursor;
pub(crate) mod matchers;
mod grammar;

pub use grammar::parse;
