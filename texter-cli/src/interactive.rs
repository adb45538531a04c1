//! Interactive marking of string literals.
//!
//! For every string the walker reports, the handler shows the literal in
//! its surrounding lines, asks whether to mark it translatable, and — for
//! double-quoted strings — collects a label per embedded-code segment
//! before assembling the `_("...")` rewrite. Answers are read from any
//! `BufRead` and prompts written to any `Write`, so tests drive the whole
//! flow with in-memory buffers.

use std::io::{BufRead, Write};

use crossterm::style::Stylize;
use once_cell::sync::Lazy;
use regex::Regex;
use texter_parser::ruby::processor::{BodyPart, Handler, StringView};

/// Valid labels, and the part of an embedded-code snippet a default label
/// is derived from.
static LABEL_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z_]+$").expect("static regex"));
static LABEL_SEED: Lazy<Regex> = Lazy::new(|| Regex::new("[A-Za-z_]+").expect("static regex"));
static LINE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new("\r\n|\n|\r").expect("static regex"));

pub struct InteractiveHandler<'a, R, W> {
    source: &'a str,
    answers: R,
    term: W,
}

impl<'a, R: BufRead, W: Write> InteractiveHandler<'a, R, W> {
    pub fn new(source: &'a str, answers: R, term: W) -> Self {
        Self {
            source,
            answers,
            term,
        }
    }

    /// Read one trimmed answer line. `None` on a closed stream, which every
    /// question treats as "take the default".
    fn read_answer(&mut self) -> Option<String> {
        let _ = self.term.flush();
        let mut line = String::new();
        match self.answers.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn say(&mut self, text: &str) {
        let _ = writeln!(self.term, "{text}");
    }

    /// Yes/no question; empty input takes the default, anything else than
    /// yes/no re-prompts.
    fn agree(&mut self, question: &str, default: bool) -> bool {
        loop {
            let _ = write!(
                self.term,
                "{question} |{}| ",
                if default { "y" } else { "n" }
            );
            let answer = match self.read_answer() {
                None => return default,
                Some(answer) => answer,
            };
            if answer.is_empty() {
                return default;
            }
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => self.say("Please answer y or n."),
            }
        }
    }

    /// Ask a label for one embedded-code segment. Rejects answers that are
    /// not `[A-Za-z_]+` or that are already used within this string, and
    /// re-prompts.
    fn ask_label(&mut self, code: &str, used: &[(String, String)]) -> String {
        let default = default_label(code, used);
        loop {
            let _ = write!(
                self.term,
                "Specify label for embedded code {}: |{default}| ",
                code.bold()
            );
            let answer = match self.read_answer() {
                None => return default,
                Some(answer) if answer.is_empty() => return default,
                Some(answer) => answer,
            };
            if !LABEL_FORMAT.is_match(&answer) {
                self.say("Labels consist of letters and underscores only.");
            } else if used.iter().any(|(label, _)| *label == answer) {
                self.say(&format!("Label {answer} is already used in this string."));
            } else {
                return answer;
            }
        }
    }

    /// Print the literal with up to two lines of context on each side.
    fn show_context(&mut self, string: &StringView<'_>) {
        let span = string.span();
        let (context_start, context_end) = expand_to_lines(self.source, span.start, span.end);
        let _ = writeln!(
            self.term,
            "String literal found at {span}:\n{}{}{}",
            &self.source[context_start..span.start],
            string.raw().bold(),
            &self.source[span.end..context_end]
        );
    }

    /// Build the `_("...")` rewrite for a string the user marked.
    fn mark_translatable(&mut self, string: &StringView<'_>) -> String {
        if string.single_quoted() {
            return format!("_({})", string.raw());
        }

        let mut body = String::new();
        let mut labels: Vec<(String, String)> = Vec::new();
        for part in string.parts() {
            match part {
                BodyPart::Text(text) => body.push_str(text),
                BodyPart::Code(code) => {
                    let label = self.ask_label(code, &labels);
                    body.push_str(&format!("%{{{label}}}"));
                    labels.push((label, code.to_string()));
                }
            }
        }

        let mut result = format!("_({}{body}{})", string.open_quote(), string.close_quote());
        if !labels.is_empty() {
            let pairs = labels
                .iter()
                .map(|(label, code)| format!(":{label} => {code}"))
                .collect::<Vec<_>>()
                .join(", ");
            result.push_str(&format!(" % {{{pairs}}}"));
            let question = format!("Parenthesize the expression {}?", result.as_str().bold());
            if self.agree(&question, true) {
                result = format!("({result})");
            }
        }
        result
    }
}

impl<R: BufRead, W: Write> Handler for InteractiveHandler<'_, R, W> {
    fn string(&mut self, string: &StringView<'_>) -> String {
        self.show_context(string);
        if self.agree("Mark this string translatable?", false) {
            self.mark_translatable(string)
        } else {
            string.raw().to_string()
        }
    }
}

/// Default label for an embedded-code snippet: its first run of letters and
/// underscores, suffixed with `_` until nonempty and unused.
fn default_label(code: &str, used: &[(String, String)]) -> String {
    let mut label = LABEL_SEED
        .find(code)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    while label.is_empty() || used.iter().any(|(existing, _)| *existing == label) {
        label.push('_');
    }
    label
}

/// Widen `[start, end)` by up to two line boundaries in each direction.
fn expand_to_lines(source: &str, start: usize, end: usize) -> (usize, usize) {
    let mut context_start = start;
    let mut context_end = end;
    for _ in 0..2 {
        context_start = LINE_BOUNDARY
            .find_iter(&source[..context_start])
            .last()
            .map(|m| m.start())
            .unwrap_or(0);
        context_end = LINE_BOUNDARY
            .find(&source[context_end..])
            .map(|m| context_end + m.end())
            .unwrap_or(source.len());
    }
    (context_start, context_end)
}
