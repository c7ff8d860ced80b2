//! RTF tokenizer for HTML extraction.
//!
//! The scanner walks one line of RTF left to right and classifies every span
//! into a [`Fragment`]. At each position it tries an ordered list of
//! recognizer rules; the first rule that matches wins, and a rule that fails
//! part-way restores both the cursor and the emitted fragments before the
//! next rule runs:
//!
//! 1. extended control word followed by HTML payload (`\*\htmltag64 }text`)
//! 2. literal tag, optionally with brace-glued trailing payload (`<p>}text`)
//! 3. HTML content marker followed by payload (`\htmlrtf0 text`)
//! 4. extended control word followed by `\par` (a synthesized newline)
//! 5. `HYPERLINK "..."` field (consumed whole, no output; committed once the
//!    marker is seen, so an unterminated field is a hard failure)
//! 6. any other control word or group brace (consumed, no output)
//! 7. bare HTML-safe text
//!
//! Whitespace between fragments is insignificant and folds into the raw span
//! of the following fragment; a failure to match at any non-empty remaining
//! position is a parse failure, never silent loss.

use crate::error::{bounded_excerpt, Error, Result};

use super::token::{is_html_safe, is_name_char, is_trivia, Fragment, Token};

/// Literal marker that disables RTF interpretation of the text after it.
/// The trailing space is part of the marker.
const HTML_CONTENT_MARKER: &str = "\\htmlrtf0 ";

/// Literal opener of a hyperlink field instruction.
const HYPERLINK_MARKER: &str = "HYPERLINK \"";

/// Cursor over one line of RTF input.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    /// Start of the fragment currently being matched, for error excerpts.
    fragment_start: usize,
    /// End of the previous fragment's raw span.
    last_end: usize,
    /// Start of the most recently pushed fragment's raw span.
    last_start: usize,
    out: Vec<Fragment<'a>>,
}

/// Saved scanner state for rule backtracking.
#[derive(Clone, Copy)]
struct Checkpoint {
    pos: usize,
    fragments: usize,
    last_end: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over one input line.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            fragment_start: 0,
            last_end: 0,
            last_start: 0,
            out: Vec::new(),
        }
    }

    /// Tokenize the entire input into an ordered fragment stream.
    ///
    /// A whitespace-only input produces an empty stream; callers handle that
    /// case through the identity path of the line driver. For any other
    /// input, the raw spans of the returned fragments tile the input exactly.
    pub fn tokenize(mut self) -> Result<Vec<Fragment<'a>>> {
        while !self.at_end() {
            self.skip_trivia();
            if self.at_end() {
                break;
            }
            self.next_fragment()?;
        }

        // Trailing whitespace belongs to the last fragment's raw span.
        if self.last_end < self.input.len() {
            if let Some(last) = self.out.last_mut() {
                last.raw = &self.input[self.last_start..];
            }
        }

        Ok(self.out)
    }

    /// Recognize one fragment at the current position.
    fn next_fragment(&mut self) -> Result<()> {
        self.fragment_start = self.pos;

        if self.ext_control_with_content()
            || self.tag_with_content()
            || self.marked_content()
            || self.ext_control_newline()
        {
            return Ok(());
        }
        if self.hyperlink_field()? {
            return Ok(());
        }
        if self.control_or_group() || self.bare_text() {
            return Ok(());
        }

        Err(self.parse_error("a control word, group delimiter, HTML tag, or HTML text"))
    }

    // ---- rules, in precedence order -------------------------------------

    /// Rule 1: `\*\name` + optional `}` + non-empty HTML-safe run.
    ///
    /// Whitespace before the brace and before the run is insignificant;
    /// whitespace inside and after the run is payload.
    fn ext_control_with_content(&mut self) -> bool {
        let cp = self.checkpoint();
        let Some(name) = self.match_ext_control() else {
            return false;
        };
        self.push(Token::ExtendedControlWord { name });

        let brace = self.pos;
        self.skip_trivia();
        if self.eat('}') {
            self.push(Token::GroupClose);
        } else {
            self.pos = brace;
        }

        self.skip_trivia();
        match self.take_html_safe_run() {
            Some(run) => {
                self.push(Token::HtmlText(run));
                true
            }
            None => {
                self.restore(cp);
                false
            }
        }
    }

    /// Rule 2: `<...>` tag, optionally glued to `}` + payload.
    ///
    /// The brace and the run are consumed only as a pair, with no whitespace
    /// between tag and brace; whitespace after the brace is payload and is
    /// preserved verbatim.
    fn tag_with_content(&mut self) -> bool {
        let Some(tag) = self.match_tag() else {
            return false;
        };
        self.push(Token::HtmlTag(tag));

        let pair = self.pos;
        if self.eat('}') {
            let brace_end = self.pos;
            match self.take_html_safe_run() {
                Some(run) => {
                    self.push_span(Token::GroupClose, brace_end);
                    self.push(Token::HtmlText(run));
                }
                None => self.pos = pair,
            }
        }
        true
    }

    /// Rule 3: `\htmlrtf0 ` marker + non-empty HTML-safe run.
    ///
    /// The run starts immediately after the marker's trailing space, so
    /// further leading whitespace is payload.
    fn marked_content(&mut self) -> bool {
        let cp = self.checkpoint();
        if !self.eat_str(HTML_CONTENT_MARKER) {
            return false;
        }
        self.push(Token::ControlWord {
            name: "htmlrtf",
            arg: Some(0),
            separator: false,
        });

        match self.take_html_safe_run() {
            Some(run) => {
                self.push(Token::HtmlText(run));
                true
            }
            None => {
                self.restore(cp);
                false
            }
        }
    }

    /// Rule 4: `\*\name` + `\par` reduces to a synthesized newline.
    ///
    /// Requires the exact control word `par` with no numeric argument, so
    /// `\pard` never triggers it.
    fn ext_control_newline(&mut self) -> bool {
        let cp = self.checkpoint();
        let Some(name) = self.match_ext_control() else {
            return false;
        };
        self.push(Token::ExtendedControlWord { name });

        self.skip_trivia();
        if let Some(("par", None, false)) = self.match_base_control() {
            self.push(Token::Newline);
            return true;
        }

        self.restore(cp);
        false
    }

    /// Rule 5: `HYPERLINK "url"` field, consumed whole.
    ///
    /// Committed once the marker is seen: an empty URL or a missing closing
    /// quote is a hard parse failure rather than a fallthrough, so malformed
    /// fields are not silently re-interpreted as text.
    fn hyperlink_field(&mut self) -> Result<bool> {
        if !self.eat_str(HYPERLINK_MARKER) {
            return Ok(false);
        }

        let url = self.take_while(|c| is_html_safe(c) && c != '"');
        if url.is_empty() {
            return Err(self.parse_error("a URL inside the HYPERLINK field"));
        }
        if !self.eat('"') {
            return Err(self.parse_error("closing '\"' of the HYPERLINK field"));
        }

        self.push(Token::Hyperlink { url });
        Ok(true)
    }

    /// Rule 6: any remaining control word or group brace, suppressed.
    fn control_or_group(&mut self) -> bool {
        if self.eat('{') {
            self.push(Token::GroupOpen);
            return true;
        }
        if self.eat('}') {
            self.push(Token::GroupClose);
            return true;
        }
        if let Some(name) = self.match_ext_control() {
            self.push(Token::ExtendedControlWord { name });
            return true;
        }
        if let Some((name, arg, separator)) = self.match_base_control() {
            self.push(Token::ControlWord {
                name,
                arg,
                separator,
            });
            return true;
        }
        false
    }

    /// Rule 7: bare HTML-safe text.
    ///
    /// Lowest precedence; this is what makes extraction idempotent on its
    /// own output.
    fn bare_text(&mut self) -> bool {
        match self.take_html_safe_run() {
            Some(run) => {
                self.push(Token::HtmlText(run));
                true
            }
            None => false,
        }
    }

    // ---- low-level matchers ---------------------------------------------

    /// Match `\name[digits][;]`, returning `(name, arg, separator)`.
    fn match_base_control(&mut self) -> Option<(&'a str, Option<i32>, bool)> {
        let start = self.pos;
        if !self.eat('\\') {
            return None;
        }

        let name = self.take_while(is_name_char);
        if name.is_empty() {
            self.pos = start;
            return None;
        }

        let digits = self.take_while(|c| c.is_ascii_digit());
        let arg = if digits.is_empty() {
            None
        } else {
            match digits.parse::<i32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    self.pos = start;
                    return None;
                }
            }
        };

        let separator = self.eat(';');
        Some((name, arg, separator))
    }

    /// Match `\*\name[digits]`, returning the full name with digits.
    fn match_ext_control(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.eat_str("\\*\\") {
            return None;
        }

        let name_start = self.pos;
        if self.take_while(is_name_char).is_empty() {
            self.pos = start;
            return None;
        }
        self.take_while(|c| c.is_ascii_digit());

        Some(&self.input[name_start..self.pos])
    }

    /// Match a literal `<...>` tag with a non-empty HTML-safe interior.
    fn match_tag(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.eat('<') {
            return None;
        }
        if self.take_while(is_html_safe).is_empty() {
            self.pos = start;
            return None;
        }
        if !self.eat('>') {
            self.pos = start;
            return None;
        }
        Some(&self.input[start..self.pos])
    }

    /// Take a maximal non-empty run of HTML-safe characters.
    fn take_html_safe_run(&mut self) -> Option<&'a str> {
        let run = self.take_while(is_html_safe);
        if run.is_empty() {
            None
        } else {
            Some(run)
        }
    }

    // ---- cursor primitives ----------------------------------------------

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, expected: &str) -> bool {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        for c in self.rest().chars() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    fn skip_trivia(&mut self) {
        self.take_while(is_trivia);
    }

    // ---- fragment emission & backtracking -------------------------------

    /// Push a fragment whose raw span ends at the current position.
    fn push(&mut self, token: Token<'a>) {
        self.push_span(token, self.pos);
    }

    /// Push a fragment whose raw span ends at `end`.
    ///
    /// The span starts where the previous fragment ended, so skipped trivia
    /// folds into this fragment and the stream tiles the input.
    fn push_span(&mut self, token: Token<'a>, end: usize) {
        let raw = &self.input[self.last_end..end];
        self.out.push(Fragment { token, raw });
        self.last_start = self.last_end;
        self.last_end = end;
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            fragments: self.out.len(),
            last_end: self.last_end,
        }
    }

    fn restore(&mut self, cp: Checkpoint) {
        self.pos = cp.pos;
        self.out.truncate(cp.fragments);
        self.last_end = cp.last_end;
    }

    fn parse_error(&self, expected: &str) -> Error {
        Error::Parse {
            excerpt: bounded_excerpt(&self.input[self.fragment_start..]),
            expected: expected.to_string(),
            column: self.input[..self.pos].chars().count() + 1,
        }
    }
}

/// Tokenize one line of RTF into an ordered fragment stream.
///
/// # Example
/// ```
/// use unrtf::parser::tokenize;
///
/// let fragments = tokenize(r"{\*\htmltag1 <p>}Hello").unwrap();
/// let html: String = fragments.iter().map(|f| f.token.text()).collect();
/// assert_eq!(html, "<p>Hello");
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Fragment<'_>>> {
    Scanner::new(input).tokenize()
}
