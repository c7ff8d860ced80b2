//! Token model for the RTF-embedded-HTML grammar.
//!
//! Tokens are transient, line-scoped artifacts: they borrow from the input
//! line and live only as long as one tokenize-and-reduce pass.

use serde::Serialize;

/// A classified span of RTF input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Token<'a> {
    /// Base control word, e.g. `\ansicpg1252` or `\red0;`.
    ///
    /// The separator flag records a `;` immediately following the word, as
    /// seen in color-table declarations.
    ControlWord {
        /// Word name (alphabetic plus apostrophe; hex escapes like `\'e9`
        /// parse as name `'e` with argument 9).
        name: &'a str,
        /// Numeric argument, when the name is followed by digits.
        arg: Option<i32>,
        /// Whether a `;` separator directly followed the word.
        separator: bool,
    },

    /// Starred control word, e.g. `\*\htmltag64`. Digits are part of the name.
    ExtendedControlWord {
        /// Full name including any trailing digits.
        name: &'a str,
    },

    /// Opening group brace `{`.
    GroupOpen,

    /// Closing group brace `}`.
    GroupClose,

    /// Literal `<...>` tag copied verbatim; internal structure uninterpreted.
    HtmlTag(&'a str),

    /// Run of literal text free of RTF-special characters.
    HtmlText(&'a str),

    /// Paragraph break synthesized from `\*\name \par`.
    Newline,

    /// A consumed `HYPERLINK "..."` field. The URL is recorded but the field
    /// contributes no output.
    Hyperlink {
        /// URL between the quotes.
        url: &'a str,
    },
}

impl<'a> Token<'a> {
    /// Textual payload this token contributes to the extraction result.
    ///
    /// Only tags, text runs, and synthesized newlines produce output; every
    /// other token kind reduces to the empty string.
    pub fn text(&self) -> &'a str {
        match *self {
            Token::HtmlTag(text) | Token::HtmlText(text) => text,
            Token::Newline => "\n",
            _ => "",
        }
    }

    /// Whether this token contributes output.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            Token::HtmlTag(_) | Token::HtmlText(_) | Token::Newline
        )
    }
}

/// A token together with the raw source span it was recognized from.
///
/// Raw spans include any insignificant whitespace skipped immediately before
/// the token, so the raws of a fragment stream tile the input line exactly.
/// A grammar gap therefore surfaces as a parse failure, never as silently
/// dropped bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fragment<'a> {
    /// The classified token.
    pub token: Token<'a>,
    /// The raw input span, leading trivia included.
    pub raw: &'a str,
}

/// Characters that may appear in extracted HTML payload.
///
/// Everything except the RTF-special characters and control characters;
/// space and tab are HTML-safe.
pub(crate) fn is_html_safe(c: char) -> bool {
    match c {
        '<' | '>' | '\\' | '{' | '}' => false,
        ' ' | '\t' => true,
        _ => !c.is_control(),
    }
}

/// Characters allowed in a control-word name (before any digits).
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

/// Insignificant whitespace between fragments.
pub(crate) fn is_trivia(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_safe_class() {
        for c in ['a', '1', ';', '"', '\'', ' ', '\t', '=', '&', 'é'] {
            assert!(is_html_safe(c), "{c:?} should be HTML-safe");
        }
        for c in ['<', '>', '\\', '{', '}', '\n', '\r', '\0'] {
            assert!(!is_html_safe(c), "{c:?} should not be HTML-safe");
        }
    }

    #[test]
    fn test_name_char_class() {
        assert!(is_name_char('a'));
        assert!(is_name_char('Z'));
        assert!(is_name_char('\''));
        assert!(!is_name_char('0'));
        assert!(!is_name_char('*'));
    }

    #[test]
    fn test_token_text() {
        assert_eq!(Token::HtmlTag("<p>").text(), "<p>");
        assert_eq!(Token::HtmlText("Hello ").text(), "Hello ");
        assert_eq!(Token::Newline.text(), "\n");
        assert_eq!(Token::GroupOpen.text(), "");
        assert_eq!(Token::Hyperlink { url: "http://x" }.text(), "");
        assert_eq!(
            Token::ControlWord {
                name: "par",
                arg: None,
                separator: false
            }
            .text(),
            ""
        );
    }

    #[test]
    fn test_is_content() {
        assert!(Token::HtmlTag("<b>").is_content());
        assert!(Token::Newline.is_content());
        assert!(!Token::GroupClose.is_content());
        assert!(!Token::ExtendedControlWord { name: "htmltag64" }.is_content());
    }
}
