//! Value rendering and string escaping.
//!
//! Values either render or fail as unrepresentable — there is no partial
//! output. Quoted strings go through a minimal-escaping writer that prefers
//! double quotes and falls back to a single forced-double-quote retry when
//! the text mixes both quote characters.

use sable_ast::{ListSeparator, Value};

use crate::serializer::Serializer;
use crate::{format_number, RenderError};

impl Serializer {
    pub(crate) fn visit_value(&mut self, value: &Value) -> Result<(), RenderError> {
        match value {
            // A bare null or a map never has a textual form.
            Value::Null | Value::Map { .. } => Err(RenderError::UnrepresentableValue {
                value: value.clone(),
            }),
            Value::Boolean(value) => {
                self.buffer.push_str(if *value { "true" } else { "false" });
                Ok(())
            }
            Value::Number(number) => {
                self.buffer.push_str(&format_number(number.value));
                Ok(())
            }
            Value::Color(color) => {
                self.buffer.push_str(&color.to_string());
                Ok(())
            }
            Value::String { text, quoted } => {
                if *quoted {
                    write_quoted_string(&mut self.buffer, text);
                } else {
                    write_unquoted_string(&mut self.buffer, text);
                }
                Ok(())
            }
            Value::List {
                contents,
                separator,
                bracketed,
            } => {
                if *bracketed {
                    self.buffer.push('[');
                } else if contents.is_empty() {
                    return Err(RenderError::UnrepresentableValue {
                        value: value.clone(),
                    });
                }

                let mut first = true;
                for element in contents.iter().filter(|element| !element.is_blank()) {
                    if !first {
                        self.buffer.push_str(match separator {
                            ListSeparator::Space => " ",
                            ListSeparator::Comma => ", ",
                        });
                    }
                    first = false;
                    self.visit_value(element)?;
                }

                if *bracketed {
                    self.buffer.push(']');
                }
                Ok(())
            }
        }
    }
}

/// Write `text` as a single CSS string token, picking the quote character
/// that needs the least escaping: double quotes by default, single quotes
/// when the text contains a double quote and no single quote.
pub(crate) fn write_quoted_string(out: &mut String, text: &str) {
    if !try_write_quoted(out, text, false) {
        try_write_quoted(out, text, true);
    }
}

/// One escaping pass. Without `force_double_quote` the pass aborts (returns
/// `false`) the moment both quote characters have been seen, and the caller
/// restarts with the flag set; the forced pass always succeeds, so there is
/// at most one restart.
fn try_write_quoted(out: &mut String, text: &str, force_double_quote: bool) -> bool {
    let mut saw_single_quote = false;
    let mut saw_double_quote = false;
    let mut inner = String::with_capacity(text.len());

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                if force_double_quote {
                    inner.push('\'');
                } else if saw_double_quote {
                    return false;
                } else {
                    saw_single_quote = true;
                    inner.push('\'');
                }
            }
            '"' => {
                if force_double_quote {
                    inner.push_str("\\\"");
                } else if saw_single_quote {
                    return false;
                } else {
                    saw_double_quote = true;
                    inner.push('"');
                }
            }
            '\r' | '\n' | '\u{c}' => {
                inner.push('\\');
                inner.push_str(&format!("{:x}", ch as u32));
                // A hex digit, space, or tab right after the escape would be
                // read as part of it; one literal space ends the escape.
                if let Some(&next) = chars.peek() {
                    if next.is_ascii_hexdigit() || next == ' ' || next == '\t' {
                        inner.push(' ');
                    }
                }
            }
            '\\' => inner.push_str("\\\\"),
            _ => inner.push(ch),
        }
    }

    let quote = if !force_double_quote && saw_double_quote {
        '\''
    } else {
        '"'
    };
    out.push(quote);
    out.push_str(&inner);
    out.push(quote);
    true
}

/// Write a bare identifier. Line breaks become single spaces — structural,
/// not escaped — and the spaces that trailed a break are dropped with it.
pub(crate) fn write_unquoted_string(out: &mut String, text: &str) {
    let mut after_newline = false;
    for ch in text.chars() {
        match ch {
            '\n' => {
                out.push(' ');
                after_newline = true;
            }
            ' ' => {
                if !after_newline {
                    out.push(' ');
                }
            }
            _ => {
                out.push(ch);
                after_newline = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_value;
    use sable_ast::{Color, Number};

    fn quoted(text: &str) -> String {
        let mut out = String::new();
        write_quoted_string(&mut out, text);
        out
    }

    /// Decode a CSS string token per the standard grammar: surrounding
    /// quotes, `\xx…` hex escapes terminated by one optional whitespace,
    /// and identity escapes for everything else.
    fn parse_css_string(css: &str) -> String {
        let mut chars = css.chars().peekable();
        let quote = chars.next().unwrap();
        let mut out = String::new();
        while let Some(ch) = chars.next() {
            if ch == quote {
                break;
            }
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            if chars.peek().is_some_and(char::is_ascii_hexdigit) {
                let mut code = 0;
                let mut digits = 0;
                while digits < 6 {
                    match chars.peek() {
                        Some(&digit) if digit.is_ascii_hexdigit() => {
                            code = code * 16 + digit.to_digit(16).unwrap();
                            chars.next();
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                if let Some(&next) = chars.peek() {
                    if next == ' ' || next == '\t' {
                        chars.next();
                    }
                }
                out.push(char::from_u32(code).unwrap());
            } else {
                out.push(chars.next().unwrap());
            }
        }
        out
    }

    // =========================================================================
    // Quoted strings
    // =========================================================================

    #[test]
    fn test_plain_text_double_quoted() {
        assert_eq!(quoted("foo"), "\"foo\"");
        assert_eq!(quoted(""), "\"\"");
    }

    #[test]
    fn test_double_quotes_switch_to_single() {
        assert_eq!(quoted("he said \"hi\""), "'he said \"hi\"'");
    }

    #[test]
    fn test_single_quotes_stay_double() {
        assert_eq!(quoted("it's"), "\"it's\"");
    }

    #[test]
    fn test_mixed_quotes_force_double() {
        // Single quote first, then double: restart escapes only the doubles.
        assert_eq!(quoted("it's \"fine\""), "\"it's \\\"fine\\\"\"");
        // Double quote first, then single: same outcome.
        assert_eq!(quoted("\"a\" it's"), "\"\\\"a\\\" it's\"");
    }

    #[test]
    fn test_newline_escaped_with_separator() {
        // `b` is a hex digit, so the escape needs a terminating space.
        assert_eq!(quoted("a\nb"), "\"a\\a b\"");
        // `z` is not, so no separator.
        assert_eq!(quoted("a\nz"), "\"a\\az\"");
        // A literal space after the break also needs the separator.
        assert_eq!(quoted("a\n b"), "\"a\\a  b\"");
        // Trailing break: nothing follows, no separator.
        assert_eq!(quoted("a\n"), "\"a\\a\"");
    }

    #[test]
    fn test_carriage_return_and_form_feed_escaped() {
        assert_eq!(quoted("a\rb"), "\"a\\d b\"");
        assert_eq!(quoted("a\u{c}z"), "\"a\\cz\"");
    }

    #[test]
    fn test_backslash_doubled() {
        assert_eq!(quoted("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_escaping_round_trips() {
        let inputs = [
            "plain",
            "it's a \"test\"",
            "a\nb",
            "a\n b",
            "a\r\nb",
            "back\\slash",
            "tab\n\tafter",
            "\"''\"",
            "déjà ☃",
        ];
        for input in inputs {
            assert_eq!(parse_css_string(&quoted(input)), input, "input: {input:?}");
        }
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    fn identifier(text: &str) -> Value {
        Value::String {
            text: text.to_string(),
            quoted: false,
        }
    }

    #[test]
    fn test_identifier_newline_becomes_space() {
        assert_eq!(render_value(&identifier("a\nb")).unwrap(), "a b");
        assert_eq!(render_value(&identifier("a\n   b")).unwrap(), "a b");
        assert_eq!(render_value(&identifier("a b")).unwrap(), "a b");
    }

    // =========================================================================
    // Scalars
    // =========================================================================

    #[test]
    fn test_booleans() {
        assert_eq!(render_value(&Value::Boolean(true)).unwrap(), "true");
        assert_eq!(render_value(&Value::Boolean(false)).unwrap(), "false");
    }

    #[test]
    fn test_number_unit_not_rendered() {
        let number = Value::Number(Number::with_unit(12.0, "px"));
        assert_eq!(render_value(&number).unwrap(), "12");
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            render_value(&Value::Color(Color::rgb(0, 128, 255))).unwrap(),
            "#0080ff"
        );
        assert_eq!(
            render_value(&Value::Color(Color::rgba(0, 0, 0, 0.25))).unwrap(),
            "rgba(0, 0, 0, 0.25)"
        );
    }

    #[test]
    fn test_bare_null_fails() {
        assert!(matches!(
            render_value(&Value::Null),
            Err(RenderError::UnrepresentableValue { .. })
        ));
    }

    // =========================================================================
    // Lists
    // =========================================================================

    fn list(contents: Vec<Value>, separator: ListSeparator, bracketed: bool) -> Value {
        Value::List {
            contents,
            separator,
            bracketed,
        }
    }

    #[test]
    fn test_space_separated_list() {
        let value = list(
            vec![
                Value::Number(Number::new(1.0)),
                Value::Number(Number::new(2.0)),
            ],
            ListSeparator::Space,
            false,
        );
        assert_eq!(render_value(&value).unwrap(), "1 2");
    }

    #[test]
    fn test_comma_separated_list() {
        let value = list(
            vec![identifier("a"), identifier("b")],
            ListSeparator::Comma,
            false,
        );
        assert_eq!(render_value(&value).unwrap(), "a, b");
    }

    #[test]
    fn test_list_skips_blank_elements() {
        let value = list(
            vec![
                Value::Number(Number::new(1.0)),
                Value::Null,
                identifier(""),
                Value::Number(Number::new(2.0)),
            ],
            ListSeparator::Space,
            false,
        );
        assert_eq!(render_value(&value).unwrap(), "1 2");
    }

    #[test]
    fn test_all_blank_list_renders_empty() {
        let value = list(vec![Value::Null], ListSeparator::Space, false);
        assert_eq!(render_value(&value).unwrap(), "");
    }

    #[test]
    fn test_empty_unbracketed_list_fails() {
        let value = list(vec![], ListSeparator::Space, false);
        assert_eq!(
            render_value(&value),
            Err(RenderError::UnrepresentableValue { value })
        );
    }

    #[test]
    fn test_empty_bracketed_list_renders_brackets() {
        let value = list(vec![], ListSeparator::Comma, true);
        assert_eq!(render_value(&value).unwrap(), "[]");
    }

    #[test]
    fn test_bracketed_list() {
        let value = list(
            vec![identifier("a"), identifier("b")],
            ListSeparator::Space,
            true,
        );
        assert_eq!(render_value(&value).unwrap(), "[a b]");
    }

    #[test]
    fn test_nested_lists() {
        let inner = |a: &str, b: &str| {
            list(
                vec![identifier(a), identifier(b)],
                ListSeparator::Space,
                false,
            )
        };
        let value = list(
            vec![inner("1px", "solid"), inner("2px", "dashed")],
            ListSeparator::Comma,
            false,
        );
        assert_eq!(render_value(&value).unwrap(), "1px solid, 2px dashed");
    }

    #[test]
    fn test_map_inside_list_fails() {
        let value = list(
            vec![Value::Map { entries: vec![] }],
            ListSeparator::Space,
            true,
        );
        assert!(matches!(
            render_value(&value),
            Err(RenderError::UnrepresentableValue { .. })
        ));
    }
}
