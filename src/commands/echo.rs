// src/commands/echo.rs
//
// echo joins its arguments with single spaces into one output string.
// With -e, recognized C escapes in literal parts are decoded to their
// control bytes before emission; the word emitter then renders them as
// backtick escapes inside a double-quoted PowerShell string. Without -e,
// backslashes pass through literally.

use crate::ast::{Quoting, SimpleCommand, Word, WordPart};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct EchoTranslator;

fn is_echo_flag(text: &str) -> bool {
    text.len() > 1 && text.starts_with('-') && text[1..].chars().all(|c| matches!(c, 'n' | 'e' | 'E'))
}

/// The escape set GNU echo -e understands
fn decode_echo_escapes(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' || i + 1 >= chars.len() {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let esc = chars[i + 1];
        i += 2;
        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'e' => out.push('\x1b'),
            'f' => out.push('\x0c'),
            'v' => out.push('\x0b'),
            '\\' => out.push('\\'),
            'c' => return out, // \c suppresses the rest
            '0' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 3 {
                    match chars.get(i) {
                        Some(c @ '0'..='7') => {
                            value = value * 8 + c.to_digit(8).unwrap_or(0);
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                out.push(char::from_u32(value).unwrap_or('\0'));
            }
            'x' => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    match chars.get(i) {
                        Some(c) if c.is_ascii_hexdigit() => {
                            value = value * 16 + c.to_digit(16).unwrap_or(0);
                            i += 1;
                            digits += 1;
                        }
                        _ => break,
                    }
                }
                if digits > 0 {
                    if let Some(c) = char::from_u32(value) {
                        out.push(c);
                    }
                } else {
                    out.push_str("\\x");
                }
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    out
}

impl Translator for EchoTranslator {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut no_newline = false;
        let mut interpret = false;
        let mut rest: &[Word] = &cmd.args;
        while let Some(first) = rest.first() {
            match first.literal_text() {
                Some(t) if is_echo_flag(&t) => {
                    if t.contains('n') {
                        no_newline = true;
                    }
                    if t.contains('e') {
                        interpret = true;
                    }
                    if t.contains('E') {
                        interpret = false;
                    }
                    rest = &rest[1..];
                }
                _ => break,
            }
        }

        if rest.is_empty() {
            return if no_newline {
                "Write-Host -NoNewline ''".to_string()
            } else {
                "Write-Output ''".to_string()
            };
        }

        // Join arguments with single-space literals into one word, so the
        // word translator emits a single string
        let mut parts: Vec<WordPart> = Vec::new();
        for (index, word) in rest.iter().enumerate() {
            if index > 0 {
                parts.push(WordPart::Literal {
                    value: " ".into(),
                    quoting: Quoting::Unquoted,
                });
            }
            for part in &word.parts {
                parts.push(match part {
                    WordPart::Literal { value, .. } if interpret => WordPart::Literal {
                        value: decode_echo_escapes(value),
                        // Dollar-single rendering gives control bytes the
                        // backtick treatment
                        quoting: Quoting::DollarSingle,
                    },
                    other => other.clone(),
                });
            }
        }
        let combined = translate_word(&Word::new(parts), ctx);

        if no_newline {
            format!("Write-Host -NoNewline {}", combined)
        } else {
            format!("Write-Output {}", combined)
        }
    }
}
