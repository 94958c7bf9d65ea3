//! Word Quoting Translation
//!
//! The core quoting algorithm: renders a bash word (a sequence of tagged
//! parts) as PowerShell text that preserves the original expansion
//! semantics. The quoting tag on each literal part governs which characters
//! must be escaped on emission.

use crate::ast::{Quoting, Word, WordPart};
use crate::transform::context::TransformContext;
use crate::transform::vars::{map_variable, map_variable_interpolated};

/// Characters that never need quoting in a PowerShell argument position
fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '_' | '.' | '/' | ':' | '-' | '*' | '?' | '=' | '@' | '%')
}

fn is_safe_unquoted(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_safe_char)
}

/// PowerShell single-quoted literal: only `'` needs escaping, by doubling
pub fn ps_single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn has_control_bytes(s: &str) -> bool {
    s.chars().any(|c| (c as u32) < 0x20 || c as u32 == 0x7f)
}

/// Escape text for inclusion in a PowerShell double-quoted string:
/// backtick-escape `` ` ``, `$`, `"`, and render control bytes as backtick
/// escapes.
pub fn ps_double_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '`' => out.push_str("``"),
            '$' => out.push_str("`$"),
            '"' => out.push_str("`\""),
            '\n' => out.push_str("`n"),
            '\r' => out.push_str("`r"),
            '\t' => out.push_str("`t"),
            '\0' => out.push_str("`0"),
            '\x07' => out.push_str("`a"),
            '\x08' => out.push_str("`b"),
            '\x1b' => out.push_str("`e"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("$([char]{})", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Path shortcuts rewritten for Windows. Applies only to unquoted
/// single-literal words; inside quotes, bash would not expand `~` either.
fn rewrite_path(value: &str) -> Option<String> {
    if value == "~" {
        return Some("$env:USERPROFILE".to_string());
    }
    if let Some(rest) = value.strip_prefix("~/") {
        return Some(format!("\"$env:USERPROFILE\\{}\"", ps_double_escape(rest)));
    }
    if value == "/tmp" || value == "/tmp/" {
        return Some("$env:TEMP".to_string());
    }
    if let Some(rest) = value.strip_prefix("/tmp/") {
        return Some(format!("\"$env:TEMP\\{}\"", ps_double_escape(rest)));
    }
    None
}

fn is_stringy(part: &WordPart) -> bool {
    !matches!(part, WordPart::Glob { .. })
}

/// Translate a word to a single PowerShell expression
pub fn translate_word(word: &Word, ctx: &mut TransformContext) -> String {
    if word.parts.is_empty() {
        return "''".to_string();
    }

    if let Some(value) = word.unquoted_literal() {
        if let Some(rewritten) = rewrite_path(value) {
            return rewritten;
        }
    }

    if word.parts.len() == 1 {
        return translate_part(&word.parts[0], ctx);
    }

    if word.parts.iter().all(is_stringy) {
        // One double-quoted string concatenating escaped literals, mapped
        // variables, and $( … ) blocks
        let mut out = String::from("\"");
        for part in &word.parts {
            match part {
                WordPart::Literal { value, .. } => out.push_str(&ps_double_escape(value)),
                WordPart::Variable { name, braced } => {
                    out.push_str(&map_variable_interpolated(name, *braced))
                }
                WordPart::CommandSubstitution { command } => {
                    out.push_str(&translate_substitution(command, ctx))
                }
                WordPart::Glob { .. } => unreachable!("filtered by is_stringy"),
            }
        }
        out.push('"');
        return out;
    }

    let rendered: Vec<String> = word
        .parts
        .iter()
        .map(|p| translate_part(p, ctx))
        .collect();
    format!("({})", rendered.join(" + "))
}

fn translate_part(part: &WordPart, ctx: &mut TransformContext) -> String {
    match part {
        WordPart::Literal {
            value,
            quoting: Quoting::Unquoted,
        } => {
            if value.is_empty() {
                return "''".to_string();
            }
            if value == "$null" || value == "$true" || value == "$false" {
                return value.clone();
            }
            if is_safe_unquoted(value) {
                return value.clone();
            }
            ps_single_quote(value)
        }
        WordPart::Literal {
            value,
            quoting: Quoting::Single,
        } => ps_single_quote(value),
        WordPart::Literal {
            value,
            quoting: Quoting::Double,
        } => format!("\"{}\"", ps_double_escape(value)),
        WordPart::Literal {
            value,
            quoting: Quoting::DollarSingle,
        } => {
            if has_control_bytes(value) {
                format!("\"{}\"", ps_double_escape(value))
            } else {
                ps_single_quote(value)
            }
        }
        WordPart::Variable { name, braced } => map_variable(name, *braced),
        WordPart::CommandSubstitution { command } => translate_substitution(command, ctx),
        WordPart::Glob { pattern } => pattern.clone(),
    }
}

/// Recursively lex/parse/translate the inner command of a $( … ) and wrap
/// the result. Warnings aggregate into the shared context; a failed parse
/// falls back to the raw passthrough.
pub fn translate_substitution(command: &str, ctx: &mut TransformContext) -> String {
    match crate::parser::parse(command) {
        Ok(script) => {
            let inner = crate::transform::translate_script(&script, ctx);
            format!("$({})", inner)
        }
        Err(e) => {
            ctx.warn(format!(
                "Command substitution passed through untranslated: {}",
                e
            ));
            format!("$({})", command)
        }
    }
}

/// Render a word as a single-quoted PowerShell string whenever it is fully
/// literal. Translators use this for operands whose exact text matters
/// (patterns, paths handed to external tools).
pub fn quote_literal(word: &Word, ctx: &mut TransformContext) -> String {
    if let Some(value) = word.unquoted_literal() {
        if let Some(rewritten) = rewrite_path(value) {
            return rewritten;
        }
    }
    match word.literal_text() {
        Some(text) => ps_single_quote(&text),
        None => translate_word(word, ctx),
    }
}
