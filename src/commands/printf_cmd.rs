// src/commands/printf_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::{ps_double_escape, translate_word};
use crate::transform::TransformContext;

pub struct PrintfTranslator;

/// Convert a printf format to a .NET format string: `%s`/`%d`/… become
/// `{N}`, `%%` becomes `%`, literal braces double. Returns the converted
/// text and the number of consumed specifiers.
fn convert_format(format: &str, ctx: &mut TransformContext) -> (String, usize) {
    let chars: Vec<char> = format.chars().collect();
    let mut out = String::new();
    let mut slot = 0;
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' => {
                out.push_str("{{");
                i += 1;
            }
            '}' => {
                out.push_str("}}");
                i += 1;
            }
            '%' if chars.get(i + 1) == Some(&'%') => {
                out.push('%');
                i += 2;
            }
            '%' => {
                // Skip flags/width/precision, keep the conversion letter
                let mut j = i + 1;
                while j < chars.len()
                    && (chars[j].is_ascii_digit() || matches!(chars[j], '-' | '+' | '.' | ' '))
                {
                    j += 1;
                }
                match chars.get(j) {
                    Some('s' | 'd' | 'i' | 'f' | 'x' | 'X' | 'u' | 'c') => {
                        out.push_str(&format!("{{{}}}", slot));
                        slot += 1;
                        i = j + 1;
                    }
                    Some(other) => {
                        ctx.warn(format!("printf: %{} is not supported", other));
                        out.push('%');
                        i += 1;
                    }
                    None => {
                        out.push('%');
                        i += 1;
                    }
                }
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    (out, slot)
}

/// printf's escape set (a superset shared with $'…' decoding)
fn decode_escapes(s: &str) -> String {
    crate::parser::word_parser::decode_ansi_c(s)
}

impl Translator for PrintfTranslator {
    fn name(&self) -> &'static str {
        "printf"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let format_word = match cmd.args.first() {
            Some(w) => w,
            None => {
                ctx.warn("printf: no format given");
                return "Write-Host -NoNewline ''".to_string();
            }
        };
        let format_text = match format_word.literal_text() {
            Some(t) => t,
            None => {
                ctx.warn("printf: dynamic format strings are not supported; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };

        let decoded = decode_escapes(&format_text);
        let (converted, slots) = convert_format(&decoded, ctx);
        let trailing_newline = converted.ends_with('\n');
        let body = if trailing_newline {
            converted[..converted.len() - 1].to_string()
        } else {
            converted
        };
        let quoted = format!("\"{}\"", ps_double_escape(&body));

        let args: Vec<String> = cmd.args[1..]
            .iter()
            .map(|w| translate_word(w, ctx))
            .collect();
        let expr = if slots == 0 || args.is_empty() {
            if slots > 0 {
                ctx.warn("printf: format expects arguments but none were given");
            }
            quoted
        } else {
            if args.len() > slots {
                ctx.warn("printf: extra arguments beyond the format are dropped");
            }
            format!("({} -f {})", quoted, args.join(", "))
        };

        if trailing_newline {
            format!("Write-Output {}", expr)
        } else {
            format!("Write-Host -NoNewline {}", expr)
        }
    }
}
