// src/commands/basename.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::{ps_single_quote, translate_word};
use crate::transform::TransformContext;

pub struct BasenameTranslator;

fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

impl Translator for BasenameTranslator {
    fn name(&self) -> &'static str {
        "basename"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let path = match cmd.args.first() {
            Some(p) => translate_word(p, ctx),
            None => {
                ctx.warn("basename: missing operand");
                return crate::commands::types::placeholder("basename");
            }
        };
        match cmd.args.get(1).and_then(|w| w.literal_text()) {
            Some(suffix) => format!(
                "(Split-Path -Leaf {}) -replace {}, ''",
                path,
                ps_single_quote(&format!("{}$", regex_escape(&suffix)))
            ),
            None => format!("Split-Path -Leaf {}", path),
        }
    }
}
