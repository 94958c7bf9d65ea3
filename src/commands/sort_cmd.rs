// src/commands/sort_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct SortTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('r', "reverse"),
    FlagSpec::new('n', "numeric-sort"),
    FlagSpec::new('u', "unique"),
    FlagSpec::new('f', "ignore-case"),
    FlagSpec::with_value('k', "key"),
    FlagSpec::with_value('t', "field-separator"),
];

impl Translator for SortTranslator {
    fn name(&self) -> &'static str {
        "sort"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("key") || parsed.has("field-separator") {
            ctx.warn("sort: -k/-t field sorting is not supported; sorting whole lines");
        }

        let mut out = if parsed.positionals.is_empty() {
            String::new()
        } else {
            let files: Vec<String> = parsed
                .positionals
                .iter()
                .map(|f| translate_word(f, ctx))
                .collect();
            format!("Get-Content {} | ", files.join(","))
        };

        out.push_str("Sort-Object");
        if parsed.has("numeric-sort") {
            out.push_str(" { [double]$_ }");
        }
        if parsed.has("reverse") {
            out.push_str(" -Descending");
        }
        if parsed.has("unique") {
            out.push_str(" -Unique");
        }
        out
    }
}
