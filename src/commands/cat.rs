// src/commands/cat.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct CatTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('n', "number"),
    FlagSpec::new('A', "show-all"),
];

impl Translator for CatTranslator {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("show-all") {
            ctx.warn("cat: -A is not supported; emitting plain content");
        }

        let mut out = if parsed.positionals.is_empty() {
            // Pipe-segment form: identity over the incoming stream
            "ForEach-Object { $_ }".to_string()
        } else {
            let files: Vec<String> = parsed
                .positionals
                .iter()
                .map(|f| translate_word(f, ctx))
                .collect();
            format!("Get-Content {}", files.join(","))
        };

        if parsed.has("number") {
            out.push_str(
                " | ForEach-Object -Begin { $n = 0 } -Process { $n++; \"{0,6}`t{1}\" -f $n, $_ }",
            );
        }
        out
    }
}
