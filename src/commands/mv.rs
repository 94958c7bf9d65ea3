// src/commands/mv.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct MvTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('f', "force"),
    FlagSpec::new('v', "verbose"),
    FlagSpec::new('n', "no-clobber"),
];

impl Translator for MvTranslator {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.positionals.len() < 2 {
            ctx.warn("mv: expected source and destination");
            return crate::transform::passthrough(cmd, ctx);
        }
        let mut paths: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        let destination = paths.pop().unwrap_or_default();
        let mut out = format!(
            "Move-Item -Path {} -Destination {}",
            paths.join(","),
            destination
        );
        if parsed.has("force") {
            out.push_str(" -Force");
        }
        out
    }
}
