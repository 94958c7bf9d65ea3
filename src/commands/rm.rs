// src/commands/rm.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct RmTranslator;
pub struct RmdirTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('r', "recursive"),
    FlagSpec::short('R'),
    FlagSpec::new('f', "force"),
    FlagSpec::new('v', "verbose"),
    FlagSpec::new('i', "interactive"),
];

impl Translator for RmTranslator {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.positionals.is_empty() {
            ctx.warn("rm: missing operand");
            return crate::commands::types::placeholder("rm");
        }
        let paths: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        let mut out = format!("Remove-Item -Path {}", paths.join(","));
        if parsed.has("recursive") || parsed.has("R") {
            out.push_str(" -Recurse");
        }
        if parsed.has("force") {
            out.push_str(" -Force");
        }
        out
    }
}

impl Translator for RmdirTranslator {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, &[FlagSpec::long("ignore-fail-on-non-empty")]);
        if parsed.positionals.is_empty() {
            ctx.warn("rmdir: missing operand");
            return crate::commands::types::placeholder("rmdir");
        }
        let paths: Vec<String> = parsed
            .positionals
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        format!("Remove-Item -Path {}", paths.join(","))
    }
}
