// src/commands/archive_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct ZipTranslator;
pub struct UnzipTranslator;

const ZIP_SPECS: &[FlagSpec] = &[
    FlagSpec::new('r', "recurse-paths"),
    FlagSpec::new('q', "quiet"),
];

impl Translator for ZipTranslator {
    fn name(&self) -> &'static str {
        "zip"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, ZIP_SPECS);
        if parsed.positionals.len() < 2 {
            ctx.warn("zip: expected archive name and inputs");
            return crate::transform::passthrough(cmd, ctx);
        }
        let archive = quote_literal(&parsed.positionals[0], ctx);
        let sources: Vec<String> = parsed.positionals[1..]
            .iter()
            .map(|p| quote_literal(p, ctx))
            .collect();
        format!(
            "Compress-Archive -Path {} -DestinationPath {} -Force",
            sources.join(","),
            archive
        )
    }
}

const UNZIP_SPECS: &[FlagSpec] = &[
    FlagSpec::short_value('d'),
    FlagSpec::new('o', "overwrite"),
    FlagSpec::new('q', "quiet"),
    FlagSpec::new('l', "list"),
];

impl Translator for UnzipTranslator {
    fn name(&self) -> &'static str {
        "unzip"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, UNZIP_SPECS);
        let archive = match parsed.positionals.first() {
            Some(a) => quote_literal(a, ctx),
            None => {
                ctx.warn("unzip: missing archive operand");
                return crate::commands::types::placeholder("unzip");
            }
        };
        if parsed.has("list") {
            // Listing without extraction
            return format!(
                "[System.IO.Compression.ZipFile]::OpenRead((Resolve-Path {}).Path).Entries | Select-Object -ExpandProperty FullName",
                archive
            );
        }
        let destination = parsed
            .value("d")
            .map(|w| quote_literal(w, ctx))
            .unwrap_or_else(|| "'.'".to_string());
        let mut out = format!(
            "Expand-Archive -Path {} -DestinationPath {}",
            archive, destination
        );
        if parsed.has("overwrite") {
            out.push_str(" -Force");
        }
        out
    }
}
