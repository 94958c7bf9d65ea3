// src/commands/du_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct DuTranslator;
pub struct DfTranslator;

const DU_SPECS: &[FlagSpec] = &[
    FlagSpec::new('h', "human-readable"),
    FlagSpec::new('s', "summarize"),
    FlagSpec::new('a', "all"),
    FlagSpec::with_value('d', "max-depth"),
];

impl Translator for DuTranslator {
    fn name(&self) -> &'static str {
        "du"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, DU_SPECS);
        let path = match parsed.positionals.first() {
            Some(p) => translate_word(p, ctx),
            None => ".".to_string(),
        };
        let mut out = format!(
            "Get-ChildItem -Path {} -Recurse -File | Measure-Object -Property Length -Sum",
            path
        );
        if parsed.has("human-readable") {
            out.push_str(" | ForEach-Object { \"{0:N1} MB\" -f ($_.Sum / 1MB) }");
        } else {
            // du reports 1K blocks
            out.push_str(" | ForEach-Object { [math]::Ceiling($_.Sum / 1KB) }");
        }
        out
    }
}

impl Translator for DfTranslator {
    fn name(&self) -> &'static str {
        "df"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        "Get-PSDrive -PSProvider FileSystem".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_du_summarizes_bytes() {
        let out = transpile("du -s node_modules", &opts());
        assert!(out.contains("Get-ChildItem -Path node_modules -Recurse -File"));
        assert!(out.contains("Measure-Object -Property Length -Sum"));
    }

    #[test]
    fn test_du_human_readable() {
        let out = transpile("du -sh .", &opts());
        assert!(out.contains("1MB"));
    }

    #[test]
    fn test_df() {
        assert_eq!(
            transpile("df -h", &opts()),
            "Get-PSDrive -PSProvider FileSystem"
        );
    }
}
