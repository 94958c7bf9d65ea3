// src/commands/uniq.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct UniqTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::new('c', "count"),
    FlagSpec::new('d', "repeated"),
    FlagSpec::new('i', "ignore-case"),
];

impl Translator for UniqTranslator {
    fn name(&self) -> &'static str {
        "uniq"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);

        let prefix = match parsed.positionals.first() {
            Some(file) => format!("Get-Content {} | ", translate_word(file, ctx)),
            None => String::new(),
        };

        // Group-Object counts across the whole stream, which matches the
        // usual `sort | uniq -c` usage
        let body = if parsed.has("count") {
            "Group-Object | ForEach-Object { \"{0,7} {1}\" -f $_.Count, $_.Name }"
        } else if parsed.has("repeated") {
            "Group-Object | Where-Object { $_.Count -gt 1 } | ForEach-Object { $_.Name }"
        } else {
            "Get-Unique"
        };
        format!("{}{}", prefix, body)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_plain_uniq() {
        assert_eq!(transpile("sort f.txt | uniq", &opts()), "Get-Content f.txt | Sort-Object | Get-Unique");
    }

    #[test]
    fn test_count() {
        let out = transpile("sort | uniq -c", &opts());
        assert!(out.contains("Group-Object"));
        assert!(out.contains("$_.Count, $_.Name"));
    }

    #[test]
    fn test_repeated_only() {
        let out = transpile("uniq -d", &opts());
        assert!(out.contains("Where-Object { $_.Count -gt 1 }"));
    }
}
