// src/commands/ls/mod.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct LsTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::short('l'),
    FlagSpec::new('a', "all"),
    FlagSpec::new('A', "almost-all"),
    FlagSpec::new('R', "recursive"),
    FlagSpec::short('t'),
    FlagSpec::short('S'),
    FlagSpec::new('r', "reverse"),
    FlagSpec::short('h'),
    FlagSpec::short('1'),
    FlagSpec::short('d'),
];

impl Translator for LsTranslator {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);
        if parsed.has("d") {
            ctx.warn("ls: -d not supported; listing contents");
        }

        let mut out = String::from("Get-ChildItem");
        if parsed.has("all") || parsed.has("almost-all") {
            out.push_str(" -Force");
        }
        if parsed.has("recursive") {
            out.push_str(" -Recurse");
        }
        if !parsed.positionals.is_empty() {
            let paths: Vec<String> = parsed
                .positionals
                .iter()
                .map(|p| translate_word(p, ctx))
                .collect();
            out.push_str(&format!(" -Path {}", paths.join(",")));
        }

        // Sort flags; -r alone reverses name order, otherwise it undoes the
        // -Descending that -t/-S imply
        let reverse = parsed.has("reverse");
        if parsed.has("t") {
            out.push_str(" | Sort-Object LastWriteTime");
            if !reverse {
                out.push_str(" -Descending");
            }
        } else if parsed.has("S") {
            out.push_str(" | Sort-Object Length");
            if !reverse {
                out.push_str(" -Descending");
            }
        } else if reverse {
            out.push_str(" | Sort-Object Name -Descending");
        }

        if parsed.has("l") {
            out.push_str(
                " | ForEach-Object { \"$($_.Mode) $($_.Length) $($_.LastWriteTime) $($_.Name)\" }",
            );
        } else {
            out.push_str(" | Select-Object -ExpandProperty Name");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_bare_ls_names_only() {
        let out = transpile("ls", &opts());
        assert_eq!(out, "Get-ChildItem | Select-Object -ExpandProperty Name");
    }

    #[test]
    fn test_long_listing_with_hidden() {
        let out = transpile("ls -la src/", &opts());
        assert!(out.contains("Get-ChildItem"));
        assert!(out.contains("-Force"));
        assert!(out.contains("-Path src/"));
        assert!(out.contains("$($_.Mode)"));
        assert!(out.contains("$($_.LastWriteTime)"));
        assert!(out.contains("$($_.Name)"));
    }

    #[test]
    fn test_recursive() {
        let out = transpile("ls -R", &opts());
        assert!(out.contains("-Recurse"));
    }

    #[test]
    fn test_sort_by_time() {
        let out = transpile("ls -t", &opts());
        assert!(out.contains("Sort-Object LastWriteTime -Descending"));
    }

    #[test]
    fn test_sort_by_time_reversed() {
        let out = transpile("ls -tr", &opts());
        assert!(out.contains("Sort-Object LastWriteTime"));
        assert!(!out.contains("-Descending"));
    }

    #[test]
    fn test_sort_by_size() {
        let out = transpile("ls -S", &opts());
        assert!(out.contains("Sort-Object Length -Descending"));
    }

    #[test]
    fn test_reverse_alone() {
        let out = transpile("ls -r", &opts());
        assert!(out.contains("Sort-Object Name -Descending"));
    }
}
