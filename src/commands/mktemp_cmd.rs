// src/commands/mktemp_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct MktempTranslator;

impl Translator for MktempTranslator {
    fn name(&self) -> &'static str {
        "mktemp"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let directory = cmd
            .args
            .iter()
            .any(|w| matches!(w.literal_text().as_deref(), Some("-d") | Some("--directory")));
        if cmd
            .args
            .iter()
            .any(|w| w.literal_text().map(|t| !t.starts_with('-')).unwrap_or(true))
        {
            ctx.warn("mktemp: templates are ignored; a random temp name is used");
        }
        if directory {
            "(New-Item -ItemType Directory -Path (Join-Path $env:TEMP ([System.IO.Path]::GetRandomFileName()))).FullName"
                .to_string()
        } else {
            "[System.IO.Path]::GetTempFileName()".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_temp_file() {
        assert_eq!(
            transpile("mktemp", &opts()),
            "[System.IO.Path]::GetTempFileName()"
        );
    }

    #[test]
    fn test_temp_directory() {
        let out = transpile("mktemp -d", &opts());
        assert!(out.contains("New-Item -ItemType Directory"));
        assert!(out.contains("$env:TEMP"));
        assert!(out.ends_with(".FullName"));
    }
}
