// src/commands/sudo_cmd.rs
//
// sudo and nohup both strip down to their wrapped command: elevation is a
// host policy question, and job control already comes from the & lowering.

use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct SudoTranslator;
pub struct NohupTranslator;

fn translate_wrapped(cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
    let mut words = cmd.args.clone();
    if words.is_empty() {
        return String::new();
    }
    let inner = SimpleCommand {
        assignments: Vec::new(),
        name: Some(words.remove(0)),
        args: words,
        redirects: Vec::new(),
    };
    crate::transform::translate_simple(&inner, ctx)
}

impl Translator for SudoTranslator {
    fn name(&self) -> &'static str {
        "sudo"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        ctx.warn("sudo: stripped; run the shell elevated if the command needs it");
        translate_wrapped(cmd, ctx)
    }
}

impl Translator for NohupTranslator {
    fn name(&self) -> &'static str {
        "nohup"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        ctx.warn("nohup: stripped; the session owns the process lifetime");
        translate_wrapped(cmd, ctx)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, transpile_with_meta, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_sudo_strips_with_warning() {
        let result = transpile_with_meta("sudo npm install -g tsc", &opts());
        assert_eq!(result.powershell, "npm install -g tsc");
        assert!(result.warnings.iter().any(|w| w.contains("sudo")));
    }

    #[test]
    fn test_sudo_translates_inner_command() {
        assert_eq!(
            transpile("sudo rm -rf dist", &opts()),
            "Remove-Item -Path 'dist' -Recurse -Force"
        );
    }

    #[test]
    fn test_nohup_with_background() {
        let out = transpile("nohup node server.js &", &opts());
        assert_eq!(out, "Start-Job -ScriptBlock { node server.js }");
    }
}
