// src/commands/realpath_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct RealpathTranslator;
pub struct ReadlinkTranslator;

impl Translator for RealpathTranslator {
    fn name(&self) -> &'static str {
        "realpath"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        match cmd.args.iter().find(|w| {
            w.literal_text()
                .map(|t| !t.starts_with('-'))
                .unwrap_or(true)
        }) {
            Some(p) => format!("(Resolve-Path {}).Path", translate_word(p, ctx)),
            None => "(Resolve-Path .).Path".to_string(),
        }
    }
}

impl Translator for ReadlinkTranslator {
    fn name(&self) -> &'static str {
        "readlink"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let canonical = cmd
            .args
            .iter()
            .any(|w| matches!(w.literal_text().as_deref(), Some("-f") | Some("-e") | Some("-m")));
        let path = cmd.args.iter().find(|w| {
            w.literal_text()
                .map(|t| !t.starts_with('-'))
                .unwrap_or(true)
        });
        match path {
            Some(p) => {
                let path = translate_word(p, ctx);
                if canonical {
                    format!("(Resolve-Path {}).Path", path)
                } else {
                    format!("(Get-Item {}).Target", path)
                }
            }
            None => {
                ctx.warn("readlink: missing operand");
                crate::commands::types::placeholder("readlink")
            }
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
    fn test_realpath() {
        assert_eq!(
            transpile("realpath ./src", &opts()),
            "(Resolve-Path ./src).Path"
        );
    }

    #[test]
    fn test_readlink_canonicalizes() {
        assert_eq!(
            transpile("readlink -f ./link", &opts()),
            "(Resolve-Path ./link).Path"
        );
    }

    #[test]
    fn test_readlink_target() {
        assert_eq!(
            transpile("readlink current", &opts()),
            "(Get-Item current).Target"
        );
    }
}
