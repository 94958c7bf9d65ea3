// src/commands/export_cmd.rs
use crate::ast::{SimpleCommand, Word, WordPart};
use crate::commands::types::{placeholder, Translator};
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct ExportTranslator;
pub struct UnsetTranslator;
pub struct EnvTranslator;

/// Split a NAME=value argument word at the first `=` inside its leading
/// literal part.
fn split_assignment_word(word: &Word) -> Option<(String, Word)> {
    let first = word.parts.first()?;
    let (text, quoting) = match first {
        WordPart::Literal { value, quoting } => (value.clone(), *quoting),
        _ => return None,
    };
    let eq = text.find('=')?;
    let name = text[..eq].to_string();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }

    let mut parts = Vec::new();
    let rest = &text[eq + 1..];
    if !rest.is_empty() {
        parts.push(WordPart::Literal {
            value: rest.to_string(),
            quoting,
        });
    }
    parts.extend(word.parts[1..].iter().cloned());
    Some((name, Word::new(parts)))
}

impl Translator for ExportTranslator {
    fn name(&self) -> &'static str {
        "export"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        if cmd.args.is_empty() {
            return "Get-ChildItem Env:".to_string();
        }
        let mut statements = Vec::new();
        for arg in &cmd.args {
            match split_assignment_word(arg) {
                Some((name, value)) => {
                    statements.push(format!("$env:{} = {}", name, translate_word(&value, ctx)));
                }
                None => {
                    // `export NAME` only marks an existing variable; every
                    // $env: variable is already visible to child processes
                    let name = arg.literal_text().unwrap_or_default();
                    statements.push(placeholder(&format!("export {}", name)));
                }
            }
        }
        statements.join("; ")
    }
}

impl Translator for UnsetTranslator {
    fn name(&self) -> &'static str {
        "unset"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut statements = Vec::new();
        for arg in &cmd.args {
            match arg.literal_text() {
                Some(name) if !name.starts_with('-') => statements.push(format!(
                    "Remove-Item Env:{} -ErrorAction SilentlyContinue",
                    name
                )),
                _ => ctx.warn("unset: only plain variable names are supported"),
            }
        }
        if statements.is_empty() {
            return placeholder("unset");
        }
        statements.join("; ")
    }
}

impl Translator for EnvTranslator {
    fn name(&self) -> &'static str {
        "env"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        if cmd.args.is_empty() {
            return "Get-ChildItem Env:".to_string();
        }

        // env VAR=val … command args…
        let mut assignments = Vec::new();
        let mut rest = Vec::new();
        for (index, arg) in cmd.args.iter().enumerate() {
            if rest.is_empty() {
                if let Some(t) = arg.literal_text() {
                    if t == "-i" {
                        ctx.warn("env: -i (clean environment) is not supported; ignored");
                        continue;
                    }
                }
                if let Some((name, value)) = split_assignment_word(arg) {
                    assignments.push(format!("$env:{} = {}", name, translate_word(&value, ctx)));
                    continue;
                }
            }
            rest.extend(cmd.args[index..].iter().cloned());
            break;
        }

        if rest.is_empty() {
            return if assignments.is_empty() {
                "Get-ChildItem Env:".to_string()
            } else {
                assignments.join("; ")
            };
        }

        let inner = SimpleCommand {
            assignments: Vec::new(),
            name: Some(rest[0].clone()),
            args: rest[1..].to_vec(),
            redirects: Vec::new(),
        };
        let command = crate::transform::translate_simple(&inner, ctx);
        if assignments.is_empty() {
            command
        } else {
            format!("{}; {}", assignments.join("; "), command)
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
    fn test_export_assignment() {
        assert_eq!(
            transpile("export NODE_ENV=production", &opts()),
            "$env:NODE_ENV = production"
        );
    }

    #[test]
    fn test_export_quoted_value() {
        assert_eq!(
            transpile("export MSG=\"hello world\"", &opts()),
            "$env:MSG = \"hello world\""
        );
    }

    #[test]
    fn test_export_with_variable_value() {
        assert_eq!(
            transpile("export PATH=\"$PATH:/usr/local/bin\"", &opts()),
            "$env:PATH = \"$env:PATH:/usr/local/bin\""
        );
    }

    #[test]
    fn test_export_bare_name_is_comment() {
        let out = transpile("export EDITOR", &opts());
        assert!(out.contains("<#"));
    }

    #[test]
    fn test_unset() {
        assert_eq!(
            transpile("unset TOKEN", &opts()),
            "Remove-Item Env:TOKEN -ErrorAction SilentlyContinue"
        );
    }

    #[test]
    fn test_env_lists() {
        assert_eq!(transpile("env", &opts()), "Get-ChildItem Env:");
    }

    #[test]
    fn test_env_with_assignment_and_command() {
        let out = transpile("env NODE_ENV=test npm test", &opts());
        assert_eq!(out, "$env:NODE_ENV = test; npm test");
    }
}
