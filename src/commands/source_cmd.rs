// src/commands/source_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct SourceTranslator;

impl Translator for SourceTranslator {
    fn name(&self) -> &'static str {
        "source"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["."]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        match cmd.args.first() {
            Some(file) => {
                ctx.warn("source: dot-sourcing a bash script will not work unless the target is PowerShell");
                format!(". {}", translate_word(file, ctx))
            }
            None => {
                ctx.warn("source: missing file operand");
                crate::commands::types::placeholder("source")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile_with_meta, TranspileOptions};

    #[test]
    fn test_source_dot_sources_with_warning() {
        let result = transpile_with_meta("source ./env.ps1", &TranspileOptions::default());
        assert_eq!(result.powershell, ". ./env.ps1");
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_dot_alias() {
        let result = transpile_with_meta(". ./env.sh", &TranspileOptions::default());
        assert_eq!(result.powershell, ". ./env.sh");
    }
}
