// src/commands/ps_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct PsTranslator;

impl Translator for PsTranslator {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        // aux/-ef variants all want the full process table
        "Get-Process".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_ps() {
        let opts = TranspileOptions::default();
        assert_eq!(transpile("ps", &opts), "Get-Process");
        assert_eq!(transpile("ps aux", &opts), "Get-Process");
    }
}
