// src/commands/whoami_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct WhoamiTranslator;

impl Translator for WhoamiTranslator {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn translate(&self, _cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        "$env:USERNAME".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_whoami() {
        assert_eq!(transpile("whoami", &TranspileOptions::default()), "$env:USERNAME");
    }
}
