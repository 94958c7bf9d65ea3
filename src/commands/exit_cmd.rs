// src/commands/exit_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct ExitTranslator;

impl Translator for ExitTranslator {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn translate(&self, cmd: &SimpleCommand, _ctx: &mut TransformContext) -> String {
        match cmd.args.first().and_then(|w| w.literal_text()) {
            Some(code) => format!("exit {}", code),
            None => "exit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    #[test]
    fn test_exit() {
        let opts = TranspileOptions::default();
        assert_eq!(transpile("exit", &opts), "exit");
        assert_eq!(transpile("exit 1", &opts), "exit 1");
    }
}
