// src/commands/chmod.rs
//
// POSIX file modes have no Windows equivalent. +x clears the Zone.Identifier
// block that actually stops downloaded files from running; numeric modes
// surface as a commented icacls suggestion plus a warning.

use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::ast::SimpleCommand;
use crate::commands::types::{placeholder, Translator};
use crate::transform::words::translate_word;
use crate::transform::TransformContext;

pub struct ChmodTranslator;

lazy_static! {
    static ref NUMERIC_MODE: Regex = Regex::new(r"^[0-7]{3,4}$").unwrap();
    static ref EXEC_MODE: Regex = Regex::new(r"^[ugoa]*\+x$").unwrap();
}

impl Translator for ChmodTranslator {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut words = cmd.args.iter().filter(|w| {
            w.literal_text()
                .map(|t| t != "-R" && t != "--recursive")
                .unwrap_or(true)
        });
        let mode = match words.next().and_then(|w| w.literal_text()) {
            Some(m) => m,
            None => {
                ctx.warn("chmod: missing mode");
                return placeholder("chmod");
            }
        };
        let paths: Vec<String> = words.map(|w| translate_word(w, ctx)).collect();
        let path_list = paths.join(",");

        if EXEC_MODE.is_match(&mode) {
            return format!("Unblock-File -Path {}", path_list);
        }
        if NUMERIC_MODE.is_match(&mode) {
            ctx.warn(format!(
                "chmod: numeric mode {} has no direct equivalent on Windows",
                mode
            ));
            return placeholder(&format!(
                "chmod {} {}: consider icacls {} /grant <user>:(RX)",
                mode, path_list, path_list
            ));
        }
        ctx.warn(format!("chmod: symbolic mode '{}' is not translated", mode));
        placeholder(&format!("chmod {} {}", mode, path_list))
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, transpile_with_meta, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_plus_x_unblocks() {
        assert_eq!(
            transpile("chmod +x run.sh", &opts()),
            "Unblock-File -Path run.sh"
        );
        assert_eq!(
            transpile("chmod u+x run.sh", &opts()),
            "Unblock-File -Path run.sh"
        );
    }

    #[test]
    fn test_numeric_mode_is_commented() {
        let result = transpile_with_meta("chmod 755 deploy.sh", &opts());
        assert!(result.powershell.starts_with("<#"));
        assert!(result.powershell.contains("icacls"));
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_other_symbolic_mode_warns() {
        let result = transpile_with_meta("chmod g-w shared.txt", &opts());
        assert!(result.powershell.contains("<#"));
        assert!(!result.warnings.is_empty());
    }
}
