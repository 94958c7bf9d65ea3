// src/commands/lsof_cmd.rs
use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::ast::SimpleCommand;
use crate::commands::types::{placeholder, Translator};
use crate::transform::TransformContext;

pub struct LsofTranslator;

lazy_static! {
    /// -i:3000, -i :3000, -ti:3000, :3000, tcp:3000
    static ref PORT_FORM: Regex = Regex::new(r"^(?:tcp|udp)?:(\d+)$").unwrap();
}

impl Translator for LsofTranslator {
    fn name(&self) -> &'static str {
        "lsof"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut port: Option<String> = None;
        let mut pids_only = false;
        for arg in &cmd.args {
            let text = arg.literal_text().unwrap_or_default();
            if let Some(rest) = text.strip_prefix("-t") {
                pids_only = true;
                if let Some(caps) = PORT_FORM.captures(rest.trim_start_matches('i')) {
                    port = Some(caps[1].to_string());
                }
                continue;
            }
            if let Some(rest) = text.strip_prefix("-i") {
                if let Some(caps) = PORT_FORM.captures(rest) {
                    port = Some(caps[1].to_string());
                }
                continue;
            }
            if let Some(caps) = PORT_FORM.captures(&text) {
                port = Some(caps[1].to_string());
            }
        }

        match port {
            Some(port) => {
                let mut out = format!("Get-NetTCPConnection -LocalPort {}", port);
                if pids_only {
                    out.push_str(" | Select-Object -ExpandProperty OwningProcess -Unique");
                }
                out
            }
            None => {
                ctx.warn("lsof: only the port form (-i :PORT) is supported");
                placeholder("lsof: unsupported invocation")
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
    fn test_port_lookup() {
        assert_eq!(
            transpile("lsof -i :3000", &opts()),
            "Get-NetTCPConnection -LocalPort 3000"
        );
        assert_eq!(
            transpile("lsof -i:8080", &opts()),
            "Get-NetTCPConnection -LocalPort 8080"
        );
    }

    #[test]
    fn test_pids_only() {
        let out = transpile("lsof -ti:3000", &opts());
        assert!(out.contains("-ExpandProperty OwningProcess"));
    }

    #[test]
    fn test_unsupported_form_warns() {
        use crate::transpiler::transpile_with_meta;
        let result = transpile_with_meta("lsof /var/log", &opts());
        assert!(result.powershell.contains("<#"));
        assert!(!result.warnings.is_empty());
    }
}
