// src/commands/kill_cmd.rs
use crate::ast::{SimpleCommand, Word};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct KillTranslator;
pub struct PkillTranslator;
pub struct PgrepTranslator;

/// kill's signal argument: -9, -KILL, -SIGKILL, -s SIG
fn split_signal(args: &[Word], ctx: &mut TransformContext) -> (bool, Vec<Word>) {
    let mut force = false;
    let mut rest = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let text = args[i].literal_text().unwrap_or_default();
        if text == "-s" {
            if i + 1 < args.len() {
                let sig = args[i + 1].literal_text().unwrap_or_default();
                force = matches!(sig.trim_start_matches("SIG"), "KILL" | "9");
                i += 1;
            }
        } else if let Some(sig) = text.strip_prefix('-') {
            if !sig.is_empty() {
                match sig.trim_start_matches("SIG") {
                    "9" | "KILL" => force = true,
                    "15" | "TERM" | "INT" | "2" | "HUP" | "1" => {}
                    other => ctx.warn(format!("kill: signal '{}' treated as terminate", other)),
                }
            }
        } else {
            rest.push(args[i].clone());
        }
        i += 1;
    }
    (force, rest)
}

impl Translator for KillTranslator {
    fn name(&self) -> &'static str {
        "kill"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let (force, pids) = split_signal(&cmd.args, ctx);
        if pids.is_empty() {
            ctx.warn("kill: no process id given");
            return crate::commands::types::placeholder("kill");
        }
        let ids: Vec<String> = pids
            .iter()
            .map(|w| w.literal_text().unwrap_or_else(|| "$PID".to_string()))
            .collect();
        let mut out = format!("Stop-Process -Id {}", ids.join(","));
        if force {
            out.push_str(" -Force");
        }
        out
    }
}

impl Translator for PkillTranslator {
    fn name(&self) -> &'static str {
        "pkill"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["killall"]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let mut args = cmd.args.clone();
        args.retain(|w| {
            if w.literal_text().as_deref() == Some("-f") {
                ctx.warn("pkill: -f matches process names only here");
                false
            } else {
                true
            }
        });
        let (force, names) = split_signal(&args, ctx);
        let name = match names.first() {
            Some(n) => quote_literal(n, ctx),
            None => {
                ctx.warn("pkill: no process name given");
                return crate::commands::types::placeholder("pkill");
            }
        };
        let mut out = format!("Stop-Process -Name {}", name);
        if force {
            out.push_str(" -Force");
        }
        out
    }
}

impl Translator for PgrepTranslator {
    fn name(&self) -> &'static str {
        "pgrep"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let name = cmd.args.iter().find(|w| {
            w.literal_text()
                .map(|t| !t.starts_with('-'))
                .unwrap_or(true)
        });
        match name {
            Some(n) => format!(
                "Get-Process -Name {} -ErrorAction SilentlyContinue | Select-Object -ExpandProperty Id",
                quote_literal(n, ctx)
            ),
            None => {
                ctx.warn("pgrep: no process name given");
                crate::commands::types::placeholder("pgrep")
            }
        }
    }
}
