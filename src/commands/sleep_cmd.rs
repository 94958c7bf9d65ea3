// src/commands/sleep_cmd.rs
use crate::ast::SimpleCommand;
use crate::commands::types::Translator;
use crate::transform::TransformContext;

pub struct SleepTranslator;

/// Parse a sleep duration with optional s/m/h/d suffix into seconds
fn parse_duration(text: &str) -> Option<f64> {
    let (number, multiplier) = match text.chars().last() {
        Some('s') => (&text[..text.len() - 1], 1.0),
        Some('m') => (&text[..text.len() - 1], 60.0),
        Some('h') => (&text[..text.len() - 1], 3600.0),
        Some('d') => (&text[..text.len() - 1], 86400.0),
        _ => (text, 1.0),
    };
    number.parse::<f64>().ok().map(|n| n * multiplier)
}

impl Translator for SleepTranslator {
    fn name(&self) -> &'static str {
        "sleep"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let text = match cmd.args.first().and_then(|w| w.literal_text()) {
            Some(t) => t,
            None => {
                ctx.warn("sleep: missing duration");
                return "Start-Sleep -Seconds 1".to_string();
            }
        };
        match parse_duration(&text) {
            Some(seconds) if seconds.fract() == 0.0 => {
                format!("Start-Sleep -Seconds {}", seconds as u64)
            }
            Some(seconds) => {
                // 5.1 takes whole seconds; fall back to milliseconds
                format!("Start-Sleep -Milliseconds {}", (seconds * 1000.0).round() as u64)
            }
            None => {
                ctx.warn(format!("sleep: duration '{}' not understood", text));
                "Start-Sleep -Seconds 1".to_string()
            }
        }
    }
}
