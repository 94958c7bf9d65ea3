// src/commands/cut.rs
use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::{ps_single_quote, translate_word};
use crate::transform::TransformContext;

pub struct CutTranslator;

const SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('d', "delimiter"),
    FlagSpec::with_value('f', "fields"),
    FlagSpec::with_value('c', "characters"),
];

/// Parse `N`, `N,M`, or `N-M` into zero-based indexes
fn parse_field_list(list: &str) -> Option<Vec<usize>> {
    let mut indexes = Vec::new();
    for piece in list.split(',') {
        if let Some((a, b)) = piece.split_once('-') {
            let a: usize = a.trim().parse().ok()?;
            let b: usize = b.trim().parse().ok()?;
            if a == 0 || b < a {
                return None;
            }
            indexes.extend((a - 1)..=(b - 1));
        } else {
            let n: usize = piece.trim().parse().ok()?;
            if n == 0 {
                return None;
            }
            indexes.push(n - 1);
        }
    }
    Some(indexes)
}

impl Translator for CutTranslator {
    fn name(&self) -> &'static str {
        "cut"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, SPECS);

        let prefix = match parsed.positionals.first() {
            Some(file) => format!("Get-Content {} | ", translate_word(file, ctx)),
            None => String::new(),
        };

        if let Some(chars) = parsed.value_text("characters") {
            let body = match parse_field_list(&chars) {
                Some(indexes) if !indexes.is_empty() => {
                    let start = indexes[0];
                    let len = indexes.len();
                    format!(
                        "ForEach-Object {{ if ($_.Length -gt {0}) {{ $_.Substring({0}, [Math]::Min({1}, $_.Length - {0})) }} }}",
                        start, len
                    )
                }
                _ => {
                    ctx.warn(format!("cut: character list '{}' not understood", chars));
                    return crate::transform::passthrough(cmd, ctx);
                }
            };
            return format!("{}{}", prefix, body);
        }

        let fields = match parsed.value_text("fields") {
            Some(f) => f,
            None => {
                ctx.warn("cut: no field list given; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };
        let delimiter = parsed
            .value_text("delimiter")
            .unwrap_or_else(|| "\t".to_string());
        let split = if delimiter == "\t" {
            "\"`t\"".to_string()
        } else {
            ps_single_quote(&delimiter)
        };

        let body = match parse_field_list(&fields) {
            Some(indexes) if indexes.len() == 1 => {
                format!("ForEach-Object {{ ($_ -split {})[{}] }}", split, indexes[0])
            }
            Some(indexes) if !indexes.is_empty() => {
                let list: Vec<String> = indexes.iter().map(|i| i.to_string()).collect();
                format!(
                    "ForEach-Object {{ (($_ -split {})[{}]) -join {} }}",
                    split,
                    list.join(","),
                    split
                )
            }
            _ => {
                ctx.warn(format!("cut: field list '{}' not understood", fields));
                return crate::transform::passthrough(cmd, ctx);
            }
        };
        format!("{}{}", prefix, body)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::{transpile, TranspileOptions};

    fn opts() -> TranspileOptions {
        TranspileOptions::default()
    }

    #[test]
    fn test_single_field() {
        assert_eq!(
            transpile("cut -d: -f1 /etc/passwd", &opts()),
            "Get-Content /etc/passwd | ForEach-Object { ($_ -split ':')[0] }"
        );
    }

    #[test]
    fn test_multiple_fields_rejoin() {
        let out = transpile("cut -d, -f1,3", &opts());
        assert!(out.contains("[0,2]"));
        assert!(out.contains("-join ','"));
    }

    #[test]
    fn test_field_range() {
        let out = transpile("cut -d, -f2-4", &opts());
        assert!(out.contains("[1,2,3]"));
    }

    #[test]
    fn test_default_tab_delimiter() {
        let out = transpile("cut -f2", &opts());
        assert!(out.contains("-split \"`t\""));
    }

    #[test]
    fn test_character_range() {
        let out = transpile("cut -c1-8", &opts());
        assert!(out.contains("Substring(0"));
    }
}
