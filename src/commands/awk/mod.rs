// src/commands/awk/mod.rs
//
// awk is recognized as a restricted subset: field printing, NR/NF forms,
// and pattern guards. Anything outside the subset emits a commented
// placeholder with a warning, never a silent wrong translation.

use lazy_static::lazy_static;
use regex_lite::Regex;

use crate::ast::{SimpleCommand, Word};
use crate::commands::types::{placeholder, Translator};
use crate::transform::words::{ps_single_quote, quote_literal};
use crate::transform::TransformContext;

pub struct AwkTranslator;

lazy_static! {
    static ref PRINT_ALL: Regex = Regex::new(r"^\{\s*print\s*(\$0\s*)?\}$").unwrap();
    static ref PRINT_FIELDS: Regex =
        Regex::new(r"^\{\s*print\s+\$(\d+)(?:\s*,\s*\$(\d+))*\s*\}$").unwrap();
    static ref FIELD_LIST: Regex = Regex::new(r"\$(\d+)").unwrap();
    static ref PRINT_NF: Regex = Regex::new(r"^\{\s*print\s+NF\s*\}$").unwrap();
    static ref NR_EQUALS: Regex = Regex::new(r"^NR\s*==\s*(\d+)$").unwrap();
    static ref PATTERN_ONLY: Regex = Regex::new(r"^/(.*)/$").unwrap();
    static ref PATTERN_PRINT_FIELD: Regex =
        Regex::new(r"^/(.*)/\s*\{\s*print\s+\$(\d+)\s*\}$").unwrap();
}

struct AwkOptions {
    program: Option<String>,
    separator: Option<String>,
    files: Vec<Word>,
}

fn parse_awk_args(args: &[Word], ctx: &mut TransformContext) -> AwkOptions {
    let mut opts = AwkOptions {
        program: None,
        separator: None,
        files: Vec::new(),
    };
    let mut i = 0;
    while i < args.len() {
        let text = args[i].literal_text();
        match text.as_deref() {
            Some("-F") => {
                if i + 1 < args.len() {
                    i += 1;
                    opts.separator = args[i].literal_text();
                }
            }
            Some(t) if t.starts_with("-F") && t.len() > 2 => {
                opts.separator = Some(t[2..].to_string());
            }
            Some("-v") => {
                ctx.warn("awk: -v assignments are not supported; ignored");
                i += 1;
            }
            Some(t) if t.starts_with('-') && t.len() > 1 => {
                ctx.warn(format!("awk: flag '{}' not supported; ignored", t));
            }
            _ => {
                if opts.program.is_none() {
                    opts.program = text;
                } else {
                    opts.files.push(args[i].clone());
                }
            }
        }
        i += 1;
    }
    opts
}

impl Translator for AwkTranslator {
    fn name(&self) -> &'static str {
        "awk"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["gawk"]
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let opts = parse_awk_args(&cmd.args, ctx);
        let program = match &opts.program {
            Some(p) => p.trim().to_string(),
            None => {
                ctx.warn("awk: no program given; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };

        let split = split_expr(opts.separator.as_deref());
        let body = match emit_program(&program, &split) {
            Some(body) => body,
            None => {
                ctx.warn(format!("awk: program '{}' not translated", program));
                ctx.unsupported(program.clone());
                format!(
                    "ForEach-Object {{ $_ }} {}",
                    placeholder(&format!("awk program not translated: {}", program))
                )
            }
        };

        if opts.files.is_empty() {
            return body;
        }
        let files: Vec<String> = opts.files.iter().map(|f| quote_literal(f, ctx)).collect();
        format!("Get-Content {} | {}", files.join(","), body)
    }
}

/// The -split expression for the active field separator. awk's default
/// splits on runs of whitespace.
fn split_expr(separator: Option<&str>) -> String {
    match separator {
        Some(sep) => format!("-split {}", ps_single_quote(&regex_escape(sep))),
        None => "-split '\\s+'".to_string(),
    }
}

fn regex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn field_index_list(program: &str) -> Vec<usize> {
    FIELD_LIST
        .captures_iter(program)
        .filter_map(|c| c[1].parse::<usize>().ok())
        .collect()
}

fn emit_program(program: &str, split: &str) -> Option<String> {
    if PRINT_ALL.is_match(program) {
        return Some("ForEach-Object { $_ }".to_string());
    }
    if PRINT_NF.is_match(program) {
        return Some(format!("ForEach-Object {{ ($_ {}).Count }}", split));
    }
    if PRINT_FIELDS.is_match(program) {
        let fields = field_index_list(program);
        return Some(emit_field_print(&fields, split));
    }
    if let Some(caps) = NR_EQUALS.captures(program) {
        let n: usize = caps[1].parse().ok()?;
        return Some(format!("Select-Object -Skip {} -First 1", n.saturating_sub(1)));
    }
    if let Some(caps) = PATTERN_PRINT_FIELD.captures(program) {
        let pattern = ps_single_quote(&caps[1]);
        let field: usize = caps[2].parse().ok()?;
        let print = emit_field_print(&[field], split);
        return Some(format!("Where-Object {{ $_ -cmatch {} }} | {}", pattern, print));
    }
    if let Some(caps) = PATTERN_ONLY.captures(program) {
        let pattern = ps_single_quote(&caps[1]);
        return Some(format!("Where-Object {{ $_ -cmatch {} }}", pattern));
    }
    None
}

fn emit_field_print(fields: &[usize], split: &str) -> String {
    if fields.len() == 1 {
        let field = fields[0];
        if field == 0 {
            return "ForEach-Object { $_ }".to_string();
        }
        return format!("ForEach-Object {{ ($_ {})[{}] }}", split, field - 1);
    }
    let indexes: Vec<String> = fields
        .iter()
        .map(|f| f.saturating_sub(1).to_string())
        .collect();
    format!(
        "ForEach-Object {{ (($_ {})[{}]) -join ' ' }}",
        split,
        indexes.join(",")
    )
}
