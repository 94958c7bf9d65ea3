// src/commands/find/mod.rs
//
// find uses single-dash predicates rather than GNU flags, so argument
// parsing is bespoke. Native path is fd; the Get-ChildItem fallback ends in
// `Select-Object -ExpandProperty FullName` so output is one path per line,
// except when -delete or -exec replaces the tail.

use crate::ast::{SimpleCommand, Word};
use crate::commands::types::Translator;
use crate::transform::words::quote_literal;
use crate::transform::TransformContext;

pub struct FindTranslator;

/// Stand-in for `{}` while the -exec command goes through translation
const ITEM_MARKER: &str = "__find_item__";

#[derive(Default)]
struct FindOptions {
    roots: Vec<Word>,
    name: Option<Word>,
    type_filter: Option<char>,
    max_depth: Option<usize>,
    delete: bool,
    exec: Option<Vec<Word>>,
}

fn parse_find_args(args: &[Word], ctx: &mut TransformContext) -> FindOptions {
    let mut opts = FindOptions::default();
    let mut i = 0;
    while i < args.len() {
        let text = args[i].literal_text().unwrap_or_default();
        match text.as_str() {
            "-name" | "-iname" => {
                if i + 1 < args.len() {
                    opts.name = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "-type" => {
                if i + 1 < args.len() {
                    let t = args[i + 1].literal_text().unwrap_or_default();
                    opts.type_filter = t.chars().next();
                    i += 1;
                }
            }
            "-maxdepth" => {
                if i + 1 < args.len() {
                    opts.max_depth = args[i + 1]
                        .literal_text()
                        .and_then(|t| t.parse().ok());
                    i += 1;
                }
            }
            "-delete" => opts.delete = true,
            "-exec" => {
                let mut words = Vec::new();
                i += 1;
                while i < args.len() {
                    let t = args[i].literal_text().unwrap_or_default();
                    if t == ";" || t == "+" {
                        break;
                    }
                    words.push(args[i].clone());
                    i += 1;
                }
                opts.exec = Some(words);
            }
            t if t.starts_with('-') => {
                ctx.warn(format!("find: predicate '{}' not supported; ignored", t));
                // Skip a value operand when one follows
                if i + 1 < args.len()
                    && !args[i + 1]
                        .literal_text()
                        .map(|v| v.starts_with('-'))
                        .unwrap_or(false)
                {
                    i += 1;
                }
            }
            _ => opts.roots.push(args[i].clone()),
        }
        i += 1;
    }
    opts
}

impl Translator for FindTranslator {
    fn name(&self) -> &'static str {
        "find"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let opts = parse_find_args(&cmd.args, ctx);

        // fd has no -delete/-exec counterpart that preserves find semantics
        let native_ok = !opts.delete && opts.exec.is_none();
        if native_ok && ctx.use_native(ctx.tools.fd) {
            return translate_fd(&opts, ctx);
        }
        ctx.mark_fallback();
        translate_get_childitem(&opts, ctx)
    }
}

/// Native path: fd with hidden/ignored files included to match find's
/// list-everything default.
fn translate_fd(opts: &FindOptions, ctx: &mut TransformContext) -> String {
    let mut out = String::from("fd --hidden --no-ignore");
    match opts.type_filter {
        Some('f') => out.push_str(" --type f"),
        Some('d') => out.push_str(" --type d"),
        Some(other) => ctx.warn(format!("find: -type {} has no fd equivalent", other)),
        None => {}
    }
    if let Some(depth) = opts.max_depth {
        out.push_str(&format!(" --max-depth {}", depth));
    }
    match &opts.name {
        Some(pattern) => {
            out.push_str(" --glob ");
            out.push_str(&quote_literal(pattern, ctx));
        }
        None => out.push_str(" ."),
    }
    for root in &opts.roots {
        out.push(' ');
        out.push_str(&quote_literal(root, ctx));
    }
    out
}

fn translate_get_childitem(opts: &FindOptions, ctx: &mut TransformContext) -> String {
    let roots: Vec<String> = opts.roots.iter().map(|r| quote_literal(r, ctx)).collect();
    let path = if roots.is_empty() {
        ".".to_string()
    } else {
        roots.join(",")
    };

    let mut out = format!("Get-ChildItem -Path {} -Recurse", path);
    match opts.type_filter {
        Some('f') => out.push_str(" -File"),
        Some('d') => out.push_str(" -Directory"),
        _ => {}
    }
    if let Some(pattern) = &opts.name {
        out.push_str(" -Filter ");
        out.push_str(&quote_literal(pattern, ctx));
    }
    if let Some(depth) = opts.max_depth {
        out.push_str(&format!(" -Depth {}", depth.saturating_sub(1)));
    }

    if opts.delete {
        out.push_str(" | Remove-Item -Recurse -Force");
    } else if let Some(exec_words) = &opts.exec {
        out.push_str(&format!(
            " | ForEach-Object {{ {} }}",
            translate_exec(exec_words, ctx)
        ));
    } else {
        out.push_str(" | Select-Object -ExpandProperty FullName");
    }
    out
}

/// Translate the -exec command through the registry, substituting `$_` for
/// each `{}` operand.
fn translate_exec(words: &[Word], ctx: &mut TransformContext) -> String {
    if words.is_empty() {
        return "$_".to_string();
    }
    let substitute = |w: &Word| -> Word {
        if w.literal_text().as_deref() == Some("{}") {
            Word::literal(ITEM_MARKER, crate::ast::Quoting::Unquoted)
        } else {
            w.clone()
        }
    };
    let mut args: Vec<Word> = words[1..].iter().map(substitute).collect();
    if !words[1..]
        .iter()
        .any(|w| w.literal_text().as_deref() == Some("{}"))
    {
        args.push(Word::literal(ITEM_MARKER, crate::ast::Quoting::Unquoted));
    }
    let inner = SimpleCommand {
        assignments: Vec::new(),
        name: Some(substitute(&words[0])),
        args,
        redirects: Vec::new(),
    };
    crate::commands::types::substitute_item(crate::transform::translate_simple(&inner, ctx), ITEM_MARKER)
}

#[cfg(test)]
mod tests {
    use crate::tools::ToolAvailability;
    use crate::transpiler::{transpile, TranspileOptions};

    fn with_fd() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability {
                fd: true,
                ..ToolAvailability::none()
            }),
            ..Default::default()
        }
    }

    fn fallback() -> TranspileOptions {
        TranspileOptions {
            available_tools: Some(ToolAvailability::none()),
            ..Default::default()
        }
    }

    #[test]
    fn test_native_name_glob() {
        let out = transpile("find . -name \"*.ts\"", &with_fd());
        assert!(out.starts_with("fd --hidden --no-ignore"));
        assert!(out.contains("--glob '*.ts'"));
        assert!(out.ends_with("'.'"));
    }

    #[test]
    fn test_native_type_and_depth() {
        let out = transpile("find src -maxdepth 2 -type f", &with_fd());
        assert!(out.contains("--type f"));
        assert!(out.contains("--max-depth 2"));
    }

    #[test]
    fn test_fallback_lists_full_names() {
        let out = transpile("find . -name \"*.ts\"", &fallback());
        assert!(out.contains("Get-ChildItem -Path '.' -Recurse"));
        assert!(out.contains("-Filter '*.ts'"));
        assert!(out.contains("-ExpandProperty FullName"));
    }

    #[test]
    fn test_delete_replaces_tail() {
        let out = transpile("find . -name \"*.tmp\" -delete", &fallback());
        assert!(out.contains("Remove-Item -Recurse -Force"));
        assert!(!out.contains("ExpandProperty FullName"));
    }

    #[test]
    fn test_delete_forces_fallback_even_with_fd() {
        let out = transpile("find . -name \"*.tmp\" -delete", &with_fd());
        assert!(out.contains("Get-ChildItem"));
    }

    #[test]
    fn test_exec_translates_inner_command() {
        let out = transpile("find . -type f -exec rm {} \\;", &fallback());
        assert!(out.contains("ForEach-Object {"));
        assert!(out.contains("Remove-Item"));
        assert!(out.contains("$_"));
    }

    #[test]
    fn test_type_directory() {
        let out = transpile("find . -type d", &fallback());
        assert!(out.contains("-Directory"));
    }
}
