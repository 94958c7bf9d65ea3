//! Redirect Lowering
//!
//! PowerShell keeps `N>` / `N>>` / `N>&M` syntax but has no `<` operator.
//! Output redirects append to the translated command; input redirects
//! prepend a producing pipeline segment (`Get-Content file |` for `<`,
//! `( body ) |` for heredocs and here-strings).

use crate::ast::{Redirect, RedirectOp};
use crate::transform::context::TransformContext;
use crate::transform::words::translate_word;

/// Wrap a translated command with its lowered redirects
pub fn apply_redirects(
    command: String,
    redirects: &[Redirect],
    ctx: &mut TransformContext,
) -> String {
    if redirects.is_empty() {
        return command;
    }

    let mut prefixes: Vec<String> = Vec::new();
    let mut suffixes: Vec<String> = Vec::new();

    for redirect in redirects {
        if let Some(target_fd) = redirect.target_fd {
            // N>&M passes through verbatim; 2>&1 is the common case
            suffixes.push(format!("{}>&{}", redirect.fd, target_fd));
            continue;
        }
        match redirect.op {
            RedirectOp::In => {
                let target = translate_word(&redirect.target, ctx);
                prefixes.push(format!("Get-Content {} | ", target));
            }
            RedirectOp::HereString | RedirectOp::HereDoc => {
                let target = translate_word(&redirect.target, ctx);
                prefixes.push(format!("({}) | ", target));
            }
            RedirectOp::Out | RedirectOp::Append => {
                let op = if redirect.op == RedirectOp::Append {
                    ">>"
                } else {
                    ">"
                };
                let fd = if redirect.fd == 1 {
                    String::new()
                } else {
                    redirect.fd.to_string()
                };
                match redirect.target.unquoted_literal() {
                    Some("/dev/null") => suffixes.push(format!("{}{}$null", fd, op)),
                    Some("/dev/stdout") | Some("/dev/stderr") => {
                        suffixes.push(format!("{}{} CON", fd, op))
                    }
                    _ => {
                        let target = translate_word(&redirect.target, ctx);
                        suffixes.push(format!("{}{} {}", fd, op, target));
                    }
                }
            }
        }
    }

    let base = if command.is_empty() && !suffixes.is_empty() {
        // Bare redirect like `> file` creates/truncates the target
        "$null".to_string()
    } else {
        command
    };

    let mut out: String = prefixes.concat();
    out.push_str(&base);
    for suffix in suffixes {
        out.push(' ');
        out.push_str(&suffix);
    }
    out
}
