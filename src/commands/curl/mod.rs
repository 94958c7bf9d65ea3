// src/commands/curl/mod.rs
//
// curl and wget are dual-path: when curl.exe is on PATH the invocation
// passes through with its flags intact (curl.exe understands them natively);
// otherwise the request is rebuilt on Invoke-WebRequest/Invoke-RestMethod.

use crate::ast::SimpleCommand;
use crate::commands::args::{FlagSpec, ParsedArgs};
use crate::commands::types::Translator;
use crate::transform::words::{ps_single_quote, quote_literal, translate_word};
use crate::transform::TransformContext;

pub struct CurlTranslator;
pub struct WgetTranslator;

const CURL_SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('X', "request"),
    FlagSpec::with_value('H', "header"),
    FlagSpec::with_value('d', "data"),
    FlagSpec::long_value("data-raw"),
    FlagSpec::with_value('o', "output"),
    FlagSpec::with_value('u', "user"),
    FlagSpec::with_value('m', "max-time"),
    FlagSpec::new('s', "silent"),
    FlagSpec::new('L', "location"),
    FlagSpec::new('f', "fail"),
    FlagSpec::new('I', "head"),
    FlagSpec::new('k', "insecure"),
    FlagSpec::new('S', "show-error"),
];

impl Translator for CurlTranslator {
    fn name(&self) -> &'static str {
        "curl"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        if ctx.use_native(ctx.tools.curl) {
            // curl.exe speaks curl's own flag dialect; pass everything through
            let mut out = String::from("curl.exe");
            for arg in &cmd.args {
                out.push(' ');
                out.push_str(&translate_word(arg, ctx));
            }
            return out;
        }
        ctx.mark_fallback();
        translate_web_request(cmd, ctx)
    }
}

fn translate_web_request(cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
    let parsed = ParsedArgs::parse(&cmd.args, CURL_SPECS);

    let url = match parsed.positionals.first() {
        Some(u) => quote_literal(u, ctx),
        None => {
            ctx.warn("curl: no URL given; passing through");
            return crate::transform::passthrough(cmd, ctx);
        }
    };

    let body = parsed
        .value("data")
        .or_else(|| parsed.value("data-raw"))
        .cloned();
    let method = parsed
        .value_text("request")
        .map(|m| m.to_uppercase())
        .or_else(|| body.as_ref().map(|_| "POST".to_string()));

    if parsed.has("user") {
        ctx.warn("curl: -u credentials are not translated; add -Credential manually");
    }

    let headers = header_table(&parsed, ctx);

    // -I wants headers; -o wants a file; everything else wants the body,
    // which Invoke-RestMethod parses (JSON included) like agents expect
    let mut out = if parsed.has("head") {
        format!("Invoke-WebRequest -Uri {} -Method Head", url)
    } else if let Some(output) = parsed.value("output") {
        let file = quote_literal(output, ctx);
        format!("Invoke-WebRequest -Uri {} -OutFile {}", url, file)
    } else {
        format!("Invoke-RestMethod -Uri {}", url)
    };

    if let Some(method) = method {
        if !parsed.has("head") {
            out.push_str(&format!(" -Method {}", method));
        }
    }
    if let Some(headers) = headers {
        out.push_str(&format!(" -Headers {}", headers));
    }
    if let Some(body) = body {
        out.push_str(&format!(" -Body {}", quote_literal(&body, ctx)));
    }
    if let Some(timeout) = parsed.value_text("max-time") {
        out.push_str(&format!(" -TimeoutSec {}", timeout));
    }
    if parsed.has("head") {
        out.push_str(" | Select-Object -ExpandProperty Headers");
    }
    out
}

/// Build a PowerShell hashtable from -H 'Key: Value' occurrences
fn header_table(parsed: &ParsedArgs, ctx: &mut TransformContext) -> Option<String> {
    let headers = parsed.values("header");
    if headers.is_empty() {
        return None;
    }
    let mut entries = Vec::new();
    for header in headers {
        let text = match header.literal_text() {
            Some(t) => t,
            None => {
                ctx.warn("curl: dynamic header value passed through unparsed");
                continue;
            }
        };
        match text.split_once(':') {
            Some((key, value)) => entries.push(format!(
                "{}={}",
                ps_single_quote(key.trim()),
                ps_single_quote(value.trim())
            )),
            None => ctx.warn(format!("curl: malformed header '{}'", text)),
        }
    }
    if entries.is_empty() {
        None
    } else {
        Some(format!("@{{{}}}", entries.join("; ")))
    }
}

const WGET_SPECS: &[FlagSpec] = &[
    FlagSpec::with_value('O', "output-document"),
    FlagSpec::new('q', "quiet"),
    FlagSpec::new('c', "continue"),
];

impl Translator for WgetTranslator {
    fn name(&self) -> &'static str {
        "wget"
    }

    fn translate(&self, cmd: &SimpleCommand, ctx: &mut TransformContext) -> String {
        let parsed = ParsedArgs::parse(&cmd.args, WGET_SPECS);
        let url_word = match parsed.positionals.first() {
            Some(u) => u.clone(),
            None => {
                ctx.warn("wget: no URL given; passing through");
                return crate::transform::passthrough(cmd, ctx);
            }
        };
        let url = quote_literal(&url_word, ctx);
        let output = parsed.value_text("output-document");
        let to_stdout = output.as_deref() == Some("-");

        if ctx.use_native(ctx.tools.curl) {
            if to_stdout {
                return format!("curl.exe -L {}", url);
            }
            let file = output.unwrap_or_else(|| default_filename(&url_word));
            return format!("curl.exe -L -o {} {}", ps_single_quote(&file), url);
        }

        ctx.mark_fallback();
        if to_stdout {
            return format!(
                "Invoke-WebRequest -Uri {} | Select-Object -ExpandProperty Content",
                url
            );
        }
        let file = output.unwrap_or_else(|| default_filename(&url_word));
        format!(
            "Invoke-WebRequest -Uri {} -OutFile {}",
            url,
            ps_single_quote(&file)
        )
    }
}

/// wget saves to the URL's basename when -O is absent
fn default_filename(url: &crate::ast::Word) -> String {
    let text = url.literal_text().unwrap_or_default();
    let without_query = text.split(['?', '#']).next().unwrap_or("");
    let base = without_query.trim_end_matches('/').rsplit('/').next();
    match base {
        Some(b) if !b.is_empty() && !b.contains("//") && b.contains('.') => b.to_string(),
        Some(b) if !b.is_empty() && !b.contains("//") => b.to_string(),
        _ => "index.html".to_string(),
    }
}
