//! sed Expression Parsing
//!
//! Recognizes the expression forms agents actually emit:
//! `s/PAT/REPL/FLAGS` (with `/`, `|`, or `#` delimiters), `/PAT/d`, `Nd`,
//! `/PAT/p`, `Np`, and `N,Mp`. Anything else is an error the translator
//! surfaces as a placeholder plus warning.

use lazy_static::lazy_static;
use regex_lite::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum SedExpr {
    Substitute(Substitution),
    DeleteLine(usize),
    DeletePattern(String),
    PrintLine(usize),
    PrintRange(usize, usize),
    PrintPattern(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
    pub global: bool,
    pub ignore_case: bool,
    pub print: bool,
}

lazy_static! {
    static ref DELETE_LINE: Regex = Regex::new(r"^(\d+)d$").unwrap();
    static ref PRINT_LINE: Regex = Regex::new(r"^(\d+)p$").unwrap();
    static ref PRINT_RANGE: Regex = Regex::new(r"^(\d+),(\d+)p$").unwrap();
}

pub fn parse_expr(text: &str) -> Result<SedExpr, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("empty sed expression".to_string());
    }

    if let Some(rest) = trimmed.strip_prefix('s') {
        return parse_substitution(rest).map(SedExpr::Substitute);
    }

    if let Some(caps) = DELETE_LINE.captures(trimmed) {
        let n = caps[1].parse().map_err(|_| "line number overflow")?;
        return Ok(SedExpr::DeleteLine(n));
    }
    if let Some(caps) = PRINT_LINE.captures(trimmed) {
        let n = caps[1].parse().map_err(|_| "line number overflow")?;
        return Ok(SedExpr::PrintLine(n));
    }
    if let Some(caps) = PRINT_RANGE.captures(trimmed) {
        let a = caps[1].parse().map_err(|_| "line number overflow")?;
        let b = caps[2].parse().map_err(|_| "line number overflow")?;
        return Ok(SedExpr::PrintRange(a, b));
    }

    // /PAT/d and /PAT/p with a slash-delimited address
    if let Some(rest) = trimmed.strip_prefix('/') {
        if let Some(pattern) = rest.strip_suffix("/d") {
            return Ok(SedExpr::DeletePattern(unescape_delimiter(pattern, '/')));
        }
        if let Some(pattern) = rest.strip_suffix("/p") {
            return Ok(SedExpr::PrintPattern(unescape_delimiter(pattern, '/')));
        }
    }

    Err(format!("unsupported sed expression '{}'", trimmed))
}

/// After the leading `s`: split pattern/replacement/flags on the chosen
/// delimiter, honoring backslash escapes.
fn parse_substitution(rest: &str) -> Result<Substitution, String> {
    let mut chars = rest.chars();
    let delimiter = match chars.next() {
        Some(d @ ('/' | '|' | '#')) => d,
        Some(d) => return Err(format!("unsupported sed delimiter '{}'", d)),
        None => return Err("truncated substitution".to_string()),
    };

    let mut fields: Vec<String> = vec![String::new()];
    let mut escaped = false;
    for c in chars {
        if escaped {
            if c != delimiter {
                fields.last_mut().unwrap().push('\\');
            }
            fields.last_mut().unwrap().push(c);
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        if c == delimiter {
            fields.push(String::new());
            continue;
        }
        fields.last_mut().unwrap().push(c);
    }
    if escaped {
        fields.last_mut().unwrap().push('\\');
    }

    if fields.len() < 2 {
        return Err("substitution is missing its replacement".to_string());
    }
    let pattern = fields[0].clone();
    let replacement = fields[1].clone();
    let flags = fields.get(2).cloned().unwrap_or_default();
    if pattern.is_empty() {
        return Err("empty substitution pattern".to_string());
    }

    let mut sub = Substitution {
        pattern,
        replacement,
        global: false,
        ignore_case: false,
        print: false,
    };
    for flag in flags.chars() {
        match flag {
            'g' => sub.global = true,
            'i' | 'I' => sub.ignore_case = true,
            'p' => sub.print = true,
            _ => return Err(format!("unsupported substitution flag '{}'", flag)),
        }
    }
    Ok(sub)
}

/// Drop backslashes that only escape the delimiter character
fn unescape_delimiter(s: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            if c != delimiter {
                out.push('\\');
            }
            out.push(c);
            escaped = false;
            continue;
        }
        if c == '\\' {
            escaped = true;
            continue;
        }
        out.push(c);
    }
    if escaped {
        out.push('\\');
    }
    out
}

/// Convert a sed replacement to .NET replacement syntax: `\1`..`\9` become
/// `$1`..`$9`, `&` becomes `$0`, and literal `$` doubles.
pub fn convert_replacement(replacement: &str) -> String {
    let chars: Vec<char> = replacement.chars().collect();
    let mut out = String::with_capacity(replacement.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' if i + 1 < chars.len() => {
                let next = chars[i + 1];
                if next.is_ascii_digit() {
                    out.push('$');
                    out.push(next);
                } else if next == '&' {
                    out.push('&');
                } else if next == '\\' {
                    out.push('\\');
                } else {
                    out.push(next);
                }
                i += 2;
            }
            '&' => {
                out.push_str("$0");
                i += 1;
            }
            '$' => {
                out.push_str("$$");
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_substitution() {
        let expr = parse_expr("s/foo/bar/").unwrap();
        match expr {
            SedExpr::Substitute(s) => {
                assert_eq!(s.pattern, "foo");
                assert_eq!(s.replacement, "bar");
                assert!(!s.global);
            }
            _ => panic!("expected substitution"),
        }
    }

    #[test]
    fn test_global_ignore_case_flags() {
        let expr = parse_expr("s/a/b/gi").unwrap();
        match expr {
            SedExpr::Substitute(s) => {
                assert!(s.global);
                assert!(s.ignore_case);
            }
            _ => panic!("expected substitution"),
        }
    }

    #[test]
    fn test_alternate_delimiters() {
        let expr = parse_expr("s|/usr/local|/opt|g").unwrap();
        match expr {
            SedExpr::Substitute(s) => {
                assert_eq!(s.pattern, "/usr/local");
                assert_eq!(s.replacement, "/opt");
            }
            _ => panic!("expected substitution"),
        }
        assert!(parse_expr("s#a#b#").is_ok());
    }

    #[test]
    fn test_escaped_delimiter_in_pattern() {
        let expr = parse_expr(r"s/a\/b/c/").unwrap();
        match expr {
            SedExpr::Substitute(s) => assert_eq!(s.pattern, "a/b"),
            _ => panic!("expected substitution"),
        }
    }

    #[test]
    fn test_delete_forms() {
        assert_eq!(parse_expr("3d").unwrap(), SedExpr::DeleteLine(3));
        assert_eq!(
            parse_expr("/^#/d").unwrap(),
            SedExpr::DeletePattern("^#".to_string())
        );
    }

    #[test]
    fn test_print_forms() {
        assert_eq!(parse_expr("5p").unwrap(), SedExpr::PrintLine(5));
        assert_eq!(parse_expr("2,4p").unwrap(), SedExpr::PrintRange(2, 4));
        assert_eq!(
            parse_expr("/error/p").unwrap(),
            SedExpr::PrintPattern("error".to_string())
        );
    }

    #[test]
    fn test_unsupported_expressions_error() {
        assert!(parse_expr("y/abc/xyz/").is_err());
        assert!(parse_expr("s/unterminated").is_err());
        assert!(parse_expr("").is_err());
    }

    #[test]
    fn test_convert_replacement() {
        assert_eq!(convert_replacement(r"[\1]"), "[$1]");
        assert_eq!(convert_replacement("<&>"), "<$0>");
        assert_eq!(convert_replacement(r"\&"), "&");
        assert_eq!(convert_replacement("$5"), "$$5");
    }
}
