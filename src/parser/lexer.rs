//! Lexer for the Agent Bash Dialect
//!
//! Tokenizes input into a stream the parser consumes. Owns all quoting and
//! escape rules:
//! - Operators and delimiters
//! - Words (single/double/dollar-single quoting, nested command substitution)
//! - Redirects with file-descriptor prefixes
//! - Here-documents and here-strings
//! - Comments and line continuations
//!
//! The lexer never fails. Malformed input (unterminated quote, runaway
//! heredoc) is closed at end-of-input and the accumulated content is emitted;
//! invalid escape sequences pass through literally.

use crate::parser::word_parser::decode_ansi_c;

/// Token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Words, by quoting subtype
    Word,
    SingleQuoted,
    DoubleQuoted,
    DollarSingleQuoted,

    // Operators
    Pipe,       // |
    And,        // &&
    Or,         // ||
    Semi,       // ;
    Newline,
    Background, // &

    // Redirects
    RedirectOut,    // > (also N> and N>&M)
    RedirectAppend, // >>
    RedirectIn,     // <
    HereDoc,        // << / <<-
    HereString,     // <<<

    // Grouping
    LeftParen,
    RightParen,

    Eof,
}

/// A token produced by the lexer.
///
/// `fd` carries the source file descriptor for redirects; on a HereDoc token
/// it is overloaded as the expansion flag (0 = quoted delimiter, no
/// expansion; 1 = unquoted, expand). `target_fd` is present for N>&M
/// redirects.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub fd: Option<u8>,
    pub target_fd: Option<u8>,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            fd: None,
            target_fd: None,
        }
    }

    pub fn with_fd(mut self, fd: u8) -> Self {
        self.fd = Some(fd);
        self
    }

    pub fn with_target_fd(mut self, target_fd: u8) -> Self {
        self.target_fd = Some(target_fd);
        self
    }

    /// True for word-like tokens that become command words
    pub fn is_word(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Word
                | TokenKind::SingleQuoted
                | TokenKind::DoubleQuoted
                | TokenKind::DollarSingleQuoted
        )
    }
}

/// Characters that end an unquoted word
fn is_word_boundary(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | ';' | '&' | '|' | '(' | ')' | '<' | '>'
    )
}

/// Tokens after which a newline carries no information
fn is_separator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Newline
            | TokenKind::Semi
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Pipe
            | TokenKind::Background
            | TokenKind::LeftParen
    )
}

/// Heredoc registered at `<<` whose body is filled in at the next newline
#[derive(Debug, Clone)]
struct PendingHeredoc {
    delimiter: String,
    strip_tabs: bool,
    /// Index of the HereDoc token to patch
    token_index: usize,
}

/// Segment kinds observed while scanning one word run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegKind {
    Unquoted,
    Single,
    Double,
    DollarSingle,
}

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    pending_heredocs: Vec<PendingHeredoc>,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
            pending_heredocs: Vec::new(),
        }
    }

    /// Tokenize the entire input. Always succeeds and always ends with Eof.
    pub fn tokenize(mut self) -> Vec<Token> {
        while self.pos < self.input.len() {
            self.skip_blank();
            if self.pos >= self.input.len() {
                break;
            }
            self.next_token();
        }
        if !self.pending_heredocs.is_empty() {
            // Runaway heredoc: close at EOF with whatever accumulated
            self.read_heredoc_bodies();
        }
        self.tokens.push(Token::new(TokenKind::Eof, ""));
        self.tokens
    }

    fn current(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Skip spaces, tabs, carriage returns, and line continuations
    fn skip_blank(&mut self) {
        while let Some(c) = self.current() {
            match c {
                ' ' | '\t' | '\r' => self.pos += 1,
                '\\' if self.peek(1) == Some('\n') => self.pos += 2,
                _ => break,
            }
        }
    }

    fn next_token(&mut self) {
        let c0 = match self.current() {
            Some(c) => c,
            None => return,
        };
        let c1 = self.peek(1);

        match c0 {
            '#' => self.skip_comment(),
            '\n' => self.lex_newline(),
            '|' if c1 == Some('|') => {
                self.pos += 2;
                self.push(Token::new(TokenKind::Or, "||"));
            }
            '|' => {
                self.pos += 1;
                self.push(Token::new(TokenKind::Pipe, "|"));
            }
            '&' if c1 == Some('&') => {
                self.pos += 2;
                self.push(Token::new(TokenKind::And, "&&"));
            }
            '&' => {
                self.pos += 1;
                self.push(Token::new(TokenKind::Background, "&"));
            }
            ';' => {
                self.pos += 1;
                self.push(Token::new(TokenKind::Semi, ";"));
            }
            '(' => {
                self.pos += 1;
                self.push(Token::new(TokenKind::LeftParen, "("));
            }
            ')' => {
                self.pos += 1;
                self.push(Token::new(TokenKind::RightParen, ")"));
            }
            '<' | '>' => self.lex_redirect(1),
            c if c.is_ascii_digit() => match self.redirect_after_digits() {
                Some((fd, digits)) => {
                    self.pos += digits;
                    self.lex_redirect(fd);
                }
                None => self.lex_word(),
            },
            _ => self.lex_word(),
        }
    }

    /// If the cursor sits on digits immediately followed by a redirect
    /// operator, return (fd, digit count)
    fn redirect_after_digits(&self) -> Option<(u8, usize)> {
        let mut n = 0;
        while matches!(self.peek(n), Some(c) if c.is_ascii_digit()) {
            n += 1;
        }
        if n == 0 {
            return None;
        }
        match self.peek(n) {
            Some('>') | Some('<') => {
                let digits: String = self.input[self.pos..self.pos + n].iter().collect();
                digits.parse().ok().map(|fd| (fd, n))
            }
            _ => None,
        }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.current() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn lex_newline(&mut self) {
        self.pos += 1;
        if !self.pending_heredocs.is_empty() {
            self.read_heredoc_bodies();
        }
        let suppress = self
            .tokens
            .last()
            .map(|t| is_separator(t.kind))
            .unwrap_or(true);
        if !suppress {
            self.push(Token::new(TokenKind::Newline, "\n"));
        }
    }

    /// Lex a redirect operator at the cursor ('<' or '>'), with the given
    /// source fd. The target word is lexed and pushed as the very next token.
    fn lex_redirect(&mut self, default_fd: u8) {
        let c0 = self.current();
        let c1 = self.peek(1);
        let c2 = self.peek(2);

        if c0 == Some('<') && c1 == Some('<') && c2 == Some('<') {
            self.pos += 3;
            self.push(Token::new(TokenKind::HereString, "<<<").with_fd(0));
            self.lex_redirect_target();
            return;
        }
        if c0 == Some('<') && c1 == Some('<') {
            self.pos += 2;
            let strip_tabs = self.current() == Some('-');
            if strip_tabs {
                self.pos += 1;
            }
            self.lex_heredoc_open(strip_tabs);
            return;
        }
        if c0 == Some('<') {
            self.pos += 1;
            let fd = if default_fd == 1 { 0 } else { default_fd };
            self.push(Token::new(TokenKind::RedirectIn, "<").with_fd(fd));
            self.lex_redirect_target();
            return;
        }

        // '>' forms
        let append = c1 == Some('>');
        if append {
            self.pos += 2;
            self.push(Token::new(TokenKind::RedirectAppend, ">>").with_fd(default_fd));
            self.lex_redirect_target();
            return;
        }
        if c1 == Some('&') && matches!(c2, Some(c) if c.is_ascii_digit()) {
            // N>&M / >&M
            self.pos += 2;
            let mut digits = String::new();
            while let Some(c) = self.current() {
                if !c.is_ascii_digit() {
                    break;
                }
                digits.push(c);
                self.pos += 1;
            }
            let target: u8 = digits.parse().unwrap_or(1);
            self.push(
                Token::new(TokenKind::RedirectOut, ">")
                    .with_fd(default_fd)
                    .with_target_fd(target),
            );
            return;
        }
        self.pos += 1;
        self.push(Token::new(TokenKind::RedirectOut, ">").with_fd(default_fd));
        self.lex_redirect_target();
    }

    fn lex_redirect_target(&mut self) {
        self.skip_blank();
        if matches!(self.current(), Some(c) if !is_word_boundary(c)) {
            self.lex_word();
        }
        // Missing target: leave it to the parser to report
    }

    /// `<<` / `<<-` at the cursor (operator already consumed): read the
    /// delimiter inline and register a pending heredoc. The body is captured
    /// at the next newline.
    fn lex_heredoc_open(&mut self, strip_tabs: bool) {
        self.skip_blank();
        let mut delimiter = String::new();
        let mut quoted = false;
        match self.current() {
            Some(q @ ('\'' | '"')) => {
                quoted = true;
                self.pos += 1;
                while let Some(c) = self.current() {
                    if c == q {
                        self.pos += 1;
                        break;
                    }
                    delimiter.push(c);
                    self.pos += 1;
                }
            }
            _ => {
                while let Some(c) = self.current() {
                    if is_word_boundary(c) {
                        break;
                    }
                    if c == '\\' {
                        // \DELIM quotes the delimiter
                        quoted = true;
                        self.pos += 1;
                        continue;
                    }
                    delimiter.push(c);
                    self.pos += 1;
                }
            }
        }
        let flag = if quoted { 0 } else { 1 };
        self.push(Token::new(TokenKind::HereDoc, "").with_fd(flag));
        let token_index = self.tokens.len() - 1;
        self.pending_heredocs.push(PendingHeredoc {
            delimiter,
            strip_tabs,
            token_index,
        });
    }

    /// Consume pending heredoc bodies line-by-line. Tab-stripping applies
    /// only to delimiter matching, not to stored content. The trailing
    /// newline is trimmed from the body.
    fn read_heredoc_bodies(&mut self) {
        let pending = std::mem::take(&mut self.pending_heredocs);
        for ph in pending {
            let mut body = String::new();
            while self.pos < self.input.len() {
                let line_start = self.pos;
                while self.pos < self.input.len() && self.input[self.pos] != '\n' {
                    self.pos += 1;
                }
                let line: String = self.input[line_start..self.pos].iter().collect();
                let has_newline = self.pos < self.input.len();
                if has_newline {
                    self.pos += 1;
                }
                let candidate = if ph.strip_tabs {
                    line.trim_start_matches('\t')
                } else {
                    line.as_str()
                };
                if candidate == ph.delimiter {
                    break;
                }
                body.push_str(&line);
                if has_newline {
                    body.push('\n');
                }
            }
            if body.ends_with('\n') {
                body.pop();
            }
            self.tokens[ph.token_index].value = body;
        }
    }

    /// Read one word run: adjacent unquoted/quoted segments with no
    /// whitespace between them. A run that is exactly one quoted segment is
    /// emitted as the matching quoted token kind; anything else is a Word
    /// token carrying the raw source text for the parser's part scan.
    fn lex_word(&mut self) {
        let start = self.pos;
        let mut segments: Vec<(SegKind, usize, usize)> = Vec::new();
        let mut unquoted_run: Option<usize> = None;

        macro_rules! close_unquoted {
            () => {
                if let Some(s) = unquoted_run.take() {
                    segments.push((SegKind::Unquoted, s, self.pos));
                }
            };
        }

        while let Some(c) = self.current() {
            match c {
                '\'' => {
                    close_unquoted!();
                    let inner_start = self.pos + 1;
                    self.pos += 1;
                    while let Some(ch) = self.current() {
                        if ch == '\'' {
                            break;
                        }
                        self.pos += 1;
                    }
                    let inner_end = self.pos;
                    if self.current() == Some('\'') {
                        self.pos += 1;
                    }
                    segments.push((SegKind::Single, inner_start, inner_end));
                }
                '"' => {
                    close_unquoted!();
                    let inner_start = self.pos + 1;
                    self.pos += 1;
                    while let Some(ch) = self.current() {
                        if ch == '\\' && self.peek(1).is_some() {
                            self.pos += 2;
                            continue;
                        }
                        if ch == '"' {
                            break;
                        }
                        self.pos += 1;
                    }
                    let inner_end = self.pos;
                    if self.current() == Some('"') {
                        self.pos += 1;
                    }
                    segments.push((SegKind::Double, inner_start, inner_end));
                }
                '$' if self.peek(1) == Some('\'') => {
                    close_unquoted!();
                    let inner_start = self.pos + 2;
                    self.pos += 2;
                    while let Some(ch) = self.current() {
                        if ch == '\\' && self.peek(1).is_some() {
                            self.pos += 2;
                            continue;
                        }
                        if ch == '\'' {
                            break;
                        }
                        self.pos += 1;
                    }
                    let inner_end = self.pos;
                    if self.current() == Some('\'') {
                        self.pos += 1;
                    }
                    segments.push((SegKind::DollarSingle, inner_start, inner_end));
                }
                '$' if self.peek(1) == Some('(') => {
                    if unquoted_run.is_none() {
                        unquoted_run = Some(self.pos);
                    }
                    self.pos += 2;
                    self.consume_balanced_parens();
                }
                '$' if self.peek(1) == Some('{') => {
                    if unquoted_run.is_none() {
                        unquoted_run = Some(self.pos);
                    }
                    self.pos += 2;
                    while let Some(ch) = self.current() {
                        self.pos += 1;
                        if ch == '}' {
                            break;
                        }
                    }
                }
                '\\' => {
                    if unquoted_run.is_none() {
                        unquoted_run = Some(self.pos);
                    }
                    if self.peek(1) == Some('\n') {
                        // Line continuation inside a word: the raw payload
                        // keeps it; the part scan drops it
                        self.pos += 2;
                    } else {
                        self.pos += if self.peek(1).is_some() { 2 } else { 1 };
                    }
                }
                c if is_word_boundary(c) => break,
                _ => {
                    if unquoted_run.is_none() {
                        unquoted_run = Some(self.pos);
                    }
                    self.pos += 1;
                }
            }
        }
        close_unquoted!();

        let token = match segments.as_slice() {
            [(SegKind::Single, s, e)] => {
                let inner: String = self.input[*s..*e].iter().collect();
                Token::new(TokenKind::SingleQuoted, inner)
            }
            [(SegKind::Double, s, e)] => {
                let inner: String = self.input[*s..*e].iter().collect();
                Token::new(TokenKind::DoubleQuoted, inner)
            }
            [(SegKind::DollarSingle, s, e)] => {
                let inner: String = self.input[*s..*e].iter().collect();
                Token::new(TokenKind::DollarSingleQuoted, decode_ansi_c(&inner))
            }
            _ => {
                let raw: String = self.input[start..self.pos].iter().collect();
                Token::new(TokenKind::Word, raw)
            }
        };
        self.push(token);
    }

    /// After `$(`: consume until the balancing `)`. Quoted regions inside are
    /// passed through character-by-character so their parens don't affect
    /// depth.
    fn consume_balanced_parens(&mut self) {
        let mut depth: usize = 1;
        while let Some(c) = self.current() {
            match c {
                '\\' if self.peek(1).is_some() => self.pos += 2,
                '\'' => {
                    self.pos += 1;
                    while let Some(ch) = self.current() {
                        self.pos += 1;
                        if ch == '\'' {
                            break;
                        }
                    }
                }
                '"' => {
                    self.pos += 1;
                    while let Some(ch) = self.current() {
                        if ch == '\\' && self.peek(1).is_some() {
                            self.pos += 2;
                            continue;
                        }
                        self.pos += 1;
                        if ch == '"' {
                            break;
                        }
                    }
                }
                '(' => {
                    depth += 1;
                    self.pos += 1;
                }
                ')' => {
                    depth -= 1;
                    self.pos += 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => self.pos += 1,
            }
        }
        // Unterminated substitution closes at EOF
    }
}

/// Convenience wrapper
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_simple_command() {
        let tokens = tokenize("echo hello");
        assert_eq!(tokens.len(), 3); // echo, hello, EOF
        assert_eq!(tokens[0].kind, TokenKind::Word);
        assert_eq!(tokens[0].value, "echo");
        assert_eq!(tokens[1].value, "hello");
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("a | b && c || d ; e"),
            vec![
                TokenKind::Word,
                TokenKind::Pipe,
                TokenKind::Word,
                TokenKind::And,
                TokenKind::Word,
                TokenKind::Or,
                TokenKind::Word,
                TokenKind::Semi,
                TokenKind::Word,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_background() {
        let tokens = tokenize("node server.js &");
        assert_eq!(tokens[2].kind, TokenKind::Background);
    }

    #[test]
    fn test_single_quotes() {
        let tokens = tokenize("echo 'hello world'");
        assert_eq!(tokens[1].kind, TokenKind::SingleQuoted);
        assert_eq!(tokens[1].value, "hello world");
    }

    #[test]
    fn test_double_quotes_raw_content() {
        let tokens = tokenize(r#"echo "a \$b c""#);
        assert_eq!(tokens[1].kind, TokenKind::DoubleQuoted);
        // Escapes survive to the word-part scan
        assert_eq!(tokens[1].value, r"a \$b c");
    }

    #[test]
    fn test_dollar_single_decoded() {
        let tokens = tokenize(r"echo $'a\tb'");
        assert_eq!(tokens[1].kind, TokenKind::DollarSingleQuoted);
        assert_eq!(tokens[1].value, "a\tb");
    }

    #[test]
    fn test_mixed_segments_stay_one_word() {
        let tokens = tokenize(r#"echo foo'bar'"baz""#);
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[1].value, r#"foo'bar'"baz""#);
    }

    #[test]
    fn test_unterminated_quote_closes_at_eof() {
        let tokens = tokenize("echo 'oops");
        assert_eq!(tokens[1].kind, TokenKind::SingleQuoted);
        assert_eq!(tokens[1].value, "oops");
    }

    #[test]
    fn test_redirect_with_fd_prefix() {
        let tokens = tokenize("cmd 2>err.log");
        assert_eq!(tokens[1].kind, TokenKind::RedirectOut);
        assert_eq!(tokens[1].fd, Some(2));
        assert_eq!(tokens[2].kind, TokenKind::Word);
        assert_eq!(tokens[2].value, "err.log");
    }

    #[test]
    fn test_fd_to_fd_redirect() {
        let tokens = tokenize("cmd 2>&1");
        assert_eq!(tokens[1].kind, TokenKind::RedirectOut);
        assert_eq!(tokens[1].fd, Some(2));
        assert_eq!(tokens[1].target_fd, Some(1));
    }

    #[test]
    fn test_append_redirect() {
        let tokens = tokenize("echo hi >> log.txt");
        assert_eq!(tokens[2].kind, TokenKind::RedirectAppend);
        assert_eq!(tokens[2].fd, Some(1));
        assert_eq!(tokens[3].value, "log.txt");
    }

    #[test]
    fn test_input_redirect_default_fd() {
        let tokens = tokenize("wc -l < file.txt");
        let redirect = tokens.iter().find(|t| t.kind == TokenKind::RedirectIn);
        assert_eq!(redirect.unwrap().fd, Some(0));
    }

    #[test]
    fn test_here_string() {
        let tokens = tokenize(r#"grep x <<< "some text""#);
        let pos = tokens
            .iter()
            .position(|t| t.kind == TokenKind::HereString)
            .unwrap();
        assert_eq!(tokens[pos + 1].kind, TokenKind::DoubleQuoted);
    }

    #[test]
    fn test_heredoc_unquoted() {
        let tokens = tokenize("cat <<EOF\nhello $USER\nEOF\n");
        let hd = tokens.iter().find(|t| t.kind == TokenKind::HereDoc).unwrap();
        assert_eq!(hd.value, "hello $USER");
        assert_eq!(hd.fd, Some(1));
    }

    #[test]
    fn test_heredoc_quoted_delimiter() {
        let tokens = tokenize("cat <<'EOF'\nno $expansion\nEOF\n");
        let hd = tokens.iter().find(|t| t.kind == TokenKind::HereDoc).unwrap();
        assert_eq!(hd.value, "no $expansion");
        assert_eq!(hd.fd, Some(0));
    }

    #[test]
    fn test_heredoc_tab_strip_matching_only() {
        let tokens = tokenize("cat <<-EOF\n\tindented\n\tEOF\n");
        let hd = tokens.iter().find(|t| t.kind == TokenKind::HereDoc).unwrap();
        // Tab-stripping applies to delimiter matching, not stored content
        assert_eq!(hd.value, "\tindented");
    }

    #[test]
    fn test_runaway_heredoc_closes_at_eof() {
        let tokens = tokenize("cat <<EOF\nline one\nline two");
        let hd = tokens.iter().find(|t| t.kind == TokenKind::HereDoc).unwrap();
        assert_eq!(hd.value, "line one\nline two");
    }

    #[test]
    fn test_comment_skipped() {
        let tokens = tokenize("echo hi # a comment");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_hash_mid_word_is_literal() {
        let tokens = tokenize("echo a#b");
        assert_eq!(tokens[1].value, "a#b");
    }

    #[test]
    fn test_line_continuation() {
        let tokens = tokenize("echo a \\\n b");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Word, TokenKind::Word, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn test_newline_suppressed_after_separator() {
        let tokens = tokenize("a &&\nb");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Word, TokenKind::And, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn test_newline_separates_commands() {
        let tokens = tokenize("a\nb");
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Word, TokenKind::Newline, TokenKind::Word, TokenKind::Eof]
        );
    }

    #[test]
    fn test_command_substitution_kept_in_word() {
        let tokens = tokenize("echo $(ls -la | grep foo)");
        assert_eq!(tokens[1].kind, TokenKind::Word);
        assert_eq!(tokens[1].value, "$(ls -la | grep foo)");
    }

    #[test]
    fn test_nested_command_substitution() {
        let tokens = tokenize("echo $(basename $(pwd))");
        assert_eq!(tokens[1].value, "$(basename $(pwd))");
    }

    #[test]
    fn test_quoted_parens_inside_substitution() {
        let tokens = tokenize("echo $(echo ')' x)");
        assert_eq!(tokens[1].value, "$(echo ')' x)");
    }

    #[test]
    fn test_subshell_tokens() {
        assert_eq!(
            kinds("(cd /tmp)"),
            vec![
                TokenKind::LeftParen,
                TokenKind::Word,
                TokenKind::Word,
                TokenKind::RightParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_escaped_space_stays_in_word() {
        let tokens = tokenize(r"cat my\ file.txt");
        assert_eq!(tokens[1].value, r"my\ file.txt");
    }

    #[test]
    fn test_relex_round_trip_for_plain_tokens() {
        // Joining payloads of tokens that need no quoting recovery must
        // re-lex to the same token stream
        let input = "cat file | grep pat && echo done > out.txt ; next";
        let tokens = tokenize(input);
        let joined = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.value.clone())
            .collect::<Vec<_>>()
            .join(" ");
        let relexed = tokenize(&joined);
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            relexed.iter().map(|t| t.kind).collect::<Vec<_>>()
        );
    }
}
