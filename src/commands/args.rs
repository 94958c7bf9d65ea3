//! Shared GNU-Style Flag Parser
//!
//! Every translator parses its arguments through this module, driven by a
//! small per-translator flag-spec table. Handles `--long`, `--long=value`,
//! `--long value`, `-x`, combined `-xyz`, `-xVALUE` (when `-x` takes a
//! value), and `--` as end-of-flags. Unknown long flags are captured under
//! their raw name; unknown short letters are stored as boolean true under
//! the letter.

use indexmap::IndexMap;

use crate::ast::{Quoting, Word};

#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub short: Option<char>,
    pub long: Option<&'static str>,
    pub takes_value: bool,
}

impl FlagSpec {
    pub const fn short(short: char) -> Self {
        Self {
            short: Some(short),
            long: None,
            takes_value: false,
        }
    }

    pub const fn short_value(short: char) -> Self {
        Self {
            short: Some(short),
            long: None,
            takes_value: true,
        }
    }

    pub const fn new(short: char, long: &'static str) -> Self {
        Self {
            short: Some(short),
            long: Some(long),
            takes_value: false,
        }
    }

    pub const fn with_value(short: char, long: &'static str) -> Self {
        Self {
            short: Some(short),
            long: Some(long),
            takes_value: true,
        }
    }

    pub const fn long(long: &'static str) -> Self {
        Self {
            short: None,
            long: Some(long),
            takes_value: false,
        }
    }

    pub const fn long_value(long: &'static str) -> Self {
        Self {
            short: None,
            long: Some(long),
            takes_value: true,
        }
    }

    /// Canonical lookup key: the long name when present, else the letter
    fn key(&self) -> String {
        match self.long {
            Some(long) => long.to_string(),
            None => self.short.map(|c| c.to_string()).unwrap_or_default(),
        }
    }
}

/// Parsed arguments: flags in source order plus positional words. A flag
/// key maps to every value it was given (empty for boolean flags), so
/// repeatable options like `curl -H … -H …` survive.
#[derive(Debug, Default)]
pub struct ParsedArgs {
    flags: IndexMap<String, Vec<Word>>,
    pub positionals: Vec<Word>,
    /// Flags that matched no spec, in the raw form they appeared
    pub unknown: Vec<String>,
}

impl ParsedArgs {
    pub fn parse(args: &[Word], specs: &[FlagSpec]) -> Self {
        let mut parsed = ParsedArgs::default();
        let mut flags_done = false;

        let mut i = 0;
        while i < args.len() {
            let word = &args[i];
            i += 1;

            let text = match word.literal_text() {
                Some(t) if !flags_done && t.starts_with('-') && t != "-" => t,
                _ => {
                    parsed.positionals.push(word.clone());
                    continue;
                }
            };

            if text == "--" {
                flags_done = true;
                continue;
            }

            if let Some(body) = text.strip_prefix("--") {
                let (name, inline_value) = match body.split_once('=') {
                    Some((n, v)) => (n, Some(v.to_string())),
                    None => (body, None),
                };
                match specs.iter().find(|s| s.long == Some(name)) {
                    Some(spec) => {
                        let value = if let Some(v) = inline_value {
                            Some(Word::literal(v, Quoting::Unquoted))
                        } else if spec.takes_value && i < args.len() {
                            let v = args[i].clone();
                            i += 1;
                            Some(v)
                        } else {
                            None
                        };
                        parsed.insert(spec.key(), value);
                    }
                    None => {
                        parsed.unknown.push(format!("--{}", name));
                        let value = inline_value.map(|v| Word::literal(v, Quoting::Unquoted));
                        parsed.insert(name.to_string(), value);
                    }
                }
                continue;
            }

            // Short flags, possibly combined
            let letters: Vec<char> = text[1..].chars().collect();
            let mut j = 0;
            while j < letters.len() {
                let letter = letters[j];
                j += 1;
                match specs.iter().find(|s| s.short == Some(letter)) {
                    Some(spec) if spec.takes_value => {
                        let rest: String = letters[j..].iter().collect();
                        let value = if !rest.is_empty() {
                            Some(Word::literal(rest, Quoting::Unquoted))
                        } else if i < args.len() {
                            let v = args[i].clone();
                            i += 1;
                            Some(v)
                        } else {
                            None
                        };
                        parsed.insert(spec.key(), value);
                        break;
                    }
                    Some(spec) => {
                        parsed.insert(spec.key(), None);
                    }
                    None => {
                        parsed.unknown.push(format!("-{}", letter));
                        parsed.insert(letter.to_string(), None);
                    }
                }
            }
        }
        parsed
    }

    fn insert(&mut self, key: String, value: Option<Word>) {
        let entry = self.flags.entry(key).or_default();
        if let Some(value) = value {
            entry.push(value);
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    /// The last value given for a flag (later occurrences win, as with most
    /// GNU tools)
    pub fn value(&self, key: &str) -> Option<&Word> {
        self.flags.get(key).and_then(|v| v.last())
    }

    /// Every value given for a repeatable flag
    pub fn values(&self, key: &str) -> &[Word] {
        self.flags.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The flag value's literal text, when it has one
    pub fn value_text(&self, key: &str) -> Option<String> {
        self.value(key).and_then(|w| w.literal_text())
    }

    pub fn positional_texts(&self) -> Vec<String> {
        self.positionals
            .iter()
            .filter_map(|w| w.literal_text())
            .collect()
    }
}
