//! crates/settings/src/parser.rs
//! Line-oriented reader for top-level `key: value` / `key = value` pairs.

use std::collections::BTreeMap;

use crate::error::SettingsError;

pub(crate) struct Parser<'a> {
    input: &'a str,
    origin: &'a str,
    line_number: usize,
}

impl<'a> Parser<'a> {
    pub(crate) const fn new(input: &'a str, origin: &'a str) -> Self {
        Self {
            input,
            origin,
            line_number: 0,
        }
    }

    pub(crate) fn parse(&mut self) -> Result<BTreeMap<String, String>, SettingsError> {
        let mut entries = BTreeMap::new();

        for line in self.input.lines() {
            self.line_number += 1;

            // Nested mappings and sequence items belong to collaborators we don't model.
            if line.starts_with([' ', '\t', '-']) && !is_document_marker(line) {
                continue;
            }

            let trimmed = line.trim();
            if trimmed.is_empty()
                || trimmed.starts_with('#')
                || trimmed.starts_with('%')
                || is_document_marker(trimmed)
            {
                continue;
            }

            let Some((key, raw_value)) = split_pair(trimmed) else {
                return Err(self.error("expected `key: value` or `key = value`"));
            };
            if key.is_empty() {
                return Err(self.error("missing key before separator"));
            }

            // A bare `key:` opens a nested block; `key: ""` is an explicit empty value.
            let Some(value) = self.clean_value(raw_value)? else {
                continue;
            };

            if entries.contains_key(key) {
                return Err(self.error(format!("duplicate key `{key}`")));
            }
            tracing::trace!(key, line = self.line_number, "parsed setting");
            entries.insert(key.to_owned(), value.to_owned());
        }

        Ok(entries)
    }

    /// Returns `None` for an unquoted empty value.
    fn clean_value<'v>(&self, raw: &'v str) -> Result<Option<&'v str>, SettingsError> {
        let raw = raw.trim();
        for quote in ['"', '\''] {
            if let Some(rest) = raw.strip_prefix(quote) {
                return rest
                    .find(quote)
                    .map(|end| Some(&rest[..end]))
                    .ok_or_else(|| self.error("unterminated quoted value"));
            }
        }
        let without_comment = raw
            .find(" #")
            .or_else(|| raw.find("\t#"))
            .map_or(raw, |start| &raw[..start])
            .trim_end();
        Ok((!without_comment.is_empty()).then_some(without_comment))
    }

    fn error(&self, message: impl Into<String>) -> SettingsError {
        SettingsError::Parse {
            origin: self.origin.to_owned(),
            line: self.line_number,
            message: message.into(),
        }
    }
}

fn is_document_marker(line: &str) -> bool {
    let line = line.trim_end();
    line == "---" || line == "..."
}

/// Splits at the first `:` or `=`, trimming the key.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let separator = line.find([':', '='])?;
    Some((line[..separator].trim(), &line[separator + 1..]))
}
