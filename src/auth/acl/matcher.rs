//! Ant-style path patterns
//!
//! `?` matches one character except `/`, `*` matches within a single path
//! segment and `**` spans any number of segments. A `/**` suffix also
//! matches the bare prefix, so `/api/**` covers `/api` itself.

use crate::utils::error::{Result, SecurityError};
use regex::Regex;

/// Compiled Ant-style pattern
#[derive(Debug, Clone)]
pub struct AntPattern {
    pattern: String,
    regex: Regex,
}

impl AntPattern {
    /// Compile a pattern; it must be absolute (start with `/`)
    pub fn compile(pattern: &str) -> Result<Self> {
        if !pattern.starts_with('/') {
            return Err(SecurityError::config(format!(
                "Resource pattern must start with '/': {}",
                pattern
            )));
        }

        let regex = Regex::new(&translate(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl std::fmt::Display for AntPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    out.push('^');

    let mut i = 0;
    while i < chars.len() {
        let rest = &chars[i..];
        if rest.starts_with(&['/', '*', '*']) && matches!(rest.get(3).copied(), None | Some('/')) {
            out.push_str("(?:/.*)?");
            i += 3;
        } else if rest.starts_with(&['*', '*']) {
            out.push_str(".*");
            i += 2;
        } else {
            match chars[i] {
                '*' => out.push_str("[^/]*"),
                '?' => out.push_str("[^/]"),
                c => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
            }
            i += 1;
        }
    }

    out.push('$');
    out
}
