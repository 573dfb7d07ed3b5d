//! Emoji glyph to `:name:` substitution.
//!
//! The table is built from the Unicode emoji data shipped with the
//! [`emojis`] crate. Names are CLDR short names folded to lowercase snake
//! case, so 😀 becomes `:grinning_face:` and 👍🏽 becomes
//! `:thumbs_up_medium_skin_tone:`.

use std::collections::{HashMap, HashSet};

/// Read-only mapping from emoji glyphs to canonical name tokens.
#[derive(Debug, Clone, Default)]
pub struct EmojiTable {
    names: HashMap<String, String>,
    first_chars: HashSet<char>,
    max_len: usize,
}

impl EmojiTable {
    /// Creates an empty table that leaves every glyph unchanged.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the table from the full Unicode emoji set, including
    /// skin-tone variants and unqualified forms without `U+FE0F`.
    pub fn unicode() -> Self {
        let mut table = Self::empty();

        for emoji in emojis::iter() {
            table.insert(emoji.as_str(), &canonical_name(emoji.name()));
            if let Some(tones) = emoji.skin_tones() {
                for toned in tones {
                    table.insert(toned.as_str(), &canonical_name(toned.name()));
                }
            }
        }

        // Unqualified forms go in last so they never shadow a qualified entry.
        let unqualified: Vec<(String, String)> = table
            .names
            .iter()
            .filter(|(glyph, _)| glyph.contains('\u{FE0F}'))
            .map(|(glyph, name)| (glyph.replace('\u{FE0F}', ""), name.clone()))
            .filter(|(glyph, _)| !glyph.is_empty() && !glyph.is_ascii())
            .collect();
        for (glyph, name) in unqualified {
            if !table.names.contains_key(&glyph) {
                table.insert(&glyph, &name);
            }
        }

        tracing::debug!(entries = table.len(), "built emoji table");
        table
    }

    /// Adds a glyph with its name (without the surrounding colons).
    pub fn insert(&mut self, glyph: &str, name: &str) {
        let Some(first) = glyph.chars().next() else {
            return;
        };
        self.first_chars.insert(first);
        self.max_len = self.max_len.max(glyph.len());
        self.names
            .entry(glyph.to_string())
            .or_insert_with(|| name.to_string());
    }

    /// Looks up the name of a single glyph.
    pub fn name(&self, glyph: &str) -> Option<&str> {
        self.names.get(glyph).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Replaces every known glyph with `:name:`, longest match first.
    ///
    /// # Example
    ///
    /// ```
    /// use chatstats::analysis::EmojiTable;
    ///
    /// let table = EmojiTable::unicode();
    /// assert_eq!(table.demojize("so happy 😀"), "so happy :grinning_face:");
    /// ```
    pub fn demojize(&self, text: &str) -> String {
        if self.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            match self.longest_match(rest) {
                Some((len, name)) => {
                    out.push(':');
                    out.push_str(name);
                    out.push(':');
                    rest = &rest[len..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        out
    }

    fn longest_match(&self, text: &str) -> Option<(usize, &str)> {
        let first = text.chars().next()?;
        if !self.first_chars.contains(&first) {
            return None;
        }

        let limit = self.max_len.min(text.len());
        let mut best = None;
        for (i, c) in text.char_indices() {
            let end = i + c.len_utf8();
            if end > limit {
                break;
            }
            if let Some(name) = self.name(&text[..end]) {
                best = Some((end, name));
            }
        }
        best
    }
}

/// Folds a CLDR name like `flag: United States` into `flag_united_states`.
///
/// Letters and digits are lowercased, hyphens kept, spaces, colons and
/// commas become a single underscore, `#` and `*` are spelled out
/// (`keycap: #` is `keycap_number_sign`), anything else is dropped.
pub fn canonical_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        let spelled = match c {
            '#' => Some("number_sign"),
            '*' => Some("asterisk"),
            _ => None,
        };
        if let Some(word) = spelled {
            if !out.is_empty() {
                out.push('_');
            }
            out.push_str(word);
            pending_sep = true;
        } else if c.is_alphanumeric() || c == '-' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == ':' || c == ',' || c == '_' {
            pending_sep = true;
        }
    }

    out
}
