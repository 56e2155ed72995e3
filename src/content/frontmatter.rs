//! Front-matter parsing
//!
//! Grant files only use a narrow slice of YAML: flat `key: value` pairs and
//! simple lists introduced by a key with an empty value. Lines outside that
//! subset are ignored one at a time.

use indexmap::IndexMap;

use super::Author;

/// A single front-matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<String>),
    /// Structured `authors` entries of the multi-author schema
    Authors(Vec<Author>),
}

impl Value {
    /// Flatten the value into a single string
    pub fn to_text(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::Sequence(items) => items.join(", "),
            Value::Authors(authors) => authors
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::Authors(authors) => authors.is_empty(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

/// Ordered front-matter block. Keys keep the order they were first seen in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

/// A parsed file: its front-matter and the untouched text after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: FrontMatter,
    /// Everything after the closing `---`, byte for byte
    pub remainder: &'a str,
}

impl FrontMatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Insert a value. A key that already exists keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Split a file into front-matter and remainder.
    ///
    /// Returns `None` when the content does not open with a `---` line
    /// followed by a closing `---`. CRLF delimiters are accepted; the
    /// remainder keeps its original line endings.
    pub fn parse(content: &str) -> Option<Document<'_>> {
        let rest = content
            .strip_prefix("---\n")
            .or_else(|| content.strip_prefix("---\r\n"))?;
        let end_pos = rest.find("\n---")?;

        let block = &rest[..end_pos];
        let remainder = &rest[end_pos + 4..]; // Skip \n---

        Some(Document {
            front_matter: Self::parse_block(block),
            remainder,
        })
    }

    /// Parse the body of a front-matter block
    fn parse_block(block: &str) -> Self {
        let mut fields: IndexMap<String, Value> = IndexMap::new();
        // Key whose list is currently being filled by `- item` lines
        let mut open_list: Option<String> = None;

        for line in block.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }

            if let Some(item) = line.strip_prefix("  - ").or_else(|| line.strip_prefix("- ")) {
                if let Some(key) = &open_list {
                    if let Some(Value::Sequence(items)) = fields.get_mut(key) {
                        items.push(item.trim().to_string());
                    }
                }
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim().to_string();
                let value = strip_quotes(value.trim());

                if value.is_empty() {
                    fields.insert(key.clone(), Value::Sequence(Vec::new()));
                    open_list = Some(key);
                } else {
                    fields.insert(key, Value::Scalar(value.to_string()));
                    open_list = None;
                }
            }
        }

        Self { fields }
    }
}

/// Remove one matching pair of surrounding quotes. No escape processing.
/// A lone quote character strips to the empty string.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.starts_with(quote) && value.ends_with(quote) {
            return value.get(1..value.len().saturating_sub(1)).unwrap_or("");
        }
    }
    value
}
