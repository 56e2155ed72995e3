//! Whole-document migration: parse, convert, write

use super::{convert, Conversion, FrontMatter, SkipReason, Value};

/// What happened to one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    /// The text has no `---` front-matter block
    NoFrontMatter,
    /// Front-matter was found but nothing needed migrating
    Skipped(SkipReason),
    Migrated {
        /// Author names in their new order, for reporting
        authors: Vec<String>,
        /// Rewritten document text
        content: String,
    },
}

/// Migrate the text of one grant file
pub fn migrate_text(content: &str, default_layout: &str) -> Migration {
    let Some(doc) = FrontMatter::parse(content) else {
        return Migration::NoFrontMatter;
    };

    match convert(&doc.front_matter, default_layout) {
        Conversion::Unchanged(reason) => Migration::Skipped(reason),
        Conversion::Converted(migrated) => {
            let authors = match migrated.get("authors") {
                Some(Value::Authors(authors)) => authors.iter().map(|a| a.name.clone()).collect(),
                _ => Vec::new(),
            };

            Migration::Migrated {
                authors,
                content: migrated.to_document(doc.remainder),
            }
        }
    }
}
