//! Content module - front-matter reading, conversion and writing

mod author;
mod convert;
mod frontmatter;
mod migration;
mod writer;

pub use author::{is_valid_orcid, split_names, split_orcids, Author};
pub use convert::{convert, Conversion, SkipReason, PASS_THROUGH_FIELDS};
pub use frontmatter::{Document, FrontMatter, Value};
pub use migration::{migrate_text, Migration};
pub use writer::format_value;
