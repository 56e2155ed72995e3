//! Front-matter serialization

use std::borrow::Cow;

use super::{FrontMatter, Value};

impl FrontMatter {
    /// Render the block between `---` delimiters and append `remainder`
    /// unchanged.
    pub fn to_document(&self, remainder: &str) -> String {
        let mut lines = vec!["---".to_string()];

        for (key, value) in self.iter() {
            match value {
                Value::Authors(authors) => {
                    lines.push(format!("{}:", key));
                    for author in authors {
                        lines.push(format!("  - name: {}", format_value(&author.name)));
                        if let Some(orcid) = &author.orcid {
                            lines.push(format!("    orcid: {}", orcid));
                        }
                        if let Some(institution) = &author.institution {
                            lines.push(format!("    institution: {}", format_value(institution)));
                        }
                    }
                }
                Value::Sequence(items) => {
                    lines.push(format!("{}:", key));
                    for item in items {
                        lines.push(format!("  - {}", format_value(item)));
                    }
                }
                Value::Scalar(s) => lines.push(format!("{}: {}", key, format_value(s))),
            }
        }

        lines.push("---".to_string());

        let mut output = lines.join("\n");
        output.push_str(remainder);
        output
    }
}

/// Quote a value when it would not survive as a bare scalar
pub fn format_value(value: &str) -> Cow<'_, str> {
    let needs_quotes =
        value.contains(':') || value.contains('#') || value.contains('\n') || value.starts_with('"');

    if needs_quotes {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        Cow::Owned(format!("\"{}\"", escaped))
    } else {
        Cow::Borrowed(value)
    }
}
