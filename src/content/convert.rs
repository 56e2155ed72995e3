//! Legacy single-author to multi-author conversion

use super::author::{is_valid_orcid, split_names, split_orcids, strip_orcid_url};
use super::{Author, FrontMatter, Value};

/// Fields copied into a migrated record, in output order, when non-empty
pub const PASS_THROUGH_FIELDS: [&str; 7] = [
    "year",
    "funder",
    "program",
    "discipline",
    "status",
    "link",
    "link_name",
];

/// Why a record was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record already has an `authors` field
    AlreadyMigrated,
    /// The record has no `author` field to migrate
    NoAuthor,
}

/// Result of running the converter on one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    Unchanged(SkipReason),
    Converted(FrontMatter),
}

impl Conversion {
    pub fn is_changed(&self) -> bool {
        matches!(self, Conversion::Converted(_))
    }
}

/// Convert a legacy record into the multi-author schema.
///
/// `default_layout` is used when the record has no `layout` of its own.
pub fn convert(front_matter: &FrontMatter, default_layout: &str) -> Conversion {
    if front_matter.contains_key("authors") {
        return Conversion::Unchanged(SkipReason::AlreadyMigrated);
    }

    let Some(author) = front_matter.get("author") else {
        return Conversion::Unchanged(SkipReason::NoAuthor);
    };

    let names = author_names(author);
    let orcids = front_matter.get("ORCID").map(orcid_list).unwrap_or_default();
    let institution = front_matter
        .get("institution")
        .map(Value::to_text)
        .filter(|s| !s.is_empty());

    let authors = assemble_authors(names, &orcids, institution);

    let mut migrated = FrontMatter::new();
    migrated.insert(
        "layout",
        front_matter
            .get("layout")
            .cloned()
            .unwrap_or_else(|| Value::from(default_layout)),
    );
    migrated.insert(
        "title",
        front_matter
            .get("title")
            .cloned()
            .unwrap_or_else(|| Value::from("")),
    );
    migrated.insert("authors", Value::Authors(authors));

    for key in PASS_THROUGH_FIELDS {
        if let Some(value) = front_matter.get(key).filter(|v| !v.is_empty()) {
            migrated.insert(key, value.clone());
        }
    }

    Conversion::Converted(migrated)
}

fn author_names(author: &Value) -> Vec<String> {
    match author {
        Value::Scalar(s) => split_names(s),
        Value::Sequence(items) if !items.is_empty() => {
            items.iter().map(|s| s.trim().to_string()).collect()
        }
        Value::Sequence(_) => vec![String::new()],
        Value::Authors(authors) => authors.iter().map(|a| a.name.clone()).collect(),
    }
}

fn orcid_list(orcid: &Value) -> Vec<String> {
    match orcid {
        Value::Scalar(s) if s.is_empty() => Vec::new(),
        Value::Scalar(s) => split_orcids(s),
        Value::Sequence(items) => items
            .iter()
            .map(|s| strip_orcid_url(s).trim().to_string())
            .collect(),
        Value::Authors(_) => Vec::new(),
    }
}

/// Pair names with ORCIDs by position. The institution goes to the first
/// author only.
fn assemble_authors(
    names: Vec<String>,
    orcids: &[String],
    institution: Option<String>,
) -> Vec<Author> {
    let mut institution = institution;

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let mut author = Author::new(name);

            if i == 0 {
                author.institution = institution.take();
            }

            if let Some(orcid) = orcids.get(i).map(|o| o.trim()).filter(|o| !o.is_empty()) {
                if is_valid_orcid(orcid) {
                    author.orcid = Some(orcid.to_string());
                } else {
                    tracing::debug!("Dropping malformed ORCID {:?} for {}", orcid, author.name);
                }
            }

            author
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> FrontMatter {
        let mut fm = FrontMatter::new();
        for (key, value) in pairs {
            fm.insert(*key, Value::from(*value));
        }
        fm
    }

    fn converted(fm: &FrontMatter) -> FrontMatter {
        match convert(fm, "grant") {
            Conversion::Converted(fm) => fm,
            other => panic!("expected conversion, got {:?}", other),
        }
    }

    fn authors_of(fm: &FrontMatter) -> Vec<Author> {
        match fm.get("authors") {
            Some(Value::Authors(authors)) => authors.clone(),
            other => panic!("expected authors, got {:?}", other),
        }
    }

    #[test]
    fn test_already_migrated_is_unchanged() {
        let mut fm = record(&[("title", "Grant"), ("author", "Someone")]);
        fm.insert("authors", Value::Sequence(vec!["name: Jane".to_string()]));

        let result = convert(&fm, "grant");
        assert_eq!(result, Conversion::Unchanged(SkipReason::AlreadyMigrated));
        assert!(!result.is_changed());
    }

    #[test]
    fn test_no_author_is_unchanged() {
        let fm = record(&[("title", "Grant"), ("year", "2020")]);
        assert_eq!(
            convert(&fm, "grant"),
            Conversion::Unchanged(SkipReason::NoAuthor)
        );
    }

    #[test]
    fn test_names_paired_with_orcids() {
        let fm = record(&[
            ("title", "Grant"),
            ("author", "Jane Doe and John Smith"),
            ("ORCID", "0000-0001-2345-6789 and 0000-0002-3456-7890"),
        ]);

        let authors = authors_of(&converted(&fm));
        assert_eq!(
            authors,
            vec![
                Author {
                    name: "Jane Doe".to_string(),
                    orcid: Some("0000-0001-2345-6789".to_string()),
                    institution: None,
                },
                Author {
                    name: "John Smith".to_string(),
                    orcid: Some("0000-0002-3456-7890".to_string()),
                    institution: None,
                },
            ]
        );
    }

    #[test]
    fn test_suffix_guard_keeps_single_author() {
        let fm = record(&[("author", "Smith, Jr.")]);
        assert_eq!(authors_of(&converted(&fm)), vec![Author::new("Smith, Jr.")]);
    }

    #[test]
    fn test_institution_only_on_first_author() {
        let fm = record(&[("author", "A and B"), ("institution", "Acme U")]);
        let authors = authors_of(&converted(&fm));
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0].institution.as_deref(), Some("Acme U"));
        assert_eq!(authors[1].institution, None);
    }

    #[test]
    fn test_empty_institution_ignored() {
        let fm = record(&[("author", "A"), ("institution", "")]);
        assert_eq!(authors_of(&converted(&fm))[0].institution, None);
    }

    #[test]
    fn test_invalid_orcid_dropped() {
        let fm = record(&[("author", "Jane Doe"), ("ORCID", "not-an-id")]);
        assert_eq!(authors_of(&converted(&fm)), vec![Author::new("Jane Doe")]);

        // Check digit X must follow all sixteen digits
        let fm = record(&[
            ("author", "Jane Doe and John Smith"),
            ("ORCID", "0000-0001-2345-678X and 0000-0002-3456-7890X"),
        ]);
        let authors = authors_of(&converted(&fm));
        assert_eq!(authors[0].orcid, None);
        assert_eq!(authors[1].orcid.as_deref(), Some("0000-0002-3456-7890X"));
    }

    #[test]
    fn test_uneven_name_and_orcid_counts() {
        let fm = record(&[
            ("author", "A, B, C"),
            ("ORCID", "0000-0001-2345-6789"),
        ]);
        let authors = authors_of(&converted(&fm));
        assert_eq!(authors.len(), 3);
        assert!(authors[0].orcid.is_some());
        assert!(authors[1].orcid.is_none());
        assert!(authors[2].orcid.is_none());

        let fm = record(&[
            ("author", "A"),
            ("ORCID", "0000-0001-2345-6789; 0000-0002-3456-7890"),
        ]);
        let authors = authors_of(&converted(&fm));
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].orcid.as_deref(), Some("0000-0001-2345-6789"));
    }

    #[test]
    fn test_empty_author_yields_unnamed_author() {
        let fm = record(&[("author", "")]);
        assert_eq!(authors_of(&converted(&fm)), vec![Author::new("")]);
    }

    #[test]
    fn test_sequence_author_uses_items() {
        let mut fm = FrontMatter::new();
        fm.insert(
            "author",
            Value::Sequence(vec!["Jane Doe".to_string(), "John Smith".to_string()]),
        );
        let names: Vec<_> = authors_of(&converted(&fm))
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Jane Doe", "John Smith"]);
    }

    #[test]
    fn test_layout_and_title_defaults() {
        let fm = record(&[("author", "Jane Doe")]);
        let migrated = converted(&fm);
        assert_eq!(migrated.get("layout"), Some(&Value::from("grant")));
        assert_eq!(migrated.get("title"), Some(&Value::from("")));

        let migrated = match convert(&fm, "award") {
            Conversion::Converted(fm) => fm,
            other => panic!("expected conversion, got {:?}", other),
        };
        assert_eq!(migrated.get("layout"), Some(&Value::from("award")));
    }

    #[test]
    fn test_allow_list_and_field_order() {
        let mut fm = record(&[
            ("link_name", "Proposal"),
            ("title", "Grant"),
            ("author", "Jane Doe"),
            ("ORCID", "0000-0001-2345-6789"),
            ("institution", "Acme U"),
            ("status", ""),
            ("year", "2018"),
            ("notes", "internal"),
            ("layout", "grant"),
        ]);
        fm.insert("discipline", Value::Sequence(vec!["ecology".to_string()]));
        fm.insert("funder", Value::Sequence(Vec::new()));

        let migrated = converted(&fm);
        assert_eq!(
            migrated.keys().collect::<Vec<_>>(),
            vec!["layout", "title", "authors", "year", "discipline", "link_name"]
        );
        assert!(migrated.get("notes").is_none());
        assert!(migrated.get("author").is_none());
        assert!(migrated.get("ORCID").is_none());
        assert!(migrated.get("institution").is_none());
    }
}
