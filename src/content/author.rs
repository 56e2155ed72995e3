//! Authors and the heuristics that pull them out of legacy strings

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A comma that introduces a name suffix rather than a second author
    static ref NAME_SUFFIX: Regex = Regex::new(r", (?:Jr\.|Sr\.|III|IV|PhD|MD)").unwrap();
    static ref ORCID_URL_PREFIX: Regex = Regex::new(r"https?://orcid\.org/").unwrap();
    static ref ORCID_ID: Regex = Regex::new(r"^\d{4}-\d{4}-\d{4}-\d{4}X?$").unwrap();
}

/// One contributor in the multi-author schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub orcid: Option<String>,
    pub institution: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Split a legacy `author` string into individual names.
///
/// `" and "` always separates authors. `", "` does too, unless the string
/// carries a suffix such as `, Jr.` or `, PhD`, in which case the whole
/// string is one name.
pub fn split_names(author: &str) -> Vec<String> {
    if author.contains(" and ") {
        author.split(" and ").map(|s| s.trim().to_string()).collect()
    } else if author.contains(", ") && !NAME_SUFFIX.is_match(author) {
        author.split(", ").map(|s| s.trim().to_string()).collect()
    } else {
        vec![author.trim().to_string()]
    }
}

/// Split a legacy `ORCID` string into identifiers.
///
/// Separators are tried in order `" and "`, `;`, `,`; only the first one
/// present is used.
pub fn split_orcids(orcid: &str) -> Vec<String> {
    let orcid = strip_orcid_url(orcid);

    if orcid.contains(" and ") {
        orcid.split(" and ").map(|s| s.trim().to_string()).collect()
    } else if orcid.contains(';') {
        orcid
            .split(';')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().trim_end_matches(';').to_string())
            .collect()
    } else if orcid.contains(',') {
        orcid.split(',').map(|s| s.trim().to_string()).collect()
    } else {
        vec![orcid.trim().to_string()]
    }
}

/// Remove every `http(s)://orcid.org/` prefix
pub fn strip_orcid_url(orcid: &str) -> String {
    ORCID_URL_PREFIX.replace_all(orcid, "").into_owned()
}

/// Check the `dddd-dddd-dddd-dddd[X]` shape
pub fn is_valid_orcid(orcid: &str) -> bool {
    ORCID_ID.is_match(orcid)
}
