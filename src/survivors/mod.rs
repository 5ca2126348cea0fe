//! Survivor resolution for deletion submissions.
//!
//! A deletion form carries three kinds of fields:
//!
//! - `similar[0]`, `similar[1]`, ... naming the candidates, numbered from 0
//!   without gaps (a repeated bare `similar` field is accepted as the same
//!   list in submission order)
//! - one field whose *name* is the kept image (its value is ignored), or an
//!   explicit `kept=<file>` field
//! - any candidate repeated as its own field name, marking it as kept too
//!
//! Every field name is a survivor. Candidates that are survivors stay put.


use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Field name of the gap-free candidate list.
pub const CANDIDATE_FIELD: &str = "similar";

/// Field name of the explicit kept image.
pub const KEPT_FIELD: &str = "kept";

static INDEXED_CANDIDATE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^similar\[\d+\]").expect("static regex compiles"));

/// The outcome of resolving one deletion submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Candidate file names in submission index order. May contain duplicates.
    pub candidates: Vec<String>,

    /// Every submitted field name, plus the explicit kept image if given.
    pub survivors: HashSet<String>,

    /// The image the user chose to keep, when one can be identified.
    pub kept: Option<String>,
}

impl Resolution {
    /// Whether `file_name` was submitted as a field name and must not move.
    pub fn is_survivor(&self, file_name: &str) -> bool {
        self.survivors.contains(file_name)
    }
}

/// Key of the `index`-th candidate field.
pub fn candidate_key(index: usize) -> String {
    format!("{}[{}]", CANDIDATE_FIELD, index)
}

/// Whether `key` is an indexed candidate key such as `similar[3]`.
pub fn is_indexed_candidate_key(key: &str) -> bool {
    INDEXED_CANDIDATE_KEY.is_match(key)
}

/// Resolve a decoded form body into candidates, survivors and the kept image.
///
/// `fields` must be in submission order; repeated names are allowed.
pub fn resolve(fields: &[(String, String)]) -> Resolution {
    let candidates = if fields.iter().any(|(key, _)| is_indexed_candidate_key(key)) {
        indexed_candidates(fields)
    } else {
        listed_candidates(fields)
    };

    let mut survivors = HashSet::with_capacity(fields.len());
    let mut sniffed_kept = None;
    let mut explicit_kept = None;

    for (key, value) in fields {
        survivors.insert(key.clone());

        if key == KEPT_FIELD {
            if !value.is_empty() {
                explicit_kept = Some(value.clone());
            }
        } else if key != CANDIDATE_FIELD && !is_indexed_candidate_key(key) {
            // Last non-candidate key in submission order wins.
            sniffed_kept = Some(key.clone());
        }
    }

    if let Some(kept) = &explicit_kept {
        survivors.insert(kept.clone());
    }

    Resolution {
        candidates,
        survivors,
        kept: explicit_kept.or(sniffed_kept),
    }
}

/// Walk `similar[0]`, `similar[1]`, ... until the first missing or empty index.
fn indexed_candidates(fields: &[(String, String)]) -> Vec<String> {
    let mut candidates = Vec::new();

    loop {
        let key = candidate_key(candidates.len());
        match first_value(fields, &key) {
            Some(value) if !value.is_empty() => candidates.push(value.to_string()),
            _ => break,
        }
    }

    candidates
}

/// Collect repeated bare `similar` fields in submission order.
fn listed_candidates(fields: &[(String, String)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(key, value)| key == CANDIDATE_FIELD && !value.is_empty())
        .map(|(_, value)| value.clone())
        .collect()
}

fn first_value<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
