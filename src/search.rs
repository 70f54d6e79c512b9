use std::{fmt, sync::LazyLock};

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use crate::data::Catalog;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\p{L}\d']+").unwrap());

/// The kind of record a search result points at.
///
/// Backends may send kinds this build does not know about, so anything
/// unrecognized is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultKind {
    Condition,
    Medication,
    Specialty,
    Other(String),
}

impl Default for ResultKind {
    fn default() -> Self {
        ResultKind::Other(String::new())
    }
}

impl ResultKind {
    pub fn as_str(&self) -> &str {
        match self {
            ResultKind::Condition => "condition",
            ResultKind::Medication => "medication",
            ResultKind::Specialty => "specialty",
            ResultKind::Other(raw) => raw,
        }
    }
}

impl From<String> for ResultKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "condition" => ResultKind::Condition,
            "medication" => ResultKind::Medication,
            "specialty" => ResultKind::Specialty,
            _ => ResultKind::Other(raw),
        }
    }
}

impl From<ResultKind> for String {
    fn from(kind: ResultKind) -> Self {
        match kind {
            ResultKind::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record identifier, scoped by the result kind.
///
/// Any JSON number is kept as sent, so `7.5` or `-1` still land in a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultId {
    Number(Number),
    Text(String),
}

impl From<u32> for ResultId {
    fn from(id: u32) -> Self {
        ResultId::Number(id.into())
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultId::Number(id) => write!(f, "{id}"),
            ResultId::Text(id) => f.write_str(id),
        }
    }
}

/// One entry of the `/search` response.
///
/// Records are not validated: missing or null fields decode to empty values
/// and render with placeholder links rather than failing the whole response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "loose_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ResultId>,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: ResultKind,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ResultId>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(ResultId::Number(n)),
        Some(Value::String(s)) => Some(ResultId::Text(s)),
        Some(other) => Some(ResultId::Text(other.to_string())),
    })
}

/// Restricts a search to one kind of record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindFilter {
    #[default]
    All,
    Condition,
    Medication,
    Specialty,
}

impl KindFilter {
    fn allows(self, kind: &ResultKind) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Condition => *kind == ResultKind::Condition,
            KindFilter::Medication => *kind == ResultKind::Medication,
            KindFilter::Specialty => *kind == ResultKind::Specialty,
        }
    }
}

/// Matches records against a single query.
///
/// A record matches when the query appears anywhere in one of its fields
/// (ignoring case), or when every query word shares a stem with some word in
/// those fields, so "fevers" still finds "Fever".
struct Matcher {
    needle: String,
    stems: Vec<String>,
    stemmer: Stemmer,
}

impl Matcher {
    fn new(query: &str) -> Self {
        let stemmer = Stemmer::create(Algorithm::English);
        let needle = query.to_lowercase();
        let stems = WORD
            .find_iter(&needle)
            .map(|w| stemmer.stem(w.as_str()).into_owned())
            .collect();
        Matcher {
            needle,
            stems,
            stemmer,
        }
    }

    fn matches<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        let fields: Vec<String> = fields.into_iter().map(str::to_lowercase).collect();
        if fields.iter().any(|f| f.contains(&self.needle)) {
            return true;
        }
        if self.stems.is_empty() {
            return false;
        }

        let field_stems: Vec<String> = fields
            .iter()
            .flat_map(|f| WORD.find_iter(f))
            .map(|w| self.stemmer.stem(w.as_str()).into_owned())
            .collect();
        self.stems.iter().all(|s| field_stems.contains(s))
    }
}

/// Search the catalog.
///
/// Conditions come first, then medications, then specialties, each in
/// catalog order. A blank query finds nothing.
pub fn search(
    catalog: &Catalog,
    query: &str,
    filter: KindFilter,
    limit: Option<usize>,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let matcher = Matcher::new(query);
    let mut results = Vec::new();

    if filter.allows(&ResultKind::Condition) {
        for condition in catalog.conditions() {
            let fields = [condition.name(), condition.description()]
                .into_iter()
                .chain(condition.symptoms().iter().map(String::as_str));
            if matcher.matches(fields) {
                results.push(SearchResult {
                    id: Some(condition.id().into()),
                    kind: ResultKind::Condition,
                    name: condition.name().to_owned(),
                    description: condition.description().to_owned(),
                });
            }
        }
    }

    if filter.allows(&ResultKind::Medication) {
        for medication in catalog.medications() {
            let fields = [
                medication.name(),
                medication.class_name(),
                medication.description(),
            ]
            .into_iter()
            .chain(medication.uses().iter().map(String::as_str));
            if matcher.matches(fields) {
                let description = match medication.description() {
                    "" => medication.class_name(),
                    description => description,
                };
                results.push(SearchResult {
                    id: Some(medication.id().into()),
                    kind: ResultKind::Medication,
                    name: medication.name().to_owned(),
                    description: description.to_owned(),
                });
            }
        }
    }

    if filter.allows(&ResultKind::Specialty) {
        for specialty in catalog.specialties() {
            if matcher.matches([specialty.name(), specialty.description()]) {
                results.push(SearchResult {
                    id: Some(specialty.id().into()),
                    kind: ResultKind::Specialty,
                    name: specialty.name().to_owned(),
                    description: specialty.description().to_owned(),
                });
            }
        }
    }

    if let Some(limit) = limit {
        results.truncate(limit);
    }
    tracing::debug!(query, count = results.len(), "catalog search");
    results
}
