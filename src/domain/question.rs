// ============================================================
// Layer 3 - Question Domain Types
// ============================================================
// A SMART question carries:
//   - an id ("dbpedia_14427" on the DBpedia track, 19719 on Wikidata)
//   - the natural language question text
//   - an answer category: boolean, literal or resource
//   - a list of answer types
//
// Example (ground truth):
//   {
//     "id": "dbpedia_14427",
//     "question": "What is the name of the opera based on Twelfth Night?",
//     "category": "resource",
//     "type": ["dbo:Opera", "dbo:MusicalWork", "dbo:Work"]
//   }
//
// A system prediction uses the same shape; `question` is optional
// and `type` is the ranked list of predicted types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── QuestionId ───────────────────────────────────────────────────────────────
/// Question identifier, normalised to text so that `19719` and `"19719"`
/// refer to the same question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(String);

impl QuestionId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => QuestionId(n.to_string()),
            RawId::Text(s) => QuestionId(s),
        })
    }
}

/// Integer-looking ids go back out as JSON numbers, everything else as text.
impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str().parse::<i64>() {
            Ok(n) => serializer.serialize_i64(n),
            Err(_) => serializer.serialize_str(self.as_str()),
        }
    }
}

// ─── Category ─────────────────────────────────────────────────────────────────
/// The answer category of a question.
///
/// Unknown category strings are kept verbatim so they still take part in
/// category accuracy (a prediction of "number" is simply wrong, not an error).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Boolean,
    Literal,
    Resource,
    Other(String),
}

impl Category {
    pub fn parse(s: &str) -> Self {
        match s {
            "boolean" => Category::Boolean,
            "literal" => Category::Literal,
            "resource" => Category::Resource,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Boolean => "boolean",
            Category::Literal => "literal",
            Category::Resource => "resource",
            Category::Other(s) => s,
        }
    }

    /// Literal and resource questions are scored on their types as well.
    pub fn has_types(&self) -> bool {
        matches!(self, Category::Literal | Category::Resource)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Category::parse(&s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// ─── GoldQuestion ─────────────────────────────────────────────────────────────
/// One ground truth record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldQuestion {
    pub id: QuestionId,

    /// Null in a handful of dataset rows; those questions are skipped
    #[serde(default)]
    pub question: Option<String>,

    pub category: Category,

    #[serde(rename = "type", default, deserialize_with = "nullable_types")]
    pub types: Vec<String>,
}

impl GoldQuestion {
    #[cfg(test)]
    pub fn new(
        id: impl Into<String>,
        category: Category,
        types: Vec<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            question: None,
            category,
            types,
        }
    }

    /// True when the question text is null or blank
    pub fn is_empty(&self) -> bool {
        self.question
            .as_deref()
            .map(|q| q.trim().is_empty())
            .unwrap_or(true)
    }
}

// ─── Prediction ───────────────────────────────────────────────────────────────
/// One system output record: a category and a ranked list of types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: QuestionId,

    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    #[serde(rename = "type", default, deserialize_with = "nullable_types")]
    pub types: Vec<String>,
}

#[cfg(test)]
impl Prediction {
    pub fn new(
        id: impl Into<String>,
        category: Option<Category>,
        types: Vec<String>,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            question: None,
            category,
            types,
        }
    }
}

/// Accepts `null`, a missing field, or a list whose entries may be null.
fn nullable_types<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_compare_equal() {
        let a: QuestionId = serde_json::from_str("19719").unwrap();
        let b: QuestionId = serde_json::from_str("\"19719\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_id_serialises_back_to_original_kind() {
        let numeric = QuestionId::new("42");
        let text = QuestionId::new("dbpedia_1");
        assert_eq!(serde_json::to_string(&numeric).unwrap(), "42");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"dbpedia_1\"");
    }

    #[test]
    fn test_id_display_matches_text() {
        let id: QuestionId = serde_json::from_str("7").unwrap();
        assert_eq!(id.to_string(), "7");
        assert_eq!(id.as_str(), "7");
    }

    #[test]
    fn test_unknown_category_is_kept() {
        let c: Category = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(c, Category::Other("number".to_string()));
        assert!(!c.has_types());
        assert!(Category::Literal.has_types());
        assert!(Category::Resource.has_types());
        assert!(!Category::Boolean.has_types());
    }

    #[test]
    fn test_gold_question_with_null_type_list() {
        let json = r#"{"id": 3, "question": "Is Rome in Italy?", "category": "boolean", "type": null}"#;
        let q: GoldQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.id.as_str(), "3");
        assert!(q.types.is_empty());
        assert!(!q.is_empty());
    }

    #[test]
    fn test_blank_question_text_is_empty() {
        let json = r#"{"id": "dbpedia_9", "question": "  ", "category": "literal", "type": ["date"]}"#;
        let q: GoldQuestion = serde_json::from_str(json).unwrap();
        assert!(q.is_empty());
    }

    #[test]
    fn test_prediction_without_category() {
        let json = r#"{"id": "dbpedia_2", "type": ["dbo:Person", null, "dbo:Agent"]}"#;
        let p: Prediction = serde_json::from_str(json).unwrap();
        assert!(p.category.is_none());
        assert_eq!(p.types, vec!["dbo:Person", "dbo:Agent"]);
    }
}
