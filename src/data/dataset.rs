use std::collections::HashMap;

use crate::domain::question::{GoldQuestion, QuestionId};

/// Which record survives when an id appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Duplicates {
    /// The first record wins; later ones are ignored
    KeepFirst,
    /// A later record replaces the earlier one but keeps its position
    #[default]
    KeepLast,
}

/// Gold questions in file order with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    questions: Vec<GoldQuestion>,
    index: HashMap<QuestionId, usize>,
    duplicates: Duplicates,
}

impl GroundTruth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        Self {
            duplicates,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, question: GoldQuestion) {
        match (self.index.get(&question.id), self.duplicates) {
            (Some(_), Duplicates::KeepFirst) => {
                tracing::debug!("Duplicate question ID {}; keeping the first record", question.id);
            }
            (Some(&pos), Duplicates::KeepLast) => {
                tracing::debug!("Duplicate question ID {}; keeping the later record", question.id);
                self.questions[pos] = question;
            }
            (None, _) => {
                self.index.insert(question.id.clone(), self.questions.len());
                self.questions.push(question);
            }
        }
    }

    pub fn get(&self, id: &QuestionId) -> Option<&GoldQuestion> {
        self.index.get(id).map(|&pos| &self.questions[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &GoldQuestion> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl FromIterator<GoldQuestion> for GroundTruth {
    fn from_iter<T: IntoIterator<Item = GoldQuestion>>(iter: T) -> Self {
        let mut gt = GroundTruth::new();
        for q in iter {
            gt.insert(q);
        }
        gt
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::Category;

    #[test]
    fn test_preserves_file_order() {
        let gt: GroundTruth = vec![
            GoldQuestion::new("b", Category::Boolean, vec![]),
            GoldQuestion::new("a", Category::Boolean, vec![]),
        ]
        .into_iter()
        .collect();

        let ids: Vec<&str> = gt.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_replaces_in_place() {
        let gt: GroundTruth = vec![
            GoldQuestion::new("1", Category::Boolean, vec![]),
            GoldQuestion::new("2", Category::Boolean, vec![]),
            GoldQuestion::new("1", Category::Literal, vec!["date".into()]),
        ]
        .into_iter()
        .collect();

        assert_eq!(gt.len(), 2);
        assert_eq!(gt.iter().next().unwrap().category, Category::Literal);
        let found = gt.get(&QuestionId::new("1")).unwrap();
        assert_eq!(found.types, vec!["date"]);
    }

    #[test]
    fn test_keep_first_ignores_later_duplicates() {
        let mut gt = GroundTruth::with_duplicates(Duplicates::KeepFirst);
        gt.insert(GoldQuestion::new("1", Category::Literal, vec!["date".into()]));
        gt.insert(GoldQuestion::new("1", Category::Resource, vec!["Q5".into()]));

        assert_eq!(gt.len(), 1);
        let found = gt.get(&QuestionId::new("1")).unwrap();
        assert_eq!(found.category, Category::Literal);
        assert_eq!(found.types, vec!["date"]);
    }

    #[test]
    fn test_missing_id() {
        let gt = GroundTruth::new();
        assert!(gt.is_empty());
        assert!(gt.get(&QuestionId::new("x")).is_none());
    }
}
