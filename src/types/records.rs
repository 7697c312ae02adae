use serde::{Deserialize, Serialize};

use crate::storage::Document;

/// One crawled GitHub repository. The field set mirrors what the repository
/// crawler extracts from the `/repositories` listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub fork: bool,
    pub url: String,
    pub html_url: String,
}

/// One crawled StackOverflow question. Dates are epoch seconds, as returned
/// by the StackExchange API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_id: i64,
    pub title: String,
    pub body: String,
    pub link: String,
    pub tags: Vec<String>,
    pub is_answered: bool,
    pub view_count: i64,
    pub answer_count: i64,
    pub score: i64,
    pub creation_date: i64,
    pub last_activity_date: i64,
}

impl RepositoryRecord {
    /// Placeholder record seeded at collection creation. The `-1` id marks it
    /// as a template, not crawled data.
    pub fn template() -> Self {
        Self {
            id: -1,
            name: String::new(),
            full_name: String::new(),
            private: false,
            fork: false,
            url: String::new(),
            html_url: String::new(),
        }
    }

    pub fn document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("id".into(), self.id.into());
        doc.insert("name".into(), self.name.clone().into());
        doc.insert("full_name".into(), self.full_name.clone().into());
        doc.insert("private".into(), self.private.into());
        doc.insert("fork".into(), self.fork.into());
        doc.insert("url".into(), self.url.clone().into());
        doc.insert("html_url".into(), self.html_url.clone().into());
        doc
    }
}

impl QuestionRecord {
    /// Placeholder record seeded at collection creation.
    pub fn template() -> Self {
        Self {
            question_id: -1,
            title: String::new(),
            body: String::new(),
            link: String::new(),
            tags: Vec::new(),
            is_answered: false,
            view_count: 0,
            answer_count: 0,
            score: 0,
            creation_date: 0,
            last_activity_date: 0,
        }
    }

    pub fn document(&self) -> Document {
        let mut doc = Document::new();
        doc.insert("question_id".into(), self.question_id.into());
        doc.insert("title".into(), self.title.clone().into());
        doc.insert("body".into(), self.body.clone().into());
        doc.insert("link".into(), self.link.clone().into());
        doc.insert("tags".into(), self.tags.clone().into());
        doc.insert("is_answered".into(), self.is_answered.into());
        doc.insert("view_count".into(), self.view_count.into());
        doc.insert("answer_count".into(), self.answer_count.into());
        doc.insert("score".into(), self.score.into());
        doc.insert("creation_date".into(), self.creation_date.into());
        doc.insert("last_activity_date".into(), self.last_activity_date.into());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn repository_document_round_trips() {
        let record = RepositoryRecord {
            id: 42,
            name: "doc-search".into(),
            full_name: "constantine7cd/doc-search".into(),
            private: false,
            fork: true,
            url: "https://api.github.com/repos/constantine7cd/doc-search".into(),
            html_url: "https://github.com/constantine7cd/doc-search".into(),
        };
        let doc = record.document();
        let parsed: RepositoryRecord =
            serde_json::from_value(Value::Object(doc)).expect("document parses back");
        assert_eq!(parsed, record);
    }

    #[test]
    fn question_template_uses_sentinel_id() {
        let doc = QuestionRecord::template().document();
        assert_eq!(doc.get("question_id"), Some(&Value::from(-1)));
        assert_eq!(doc.get("tags"), Some(&Value::Array(Vec::new())));
    }
}
