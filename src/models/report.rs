use serde::{Deserialize, Serialize};

/// A public write-up as returned by a report source, before summarization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub body: String,
}

/// Technique-oriented knowledge block handed to the knowledge store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub technique: String,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub remediation: String,
    #[serde(default)]
    pub raw_text: String,
}

impl ReportRecord {
    /// All textual fields, newline separated and trimmed.
    pub fn document_text(&self) -> String {
        [
            self.title.as_str(),
            self.url.as_str(),
            self.technique.as_str(),
            self.root_cause.as_str(),
            self.remediation.as_str(),
            self.raw_text.as_str(),
        ]
        .join("\n")
        .trim()
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_text_joins_fields() {
        let record = ReportRecord {
            title: "JWT bypass".into(),
            url: "https://h1.example/report/1".into(),
            technique: "alg none".into(),
            root_cause: "missing signature check".into(),
            remediation: "pin algorithms".into(),
            raw_text: String::new(),
        };
        assert_eq!(
            record.document_text(),
            "JWT bypass\nhttps://h1.example/report/1\nalg none\nmissing signature check\npin algorithms"
        );
    }

    #[test]
    fn test_document_text_blank_record_is_empty() {
        let record = ReportRecord {
            title: String::new(),
            url: String::new(),
            technique: String::new(),
            root_cause: String::new(),
            remediation: String::new(),
            raw_text: "  \n ".into(),
        };
        assert!(record.document_text().is_empty());
    }

    #[test]
    fn test_record_optional_fields_default() {
        let record: ReportRecord =
            serde_json::from_str(r#"{"title": "t", "url": "https://u"}"#).unwrap();
        assert!(record.technique.is_empty());
        assert!(record.raw_text.is_empty());
    }
}
