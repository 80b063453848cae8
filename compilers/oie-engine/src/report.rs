use oie_protocol::Sentence;
use oie_tree::DependencyTree;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::ExtractorConfig;
use crate::extraction::{ExtractionDebug, Triple};
use crate::extractor::Extractor;

/// Extractions of one sentence as written to JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceReport {
    pub sentence: String,
    pub extractions: Vec<Triple>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<Vec<ExtractionDebug>>,
    /// Set when the sentence was not a well-formed tree; `extractions` is then empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub config: ExtractorConfig,
    pub sentences: Vec<SentenceReport>,
}

impl Extractor {
    /// Extracts from one sentence without failing: malformed trees are
    /// reported in the `error` field.
    pub fn report(&self, sentence: Sentence) -> SentenceReport {
        let text = sentence.surface_text();
        let tree = match DependencyTree::build(sentence) {
            Ok(tree) => tree,
            Err(e) => {
                warn!(sentence = %text, error = %e, "sentence skipped");
                return SentenceReport {
                    sentence: text,
                    extractions: Vec::new(),
                    debug: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let extractions = self.extract(&tree);
        SentenceReport {
            sentence: text,
            extractions: extractions.iter().map(|e| e.triple(&tree)).collect(),
            debug: self
                .config()
                .debug
                .then(|| extractions.iter().map(|e| e.debug(&tree)).collect()),
            error: None,
        }
    }

    pub fn report_all(&self, sentences: impl IntoIterator<Item = Sentence>) -> Report {
        Report {
            config: self.config().clone(),
            sentences: sentences.into_iter().map(|s| self.report(s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TRANSITIVE;

    #[test]
    fn test_report_with_debug() {
        let sentence = oie_conllu::parse_sentence(TRANSITIVE).unwrap();
        let extractor = Extractor::new(ExtractorConfig {
            debug: true,
            ..ExtractorConfig::default()
        });
        let report = extractor.report(sentence);
        assert_eq!(report.sentence, "João comeu a maçã .");
        assert_eq!(report.extractions.len(), 1);
        assert!(report.error.is_none());

        let debug = report.debug.unwrap();
        assert_eq!(debug[0].relation.token.as_deref(), Some("comeu"));
        assert_eq!(debug[0].complement.pieces, vec!["a".to_string()]);
    }

    #[test]
    fn test_malformed_sentence_is_reported() {
        let mut sentence = oie_conllu::parse_sentence(TRANSITIVE).unwrap();
        sentence.tokens[0].head = 0;
        let report = Extractor::default().report_all([sentence]);
        assert_eq!(report.config, ExtractorConfig::default());
        let only = &report.sentences[0];
        assert!(only.extractions.is_empty());
        assert!(only.debug.is_none());
        assert!(only.error.as_deref().is_some_and(|e| e.contains("root")));
    }
}
