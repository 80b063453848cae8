use std::sync::Arc;

use oie_protocol::{DepRel, DepSet, Sentence};
use oie_tree::{DependencyTree, Node, TreeError};
use tracing::{debug, trace};

use crate::appositive::{extract_appositives, transitive_extractions};
use crate::collector::Visited;
use crate::complement::build_complements;
use crate::config::ExtractorConfig;
use crate::dedup::deduplicate;
use crate::extraction::{Extraction, Triple};
use crate::labels::{AUXILIARIES, RELATIVE_CLAUSES};
use crate::relation::{build_relation, coordinated_relations};
use crate::subject::find_subject;

/// Runs the extraction rules over dependency trees.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// All extractions of one sentence, deduplicated.
    ///
    /// Predicates are visited in sentence order. A word already used by a
    /// relation never starts another one, so "foi construída" is built once.
    pub fn extract(&self, tree: &DependencyTree) -> Vec<Extraction> {
        let mut consumed = Visited::new();
        let mut extractions = Vec::new();

        for node in tree.nodes() {
            if consumed.contains(&node.index()) {
                continue;
            }
            let Some(start) = predicate_start(node) else {
                continue;
            };
            if consumed.contains(&start.index()) {
                continue;
            }
            extractions.extend(self.extract_predicate(start, &mut consumed));
        }

        if self.config.appositive {
            let appositives = extract_appositives(tree);
            let derived = if self.config.transitive {
                transitive_extractions(&extractions, &appositives)
            } else {
                Vec::new()
            };
            extractions.extend(appositives);
            extractions.extend(derived);
        }

        let extractions = deduplicate(tree, extractions, self.config.hidden_subjects);
        debug!(words = tree.len(), extractions = extractions.len(), "sentence extracted");
        extractions
    }

    pub fn triples(&self, tree: &DependencyTree) -> Vec<Triple> {
        self.extract(tree)
            .iter()
            .map(|extraction| extraction.triple(tree))
            .collect()
    }

    /// Builds the tree and extracts from it.
    pub fn extract_sentence(&self, sentence: Sentence) -> Result<Vec<Triple>, TreeError> {
        let tree = DependencyTree::build(sentence)?;
        Ok(self.triples(&tree))
    }

    fn extract_predicate(&self, start: Node<'_>, consumed: &mut Visited) -> Vec<Extraction> {
        let tree = start.tree();
        let subject = find_subject(start);
        if subject.is_none() && !self.config.hidden_subjects {
            trace!(predicate = ?start, "no subject, predicate skipped");
            return Vec::new();
        }

        let excluded: Visited = subject.iter().flat_map(|s| s.indices()).collect();
        let Some(relation) = build_relation(start, &excluded) else {
            trace!(predicate = ?start, "no verbal relation");
            return Vec::new();
        };

        let mut relations = vec![relation];
        if self.config.coordinating_conjunctions {
            let effective = tree.node(relations[0].effective);
            relations.extend(coordinated_relations(effective, &excluded));
        }

        let subject = subject.map(Arc::new);
        let mut extractions = Vec::new();
        for relation in relations {
            consumed.extend(relation.phrase.indices());
            let effective = tree.node(relation.effective);
            let base = Extraction::new(subject.clone(), Arc::new(relation.phrase));
            extractions.extend(build_complements(&base, effective, &self.config));
        }
        extractions
    }
}

/// The word a predicate is built from, if `node` opens one.
///
/// Verbs and auxiliaries open a predicate unless they belong to a relative
/// clause, whose content is reached through the noun it modifies. A nominal
/// root opens one through its copula.
fn predicate_start(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_verbal() {
        let nucleus = if node.dep().is_in(AUXILIARIES) { node.head() } else { node };
        if nucleus.dep().is_in(RELATIVE_CLAUSES) {
            return None;
        }
        return Some(node);
    }
    if node.dep() == DepRel::Root && node.pos().is_nominal() {
        return node.children_in(DepSet::COP).next();
    }
    None
}
