use std::sync::Arc;

use oie_protocol::DepRel;
use oie_tree::DependencyTree;
use tracing::debug;

use crate::collector::{collect, Visited};
use crate::extraction::Extraction;
use crate::identity::IdentityGraph;
use crate::labels::{CLAUSE_BOUNDARY, COPULA, REPORTED_CLAUSES};
use crate::phrase::Phrase;
use crate::predicate::NominalPart;

/// "Maria, a professora, chegou" asserts (Maria; é; a professora).
///
/// Appositions inside a reported or controlled clause are skipped.
pub fn extract_appositives(tree: &DependencyTree) -> Vec<Extraction> {
    let copula = Arc::new(Phrase::literal(COPULA));

    tree.nodes()
        .filter(|node| node.dep() == DepRel::Appos)
        .filter_map(|appos| {
            let head = appos.head();
            let reported = std::iter::once(head)
                .chain(head.ancestors())
                .any(|node| node.dep().is_in(REPORTED_CLAUSES));
            if reported {
                debug!(appos = ?appos, "apposition under a reported clause skipped");
                return None;
            }

            let entity = collect(head, &Visited::new(), &NominalPart::anchor(head), CLAUSE_BOUNDARY);
            let alias = collect(appos, &Visited::new(), &NominalPart::apposition(appos), CLAUSE_BOUNDARY);
            Some(Extraction {
                subject: Some(Arc::new(entity)),
                relation: Some(copula.clone()),
                complement: Some(alias),
            })
        })
        .collect()
}

/// Re-states extractions about an entity with each of its aliases as subject.
///
/// `extractions` are the predicate extractions; `appositives` the output of
/// [`extract_appositives`]. Only aliases asserted for the subject's own core
/// are substituted, and appositives are never re-stated.
pub fn transitive_extractions(extractions: &[Extraction], appositives: &[Extraction]) -> Vec<Extraction> {
    let mut graph = IdentityGraph::new();
    for (slot, appositive) in appositives.iter().enumerate() {
        let entity = appositive.subject.as_deref().and_then(Phrase::core);
        let alias = appositive.complement.as_ref().and_then(Phrase::core);
        if let (Some(entity), Some(alias)) = (entity, alias) {
            graph.add_alias(entity, alias, slot);
        }
    }
    if graph.is_empty() {
        return Vec::new();
    }

    let mut derived = Vec::new();
    for source in extractions {
        let Some(entity) = source.subject.as_deref().and_then(Phrase::core) else {
            continue;
        };
        derived.extend(
            graph
                .aliases(entity)
                .into_iter()
                .filter_map(|slot| appositives[slot].complement.clone())
                .map(|alias| Extraction {
                    subject: Some(Arc::new(alias)),
                    relation: source.relation.clone(),
                    complement: source.complement.clone(),
                }),
        );
    }
    derived
}
