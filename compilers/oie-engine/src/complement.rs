use oie_protocol::DepSet;
use oie_tree::Node;
use tracing::trace;

use crate::collector::{collect, Visited};
use crate::config::ExtractorConfig;
use crate::conjunction::expand;
use crate::extraction::Extraction;
use crate::labels::COMPONENT_BOUNDARY;
use crate::phrase::Phrase;
use crate::predicate::{ComplementPart, ComplementStart, NodePredicate};

/// Turns a subject/relation pair into complete extractions.
///
/// Components are gathered from the effective node: the node itself first when
/// it is a nominal predicate, then each of its children allowed to start one.
/// Components never share a token. One extraction carries all components
/// together; with several components and coordination enabled, each component
/// also gets an extraction of its own.
pub fn build_complements(
    extraction: &Extraction,
    effective: Node<'_>,
    config: &ExtractorConfig,
) -> Vec<Extraction> {
    let tree = effective.tree();
    let start = ComplementStart {
        subordinate_clauses: config.subordinating_conjunctions,
    };
    let mut visited = extraction.claimed();
    let mut components = Vec::new();

    if !effective.is_verbal() && !visited.contains(&effective.index()) {
        components.extend(components_from(effective, &mut visited, config));
    }
    for child in effective.children() {
        if visited.contains(&child.index()) || !start.accepts(child) {
            continue;
        }
        components.extend(components_from(child, &mut visited, config));
    }
    components.retain(|component| !component.tokens(tree).is_empty());

    trace!(effective = ?effective, components = components.len(), "complements built");

    let Some((first, rest)) = components.split_first() else {
        return if extraction.is_valid(tree, config.hidden_subjects) {
            vec![extraction.clone()]
        } else {
            Vec::new()
        };
    };

    let mut combined = first.clone();
    for component in rest {
        combined.merge(component);
    }
    let mut extractions = vec![extraction.with_complement(combined)];

    if !rest.is_empty() && config.coordinating_conjunctions {
        extractions.extend(
            components
                .iter()
                .map(|component| extraction.with_complement(component.without_connectors(tree))),
        );
    }
    extractions
}

/// One component per conjunct when `root` heads a coordination, else one
/// component for its whole subtree. Claims the collected tokens.
fn components_from(root: Node<'_>, visited: &mut Visited, config: &ExtractorConfig) -> Vec<Phrase> {
    let coordinated = config.coordinating_conjunctions
        && root
            .children_in(DepSet::CONJ)
            .any(|conj| !conj.is_verbal() && !visited.contains(&conj.index()));

    let phrases = if coordinated {
        expand(root, visited, &ComplementPart, COMPONENT_BOUNDARY)
    } else {
        vec![collect(root, visited, &ComplementPart, COMPONENT_BOUNDARY)]
    };
    for phrase in &phrases {
        visited.extend(phrase.indices());
    }
    phrases
}
