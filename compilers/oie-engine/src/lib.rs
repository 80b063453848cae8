//! Rule-based open information extraction over dependency trees.
//!
//! An [`Extractor`] walks a [`DependencyTree`](oie_tree::DependencyTree) and
//! yields (subject; relation; complement) triples. Each predicate goes through
//! the same stages: subject resolution, relation building, complement
//! collection. Appositions and their transitive restatements are added last,
//! then everything is validated and deduplicated.

pub mod appositive;
pub mod collector;
pub mod complement;
pub mod config;
pub mod conjunction;
pub mod dedup;
pub mod extraction;
pub mod extractor;
pub mod identity;
pub mod labels;
pub mod phrase;
pub mod predicate;
pub mod relation;
pub mod report;
pub mod subject;

#[cfg(test)]
mod testing;

pub use config::ExtractorConfig;
pub use extraction::{ElementDebug, Extraction, ExtractionDebug, Triple};
pub use extractor::Extractor;
pub use phrase::Phrase;
pub use report::{Report, SentenceReport};
