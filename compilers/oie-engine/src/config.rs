use serde::{Deserialize, Serialize};

/// Switches for the optional extraction rules.
///
/// Missing fields take their default when deserialized, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Split coordinated complements and follow coordinated verbs.
    pub coordinating_conjunctions: bool,
    /// Let subject-less `advcl`/`ccomp` clauses become complements.
    pub subordinating_conjunctions: bool,
    /// Emit "X é Y" for every apposition.
    pub appositive: bool,
    /// Re-emit extractions with each appositive alias as subject.
    #[serde(alias = "appositive_transitivity")]
    pub transitive: bool,
    /// Accept predicates that have no explicit subject.
    pub hidden_subjects: bool,
    /// Attach per-element token details to reports.
    pub debug: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            coordinating_conjunctions: true,
            subordinating_conjunctions: true,
            appositive: true,
            transitive: true,
            hidden_subjects: false,
            debug: false,
        }
    }
}
