use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single scheme suggestion produced by the rule engine, already rendered in
/// the profile's language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeRecommendation {
    /// Catalog id of the rule or generic entry that produced this record.
    pub id: String,
    pub name: String,
    pub benefit: String,
    pub qualification_reason: String,
    pub required_documents: Vec<String>,
}

/// Every distinct document across `recommendations`, each exactly once, sorted.
pub fn consolidated_documents(recommendations: &[SchemeRecommendation]) -> Vec<String> {
    recommendations
        .iter()
        .flat_map(|r| r.required_documents.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
