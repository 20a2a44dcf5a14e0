use std::collections::HashSet;

use super::domain::{Job, JobCategory};

/// Build the autosuggest list for a partial search string: job titles first,
/// then category labels, case-insensitive substring match, first occurrence
/// winning on dedup. An empty query suppresses the suggestion list entirely.
pub fn suggest(query: &str, jobs: &[Job], vocabulary: &[JobCategory]) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for job in jobs {
        if job.title.to_lowercase().contains(&needle) && seen.insert(job.title.clone()) {
            suggestions.push(job.title.clone());
        }
    }

    for category in vocabulary {
        let label = category.label();
        if label.to_lowercase().contains(&needle) && seen.insert(label.to_string()) {
            suggestions.push(label.to_string());
        }
    }

    suggestions
}
