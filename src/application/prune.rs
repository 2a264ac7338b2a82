//! Prune use case: decide which existing names should be deleted

use crate::domain::{select_retained, NamingTemplate, RetentionPolicy, Timestamp};

/// A candidate name with the timestamp recovered from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub timestamp: Timestamp,
}

/// Result of a prune run. Both name lists are ordered most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneOutcome {
    pub prune: Vec<String>,
    pub retain: Vec<String>,
    pub skipped: usize,
}

/// Service for classifying candidate names into keep and prune sets
pub struct PruneService {
    template: NamingTemplate,
    policy: RetentionPolicy,
}

impl PruneService {
    /// Create a new prune service
    pub fn new(template: NamingTemplate, policy: RetentionPolicy) -> Self {
        PruneService { template, policy }
    }

    /// Match and parse every name. Names that fail are reported and dropped.
    /// Returns the usable candidates in input order and the number skipped.
    pub fn collect_candidates<I, S>(&self, names: I) -> (Vec<Candidate>, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut candidates = Vec::new();
        let mut skipped = 0;

        for name in names {
            let name = name.as_ref();
            match self.template.extract(name) {
                Ok(timestamp) => candidates.push(Candidate {
                    name: name.to_string(),
                    timestamp,
                }),
                Err(e) => {
                    tracing::warn!("{}", e);
                    skipped += 1;
                }
            }
        }

        (candidates, skipped)
    }

    /// Classify names against the retention policy.
    ///
    /// Output names are re-rendered from the template and the parsed
    /// timestamp, so they carry the canonical form of each candidate.
    pub fn execute<I, S>(&self, names: I) -> PruneOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (mut candidates, skipped) = self.collect_candidates(names);

        // Stable: equal instants keep their input order
        candidates.sort_by(|a, b| b.timestamp.instant().cmp(&a.timestamp.instant()));

        let times: Vec<Timestamp> = candidates.iter().map(|c| c.timestamp.clone()).collect();
        let retained = select_retained(&times, &self.policy);

        let mut outcome = PruneOutcome {
            skipped,
            ..Default::default()
        };
        for (i, candidate) in candidates.iter().enumerate() {
            let name = self.template.render(&candidate.timestamp);
            if retained.contains(&i) {
                tracing::debug!(name = %name, "keep");
                outcome.retain.push(name);
            } else {
                tracing::debug!(name = %name, "prune");
                outcome.prune.push(name);
            }
        }

        tracing::debug!(
            kept = outcome.retain.len(),
            pruned = outcome.prune.len(),
            skipped = outcome.skipped,
            "prune complete"
        );
        outcome
    }
}
