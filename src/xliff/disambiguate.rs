/*!
 * Unique unit ids for one export run.
 */

use std::collections::{HashMap, HashSet};

use log::warn;

/// Id table scoped to one export run.
///
/// The first unit for an id keeps the raw id. Each later unit gets the number
/// of earlier occurrences as suffix: `x`, `x-1`, `x-2`, ... Every id handed
/// out is remembered, so a suffixed id never lands on one already emitted:
/// when the candidate is taken the suffix moves on to the next free number.
#[derive(Debug, Default)]
pub struct IdDisambiguator {
    occurrences: HashMap<String, usize>,
    emitted: HashSet<String>,
    repeats: usize,
}

impl IdDisambiguator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the unit id for the next occurrence of `base_id`.
    pub fn assign(&mut self, base_id: &str) -> String {
        let mut suffix = self.occurrences.get(base_id).copied().unwrap_or(0);
        let assigned = loop {
            let candidate = if suffix == 0 {
                base_id.to_string()
            } else {
                format!("{}-{}", base_id, suffix)
            };
            if !self.emitted.contains(&candidate) {
                break candidate;
            }
            suffix += 1;
        };

        if suffix > 0 {
            warn!("Unit id '{}' already used, exporting occurrence as '{}'", base_id, assigned);
            self.repeats += 1;
        }
        self.occurrences.insert(base_id.to_string(), suffix + 1);
        self.emitted.insert(assigned.clone());
        assigned
    }

    /// How many ids were handed out with a suffix so far.
    pub fn repeat_count(&self) -> usize {
        self.repeats
    }
}
