//! Operation-scoped placeholder labels.
//!
//! Some edits must transiently park data under labels that would
//! otherwise collide with live ones (folding row-key components back
//! into the column namespace, for example). `ScratchLabels` hands out
//! placeholder labels proven disjoint from a live label set and keeps
//! the reverse map back to the real labels, so the caller can mutate
//! in the scratch namespace and restore real labels before returning.

/// Generator of operation-scoped placeholder labels.
#[derive(Debug, Default)]
pub struct ScratchLabels {
    counter: u64,
    restore: Vec<(String, String)>,
}

impl ScratchLabels {
    /// Create an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a placeholder distinct from every label in `live` and
    /// from every placeholder handed out so far, recording `real` as
    /// the label it stands in for.
    pub fn placeholder_for(&mut self, real: &str, live: &[String]) -> String {
        loop {
            let candidate = format!("__scratch_{}__", self.counter);
            self.counter += 1;
            let taken = live.iter().any(|label| label == &candidate)
                || self.restore.iter().any(|(p, _)| p == &candidate);
            if !taken {
                self.restore.push((candidate.clone(), real.to_string()));
                return candidate;
            }
        }
    }

    /// The (placeholder, real) pairs, in allocation order.
    pub fn restore_pairs(&self) -> &[(String, String)] {
        &self.restore
    }
}
