use std::collections::BTreeSet;

/// The fixed "Training A" workout, in display order.
pub const TRAINING_A: [&str; 6] = [
    "Beinpresse (3x15)",
    "Beinbeuger Maschine (3x12)",
    "Abduktoren Maschine (3x15)",
    "Ausfallschritte (3x12 je Seite)",
    "Crunchmaschine (3x15)",
    "Plank (3x 30–45 Sek.)",
];

#[must_use]
pub fn training_a() -> &'static [&'static str] {
    &TRAINING_A
}

/// Per-exercise done flags. Only completed labels are stored, so a label toggled
/// back off is indistinguishable from one that was never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionMap {
    done: BTreeSet<String>,
}

impl CompletionMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag for `label`; an absent label becomes completed.
    pub fn toggle(&mut self, label: &str) {
        if !self.done.remove(label) {
            self.done.insert(label.to_string());
        }
    }

    #[must_use]
    pub fn is_completed(&self, label: &str) -> bool {
        self.done.contains(label)
    }

    /// Number of labels in `catalog` that are marked done.
    #[must_use]
    pub fn completed_in(&self, catalog: &[&str]) -> usize {
        catalog.iter().filter(|label| self.is_completed(label)).count()
    }

    /// Share of `catalog` marked done, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn completion_percent(&self, catalog: &[&str]) -> f64 {
        if catalog.is_empty() {
            return 0.0;
        }
        self.completed_in(catalog) as f64 / catalog.len() as f64 * 100.0
    }
}
