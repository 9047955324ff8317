//! Bounded top-K model table.

use regsearch_math::sort_indices;
use regsearch_primitives::{Model, Ranking, VariableSet};

/// Outcome of offering a model to the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Admission {
    /// Stored in a free slot.
    Appended,
    /// Replaced the worst stored model.
    Replaced {
        /// Slot that was overwritten.
        slot: usize,
        /// Standard error of the evicted model.
        evicted_error: f64,
    },
    /// Not better than the current worst model.
    NotCompetitive {
        /// Standard error of the current worst model.
        worst_error: f64,
    },
}

impl Admission {
    /// Whether the model was stored.
    #[must_use]
    pub const fn is_admitted(&self) -> bool {
        matches!(self, Self::Appended | Self::Replaced { .. })
    }
}

/// Fixed-capacity table keeping the models with the smallest standard errors.
///
/// Once full, a new model replaces the current worst entry only when its
/// standard error is strictly smaller. The worst entry is found by a linear
/// scan; capacities are expected to stay in the tens.
#[derive(Debug, Clone)]
pub struct ModelTable {
    capacity: usize,
    models: Vec<Model>,
}

impl ModelTable {
    /// Create an empty table.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity, models: Vec::with_capacity(capacity) }
    }

    /// Maximum number of stored models.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored models.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Whether every slot is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.models.len() >= self.capacity
    }

    /// Stored models in slot order.
    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Slot and standard error of the worst stored model.
    #[must_use]
    pub fn worst(&self) -> Option<(usize, f64)> {
        let mut worst: Option<(usize, f64)> = None;
        for (slot, model) in self.models.iter().enumerate() {
            if worst.is_none_or(|(_, se)| model.standard_error > se) {
                worst = Some((slot, model.standard_error));
            }
        }
        worst
    }

    /// Offer a model.
    pub fn admit(&mut self, model: Model) -> Admission {
        if !self.is_full() {
            self.models.push(model);
            return Admission::Appended;
        }

        match self.worst() {
            Some((slot, worst_error)) if model.standard_error < worst_error => {
                self.models[slot] = model;
                Admission::Replaced { slot, evicted_error: worst_error }
            }
            Some((_, worst_error)) => Admission::NotCompetitive { worst_error },
            None => Admission::NotCompetitive { worst_error: f64::INFINITY },
        }
    }

    /// Combinations of exactly `size` variables currently stored, in slot order.
    #[must_use]
    pub fn combinations_of_size(&self, size: usize) -> Vec<VariableSet> {
        self.models
            .iter()
            .filter(|m| m.variables.len() == size)
            .map(|m| m.variables.clone())
            .collect()
    }

    /// Sort by ascending standard error into a [`Ranking`].
    #[must_use]
    pub fn into_ranking(self) -> Ranking {
        let errors: Vec<f64> = self.models.iter().map(|m| m.standard_error).collect();
        let order = sort_indices(&errors);
        let mut slots: Vec<Option<Model>> = self.models.into_iter().map(Some).collect();
        Ranking::new(order.into_iter().filter_map(|i| slots[i].take()).collect())
    }
}
