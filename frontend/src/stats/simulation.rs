//! Periodic fake "live" updates for the demo charts.

use std::collections::VecDeque;

use super::dataset::{DatasetId, StatisticsTable};

pub const FACILITIES_THRESHOLD: f64 = 0.7;
pub const ENROLLMENT_THRESHOLD: f64 = 0.8;
/// Facilities grow by an integer in `[0, 5)`.
pub const FACILITIES_MAX_STEP: u64 = 5;
/// Enrollment rates grow by an integer in `[0, 2)`.
pub const ENROLLMENT_MAX_STEP: u64 = 2;

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> u64 {
        ((self.next_f64() * bound as f64) as u64).min(bound.saturating_sub(1))
    }
}

/// Replays a fixed list of draws, then keeps returning 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUpdate {
    pub dataset: DatasetId,
    pub category: String,
    pub delta: u64,
    pub value: u64,
}

impl DataUpdate {
    /// Text of the transient notification announcing this update.
    pub fn message(&self) -> String {
        match self.dataset {
            DatasetId::Enrollment => {
                format!("Amélioration du taux de scolarisation à: {}", self.category)
            }
            _ => format!("Nouveaux établissements enregistrés dans: {}", self.category),
        }
    }
}

/// One tick of the simulated feed.
///
/// A single draw gates both updates, so an enrollment update always comes
/// with a facilities update. Draw order: gate, facilities category,
/// facilities step, enrollment district, enrollment step.
pub fn simulate_tick(table: &mut StatisticsTable, rng: &mut dyn RandomSource) -> Vec<DataUpdate> {
    let gate = rng.next_f64();
    let mut updates = Vec::new();

    if gate > FACILITIES_THRESHOLD {
        updates.extend(bump_random(table, DatasetId::Facilities, FACILITIES_MAX_STEP, rng));
    }
    if gate > ENROLLMENT_THRESHOLD {
        updates.extend(bump_random(table, DatasetId::Enrollment, ENROLLMENT_MAX_STEP, rng));
    }

    tracing::debug!(gate, updates = updates.len(), "simulated data tick");
    updates
}

fn bump_random(
    table: &mut StatisticsTable,
    id: DatasetId,
    max_step: u64,
    rng: &mut dyn RandomSource,
) -> Option<DataUpdate> {
    let dataset = table.dataset_mut(id);
    if dataset.is_empty() {
        return None;
    }
    let category = dataset.label_at(rng.pick(dataset.len()))?.to_string();
    let delta = rng.below(max_step);
    let value = dataset.increment(&category, delta)?;
    Some(DataUpdate {
        dataset: id,
        category,
        delta,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_draw_changes_nothing() {
        let mut table = StatisticsTable::default();
        let mut rng = ScriptedRandom::new([0.7]);
        assert!(simulate_tick(&mut table, &mut rng).is_empty());
        assert_eq!(table, StatisticsTable::default());
    }

    #[test]
    fn high_draw_updates_both_datasets() {
        let mut table = StatisticsTable::default();
        // gate, facility index (Lycées), step 4, district index (Befandriana), step 1
        let mut rng = ScriptedRandom::new([0.95, 0.5, 0.99, 0.9, 0.6]);
        let updates = simulate_tick(&mut table, &mut rng);

        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].dataset, DatasetId::Facilities);
        assert_eq!(updates[0].category, "Lycées");
        assert_eq!(updates[0].delta, 4);
        assert_eq!(table.facilities.get("Lycées"), Some(84));
        assert_eq!(updates[1].dataset, DatasetId::Enrollment);
        assert_eq!(updates[1].category, "Befandriana");
        assert_eq!(table.enrollment.get("Befandriana"), Some(69));
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn pick_and_below_stay_in_range() {
        let mut rng = ScriptedRandom::new([0.999_999, 0.0, 0.999_999]);
        assert_eq!(rng.pick(4), 3);
        assert_eq!(rng.pick(4), 0);
        assert_eq!(rng.below(2), 1);
    }

    #[test]
    fn messages_name_the_category() {
        let update = DataUpdate {
            dataset: DatasetId::Enrollment,
            category: "Kandreho".into(),
            delta: 1,
            value: 79,
        };
        assert_eq!(update.message(), "Amélioration du taux de scolarisation à: Kandreho");
    }
}
