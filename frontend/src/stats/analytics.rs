use super::dataset::{Dataset, StatisticsTable};

pub fn total(dataset: &Dataset) -> u64 {
    dataset.values().sum()
}

/// Arithmetic mean, 0 for an empty dataset.
pub fn mean(dataset: &Dataset) -> f64 {
    if dataset.is_empty() {
        return 0.0;
    }
    total(dataset) as f64 / dataset.len() as f64
}

/// Percent change between the last two entries in insertion order.
///
/// 0 with fewer than two entries or when the earlier value is 0.
pub fn trend(dataset: &Dataset) -> f64 {
    let values: Vec<u64> = dataset.values().collect();
    match values.as_slice() {
        [.., previous, latest] if *previous != 0 => {
            (*latest as f64 - *previous as f64) / *previous as f64 * 100.0
        }
        _ => 0.0,
    }
}

/// Figures shown in the analytics dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_facilities: u64,
    pub mean_enrollment: f64,
    pub performance_trend: f64,
}

impl AnalyticsSummary {
    pub fn from_table(table: &StatisticsTable) -> Self {
        Self {
            total_facilities: total(&table.facilities),
            mean_enrollment: mean(&table.enrollment),
            performance_trend: trend(&table.performance),
        }
    }

    pub fn mean_label(&self) -> String {
        format!("{:.1}%", self.mean_enrollment)
    }

    pub fn trend_label(&self) -> String {
        format!("{:+.1}%", self.performance_trend)
    }

    pub fn trend_is_positive(&self) -> bool {
        self.performance_trend >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_table_summary() {
        let summary = AnalyticsSummary::from_table(&StatisticsTable::default());
        assert_eq!(summary.total_facilities, 1250);
        assert_relative_eq!(summary.mean_enrollment, 75.75);
        // 2024 -> 2025: 85 -> 90
        assert_relative_eq!(summary.performance_trend, 5.0 / 85.0 * 100.0);
        assert_eq!(summary.trend_label(), "+5.9%");
        assert!(summary.trend_is_positive());
    }

    #[test]
    fn declining_trend_is_negative() {
        let dataset: Dataset = [("2023", 80), ("2024", 60)].into_iter().collect();
        assert_relative_eq!(trend(&dataset), -25.0);
        let summary = AnalyticsSummary {
            total_facilities: 0,
            mean_enrollment: 72.34,
            performance_trend: trend(&dataset),
        };
        assert_eq!(summary.mean_label(), "72.3%");
        assert_eq!(summary.trend_label(), "-25.0%");
        assert!(!summary.trend_is_positive());
    }

    #[test]
    fn degenerate_inputs_are_zero() {
        assert_eq!(mean(&Dataset::new()), 0.0);
        assert_eq!(trend(&Dataset::new()), 0.0);
        let from_zero: Dataset = [("a", 0), ("b", 5)].into_iter().collect();
        assert_eq!(trend(&from_zero), 0.0);
    }
}
