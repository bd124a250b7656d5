use super::dataset::{Dataset, ValueUnit};

/// One rendered bar: a (label, value) pair scaled against the dataset max.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    /// Text shown on the bar, unit included.
    pub display: String,
    /// Height as a percentage of the chart, `value / max * 100`.
    pub height_pct: f64,
}

impl Bar {
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, self.display)
    }

    pub fn height_css(&self) -> String {
        format!("{}%", self.height_pct)
    }
}

/// Rebuilds the full bar list for `dataset`, in insertion order.
///
/// A dataset whose max is 0 renders flat bars instead of dividing by zero.
pub fn build_bars(dataset: &Dataset, unit: ValueUnit) -> Vec<Bar> {
    let max = dataset.max().unwrap_or(0);
    dataset
        .iter()
        .map(|(label, value)| Bar {
            label: label.to_string(),
            value,
            display: unit.display(value),
            height_pct: if max == 0 {
                0.0
            } else {
                value as f64 / max as f64 * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_the_chart() {
        let dataset: Dataset = [("a", 50), ("b", 100), ("c", 25)].into_iter().collect();
        let bars = build_bars(&dataset, ValueUnit::Count);
        let heights: Vec<f64> = bars.iter().map(|bar| bar.height_pct).collect();
        assert_eq!(heights, vec![50.0, 100.0, 25.0]);
        assert_eq!(bars[1].height_css(), "100%");
    }

    #[test]
    fn empty_and_zero_datasets() {
        assert!(build_bars(&Dataset::new(), ValueUnit::Count).is_empty());
        let zeros: Dataset = [("a", 0), ("b", 0)].into_iter().collect();
        assert!(build_bars(&zeros, ValueUnit::Count)
            .iter()
            .all(|bar| bar.height_pct == 0.0));
    }

    #[test]
    fn tooltip_uses_display_text() {
        let dataset: Dataset = [("Kandreho", 78)].into_iter().collect();
        let bars = build_bars(&dataset, ValueUnit::Percent);
        assert_eq!(bars[0].display, "78%");
        assert_eq!(bars[0].tooltip(), "Kandreho: 78%");
    }
}
