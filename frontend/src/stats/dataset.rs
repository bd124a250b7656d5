use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Which of the three charts a dataset backs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetId {
    Facilities,
    Enrollment,
    Performance,
}

/// How a dataset's values read on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueUnit {
    Count,
    Percent,
    Index,
}

impl ValueUnit {
    pub fn display(self, value: u64) -> String {
        match self {
            ValueUnit::Percent => format!("{}%", value),
            ValueUnit::Count | ValueUnit::Index => value.to_string(),
        }
    }
}

impl DatasetId {
    pub const ALL: [DatasetId; 3] = [
        DatasetId::Facilities,
        DatasetId::Enrollment,
        DatasetId::Performance,
    ];

    /// Key used in the JSON export.
    pub fn key(self) -> &'static str {
        match self {
            DatasetId::Facilities => "etablissements",
            DatasetId::Enrollment => "scolarisation",
            DatasetId::Performance => "performance",
        }
    }

    /// Row prefix used in the CSV export.
    pub fn csv_prefix(self) -> &'static str {
        match self {
            DatasetId::Facilities => "Établissements",
            DatasetId::Enrollment => "Scolarisation",
            DatasetId::Performance => "Performance",
        }
    }

    /// DOM id of the chart container.
    pub fn container_id(self) -> &'static str {
        match self {
            DatasetId::Facilities => "etablissementsChart",
            DatasetId::Enrollment => "scolarisationChart",
            DatasetId::Performance => "performanceChart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DatasetId::Facilities => "Établissements scolaires",
            DatasetId::Enrollment => "Taux de scolarisation par district",
            DatasetId::Performance => "Indice de performance",
        }
    }

    pub fn unit(self) -> ValueUnit {
        match self {
            DatasetId::Facilities => ValueUnit::Count,
            DatasetId::Enrollment => ValueUnit::Percent,
            DatasetId::Performance => ValueUnit::Index,
        }
    }
}

/// Ordered label -> value mapping backing one chart.
///
/// Insertion order is the display order; updates never reorder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    values: IndexMap<String, u64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.values.get(label).copied()
    }

    /// Inserts or overwrites, keeping the original position of an existing label.
    pub fn set(&mut self, label: impl Into<String>, value: u64) {
        self.values.insert(label.into(), value);
    }

    /// Adds `by` to an existing label. Returns the new value, or `None` if the
    /// label is unknown.
    pub fn increment(&mut self, label: &str, by: u64) -> Option<u64> {
        let value = self.values.get_mut(label)?;
        *value = value.saturating_add(by);
        Some(*value)
    }

    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.values.get_index(index).map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.values.iter().map(|(label, value)| (label.as_str(), *value))
    }

    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.values().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> Option<u64> {
        self.values().max()
    }
}

impl<L: Into<String>> FromIterator<(L, u64)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (L, u64)>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for (label, value) in iter {
            dataset.set(label, value);
        }
        dataset
    }
}

/// The three datasets shown on the statistics section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsTable {
    #[serde(rename = "etablissements")]
    pub facilities: Dataset,
    #[serde(rename = "scolarisation")]
    pub enrollment: Dataset,
    pub performance: Dataset,
}

impl StatisticsTable {
    pub fn dataset(&self, id: DatasetId) -> &Dataset {
        match id {
            DatasetId::Facilities => &self.facilities,
            DatasetId::Enrollment => &self.enrollment,
            DatasetId::Performance => &self.performance,
        }
    }

    pub fn dataset_mut(&mut self, id: DatasetId) -> &mut Dataset {
        match id {
            DatasetId::Facilities => &mut self.facilities,
            DatasetId::Enrollment => &mut self.enrollment,
            DatasetId::Performance => &mut self.performance,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DatasetId, &Dataset)> + '_ {
        DatasetId::ALL.into_iter().map(move |id| (id, self.dataset(id)))
    }
}

impl Default for StatisticsTable {
    fn default() -> Self {
        Self {
            facilities: [
                ("Écoles Primaires", 850),
                ("Collèges", 300),
                ("Lycées", 80),
                ("Autres", 20),
            ]
            .into_iter()
            .collect(),
            enrollment: [
                ("Maevatanana", 85),
                ("Kandreho", 78),
                ("Tsaratanana", 72),
                ("Befandriana", 68),
            ]
            .into_iter()
            .collect(),
            performance: [
                ("2019", 65),
                ("2020", 67),
                ("2021", 70),
                ("2022", 72),
                ("2023", 75),
                ("2024", 85),
                ("2025", 90),
            ]
            .into_iter()
            .collect(),
        }
    }
}
