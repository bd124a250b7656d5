//! The statistics section's state and its render/update/export operations.

use std::rc::Rc;

use chrono::NaiveDate;

use super::analytics::AnalyticsSummary;
use super::chart::{build_bars, Bar};
use super::dataset::{DatasetId, StatisticsTable};
use super::export::{build_export, ExportFormat, ExportPayload, FileSaver};
use super::simulation::{simulate_tick, DataUpdate, RandomSource};
use crate::config::{NotificationConfig, StatsConfig};
use crate::error::Result;
use crate::notification::{Notification, NotificationLevel, Notifier};

pub const REFRESH_SUCCESS: &str = "Statistiques actualisées avec succès";

/// Where rendered bars go. A view without a container for `id` ignores it.
pub trait ChartView {
    fn show(&self, id: DatasetId, bars: Vec<Bar>);
}

pub struct StatisticsRenderer {
    table: StatisticsTable,
    view: Rc<dyn ChartView>,
    notifier: Rc<dyn Notifier>,
    stats: StatsConfig,
    notifications: NotificationConfig,
}

impl StatisticsRenderer {
    pub fn new(
        table: StatisticsTable,
        view: Rc<dyn ChartView>,
        notifier: Rc<dyn Notifier>,
        stats: StatsConfig,
        notifications: NotificationConfig,
    ) -> Self {
        Self {
            table,
            view,
            notifier,
            stats,
            notifications,
        }
    }

    pub fn table(&self) -> &StatisticsTable {
        &self.table
    }

    /// Bars for `id` from the current data. Pure in the table.
    pub fn bars(&self, id: DatasetId) -> Vec<Bar> {
        build_bars(self.table.dataset(id), id.unit())
    }

    pub fn render(&self, id: DatasetId) {
        self.view.show(id, self.bars(id));
    }

    pub fn render_all(&self) {
        for id in DatasetId::ALL {
            self.render(id);
        }
    }

    /// One tick of the simulated feed. Every changed chart is re-rendered
    /// after its mutation, then announced.
    pub fn simulate_update(&mut self, rng: &mut dyn RandomSource) -> Vec<DataUpdate> {
        let updates = simulate_tick(&mut self.table, rng);
        for update in &updates {
            self.render(update.dataset);
            self.notifier.notify(Notification::data_update(
                update.message(),
                self.notifications.data_update_ttl_ms,
            ));
        }
        updates
    }

    /// Re-renders every chart and confirms with a success banner.
    pub fn refresh(&self) {
        self.render_all();
        self.notifier.notify(Notification::new(
            REFRESH_SUCCESS,
            NotificationLevel::Success,
            self.notifications.default_ttl_ms,
        ));
    }

    pub fn export_payload(&self, format: ExportFormat, date: NaiveDate) -> Result<ExportPayload> {
        build_export(&self.table, format, &self.stats.export_prefix, date)
    }

    /// Serializes the table and hands it to `saver`. Failures are logged and
    /// announced, then returned to the caller.
    pub fn export_data(&self, format: ExportFormat, date: NaiveDate, saver: &dyn FileSaver) -> Result<()> {
        let outcome = self
            .export_payload(format, date)
            .and_then(|payload| saver.save(&payload));
        if let Err(e) = &outcome {
            log::error!("Export to {} failed: {}", format, e);
            self.notifier.notify(Notification::new(
                format!("Échec de l'export {}", format.extension().to_uppercase()),
                NotificationLevel::Danger,
                self.notifications.default_ttl_ms,
            ));
        }
        outcome
    }

    pub fn analytics(&self) -> AnalyticsSummary {
        AnalyticsSummary::from_table(&self.table)
    }
}
