use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use dren_site::config::{NotificationConfig, StatsConfig};
use dren_site::notification::{Notification, NotificationLevel, Notifier, Placement};
use dren_site::stats::chart::Bar;
use dren_site::stats::dataset::{DatasetId, StatisticsTable};
use dren_site::stats::export::{ExportFormat, ExportPayload, FileSaver};
use dren_site::stats::renderer::{ChartView, StatisticsRenderer, REFRESH_SUCCESS};
use dren_site::stats::simulation::ScriptedRandom;
use dren_site::SiteError;

#[derive(Default)]
struct RecordingView {
    shown: RefCell<Vec<(DatasetId, Vec<Bar>)>>,
}

impl RecordingView {
    fn ids(&self) -> Vec<DatasetId> {
        self.shown.borrow().iter().map(|(id, _)| *id).collect()
    }
}

impl ChartView for RecordingView {
    fn show(&self, id: DatasetId, bars: Vec<Bar>) {
        self.shown.borrow_mut().push((id, bars));
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: RefCell<Vec<Notification>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.borrow_mut().push(notification);
    }
}

#[derive(Default)]
struct RecordingSaver {
    saved: RefCell<Vec<ExportPayload>>,
}

impl FileSaver for RecordingSaver {
    fn save(&self, payload: &ExportPayload) -> dren_site::error::Result<()> {
        self.saved.borrow_mut().push(payload.clone());
        Ok(())
    }
}

struct FailingSaver;

impl FileSaver for FailingSaver {
    fn save(&self, _payload: &ExportPayload) -> dren_site::error::Result<()> {
        Err(SiteError::Dom("download blocked".to_string()))
    }
}

fn renderer() -> (StatisticsRenderer, Rc<RecordingView>, Rc<RecordingNotifier>) {
    let view = Rc::new(RecordingView::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let renderer = StatisticsRenderer::new(
        StatisticsTable::default(),
        view.clone() as Rc<dyn ChartView>,
        notifier.clone() as Rc<dyn Notifier>,
        StatsConfig::default(),
        NotificationConfig::default(),
    );
    (renderer, view, notifier)
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
}

#[test]
fn render_all_shows_every_chart_in_order() {
    let (renderer, view, _) = renderer();
    renderer.render_all();
    assert_eq!(
        view.ids(),
        vec![DatasetId::Facilities, DatasetId::Enrollment, DatasetId::Performance]
    );

    let shown = view.shown.borrow();
    let facilities = &shown[0].1;
    assert_eq!(facilities.len(), 4);
    assert_eq!(facilities[0].label, "Écoles Primaires");
    assert_relative_eq!(facilities[0].height_pct, 100.0);
    assert_relative_eq!(facilities[1].height_pct, 300.0 / 850.0 * 100.0);

    let enrollment = &shown[1].1;
    assert_eq!(enrollment[0].display, "85%");
    assert_eq!(enrollment[0].tooltip(), "Maevatanana: 85%");
}

#[test]
fn rendering_twice_yields_the_same_bars() {
    let (renderer, view, _) = renderer();
    renderer.render(DatasetId::Enrollment);
    renderer.render(DatasetId::Enrollment);
    let shown = view.shown.borrow();
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0], shown[1]);
}

#[test]
fn draw_between_thresholds_updates_facilities_only() {
    let (mut renderer, view, notifier) = renderer();
    // gate, category index, step
    let mut rng = ScriptedRandom::new([0.75, 0.0, 0.8]);

    let updates = renderer.simulate_update(&mut rng);

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].dataset, DatasetId::Facilities);
    assert_eq!(renderer.table().facilities.get("Écoles Primaires"), Some(854));
    assert_eq!(renderer.table().enrollment, StatisticsTable::default().enrollment);

    assert_eq!(view.ids(), vec![DatasetId::Facilities]);
    assert_eq!(view.shown.borrow()[0].1[0].value, 854);

    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message, "Nouveaux établissements enregistrés dans: Écoles Primaires");
    assert_eq!(sent[0].level, NotificationLevel::Info);
    assert_eq!(sent[0].placement, Placement::BottomLeft);
    assert_eq!(sent[0].ttl_ms, NotificationConfig::default().data_update_ttl_ms);
}

#[test]
fn high_draw_updates_both_charts() {
    let (mut renderer, view, notifier) = renderer();
    let mut rng = ScriptedRandom::new([0.85, 0.0, 0.0, 0.99, 0.99]);

    let updates = renderer.simulate_update(&mut rng);

    assert_eq!(updates.len(), 2);
    assert_eq!(renderer.table().facilities.get("Écoles Primaires"), Some(850));
    assert_eq!(renderer.table().enrollment.get("Befandriana"), Some(69));
    assert_eq!(view.ids(), vec![DatasetId::Facilities, DatasetId::Enrollment]);
    assert_eq!(
        notifier.sent.borrow()[1].message,
        "Amélioration du taux de scolarisation à: Befandriana"
    );
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn low_draw_changes_nothing() {
    let (mut renderer, view, notifier) = renderer();
    let updates = renderer.simulate_update(&mut ScriptedRandom::new([0.5]));
    assert!(updates.is_empty());
    assert_eq!(renderer.table(), &StatisticsTable::default());
    assert!(view.shown.borrow().is_empty());
    assert!(notifier.sent.borrow().is_empty());
}

#[test]
fn refresh_rerenders_and_confirms() {
    let (renderer, view, notifier) = renderer();
    renderer.refresh();
    assert_eq!(view.ids().len(), 3);
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].message, REFRESH_SUCCESS);
    assert_eq!(sent[0].level, NotificationLevel::Success);
    assert_eq!(sent[0].placement, Placement::TopRight);
}

#[test]
fn csv_export_reaches_the_saver() {
    let (renderer, _, notifier) = renderer();
    let saver = RecordingSaver::default();

    renderer
        .export_data(ExportFormat::Csv, day(), &saver)
        .expect("export succeeds");

    let saved = saver.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].filename, "dren-statistiques-2024-05-01.csv");
    assert_eq!(saved[0].mime, "text/csv");
    assert!(saved[0]
        .body
        .starts_with("Category,Value\nÉtablissements Écoles Primaires,850\n"));
    assert!(saved[0].body.contains("Scolarisation Maevatanana,85\n"));
    assert!(saved[0].body.ends_with("Performance 2025,90\n"));
    assert!(notifier.sent.borrow().is_empty());
}

#[test]
fn json_export_keeps_dataset_keys() {
    let (renderer, _, _) = renderer();
    let payload = renderer
        .export_payload(ExportFormat::Json, day())
        .expect("payload");
    assert_eq!(payload.filename, "dren-statistiques-2024-05-01.json");

    let parsed: StatisticsTable = serde_json::from_str(&payload.body).expect("valid json");
    assert_eq!(&parsed, renderer.table());
    let value: serde_json::Value = serde_json::from_str(&payload.body).expect("valid json");
    assert_eq!(value["etablissements"]["Lycées"], 80);
    assert_eq!(value["scolarisation"]["Kandreho"], 78);
}

#[test]
fn failed_export_is_announced_and_returned() {
    let (renderer, _, notifier) = renderer();

    let outcome = renderer.export_data(ExportFormat::Csv, day(), &FailingSaver);

    assert!(matches!(outcome, Err(SiteError::Dom(_))));
    let sent = notifier.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].level, NotificationLevel::Danger);
    assert_eq!(sent[0].message, "Échec de l'export CSV");
}

#[test]
fn analytics_reads_the_current_table() {
    let (mut renderer, _, _) = renderer();
    let before = renderer.analytics();
    assert_eq!(before.total_facilities, 1250);
    assert_relative_eq!(before.mean_enrollment, 75.75);
    assert_relative_eq!(before.performance_trend, 5.0 / 85.0 * 100.0, epsilon = 1e-9);
    assert_eq!(before.trend_label(), "+5.9%");

    renderer.simulate_update(&mut ScriptedRandom::new([0.75, 0.4, 0.99]));
    assert_eq!(renderer.analytics().total_facilities, 1254);
}
