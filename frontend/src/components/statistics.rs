use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::app::use_site;
use crate::browser::dom::MathRandom;
use crate::browser::download::BrowserDownload;
use crate::components::analytics_modal::AnalyticsModal;
use crate::components::cards::HoverButton;
use crate::components::charts::{BarChart, PerformanceChart};
use crate::stats::analytics::AnalyticsSummary;
use crate::stats::chart::Bar;
use crate::stats::dataset::{DatasetId, StatisticsTable};
use crate::stats::export::ExportFormat;
use crate::stats::renderer::{ChartView, StatisticsRenderer};

#[derive(Clone, Default, PartialEq)]
pub struct RenderedChart {
    pub generation: u64,
    pub bars: Vec<Bar>,
}

/// Latest bars per chart, as last pushed by the renderer.
#[derive(Clone, Default, PartialEq)]
pub struct ChartBoard {
    charts: BTreeMap<DatasetId, RenderedChart>,
}

impl ChartBoard {
    pub fn chart(&self, id: DatasetId) -> RenderedChart {
        self.charts.get(&id).cloned().unwrap_or_default()
    }
}

pub enum BoardAction {
    Show(DatasetId, Vec<Bar>),
}

impl Reducible for ChartBoard {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::Show(id, bars) => {
                let entry = next.charts.entry(id).or_default();
                entry.generation += 1;
                entry.bars = bars;
            }
        }
        Rc::new(next)
    }
}

/// [`ChartView`] backed by the board reducer.
struct BoardView(UseReducerDispatcher<ChartBoard>);

impl ChartView for BoardView {
    fn show(&self, id: DatasetId, bars: Vec<Bar>) {
        self.0.dispatch(BoardAction::Show(id, bars));
    }
}

#[function_component(StatisticsSection)]
pub fn statistics_section() -> Html {
    let site = use_site();
    let board = use_reducer(ChartBoard::default);
    let refreshing = use_state(|| false);
    let summary = use_state(|| None::<AnalyticsSummary>);

    let renderer = {
        let view: Rc<dyn ChartView> = Rc::new(BoardView(board.dispatcher()));
        let notifier = site.notifier.clone();
        let config = site.config.clone();
        use_mut_ref(move || {
            StatisticsRenderer::new(
                StatisticsTable::default(),
                view,
                notifier,
                config.stats.clone(),
                config.notifications.clone(),
            )
        })
    };

    {
        let renderer = renderer.clone();
        let scheduler = site.scheduler.clone();
        let period = site.config.stats.update_period_ms;
        use_effect_with_deps(
            move |_| {
                renderer.borrow().render_all();
                let timer = scheduler.repeat(
                    period,
                    Box::new(move || {
                        renderer.borrow_mut().simulate_update(&mut MathRandom);
                    }),
                );
                move || scheduler.cancel(timer)
            },
            (),
        );
    }

    let on_refresh = {
        let renderer = renderer.clone();
        let refreshing = refreshing.clone();
        let scheduler = site.scheduler.clone();
        let delay = site.config.stats.refresh_delay_ms;
        Callback::from(move |_: MouseEvent| {
            if *refreshing {
                return;
            }
            refreshing.set(true);
            let renderer = renderer.clone();
            let refreshing = refreshing.clone();
            scheduler.schedule(
                delay,
                Box::new(move || {
                    renderer.borrow().refresh();
                    refreshing.set(false);
                }),
            );
        })
    };

    let export = |format: ExportFormat| {
        let renderer = renderer.clone();
        Callback::from(move |_: MouseEvent| {
            let today = Utc::now().date_naive();
            // Failures are already logged and announced by the renderer.
            let _ = renderer.borrow().export_data(format, today, &BrowserDownload);
        })
    };

    let on_analytics = {
        let renderer = renderer.clone();
        let summary = summary.clone();
        Callback::from(move |_: MouseEvent| summary.set(Some(renderer.borrow().analytics())))
    };
    let on_close = {
        let summary = summary.clone();
        Callback::from(move |_: ()| summary.set(None))
    };

    let stagger = site.config.effects.bar_stagger_ms;
    let facilities = board.chart(DatasetId::Facilities);
    let enrollment = board.chart(DatasetId::Enrollment);
    let performance = board.chart(DatasetId::Performance);

    html! {
        <section id="statistiques" class="section statistics-section">
            <div class="container">
                <h2 class="section-title" data-aos="fade-up">{"Statistiques de l'éducation"}</h2>
                <div class="stats-controls" data-aos="fade-up" data-aos-delay="100">
                    <HoverButton id={AttrValue::Static("refreshStats")} class={classes!("btn-primary")} disabled={*refreshing} onclick={on_refresh}>
                        if *refreshing {
                            <i class="fas fa-spinner fa-spin"></i>{" Actualisation..."}
                        } else {
                            <i class="fas fa-sync-alt"></i>{" Actualiser"}
                        }
                    </HoverButton>
                    <HoverButton id={AttrValue::Static("exportJSON")} class={classes!("btn-outline-primary")} onclick={export(ExportFormat::Json)}>
                        <i class="fas fa-file-code"></i>{" Export JSON"}
                    </HoverButton>
                    <HoverButton id={AttrValue::Static("exportCSV")} class={classes!("btn-outline-primary")} onclick={export(ExportFormat::Csv)}>
                        <i class="fas fa-file-csv"></i>{" Export CSV"}
                    </HoverButton>
                    <HoverButton id={AttrValue::Static("showAnalytics")} class={classes!("btn-outline-secondary")} onclick={on_analytics}>
                        <i class="fas fa-chart-line"></i>{" Analytics"}
                    </HoverButton>
                </div>
                <div class="row">
                    <div class="col-md-6" data-aos="fade-right">
                        <BarChart
                            dataset={DatasetId::Facilities}
                            bars={facilities.bars}
                            generation={facilities.generation}
                            stagger_ms={stagger}
                        />
                    </div>
                    <div class="col-md-6" data-aos="fade-left">
                        <BarChart
                            dataset={DatasetId::Enrollment}
                            bars={enrollment.bars}
                            generation={enrollment.generation}
                            stagger_ms={stagger}
                        />
                    </div>
                    <div class="col-md-12" data-aos="fade-up">
                        <PerformanceChart points={performance.bars} />
                    </div>
                </div>
            </div>
            if let Some(summary) = (*summary).clone() {
                <AnalyticsModal summary={summary} on_close={on_close} />
            }
        </section>
    }
}
