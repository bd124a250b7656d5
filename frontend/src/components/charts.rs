use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::effects::{grow_bar_style, hover_style, HoverTarget, InlineStyle};
use crate::error::SiteError;
use crate::stats::chart::Bar;
use crate::stats::dataset::DatasetId;

#[derive(Properties, PartialEq)]
pub struct BarViewProps {
    pub bar: Bar,
    pub index: usize,
    pub stagger_ms: u32,
}

#[function_component(BarView)]
pub fn bar_view(props: &BarViewProps) -> Html {
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = InlineStyle::new()
        .with("height", props.bar.height_css())
        .merge(grow_bar_style(props.index, props.stagger_ms))
        .merge(hover_style(HoverTarget::ChartBar, *hovered))
        .to_css();

    html! {
        <div class="bar" title={props.bar.tooltip()} style={style} onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="bar-value">{ props.bar.display.clone() }</div>
            <div class="bar-label">{ props.bar.label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub dataset: DatasetId,
    pub bars: Vec<Bar>,
    /// Bumped on every render so the bars are rebuilt rather than patched.
    pub generation: u64,
    pub stagger_ms: u32,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    html! {
        <div class="chart-container">
            <h5 class="chart-title">{ props.dataset.title() }</h5>
            <div class="bar-chart" id={props.dataset.container_id()}>
                {
                    props.bars.iter().enumerate().map(|(index, bar)| html! {
                        <BarView
                            key={format!("{}-{}", props.generation, index)}
                            bar={bar.clone()}
                            index={index}
                            stagger_ms={props.stagger_ms}
                        />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PerformanceChartProps {
    pub points: Vec<Bar>,
}

/// Yearly performance index drawn as a line on a canvas.
#[function_component(PerformanceChart)]
pub fn performance_chart(props: &PerformanceChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let points = props.points.clone();
        use_effect_with_deps(
            move |points| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !points.is_empty() {
                        if let Err(e) = draw_performance(canvas, points) {
                            log::error!("Performance chart not drawn: {}", e);
                        }
                    }
                }
                || ()
            },
            points,
        );
    }

    html! {
        <div class="chart-container">
            <h5 class="chart-title">{ DatasetId::Performance.title() }</h5>
            <canvas
                id={DatasetId::Performance.container_id()}
                ref={canvas_ref}
                width="600"
                height="300"
                style="max-width: 100%;"
            />
        </div>
    }
}

fn chart_error(e: impl std::fmt::Display) -> SiteError {
    SiteError::Chart(e.to_string())
}

fn draw_performance(canvas: HtmlCanvasElement, points: &[Bar]) -> Result<(), SiteError> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| SiteError::Chart("canvas has no 2d context".to_string()))?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let max = points.iter().map(|point| point.value).max().unwrap_or(0);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..points.len(), 0..max + max / 10 + 1)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len())
        .x_label_formatter(&|x| {
            points
                .get(*x)
                .map(|point| point.label.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(chart_error)?;

    let color = RGBColor(26, 82, 118);
    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, point)| (i, point.value)),
            &color,
        ))
        .map_err(chart_error)?;
    chart
        .draw_series(
            points
                .iter()
                .enumerate()
                .map(|(i, point)| Circle::new((i, point.value), 4, color.filled())),
        )
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}
