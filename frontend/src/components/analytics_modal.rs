use yew::prelude::*;

use crate::stats::analytics::AnalyticsSummary;

#[derive(Properties, PartialEq)]
pub struct AnalyticsModalProps {
    pub summary: AnalyticsSummary,
    pub on_close: Callback<()>,
}

#[function_component(AnalyticsModal)]
pub fn analytics_modal(props: &AnalyticsModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let summary = &props.summary;
    let trend_class = if summary.trend_is_positive() { "text-success" } else { "text-danger" };

    html! {
        <div class="modal-backdrop-custom" onclick={close.clone()}>
            <div class="modal-dialog-custom" role="dialog" aria-modal="true" onclick={keep_open}>
                <div class="modal-header">
                    <h5 class="modal-title">{"Analytics"}</h5>
                    <button type="button" class="btn-close" aria-label="Fermer" onclick={close.clone()}></button>
                </div>
                <div class="modal-body">
                    <div class="row">
                        <div class="col-md-6">
                            <h6>{"Total Établissements"}</h6>
                            <p class="h4 text-primary">{ summary.total_facilities }</p>
                        </div>
                        <div class="col-md-6">
                            <h6>{"Moyenne Scolarisation"}</h6>
                            <p class="h4 text-success">{ summary.mean_label() }</p>
                        </div>
                        <div class="col-md-12 mt-3">
                            <h6>{"Tendance Performance"}</h6>
                            <p class={classes!("h5", trend_class)}>{ summary.trend_label() }</p>
                        </div>
                    </div>
                </div>
                <div class="modal-footer">
                    <button type="button" class="btn btn-primary" onclick={close}>{"Fermer"}</button>
                </div>
            </div>
        </div>
    }
}
