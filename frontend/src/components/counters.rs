use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::app::use_site;
use crate::browser::observer::VisibilityObserver;
use crate::counter::{CounterGroup, OnceLatch};
use crate::effects::pulse_icon_style;
use crate::scheduler::Scheduler;

#[derive(Clone, PartialEq)]
pub struct StatItem {
    pub icon: &'static str,
    pub target: u64,
    pub label: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct StatCountersProps {
    pub items: Vec<StatItem>,
}

/// Headline figures that count up from zero the first time they scroll into view.
#[function_component(StatCounters)]
pub fn stat_counters(props: &StatCountersProps) -> Html {
    let site = use_site();
    let texts = use_state(|| vec!["0".to_string(); props.items.len()]);
    let first_ref = use_node_ref();
    let latch = use_mut_ref(OnceLatch::default);

    {
        let site = site.clone();
        let texts = texts.clone();
        let first_ref = first_ref.clone();
        let targets: Vec<u64> = props.items.iter().map(|item| item.target).collect();
        use_effect_with_deps(
            move |targets| {
                let config = site.config.counters.clone();
                let scheduler = site.scheduler.clone();
                let targets = targets.clone();
                let observer = first_ref.cast::<web_sys::Element>().and_then(|first| {
                    let observer = VisibilityObserver::new(config.threshold, "0px", move |_| {
                        if !latch.borrow_mut().fire() {
                            return;
                        }
                        let group = CounterGroup::new(targets.iter().copied(), config.duration_ms, config.frame_ms);
                        run_frame(Rc::new(RefCell::new(group)), texts.clone(), scheduler.clone());
                    })
                    .map_err(|e| log::error!("Counters will not animate: {}", e))
                    .ok()?;
                    observer.observe(&first);
                    Some(observer)
                });
                move || drop(observer)
            },
            targets,
        );
    }

    let icon_step = site.config.effects.icon_stagger_ms;
    html! {
        <div class="row stats-row">
            {
                props.items.iter().enumerate().map(|(index, item)| {
                    let text = texts.get(index).cloned().unwrap_or_default();
                    let node_ref = if index == 0 { first_ref.clone() } else { NodeRef::default() };
                    html! {
                        <div class="col-md-3 col-6" data-aos="zoom-in" data-aos-delay={(index * 100).to_string()}>
                            <div class="stat-item">
                                <div class="stat-icon" style={pulse_icon_style(index, icon_step).to_css()}>
                                    <i class={classes!(item.icon)}></i>
                                </div>
                                <div class="stat-number" ref={node_ref} data-count={item.target.to_string()}>{ text }</div>
                                <div class="stat-label">{ item.label }</div>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

fn run_frame(group: Rc<RefCell<CounterGroup>>, texts: UseStateHandle<Vec<String>>, scheduler: Rc<dyn Scheduler>) {
    let (frame, done) = group.borrow_mut().advance();
    texts.set(frame);
    if !done {
        let next = scheduler.clone();
        scheduler.next_frame(Box::new(move || run_frame(group, texts, next)));
    }
}
