use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;

use crate::notification::{Notification, Notifier, Placement};
use crate::scheduler::Scheduler;

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Clone, Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

impl ToastList {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => next.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(next)
    }
}

/// [`Notifier`] that shows toasts and removes each after its time-to-live.
pub struct ToastNotifier {
    dispatcher: UseReducerDispatcher<ToastList>,
    scheduler: Rc<dyn Scheduler>,
    next_id: Cell<u64>,
}

impl ToastNotifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            dispatcher,
            scheduler,
            next_id: Cell::new(0),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let ttl_ms = notification.ttl_ms;
        self.dispatcher
            .dispatch(ToastAction::Push(Toast { id, notification }));

        let dispatcher = self.dispatcher.clone();
        self.scheduler.schedule(
            ttl_ms,
            Box::new(move || dispatcher.dispatch(ToastAction::Dismiss(id))),
        );
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastsProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toasts)]
pub fn toasts(props: &ToastsProps) -> Html {
    let stack = |placement: Placement| {
        let items = props
            .toasts
            .iter()
            .filter(|toast| toast.notification.placement == placement)
            .map(|toast| {
                let on_close = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
                };
                html! {
                    <div key={toast.id.to_string()} class={classes!("alert", toast.notification.level.css_class(), "fade", "show")} role="alert">
                        { toast.notification.message.clone() }
                        <button type="button" class="btn-close" aria-label="Fermer" onclick={on_close}></button>
                    </div>
                }
            })
            .collect::<Html>();
        html! { <div class={placement.css_class()}>{ items }</div> }
    };

    html! {
        <>
            { stack(Placement::TopRight) }
            { stack(Placement::BottomLeft) }
        </>
    }
}
