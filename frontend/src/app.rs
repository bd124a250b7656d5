use std::rc::Rc;

use log::info;
use stylist::GlobalStyle;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::browser::dom::load_config;
use crate::browser::timers::BrowserScheduler;
use crate::components::notification::{ToastAction, ToastList, ToastNotifier, Toasts};
use crate::config::SiteConfig;
use crate::effects::KEYFRAMES;
use crate::notification::{LogNotifier, Notifier};
use crate::pages::home::Home;
use crate::scheduler::Scheduler;

/// Shared services handed to every component through context.
#[derive(Clone)]
pub struct SiteContext {
    pub config: Rc<SiteConfig>,
    pub scheduler: Rc<dyn Scheduler>,
    pub notifier: Rc<dyn Notifier>,
}

impl PartialEq for SiteContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
            && Rc::ptr_eq(&self.scheduler, &other.scheduler)
            && Rc::ptr_eq(&self.notifier, &other.notifier)
    }
}

impl Default for SiteContext {
    /// Stand-alone services for a component mounted outside [`App`].
    fn default() -> Self {
        Self {
            config: Rc::new(SiteConfig::default()),
            scheduler: Rc::new(BrowserScheduler::new()),
            notifier: Rc::new(LogNotifier),
        }
    }
}

/// The provided context, or fresh stand-alone services.
#[hook]
pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().unwrap_or_default()
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    let toasts = use_reducer(ToastList::default);
    let site = {
        let dispatcher = toasts.dispatcher();
        use_state(move || {
            let config = Rc::new(load_config());
            let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new());
            let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::new(dispatcher, scheduler.clone()));
            SiteContext {
                config,
                scheduler,
                notifier,
            }
        })
    };

    // Keyframes used by the reveal, bar and icon animations.
    let _keyframes = use_state(|| match GlobalStyle::new(KEYFRAMES) {
        Ok(style) => Some(style),
        Err(e) => {
            log::error!("Failed to install keyframes: {}", e);
            None
        }
    });

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<SiteContext> context={(*site).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <Toasts toasts={toasts.toasts().to_vec()} on_dismiss={on_dismiss} />
        </ContextProvider<SiteContext>>
    }
}
