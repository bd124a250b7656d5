use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::app::use_site;
use crate::browser::dom::scroll_y;
use crate::effects::parallax_style;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Full-width banner whose backdrop drifts with the page scroll.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let site = use_site();
    let offset = use_state(scroll_y);

    {
        let offset = offset.clone();
        use_event_with_window("scroll", move |_: Event| offset.set(scroll_y()));
    }

    let style = parallax_style(*offset, site.config.effects.parallax_speed).to_css();

    html! {
        <section id="accueil" class="hero-section">
            <div class="hero-backdrop" style={style}></div>
            <div class="container hero-content">
                <h1 class="hero-title" data-aos="fade-down">{ props.title.clone() }</h1>
                <p class="hero-subtitle" data-aos="fade-up" data-aos-delay="200">{ props.subtitle.clone() }</p>
                <div class="hero-actions" data-aos="zoom-in" data-aos-delay="400">
                    { for props.children.iter() }
                </div>
            </div>
        </section>
    }
}
