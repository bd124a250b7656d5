use yew::prelude::*;

use crate::app::use_site;
use crate::effects::{hover_style, pulse_icon_style, HoverTarget};

/// Tracks pointer hover and hands back enter/leave callbacks.
#[hook]
fn use_hover() -> (bool, Callback<MouseEvent>, Callback<MouseEvent>) {
    let hovered = use_state(|| false);
    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    (*hovered, on_enter, on_leave)
}

#[derive(Properties, PartialEq)]
pub struct HoverButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(HoverButton)]
pub fn hover_button(props: &HoverButtonProps) -> Html {
    let (hovered, on_enter, on_leave) = use_hover();
    let style = hover_style(HoverTarget::Button, hovered).to_css();

    html! {
        <button
            type="button"
            id={props.id.clone()}
            class={classes!("btn", props.class.clone())}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            style={style}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct MissionCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub text: AttrValue,
    /// Position in the grid; staggers the reveal and the icon pulse.
    pub index: usize,
}

#[function_component(MissionCard)]
pub fn mission_card(props: &MissionCardProps) -> Html {
    let site = use_site();
    let (hovered, on_enter, on_leave) = use_hover();
    let style = hover_style(HoverTarget::MissionCard, hovered).to_css();
    let icon_style = pulse_icon_style(props.index, site.config.effects.icon_stagger_ms).to_css();
    let delay = (props.index * 100).to_string();

    html! {
        <div class="col-md-4" data-aos="fade-up" data-aos-delay={delay}>
            <div class="mission-card" onmouseenter={on_enter} onmouseleave={on_leave} style={style}>
                <div class="mission-icon" style={icon_style}>
                    <i class={classes!(props.icon.to_string())}></i>
                </div>
                <h4>{ props.title.clone() }</h4>
                <p>{ props.text.clone() }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NewsCardProps {
    pub date: AttrValue,
    pub title: AttrValue,
    pub excerpt: AttrValue,
    pub href: AttrValue,
    #[prop_or(AttrValue::Static("fade-up"))]
    pub animation: AttrValue,
}

#[function_component(NewsCard)]
pub fn news_card(props: &NewsCardProps) -> Html {
    let (hovered, on_enter, on_leave) = use_hover();
    let link_style = hover_style(HoverTarget::NewsLink, hovered).to_css();

    html! {
        <div class="col-md-4" data-aos={props.animation.clone()}>
            <article class="news-card" onmouseenter={on_enter} onmouseleave={on_leave}>
                <span class="news-date">{ props.date.clone() }</span>
                <h5>{ props.title.clone() }</h5>
                <p>{ props.excerpt.clone() }</p>
                <a class="news-link" href={props.href.clone()} style={link_style}>
                    { "Lire la suite " }<i class="fas fa-arrow-right"></i>
                </a>
            </article>
        </div>
    }
}
