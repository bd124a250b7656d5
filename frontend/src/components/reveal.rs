use yew::prelude::*;

use crate::app::use_site;
use crate::browser::reveal_sink::{mount_reveal, RevealBinding};

/// Starts reveal animations for every `data-aos` element the calling
/// component (and its children) rendered. Runs once after the first render;
/// observation stops when the component unmounts.
#[hook]
pub fn use_reveal_animations() {
    let site = use_site();
    let binding = use_mut_ref(|| None::<RevealBinding>);

    use_effect_with_deps(
        move |_| {
            match mount_reveal(&site.config.reveal, site.scheduler.clone()) {
                Ok(mounted) => *binding.borrow_mut() = Some(mounted),
                Err(e) => log::error!("Reveal animations unavailable: {}", e),
            }
            move || {
                binding.borrow_mut().take();
            }
        },
        (),
    );
}
