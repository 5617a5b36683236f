use log::warn;
use yew::prelude::*;

use crate::config;
use crate::dom;

/// Placeholder picked up by the Fillout embed script, which is injected on
/// mount so it finds the rendered div.
#[function_component(FormEmbed)]
pub fn form_embed() -> Html {
    use_effect_with_deps(
        move |_| {
            let script = match dom::inject_script(config::FILLOUT_SCRIPT_URL) {
                Ok(script) => Some(script),
                Err(err) => {
                    warn!("could not load form embed: {}", err);
                    None
                }
            };
            move || drop(script)
        },
        (),
    );

    html! {
        <div
            class="form-embed"
            style="width: 100%; min-height: 500px;"
            data-fillout-id={config::FILLOUT_FORM_ID}
            data-fillout-embed-type="standard"
            data-fillout-inherit-parameters=""
            data-fillout-dynamic-resize=""
        ></div>
    }
}
