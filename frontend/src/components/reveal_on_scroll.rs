use std::time::Duration;

use web_sys::Element;
use yew::prelude::*;

use crate::dom::{self, IntersectionWatcher};
use crate::reveal::{Direction, RevealCoordinator, RevealState, DEFAULT_THRESHOLD};

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Milliseconds to wait after entering before the transition starts.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let state = {
        let direction = props.direction;
        let delay = Duration::from_millis(props.delay.into());
        use_state(move || RevealState::new(direction, delay))
    };

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |threshold| {
                let handle = if state.is_visible() {
                    None
                } else {
                    let coordinator = RevealCoordinator::new(IntersectionWatcher::default(), *threshold);
                    node.cast::<Element>().and_then(|element| {
                        coordinator.attach(&element, move || {
                            let mut next = (*state).clone();
                            if next.reveal(dom::now_ms()) {
                                state.set(next);
                            }
                        })
                    })
                };
                move || drop(handle)
            },
            props.threshold,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), state.is_visible().then_some("revealed"))}
            style={state.style()}
        >
            { for props.children.iter() }
        </div>
    }
}
