use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::content;
use crate::dom::{self, WindowViewport};
use crate::navigation::{NavMsg, NavigationController, NavigationState, Page};

/// Navigation state owned by the shell, shared with the navbar, footer and
/// pages through a context.
#[derive(Clone, PartialEq)]
pub struct NavHandle {
    pub state: UseReducerHandle<NavigationState>,
    pub switch_page: Callback<Page>,
}

impl NavHandle {
    pub fn menu_open(&self) -> bool {
        self.state.mobile_menu_open
    }

    /// Click handler that routes `destination` through the navigation
    /// controller.
    pub fn link(&self, destination: impl Into<String>) -> Callback<MouseEvent> {
        let destination = destination.into();
        let state = self.state.clone();
        let controller = NavigationController::new(WindowViewport, self.switch_page.clone());
        Callback::from(move |e: MouseEvent| {
            let mut next = (*state).clone();
            let action = controller.navigate(&mut next, &destination);
            if action.suppresses_default() {
                e.prevent_default();
            }
            state.dispatch(NavMsg::Apply(action));
        })
    }

    pub fn go(&self, page: Page) -> Callback<MouseEvent> {
        self.link(page.id())
    }

    pub fn toggle_menu(&self) -> Callback<MouseEvent> {
        let state = self.state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavMsg::ToggleMenu);
        })
    }

    pub fn close_menu(&self) -> Callback<MouseEvent> {
        let state = self.state.clone();
        Callback::from(move |_| state.dispatch(NavMsg::CloseMenu))
    }
}

#[hook]
pub fn use_navigation() -> NavHandle {
    use_context::<NavHandle>().expect("NavHandle context is provided by the app shell")
}

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_reset() {
    use_effect_with_deps(
        move |_| {
            dom::reset_scroll();
            || ()
        },
        (),
    );
}

#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    pub index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }
}

pub struct Advance;

impl Reducible for Carousel {
    type Action = Advance;

    fn reduce(self: Rc<Self>, _: Advance) -> Rc<Self> {
        Rc::new(Carousel {
            index: content::next_index(self.index, self.len),
            len: self.len,
        })
    }
}

/// Index of the slide to show, advancing every `period_ms`.
#[hook]
pub fn use_carousel(len: usize, period_ms: u32) -> usize {
    let carousel = use_reducer(move || Carousel::new(len));

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |(len, period_ms)| {
                let interval = (*len > 1).then(|| {
                    let carousel = carousel.clone();
                    Interval::new(*period_ms, move || carousel.dispatch(Advance))
                });
                move || drop(interval)
            },
            (len, period_ms),
        );
    }

    carousel.index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_cycles_through_every_slide() {
        let mut carousel = Rc::new(Carousel::new(3));
        let mut seen = vec![carousel.index];
        for _ in 0..4 {
            carousel = carousel.reduce(Advance);
            seen.push(carousel.index);
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let carousel = Rc::new(Carousel::new(0)).reduce(Advance);
        assert_eq!(carousel.index, 0);
    }
}
