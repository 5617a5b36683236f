//! Page navigation: resolves a clicked destination into a page switch, an
//! in-page scroll, or a plain browser link.

use std::fmt;
use std::rc::Rc;

use log::debug;
use yew::{Callback, Reducible};

use crate::config;

/// Top-level views the shell can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Companies,
    IndividualServices,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Companies, Page::IndividualServices];

    /// Logical name used in navigation destinations.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Companies => "companies",
            Page::IndividualServices => "individual-services",
        }
    }

    pub fn from_id(id: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|page| page.id() == id)
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Companies => "/companies",
            Page::IndividualServices => "/individual-services",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

const HOME_MARKER: &str = "#";
const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

pub fn is_external(destination: &str) -> bool {
    EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| destination.starts_with(scheme))
}

/// A parsed navigation destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    External(&'a str),
    /// The bare home marker, meaning the top of the home page.
    Top,
    Anchor(&'a str),
    Page(Page),
}

impl<'a> Destination<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        if is_external(raw) {
            return Some(Destination::External(raw));
        }
        if raw == HOME_MARKER {
            return Some(Destination::Top);
        }
        if let Some(id) = raw.strip_prefix('#') {
            return Some(Destination::Anchor(id));
        }
        Page::from_id(raw).map(Destination::Page)
    }
}

/// What a click on a destination resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Leave the link to the browser.
    Passthrough,
    SwitchPage(Page),
    /// Link to the page already shown; only the menu closes.
    StayOnPage,
    ScrollToTop,
    ScrollToAnchor(String),
    /// Destination could not be resolved; nothing happens.
    Ignore,
}

impl NavAction {
    /// Whether the browser's default link handling has to be cancelled.
    pub fn suppresses_default(&self) -> bool {
        !matches!(self, NavAction::Passthrough)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub current_page: Page,
    pub mobile_menu_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Page::Home)
    }
}

impl NavigationState {
    pub fn new(current_page: Page) -> Self {
        Self {
            current_page,
            mobile_menu_open: false,
        }
    }

    pub fn resolve(&self, destination: &str) -> NavAction {
        match Destination::parse(destination) {
            None => NavAction::Ignore,
            Some(Destination::External(_)) => NavAction::Passthrough,
            Some(Destination::Page(page)) if page == self.current_page => NavAction::StayOnPage,
            Some(Destination::Page(page)) => NavAction::SwitchPage(page),
            // Section links from a sub-page land on the top of home. The
            // anchor itself is not scrolled to after the switch.
            Some(Destination::Top | Destination::Anchor(_)) if self.current_page != Page::Home => {
                NavAction::SwitchPage(Page::Home)
            }
            Some(Destination::Top) => NavAction::ScrollToTop,
            Some(Destination::Anchor(id)) => NavAction::ScrollToAnchor(id.to_string()),
        }
    }

    pub fn apply(&mut self, action: &NavAction) {
        match action {
            NavAction::Passthrough | NavAction::Ignore => {}
            NavAction::SwitchPage(page) => {
                self.current_page = *page;
                self.mobile_menu_open = false;
            }
            NavAction::StayOnPage | NavAction::ScrollToTop | NavAction::ScrollToAnchor(_) => {
                self.mobile_menu_open = false;
            }
        }
    }
}

pub enum NavMsg {
    Apply(NavAction),
    /// The router landed on a page (initial load, back/forward).
    Arrived(Page),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavigationState {
    type Action = NavMsg;

    fn reduce(self: Rc<Self>, msg: NavMsg) -> Rc<Self> {
        let mut next = (*self).clone();
        match msg {
            NavMsg::Apply(action) => next.apply(&action),
            NavMsg::Arrived(page) => {
                if next.current_page != page {
                    next.current_page = page;
                    next.mobile_menu_open = false;
                }
            }
            NavMsg::ToggleMenu => next.mobile_menu_open = !next.mobile_menu_open,
            NavMsg::CloseMenu => next.mobile_menu_open = false,
        }

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Scrolling capability of the surface the pages are rendered in.
pub trait Viewport {
    fn scroll_to_top(&self);

    /// Smoothly brings the element with `id` into view. Returns false when no
    /// such element exists.
    fn scroll_to_anchor(&self, id: &str) -> bool;
}

pub struct NavigationController<V> {
    viewport: V,
    switch_page: Callback<Page>,
}

impl<V: Viewport> NavigationController<V> {
    pub fn new(viewport: V, switch_page: Callback<Page>) -> Self {
        Self {
            viewport,
            switch_page,
        }
    }

    /// Resolves `destination` against `state`, runs its side effects, and
    /// applies the result to `state`.
    pub fn navigate(&self, state: &mut NavigationState, destination: &str) -> NavAction {
        let action = state.resolve(destination);
        if action == NavAction::Ignore {
            debug!("ignoring unresolvable destination {:?}", destination);
        }
        self.perform(&action);
        state.apply(&action);
        action
    }

    fn perform(&self, action: &NavAction) {
        match action {
            NavAction::SwitchPage(page) => {
                debug!("switching to page {}", page);
                self.switch_page.emit(*page);
            }
            NavAction::ScrollToTop => self.viewport.scroll_to_top(),
            NavAction::ScrollToAnchor(id) => {
                if !self.viewport.scroll_to_anchor(id) {
                    debug!("no element with id {:?}, not scrolling", id);
                }
            }
            NavAction::Passthrough | NavAction::StayOnPage | NavAction::Ignore => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub destination: &'static str,
    pub children: &'static [NavLink],
}

impl NavLink {
    pub const fn leaf(label: &'static str, destination: &'static str) -> Self {
        Self {
            label,
            destination,
            children: &[],
        }
    }

    pub fn is_external(&self) -> bool {
        is_external(self.destination)
    }

    /// `href` attribute for the rendered anchor. Page links point at their
    /// route so opening them in a new tab still works.
    pub fn href(&self) -> &'static str {
        match Destination::parse(self.destination) {
            Some(Destination::Page(page)) => page.path(),
            _ => self.destination,
        }
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink::leaf("Home", "#"),
    NavLink {
        label: "Services",
        destination: "#services",
        children: &[
            NavLink::leaf("Individuals", "individual-services"),
            NavLink::leaf("Companies", "companies"),
        ],
    },
    NavLink::leaf("Contact", config::WHATSAPP_URL),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeViewport {
        anchors: Vec<&'static str>,
        scrolls: RefCell<Vec<String>>,
    }

    impl Viewport for &FakeViewport {
        fn scroll_to_top(&self) {
            self.scrolls.borrow_mut().push("top".to_string());
        }

        fn scroll_to_anchor(&self, id: &str) -> bool {
            if self.anchors.contains(&id) {
                self.scrolls.borrow_mut().push(id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn controller(
        viewport: &FakeViewport,
    ) -> (NavigationController<&FakeViewport>, Rc<RefCell<Vec<Page>>>) {
        let switched = Rc::new(RefCell::new(Vec::new()));
        let log = switched.clone();
        let callback = Callback::from(move |page| log.borrow_mut().push(page));
        (NavigationController::new(viewport, callback), switched)
    }

    #[test]
    fn parses_destinations() {
        assert_eq!(
            Destination::parse("https://wa.me/1"),
            Some(Destination::External("https://wa.me/1"))
        );
        assert_eq!(
            Destination::parse("mailto:a@b.c"),
            Some(Destination::External("mailto:a@b.c"))
        );
        assert_eq!(Destination::parse("#"), Some(Destination::Top));
        assert_eq!(
            Destination::parse("#services"),
            Some(Destination::Anchor("services"))
        );
        assert_eq!(
            Destination::parse("individual-services"),
            Some(Destination::Page(Page::IndividualServices))
        );
        assert_eq!(Destination::parse("about"), None);
        assert_eq!(Destination::parse(""), None);
    }

    #[test]
    fn external_destination_leaves_state_alone() {
        let viewport = FakeViewport::default();
        let (controller, switched) = controller(&viewport);
        for page in Page::ALL {
            let mut state = NavigationState {
                current_page: page,
                mobile_menu_open: true,
            };
            let before = state.clone();
            let action = controller.navigate(&mut state, config::WHATSAPP_URL);
            assert_eq!(action, NavAction::Passthrough);
            assert!(!action.suppresses_default());
            assert_eq!(state, before);
        }
        assert!(switched.borrow().is_empty());
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn companies_is_reachable_from_every_page() {
        let viewport = FakeViewport::default();
        let (controller, switched) = controller(&viewport);
        for page in Page::ALL {
            let mut state = NavigationState::new(page);
            controller.navigate(&mut state, "companies");
            assert_eq!(state.current_page, Page::Companies);
        }
        assert_eq!(*switched.borrow(), vec![Page::Companies; 2]);
    }

    #[test]
    fn linking_to_the_current_page_only_closes_the_menu() {
        let viewport = FakeViewport::default();
        let (controller, switched) = controller(&viewport);
        for (page, destination) in [(Page::Home, "home"), (Page::Companies, "companies")] {
            let mut state = NavigationState {
                current_page: page,
                mobile_menu_open: true,
            };
            let action = controller.navigate(&mut state, destination);
            assert_eq!(action, NavAction::StayOnPage);
            assert!(action.suppresses_default());
            assert_eq!(state, NavigationState::new(page));
        }
        assert!(switched.borrow().is_empty());
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn anchor_from_sub_page_switches_home_without_scrolling() {
        let viewport = FakeViewport {
            anchors: vec!["services"],
            ..Default::default()
        };
        let (controller, switched) = controller(&viewport);
        let mut state = NavigationState::new(Page::Companies);

        let action = controller.navigate(&mut state, "#services");

        assert_eq!(action, NavAction::SwitchPage(Page::Home));
        assert_eq!(state.current_page, Page::Home);
        assert_eq!(*switched.borrow(), vec![Page::Home]);
        assert!(viewport.scrolls.borrow().is_empty());
    }

    #[test]
    fn home_marker_from_sub_page_switches_home() {
        let state = NavigationState::new(Page::IndividualServices);
        assert_eq!(state.resolve("#"), NavAction::SwitchPage(Page::Home));
    }

    #[test]
    fn anchor_on_home_scrolls() {
        let viewport = FakeViewport {
            anchors: vec!["companies"],
            ..Default::default()
        };
        let (controller, switched) = controller(&viewport);
        let mut state = NavigationState::new(Page::Home);

        controller.navigate(&mut state, "#companies");
        controller.navigate(&mut state, "#");

        assert_eq!(*viewport.scrolls.borrow(), vec!["companies", "top"]);
        assert!(switched.borrow().is_empty());
        assert_eq!(state.current_page, Page::Home);
    }

    #[test]
    fn missing_anchor_is_a_quiet_no_op() {
        let viewport = FakeViewport::default();
        let (controller, _) = controller(&viewport);
        let mut state = NavigationState::new(Page::Home);

        let action = controller.navigate(&mut state, "#nowhere");

        assert_eq!(action, NavAction::ScrollToAnchor("nowhere".into()));
        assert!(viewport.scrolls.borrow().is_empty());
        assert_eq!(state.current_page, Page::Home);
    }

    #[test]
    fn unresolvable_destination_changes_nothing() {
        let viewport = FakeViewport::default();
        let (controller, switched) = controller(&viewport);
        let mut state = NavigationState {
            current_page: Page::Companies,
            mobile_menu_open: true,
        };
        let before = state.clone();

        assert_eq!(controller.navigate(&mut state, "pricing"), NavAction::Ignore);
        assert_eq!(controller.navigate(&mut state, "   "), NavAction::Ignore);
        assert_eq!(state, before);
        assert!(switched.borrow().is_empty());
    }

    #[test]
    fn navigation_closes_mobile_menu() {
        let viewport = FakeViewport {
            anchors: vec!["services"],
            ..Default::default()
        };
        let (controller, _) = controller(&viewport);
        for (page, destination) in [
            (Page::Home, "#services"),
            (Page::Home, "#"),
            (Page::Home, "#missing"),
            (Page::Home, "companies"),
            (Page::Companies, "#services"),
            (Page::IndividualServices, "home"),
        ] {
            let mut state = NavigationState::new(page);
            state = Rc::new(state).reduce(NavMsg::ToggleMenu).as_ref().clone();
            assert!(state.mobile_menu_open);
            controller.navigate(&mut state, destination);
            assert!(!state.mobile_menu_open, "menu left open after {destination}");
        }
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let state = Rc::new(NavigationState::new(Page::Home));
        let next = state.clone().reduce(NavMsg::Arrived(Page::Home));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(NavMsg::Arrived(Page::Companies));
        assert_eq!(next.current_page, Page::Companies);

        let next = next.reduce(NavMsg::Apply(NavAction::Passthrough));
        assert_eq!(next.current_page, Page::Companies);
    }

    #[test]
    fn nav_links_are_one_level_deep() {
        for link in NAV_LINKS {
            for child in link.children {
                assert!(child.children.is_empty(), "{} nests too deep", child.label);
            }
        }
    }

    #[test]
    fn nav_link_hrefs() {
        let services = NAV_LINKS[1];
        assert_eq!(services.href(), "#services");
        assert_eq!(services.children[0].href(), "/individual-services");
        assert_eq!(services.children[1].href(), "/companies");
        assert!(NAV_LINKS[2].is_external());
    }
}
