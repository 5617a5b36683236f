use std::rc::Rc;

use yew::Reducible;

/// Open/closed state of a dropdown attached to a navigation entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    PointerEnter,
    PointerLeave,
    Toggle,
    Open,
    Close,
    FocusLeft,
    ClickedOutside,
}

impl DisclosureEvent {
    /// Keys handled on the disclosure trigger. Enter is left to the link.
    pub fn from_trigger_key(key: &str) -> Option<Self> {
        match key {
            " " | "Spacebar" => Some(DisclosureEvent::Toggle),
            "ArrowDown" | "Down" => Some(DisclosureEvent::Open),
            _ => None,
        }
    }

    /// Keys handled anywhere inside the menu, the trigger included.
    pub fn from_menu_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(DisclosureEvent::Close),
            _ => None,
        }
    }
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn next(self, event: DisclosureEvent) -> Self {
        use DisclosureEvent::*;
        match event {
            PointerEnter | Open => Disclosure::Open,
            PointerLeave | Close | FocusLeft | ClickedOutside => Disclosure::Closed,
            Toggle if self.is_open() => Disclosure::Closed,
            Toggle => Disclosure::Open,
        }
    }
}

impl Reducible for Disclosure {
    type Action = DisclosureEvent;

    fn reduce(self: Rc<Self>, event: DisclosureEvent) -> Rc<Self> {
        let next = self.next(event);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_opens_and_leave_closes() {
        let state = Disclosure::default().next(DisclosureEvent::PointerEnter);
        assert!(state.is_open());
        assert!(!state.next(DisclosureEvent::PointerLeave).is_open());
    }

    #[test]
    fn keyboard_drives_the_menu() {
        let open = Disclosure::Closed.next(DisclosureEvent::from_trigger_key("ArrowDown").unwrap());
        assert!(open.is_open());
        let closed = open.next(DisclosureEvent::from_menu_key("Escape").unwrap());
        assert!(!closed.is_open());
        let toggled = closed.next(DisclosureEvent::from_trigger_key(" ").unwrap());
        assert!(toggled.is_open());
        assert!(!toggled.next(DisclosureEvent::Toggle).is_open());
    }

    #[test]
    fn escape_closes_from_inside_the_menu() {
        // Tabbing onto a child link leaves the menu open; Escape from there
        // still has to close it.
        let open = Disclosure::Closed.next(DisclosureEvent::from_trigger_key("ArrowDown").unwrap());
        for key in ["Escape", "Esc"] {
            let event = DisclosureEvent::from_menu_key(key).unwrap();
            assert_eq!(open.next(event), Disclosure::Closed);
        }
    }

    #[test]
    fn child_links_keep_space_and_arrows() {
        for key in [" ", "Spacebar", "ArrowDown", "Down"] {
            assert_eq!(DisclosureEvent::from_menu_key(key), None);
        }
        assert_eq!(DisclosureEvent::from_trigger_key("Escape"), None);
    }

    #[test]
    fn enter_and_other_keys_are_not_consumed() {
        for key in ["Enter", "Tab", "a"] {
            assert_eq!(DisclosureEvent::from_trigger_key(key), None);
            assert_eq!(DisclosureEvent::from_menu_key(key), None);
        }
    }

    #[test]
    fn leaving_focus_or_clicking_away_closes() {
        for event in [DisclosureEvent::FocusLeft, DisclosureEvent::ClickedOutside] {
            assert_eq!(Disclosure::Open.next(event), Disclosure::Closed);
            assert_eq!(Disclosure::Closed.next(event), Disclosure::Closed);
        }
    }

    #[test]
    fn reducer_skips_redundant_updates() {
        let closed = Rc::new(Disclosure::Closed);
        let same = closed.clone().reduce(DisclosureEvent::Close);
        assert!(Rc::ptr_eq(&closed, &same));
        assert!(closed.reduce(DisclosureEvent::Open).is_open());
    }
}
