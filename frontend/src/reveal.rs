//! One-shot reveal of a block the first time it scrolls into view.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};

/// Fraction of the block that has to be on screen before it counts as entered.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const OFFSET_PX: i32 = 80;
pub const TRANSITION: Duration = Duration::from_millis(1200);
const EASING: &str = "cubic-bezier(0.16, 1, 0.3, 1)";

/// Side the block slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement of the hidden block, in px.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, OFFSET_PX),
            Direction::Down => (0, -OFFSET_PX),
            Direction::Left => (-OFFSET_PX, 0),
            Direction::Right => (OFFSET_PX, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealState {
    visible: bool,
    direction: Direction,
    delay: Duration,
    entered_at_ms: Option<f64>,
}

impl RevealState {
    pub fn new(direction: Direction, delay: Duration) -> Self {
        Self {
            visible: false,
            direction,
            delay,
            entered_at_ms: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Marks the block as entered at `now_ms`. Returns false if it was
    /// already visible; the flag never goes back.
    pub fn reveal(&mut self, now_ms: f64) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.entered_at_ms = Some(now_ms);
        true
    }

    /// Time at which the transition starts, once the block has entered.
    pub fn transition_start_ms(&self) -> Option<f64> {
        self.entered_at_ms
            .map(|entered| entered + self.delay.as_micros() as f64 / 1000.0)
    }

    pub fn style(&self) -> String {
        let (opacity, (x, y)) = if self.visible {
            (1, (0, 0))
        } else {
            (0, self.direction.offset())
        };
        let duration = TRANSITION.as_millis();
        format!(
            "opacity: {opacity}; transform: translate3d({x}px, {y}px, 0); \
             transition: opacity {duration}ms {EASING}, transform {duration}ms {EASING}; \
             transition-delay: {}ms;",
            self.delay.as_millis()
        )
    }
}

/// Something that can report when a target first becomes visible.
///
/// `on_enter` must be called at most once. Dropping the returned handle stops
/// the observation.
pub trait VisibilityWatcher {
    type Target: ?Sized;
    type Handle;
    type Error: fmt::Display;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_enter: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, Self::Error>;
}

pub struct RevealCoordinator<W> {
    watcher: W,
    threshold: f64,
}

impl<W: VisibilityWatcher> RevealCoordinator<W> {
    pub fn new(watcher: W, threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self { watcher, threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Watches `target` and runs `on_reveal` once when it enters the
    /// viewport. If watching is not possible the block is revealed right away
    /// and no handle is returned.
    pub fn attach(
        &self,
        target: &W::Target,
        on_reveal: impl FnOnce() + 'static,
    ) -> Option<W::Handle> {
        let slot: Rc<Cell<Option<Box<dyn FnOnce()>>>> =
            Rc::new(Cell::new(Some(Box::new(on_reveal))));
        let pending = slot.clone();
        let on_enter = Box::new(move || {
            if let Some(reveal) = pending.take() {
                debug!("block entered viewport, revealing");
                reveal();
            }
        });

        match self.watcher.observe(target, self.threshold, on_enter) {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("visibility watching unavailable ({}), revealing immediately", err);
                if let Some(reveal) = slot.take() {
                    reveal();
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Reports "entered" synchronously from `observe`.
    struct ImmediateWatcher;

    impl VisibilityWatcher for ImmediateWatcher {
        type Target = ();
        type Handle = ();
        type Error = String;

        fn observe(&self, _: &(), _: f64, on_enter: Box<dyn FnOnce()>) -> Result<(), String> {
            on_enter();
            Ok(())
        }
    }

    struct UnavailableWatcher;

    impl VisibilityWatcher for UnavailableWatcher {
        type Target = ();
        type Handle = ();
        type Error = &'static str;

        fn observe(&self, _: &(), _: f64, _: Box<dyn FnOnce()>) -> Result<(), &'static str> {
            Err("IntersectionObserver is not defined")
        }
    }

    /// Holds on to callbacks so the test decides when the block enters.
    #[derive(Default)]
    struct ManualWatcher {
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
        thresholds: RefCell<Vec<f64>>,
    }

    impl ManualWatcher {
        fn enter_all(&self) {
            for on_enter in self.pending.borrow_mut().drain(..) {
                on_enter();
            }
        }
    }

    impl VisibilityWatcher for &ManualWatcher {
        type Target = ();
        type Handle = ();
        type Error = String;

        fn observe(&self, _: &(), threshold: f64, on_enter: Box<dyn FnOnce()>) -> Result<(), String> {
            self.thresholds.borrow_mut().push(threshold);
            self.pending.borrow_mut().push(on_enter);
            Ok(())
        }
    }

    fn shared_state(direction: Direction, delay_ms: u64) -> Rc<RefCell<RevealState>> {
        Rc::new(RefCell::new(RevealState::new(
            direction,
            Duration::from_millis(delay_ms),
        )))
    }

    fn revealer(state: &Rc<RefCell<RevealState>>, now_ms: f64) -> impl FnOnce() + 'static {
        let state = state.clone();
        move || {
            state.borrow_mut().reveal(now_ms);
        }
    }

    #[test]
    fn starts_hidden_and_offset() {
        let state = RevealState::new(Direction::Left, Duration::ZERO);
        assert!(!state.is_visible());
        assert_eq!(state.transition_start_ms(), None);
        assert!(state.style().contains("opacity: 0;"));
        assert!(state.style().contains("translate3d(-80px, 0px, 0)"));
    }

    #[test]
    fn offsets_follow_direction() {
        assert_eq!(Direction::Up.offset(), (0, 80));
        assert_eq!(Direction::Down.offset(), (0, -80));
        assert_eq!(Direction::Left.offset(), (-80, 0));
        assert_eq!(Direction::Right.offset(), (80, 0));
        assert_eq!(Direction::default(), Direction::Up);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = RevealState::new(Direction::Up, Duration::from_millis(200));
        assert!(state.reveal(1_000.0));
        assert!(!state.reveal(5_000.0));
        assert!(state.is_visible());
        assert_eq!(state.transition_start_ms(), Some(1_200.0));
        assert!(state.style().contains("opacity: 1;"));
        assert!(state.style().contains("translate3d(0px, 0px, 0)"));
    }

    #[test]
    fn transition_never_starts_before_delay() {
        for delay_ms in [0, 1, 100, 300, 500, 1_200, 10_000] {
            let mut state = RevealState::new(Direction::Right, Duration::from_millis(delay_ms));
            state.reveal(42.0);
            let start = state.transition_start_ms().unwrap();
            assert!(start >= 42.0 + delay_ms as f64);
            assert!(state.style().contains(&format!("transition-delay: {delay_ms}ms;")));
        }
    }

    #[test]
    fn immediate_watcher_reveals_on_attach() {
        let state = shared_state(Direction::Up, 0);
        let coordinator = RevealCoordinator::new(ImmediateWatcher, DEFAULT_THRESHOLD);
        assert!(coordinator.attach(&(), revealer(&state, 10.0)).is_some());
        assert!(state.borrow().is_visible());
    }

    #[test]
    fn unavailable_watcher_fails_open() {
        let state = shared_state(Direction::Down, 300);
        let coordinator = RevealCoordinator::new(UnavailableWatcher, DEFAULT_THRESHOLD);
        assert!(coordinator.attach(&(), revealer(&state, 0.0)).is_none());
        assert!(state.borrow().is_visible());
    }

    #[test]
    fn reveal_waits_for_entry_and_fires_once() {
        let watcher = ManualWatcher::default();
        let state = shared_state(Direction::Up, 100);
        let calls = Rc::new(Cell::new(0));
        let coordinator = RevealCoordinator::new(&watcher, 0.25);

        let counter = calls.clone();
        let reveal = revealer(&state, 7.0);
        coordinator.attach(&(), move || {
            counter.set(counter.get() + 1);
            reveal();
        });
        assert!(!state.borrow().is_visible());

        watcher.enter_all();
        watcher.enter_all();

        assert_eq!(calls.get(), 1);
        assert!(state.borrow().is_visible());
        assert_eq!(*watcher.thresholds.borrow(), vec![0.25]);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealCoordinator::new(ImmediateWatcher, 2.0).threshold(), 1.0);
        assert_eq!(RevealCoordinator::new(ImmediateWatcher, -1.0).threshold(), 0.0);
        assert_eq!(
            RevealCoordinator::new(ImmediateWatcher, f64::NAN).threshold(),
            DEFAULT_THRESHOLD
        );
    }
}
