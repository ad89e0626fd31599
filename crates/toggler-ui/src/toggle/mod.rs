//! # Toggle controller
//!
//! A reusable piece of toggle state that runs either *uncontrolled* (it owns
//! the value) or *controlled* (the caller owns the value and decides whether
//! to honor change requests reported through `on_change`).
//!
//! ```rust
//! use toggler_core::*;
//! use toggler_ui::*;
//!
//! fn app() -> View {
//!     let toggler = remember_toggle(ToggleOptions::new().initial_on(true));
//!     Switch(toggler.toggler_props(ToggleProps::new().on(toggler.on()).test_tag("power")))
//! }
//!
//! let mut scheduler = Scheduler::new();
//! let frame = scheduler.compose(app);
//! frame.click("power");
//! let frame = scheduler.compose(app);
//! assert!(matches!(frame.root.kind, ViewKind::Switch { on: false, .. }));
//! ```
//!
//! Every dispatch first applies the reducer to the visible state. While
//! uncontrolled the result becomes the new internal state; then, in either
//! mode, `on_change` receives the result and the action. A controlled toggle
//! never changes its own value.
//!
//! Two advisory checks report through the controller's `WarningSink`:
//! switching between controlled and uncontrolled after the first
//! composition, and a controlled toggle that has neither `on_change` nor
//! `read_only`.

mod options;
mod props;

pub use options::ToggleOptions;
pub use props::ToggleProps;

use std::cell::Cell;
use std::rc::Rc;

use toggler_core::warning::warning;
use toggler_core::*;

use crate::{Switch, call_all};

/// State and mode bookkeeping that outlives a single composition pass.
pub struct ToggleController {
    initial: ToggleState,
    state: Cell<ToggleState>,
    was_controlled: bool,
    mode_check: KeyedEffect<bool>,
    immutability_check: KeyedEffect<bool>,
}

impl ToggleController {
    pub fn new(options: &ToggleOptions) -> Self {
        let initial = ToggleState::new(options.initial_on.unwrap_or(false));
        Self {
            initial,
            state: Cell::new(initial),
            was_controlled: options.is_controlled(),
            mode_check: KeyedEffect::new(),
            immutability_check: KeyedEffect::new(),
        }
    }

    /// Snapshot restored by `Toggler::reset`.
    pub fn initial_state(&self) -> ToggleState {
        self.initial
    }

    /// The internal state. Stale while controlled.
    pub fn internal_state(&self) -> ToggleState {
        self.state.get()
    }

    pub fn was_controlled(&self) -> bool {
        self.was_controlled
    }

    /// Evaluates the controller against this pass's options.
    pub fn bind(self: &Rc<Self>, options: ToggleOptions) -> Toggler {
        let controlled = options.is_controlled();
        let sink = options.resolved_warnings();

        let was_controlled = self.was_controlled;
        self.mode_check.run(controlled, |&controlled| {
            warning(&*sink, !(controlled && !was_controlled), || {
                switch_message("uncontrolled", "controlled")
            });
            warning(&*sink, !(!controlled && was_controlled), || {
                switch_message("controlled", "uncontrolled")
            });
        });

        let unintentionally_immutable =
            controlled && options.on_change.is_none() && !options.read_only.unwrap_or(false);
        self.immutability_check
            .run(unintentionally_immutable, |&immutable| {
                warning(&*sink, !immutable, || {
                    "Failed prop type: You provided an `on` option to a toggle without an \
                     `on_change` handler. This will render a read-only field. If the field \
                     should be mutable use `initial_on`. Otherwise, set either `on_change` \
                     or `read_only`."
                        .to_string()
                })
            });

        Toggler {
            controller: self.clone(),
            controlled_on: options.on,
            reducer: options.resolved_reducer(),
            on_change: options.on_change,
        }
    }
}

fn switch_message(from: &str, to: &str) -> String {
    format!(
        "A toggle is changing from {from} to be {to}. Components should not switch from \
         controlled to uncontrolled (or vice versa). Decide between using a controlled or \
         uncontrolled toggle for the lifetime of the component. Check the `on` option."
    )
}

/// Remembers a `ToggleController` in the current composition slot and binds
/// it to `options`.
pub fn remember_toggle(options: ToggleOptions) -> Toggler {
    let controller = remember(|| ToggleController::new(&options));
    controller.bind(options)
}

/// One composition pass's view of a toggle controller.
#[derive(Clone)]
pub struct Toggler {
    controller: Rc<ToggleController>,
    controlled_on: Option<bool>,
    reducer: Reducer,
    on_change: Option<OnChange>,
}

impl Toggler {
    pub fn on(&self) -> bool {
        self.controlled_on
            .unwrap_or_else(|| self.controller.state.get().on)
    }

    pub fn is_controlled(&self) -> bool {
        self.controlled_on.is_some()
    }

    /// The externally visible state.
    pub fn state(&self) -> ToggleState {
        ToggleState::new(self.on())
    }

    pub fn controller(&self) -> &Rc<ToggleController> {
        &self.controller
    }

    pub fn dispatch(&self, action: ToggleAction) -> Result<ToggleState, ToggleError> {
        let next = (self.reducer)(&self.state(), &action)?;
        if !self.is_controlled() {
            self.controller.state.set(next);
        }
        log::debug!(
            "toggle {}: on={} controlled={}",
            action.name(),
            next.on,
            self.is_controlled()
        );
        if let Some(on_change) = &self.on_change {
            on_change(&next, &action);
        }
        Ok(next)
    }

    pub fn toggle(&self) -> Result<ToggleState, ToggleError> {
        self.dispatch(ToggleAction::Toggle)
    }

    pub fn reset(&self) -> Result<ToggleState, ToggleError> {
        self.reset_to(self.controller.initial)
    }

    pub fn reset_to(&self, initial: ToggleState) -> Result<ToggleState, ToggleError> {
        self.dispatch(ToggleAction::Reset { initial })
    }

    /// Click handler dispatching `action`. A reducer error has nowhere to
    /// go from a click and panics.
    pub fn handler(&self, action: ToggleAction) -> Callback {
        let this = self.clone();
        Rc::new(move || {
            if let Err(err) = this.dispatch(action.clone()) {
                panic!("{err}");
            }
        })
    }

    /// Merges caller props with the toggle's own: `pressed` follows `on`
    /// unless given, and the caller's `on_click` runs before `toggle`.
    pub fn toggler_props(&self, props: ToggleProps) -> ToggleProps {
        let ToggleProps {
            on,
            pressed,
            on_click,
            label,
            test_tag,
        } = props;
        ToggleProps {
            on,
            pressed: Some(pressed.unwrap_or_else(|| self.on())),
            on_click: Some(call_all([
                on_click,
                Some(self.handler(ToggleAction::Toggle)),
            ])),
            label,
            test_tag,
        }
    }

    /// Merges caller props with a reset-to-initial click handler.
    pub fn resetter_props(&self, props: ToggleProps) -> ToggleProps {
        let reset = ToggleAction::Reset {
            initial: self.controller.initial,
        };
        ToggleProps {
            on_click: Some(call_all([props.on_click.clone(), Some(self.handler(reset))])),
            ..props
        }
    }
}

/// A `Switch` wired to a remembered toggle controller. `props` pass through
/// the prop getter; their `on` is replaced by the controller's.
pub fn ControlledToggle(options: ToggleOptions, props: ToggleProps) -> View {
    let toggler = remember_toggle(options);
    let on = toggler.on();
    Switch(toggler.toggler_props(props.on(on)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Record = Rc<RefCell<Vec<(ToggleState, ToggleAction)>>>;

    fn recorder() -> (Record, impl Fn(&ToggleState, &ToggleAction) + 'static) {
        let rec: Record = Rc::new(RefCell::new(Vec::new()));
        let rec2 = rec.clone();
        (rec, move |s: &ToggleState, a: &ToggleAction| {
            rec2.borrow_mut().push((*s, a.clone()))
        })
    }

    fn controller(options: &ToggleOptions) -> Rc<ToggleController> {
        Rc::new(ToggleController::new(options))
    }

    #[test]
    fn uncontrolled_toggle_parity() {
        for n in 0..9u32 {
            let c = controller(&ToggleOptions::new());
            let t = c.bind(ToggleOptions::new());
            for _ in 0..n {
                t.toggle().unwrap();
            }
            assert_eq!(t.on(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn uncontrolled_three_toggles() {
        let opts = ToggleOptions::new().initial_on(false);
        let c = controller(&opts);
        let t = c.bind(opts);
        let mut seen = Vec::new();
        for _ in 0..3 {
            t.toggle().unwrap();
            seen.push(t.on());
        }
        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn reset_restores_snapshot_regardless_of_toggles() {
        for toggles in 0..5 {
            let opts = ToggleOptions::new().initial_on(true);
            let c = controller(&opts);
            let t = c.bind(opts);
            for _ in 0..toggles {
                t.toggle().unwrap();
            }
            assert_eq!(c.initial_state(), ToggleState::ON);
            assert_eq!(t.reset().unwrap(), ToggleState::ON);
            assert!(t.on());

            assert_eq!(t.reset_to(ToggleState::OFF).unwrap(), ToggleState::OFF);
            assert!(!t.on());
        }
    }

    #[test]
    fn controlled_toggle_only_reports() {
        let (rec, on_change) = recorder();
        let opts = ToggleOptions::new().on(false).on_change(on_change);
        let c = controller(&opts);
        let t = c.bind(opts);
        assert!(c.was_controlled());
        assert!(Rc::ptr_eq(t.controller(), &c));

        let next = t.toggle().unwrap();
        assert_eq!(next, ToggleState::ON);
        assert!(!t.on());
        assert_eq!(c.internal_state(), ToggleState::OFF);
        assert_eq!(*rec.borrow(), vec![(ToggleState::ON, ToggleAction::Toggle)]);
        assert_eq!(rec.borrow()[0].1.kind(), ActionKind::Toggle);

        // still computed from the external value, not from a phantom internal one
        t.toggle().unwrap();
        assert_eq!(rec.borrow()[1].0, ToggleState::ON);
    }

    #[test]
    fn on_change_fires_in_uncontrolled_mode_after_update() {
        let c = controller(&ToggleOptions::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let t = {
            let seen = seen.clone();
            let c2 = c.clone();
            c.bind(ToggleOptions::new().on_change(move |next, _| {
                // internal state already advanced
                seen.borrow_mut().push((next.on, c2.internal_state().on));
            }))
        };
        t.toggle().unwrap();
        t.reset().unwrap();
        assert_eq!(*seen.borrow(), vec![(true, true), (false, false)]);
    }

    #[test]
    fn custom_reducer_extends_actions() {
        let opts = ToggleOptions::new().reducer(|state, action| match action {
            ToggleAction::Custom { name } if name == "force-on" => Ok(ToggleState::ON),
            _ => toggle_reducer(state, action),
        });
        let c = controller(&opts);
        let t = c.bind(opts);
        t.dispatch(ToggleAction::custom("force-on")).unwrap();
        assert!(t.on());
        t.toggle().unwrap();
        assert!(!t.on());
    }

    #[test]
    fn unsupported_action_is_an_error_and_changes_nothing() {
        let (rec, on_change) = recorder();
        let opts = ToggleOptions::new().on_change(on_change);
        let c = controller(&opts);
        let t = c.bind(opts);

        let err = t.dispatch(ToggleAction::custom("explode")).unwrap_err();
        assert_eq!(err, ToggleError::UnsupportedAction("explode".into()));
        assert!(!t.on());
        assert!(rec.borrow().is_empty());
    }

    #[test]
    #[should_panic(expected = "Unsupported type: explode")]
    fn unsupported_action_from_a_click_panics() {
        let c = controller(&ToggleOptions::new());
        let t = c.bind(ToggleOptions::new());
        (t.handler(ToggleAction::custom("explode")))();
    }

    #[test]
    fn mode_switch_warns_once_per_transition() {
        let log = WarningLog::new();
        let sink: Rc<dyn WarningSink> = Rc::new(log.clone());
        let uncontrolled = || ToggleOptions::new().warnings(sink.clone());
        let controlled = || {
            ToggleOptions::new()
                .warnings(sink.clone())
                .on(true)
                .on_change(|_, _| {})
        };

        let c = controller(&uncontrolled());
        c.bind(uncontrolled());
        c.bind(uncontrolled());
        assert!(log.is_empty());

        c.bind(controlled());
        c.bind(controlled());
        c.bind(controlled());
        assert_eq!(log.len(), 1);
        assert!(log.messages()[0].contains("from uncontrolled to be controlled"));

        // back to the baseline mode is silent
        c.bind(uncontrolled());
        assert_eq!(log.len(), 1);

        // leaving the baseline again is reported again
        c.bind(controlled());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn mode_switch_controlled_to_uncontrolled() {
        let log = WarningLog::new();
        let sink: Rc<dyn WarningSink> = Rc::new(log.clone());
        let controlled = ToggleOptions::new()
            .warnings(sink.clone())
            .on(false)
            .read_only(true);

        let c = controller(&controlled);
        c.bind(controlled.clone());
        assert!(log.is_empty());

        let t = c.bind(ToggleOptions::new().warnings(sink.clone()));
        c.bind(ToggleOptions::new().warnings(sink));
        assert_eq!(log.len(), 1);
        assert!(log.messages()[0].contains("from controlled to be uncontrolled"));
        assert!(!t.is_controlled());
    }

    #[test]
    fn read_only_warning_truth_table() {
        for controlled in [false, true] {
            for has_on_change in [false, true] {
                for read_only in [None, Some(false), Some(true)] {
                    let log = WarningLog::new();
                    let mut opts = ToggleOptions::new().warnings(Rc::new(log.clone()));
                    if controlled {
                        opts = opts.on(false);
                    }
                    if has_on_change {
                        opts = opts.on_change(|_, _| {});
                    }
                    opts.read_only = read_only;

                    let c = controller(&opts);
                    c.bind(opts.clone());
                    c.bind(opts.clone());
                    c.bind(opts);

                    let expected =
                        controlled && !has_on_change && !read_only.unwrap_or(false);
                    assert_eq!(
                        log.len(),
                        usize::from(expected),
                        "controlled={controlled} on_change={has_on_change} read_only={read_only:?}"
                    );
                    if expected {
                        assert!(log.messages()[0].contains("read-only field"));
                    }
                }
            }
        }
    }

    #[test]
    fn warnings_fall_back_to_composition_local() {
        let log = WarningLog::new();
        with_warning_sink(Rc::new(log.clone()), || {
            let opts = ToggleOptions::new().on(true);
            controller(&opts).bind(opts);
        });
        assert_eq!(log.len(), 1);

        // no sink anywhere: silently ignored
        let opts = ToggleOptions::new().on(true);
        controller(&opts).bind(opts);
    }

    #[test]
    fn toggler_props_merge_handlers() {
        let opts = ToggleOptions::new();
        let c = controller(&opts);
        let t = c.bind(opts);

        let order = Rc::new(RefCell::new(Vec::new()));
        let caller = {
            let order = order.clone();
            let c = c.clone();
            move || order.borrow_mut().push(("caller", c.internal_state().on))
        };
        let props = t.toggler_props(
            ToggleProps::new()
                .on_click(caller)
                .label("custom-button")
                .test_tag("custom-button-id"),
        );
        assert_eq!(props.pressed, Some(false));
        assert_eq!(props.label.as_deref(), Some("custom-button"));
        assert_eq!(props.test_tag.as_deref(), Some("custom-button-id"));

        let click = props.on_click.clone().unwrap();
        click();
        // caller ran first, then the toggle
        assert_eq!(*order.borrow(), vec![("caller", false)]);
        assert!(t.on());
    }

    #[test]
    fn toggler_props_keep_caller_pressed() {
        let c = controller(&ToggleOptions::new());
        let t = c.bind(ToggleOptions::new());
        let props = t.toggler_props(ToggleProps::new().pressed(true));
        assert_eq!(props.pressed, Some(true));
        assert!(!t.on());
    }

    #[test]
    fn resetter_props_restore_initial() {
        let opts = ToggleOptions::new().initial_on(true);
        let c = controller(&opts);
        let t = c.bind(opts);
        t.toggle().unwrap();
        assert!(!t.on());

        let clicks = Rc::new(Cell::new(0));
        let props = t.resetter_props(ToggleProps::new().on_click({
            let clicks = clicks.clone();
            move || clicks.set(clicks.get() + 1)
        }));
        (props.on_click.unwrap())();
        assert_eq!(clicks.get(), 1);
        assert!(t.on());
    }

    #[test]
    fn remembered_controller_survives_recomposition() {
        let mut scheduler = Scheduler::new();
        let app = || ControlledToggle(ToggleOptions::new(), ToggleProps::new());

        let frame = scheduler.compose(app);
        assert!(matches!(frame.root.kind, ViewKind::Switch { on: false, .. }));
        assert!(frame.hit_regions.len() == 1);
        (frame.hit_regions[0].on_click)();

        let frame = scheduler.compose(app);
        assert!(matches!(frame.root.kind, ViewKind::Switch { on: true, .. }));
        assert_eq!(
            frame.root.semantics.as_ref().and_then(|s| s.pressed),
            Some(true)
        );

        let frame = Scheduler::new().compose(app);
        assert!(matches!(frame.root.kind, ViewKind::Switch { on: false, .. }));
    }

    #[test]
    fn controlled_end_to_end_through_owner() {
        // owner honors the request, so the next pass shows the new value
        let mut scheduler = Scheduler::new();
        let owned = signal(false);
        let (rec, on_change) = recorder();
        let on_change = Rc::new(on_change);
        let app = {
            let owned = owned.clone();
            move || {
                let on_change = on_change.clone();
                let owned_w = owned.clone();
                ControlledToggle(
                    ToggleOptions::new()
                        .on(owned.get())
                        .on_change(move |next, action| {
                            on_change(next, action);
                            owned_w.set(next.on);
                        }),
                    ToggleProps::new(),
                )
            }
        };

        let frame = scheduler.compose(app.clone());
        frame.click_first();
        let frame = scheduler.compose(app.clone());
        assert!(matches!(frame.root.kind, ViewKind::Switch { on: true, .. }));
        assert!(owned.get());
        assert_eq!(*rec.borrow(), vec![(ToggleState::ON, ToggleAction::Toggle)]);
    }

    trait ClickFirst {
        fn click_first(&self);
    }

    impl ClickFirst for Frame {
        fn click_first(&self) {
            (self.hit_regions[0].on_click)();
        }
    }
}
