use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Entrance state of an element that animates in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEvent {
    Entered,
    Exited,
    ObserverUnavailable,
}

impl RevealState {
    /// Once revealed, nothing moves the element back.
    pub fn next(self, event: RevealEvent) -> Self {
        match (self, event) {
            (RevealState::Pending, RevealEvent::Entered) => RevealState::Revealed,
            (RevealState::Pending, RevealEvent::ObserverUnavailable) => RevealState::Revealed,
            (RevealState::Pending, RevealEvent::Exited) => RevealState::Pending,
            (RevealState::Revealed, _) => RevealState::Revealed,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Pending => "is-pending",
            RevealState::Revealed => "is-revealed",
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            debug!("reveal {:?} after {:?}", next, action);
            Rc::new(next)
        }
    }
}

/// Where an element comes from before it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMotion {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    NudgeLeft,
    NudgeRight,
    Grow,
    Extend,
}

impl RevealMotion {
    pub fn class(self) -> &'static str {
        match self {
            RevealMotion::Rise => "reveal-rise",
            RevealMotion::FromLeft => "reveal-from-left",
            RevealMotion::FromRight => "reveal-from-right",
            RevealMotion::NudgeLeft => "reveal-nudge-left",
            RevealMotion::NudgeRight => "reveal-nudge-right",
            RevealMotion::Grow => "reveal-grow",
            RevealMotion::Extend => "reveal-extend",
        }
    }

    /// Journey rows alternate sides: even rows from the left, odd from the right.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            RevealMotion::NudgeLeft
        } else {
            RevealMotion::NudgeRight
        }
    }
}

pub fn transition_style(duration: f64, delay: f64) -> String {
    format!("transition-duration: {:.2}s; transition-delay: {:.2}s;", duration, delay)
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// Watches `element` until its first intersection, then stops observing.
fn observe_once(
    element: &Element,
    dispatcher: UseReducerDispatcher<RevealState>,
) -> Result<(IntersectionObserver, EntriesCallback), JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                dispatcher.dispatch(RevealEvent::Entered);
                observer.disconnect();
                return;
            }
            dispatcher.dispatch(RevealEvent::Exited);
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.root_margin(config::REVEAL_ROOT_MARGIN);
    options.threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

/// Tracks whether the element behind `node` has been scrolled into view.
/// Without `IntersectionObserver` the element is revealed straight away.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut watch = None;
                match node.cast::<Element>() {
                    Some(element) if observer_supported() => {
                        match observe_once(&element, dispatcher.clone()) {
                            Ok(handles) => watch = Some(handles),
                            Err(_) => dispatcher.dispatch(RevealEvent::ObserverUnavailable),
                        }
                    }
                    _ => {
                        debug!("IntersectionObserver unavailable, revealing immediately");
                        dispatcher.dispatch(RevealEvent::ObserverUnavailable);
                    }
                }

                move || {
                    if let Some((observer, callback)) = watch {
                        observer.disconnect();
                        drop(callback);
                    }
                }
            },
            node,
        );
    }

    *state
}

pub const STYLE: &str = r#"
    .reveal {
        transition-property: opacity, transform;
        transition-timing-function: ease-out;
        will-change: opacity, transform;
    }
    .reveal.is-pending { opacity: 0; }
    .reveal.is-revealed { opacity: 1; transform: none; }
    .reveal-rise.is-pending { transform: translateY(50px); }
    .reveal-from-left.is-pending { transform: translateX(-100px); }
    .reveal-from-right.is-pending { transform: translateX(100px); }
    .reveal-nudge-left.is-pending { transform: translateX(-50px); }
    .reveal-nudge-right.is-pending { transform: translateX(50px); }
    .reveal-grow.is-pending { transform: scale(0.8); }
    .reveal-extend { transform-origin: top; }
    .reveal-extend.is-pending { opacity: 1; transform: scaleX(0); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: [RevealEvent; 3] = [
        RevealEvent::Entered,
        RevealEvent::Exited,
        RevealEvent::ObserverUnavailable,
    ];

    #[test]
    fn starts_pending() {
        assert_eq!(RevealState::default(), RevealState::Pending);
    }

    #[test]
    fn entering_reveals() {
        assert_eq!(RevealState::Pending.next(RevealEvent::Entered), RevealState::Revealed);
    }

    #[test]
    fn exit_before_entry_keeps_pending() {
        assert_eq!(RevealState::Pending.next(RevealEvent::Exited), RevealState::Pending);
    }

    #[test]
    fn missing_observer_falls_back_to_visible() {
        assert_eq!(
            RevealState::Pending.next(RevealEvent::ObserverUnavailable),
            RevealState::Revealed
        );
    }

    #[test]
    fn revealed_is_absorbing() {
        for event in EVENTS {
            assert_eq!(RevealState::Revealed.next(event), RevealState::Revealed);
        }
    }

    #[test]
    fn fires_once_across_repeated_scrolling() {
        let script = [
            RevealEvent::Exited,
            RevealEvent::Entered,
            RevealEvent::Exited,
            RevealEvent::Entered,
            RevealEvent::Exited,
        ];
        let mut state = RevealState::Pending;
        let mut reveals = 0;
        for event in script {
            let next = state.next(event);
            if state == RevealState::Pending && next == RevealState::Revealed {
                reveals += 1;
            }
            state = next;
        }
        assert_eq!(reveals, 1);
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_changes() {
        let revealed = Rc::new(RevealState::Revealed);
        let after = revealed.clone().reduce(RevealEvent::Exited);
        assert!(Rc::ptr_eq(&revealed, &after));

        let pending = Rc::new(RevealState::Pending);
        assert_eq!(*pending.reduce(RevealEvent::Entered), RevealState::Revealed);
    }

    #[test]
    fn journey_rows_alternate_sides() {
        let motions: Vec<_> = (0..4).map(RevealMotion::alternating).collect();
        assert_eq!(
            motions,
            vec![
                RevealMotion::NudgeLeft,
                RevealMotion::NudgeRight,
                RevealMotion::NudgeLeft,
                RevealMotion::NudgeRight,
            ]
        );
    }

    #[test]
    fn transition_style_formats_seconds() {
        assert_eq!(
            transition_style(0.8, 0.2),
            "transition-duration: 0.80s; transition-delay: 0.20s;"
        );
    }
}
