use std::rc::Rc;

use yew::prelude::*;

/// Pointer emphasis of a card or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Hovered,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerInput {
    Enter,
    Leave,
    Down,
    Up,
}

impl Interaction {
    pub fn next(self, input: PointerInput) -> Self {
        match (self, input) {
            (Interaction::Idle, PointerInput::Enter) => Interaction::Hovered,
            (Interaction::Idle, PointerInput::Down) => Interaction::Pressed,
            (Interaction::Hovered, PointerInput::Down) => Interaction::Pressed,
            (Interaction::Hovered, PointerInput::Leave) => Interaction::Idle,
            (Interaction::Pressed, PointerInput::Up) => Interaction::Hovered,
            (Interaction::Pressed, PointerInput::Leave) => Interaction::Idle,
            (state, _) => state,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Interaction::Idle => "is-idle",
            Interaction::Hovered => "is-hovered",
            Interaction::Pressed => "is-pressed",
        }
    }

    pub fn is_active(self) -> bool {
        self != Interaction::Idle
    }
}

impl Reducible for Interaction {
    type Action = PointerInput;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Current emphasis plus the pointer handlers to attach to the element.
pub struct InteractionHandle {
    pub state: Interaction,
    pub onpointerenter: Callback<PointerEvent>,
    pub onpointerleave: Callback<PointerEvent>,
    pub onpointerdown: Callback<PointerEvent>,
    pub onpointerup: Callback<PointerEvent>,
}

#[hook]
pub fn use_interaction() -> InteractionHandle {
    let state = use_reducer(Interaction::default);

    let on = |input: PointerInput| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: PointerEvent| dispatcher.dispatch(input))
    };

    InteractionHandle {
        state: *state,
        onpointerenter: on(PointerInput::Enter),
        onpointerleave: on(PointerInput::Leave),
        onpointerdown: on(PointerInput::Down),
        onpointerup: on(PointerInput::Up),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(inputs: &[PointerInput]) -> Interaction {
        inputs
            .iter()
            .fold(Interaction::default(), |state, input| state.next(*input))
    }

    #[test]
    fn hover_then_leave_reverts() {
        assert_eq!(run(&[PointerInput::Enter]), Interaction::Hovered);
        assert_eq!(run(&[PointerInput::Enter, PointerInput::Leave]), Interaction::Idle);
    }

    #[test]
    fn press_and_release_returns_to_hover() {
        let inputs = [PointerInput::Enter, PointerInput::Down, PointerInput::Up];
        assert_eq!(run(&inputs[..2]), Interaction::Pressed);
        assert_eq!(run(&inputs), Interaction::Hovered);
    }

    #[test]
    fn touch_press_without_hover() {
        assert_eq!(run(&[PointerInput::Down]), Interaction::Pressed);
        assert_eq!(run(&[PointerInput::Down, PointerInput::Leave]), Interaction::Idle);
    }

    #[test]
    fn stray_inputs_are_ignored() {
        assert_eq!(Interaction::Idle.next(PointerInput::Up), Interaction::Idle);
        assert_eq!(Interaction::Idle.next(PointerInput::Leave), Interaction::Idle);
        assert_eq!(Interaction::Hovered.next(PointerInput::Enter), Interaction::Hovered);
        assert_eq!(Interaction::Hovered.next(PointerInput::Up), Interaction::Hovered);
        assert_eq!(Interaction::Pressed.next(PointerInput::Down), Interaction::Pressed);
        assert_eq!(Interaction::Pressed.next(PointerInput::Enter), Interaction::Pressed);
    }

    #[test]
    fn only_idle_is_inactive() {
        assert!(!Interaction::Idle.is_active());
        assert!(Interaction::Hovered.is_active());
        assert!(Interaction::Pressed.is_active());
    }
}
