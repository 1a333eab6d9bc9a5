use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions a quiz screen reacts to
///
/// Raw SDL events are folded into these so the stage logic never sees SDL
/// types and can be driven from tests with plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// Window closed or Escape pressed
    Quit,
    /// Pointer moved to (x, y)
    PointerMoved(i32, i32),
    /// Primary button pressed at (x, y)
    PointerPressed(i32, i32),
}

/// Translates SDL2 events into QuizActions
///
/// Every stage uses the same mapping: there are no per-screen key bindings,
/// only quit and pointer input.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain all pending SDL2 events and return the actions they map to
    ///
    /// Called once per frame by every stage loop.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<QuizAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Map one event; events the quiz doesn't care about give `None`
    pub fn translate(&self, event: &Event) -> Option<QuizAction> {
        match event {
            Event::Quit { .. } => Some(QuizAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => key_action(*key),
            Event::MouseButtonDown {
                mouse_btn, x, y, ..
            } => button_action(*mouse_btn, *x, *y),
            Event::MouseMotion { x, y, .. } => Some(QuizAction::PointerMoved(*x, *y)),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn key_action(key: Keycode) -> Option<QuizAction> {
    match key {
        Keycode::Escape => Some(QuizAction::Quit),
        _ => None,
    }
}

fn button_action(button: MouseButton, x: i32, y: i32) -> Option<QuizAction> {
    match button {
        MouseButton::Left => Some(QuizAction::PointerPressed(x, y)),
        // Other buttons are ignored
        _ => None,
    }
}
