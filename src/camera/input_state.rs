use super::InputState;
use crate::{
    input::{InputEvent, KeyAction, KeyCode, MouseAction, MouseButton},
    math::Vec2,
};

impl InputState {
    /// Record a single input event.
    ///
    /// Cursor positions are floored to whole pixels. Motion accumulates until
    /// [Self::clear_deltas] is called, while scrolling keeps only the most
    /// recent offset.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { code, action } => match action {
                KeyAction::Down | KeyAction::Repeat => {
                    self.keys.insert(code);
                }
                KeyAction::Up => {
                    self.keys.remove(&code);
                }
            },
            InputEvent::MouseButton {
                button,
                action,
                x,
                y,
            } => match action {
                MouseAction::Down => {
                    self.buttons.insert(button);
                    self.last_cursor = floor_position(x, y);
                }
                MouseAction::Up => {
                    self.buttons.remove(&button);
                }
            },
            InputEvent::MouseMove { x, y } => {
                let cursor = floor_position(x, y);
                self.move_delta += cursor - self.last_cursor;
                self.last_cursor = cursor;
            }
            InputEvent::Scroll { y, .. } => {
                self.scroll_delta = y.floor() as f32;
            }
        }
    }

    pub fn is_key_down(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Cursor motion in pixels since the last update.
    pub fn move_delta(&self) -> Vec2 {
        self.move_delta
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Forget the motion and scrolling consumed by an update. Held keys and
    /// buttons are kept.
    pub fn clear_deltas(&mut self) {
        self.move_delta = Vec2::zeros();
        self.scroll_delta = 0.0;
    }
}

fn floor_position(x: f64, y: f64) -> Vec2 {
    Vec2::new(x.floor() as f32, y.floor() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, action: KeyAction) -> InputEvent {
        InputEvent::Key { code, action }
    }

    #[test]
    fn keys_are_held_until_released() {
        let mut input = InputState::default();
        input.handle_event(&key(KeyCode::W, KeyAction::Down));
        assert!(input.is_key_down(KeyCode::W));

        input.handle_event(&key(KeyCode::W, KeyAction::Repeat));
        assert!(input.is_key_down(KeyCode::W));

        input.handle_event(&key(KeyCode::W, KeyAction::Up));
        assert!(!input.is_key_down(KeyCode::W));
    }

    #[test]
    fn motion_is_measured_from_the_button_press() {
        let mut input = InputState::default();
        input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            action: MouseAction::Down,
            x: 100.7,
            y: 50.2,
        });
        input.handle_event(&InputEvent::MouseMove { x: 110.0, y: 45.9 });

        assert!(input.is_button_down(MouseButton::Left));
        assert_eq!(input.move_delta(), Vec2::new(10.0, -5.0));
    }

    #[test]
    fn motion_accumulates_until_cleared() {
        let mut input = InputState::default();
        input.handle_event(&InputEvent::MouseMove { x: 1.0, y: 1.0 });
        input.handle_event(&InputEvent::MouseMove { x: 4.0, y: 3.0 });
        assert_eq!(input.move_delta(), Vec2::new(4.0, 3.0));

        input.clear_deltas();
        assert_eq!(input.move_delta(), Vec2::zeros());

        input.handle_event(&InputEvent::MouseMove { x: 5.0, y: 3.0 });
        assert_eq!(input.move_delta(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn scroll_is_floored() {
        let mut input = InputState::default();
        input.handle_event(&InputEvent::Scroll { x: 0.0, y: -0.5 });
        assert_eq!(input.scroll_delta(), -1.0);

        input.handle_event(&InputEvent::Scroll { x: 0.0, y: 2.75 });
        assert_eq!(input.scroll_delta(), 2.0);

        input.clear_deltas();
        assert_eq!(input.scroll_delta(), 0.0);
    }

    #[test]
    fn releasing_a_button_keeps_other_buttons() {
        let mut input = InputState::default();
        for button in [MouseButton::Left, MouseButton::Right] {
            input.handle_event(&InputEvent::MouseButton {
                button,
                action: MouseAction::Down,
                x: 0.0,
                y: 0.0,
            });
        }
        input.handle_event(&InputEvent::MouseButton {
            button: MouseButton::Left,
            action: MouseAction::Up,
            x: 0.0,
            y: 0.0,
        });
        assert!(!input.is_button_down(MouseButton::Left));
        assert!(input.is_button_down(MouseButton::Right));
    }
}
