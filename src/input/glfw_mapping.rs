use ::glfw::{Action, Key, WindowEvent};

use super::{InputEvent, KeyAction, KeyCode, MouseAction, MouseButton};

/// Converts GLFW window events into [InputEvent]s.
///
/// GLFW does not report the cursor position with button events, so the
/// mapper remembers the last position it saw.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputMapper {
    cursor: (f64, f64),
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent cursor position.
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Translate a window event. Events with no input meaning, and buttons
    /// beyond the first three, map to None.
    pub fn map(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match *event {
            WindowEvent::Key(key, _, action, _) => Some(InputEvent::Key {
                code: key_code(key),
                action: key_action(action),
            }),
            WindowEvent::MouseButton(button, action, _) => {
                let button = mouse_button(button)?;
                let (x, y) = self.cursor;
                Some(InputEvent::MouseButton {
                    button,
                    action: match action {
                        Action::Release => MouseAction::Up,
                        Action::Press | Action::Repeat => MouseAction::Down,
                    },
                    x,
                    y,
                })
            }
            WindowEvent::CursorPos(x, y) => {
                self.cursor = (x, y);
                Some(InputEvent::MouseMove { x, y })
            }
            WindowEvent::Scroll(x, y) => Some(InputEvent::Scroll { x, y }),
            _ => None,
        }
    }
}

fn key_action(action: Action) -> KeyAction {
    match action {
        Action::Press => KeyAction::Down,
        Action::Release => KeyAction::Up,
        Action::Repeat => KeyAction::Repeat,
    }
}

fn mouse_button(button: glfw::MouseButton) -> Option<MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(MouseButton::Left),
        glfw::MouseButton::Button2 => Some(MouseButton::Right),
        glfw::MouseButton::Button3 => Some(MouseButton::Middle),
        _ => None,
    }
}

fn key_code(key: Key) -> KeyCode {
    match key {
        Key::Escape => KeyCode::Escape,
        Key::Up => KeyCode::Up,
        Key::Down => KeyCode::Down,
        Key::Left => KeyCode::Left,
        Key::Right => KeyCode::Right,
        Key::W => KeyCode::W,
        Key::A => KeyCode::A,
        Key::S => KeyCode::S,
        Key::D => KeyCode::D,
        Key::Q => KeyCode::Q,
        Key::E => KeyCode::E,
        Key::R => KeyCode::R,
        Key::F => KeyCode::F,
        Key::F5 => KeyCode::F5,
        _ => KeyCode::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::Modifiers;

    #[test]
    fn keys_map_with_their_action() {
        let mut mapper = InputMapper::new();
        let event =
            WindowEvent::Key(Key::W, 17, Action::Repeat, Modifiers::empty());
        assert_eq!(
            mapper.map(&event),
            Some(InputEvent::Key {
                code: KeyCode::W,
                action: KeyAction::Repeat
            })
        );
    }

    #[test]
    fn unhandled_keys_map_to_other() {
        let mut mapper = InputMapper::new();
        let event =
            WindowEvent::Key(Key::Space, 57, Action::Press, Modifiers::empty());
        assert_eq!(
            mapper.map(&event),
            Some(InputEvent::Key {
                code: KeyCode::Other,
                action: KeyAction::Down
            })
        );
    }

    #[test]
    fn button_events_carry_the_last_cursor_position() {
        let mut mapper = InputMapper::new();
        mapper.map(&WindowEvent::CursorPos(12.0, 34.5));
        let event = WindowEvent::MouseButton(
            glfw::MouseButton::Button2,
            Action::Press,
            Modifiers::empty(),
        );
        assert_eq!(
            mapper.map(&event),
            Some(InputEvent::MouseButton {
                button: MouseButton::Right,
                action: MouseAction::Down,
                x: 12.0,
                y: 34.5,
            })
        );
        assert_eq!(mapper.cursor(), (12.0, 34.5));
    }

    #[test]
    fn extra_mouse_buttons_are_ignored() {
        let mut mapper = InputMapper::new();
        let event = WindowEvent::MouseButton(
            glfw::MouseButton::Button5,
            Action::Release,
            Modifiers::empty(),
        );
        assert_eq!(mapper.map(&event), None);
    }

    #[test]
    fn scroll_and_resize_events() {
        let mut mapper = InputMapper::new();
        assert_eq!(
            mapper.map(&WindowEvent::Scroll(0.0, -1.5)),
            Some(InputEvent::Scroll { x: 0.0, y: -1.5 })
        );
        assert_eq!(mapper.map(&WindowEvent::FramebufferSize(640, 480)), None);
    }
}
