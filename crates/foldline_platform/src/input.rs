//! Input event types for mouse and touch

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Touch event (mobile/touchscreen)
    Touch(TouchEvent),
}

impl InputEvent {
    /// A single-finger touch down at (x, y)
    pub fn tap(x: f32, y: f32) -> Self {
        InputEvent::Touch(TouchEvent::Started {
            id: 0,
            x,
            y,
            pressure: 1.0,
        })
    }

    /// Whether this event is a pointer going down: a touch starting or the
    /// primary mouse button being pressed
    pub fn is_pointer_down(&self) -> bool {
        matches!(
            self,
            InputEvent::Touch(TouchEvent::Started { .. })
                | InputEvent::Mouse(MouseEvent::ButtonPressed {
                    button: MouseButton::Left,
                    ..
                })
        )
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved { x: f32, y: f32 },
    /// Mouse button pressed
    ButtonPressed { button: MouseButton, x: f32, y: f32 },
    /// Mouse button released
    ButtonReleased { button: MouseButton, x: f32, y: f32 },
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Touch Events
// ============================================================================

/// Touch events for touchscreens
#[derive(Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// A touch started
    Started {
        /// Unique identifier for this touch
        id: u64,
        x: f32,
        y: f32,
        /// Touch pressure (0.0 - 1.0)
        pressure: f32,
    },
    /// A touch moved
    Moved {
        id: u64,
        x: f32,
        y: f32,
        pressure: f32,
    },
    /// A touch ended
    Ended { id: u64, x: f32, y: f32 },
    /// A touch was cancelled (e.g., by system gesture)
    Cancelled { id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_down_detection() {
        assert!(InputEvent::tap(1.0, 2.0).is_pointer_down());
        assert!(InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            x: 0.0,
            y: 0.0,
        })
        .is_pointer_down());

        assert!(!InputEvent::Mouse(MouseEvent::ButtonPressed {
            button: MouseButton::Right,
            x: 0.0,
            y: 0.0,
        })
        .is_pointer_down());
        assert!(!InputEvent::Touch(TouchEvent::Ended {
            id: 0,
            x: 0.0,
            y: 0.0
        })
        .is_pointer_down());
        assert!(!InputEvent::Mouse(MouseEvent::Moved { x: 0.0, y: 0.0 }).is_pointer_down());
        assert!(!InputEvent::Touch(TouchEvent::Cancelled { id: 7 }).is_pointer_down());
    }
}
