use minifb::{MouseButton, MouseMode, Window};

use crate::session::Event;

/// Turns the left button state seen each frame into press/release events.
#[derive(Debug, Default)]
pub struct MouseTracker {
    down: bool,
}

impl MouseTracker {
    pub fn new() -> Self {
        MouseTracker { down: false }
    }

    /// Call once per frame, after the window has processed its input.
    pub fn update(&mut self, window: &Window) -> Option<Event> {
        let down = window.get_mouse_down(MouseButton::Left);
        // Clamp keeps drags that leave the window on its edge.
        let (mx, my) = window.get_mouse_pos(MouseMode::Clamp)?;
        self.step(down, mx as i32, my as i32)
    }

    fn step(&mut self, down: bool, x: i32, y: i32) -> Option<Event> {
        let was_down = std::mem::replace(&mut self.down, down);
        match (was_down, down) {
            (false, true) => Some(Event::Press { x, y }),
            (true, false) => Some(Event::Release { x, y }),
            _ => None,
        }
    }
}
