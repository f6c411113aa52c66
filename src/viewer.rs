//! minifb window for a labeling session.

use std::collections::VecDeque;

use image::RgbImage;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::error::LabelError;
use crate::render::to_frame_buffer;
use crate::selection::MouseTracker;
use crate::session::{Event, Frontend};

const TARGET_FPS: usize = 60;

pub struct Viewer {
    window: Window,
    buffer: Vec<u32>,
    width: usize,
    height: usize,
    mouse: MouseTracker,
    pending: VecDeque<Event>,
}

impl Viewer {
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self, LabelError> {
        let (width, height) = (width as usize, height as usize);
        let mut window = Window::new(title, width, height, WindowOptions::default())?;
        window.set_target_fps(TARGET_FPS);
        Ok(Self {
            window,
            buffer: vec![0; width * height],
            width,
            height,
            mouse: MouseTracker::new(),
            pending: VecDeque::new(),
        })
    }

    /// Presents the current buffer and collects this frame's input.
    ///
    /// Every window update goes through here: minifb forgets pressed keys on
    /// the next update, so input not read now is lost.
    fn pump(&mut self) -> Result<(), LabelError> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)?;
        let mouse = self.mouse.update(&self.window);
        let keys = self.window.get_keys_pressed(KeyRepeat::No);
        queue_input(&mut self.pending, mouse, keys);
        Ok(())
    }
}

impl Frontend for Viewer {
    fn show(&mut self, frame: &RgbImage) -> Result<(), LabelError> {
        self.buffer = to_frame_buffer(frame);
        self.pump()
    }

    fn wait_event(&mut self) -> Result<Option<Event>, LabelError> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(Some(event));
            }
            if !self.window.is_open() {
                return Ok(None);
            }
            self.pump()?;
        }
    }
}

/// Queues one frame's input: the mouse edge first, then keys in press order.
fn queue_input(pending: &mut VecDeque<Event>, mouse: Option<Event>, keys: Vec<Key>) {
    pending.extend(mouse);
    pending.extend(keys.into_iter().filter_map(key_char).map(Event::Key));
}

/// Letters and digits as lowercase characters. Keypad digits count as digits.
fn key_char(key: Key) -> Option<char> {
    let c = match key {
        Key::Key0 | Key::NumPad0 => '0',
        Key::Key1 | Key::NumPad1 => '1',
        Key::Key2 | Key::NumPad2 => '2',
        Key::Key3 | Key::NumPad3 => '3',
        Key::Key4 | Key::NumPad4 => '4',
        Key::Key5 | Key::NumPad5 => '5',
        Key::Key6 | Key::NumPad6 => '6',
        Key::Key7 | Key::NumPad7 => '7',
        Key::Key8 | Key::NumPad8 => '8',
        Key::Key9 | Key::NumPad9 => '9',
        Key::A => 'a',
        Key::B => 'b',
        Key::C => 'c',
        Key::D => 'd',
        Key::E => 'e',
        Key::F => 'f',
        Key::G => 'g',
        Key::H => 'h',
        Key::I => 'i',
        Key::J => 'j',
        Key::K => 'k',
        Key::L => 'l',
        Key::M => 'm',
        Key::N => 'n',
        Key::O => 'o',
        Key::P => 'p',
        Key::Q => 'q',
        Key::R => 'r',
        Key::S => 's',
        Key::T => 't',
        Key::U => 'u',
        Key::V => 'v',
        Key::W => 'w',
        Key::X => 'x',
        Key::Y => 'y',
        Key::Z => 'z',
        _ => return None,
    };
    Some(c)
}
