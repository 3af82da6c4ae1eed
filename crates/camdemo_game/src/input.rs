use bitflags::bitflags;
use camdemo_common::Key;

bitflags! {
    /// Directional keys currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Direction: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
    }
}

impl Direction {
    pub fn from_key(key: Key) -> Option<Direction> {
        match key {
            Key::Left => Some(Direction::LEFT),
            Key::Right => Some(Direction::RIGHT),
            Key::Up => Some(Direction::UP),
            Key::Down => Some(Direction::DOWN),
            _ => None,
        }
    }
}

/// Held-key state rebuilt from the frontend's down/up events, queried once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard {
    held: Direction,
}

impl Keyboard {
    /// Returns false for keys that are not tracked.
    pub fn set(&mut self, key: Key, pressed: bool) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.held.set(dir, pressed);
                true
            }
            None => false,
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        self.held.contains(dir)
    }

    pub fn held(&self) -> Direction {
        self.held
    }

    pub fn release_all(&mut self) {
        self.held = Direction::empty();
    }
}
