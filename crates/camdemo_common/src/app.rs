use anyhow::Result;

use crate::key::Key;
use crate::screen::Screen;

/// What a frontend drives once per tick: `update`, then `draw`.
pub trait App {
    fn init(&mut self);
    /// Advance the state by one tick. An error stops the frontend loop.
    fn update(&mut self) -> Result<()>;
    fn draw(&mut self, screen: &mut Screen);
    /// Logical screen size for a given outer window size.
    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
