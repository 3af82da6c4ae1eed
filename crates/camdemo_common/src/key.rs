/// Keys the frontends know how to report. Anything else arrives as `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Escape,
    Space,
    None,
}
