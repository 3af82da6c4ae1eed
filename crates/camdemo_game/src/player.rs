use camdemo_common::Surface;

use crate::config::Movement;
use crate::input::{Direction, Keyboard};

pub struct Player {
    pub x: i32,
    pub y: i32,
    sprite: Surface,
}

impl Player {
    pub fn new(sprite: Surface, x: i32, y: i32) -> Player {
        Player { x, y, sprite }
    }

    pub fn sprite(&self) -> &Surface {
        &self.sprite
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Move one step per held axis. Left/up win over right/down when both are held.
    pub fn update(&mut self, keys: &Keyboard, movement: &Movement) {
        self.x = step_axis(
            self.x,
            keys.is_pressed(Direction::LEFT),
            keys.is_pressed(Direction::RIGHT),
            movement.min_x,
            movement.max_x,
            movement.step,
        );
        self.y = step_axis(
            self.y,
            keys.is_pressed(Direction::UP),
            keys.is_pressed(Direction::DOWN),
            movement.min_y,
            movement.max_y,
            movement.step,
        );
    }
}

fn step_axis(pos: i32, decrease: bool, increase: bool, min: i32, max: i32, step: i32) -> i32 {
    if decrease && pos > min {
        (pos - step).max(min)
    } else if increase && pos < max {
        (pos + step).min(max)
    } else {
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camdemo_common::Key;

    fn player_at(x: i32, y: i32) -> Player {
        Player::new(Surface::new(1, 1), x, y)
    }

    fn holding(keys: &[Key]) -> Keyboard {
        let mut kb = Keyboard::default();
        for &k in keys {
            kb.set(k, true);
        }
        kb
    }

    #[test]
    fn single_key_moves_one_step() {
        let movement = Movement::default();
        let mut p = player_at(200, 200);
        p.update(&holding(&[Key::Right]), &movement);
        assert_eq!(p.position(), (205, 200));
        p.update(&holding(&[Key::Down]), &movement);
        assert_eq!(p.position(), (205, 205));
        p.update(&holding(&[Key::Left]), &movement);
        assert_eq!(p.position(), (200, 205));
        p.update(&holding(&[Key::Up]), &movement);
        assert_eq!(p.position(), (200, 200));
    }

    #[test]
    fn no_keys_leaves_position_alone() {
        let mut p = player_at(321, 456);
        p.update(&Keyboard::default(), &Movement::default());
        assert_eq!(p.position(), (321, 456));
    }

    #[test]
    fn diagonal_moves_both_axes_full_step() {
        let mut p = player_at(300, 300);
        p.update(&holding(&[Key::Right, Key::Down]), &Movement::default());
        assert_eq!(p.position(), (305, 305));
    }

    #[test]
    fn opposite_keys_favour_decrease() {
        let mut p = player_at(300, 300);
        p.update(&holding(&[Key::Left, Key::Right, Key::Up, Key::Down]), &Movement::default());
        assert_eq!(p.position(), (295, 295));
    }

    #[test]
    fn opposite_keys_at_lower_bound_fall_through_to_increase() {
        let mut p = player_at(100, 100);
        p.update(&holding(&[Key::Left, Key::Right]), &Movement::default());
        assert_eq!(p.position(), (105, 100));
    }

    #[test]
    fn held_decrease_never_passes_lower_bound() {
        let movement = Movement::default();
        let keys = holding(&[Key::Left, Key::Up]);
        let mut p = player_at(133, 117);
        for _ in 0..100 {
            p.update(&keys, &movement);
            assert!(p.x >= 100 && p.y >= 100);
        }
        assert_eq!(p.position(), (100, 100));
    }

    #[test]
    fn held_increase_never_passes_upper_bound() {
        let movement = Movement::default();
        let keys = holding(&[Key::Right, Key::Down]);
        let mut p = player_at(100, 100);
        for _ in 0..1000 {
            p.update(&keys, &movement);
            assert!(p.x <= 1800 && p.y <= 900);
        }
        assert_eq!(p.position(), (1800, 900));
    }

    #[test]
    fn odd_step_still_lands_on_bounds() {
        let movement = Movement {
            step: 7,
            ..Movement::default()
        };
        let mut p = player_at(1795, 895);
        p.update(&holding(&[Key::Right, Key::Down]), &movement);
        assert_eq!(p.position(), (1800, 900));
    }
}
