use camdemo_common::{Blend, DrawOptions, Surface};

use crate::player::Player;

/// Owns the background and the offscreen world it is composed onto.
pub struct Scene {
    background: Surface,
    world: Surface,
    draw_ops: DrawOptions,
}

impl Scene {
    /// The world is sized like the background and keeps that size for its whole life.
    pub fn new(background: Surface) -> Scene {
        let (width, height) = background.dimensions();
        Scene {
            background,
            world: Surface::new(width, height),
            draw_ops: DrawOptions::default(),
        }
    }

    pub fn background(&self) -> &Surface {
        &self.background
    }

    pub fn world(&self) -> &Surface {
        &self.world
    }

    /// Repaint the whole world: background first, then the player on top.
    pub fn compose(&mut self, player: &Player) {
        self.draw_ops.transform.reset();
        self.draw_ops.blend = Blend::Copy;
        self.world.draw_surface(&self.background, &self.draw_ops);

        self.draw_ops.transform.reset();
        self.draw_ops.transform.translate(player.x, player.y);
        self.draw_ops.blend = Blend::SourceOver;
        self.world.draw_surface(player.sprite(), &self.draw_ops);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camdemo_common::Color;

    fn solid(width: u32, height: u32, color: Color) -> Surface {
        let mut s = Surface::new(width, height);
        s.fill(color);
        s
    }

    #[test]
    fn world_matches_background_size() {
        let scene = Scene::new(solid(64, 32, Color::BLUE));
        assert_eq!(scene.world().dimensions(), (64, 32));
    }

    #[test]
    fn player_is_drawn_over_background() {
        let mut scene = Scene::new(solid(64, 64, Color::BLUE));
        let player = Player::new(solid(4, 4, Color::RED), 10, 20);
        scene.compose(&player);

        let world = scene.world();
        assert_eq!(world.pixel(10, 20), Some(Color::RED));
        assert_eq!(world.pixel(13, 23), Some(Color::RED));
        assert_eq!(world.pixel(14, 20), Some(Color::BLUE));
        assert_eq!(world.pixel(9, 20), Some(Color::BLUE));
    }

    #[test]
    fn previous_frame_is_fully_overwritten() {
        let mut scene = Scene::new(solid(32, 32, Color::BLUE));
        let mut player = Player::new(solid(2, 2, Color::RED), 0, 0);
        scene.compose(&player);
        player.x = 10;
        scene.compose(&player);

        assert_eq!(scene.world().pixel(0, 0), Some(Color::BLUE));
        assert_eq!(scene.world().pixel(10, 0), Some(Color::RED));
    }

    #[test]
    fn transparent_sprite_pixels_show_background() {
        let mut sprite = solid(3, 1, Color::RED);
        let mut hole = Surface::new(1, 1);
        hole.fill(Color::TRANSPARENT);
        let mut ops = DrawOptions {
            blend: Blend::Copy,
            ..Default::default()
        };
        ops.transform.translate(1, 0);
        sprite.draw_surface(&hole, &ops);

        let mut scene = Scene::new(solid(8, 8, Color::GREEN));
        scene.compose(&Player::new(sprite, 2, 2));
        assert_eq!(scene.world().pixel(2, 2), Some(Color::RED));
        assert_eq!(scene.world().pixel(3, 2), Some(Color::GREEN));
        assert_eq!(scene.world().pixel(4, 2), Some(Color::RED));
    }
}
