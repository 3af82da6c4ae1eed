use camdemo_common::{Color, Rect, Screen, Surface};

/// A display-sized view into the world, steered by a follow rectangle.
#[derive(Debug, Clone)]
pub struct Camera {
    view: Rect,
    follow: Rect,
}

impl Camera {
    pub fn new(width: u32, height: u32) -> Camera {
        Camera {
            view: Rect::new(0, 0, width as i32, height as i32),
            follow: Rect::default(),
        }
    }

    pub fn view(&self) -> Rect {
        self.view
    }

    pub fn follow_rect(&self) -> Rect {
        self.follow
    }

    /// Track a target at (x, y): the follow rectangle spans the origin to
    /// twice the target, so its centre is the target itself.
    pub fn follow(&mut self, x: i32, y: i32) {
        self.follow = Rect::new(0, 0, x * 2, y * 2);
    }

    /// Centre the view on the follow rectangle and keep it inside `world`.
    /// An empty follow rectangle leaves the view where it is.
    pub fn update_view(&mut self, world: Rect) {
        if !self.follow.is_empty() {
            let (cx, cy) = self.follow.center();
            self.view.x = cx - self.view.width / 2;
            self.view.y = cy - self.view.height / 2;
        }
        self.view.x = clamp_axis(self.view.x, self.view.width, world.x, world.width);
        self.view.y = clamp_axis(self.view.y, self.view.height, world.y, world.height);
    }

    /// Copy the visible part of `world` to `screen`. Anything the world does
    /// not cover is black.
    pub fn draw(&mut self, world: &Surface, screen: &mut Screen) {
        self.update_view(world.bounds());
        let width = screen.width().min(self.view.width.max(0) as u32);
        let height = screen.height().min(self.view.height.max(0) as u32);

        screen.fill(Color::BLACK);
        for sy in 0..height {
            for sx in 0..width {
                let wx = self.view.x + sx as i32;
                let wy = self.view.y + sy as i32;
                if wx < 0 || wy < 0 {
                    continue;
                }
                if let Some(px) = world.pixel(wx as u32, wy as u32) {
                    screen.set_pixel(sx, sy, px.over(Color::BLACK));
                }
            }
        }
    }
}

fn clamp_axis(origin: i32, view_len: i32, world_origin: i32, world_len: i32) -> i32 {
    if world_len <= view_len {
        world_origin
    } else {
        origin.clamp(world_origin, world_origin + world_len - view_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camdemo_common::screen::BYTES_PER_PIXEL;

    fn world(width: u32, height: u32) -> Surface {
        // Encode the coordinate into the color so blits can be checked.
        let mut image = image::RgbaImage::new(width, height);
        for (x, y, px) in image.enumerate_pixels_mut() {
            *px = image::Rgba([(x % 256) as u8, (y % 256) as u8, 7, 255]);
        }
        Surface::from_image(image)
    }

    #[test]
    fn follow_rect_is_twice_the_target() {
        let mut camera = Camera::new(800, 720);
        camera.follow(150, 120);
        let rect = camera.follow_rect();
        assert_eq!((rect.width, rect.height), (300, 240));
        assert_eq!(rect.center(), (150, 120));
    }

    #[test]
    fn view_is_centred_on_target() {
        let mut camera = Camera::new(100, 80);
        camera.follow(500, 400);
        camera.update_view(Rect::new(0, 0, 1000, 1000));
        assert_eq!(camera.view(), Rect::new(450, 360, 100, 80));
    }

    #[test]
    fn view_is_clamped_inside_world() {
        let bounds = Rect::new(0, 0, 1920, 1080);
        let mut camera = Camera::new(800, 720);

        camera.follow(100, 100);
        camera.update_view(bounds);
        assert_eq!((camera.view().x, camera.view().y), (0, 0));

        camera.follow(1800, 900);
        camera.update_view(bounds);
        assert_eq!((camera.view().x, camera.view().y), (1120, 360));
        assert!(camera.view().right() <= 1920 && camera.view().bottom() <= 1080);
    }

    #[test]
    fn world_smaller_than_view_pins_to_origin() {
        let mut camera = Camera::new(100, 100);
        camera.follow(40, 40);
        camera.update_view(Rect::new(0, 0, 50, 200));
        assert_eq!((camera.view().x, camera.view().y), (0, 0));

        camera.follow(40, 180);
        camera.update_view(Rect::new(0, 0, 50, 200));
        assert_eq!(camera.view().y, 100);
    }

    #[test]
    fn no_follow_target_keeps_origin() {
        let mut camera = Camera::new(10, 10);
        camera.update_view(Rect::new(0, 0, 100, 100));
        assert_eq!(camera.view(), Rect::new(0, 0, 10, 10));
    }

    #[test]
    fn draw_blits_visible_region() {
        let world = world(64, 64);
        let mut camera = Camera::new(8, 8);
        camera.follow(20, 30);

        let mut buf = vec![0u8; 8 * 8 * BYTES_PER_PIXEL];
        let mut screen = Screen::new(&mut buf, 8, 8);
        camera.draw(&world, &mut screen);

        assert_eq!(camera.view(), Rect::new(16, 26, 8, 8));
        assert_eq!(screen.pixel(0, 0), Some(Color::new_rgb(16, 26, 7)));
        assert_eq!(screen.pixel(7, 7), Some(Color::new_rgb(23, 33, 7)));
    }

    #[test]
    fn uncovered_screen_is_black() {
        let world = world(4, 4);
        let mut camera = Camera::new(8, 8);
        let mut buf = vec![0xAAu8; 8 * 8 * BYTES_PER_PIXEL];
        let mut screen = Screen::new(&mut buf, 8, 8);
        camera.draw(&world, &mut screen);

        assert_eq!(screen.pixel(3, 3), Some(Color::new_rgb(3, 3, 7)));
        assert_eq!(screen.pixel(4, 0), Some(Color::BLACK));
        assert_eq!(screen.pixel(7, 7), Some(Color::BLACK));
    }
}
