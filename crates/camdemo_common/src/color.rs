#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Source-over compositing of `self` on top of `dst`, straight alpha.
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            0 => dst,
            0xff => self,
            _ => {
                let sa = self.a as u32;
                let da = dst.a as u32 * (255 - sa) / 255;
                let out_a = sa + da;
                if out_a == 0 {
                    return Color::TRANSPARENT;
                }
                let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da) / out_a) as u8;
                Color {
                    r: mix(self.r, dst.r),
                    g: mix(self.g, dst.g),
                    b: mix(self.b, dst.b),
                    a: out_a as u8,
                }
            }
        }
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color { r, g, b, a }
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}
