use image::RgbaImage;

use crate::color::Color;
use crate::geom::{Blend, DrawOptions, Rect};

/// An offscreen RGBA8 canvas. Decoded images and the composed world both live
/// in one of these.
#[derive(Clone, Debug)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Surface {
        Surface {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn from_image(image: RgbaImage) -> Surface {
        Surface { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width() as i32, self.height() as i32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Color::from(*self.image.get_pixel(x, y)))
    }

    pub fn fill(&mut self, color: Color) {
        let px = image::Rgba::from(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Draw `src` onto this surface at the offset held by `opts.transform`.
    /// Pixels falling outside this surface are dropped.
    pub fn draw_surface(&mut self, src: &Surface, opts: &DrawOptions) {
        let (tx, ty) = opts.transform.apply(0, 0);
        let placed = Rect::new(tx, ty, src.width() as i32, src.height() as i32);
        let Some(clip) = self.bounds().intersect(&placed) else {
            return;
        };

        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let s = Color::from(*src.image.get_pixel((x - tx) as u32, (y - ty) as u32));
                let d = self.image.get_pixel_mut(x as u32, y as u32);
                let out = match opts.blend {
                    Blend::Copy => s,
                    Blend::SourceOver => s.over(Color::from(*d)),
                };
                *d = out.into();
            }
        }
    }
}
