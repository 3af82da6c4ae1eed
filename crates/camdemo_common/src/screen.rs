use crate::color::Color;

/// Bytes per pixel of the RGB24 display buffer handed to `App::draw`.
pub const BYTES_PER_PIXEL: usize = 3;

/// The frontend's RGB24 display buffer, borrowed for one `draw` call.
pub struct Screen<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Screen<'a> {
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Screen<'a> {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL
        );
        Screen {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }

    /// Alpha is dropped; callers composite onto an opaque color first.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = color.r;
        self.pixels[index + 1] = color.g;
        self.pixels[index + 2] = color.b;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = self.index(x, y);
        Some(Color::new_rgb(
            self.pixels[index],
            self.pixels[index + 1],
            self.pixels[index + 2],
        ))
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }
}
