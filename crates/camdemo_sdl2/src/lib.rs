use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;
use typed_builder::TypedBuilder;

pub use camdemo_common;
pub use camdemo_common::app::App;
pub use sdl2;

use camdemo_common::key::Key;
use camdemo_common::screen::Screen;

/// Frame budget for ~60 ticks per second.
const TARGET_FRAME: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    #[builder(default = 1)]
    pub scale: u32,
    pub title: String,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext {
    pub sdl_context: sdl2::Sdl,
    pub event_pump: sdl2::EventPump,
    pub canvas: WindowCanvas,
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
}

impl SdlContext {
    pub fn new(sdl_init_info: SdlInitInfo) -> Result<SdlContext> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().present_vsync().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!("SDL2 window '{}' {}x{} (scale {})", title, width, height, scale);

        Ok(SdlContext {
            sdl_context,
            event_pump,
            canvas,
            width,
            height,
            pixel_format,
        })
    }

    /// Open a window and drive `app` until it asks to exit, the window is
    /// closed, or `update` fails.
    pub fn run(sdl_init_info: SdlInitInfo, app: impl App) -> Result<()> {
        SdlContext::new(sdl_init_info)?.run_app(app)
    }

    fn run_app(mut self, mut app: impl App) -> Result<()> {
        let (width, height) = app.layout(self.width, self.height);
        let creator = self.canvas.texture_creator();
        let mut texture = creator
            .create_texture_streaming(map_pixel_format(self.pixel_format), width, height)
            .map_err(|e| anyhow!(e.to_string()))?;

        let color_size = map_pixel_format_size(self.pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        app.init();
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            for event in self.event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        let key = map_keycode(keycode);
                        app.handle_key_event(key, false);
                    }
                    _ => {}
                }
            }

            if let Err(e) = app.update() {
                app.exit();
                return Err(e);
            }
            app.draw(&mut Screen::new(&mut screen_state, width, height));

            texture
                .update(None, &screen_state, (width * color_size) as usize)
                .map_err(|e| anyhow!(e.to_string()))?;
            self.canvas.clear();
            self.canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            self.canvas.present();

            let elapsed = last_frame.elapsed();
            if elapsed < TARGET_FRAME {
                std::thread::sleep(TARGET_FRAME - elapsed);
            }
            last_frame = Instant::now();
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Escape => Key::Escape,
        Keycode::Space => Key::Space,
        _ => Key::None,
    }
}
