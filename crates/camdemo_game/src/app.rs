use anyhow::Result;
use camdemo_common::app::App;
use camdemo_common::key::Key;
use camdemo_common::{Screen, Surface};

use crate::assets::{load_image, AssetLoadError, AssetSource};
use crate::camera::Camera;
use crate::config::GameConfig;
use crate::input::Keyboard;
use crate::player::Player;
use crate::scene::Scene;
use crate::SCREEN_SCALE;

/// Frontend-facing wrapper: one player, one scene, one camera.
///
/// `update` moves the player from the held keys. `draw` composes the world
/// and lets the camera blit its view to the screen.
pub struct CameraDemoApp {
    should_exit: bool,
    config: GameConfig,
    keyboard: Keyboard,
    player: Player,
    scene: Scene,
    camera: Camera,
    frame_counter: u64,
}

impl CameraDemoApp {
    pub fn new(config: GameConfig, background: Surface, sprite: Surface) -> CameraDemoApp {
        let (x, y) = config.start;
        let camera = Camera::new(config.window_width, config.window_height);
        CameraDemoApp {
            should_exit: false,
            keyboard: Keyboard::default(),
            player: Player::new(sprite, x, y),
            scene: Scene::new(background),
            camera,
            config,
            frame_counter: 0,
        }
    }

    /// Load the background and sprite named in `config` from `source`.
    pub fn load(
        source: &impl AssetSource,
        config: GameConfig,
    ) -> Result<CameraDemoApp, AssetLoadError> {
        let background = load_image(source, &config.background.folder, &config.background.file)?;
        let sprite = load_image(source, &config.sprite.folder, &config.sprite.file)?;
        Ok(CameraDemoApp::new(config, background, sprite))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }
}

impl App for CameraDemoApp {
    fn init(&mut self) {
        let (w, h) = self.scene.world().dimensions();
        log::info!(
            "camdemo init: variant={:?} world={}x{} player=({}, {})",
            self.config.variant,
            w,
            h,
            self.player.x,
            self.player.y
        );
    }

    fn update(&mut self) -> Result<()> {
        if self.config.variant.moves() {
            self.player.update(&self.keyboard, &self.config.movement);
        }
        self.frame_counter = self.frame_counter.wrapping_add(1);

        if self.frame_counter % 60 == 0 {
            log::debug!(
                "frame={} player=({}, {}) view={:?}",
                self.frame_counter,
                self.player.x,
                self.player.y,
                self.camera.view()
            );
        }
        Ok(())
    }

    fn draw(&mut self, screen: &mut Screen) {
        self.scene.compose(&self.player);
        if self.config.variant.follows() {
            self.camera.follow(self.player.x, self.player.y);
        }
        self.camera.draw(self.scene.world(), screen);
    }

    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        (outside_width, outside_height)
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        log::debug!("key event: {:?} pressed={}", key, is_down);
        match key {
            Key::Escape if is_down => self.should_exit = true,
            _ => {
                self.keyboard.set(key, is_down);
            }
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("camdemo exit after {} frames", self.frame_counter);
    }

    fn width(&self) -> u32 {
        self.config.window_width
    }

    fn height(&self) -> u32 {
        self.config.window_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn title(&self) -> String {
        self.config.title.clone()
    }
}
