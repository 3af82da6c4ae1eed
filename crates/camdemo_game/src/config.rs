use typed_builder::TypedBuilder;

use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Which flavour of the demo runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// The player stays put and the camera shows the top-left corner of the world.
    Basic,
    /// Arrow keys move the player inside `Movement` bounds and the camera follows.
    #[default]
    Follow,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Variant> {
        match name {
            "basic" | "static" => Some(Variant::Basic),
            "follow" | "enhanced" => Some(Variant::Follow),
            _ => None,
        }
    }

    pub fn moves(self) -> bool {
        self == Variant::Follow
    }

    pub fn follows(self) -> bool {
        self == Variant::Follow
    }
}

/// Per-tick step and the inclusive box the player is kept inside.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Movement {
    pub step: i32,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Default for Movement {
    fn default() -> Self {
        Movement {
            step: 5,
            min_x: 100,
            max_x: 1800,
            min_y: 100,
            max_y: 900,
        }
    }
}

/// Location of an image inside an `AssetSource`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPath {
    pub folder: String,
    pub file: String,
}

impl AssetPath {
    pub fn new(folder: &str, file: &str) -> AssetPath {
        AssetPath {
            folder: folder.to_string(),
            file: file.to_string(),
        }
    }
}

#[derive(Clone, Debug, TypedBuilder)]
pub struct GameConfig {
    #[builder(default)]
    pub variant: Variant,
    #[builder(default = WINDOW_WIDTH)]
    pub window_width: u32,
    #[builder(default = WINDOW_HEIGHT)]
    pub window_height: u32,
    #[builder(default = (100, 100))]
    pub start: (i32, i32),
    #[builder(default)]
    pub movement: Movement,
    #[builder(default = String::from("camdemo"))]
    pub title: String,
    #[builder(default = AssetPath::new("background", "BACKGROUND4.png"))]
    pub background: AssetPath,
    #[builder(default = AssetPath::new("sprites", "player.png"))]
    pub sprite: AssetPath,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::builder().build()
    }
}
