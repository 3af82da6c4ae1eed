use std::borrow::Cow;
use std::collections::HashMap;

use camdemo_common::Surface;
use rust_embed::RustEmbed;
use thiserror::Error;

/// Read-only store of asset bytes, addressed by `folder/file`.
pub trait AssetSource {
    fn open(&self, folder: &str, file: &str) -> Option<Cow<'static, [u8]>>;
}

/// Everything under this crate's `assets/` directory, compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn open(&self, folder: &str, file: &str) -> Option<Cow<'static, [u8]>> {
        <EmbeddedAssets as RustEmbed>::get(&asset_path(folder, file)).map(|f| f.data)
    }
}

/// In-memory assets, for tools and tests that do not want the embedded set.
#[derive(Default, Debug, Clone)]
pub struct MemoryAssets {
    files: HashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> MemoryAssets {
        MemoryAssets::default()
    }

    pub fn insert(&mut self, folder: &str, file: &str, bytes: Vec<u8>) {
        self.files.insert(asset_path(folder, file), bytes);
    }

    pub fn with(mut self, folder: &str, file: &str, bytes: Vec<u8>) -> MemoryAssets {
        self.insert(folder, file, bytes);
        self
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, folder: &str, file: &str) -> Option<Cow<'static, [u8]>> {
        self.files
            .get(&asset_path(folder, file))
            .map(|bytes| Cow::Owned(bytes.clone()))
    }
}

/// Both variants are fatal at startup.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("failed to open asset '{path}'")]
    NotFound { path: String },
    #[error("failed to decode image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

fn asset_path(folder: &str, file: &str) -> String {
    format!("{}/{}", folder, file)
}

/// Open `folder/file` from `source` and decode it into an RGBA surface.
pub fn load_image(
    source: &impl AssetSource,
    folder: &str,
    file: &str,
) -> Result<Surface, AssetLoadError> {
    let path = asset_path(folder, file);
    let bytes = source
        .open(folder, file)
        .ok_or_else(|| AssetLoadError::NotFound { path: path.clone() })?;
    let image = image::load_from_memory(&bytes)
        .map_err(|source| AssetLoadError::Decode {
            path: path.clone(),
            source,
        })?
        .into_rgba8();
    log::debug!("loaded '{}' ({}x{})", path, image.width(), image.height());
    Ok(Surface::from_image(image))
}
