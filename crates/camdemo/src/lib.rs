use anyhow::Result;
use camdemo_game::{AssetLoadError, AssetSource, CameraDemoApp, GameConfig, Variant};
use camdemo_sdl2::App;
use camdemo_sdl2::{SdlContext, SdlInitInfo};

/// Load every asset the demo needs. Nothing is drawn until this succeeds.
pub fn build_app(
    source: &impl AssetSource,
    config: GameConfig,
) -> Result<CameraDemoApp, AssetLoadError> {
    let app = CameraDemoApp::load(source, config)?;
    let (w, h) = app.scene().world().dimensions();
    log::info!("assets loaded, world is {}x{}", w, h);
    Ok(app)
}

/// Hand a ready app to the SDL2 frontend and block until it exits.
pub fn run_app(app: CameraDemoApp) -> Result<()> {
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

pub fn config_for(variant: Variant) -> GameConfig {
    let title = match variant {
        Variant::Basic => "camdemo (static camera)",
        Variant::Follow => "camdemo (follow camera)",
    };
    GameConfig::builder()
        .variant(variant)
        .title(title.to_string())
        .build()
}
