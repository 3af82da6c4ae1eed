use camdemo_game::{EmbeddedAssets, Variant};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "follow".to_string());
    let variant = match Variant::from_name(&name) {
        Some(variant) => variant,
        None => {
            eprintln!("Unknown variant '{}'. Supported: basic, follow", name);
            std::process::exit(2);
        }
    };

    let app = match camdemo::build_app(&EmbeddedAssets, camdemo::config_for(variant)) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = camdemo::run_app(app) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
