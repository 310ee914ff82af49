use scenegen::config::{Config, CONFIG_FILE};
use scenegen::export;
use scenegen::scenes::flashback::{count_images, FlashbackLayout, FlashbackScene};
use scenegen::scenes::SceneBuilder;
use std::path::Path;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// `flashback [gallery|corridor]`
fn run() -> scenegen::Result<()> {
    let config = Config::load(Path::new(CONFIG_FILE))?.flashback;
    let layout = match std::env::args().nth(1) {
        Some(name) => name.parse::<FlashbackLayout>()?,
        None => config.layout,
    };

    let image_count = count_images(&config.image_dir)?;
    log::info!(
        "Found {} images in '{}', using {} layout",
        image_count,
        config.image_dir.display(),
        layout
    );

    let scene = FlashbackScene::new(layout, image_count).build();
    export::write_scene(&scene, &config.output)
}
