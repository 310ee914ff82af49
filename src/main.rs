use scenegen::config::{Config, CONFIG_FILE};
use scenegen::export;
use scenegen::scenes::random::RandomScene;
use scenegen::scenes::SceneBuilder;
use std::path::Path;
use std::time::Instant;

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

fn run() -> scenegen::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        log::info!(
            "Tips: You can also provide args!\n  scenegen [scene_name] [nb_objects] [nb_planes]\n  defaults are \"scene.json\", 10, 0"
        );
    }

    let mut config = Config::load(Path::new(CONFIG_FILE))?.generator;
    config.apply_args(&args)?;

    log::info!("Building scene with {} objects...", config.total_count());
    let now = Instant::now();
    let path = config.output_path();
    let scene = RandomScene::from_config(config)?.build();
    export::write_scene(&scene, &path)?;

    log::info!("Done. Took {:?}", now.elapsed());
    Ok(())
}
