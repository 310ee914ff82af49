use scenegen::config::{Config, CONFIG_FILE};
use scenegen::screenshots::renumber_screens;
use std::path::{Path, PathBuf};

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

/// `renumber_screens [dir]`
fn run() -> scenegen::Result<()> {
    let dir = match std::env::args().nth(1) {
        Some(dir) => PathBuf::from(dir),
        None => Config::load(Path::new(CONFIG_FILE))?.screenshots.dir,
    };

    renumber_screens(&dir)?;
    Ok(())
}
