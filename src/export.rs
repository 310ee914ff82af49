use crate::error::{Error, Result};
use crate::scenes::Scene;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn to_json(scene: &Scene) -> Result<String> {
    let mut json = serde_json::to_string_pretty(scene)?;
    json.push('\n');
    Ok(json)
}

/// Writes `scene` to `path`, replacing any existing file. The parent
/// directory must already exist.
pub fn write_scene(scene: &Scene, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, scene)?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| Error::io(path, e))?;

    log::info!(
        "Wrote {} records to '{}'",
        scene.record_count(),
        path.display()
    );
    Ok(())
}
