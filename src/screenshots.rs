//! Renumbers screenshots so the newest comes first.
//!
//! Files are named `<index>_<anything>.png`. They are renamed to `1.png`,
//! `2.png`, ... in descending index order.

use crate::error::{Error, Result};
use image::ImageFormat;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Renaming {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Parses the integer before the first `_` of `name`. Negative indices are
/// accepted; prefixes outside the `i64` range are rejected.
pub fn index_prefix(name: &str) -> Result<i64> {
    name.split_once('_')
        .and_then(|(prefix, _)| prefix.parse().ok())
        .ok_or_else(|| Error::MissingIndexPrefix(name.to_string()))
}

/// Orders `names` by descending index and pairs each with its new name.
/// Equal indices are ordered by name, descending.
pub fn plan_renames(dir: &Path, names: &[String]) -> Result<Vec<Renaming>> {
    let mut indexed = names
        .iter()
        .map(|name| Ok((index_prefix(name)?, name)))
        .collect::<Result<Vec<_>>>()?;

    indexed.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(a.1)));

    Ok(indexed
        .into_iter()
        .enumerate()
        .map(|(i, (_, name))| Renaming {
            from: dir.join(name),
            to: dir.join(format!("{}.png", i + 1)),
        })
        .collect())
}

fn list_screenshots(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() || !matches!(ImageFormat::from_path(&path), Ok(ImageFormat::Png)) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_string());
        } else {
            log::warn!("Skipping non UTF-8 file name '{}'", path.display());
        }
    }

    Ok(names)
}

/// Renames every PNG in `dir`. All names are validated and every target is
/// checked before the first rename, so a failure leaves the directory as-is.
pub fn renumber_screens(dir: &Path) -> Result<Vec<Renaming>> {
    let names = list_screenshots(dir)?;
    let plan = plan_renames(dir, &names)?;

    // Sources always contain '_' and targets never do, so the only possible
    // clash is with something that is not a candidate (a directory, say).
    if let Some(clash) = plan.iter().find(|r| r.to.exists()) {
        return Err(Error::RenameCollision(clash.to.clone()));
    }

    for renaming in &plan {
        std::fs::rename(&renaming.from, &renaming.to)
            .map_err(|e| Error::io(&renaming.from, e))?;
        log::debug!(
            "{} -> {}",
            renaming.from.display(),
            renaming.to.display()
        );
    }

    log::info!("Renumbered {} screenshots in '{}'", plan.len(), dir.display());
    Ok(plan)
}
