// src/output_dir.rs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AnimationError, AnimationResult};

/// Creates a fresh frame directory `<output_root>/<input file name><counter>`.
///
/// The counter starts at 0 and increases until a name is free, so earlier runs are
/// never overwritten. `output_root` is created when missing.
pub fn create_output_dir(output_root: &Path, input_path: &Path) -> AnimationResult<PathBuf> {
    if !output_root.is_dir() {
        fs::create_dir_all(output_root).map_err(|e| AnimationError::io(output_root, e))?;
        log::info!("Created output root '{}'", output_root.display());
    }

    let base_name = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "animation".to_string());

    let mut counter: u64 = 0;
    loop {
        let candidate = output_root.join(format!("{base_name}{counter}"));
        match fs::create_dir(&candidate) {
            Ok(()) => {
                log::debug!("Output directory '{}' created", candidate.display());
                return Ok(candidate);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(AnimationError::io(candidate, e)),
        }
    }
}


// src/output_dir.rs
