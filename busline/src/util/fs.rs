use std::path::Path;

use crate::export::ExportError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), ExportError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            ExportError::OutputDirectoryError(msg)
        })
    } else {
        Ok(())
    }
}

/// fails if `path` exists and overwriting is not allowed
pub fn check_overwrite(path: &Path, overwrite: bool) -> Result<(), ExportError> {
    if path.exists() && !overwrite {
        Err(ExportError::DestinationExists(
            path.to_str().unwrap_or_default().to_string(),
        ))
    } else {
        Ok(())
    }
}
