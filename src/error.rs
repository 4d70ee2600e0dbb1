use std::path::PathBuf;
use thiserror::Error;

/// Reasons a run is refused before anything is read or written.
#[derive(Error, Debug)]
pub enum PreconditionError {
    #[error("Input file not found: {0:?}")]
    InputNotFound(PathBuf),

    #[error("Output directory not found: {0:?}")]
    OutputDirNotFound(PathBuf),

    #[error("Output path is not a directory: {0:?}")]
    OutputNotADirectory(PathBuf),
}

pub fn check_paths(input: &std::path::Path, out_dir: &std::path::Path) -> Result<(), PreconditionError> {
    if !input.exists() {
        return Err(PreconditionError::InputNotFound(input.to_path_buf()));
    }
    if !out_dir.exists() {
        return Err(PreconditionError::OutputDirNotFound(out_dir.to_path_buf()));
    }
    if !out_dir.is_dir() {
        return Err(PreconditionError::OutputNotADirectory(out_dir.to_path_buf()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_paths() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("Order.cs");
        fs::write(&input, "public class Order").unwrap();

        assert!(check_paths(&input, dir.path()).is_ok());
        assert!(matches!(
            check_paths(&dir.path().join("missing.cs"), dir.path()),
            Err(PreconditionError::InputNotFound(_))
        ));
        assert!(matches!(
            check_paths(&input, &dir.path().join("out")),
            Err(PreconditionError::OutputDirNotFound(_))
        ));
        assert!(matches!(
            check_paths(&input, &input),
            Err(PreconditionError::OutputNotADirectory(_))
        ));
    }
}
