use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolves `input` to the C# files to convert: the file itself, or every
/// `.cs` file below it when it is a directory.
pub fn collect_sources(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_dir() {
        scan_directory(input)
    } else {
        Ok(vec![input.to_path_buf()])
    }
}

pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_build_dir(e.path()))
    {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("cs") {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

fn is_build_dir(path: &Path) -> bool {
    path.is_dir()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n == "bin" || n == "obj")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_single_file_input() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Order.cs");
        fs::write(&file, "public class Order").unwrap();

        let files = collect_sources(&file).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_scan_directory_only_cs() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.cs"), "public class A").unwrap();
        fs::write(dir.path().join("b.cs"), "public class B").unwrap();
        fs::write(dir.path().join("notes.txt"), "public class C").unwrap();

        let files = collect_sources(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_recursive_scan_sorted() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(dir.path().join("z.cs"), "").unwrap();
        fs::write(sub.join("a.cs"), "").unwrap();

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(files, vec![sub.join("a.cs"), dir.path().join("z.cs")]);
    }

    #[test]
    fn test_exclude_build_dirs() {
        let dir = TempDir::new().unwrap();
        let obj = dir.path().join("obj");
        let bin = dir.path().join("bin");
        fs::create_dir(&obj).unwrap();
        fs::create_dir(&bin).unwrap();

        fs::write(dir.path().join("a.cs"), "").unwrap();
        fs::write(obj.join("Generated.cs"), "").unwrap();
        fs::write(bin.join("Other.cs"), "").unwrap();

        let files = scan_directory(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
    }
}
