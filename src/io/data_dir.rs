use std::path::{Path, PathBuf};

/// Marker file next to the executable that switches on portable mode
pub const PORTABLE_MARKER: &str = "portable.txt";
/// Data directory used in portable mode, relative to the executable
pub const PORTABLE_DIR: &str = ".ghosty_data";
/// Data directory under the user's home
pub const HOME_DIR: &str = ".ghosty_todo";

/// Resolve the data directory for this process.
///
/// `explicit` is the `--data-dir` flag (clap already folds in
/// `GHOSTY_DATA_DIR`). Otherwise portable mode wins over the home directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_data_dir_from(explicit, exe_dir.as_deref(), home_dir())
}

/// Resolution with every input passed in
pub fn resolve_data_dir_from(
    explicit: Option<PathBuf>,
    exe_dir: Option<&Path>,
    home: PathBuf,
) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Some(exe_dir) = exe_dir
        && exe_dir.join(PORTABLE_MARKER).is_file()
    {
        return exe_dir.join(PORTABLE_DIR);
    }
    home.join(HOME_DIR)
}

/// Get the user's home directory
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(PORTABLE_MARKER), "").unwrap();
        let dir = resolve_data_dir_from(
            Some(PathBuf::from("/data/ghosty")),
            Some(tmp.path()),
            PathBuf::from("/home/me"),
        );
        assert_eq!(dir, PathBuf::from("/data/ghosty"));
    }

    #[test]
    fn portable_marker_selects_exe_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(PORTABLE_MARKER), "").unwrap();
        let dir = resolve_data_dir_from(None, Some(tmp.path()), PathBuf::from("/home/me"));
        assert_eq!(dir, tmp.path().join(".ghosty_data"));
    }

    #[test]
    fn falls_back_to_home() {
        let tmp = TempDir::new().unwrap();
        let dir = resolve_data_dir_from(None, Some(tmp.path()), PathBuf::from("/home/me"));
        assert_eq!(dir, PathBuf::from("/home/me/.ghosty_todo"));

        let dir = resolve_data_dir_from(None, None, PathBuf::from("/home/me"));
        assert_eq!(dir, PathBuf::from("/home/me/.ghosty_todo"));
    }

    #[test]
    fn marker_must_be_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(PORTABLE_MARKER)).unwrap();
        let dir = resolve_data_dir_from(None, Some(tmp.path()), PathBuf::from("/h"));
        assert_eq!(dir, PathBuf::from("/h/.ghosty_todo"));
    }
}
