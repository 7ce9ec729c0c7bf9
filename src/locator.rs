//! Installation discovery.
//!
//! The locator probes exactly one level below the policy's search root: the
//! web deployer keeps one directory per installed build, and the executable
//! sits directly inside it.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::policy::SearchPolicy;

/// Find the application executable under `home_dir` using `policy`.
///
/// Build directories are visited in whatever order the filesystem lists
/// them and the first one holding `policy.executable_name` wins. When
/// several builds are installed, which one is returned is unspecified.
///
/// A missing search root is the normal "not installed" outcome and yields
/// `None`. Entries that cannot be read are skipped.
///
/// The returned path is canonical when possible, otherwise absolute, and
/// otherwise the joined path as probed.
///
/// # Examples
///
/// ```no_run
/// # use std::path::Path;
/// # use fusion_locate::{HostOs, locate, policy_for};
/// let policy = policy_for(&HostOs::Windows)?;
/// if let Some(exe) = locate(Path::new("C:/Users/me"), &policy) {
///     println!("Fusion 360 at {}", exe.display());
/// }
/// # Ok::<(), fusion_locate::LocateError>(())
/// ```
#[must_use]
pub fn locate(home_dir: &Path, policy: &SearchPolicy) -> Option<PathBuf> {
    let root = home_dir.join(relative_to_home(&policy.relative_root));

    if !root.is_dir() {
        debug!(root = %root.display(), "search root does not exist");
        return None;
    }

    let found = WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.path().is_dir())
        .map(|entry| entry.path().join(&policy.executable_name))
        .find(|candidate| {
            let exists = candidate.exists();
            debug!(candidate = %candidate.display(), exists, "probed build directory");
            exists
        })?;

    Some(resolve_path(found))
}

/// Keep only normal components so the path always joins below `home`.
///
/// Root, drive prefix, `.` and `..` components are dropped.
fn relative_to_home(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Prefer the canonical form of `path`, degrading to absolute, then raw.
fn resolve_path(path: PathBuf) -> PathBuf {
    match fs::canonicalize(&path) {
        Ok(canonical) => canonical,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "could not canonicalize installation path, using absolute form"
            );
            std::path::absolute(&path).unwrap_or(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn policy(root: &str, exe: &str) -> SearchPolicy {
        SearchPolicy {
            relative_root: PathBuf::from(root),
            executable_name: exe.to_string(),
        }
    }

    #[test]
    fn test_relative_to_home_strips_leading_slash() {
        assert_eq!(
            relative_to_home(Path::new("/Apps/Vendor/prod")),
            PathBuf::from("Apps/Vendor/prod")
        );
        assert_eq!(
            relative_to_home(Path::new("Apps/Vendor/prod")),
            PathBuf::from("Apps/Vendor/prod")
        );
    }

    #[test]
    fn test_relative_to_home_drops_parent_components() {
        assert_eq!(
            relative_to_home(Path::new("../../x")),
            PathBuf::from("x")
        );
        assert_eq!(
            relative_to_home(Path::new("Apps/../Vendor/./prod")),
            PathBuf::from("Apps/Vendor/prod")
        );
    }

    #[test]
    fn test_parent_components_do_not_escape_home() {
        let outer = TempDir::new().unwrap();
        let home = outer.path().join("home");
        fs::create_dir_all(&home).unwrap();
        let outside = outer.path().join("x/build-1");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("App.exe"), "").unwrap();

        assert!(locate(&home, &policy("../x", "App.exe")).is_none());
    }

    #[test]
    fn test_missing_root_returns_none() {
        let home = TempDir::new().unwrap();
        assert!(locate(home.path(), &policy("Apps/Vendor/prod", "App.exe")).is_none());
    }

    #[test]
    fn test_root_that_is_a_file_returns_none() {
        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join("Apps/Vendor")).unwrap();
        fs::write(home.path().join("Apps/Vendor/prod"), "").unwrap();

        assert!(locate(home.path(), &policy("Apps/Vendor/prod", "App.exe")).is_none());
    }

    #[test]
    fn test_files_directly_in_root_are_not_candidates() {
        let home = TempDir::new().unwrap();
        let root = home.path().join("Apps/Vendor/prod");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("App.exe"), "").unwrap();

        assert!(locate(home.path(), &policy("Apps/Vendor/prod", "App.exe")).is_none());
    }

    #[test]
    fn test_resolve_path_falls_back_for_missing_path() {
        let home = TempDir::new().unwrap();
        let missing = home.path().join("gone").join("App.exe");

        let resolved = resolve_path(missing);
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("gone/App.exe"));
    }

    #[test]
    fn test_resolve_path_relative_becomes_absolute() {
        let resolved = resolve_path(PathBuf::from("does-not-exist-fusion/App.exe"));
        assert!(resolved.is_absolute());
    }
}
