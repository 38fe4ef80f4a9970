// src/fsutil.rs
//! Platform seam: directory listing, attribute probes, path helpers.

#![deny(missing_docs)]

use crate::predicate::AttrFlags;
use std::fs;
use std::io;
use std::path::Path;

/// One child from a directory listing.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    /// Bare file-name component.
    pub name: String,
    /// Directory hint from the listing; never follows symlinks.
    pub is_dir: bool,
}

/// The narrow interface the search core uses to reach the filesystem.
pub trait FsProvider {
    /// List the immediate children of `path`. `.`/`..` never appear; the
    /// order is whatever the filesystem reports.
    fn list_directory(&self, path: &str) -> io::Result<Vec<ChildEntry>>;

    /// Probe symlink/executable flags; a failed probe yields cleared flags.
    fn probe_attributes(&self, full_path: &str) -> AttrFlags;

    /// Whether the filesystem compares names case-insensitively.
    fn filesystem_ignores_case(&self) -> bool;

    /// Whether `path` names a directory (following a symlink if it is one).
    fn is_directory_like(&self, path: &str) -> bool;

    /// Whether `path` names anything at all.
    fn path_exists(&self, path: &str) -> bool;
}

/// The host filesystem.
pub struct OsFs;

impl FsProvider for OsFs {
    fn list_directory(&self, path: &str) -> io::Result<Vec<ChildEntry>> {
        let mut children = Vec::new();
        for dent in fs::read_dir(path)? {
            let dent = dent?;
            let is_dir = dent.file_type().map(|t| t.is_dir()).unwrap_or(false);
            children.push(ChildEntry {
                name: dent.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(children)
    }

    fn probe_attributes(&self, full_path: &str) -> AttrFlags {
        let Ok(meta) = fs::symlink_metadata(full_path) else {
            return AttrFlags::default();
        };
        AttrFlags {
            symlink: meta.file_type().is_symlink(),
            executable: is_executable(&meta),
        }
    }

    fn filesystem_ignores_case(&self) -> bool {
        // Stand-in for a runtime probe: the usual case-preserving but
        // case-insensitive filesystems live on these hosts.
        cfg!(any(target_os = "windows", target_os = "macos"))
    }

    fn is_directory_like(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn path_exists(&self, path: &str) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}

/// Whether `path` is a bare root: `/`, `\`, or a drive-letter root such as
/// `C:/` or `C:\`.
pub fn is_root_path(path: &str) -> bool {
    if path == "/" || path == "\\" {
        return true;
    }
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next(), chars.next(), chars.next()),
        (Some(drive), Some(':'), Some('/' | '\\'), None) if drive.is_ascii_alphabetic()
    )
}

/// Join a directory path and a child name without doubling separators.
///
/// An empty `dir` returns `name` unchanged; a bare root concatenates
/// directly; otherwise exactly one `/` goes in between unless `dir`
/// already ends with a separator.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        return name.to_string();
    }
    if is_root_path(dir) || dir.ends_with('/') || dir.ends_with('\\') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// The final path component, splitting on both separator styles.
pub fn base_name(path: &str) -> &str {
    path.rfind(['/', '\\'])
        .map(|i| &path[i + 1..])
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_exactly_one_separator() {
        assert_eq!(join_path("/usr/local", "bin"), "/usr/local/bin");
        assert_eq!(join_path("/usr/local/", "bin"), "/usr/local/bin");
        assert_eq!(join_path("root", "a.txt"), "root/a.txt");
        assert_eq!(join_path("/usr", "local"), "/usr/local");
    }

    #[test]
    fn join_handles_roots() {
        assert_eq!(join_path("/", "etc"), "/etc");
        assert_eq!(join_path("\\", "temp"), "\\temp");
        assert_eq!(join_path("C:\\", "Windows"), "C:\\Windows");
        assert_eq!(join_path("n:/", "bin"), "n:/bin");
    }

    #[test]
    fn join_empty_dir_returns_name() {
        assert_eq!(join_path("", "file"), "file");
    }

    #[test]
    fn join_drive_without_separator() {
        assert_eq!(join_path("C:", "Windows"), "C:/Windows");
    }

    #[test]
    fn join_multibyte_tail() {
        assert_eq!(join_path("データ", "メモ.txt"), "データ/メモ.txt");
        assert_eq!(join_path("データ/", "メモ.txt"), "データ/メモ.txt");
    }

    #[test]
    fn root_detection() {
        assert!(is_root_path("/"));
        assert!(is_root_path("\\"));
        assert!(is_root_path("C:/"));
        assert!(is_root_path("c:\\"));
        assert!(!is_root_path("/usr"));
        assert!(!is_root_path("C:"));
        assert!(!is_root_path("1:/"));
        assert!(!is_root_path(""));
    }

    #[test]
    fn base_name_takes_last_component() {
        assert_eq!(base_name("/usr/local/bin"), "bin");
        assert_eq!(base_name("a.txt"), "a.txt");
        assert_eq!(base_name("dir\\file"), "file");
        assert_eq!(base_name("dir/"), "");
    }

    #[test]
    fn os_listing_reports_names_and_kinds() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("a.txt"), "x").unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();

        let mut listed: Vec<(String, bool)> = OsFs
            .list_directory(tmp.path().to_str().unwrap())
            .unwrap()
            .into_iter()
            .map(|c| (c.name, c.is_dir))
            .collect();
        listed.sort();
        assert_eq!(
            listed,
            vec![("a.txt".to_string(), false), ("sub".to_string(), true)]
        );
    }

    #[test]
    fn os_listing_reports_not_found() {
        let err = OsFs.list_directory("/definitely/not/here").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn probe_sees_executable_bit() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().unwrap();
        let tool = tmp.path().join("tool");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let attrs = OsFs.probe_attributes(tool.to_str().unwrap());
        assert!(attrs.executable);
        assert!(!attrs.symlink);
    }

    #[cfg(unix)]
    #[test]
    fn probe_sees_symlinks() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("target.txt");
        let link = tmp.path().join("link.txt");
        std::fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let attrs = OsFs.probe_attributes(link.to_str().unwrap());
        assert!(attrs.symlink);
    }
}
