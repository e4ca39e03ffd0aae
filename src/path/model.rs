use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// An absolute path held as named segments.
///
/// `..` pops one segment and stops at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathModel {
    segments: Vec<OsString>,
}

impl PathModel {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_path(path: &Path) -> Self {
        let mut model = Self::root();
        model.apply(path);
        model
    }

    /// Walk `target` from the current position, or from the root when it is absolute.
    pub fn apply(&mut self, target: &Path) {
        for component in target.components() {
            match component {
                Component::RootDir | Component::Prefix(_) => self.segments.clear(),
                Component::CurDir => {}
                Component::ParentDir => {
                    self.segments.pop();
                }
                Component::Normal(name) => self.segments.push(name.to_os_string()),
            }
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        let mut path = PathBuf::from("/");
        path.extend(&self.segments);
        path
    }
}

impl fmt::Display for PathModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_buf().display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: &str, target: &str) -> String {
        let mut model = PathModel::from_path(Path::new(start));
        model.apply(Path::new(target));
        model.to_string()
    }

    #[test]
    fn test_parent_pops_one_segment() {
        assert_eq!(walk("/a/b/c", ".."), "/a/b");
    }

    #[test]
    fn test_each_parent_segment_counts() {
        assert_eq!(walk("/a/b/c", "../.."), "/a");
        assert_eq!(walk("/a/b/c", "../../x"), "/a/x");
        assert_eq!(walk("/a/b/c", "d/../../e"), "/a/b/e");
    }

    #[test]
    fn test_parent_stops_at_root() {
        assert_eq!(walk("/a/b/c", "../../../../.."), "/");
        assert_eq!(walk("/", ".."), "/");
        assert_eq!(PathModel::from_path(Path::new("/a/../..")), PathModel::root());
    }

    #[test]
    fn test_current_dir_segments_are_ignored() {
        assert_eq!(walk("/a/b", "."), "/a/b");
        assert_eq!(walk("/a/b", "./c/./d"), "/a/b/c/d");
    }

    #[test]
    fn test_absolute_target_restarts_at_root() {
        assert_eq!(walk("/a/b", "/tmp/x"), "/tmp/x");
        assert_eq!(walk("/a/b", "/tmp//x/"), "/tmp/x");
    }

    #[test]
    fn test_round_trips_through_path_buf() {
        let model = PathModel::from_path(Path::new("/usr/local/bin"));
        assert_eq!(model.to_path_buf(), PathBuf::from("/usr/local/bin"));
    }
}
