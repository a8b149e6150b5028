//! Context types for rule execution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Context provided to import listeners.
///
/// Carries the identity of the file being analyzed. Listeners derive
/// everything they need (such as the owning team) from the path alone.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Path to the file as discovered by the host.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Returns the file path as a string, with `\` separators turned into `/`.
    #[must_use]
    pub fn filename(&self) -> Cow<'a, str> {
        let lossy = self.path.to_string_lossy();
        if lossy.contains('\\') {
            Cow::Owned(lossy.replace('\\', "/"))
        } else {
            lossy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_path_strips_root() {
        let path = Path::new("/project/src/teams/team-order/index.ts");
        let ctx = FileContext::new(path, "", Path::new("/project"));
        assert_eq!(
            ctx.relative_path,
            PathBuf::from("src/teams/team-order/index.ts")
        );
    }

    #[test]
    fn relative_path_falls_back_to_full_path() {
        let path = Path::new("/elsewhere/a.ts");
        let ctx = FileContext::new(path, "", Path::new("/project"));
        assert_eq!(ctx.relative_path, PathBuf::from("/elsewhere/a.ts"));
    }

    #[test]
    fn filename_normalizes_backslashes() {
        let path = Path::new(r"C:\project\src\teams\team-order\a.ts");
        let ctx = FileContext::new(path, "", Path::new("/project"));
        assert_eq!(ctx.filename(), "C:/project/src/teams/team-order/a.ts");
    }
}
