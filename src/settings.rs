#![deny(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct Settings {
    /// Deployment root that relative asset paths resolve against.
    pub root: PathBuf,
    pub stylesheet: PathBuf,
    pub image_dir: PathBuf,
}

impl Settings {
    pub fn default(root: PathBuf) -> Self {
        Settings {
            root,
            stylesheet: PathBuf::from("styles/globals.css"),
            image_dir: PathBuf::from("images"),
        }
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.resolve(&self.stylesheet)
    }

    pub fn image_path(&self, file: &str) -> PathBuf {
        self.resolve(&self.image_dir).join(file)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_resolve_against_root() {
        let settings = Settings::default(PathBuf::from("/srv/portfolio"));
        assert_eq!(
            settings.stylesheet_path(),
            PathBuf::from("/srv/portfolio/styles/globals.css")
        );
        assert_eq!(
            settings.image_path("kaggle1.png"),
            PathBuf::from("/srv/portfolio/images/kaggle1.png")
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let mut settings = Settings::default(PathBuf::from("/srv/portfolio"));
        settings.stylesheet = PathBuf::from("/etc/portfolio/site.css");
        settings.image_dir = PathBuf::from("/var/images");
        assert_eq!(
            settings.stylesheet_path(),
            PathBuf::from("/etc/portfolio/site.css")
        );
        assert_eq!(
            settings.image_path("paper1.png"),
            PathBuf::from("/var/images/paper1.png")
        );
    }
}
