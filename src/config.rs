//! Output location for generated docs.

use crate::error::{HdocError, Result};
use std::path::{Path, PathBuf};

/// Directory the CLI writes into, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";

/// Generation settings. The CLI always runs with [`Config::default`].
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    /// `<output_dir>/<file name of input>.<ext>`, e.g. `lib/map.h` → `docs/map.h.md`.
    pub fn output_path(&self, input: &Path, ext: &str) -> Result<PathBuf> {
        let name = input.file_name().ok_or_else(|| HdocError::NoFileName {
            path: input.to_path_buf(),
        })?;
        let mut file_name = name.to_os_string();
        file_name.push(".");
        file_name.push(ext);
        Ok(self.output_dir.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_header_extension() {
        let cfg = Config::default();
        assert_eq!(
            cfg.output_path(Path::new("lib/map.h"), "md").unwrap(),
            PathBuf::from("docs/map.h.md")
        );
    }

    #[test]
    fn bare_file_name() {
        let cfg = Config::default();
        assert_eq!(
            cfg.output_path(Path::new("test.h"), "md").unwrap(),
            PathBuf::from("docs/test.h.md")
        );
    }

    #[test]
    fn custom_output_dir() {
        let cfg = Config {
            output_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            cfg.output_path(Path::new("/src/include/tty.h"), "md").unwrap(),
            PathBuf::from("/tmp/out/tty.h.md")
        );
    }

    #[test]
    fn no_file_name() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.output_path(Path::new(".."), "md"),
            Err(HdocError::NoFileName { .. })
        ));
    }
}
