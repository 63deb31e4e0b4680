//! Validation and compilation of content globs.
//!
//! Content globs name the source files the pipeline scans for utility-class
//! usage. The loader validates each pattern up front so a typo aborts the
//! build before any scanning starts; actual directory traversal belongs to
//! the consuming pipeline.

use std::fmt;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::settings::ConfigError;

/// A validated file-path pattern identifying sources scanned for class usage.
///
/// The original pattern text is preserved verbatim so a loaded configuration
/// can be serialized back to the record it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentGlob(String);

impl ContentGlob {
    /// Validate the pattern syntax, keeping the original text on success.
    pub fn parse(pattern: &str) -> Result<Self, ConfigError> {
        match Glob::new(pattern) {
            Ok(_) => Ok(Self(pattern.to_string())),
            Err(source) => Err(ConfigError::InvalidGlob {
                pattern: pattern.to_string(),
                source,
            }),
        }
    }

    /// Return the pattern exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Combined matcher over every configured content glob.
#[derive(Debug, Clone)]
pub struct ContentSet {
    set: GlobSet,
    len: usize,
}

impl ContentSet {
    /// Compile the configured globs into a single matcher.
    pub fn compile(globs: &[ContentGlob]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for glob in globs {
            let compiled = Glob::new(glob.as_str()).map_err(|source| ConfigError::InvalidGlob {
                pattern: glob.as_str().to_string(),
                source,
            })?;
            builder.add(compiled);
        }
        let set = builder.build().map_err(|source| ConfigError::InvalidGlob {
            pattern: source.glob().unwrap_or_default().to_string(),
            source,
        })?;

        Ok(Self {
            set,
            len: globs.len(),
        })
    }

    /// Returns `true` when the path matches at least one configured glob.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.set.is_match(path)
    }

    /// Number of globs the matcher was compiled from.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no globs were configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
