//! Process environment captured at startup.
//!
//! Every path doual touches derives from an [`Environment`]: the alias store
//! lives in the home directory and the shell startup file is chosen from the
//! shell identifier. Tests build one with [`Environment::new`] to point both
//! at a temporary directory.

use std::path::{Path, PathBuf};

use crate::error::{DoualError, Result};
use crate::shell::ShellType;

/// File name of the alias store inside the home directory.
pub const STORE_FILE_NAME: &str = ".doual_aliases";

/// Home directory and shell identifier for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    home: PathBuf,
    shell: String,
}

impl Environment {
    /// Create an environment from explicit values.
    pub fn new(home: impl Into<PathBuf>, shell: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            shell: shell.into(),
        }
    }

    /// Capture `HOME` (`USERPROFILE` on Windows) and `SHELL`.
    ///
    /// An unset `SHELL` is treated as empty, which selects bash.
    pub fn from_env() -> Result<Self> {
        let home_var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        let home = std::env::var_os(home_var)
            .filter(|h| !h.is_empty())
            .ok_or(DoualError::HomeNotFound)?;
        let shell = std::env::var("SHELL").unwrap_or_default();

        tracing::debug!("Environment: home={:?}, shell={:?}", home, shell);
        Ok(Self::new(home, shell))
    }

    /// The user's home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The raw shell identifier (usually a path like `/bin/zsh`).
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Shell type detected from the shell identifier.
    pub fn shell_type(&self) -> ShellType {
        ShellType::detect(&self.shell)
    }

    /// Path of the alias store.
    pub fn store_file(&self) -> PathBuf {
        self.home.join(STORE_FILE_NAME)
    }

    /// Path of the startup file for the detected shell.
    pub fn profile_file(&self) -> PathBuf {
        self.home.join(self.shell_type().startup_file())
    }
}
