//! Alias operations.
//!
//! [`AliasManager`] keeps the record store and the shell startup file in
//! lockstep: every mutation updates the store first, then mirrors the change
//! into the startup file. A startup-file failure is returned to the caller
//! with the store change already in place. After a failed create, creating
//! the alias again brings the two back in line. After a failed remove the
//! alias is no longer stored, so a second remove reports it as not found and
//! changes nothing; recreate the alias and then remove it to clear the stale
//! line.

use std::path::PathBuf;

use crate::config::Environment;
use crate::error::{DoualError, Result};
use crate::shell::{execute_inherited, CommandResult, ProfileSync};
use crate::store::{AliasOptions, AliasRecord, RecordStore};

/// Result of creating or updating an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    /// An alias with this name already existed and was replaced.
    pub replaced: bool,
    /// Startup file that now holds the alias line.
    pub profile_file: PathBuf,
}

/// Result of removing an alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The alias was removed from the store and the startup file.
    Removed { profile_file: PathBuf },
    /// No alias with this name was stored; nothing was touched.
    NotFound,
}

/// Orchestrates create, remove, list, and execute.
#[derive(Debug, Clone)]
pub struct AliasManager {
    store: RecordStore,
    profile: ProfileSync,
}

impl AliasManager {
    /// Create a manager whose files all live under `env`'s home directory.
    pub fn new(env: &Environment) -> Self {
        Self {
            store: RecordStore::new(env.store_file()),
            profile: ProfileSync::new(env.clone()),
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// The startup file aliases are mirrored into.
    pub fn profile_file(&self) -> PathBuf {
        self.profile.profile_file()
    }

    /// Create an alias, or replace the one with the same name.
    pub fn create(
        &self,
        command: &str,
        alias: &str,
        options: AliasOptions,
    ) -> Result<CreateOutcome> {
        let record = AliasRecord::new(command, alias, options);
        record.validate()?;

        let replaced = self.store.upsert(record.clone())?;
        tracing::debug!(
            "{} alias '{}' -> `{}`",
            if replaced { "Updated" } else { "Created" },
            record.alias,
            record.command_line()
        );

        let profile_file = self.profile.append_alias_line(&record)?;
        Ok(CreateOutcome {
            replaced,
            profile_file,
        })
    }

    /// Remove an alias. Removing an unknown alias is not an error.
    pub fn remove(&self, alias: &str) -> Result<RemoveOutcome> {
        if alias.is_empty() {
            return Err(DoualError::InvalidAlias {
                alias: String::new(),
                reason: "name must not be empty".to_string(),
            });
        }

        if self.store.find(alias)?.is_none() {
            tracing::debug!("Alias '{}' not stored, nothing to remove", alias);
            return Ok(RemoveOutcome::NotFound);
        }

        self.store.remove(alias)?;
        let profile_file = self.profile.remove_alias_line(alias)?;
        Ok(RemoveOutcome::Removed { profile_file })
    }

    /// All stored aliases in creation order.
    pub fn list(&self) -> Result<Vec<AliasRecord>> {
        self.store.load()
    }

    /// Look up a stored alias.
    pub fn get(&self, alias: &str) -> Result<AliasRecord> {
        self.store
            .find(alias)?
            .ok_or_else(|| DoualError::AliasNotFound {
                alias: alias.to_string(),
            })
    }

    /// The command line that running `alias` with `extra_args` would execute.
    ///
    /// Extra arguments are shell-quoted and appended after the stored ones.
    pub fn resolve(&self, alias: &str, extra_args: &[String]) -> Result<String> {
        let record = self.get(alias)?;
        let mut line = record.command_line();
        if !extra_args.is_empty() {
            line.push(' ');
            line.push_str(&shell_words::join(extra_args));
        }
        Ok(line)
    }

    /// Run an alias with inherited standard streams and wait for it.
    pub fn execute(&self, alias: &str, extra_args: &[String]) -> Result<CommandResult> {
        let line = self.resolve(alias, extra_args)?;
        tracing::debug!("Executing alias '{}': `{}`", alias, line);
        execute_inherited(&line)
    }
}
