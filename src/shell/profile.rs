//! Mirroring aliases into the shell startup file.
//!
//! Each stored alias has exactly one line of the form
//! `alias <name>='<command line>'` in the startup file of the detected
//! shell. Lines are matched by the literal prefix `alias <name>=` at the
//! start of a line, so removing `foo` never touches `foobar`. Matching works
//! on raw bytes: the rest of the file is never decoded, so startup files in
//! any encoding pass through unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::Environment;
use crate::error::{DoualError, Result};
use crate::store::file::write_atomic;
use crate::store::AliasRecord;

use super::ShellType;

/// Keeps native alias lines in the shell startup file in sync with the store.
#[derive(Debug, Clone)]
pub struct ProfileSync {
    env: Environment,
}

impl ProfileSync {
    /// Create a synchronizer for the given environment.
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// The startup file that the next operation will target.
    pub fn profile_file(&self) -> PathBuf {
        self.env.profile_file()
    }

    /// Write the alias line for `record`, replacing any earlier line for
    /// the same name. Returns the startup file path.
    ///
    /// Existing content is kept. The parent directory is never created.
    pub fn append_alias_line(&self, record: &AliasRecord) -> Result<PathBuf> {
        let path = self.profile_file();
        let line = alias_line(record, self.env.shell_type());
        let target = resolve_link(&path);

        let existing = read_profile(&target).map_err(|e| sync_error(&path, e))?;
        let (mut content, dropped) =
            strip_alias_lines(existing.as_deref().unwrap_or_default(), &record.alias);
        if !content.is_empty() && !content.ends_with(b"\n") {
            content.push(b'\n');
        }
        content.extend_from_slice(line.as_bytes());
        content.push(b'\n');

        write_atomic(&target, &content).map_err(|e| sync_error(&path, e))?;
        tracing::debug!(
            "Wrote `{}` to {} (replaced {} line(s))",
            line,
            path.display(),
            dropped
        );
        Ok(path)
    }

    /// Remove every line for `alias` from the startup file. Returns the
    /// startup file path.
    ///
    /// A missing startup file has nothing to remove and is left missing.
    pub fn remove_alias_line(&self, alias: &str) -> Result<PathBuf> {
        let path = self.profile_file();
        let target = resolve_link(&path);

        let Some(existing) = read_profile(&target).map_err(|e| sync_error(&path, e))? else {
            tracing::debug!("No startup file at {}, nothing to remove", path.display());
            return Ok(path);
        };

        let (content, dropped) = strip_alias_lines(&existing, alias);
        if dropped > 0 {
            write_atomic(&target, &content).map_err(|e| sync_error(&path, e))?;
        }
        tracing::debug!(
            "Removed {} line(s) for '{}' from {}",
            dropped,
            alias,
            path.display()
        );
        Ok(path)
    }
}

/// Build the native alias line for a record, without a line terminator.
pub fn alias_line(record: &AliasRecord, shell: ShellType) -> String {
    format!(
        "alias {}={}",
        record.alias,
        shell.single_quote(&record.command_line())
    )
}

/// Whether `line` defines `alias` in the form doual writes.
pub fn is_alias_line(line: &[u8], alias: &str) -> bool {
    line.strip_prefix(b"alias ".as_slice())
        .and_then(|rest| rest.strip_prefix(alias.as_bytes()))
        .is_some_and(|rest| rest.starts_with(b"="))
}

/// Drop the lines defining `alias`, keeping everything else byte for byte.
///
/// Returns the remaining content and the number of lines dropped.
pub fn strip_alias_lines(content: &[u8], alias: &str) -> (Vec<u8>, usize) {
    let mut kept = Vec::with_capacity(content.len());
    let mut dropped = 0;

    for line in content.split_inclusive(|b| *b == b'\n') {
        if is_alias_line(line, alias) {
            dropped += 1;
        } else {
            kept.extend_from_slice(line);
        }
    }

    (kept, dropped)
}

fn read_profile(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Follow a symlinked startup file so the rename replaces the real file.
fn resolve_link(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn sync_error(path: &Path, e: io::Error) -> DoualError {
    DoualError::ProfileSync {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AliasOptions;
    use tempfile::TempDir;

    fn sync_for(temp: &TempDir, shell: &str) -> ProfileSync {
        ProfileSync::new(Environment::new(temp.path(), shell))
    }

    fn record(command: &str, alias: &str) -> AliasRecord {
        AliasRecord::new(command, alias, AliasOptions::default())
    }

    #[test]
    fn alias_line_formats() {
        let plain = record("ls", "ll");
        assert_eq!(alias_line(&plain, ShellType::Bash), "alias ll='ls'");

        let full = AliasRecord::new(
            "apt-get",
            "up",
            AliasOptions::new(Some("update".into()), true),
        );
        assert_eq!(
            alias_line(&full, ShellType::Zsh),
            "alias up='sudo apt-get update'"
        );
    }

    #[test]
    fn is_alias_line_is_anchored() {
        assert!(is_alias_line(b"alias foo='ls'", "foo"));
        assert!(is_alias_line(b"alias foo=ls", "foo"));
        assert!(!is_alias_line(b"alias foobar='ls'", "foo"));
        assert!(!is_alias_line(b"alias fo='ls'", "foo"));
        assert!(!is_alias_line(b"# alias foo='ls'", "foo"));
        assert!(!is_alias_line(b"  alias foo='ls'", "foo"));
        assert!(!is_alias_line(b"export foo=1", "foo"));
    }

    #[test]
    fn strip_keeps_other_content_exactly() {
        let content = b"export A=1\nalias foo='ls'\nalias foobar='ls -a'\n# end";
        let (kept, dropped) = strip_alias_lines(content, "foo");
        assert_eq!(dropped, 1);
        assert_eq!(kept, b"export A=1\nalias foobar='ls -a'\n# end");
    }

    #[test]
    fn strip_handles_last_line_without_newline() {
        let (kept, dropped) = strip_alias_lines(b"a\nalias foo='x'", "foo");
        assert_eq!(dropped, 1);
        assert_eq!(kept, b"a\n");
    }

    #[test]
    fn strip_handles_crlf() {
        let (kept, dropped) = strip_alias_lines(b"alias foo='x'\r\nb\r\n", "foo");
        assert_eq!(dropped, 1);
        assert_eq!(kept, b"b\r\n");
    }

    #[test]
    fn append_creates_file_when_missing() {
        let temp = TempDir::new().unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        let path = sync.append_alias_line(&record("ls", "ll")).unwrap();

        assert_eq!(path, temp.path().join(".bashrc"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "alias ll='ls'\n");
    }

    #[test]
    fn append_keeps_existing_content() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".zshrc");
        fs::write(&rc, "export PATH=$HOME/bin:$PATH").unwrap();
        let sync = sync_for(&temp, "/usr/bin/zsh");

        sync.append_alias_line(&record("ls", "ll")).unwrap();

        assert_eq!(
            fs::read_to_string(&rc).unwrap(),
            "export PATH=$HOME/bin:$PATH\nalias ll='ls'\n"
        );
    }

    #[test]
    fn append_twice_leaves_single_line() {
        let temp = TempDir::new().unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        sync.append_alias_line(&record("ls", "ll")).unwrap();
        sync.append_alias_line(&record("git status", "gs")).unwrap();
        let path = sync.append_alias_line(&record("ls -la", "ll")).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "alias gs='git status'\nalias ll='ls -la'\n");
    }

    #[test]
    fn append_and_remove_keep_non_utf8_content() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, b"# caf\xe9 latin-1 comment\nexport A=1\n").unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        sync.append_alias_line(&record("ls", "ll")).unwrap();
        assert_eq!(
            fs::read(&rc).unwrap(),
            b"# caf\xe9 latin-1 comment\nexport A=1\nalias ll='ls'\n"
        );

        sync.remove_alias_line("ll").unwrap();
        assert_eq!(
            fs::read(&rc).unwrap(),
            b"# caf\xe9 latin-1 comment\nexport A=1\n"
        );
    }

    #[test]
    fn append_fails_when_parent_dir_missing() {
        let temp = TempDir::new().unwrap();
        let sync = sync_for(&temp, "/usr/bin/fish");

        let err = sync.append_alias_line(&record("ls", "ll")).unwrap_err();
        assert!(matches!(err, DoualError::ProfileSync { .. }));
        assert!(!temp.path().join(".config").exists());
    }

    #[test]
    fn append_fish_when_config_dir_exists() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".config/fish")).unwrap();
        let sync = sync_for(&temp, "/usr/bin/fish");

        let path = sync.append_alias_line(&record("echo 'hi'", "hi")).unwrap();

        assert_eq!(path, temp.path().join(".config/fish/config.fish"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "alias hi='echo \\'hi\\''\n"
        );
    }

    #[test]
    fn remove_only_drops_exact_alias() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, "alias foo='ls'\nalias foobar='ls -a'\nalias foo='dup'\n").unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        sync.remove_alias_line("foo").unwrap();

        assert_eq!(fs::read_to_string(&rc).unwrap(), "alias foobar='ls -a'\n");
    }

    #[test]
    fn remove_without_match_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let rc = temp.path().join(".bashrc");
        fs::write(&rc, "alias foobar='ls -a'").unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        sync.remove_alias_line("foo").unwrap();

        assert_eq!(fs::read_to_string(&rc).unwrap(), "alias foobar='ls -a'");
    }

    #[test]
    fn remove_with_missing_file_is_noop() {
        let temp = TempDir::new().unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        let path = sync.remove_alias_line("foo").unwrap();
        assert!(!path.exists());
    }

    #[test]
    #[cfg(unix)]
    fn append_writes_through_symlink() {
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("dotfiles-bashrc");
        fs::write(&real, "# managed\n").unwrap();
        std::os::unix::fs::symlink(&real, temp.path().join(".bashrc")).unwrap();
        let sync = sync_for(&temp, "/bin/bash");

        sync.append_alias_line(&record("ls", "ll")).unwrap();

        let link = temp.path().join(".bashrc");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "# managed\nalias ll='ls'\n");
    }
}
