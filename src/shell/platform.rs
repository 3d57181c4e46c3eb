//! Shell detection.

/// Shells whose startup file doual knows how to update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    /// Detect the shell type from a shell identifier such as `$SHELL`.
    ///
    /// Checks for `zsh`, then `fish`; anything else is treated as bash.
    pub fn detect(shell: &str) -> Self {
        let shell = shell.to_lowercase();
        if shell.contains("zsh") {
            ShellType::Zsh
        } else if shell.contains("fish") {
            ShellType::Fish
        } else {
            ShellType::Bash
        }
    }

    /// Startup file path, relative to the home directory.
    pub fn startup_file(&self) -> &'static str {
        match self {
            ShellType::Bash => ".bashrc",
            ShellType::Zsh => ".zshrc",
            ShellType::Fish => ".config/fish/config.fish",
        }
    }

    /// Display name of the shell.
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }

    /// Quote `value` as one single-quoted word for this shell.
    pub fn single_quote(&self, value: &str) -> String {
        let escaped = match self {
            ShellType::Bash | ShellType::Zsh => value.replace('\'', r"'\''"),
            ShellType::Fish => value.replace('\\', r"\\").replace('\'', r"\'"),
        };
        format!("'{}'", escaped)
    }
}

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_type_from_identifier() {
        assert_eq!(ShellType::detect("/bin/bash"), ShellType::Bash);
        assert_eq!(ShellType::detect("/usr/bin/zsh"), ShellType::Zsh);
        assert_eq!(ShellType::detect("/opt/homebrew/bin/fish"), ShellType::Fish);
        assert_eq!(ShellType::detect("/bin/sh"), ShellType::Bash);
        assert_eq!(ShellType::detect(""), ShellType::Bash);
    }

    #[test]
    fn zsh_wins_over_fish() {
        assert_eq!(ShellType::detect("/home/fish/bin/zsh"), ShellType::Zsh);
    }

    #[test]
    fn startup_files() {
        assert_eq!(ShellType::Bash.startup_file(), ".bashrc");
        assert_eq!(ShellType::Zsh.startup_file(), ".zshrc");
        assert_eq!(ShellType::Fish.startup_file(), ".config/fish/config.fish");
    }

    #[test]
    fn single_quote_plain_value() {
        assert_eq!(ShellType::Bash.single_quote("ls -la"), "'ls -la'");
        assert_eq!(ShellType::Fish.single_quote("ls -la"), "'ls -la'");
    }

    #[test]
    fn single_quote_escapes_quotes_per_shell() {
        assert_eq!(
            ShellType::Bash.single_quote("echo 'hi'"),
            r"'echo '\''hi'\'''"
        );
        assert_eq!(ShellType::Fish.single_quote("echo 'hi'"), r"'echo \'hi\''");
    }

    #[test]
    fn is_ci_detects_environment() {
        // Just ensure function doesn't panic
        let _ = is_ci();
    }
}
