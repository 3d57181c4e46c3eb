//! Alias record definition and validation.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::LazyLock;

use crate::error::{DoualError, Result};

/// Characters allowed in an alias name.
static ALIAS_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.:@%+,-]*$").expect("ALIAS_NAME_REGEX must compile")
});

/// Words the CLI already uses; an alias with one of these names could never be run.
pub const RESERVED_NAMES: &[&str] = &["create", "remove", "list", "completions", "help"];

/// A stored alias: a shortcut name for a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Base shell command.
    pub command: String,

    /// Shortcut name, unique within the store.
    pub alias: String,

    /// Fixed arguments and elevation.
    #[serde(default)]
    pub options: AliasOptions,
}

/// Options attached to an alias.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasOptions {
    /// Arguments appended after the command.
    #[serde(
        default,
        alias = "InitialArgs",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_as_none"
    )]
    pub initial_args: Option<String>,

    /// Prefix the command with `sudo`.
    #[serde(default, alias = "RunAsRoot")]
    pub run_as_root: bool,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

impl AliasOptions {
    /// Create options, treating blank arguments as absent.
    pub fn new(initial_args: Option<String>, run_as_root: bool) -> Self {
        Self {
            initial_args: initial_args.filter(|a| !a.trim().is_empty()),
            run_as_root,
        }
    }
}

impl AliasRecord {
    /// Create a record.
    pub fn new(
        command: impl Into<String>,
        alias: impl Into<String>,
        options: AliasOptions,
    ) -> Self {
        Self {
            command: command.into(),
            alias: alias.into(),
            options,
        }
    }

    /// The full command line: `[sudo ]<command>[ <initialArgs>]`.
    pub fn command_line(&self) -> String {
        let mut line = String::new();
        if self.options.run_as_root {
            line.push_str("sudo ");
        }
        line.push_str(&self.command);
        if let Some(args) = &self.options.initial_args {
            line.push(' ');
            line.push_str(args);
        }
        line
    }

    /// Check that the command is non-empty and the alias name is usable.
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(DoualError::EmptyCommand);
        }
        validate_alias_name(&self.alias)
    }
}

/// Check that `name` can be used as a shell alias and run as `dal <name>`.
pub fn validate_alias_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| DoualError::InvalidAlias {
        alias: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name must not be empty"));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(invalid("name is reserved by dal"));
    }
    if !ALIAS_NAME_REGEX.is_match(name) {
        return Err(invalid(
            "use letters, digits, and _ . : @ % + , - (not starting with punctuation)",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_plain() {
        let record = AliasRecord::new("ls", "ll", AliasOptions::default());
        assert_eq!(record.command_line(), "ls");
    }

    #[test]
    fn command_line_with_root_and_args() {
        let record = AliasRecord::new(
            "apt-get",
            "up",
            AliasOptions::new(Some("update -y".into()), true),
        );
        assert_eq!(record.command_line(), "sudo apt-get update -y");
    }

    #[test]
    fn command_line_root_only() {
        let record = AliasRecord::new("apt-get update", "up", AliasOptions::new(None, true));
        assert_eq!(record.command_line(), "sudo apt-get update");
    }

    #[test]
    fn blank_args_are_dropped() {
        let options = AliasOptions::new(Some("  ".into()), false);
        assert_eq!(options.initial_args, None);
    }

    #[test]
    fn serializes_camel_case_and_skips_missing_args() {
        let record = AliasRecord::new("ls", "ll", AliasOptions::default());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"command":"ls","alias":"ll","options":{"runAsRoot":false}}"#
        );

        let with_args = AliasRecord::new("ls", "la", AliasOptions::new(Some("-a".into()), true));
        let json = serde_json::to_string(&with_args).unwrap();
        assert!(json.contains(r#""initialArgs":"-a""#));
        assert!(json.contains(r#""runAsRoot":true"#));
    }

    #[test]
    fn reads_legacy_option_keys() {
        let json = r#"{"command":"apt","alias":"up","options":{"InitialArgs":"","RunAsRoot":true}}"#;
        let record: AliasRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.options.initial_args, None);
        assert!(record.options.run_as_root);
    }

    #[test]
    fn missing_options_default() {
        let record: AliasRecord = serde_json::from_str(r#"{"command":"ls","alias":"ll"}"#).unwrap();
        assert_eq!(record.options, AliasOptions::default());
    }

    #[test]
    fn validate_accepts_common_names() {
        for name in ["ll", "g", "git-st", "k8s.get", "up_2"] {
            assert!(validate_alias_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn validate_rejects_bad_names() {
        for name in ["", "two words", "a=b", "it's", "-flag", "list", "create"] {
            assert!(
                matches!(
                    validate_alias_name(name),
                    Err(DoualError::InvalidAlias { .. })
                ),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_empty_command() {
        let record = AliasRecord::new("   ", "ll", AliasOptions::default());
        assert!(matches!(record.validate(), Err(DoualError::EmptyCommand)));
    }
}
