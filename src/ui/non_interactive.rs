//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::Result;

use super::theme::DoualTheme;
use super::{parse_answer, OutputMode, Prompt, UserInterface};

/// Environment variable prefix for answering prompts without a terminal.
pub const PROMPT_ENV_PREFIX: &str = "DAL_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `DAL_PROMPT_<KEY>` environment variables,
/// falling back to the prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    theme: DoualTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            theme: DoualTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_info(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.format_warning(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_hint(hint));
        }
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        let answer = self
            .env_overrides
            .get(&env_key)
            .and_then(|value| parse_answer(value))
            .unwrap_or(prompt.default);

        tracing::debug!(
            "Answered '{}' with {} (non-interactive)",
            prompt.key,
            answer
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_uses_default_without_override() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        let yes = Prompt::confirm("confirm_remove", "Remove?", true);
        let no = Prompt::confirm("confirm_remove", "Remove?", false);

        assert!(ui.confirm(&yes).unwrap());
        assert!(!ui.confirm(&no).unwrap());
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("DAL_PROMPT_CONFIRM_REMOVE".to_string(), "no".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let prompt = Prompt::confirm("confirm_remove", "Remove?", true);
        assert!(!ui.confirm(&prompt).unwrap());
    }

    #[test]
    fn confirm_ignores_unparseable_override() {
        let mut overrides = HashMap::new();
        overrides.insert("DAL_PROMPT_CONFIRM_REMOVE".to_string(), "perhaps".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);

        let prompt = Prompt::confirm("confirm_remove", "Remove?", true);
        assert!(ui.confirm(&prompt).unwrap());
    }
}
