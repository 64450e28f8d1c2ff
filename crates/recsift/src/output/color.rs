//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Error:     red     (failure message)
//!   - Muted:     dimmed  (separator lines)
//!   - Emphasis:  bold    (total line)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply dimmed style to text (for separators).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for the total line).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control::set_override;
    use std::sync::{Mutex, MutexGuard};

    static GLOBAL_STATE_MUTEX: Mutex<()> = Mutex::new(());

    struct ColorGuard<'a> {
        _guard: MutexGuard<'a, ()>,
    }

    impl ColorGuard<'_> {
        fn new() -> Self {
            let guard = GLOBAL_STATE_MUTEX.lock().unwrap();
            set_override(true);
            Self { _guard: guard }
        }
    }

    impl Drop for ColorGuard<'_> {
        fn drop(&mut self) {
            colored::control::unset_override();
        }
    }

    fn with_colors_enabled<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ColorGuard::new();
        f()
    }

    fn config(use_colors: bool) -> OutputConfig {
        OutputConfig {
            use_colors,
            ..OutputConfig::default()
        }
    }

    #[test]
    fn helpers_add_ansi_codes_when_enabled() {
        with_colors_enabled(|| {
            let config = config(true);
            for styled in [
                error("failed", &config),
                dimmed("----", &config),
                bold("Total: 3", &config),
            ] {
                assert!(styled.contains("\x1b["), "expected ANSI codes in {styled:?}");
            }
        });
    }

    #[test]
    fn helpers_return_plain_text_when_disabled() {
        let config = config(false);
        assert_eq!(error("failed", &config), "failed");
        assert_eq!(dimmed("----", &config), "----");
        assert_eq!(bold("Total: 3", &config), "Total: 3");
    }
}
