//! Output mode selection and rendering.

mod render;

pub use render::Renderer;

/// Answers whether an output stream is attached to a live terminal.
pub trait TerminalProbe {
    fn is_interactive(&self) -> bool;
}

/// Probes the process's real stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProbe;

impl TerminalProbe for StdoutProbe {
    fn is_interactive(&self) -> bool {
        console::user_attended()
    }
}

/// Fixed answer, for tests and for callers that already know.
#[derive(Debug, Clone, Copy)]
pub struct FixedProbe(pub bool);

impl TerminalProbe for FixedProbe {
    fn is_interactive(&self) -> bool {
        self.0
    }
}

/// JSON whenever stdout is not a terminal, otherwise only when asked for.
pub const fn should_emit_json(json_flag: bool, pretty_flag: bool, interactive: bool) -> bool {
    !interactive || json_flag || pretty_flag
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text and key/value blocks
    Text,
    /// Structural JSON of the decoded result list
    Json {
        /// Indented multi-line output
        pretty: bool,
    },
}

impl OutputMode {
    /// Pick the output mode from the global flags and the terminal probe.
    pub fn select(json_flag: bool, pretty_flag: bool, probe: &impl TerminalProbe) -> Self {
        if should_emit_json(json_flag, pretty_flag, probe.is_interactive()) {
            Self::Json {
                pretty: pretty_flag,
            }
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piped_output_is_always_json() {
        for json in [false, true] {
            for pretty in [false, true] {
                assert!(should_emit_json(json, pretty, false));
            }
        }
    }

    #[test]
    fn test_terminal_output_follows_flags() {
        assert!(!should_emit_json(false, false, true));
        assert!(should_emit_json(true, false, true));
        assert!(should_emit_json(false, true, true));
        assert!(should_emit_json(true, true, true));
    }

    #[test]
    fn test_select_mode() {
        assert_eq!(OutputMode::select(false, false, &FixedProbe(true)), OutputMode::Text);
        assert_eq!(
            OutputMode::select(false, false, &FixedProbe(false)),
            OutputMode::Json { pretty: false }
        );
        assert_eq!(
            OutputMode::select(false, true, &FixedProbe(true)),
            OutputMode::Json { pretty: true }
        );
        assert_eq!(
            OutputMode::select(true, false, &FixedProbe(true)),
            OutputMode::Json { pretty: false }
        );
    }
}
