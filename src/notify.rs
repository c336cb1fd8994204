//! Desktop notifications after a sweep.
//!
//! Notifications are best effort: every failure (unparseable command,
//! missing program, non-zero exit) is reported as `false` and never
//! interrupts the run.

use crate::sweep::AggregatedResult;
use std::process::{Command, Stdio};

/// Title used for sweep notifications.
pub const NOTIFICATION_TITLE: &str = "desksweep";

/// Sends desktop notifications through an external program.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    /// Argv template; `{title}` and `{message}` are substituted per argument.
    command: Option<String>,
}

impl Notifier {
    /// Notifier using `command` when set, or the platform's default program.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    /// Send the summary of a sweep.
    pub fn notify(&self, result: &AggregatedResult) -> bool {
        let message = build_message(result.trashed_count(), result.error_count());
        self.send(NOTIFICATION_TITLE, &message)
    }

    /// Send one notification. Returns whether the program ran and exited 0.
    pub fn send(&self, title: &str, message: &str) -> bool {
        let Some(args) = self.argv(title, message) else {
            return false;
        };
        let Some((program, rest)) = args.split_first() else {
            return false;
        };

        Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    fn argv(&self, title: &str, message: &str) -> Option<Vec<String>> {
        match &self.command {
            Some(template) => {
                // Substitute after splitting so a message with spaces stays one argument.
                let args = shell_words::split(template).ok()?;
                Some(
                    args.into_iter()
                        .map(|arg| arg.replace("{title}", title).replace("{message}", message))
                        .collect(),
                )
            }
            None => Some(default_argv(title, message)),
        }
    }
}

/// Notification body for a sweep that trashed `trashed` entries with `errors` failures.
pub fn build_message(trashed: usize, errors: usize) -> String {
    let mut message = if trashed == 0 {
        "nothing to clean".to_string()
    } else {
        format!("cleaned {} files", trashed)
    };
    if errors > 0 {
        message.push_str(&format!(", {} errors", errors));
    }
    message
}

fn default_argv(title: &str, message: &str) -> Vec<String> {
    if cfg!(target_os = "macos") {
        let script = format!(
            "display notification {} with title {}",
            applescript_string(message),
            applescript_string(title)
        );
        vec!["osascript".to_string(), "-e".to_string(), script]
    } else {
        vec![
            "notify-send".to_string(),
            title.to_string(),
            message.to_string(),
        ]
    }
}

fn applescript_string(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
