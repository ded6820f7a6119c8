//! Line commands for the interactive chat shell.

use crate::assistant::{ChatReply, Role};
use crate::chat::ReplySource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// A message for the assistant
    Say(String),
    /// `/role <name>`
    SwitchRole(Role),
    /// `/reset`
    Reset,
    /// `/quit` or `/exit`
    Quit,
    /// `/help`
    Usage,
    /// Blank line
    Nothing,
}

pub const USAGE: &str = "Commands: /role <visitor|user|museumAdmin|admin|superAdmin>, /reset, /help, /quit";

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ShellCommand::Nothing;
        }

        let Some(command) = line.strip_prefix('/') else {
            return ShellCommand::Say(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or_default() {
            "role" => match parts.next() {
                Some(name) => ShellCommand::SwitchRole(Role::parse(name)),
                None => ShellCommand::Usage,
            },
            "reset" => ShellCommand::Reset,
            "quit" | "exit" => ShellCommand::Quit,
            "help" => ShellCommand::Usage,
            // Unknown slash commands are just text.
            _ => ShellCommand::Say(line.to_string()),
        }
    }
}

/// Renders a reply for the terminal.
pub fn render_reply(reply: &ChatReply, source: ReplySource) -> String {
    let tag = match source {
        ReplySource::Remote => "assistant",
        ReplySource::Local => "assistant (offline)",
    };

    let mut out = format!("{}: {}\n", tag, reply.text);
    for suggestion in &reply.suggestions {
        out.push_str(&format!("  > {}\n", suggestion));
    }
    for reference in &reply.references {
        out.push_str(&format!("  [ref] {}\n", reference.display_line()));
    }
    out
}
