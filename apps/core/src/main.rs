// EthioHeritage360 chat assistant entry point
// Interactive shell over the remote-first chat service

mod assistant;
mod chat;
mod config;
mod error;
mod shell;
mod telemetry;

#[cfg(test)]
mod tests;

use anyhow::Context;
use assistant::{ConversationContext, HistoryMessage};
use chat::ChatService;
use config::AppConfig;
use shell::{render_reply, ShellCommand, USAGE};
use std::io::Write;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::info;

fn prompt(context: &ConversationContext) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "[{}] you: ", context.role)?;
    stdout.flush()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    telemetry::init_tracing(config.log_format)?;

    let service = ChatService::from_config(&config);
    let mut context = ConversationContext::new(config.default_role);

    info!(
        role = %context.role,
        remote = service.has_backend(),
        "EthioHeritage360 assistant ready"
    );
    println!("EthioHeritage360 assistant. {}", USAGE);

    let mut lines = BufReader::new(io::stdin()).lines();
    prompt(&context)?;

    while let Some(line) = lines.next_line().await? {
        match ShellCommand::parse(&line) {
            ShellCommand::Say(text) => {
                let outcome = service.handle(&text, &context).await;
                print!("{}", render_reply(&outcome.reply, outcome.source));
                context.push(HistoryMessage::user(text));
                context.push(HistoryMessage::bot(outcome.reply.text));
            }
            ShellCommand::SwitchRole(role) => {
                context.role = role;
                println!("Role set to {}", role);
            }
            ShellCommand::Reset if context.is_empty() => println!("Nothing to clear"),
            ShellCommand::Reset => {
                context.clear();
                println!("Conversation cleared");
            }
            ShellCommand::Usage => println!("{}", USAGE),
            ShellCommand::Quit => break,
            ShellCommand::Nothing => {}
        }
        prompt(&context)?;
    }

    info!("Assistant stopped");
    Ok(())
}
