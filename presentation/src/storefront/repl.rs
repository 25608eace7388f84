//! REPL (Read-Eval-Print Loop) for the storefront

use super::card::{CardIntent, render_add_notice, render_catalog};
use super::transcript::{render_message, render_transcript};
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::ThinkingSpinner;
use concierge_application::{ChatController, Storefront};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// A line the shopper typed, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Products,
    Card(CardIntent),
    Chef,
    Close,
    Transcript,
    Help,
    Quit,
    Unknown(String),
    /// Anything that is not a slash command goes to the chef
    Ask(String),
}

impl ReplCommand {
    /// Classify a line. Returns `None` for blank input.
    ///
    /// Questions keep the line exactly as typed; trimming only classifies.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if !trimmed.starts_with('/') {
            return Some(ReplCommand::Ask(line.to_string()));
        }

        let (command, argument) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if let Some(intent) = CardIntent::parse(command, argument) {
            return Some(ReplCommand::Card(intent));
        }

        Some(match command {
            "/products" | "/catalog" => ReplCommand::Products,
            "/chef" | "/ask" => ReplCommand::Chef,
            "/close" => ReplCommand::Close,
            "/transcript" | "/t" => ReplCommand::Transcript,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}

/// Interactive storefront
pub struct StorefrontRepl {
    storefront: Storefront,
    config: ReplConfig,
}

impl StorefrontRepl {
    pub fn new(storefront: Storefront, config: ReplConfig) -> Self {
        Self { storefront, config }
    }

    pub fn storefront(&self) -> &Storefront {
        &self.storefront
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::banner());
        println!("{}", render_catalog(self.storefront.catalog()));
        Self::print_help();

        loop {
            let prompt = if self.storefront.is_chat_visible() {
                "chef> "
            } else {
                "shop> "
            };

            match rl.readline(prompt) {
                Ok(line) => {
                    let Some(command) = ReplCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    if self.dispatch(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Até logo!");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::error(&format!("{:?}", err)));
                    break;
                }
            }
        }

        if let Some(path) = &self.config.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Execute one command. Returns true if the REPL should exit.
    pub async fn dispatch(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Até logo!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Products => println!("{}", render_catalog(self.storefront.catalog())),
            ReplCommand::Card(intent) => self.handle_card(intent),
            ReplCommand::Chef => {
                let chat = self.storefront.ask_the_chef();
                Self::print_chat(chat);
            }
            ReplCommand::Close => {
                self.storefront.close_chat();
                println!(
                    "{}",
                    ConsoleFormatter::notice("Chat closed. Type /chef to pick up where you left off.")
                );
            }
            ReplCommand::Transcript => match self.storefront.chat() {
                Some(chat) => println!("{}", render_transcript(chat.transcript())),
                None => println!("{}", ConsoleFormatter::notice("No conversation yet.")),
            },
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
            ReplCommand::Ask(question) => {
                if let Some(reply) = self.ask(&question).await {
                    println!("\n{}\n", reply);
                }
            }
        }
        false
    }

    /// Send a question to the chef, opening the chat if it is hidden.
    ///
    /// Returns the rendered reply, or `None` when the question was not
    /// accepted.
    pub async fn ask(&mut self, question: &str) -> Option<String> {
        if !self.storefront.is_chat_visible() {
            let chat = self.storefront.ask_the_chef();
            Self::print_chat(chat);
        }

        let chat = self.storefront.chat_mut()?;
        chat.update_input(question);
        if chat.submit().is_none() {
            debug!("Question not accepted");
            return None;
        }

        let spinner = ThinkingSpinner::start(self.config.show_progress);
        let reply = chat.resolve().await.map(render_message);
        spinner.finish();
        reply
    }

    fn handle_card(&mut self, intent: CardIntent) {
        if intent.reference().is_empty() {
            println!(
                "{}",
                ConsoleFormatter::error("Which product? Give its number, e.g. /pairing 1")
            );
            return;
        }

        match intent {
            CardIntent::AskPairing(reference) => {
                match self.storefront.ask_about_pairing_by_ref(&reference) {
                    Ok(chat) => Self::print_chat(chat),
                    Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
                }
            }
            CardIntent::Add(reference) => match self.storefront.add_to_cart(&reference) {
                Ok(product) => println!("{}", render_add_notice(product)),
                Err(e) => println!("{}", ConsoleFormatter::error(&e.to_string())),
            },
        }
    }

    fn print_chat(chat: &ChatController) {
        println!(
            "{}",
            ConsoleFormatter::chat_header(chat.active_context().map(|p| p.name()))
        );
        println!("{}\n", render_transcript(chat.transcript()));
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /products        - Show the catalog");
        println!("  /pairing <n>     - Ask the chef about product n");
        println!("  /add <n>         - Add product n to your basket");
        println!("  /chef            - Open the chat");
        println!("  /close           - Hide the chat (the conversation is kept)");
        println!("  /transcript      - Show the conversation so far");
        println!("  /help            - Show this help");
        println!("  /quit            - Leave the shop");
        println!();
        println!("Anything else you type is sent to the chef.");
        println!();
    }
}
