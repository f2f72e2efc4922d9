//! Interactive itinerary chat
//!
//! Follow-up conversation scoped to one generated itinerary. Every turn is
//! grounded in the itinerary text only; prior turns are displayed but never
//! resent.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::domain::Speaker;
use crate::gateway::Gateway;
use crate::session::Session;

/// Interactive chat session over a planned itinerary
pub struct ChatRepl<'a> {
    gateway: &'a Gateway,
    session: &'a mut Session,
}

enum SlashResult {
    Continue,
    Quit,
}

impl<'a> ChatRepl<'a> {
    pub fn new(gateway: &'a Gateway, session: &'a mut Session) -> Self {
        Self { gateway, session }
    }

    /// Run the chat loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let Some(itinerary) = self.session.itinerary() else {
            eyre::bail!("No itinerary in this session; plan a trip first");
        };
        let context = itinerary.as_markdown().to_string();

        self.print_welcome();

        let mut rl =
            DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let readline = rl.readline(&format!("{} ", ">".bright_green()));

            match readline {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(input);

                    if input.starts_with('/') {
                        match Self::handle_slash_command(input) {
                            SlashResult::Continue => continue,
                            SlashResult::Quit => break,
                        }
                    } else {
                        self.process_turn(input, &context).await;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// One exchange: append the user turn optimistically, then the assistant
    /// reply on success. Errors are printed and the loop stays alive.
    async fn process_turn(&mut self, input: &str, context: &str) {
        if let Some(chat) = self.session.chat_mut() {
            chat.push_user(input);
        }

        match self.gateway.send_chat(input, context).await {
            Ok(reply) => {
                println!("{} {}", "Travel Assistant:".bright_cyan(), reply);
                if let Some(chat) = self.session.chat_mut() {
                    chat.push_assistant(reply);
                }
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".bright_red(), e);
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "Wayfarer Travel Chat".bright_cyan().bold());
        for turn in self.session.chat().map(|c| c.turns()).unwrap_or_default() {
            if turn.speaker == Speaker::Assistant {
                println!("{} {}", "Travel Assistant:".bright_cyan(), turn.text);
            }
        }
        println!("Type {} to quit", "/quit".yellow());
        println!();
    }

    fn handle_slash_command(input: &str) -> SlashResult {
        let cmd = input.split_whitespace().next().unwrap_or("");

        match cmd {
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} to quit", "/quit".yellow());
                SlashResult::Continue
            }
        }
    }
}
