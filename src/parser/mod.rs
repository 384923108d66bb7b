//! Turns a line of user input into a [`Command`].
//!
//! The first word picks the command; the rest is handed to that command's
//! parser. Record fields are introduced by prefixes such as `name/` and `p/`,
//! see [`cli_syntax`].

mod add;
pub mod cli_syntax;
mod edit;
pub mod tokenizer;
pub mod util;

pub use add::parse_add;
pub use edit::parse_edit;
pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::commands::{
    AddCommand, Command, DeleteCommand, EditCommand, FindCommand, ImportCommand,
};
use crate::error::{ParseError, ParseResult};
use crate::models::RecordPredicate;
use tracing::debug;

/// Parse one line of user input.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    let (word, args) = match input.find(char::is_whitespace) {
        Some(split) => input.split_at(split),
        None => (input, ""),
    };

    if word.is_empty() {
        return Err(ParseError::InvalidCommandFormat(Command::MESSAGE_HELP.to_string()));
    }

    debug!("Parsing command word {:?}", word);

    match word {
        AddCommand::COMMAND_WORD => parse_add(args).map(Command::Add),
        EditCommand::COMMAND_WORD => parse_edit(args).map(Command::Edit),
        DeleteCommand::COMMAND_WORD => parse_delete(args).map(Command::Delete),
        Command::LIST_COMMAND_WORD => Ok(Command::List),
        FindCommand::COMMAND_WORD => parse_keywords(args, FindCommand::MESSAGE_USAGE)
            .map(|keywords| {
                Command::Find(FindCommand::new(RecordPredicate::NameContainsKeywords(keywords)))
            }),
        FindCommand::MAJOR_COMMAND_WORD => parse_keywords(args, FindCommand::MAJOR_MESSAGE_USAGE)
            .map(|keywords| {
                Command::Find(FindCommand::new(RecordPredicate::MajorContainsKeywords(keywords)))
            }),
        ImportCommand::COMMAND_WORD => parse_import(args).map(Command::Import),
        Command::EXIT_COMMAND_WORD => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    util::parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|_| ParseError::InvalidCommandFormat(DeleteCommand::MESSAGE_USAGE.to_string()))
}

fn parse_keywords(args: &str, usage: &str) -> ParseResult<Vec<String>> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat(usage.to_string()));
    }
    Ok(keywords)
}

fn parse_import(args: &str) -> ParseResult<ImportCommand> {
    let path = args.trim();
    if path.is_empty() {
        return Err(ParseError::InvalidCommandFormat(
            ImportCommand::MESSAGE_USAGE.to_string(),
        ));
    }
    Ok(ImportCommand::new(path))
}
