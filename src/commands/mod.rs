//! Executable commands.
//!
//! Each command runs against a [`RecordRepository`] and either reports
//! feedback for the user or fails with a [`CommandError`](crate::error::CommandError).
//! Nothing is changed when a command fails.

mod add;
mod delete;
mod edit;
mod find;
mod import;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{create_edited_record, EditCommand, EditRecordDescriptor, TagUpdate};
pub use find::FindCommand;
pub use import::ImportCommand;

use crate::error::CommandResult;
use crate::models::RecordPredicate;
use crate::repositories::RecordRepository;

/// What a successful command reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    /// The displayed record list should be shown after this command.
    pub show_list: bool,
    /// The application should stop.
    pub exit: bool,
}

impl CommandOutcome {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_list: false,
            exit: false,
        }
    }

    pub fn listing(feedback: impl Into<String>) -> Self {
        Self {
            show_list: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// A parsed user command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    List,
    Find(FindCommand),
    Import(ImportCommand),
    Exit,
}

impl Command {
    pub const LIST_COMMAND_WORD: &'static str = "list";
    pub const EXIT_COMMAND_WORD: &'static str = "exit";

    pub const MESSAGE_HELP: &'static str = "Available commands: add, edit, delete, list, find, \
        major, import, exit";

    /// Run the command against the repository.
    pub fn execute(&self, repository: &mut dyn RecordRepository) -> CommandResult<CommandOutcome> {
        match self {
            Self::Add(command) => command.execute(repository),
            Self::Edit(command) => command.execute(repository),
            Self::Delete(command) => command.execute(repository),
            Self::List => {
                repository.update_filter(RecordPredicate::ShowAll);
                Ok(CommandOutcome::listing("Listed all records"))
            }
            Self::Find(command) => command.execute(repository),
            Self::Import(command) => command.execute(repository),
            Self::Exit => Ok(CommandOutcome::exit("Exiting record manager as requested ...")),
        }
    }

    /// Returns true if a successful run changes the record book.
    pub fn modifies_records(&self) -> bool {
        matches!(
            self,
            Self::Add(_) | Self::Edit(_) | Self::Delete(_) | Self::Import(_)
        )
    }
}
