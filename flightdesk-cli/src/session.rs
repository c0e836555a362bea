//! The interactive session: main menu loop and shared prompt helpers.
//!
//! A [`Session`] owns the open database, the id allocators and the
//! prompter. Menu commands borrow it for the duration of one action.

use std::io::{BufRead, Write};

use flightdesk::entity::fields::TextRule;
use flightdesk::lookup::{find_by_id, find_by_name, rows_named};
use flightdesk::{
    Database, EntityKind, Error as LibError, ExecutionResult, IdAllocators, Logger, NameMatch,
    OperationPlan, OutputFormat, PlanExecutor, Prompter, QueryResult,
};

use crate::commands::MenuChoice;
use crate::error::CliError;

/// Rule for names typed at a lookup prompt.
const LOOKUP_NAME: TextRule = TextRule {
    field: "name",
    label: "The name",
    max_chars: 128,
    required: true,
};

/// A key typed at a record prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RecordKey {
    Id(i64),
    Name(String),
}

fn parse_record_key(answer: &str, entity: &str) -> Result<RecordKey, String> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(format!("Please re-enter. Enter a {entity} ID or name."));
    }
    match answer.parse::<i64>() {
        Ok(id) if id < 0 => Err(format!("Please re-enter. The {entity} ID cannot be negative.")),
        Ok(id) => Ok(RecordKey::Id(id)),
        Err(_) => Ok(RecordKey::Name(answer.to_string())),
    }
}

/// An open console session.
pub struct Session<R, W> {
    /// The open airline database.
    pub db: Database,
    /// Id allocators seeded from the database.
    pub ids: IdAllocators,
    /// Source of answers and sink for menu text.
    pub prompter: Prompter<R, W>,
    /// Format for lookups and reports.
    pub format: OutputFormat,
    /// Diagnostics go here, never to the prompter's output.
    pub logger: Logger,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session over `db` with allocators already seeded from it.
    pub fn new(
        db: Database,
        ids: IdAllocators,
        prompter: Prompter<R, W>,
        format: OutputFormat,
        logger: Logger,
    ) -> Self {
        Self {
            db,
            ids,
            prompter,
            format,
            logger,
        }
    }

    /// Runs the main menu until the user exits or input ends.
    ///
    /// Errors from a single action are reported and the menu is shown
    /// again; only errors that leave no way to read further answers end
    /// the loop.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.print_menu()?;
            let number = match self
                .prompter
                .read_choice("Please make your choice: ", 1, MenuChoice::LAST)
            {
                Ok(number) => number,
                Err(LibError::InputClosed) => {
                    self.prompter.say("")?;
                    self.logger.debug("input closed at the main menu");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                self.prompter.say(flightdesk::input::INVALID_CHOICE)?;
                continue;
            };
            if choice == MenuChoice::Exit {
                return Ok(());
            }

            self.logger.debug(&format!("menu choice {number}: {}", choice.label()));
            if let Err(e) = choice.dispatch(self) {
                if e.is_session_ending() {
                    return Err(e);
                }
                self.logger.error(&e.to_string());
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        self.prompter.say("MAIN MENU")?;
        self.prompter.say("---------")?;
        for choice in MenuChoice::DISPLAY_ORDER {
            self.prompter
                .say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        Ok(())
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<(), CliError> {
        Ok(self.prompter.say(line)?)
    }

    /// Prints rows in the session's output format.
    pub fn show(&mut self, result: &QueryResult) -> Result<(), CliError> {
        let text = self.format.create_formatter().format(result)?;
        self.say(text)
    }

    /// Runs `plan` in one transaction and prints what was added.
    ///
    /// Warnings are printed first. On failure the plan's ids go back to
    /// the allocators and nothing is printed.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult, CliError> {
        for warning in &plan.warnings {
            self.prompter.say(warning)?;
        }

        let result = PlanExecutor::new(&mut self.db)
            .release_ids_to(&mut self.ids)
            .execute(plan)?;

        let heading = if result.summaries.len() > 1 {
            "The following entries have been added to the database."
        } else {
            "Your entry has been added to the database."
        };
        self.prompter.say(format!("{heading}\n"))?;
        self.prompter.say(result.summaries.join("\n\n"))?;
        self.prompter.say("")?;
        self.logger.info(&format!("{}: committed", plan.description));
        Ok(result)
    }

    /// Asks for a record that must already exist.
    ///
    /// Kinds with a name column accept either an id or a name; the others
    /// accept only an id. The matching row is printed before returning.
    pub fn resolve(&mut self, kind: EntityKind) -> Result<i64, CliError> {
        if kind.name_expr().is_none() {
            return self.resolve_by_id(kind);
        }
        let entity = kind.display_name();
        let prompt = format!("Please enter the {entity} ID or name: ");
        self.resolve_with(kind, |prompter| {
            prompter.ask("id", &prompt, |answer| parse_record_key(answer, entity))
        })
    }

    /// Asks for the id of an existing record and prints it.
    pub fn resolve_by_id(&mut self, kind: EntityKind) -> Result<i64, CliError> {
        let entity = kind.display_name();
        let prompt = format!("Please enter the {entity} ID: ");
        self.resolve_with(kind, |prompter| {
            prompter.read_id(&prompt, entity).map(RecordKey::Id)
        })
    }

    /// Asks for the name of an existing record and prints it.
    ///
    /// When several records share the name they are listed and the user
    /// picks one by id.
    pub fn resolve_by_name(&mut self, kind: EntityKind) -> Result<i64, CliError> {
        let prompt = format!("Please enter the {}'s name: ", kind.display_name());
        self.resolve_with(kind, |prompter| {
            prompter.read_text(&prompt, &LOOKUP_NAME).map(RecordKey::Name)
        })
    }

    fn resolve_with<F>(&mut self, kind: EntityKind, mut next_key: F) -> Result<i64, CliError>
    where
        F: FnMut(&mut Prompter<R, W>) -> flightdesk::Result<RecordKey>,
    {
        let mut misses = 0;
        loop {
            let key = next_key(&mut self.prompter)?;
            if let Some(id) = self.try_key(kind, key)? {
                return Ok(id);
            }
            misses += 1;
            if self.prompter.max_attempts().is_some_and(|max| misses >= max) {
                return Err(LibError::RetriesExhausted {
                    field: format!("{kind} id"),
                    attempts: misses,
                }
                .into());
            }
        }
    }

    fn try_key(&mut self, kind: EntityKind, key: RecordKey) -> Result<Option<i64>, CliError> {
        let entity = kind.display_name();
        match key {
            RecordKey::Id(id) => match find_by_id(self.db.connection(), kind, id)? {
                Some(row) => {
                    self.show(&row)?;
                    Ok(Some(id))
                }
                None => {
                    self.say(format!("Please re-enter. There is no {entity} with ID {id}."))?;
                    Ok(None)
                }
            },
            RecordKey::Name(name) => match find_by_name(self.db.connection(), kind, &name)? {
                NameMatch::Unique(id) => self.try_key(kind, RecordKey::Id(id)),
                NameMatch::NoMatch => {
                    self.say(format!("Please re-enter. There is no {entity} named {name}."))?;
                    Ok(None)
                }
                NameMatch::Ambiguous(ids) => {
                    let rows = rows_named(self.db.connection(), kind, &name)?;
                    self.say(format!(
                        "{} {entity} records are named {name}. Please choose one by ID.",
                        ids.len()
                    ))?;
                    self.show(&rows)?;
                    self.resolve_by_id(kind).map(Some)
                }
            },
        }
    }
}
