use std::str::FromStr;

use thiserror::Error;

use crate::{consts::consts::PersonId, model::person::Person};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Invalid person id: {0}")]
    InvalidId(String),

    #[error("Invalid person JSON: {0}")]
    InvalidPerson(serde_json::Error),
}

/// One line of console input, mirroring the controller actions
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `index`
    Index,
    /// `create`
    CreateForm,
    /// `create {"firstName": ..}`
    Create(Person),
    /// `edit <id>`
    EditForm(PersonId),
    /// `edit <id> {"firstName": ..}`
    Edit(PersonId, Person),
}

fn parse_person(json: &str) -> Result<Person, CommandError> {
    serde_json::from_str(json).map_err(CommandError::InvalidPerson)
}

fn parse_id(id: &str) -> Result<PersonId, CommandError> {
    id.parse::<usize>()
        .map(PersonId)
        .map_err(|_| CommandError::InvalidId(id.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match (verb, rest) {
            ("index", "") => Ok(Command::Index),
            ("create", "") => Ok(Command::CreateForm),
            ("create", json) => Ok(Command::Create(parse_person(json)?)),
            ("edit", "") => Err(CommandError::InvalidId("".to_string())),
            ("edit", args) => match args.split_once(char::is_whitespace) {
                Some((id, json)) => Ok(Command::Edit(parse_id(id)?, parse_person(json.trim())?)),
                None => Ok(Command::EditForm(parse_id(args)?)),
            },
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}
