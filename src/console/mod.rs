//! Line based front end: one command per input line, one JSON response per output line.

pub mod command;

use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::{
    controller::{outcome::Outcome, person::PersonController},
    model::person::Person,
};

use self::command::Command;

const QUIT_COMMAND: &str = "quit";

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Outcome(Outcome),
    People { people: Vec<Person> },
    Error { error: String },
}

impl Response {
    pub fn error(message: impl ToString) -> Self {
        Response::Error {
            error: message.to_string(),
        }
    }
}

pub fn execute(controller: &PersonController, command: Command) -> Response {
    let result = match command {
        Command::Index => {
            return Response::People {
                people: controller.index(),
            }
        }
        Command::CreateForm => Ok(controller.create_form()),
        Command::Create(person) => controller.create(person),
        Command::EditForm(id) => Ok(controller.edit_form(id)),
        Command::Edit(id, person) => controller.edit(id, person),
    };

    match result {
        Ok(outcome) => Response::Outcome(outcome),
        Err(e) => {
            log::error!("Failed to save person: {}", e);
            Response::error(e)
        }
    }
}

/// Reads commands until EOF or a quit command, returns how many were executed
pub fn run(
    controller: &PersonController,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<usize> {
    let mut executed = 0;

    for line in input.lines() {
        let line = line?;
        let request = line.trim();

        if request.is_empty() {
            continue;
        }

        if request == QUIT_COMMAND {
            break;
        }

        log::info!("Received request: {}", request);

        let response = match request.parse::<Command>() {
            Ok(command) => {
                executed += 1;
                execute(controller, command)
            }
            Err(e) => {
                log::warn!("Rejected request: {}", e);
                Response::error(e)
            }
        };

        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }

    Ok(executed)
}
