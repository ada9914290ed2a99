use std::str::FromStr;

use thiserror::Error;

use crate::domain::ProductId;
use crate::session_actor::{Credentials, SessionAction};

pub const HELP: &str = "\
commands:
  login <user> [password]   open the catalog (any input is accepted)
  select <id>               choose a product
  + <id> | - <id>           change a row's quantity
  inc | dec                 change the selected product's quantity
  clear                     drop the selection and reset quantities
  confirm                   show the invoice for the selection
  back                      return from the invoice
  show | help | quit";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(SessionAction),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("{0} needs a product id")]
    MissingProductId(&'static str),
    #[error("not a product id: {0}")]
    InvalidProductId(String),
}

fn product_id(command: &'static str, arg: Option<&str>) -> Result<ProductId, CommandError> {
    let raw = arg.ok_or(CommandError::MissingProductId(command))?;
    raw.parse::<u32>()
        .map(ProductId)
        .map_err(|_| CommandError::InvalidProductId(raw.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let arg = words.next();

        let action = match name.to_ascii_lowercase().as_str() {
            "login" => {
                let username = arg.unwrap_or_default();
                let password = words.collect::<Vec<_>>().join(" ");
                SessionAction::SubmitLogin(Credentials::new(username, password))
            }
            "select" => SessionAction::SelectProduct(product_id("select", arg)?),
            "+" => SessionAction::IncrementRow(product_id("+", arg)?),
            "-" => SessionAction::DecrementRow(product_id("-", arg)?),
            "inc" => SessionAction::IncrementQuantity,
            "dec" => SessionAction::DecrementQuantity,
            "clear" => SessionAction::ClearSelection,
            "confirm" => SessionAction::Confirm,
            "back" => SessionAction::Back,
            "show" => return Ok(Command::Show),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => return Err(CommandError::Unknown(name.to_string())),
        };
        Ok(Command::Action(action))
    }
}
