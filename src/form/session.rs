use crate::calc::{UnitMode, UnitModeError};
use crate::form::state::FormState;

pub const SESSION_HELP: &str = "Commands:
  height <value>   set height
  weight <value>   set weight
  units <mode>     metric/mkg or imperial/ftlbs
  calc             compute
  reset            clear both inputs
  ok               dismiss the current error
  show             print the form
  quit             exit";

/// One line typed into an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Empty,
    Height(String),
    Weight(String),
    Units(UnitMode),
    InvalidUnits(UnitModeError),
    Calc,
    Reset,
    Ok,
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// What the front end should do after a command was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Nothing to print
    Continue,
    /// Print the form
    ShowForm,
    /// Print a message
    Message(String),
    Quit,
}

/// Split a line into a command word and its argument
pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    match command {
        "" => SessionCommand::Empty,
        "height" => SessionCommand::Height(arg.to_string()),
        "weight" => SessionCommand::Weight(arg.to_string()),
        "units" => match arg.parse::<UnitMode>() {
            Ok(units) => SessionCommand::Units(units),
            Err(e) => SessionCommand::InvalidUnits(e),
        },
        "calc" => SessionCommand::Calc,
        "reset" => SessionCommand::Reset,
        "ok" => SessionCommand::Ok,
        "show" => SessionCommand::Show,
        "help" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => SessionCommand::Unknown(other.to_string()),
    }
}

/// An unacknowledged error blocks everything except dismissing it or quitting
pub fn is_blocked(form: &FormState, command: &SessionCommand) -> bool {
    form.has_error() && !matches!(command, SessionCommand::Ok | SessionCommand::Quit)
}

/// Apply one command to the form
pub fn apply_command(form: &mut FormState, command: SessionCommand) -> SessionOutcome {
    if is_blocked(form, &command) {
        return SessionOutcome::Message("Dismiss the error with 'ok' first.".to_string());
    }

    match command {
        SessionCommand::Empty => SessionOutcome::Continue,
        SessionCommand::Height(text) => {
            form.set_height(text);
            SessionOutcome::Continue
        }
        SessionCommand::Weight(text) => {
            form.set_weight(text);
            SessionOutcome::Continue
        }
        SessionCommand::Units(units) => {
            form.select_units(units);
            SessionOutcome::ShowForm
        }
        SessionCommand::InvalidUnits(e) => SessionOutcome::Message(e.to_string()),
        SessionCommand::Calc => {
            form.calculate();
            SessionOutcome::ShowForm
        }
        SessionCommand::Reset => {
            form.reset();
            SessionOutcome::ShowForm
        }
        SessionCommand::Ok => {
            form.clear_error();
            SessionOutcome::Continue
        }
        SessionCommand::Show => SessionOutcome::ShowForm,
        SessionCommand::Help => SessionOutcome::Message(SESSION_HELP.to_string()),
        SessionCommand::Quit => SessionOutcome::Quit,
        SessionCommand::Unknown(word) => SessionOutcome::Message(format!(
            "Unknown command '{}'. Type 'help' for commands.",
            word
        )),
    }
}
