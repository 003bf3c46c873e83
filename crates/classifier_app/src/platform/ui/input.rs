use classifier_core::JobField;
use thiserror::Error;

pub const HELP_TEXT: &str = "\
Commands:
  set <field> <text>   edit a field (title, company_profile, description,
                       requirements, benefits); \\n inserts a line break
  sample               fill the form with a sample posting
  submit               classify the current posting
  dismiss              close the error panel
  reset                clear the form and the result
  show                 redraw the form
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: JobField, value: String },
    Sample,
    Submit,
    Dismiss,
    Reset,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("type a command, or `help`")]
    Empty,
    #[error("unknown command {0:?}; type `help`")]
    UnknownCommand(String),
    #[error("`set` needs a field name")]
    MissingField,
    #[error("unknown field {0:?}")]
    UnknownField(String),
}

pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim_start()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "set" => {
            let (name, value) = match rest.split_once(char::is_whitespace) {
                Some((name, value)) => (name, value.trim_start()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(InputError::MissingField);
            }
            let field =
                JobField::from_key(name).ok_or_else(|| InputError::UnknownField(name.to_string()))?;
            Ok(Command::Set {
                field,
                value: value.replace("\\n", "\n"),
            })
        }
        "sample" => Ok(Command::Sample),
        "submit" | "classify" => Ok(Command::Submit),
        "dismiss" => Ok(Command::Dismiss),
        "reset" => Ok(Command::Reset),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(InputError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_parses_field_and_keeps_inner_spacing() {
        assert_eq!(
            parse_command("  set description  Line one\\nLine  two "),
            Ok(Command::Set {
                field: JobField::Description,
                value: "Line one\nLine  two".to_string(),
            })
        );
    }

    #[test]
    fn set_without_value_clears_field() {
        assert_eq!(
            parse_command("set benefits"),
            Ok(Command::Set {
                field: JobField::Benefits,
                value: String::new(),
            })
        );
    }

    #[test]
    fn errors_are_specific() {
        assert_eq!(parse_command("   "), Err(InputError::Empty));
        assert_eq!(parse_command("set"), Err(InputError::MissingField));
        assert_eq!(
            parse_command("set salary 100k"),
            Err(InputError::UnknownField("salary".to_string()))
        );
        assert_eq!(
            parse_command("launch"),
            Err(InputError::UnknownCommand("launch".to_string()))
        );
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse_command("SUBMIT"), Ok(Command::Submit));
        assert_eq!(parse_command("Reset"), Ok(Command::Reset));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
    }
}
