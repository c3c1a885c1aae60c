//! Line commands understood by the shell.

use crate::error::CommandError;
use std::str::FromStr;
use todo::TodoId;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `todo add <text>`
    TodoAdd(String),
    /// `todo toggle <id>`
    TodoToggle(TodoId),
    /// `todo rm <id>`, which asks for confirmation first
    TodoRemove(TodoId),
    /// `todo` / `todo ls`
    TodoList,
    /// `count +` / `count inc`
    CounterIncrement,
    /// `count -` / `count dec`
    CounterDecrement,
    /// `count reset`
    CounterReset,
    /// `count`
    CounterShow,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Splits off the first whitespace-delimited word
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], &input[at..]),
        None => (input, ""),
    }
}

fn parse_id(command: &str, rest: &str) -> Result<TodoId, CommandError> {
    let raw = rest.trim();
    if raw.is_empty() {
        return Err(CommandError::MissingArgument {
            command: command.to_string(),
            expected: "a todo id",
        });
    }
    raw.parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (head, rest) = split_word(line);

        match head.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            "todo" | "t" => {
                let (sub, arg) = split_word(rest);
                match sub.to_ascii_lowercase().as_str() {
                    "" | "ls" | "list" => Ok(Self::TodoList),
                    // Raw text: the shell and the store decide what blank means
                    "add" => Ok(Self::TodoAdd(arg.trim().to_string())),
                    "toggle" | "done" => parse_id("todo toggle", arg).map(Self::TodoToggle),
                    "rm" | "remove" | "del" => parse_id("todo rm", arg).map(Self::TodoRemove),
                    other => Err(CommandError::Unknown(format!("todo {other}"))),
                }
            },
            "count" | "c" => match rest.trim().to_ascii_lowercase().as_str() {
                "" | "show" => Ok(Self::CounterShow),
                "+" | "inc" | "increment" => Ok(Self::CounterIncrement),
                "-" | "dec" | "decrement" => Ok(Self::CounterDecrement),
                "reset" => Ok(Self::CounterReset),
                other => Err(CommandError::Unknown(format!("count {other}"))),
            },
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, CommandError> {
        line.parse()
    }

    #[test]
    fn parses_todo_commands() {
        assert_eq!(parse("todo add  Buy milk  "), Ok(Command::TodoAdd("Buy milk".into())));
        assert_eq!(parse("todo toggle 3"), Ok(Command::TodoToggle(TodoId::new(3))));
        assert_eq!(parse("t rm 12"), Ok(Command::TodoRemove(TodoId::new(12))));
        assert_eq!(parse("todo"), Ok(Command::TodoList));
        assert_eq!(parse("  TODO LS "), Ok(Command::TodoList));
    }

    #[test]
    fn add_keeps_inner_whitespace() {
        assert_eq!(
            parse("todo add a  b\tc"),
            Ok(Command::TodoAdd("a  b\tc".into()))
        );
    }

    #[test]
    fn add_without_text_parses_as_blank() {
        assert_eq!(parse("todo add"), Ok(Command::TodoAdd(String::new())));
        assert_eq!(parse("todo add    "), Ok(Command::TodoAdd(String::new())));
    }

    #[test]
    fn parses_counter_commands() {
        assert_eq!(parse("count +"), Ok(Command::CounterIncrement));
        assert_eq!(parse("count dec"), Ok(Command::CounterDecrement));
        assert_eq!(parse("c reset"), Ok(Command::CounterReset));
        assert_eq!(parse("count"), Ok(Command::CounterShow));
    }

    #[test]
    fn parses_misc_commands() {
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn reports_errors() {
        assert_eq!(parse("   "), Err(CommandError::Empty));
        assert_eq!(parse("dance"), Err(CommandError::Unknown("dance".into())));
        assert_eq!(parse("todo fly"), Err(CommandError::Unknown("todo fly".into())));
        assert_eq!(parse("count *"), Err(CommandError::Unknown("count *".into())));
        assert_eq!(parse("todo toggle abc"), Err(CommandError::InvalidId("abc".into())));
        assert_eq!(parse("todo rm -1"), Err(CommandError::InvalidId("-1".into())));
        assert!(matches!(
            parse("todo rm"),
            Err(CommandError::MissingArgument { expected: "a todo id", .. })
        ));
    }
}
