//! Line-oriented interactive session.
//!
//! The session is the terminal counterpart of a single page visit: the
//! catalog is loaded once on start, then each input line is parsed into a
//! [`Command`] and applied to the controller. Every call returns the text
//! to show; the caller owns stdin/stdout.

use std::str::FromStr;

use api_client::RecommenderApi;

use crate::controller::Controller;
use crate::view;

pub const HELP: &str = "\
Commands:
  list              show the movie list
  select <title>    select a movie by title
  select <n>        select movie number n from the list
                    (a title in the list wins over a number)
  recommend, r      get recommendations for the selected movie
  theme, t          switch between dark and light mode
  show              show the page again
  help              show this help
  quit, exit        leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// A title, or a 1-based position in the catalog
    Select(String),
    Recommend,
    ToggleTheme,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "list" | "ls" => Ok(Command::List),
            "select" | "s" => {
                if rest.is_empty() {
                    return Err("Usage: select <n> or select <title>".to_string());
                }
                Ok(Command::Select(rest.to_string()))
            }
            "recommend" | "r" => Ok(Command::Recommend),
            "theme" | "t" => Ok(Command::ToggleTheme),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<A> {
    controller: Controller<A>,
}

impl<A: RecommenderApi> Session<A> {
    pub fn new(controller: Controller<A>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &Controller<A> {
        &self.controller
    }

    /// Load the catalog and render the initial page.
    pub async fn start(&self) -> String {
        self.controller.load_catalog().await;
        view::render(&self.controller.snapshot())
    }

    /// Apply one line of input.
    pub async fn handle_line(&self, line: &str) -> (Flow, String) {
        if line.trim().is_empty() {
            return (Flow::Continue, String::new());
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => return (Flow::Continue, message),
        };

        match command {
            Command::Quit => (Flow::Quit, String::new()),
            other => (Flow::Continue, self.execute(other).await),
        }
    }

    async fn execute(&self, command: Command) -> String {
        match command {
            Command::List => view::render_catalog(&self.controller.snapshot()),
            Command::Select(arg) => self.select(arg),
            Command::Recommend => {
                self.controller.recommend().await;
                view::render(&self.controller.snapshot())
            }
            Command::ToggleTheme => {
                self.controller.toggle_theme();
                view::render(&self.controller.snapshot())
            }
            Command::Show => view::render(&self.controller.snapshot()),
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        }
    }

    /// An exact catalog title is selected as is; otherwise a number picks
    /// by position and any other text is taken verbatim.
    fn select(&self, arg: String) -> String {
        let movies = self.controller.snapshot().movies;
        if movies.contains(&arg) {
            let message = format!("Selected: {}", arg);
            self.controller.select(arg);
            return message;
        }

        match arg.parse::<usize>() {
            Ok(n) => match n.checked_sub(1).and_then(|i| self.controller.select_index(i)) {
                Some(title) => format!("Selected: {}", title),
                None => format!("No movie number {} (the list has {})", n, movies.len()),
            },
            Err(_) => {
                let message = format!("Selected: {}", arg);
                self.controller.select(arg);
                message
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("list".parse::<Command>(), Ok(Command::List));
        assert_eq!("  R ".parse::<Command>(), Ok(Command::Recommend));
        assert_eq!("theme".parse::<Command>(), Ok(Command::ToggleTheme));
        assert_eq!("t".parse::<Command>(), Ok(Command::ToggleTheme));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("?".parse::<Command>(), Ok(Command::Help));
    }

    #[test]
    fn test_parse_select() {
        assert_eq!("select 3".parse::<Command>(), Ok(Command::Select("3".to_string())));
        assert_eq!(
            "select  The Dark Knight ".parse::<Command>(),
            Ok(Command::Select("The Dark Knight".to_string()))
        );
        assert!("select".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert!(err.contains("Unknown command 'dance'"));
    }
}
