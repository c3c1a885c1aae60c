//! The presentation layer: turns lines of input into store calls.
//!
//! `Shell` owns one [`TodoStore`] and one [`CounterStore`] and never touches
//! their state except through their operations. Deleting asks first: `todo rm`
//! only records what to delete, and the next line decides.

use crate::command::Command;
use crate::config::TabsConfig;
use crate::render;
use counter::CounterStore;
use todo::{TodoId, TodoStore};

/// What the shell wants shown after handling a line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    /// Lines to print, in order
    pub lines: Vec<String>,
    /// The user asked to leave
    pub quit: bool,
}

impl Reply {
    fn show(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

/// Line-driven front end over the two stores
#[derive(Debug)]
pub struct Shell {
    todos: TodoStore,
    counter: CounterStore,
    pending_delete: Option<TodoId>,
}

impl Shell {
    /// Create a shell over existing stores
    #[must_use]
    pub const fn new(todos: TodoStore, counter: CounterStore) -> Self {
        Self {
            todos,
            counter,
            pending_delete: None,
        }
    }

    /// Create a shell with stores built from `config`
    #[must_use]
    pub fn from_config(config: &TabsConfig) -> Self {
        Self::new(config.todo_store(), config.counter_store())
    }

    /// The to-do store
    #[must_use]
    pub const fn todos(&self) -> &TodoStore {
        &self.todos
    }

    /// The counter store
    #[must_use]
    pub const fn counter(&self) -> &CounterStore {
        &self.counter
    }

    /// The item awaiting delete confirmation, if any
    #[must_use]
    pub const fn pending_delete(&self) -> Option<TodoId> {
        self.pending_delete
    }

    /// Prompt shown before reading the next line
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        if self.pending_delete.is_some() {
            "delete? [y/N] "
        } else {
            "> "
        }
    }

    /// Lines shown once at start-up
    #[must_use]
    pub fn welcome(&self) -> Vec<String> {
        let mut lines = vec!["Type `help` for commands.".to_string(), String::new()];
        lines.extend(render::counter_screen(self.counter.value()));
        lines.extend(render::todo_screen(self.todos.list()));
        lines
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        if let Some(id) = self.pending_delete.take() {
            return self.answer_delete(id, line);
        }

        match line.parse::<Command>() {
            Ok(command) => self.run(command),
            Err(error) => {
                tracing::debug!(%error, "Rejected input");
                Reply::show(vec![error.to_string()])
            },
        }
    }

    fn run(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "Running command");

        match command {
            Command::TodoAdd(text) => {
                // Keep the input open on blank text instead of submitting it
                if text.trim().is_empty() {
                    return Reply::show(vec!["Type some text after `todo add`.".to_string()]);
                }
                self.todos.add(text);
                self.todo_reply()
            },
            Command::TodoToggle(id) => {
                self.todos.toggle(id);
                self.todo_reply()
            },
            Command::TodoRemove(id) => match self.todos.get(id) {
                Some(item) => {
                    let lines = render::confirm_delete(item);
                    self.pending_delete = Some(id);
                    Reply::show(lines)
                },
                // Nothing to confirm; the list is unchanged either way
                None => self.todo_reply(),
            },
            Command::TodoList => self.todo_reply(),
            Command::CounterIncrement => {
                self.counter.increment();
                self.counter_reply()
            },
            Command::CounterDecrement => {
                self.counter.decrement();
                self.counter_reply()
            },
            Command::CounterReset => {
                self.counter.reset();
                self.counter_reply()
            },
            Command::CounterShow => self.counter_reply(),
            Command::Help => Reply::show(render::help()),
            Command::Quit => Reply {
                lines: vec!["Bye.".to_string()],
                quit: true,
            },
        }
    }

    fn answer_delete(&mut self, id: TodoId, answer: &str) -> Reply {
        let confirmed = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
        tracing::debug!(%id, confirmed, "Delete confirmation answered");

        if confirmed {
            self.todos.remove(id);
            self.todo_reply()
        } else {
            let mut lines = vec!["Cancelled.".to_string()];
            lines.extend(render::todo_screen(self.todos.list()));
            Reply::show(lines)
        }
    }

    fn todo_reply(&self) -> Reply {
        Reply::show(render::todo_screen(self.todos.list()))
    }

    fn counter_reply(&self) -> Reply {
        Reply::show(render::counter_screen(self.counter.value()))
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(TodoStore::new(), CounterStore::new())
    }
}
