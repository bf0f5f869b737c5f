//! Navigation destinations and a minimal back stack.
//!
//! ViewModels only emit [`NavCommand`]s; whoever binds the screens decides
//! what a destination looks like.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Splash,
    Home,
    Login,
}

impl Destination {
    pub const START: Destination = Destination::Splash;

    pub fn route(self) -> &'static str {
        match self {
            Destination::Splash => "splash",
            Destination::Home => "home",
            Destination::Login => "login",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        match route {
            "splash" => Ok(Destination::Splash),
            "home" => Ok(Destination::Home),
            "login" => Ok(Destination::Login),
            other => Err(format!("unknown route '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCommand {
    pub destination: Destination,
    /// Drop every entry below the destination so back cannot return to it.
    pub clear_back_stack: bool,
}

impl NavCommand {
    pub fn to(destination: Destination) -> Self {
        Self {
            destination,
            clear_back_stack: false,
        }
    }

    pub fn replace_all(destination: Destination) -> Self {
        Self {
            destination,
            clear_back_stack: true,
        }
    }
}

/// Navigation host.
pub trait Navigator {
    fn navigate(&mut self, command: NavCommand);

    /// Pop the top entry. Returns `false` when nothing is left to pop to.
    fn back(&mut self) -> bool;

    fn current(&self) -> Option<Destination>;
}

#[derive(Debug, Clone, Default)]
pub struct BackStack {
    entries: Vec<Destination>,
}

impl BackStack {
    pub fn new(start: Destination) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn entries(&self) -> &[Destination] {
        &self.entries
    }
}

impl Navigator for BackStack {
    fn navigate(&mut self, command: NavCommand) {
        if command.clear_back_stack {
            self.entries.clear();
        }
        if self.entries.last() != Some(&command.destination) {
            self.entries.push(command.destination);
        }
        tracing::info!(
            route = command.destination.route(),
            clear = command.clear_back_stack,
            depth = self.entries.len(),
            "navigate"
        );
    }

    fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        true
    }

    fn current(&self) -> Option<Destination> {
        self.entries.last().copied()
    }
}
