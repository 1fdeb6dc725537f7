// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod generate;
mod lookup;
mod show;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use generate::GenerateCommand;
pub use lookup::{LookupCommand, LookupResult};
pub use show::ShowCommand;

use crate::ciphers::Classification;
use colored::{ColoredString, Colorize};

/// Terminal label for a tier
pub(crate) fn paint(classification: Classification) -> ColoredString {
    let label = classification.as_str();
    match classification {
        Classification::Recommended => label.green().bold(),
        Classification::Secure => label.green(),
        Classification::Weak => label.yellow(),
        Classification::Insecure => label.red().bold(),
        Classification::Unknown => label.dimmed(),
    }
}
