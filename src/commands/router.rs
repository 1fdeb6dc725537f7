// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, GenerateCommand, LookupCommand, ShowCommand};
use crate::Args;

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority:
/// 1. Table listing (--show-ciphers)
/// 2. Name lookups (--lookup)
/// 3. Artifact generation (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> Box<dyn Command> {
        if args.show_ciphers {
            return Box::new(ShowCommand::new(args));
        }

        if !args.lookup.is_empty() {
            return Box::new(LookupCommand::new(args));
        }

        Box::new(GenerateCommand::new(args))
    }
}
