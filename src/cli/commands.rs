use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const AFTER_HELP: &str = "\
Examples:
  ghosty list                            Show todos
  ghosty add \"Buy groceries\"             Add a todo
  ghosty check 1 3-5                     Check todos 1, 3, 4, 5
  ghosty hold 2-4                        Hold todos 2, 3, 4
  ghosty remove 1 3-5 7                  Remove todos 1, 3, 4, 5, 7
  ghosty focus use work                  Switch to the @work list

Number Formats:
  Single: 1
  Multiple: 1 3 5
  Ranges: 1-5 or 3-5 7 9-11";

#[derive(Parser)]
#[command(
    name = "ghosty",
    about = concat!("Ghosty Todo v", env!("CARGO_PKG_VERSION"), " - a minimalist todo list manager"),
    version,
    after_help = AFTER_HELP,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(short = 'd', long = "data-dir", global = true, env = "GHOSTY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the todos of the current focus
    #[command(visible_alias = "ls")]
    List,
    /// Add a new todo
    #[command(visible_alias = "a")]
    Add(AddArgs),
    /// Check/uncheck todos
    #[command(visible_alias = "c")]
    Check(NumbersArgs),
    /// Toggle hold status
    #[command(visible_alias = "h")]
    Hold(NumbersArgs),
    /// Remove todos
    #[command(visible_aliases = ["r", "rm"])]
    Remove(NumbersArgs),
    /// Manage focuses (independent lists)
    Focus(FocusCmd),
    /// Show help information
    #[command(visible_alias = "?")]
    Help,
}

#[derive(Args)]
pub struct AddArgs {
    /// Todo text (words are joined with spaces)
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct NumbersArgs {
    /// Todo number(s) or ranges (e.g., 1 3-5 7)
    #[arg(num_args = 0.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

#[derive(Args)]
pub struct FocusCmd {
    #[command(subcommand)]
    pub action: Option<FocusAction>,
}

#[derive(Subcommand)]
pub enum FocusAction {
    /// List focuses (default)
    #[command(visible_alias = "ls")]
    List,
    /// Add a focus
    #[command(visible_alias = "a")]
    Add(FocusNameArg),
    /// Remove a focus and all of its todos
    #[command(visible_aliases = ["r", "rm"])]
    Remove(FocusNameArg),
    /// Make a focus current
    #[command(visible_alias = "select")]
    Use(FocusNameArg),
}

#[derive(Args)]
pub struct FocusNameArg {
    /// Focus name
    pub name: String,
}
