use clap::{Args, Parser, Subcommand};

const LONG_ABOUT: &str = r#"
Todoist CLI - manage Todoist tasks from the terminal

Ordering:
  todoist add "Write report" --top          ← create at the top of its list
  todoist add "Write report" --order 3     ← create at position 3
  todoist reorder 8123456789 --order top   ← move an existing task

Positions are 1-based and counted among siblings: subtasks of the same
parent, else tasks of the same section, else top-level project tasks.
Out-of-range positions land first or last.

Authentication:
  todoist auth <token>     ← store an API token
  TODOIST_API_TOKEN=...    ← or provide it via the environment
"#;

#[derive(Parser, Clone)]
#[command(name = "todoist")]
#[command(about = "Command-line client for Todoist with positional task ordering")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Store an API token, or show the current authentication status
    ///
    /// Examples:
    ///   todoist auth 0123456789abcdef
    ///   todoist auth
    Auth {
        /// API token from Todoist settings → Integrations → Developer
        token: Option<String>,
    },

    /// Remove the stored API token
    Logout,

    /// Create a task, optionally at a given position among its siblings
    ///
    /// Examples:
    ///   todoist add Buy milk
    ///   todoist add "Review PR" --project-id 2203306141 --top
    ///   todoist add "Step two" --parent 8123456789 --order 2
    Add(AddArgs),

    /// Move an existing task to a position among its siblings
    ///
    /// Examples:
    ///   todoist reorder 8123456789 --top
    ///   todoist reorder 8123456789 --order 4
    Reorder(ReorderArgs),
}

#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    /// Task content
    #[arg(required = true, num_args = 1..)]
    pub content: Vec<String>,

    /// Due date in natural language (e.g. "tomorrow", "next monday")
    #[arg(short, long)]
    pub due: Option<String>,

    /// Project ID (defaults to the inbox)
    #[arg(short = 'p', long)]
    pub project_id: Option<String>,

    /// Section ID
    #[arg(short = 's', long)]
    pub section_id: Option<String>,

    /// Parent task ID (creates a subtask)
    #[arg(long)]
    pub parent: Option<String>,

    /// Task description
    #[arg(long)]
    pub description: Option<String>,

    /// Priority 1-4 (1 = highest)
    #[arg(short = 'P', long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub priority: Option<u8>,

    /// Add a label (repeatable)
    #[arg(short, long = "label")]
    pub labels: Vec<String>,

    /// Insert the task at the top of its list
    #[arg(long)]
    pub top: bool,

    /// Insert the task at a position: "top" or a 1-based integer
    #[arg(long, value_name = "POSITION", allow_hyphen_values = true)]
    pub order: Option<String>,

    /// Print the created task as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ReorderArgs {
    /// Task ID
    pub task_id: String,

    /// Move the task to the top of its list
    #[arg(long)]
    pub top: bool,

    /// Target position: "top" or a 1-based integer
    #[arg(long, value_name = "POSITION", allow_hyphen_values = true)]
    pub order: Option<String>,

    /// Print the applied ordering as JSON
    #[arg(long)]
    pub json: bool,
}
