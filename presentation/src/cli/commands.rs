//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskdesk_domain::{GroupBy, Priority, RequestType, TaskStatus};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON, the dispatch response verbatim
    Json,
}

impl From<OutputFormat> for taskdesk_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => taskdesk_domain::OutputFormat::Text,
            OutputFormat::Json => taskdesk_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for taskdesk
#[derive(Parser, Debug)]
#[command(name = "taskdesk")]
#[command(author, version, about = "Partner task dashboard backed by remote Lyzr agents")]
#[command(long_about = r#"
taskdesk tracks tasks across partner companies. Every action is forwarded as
a natural-language request to a remote agent: a manager agent routes it to
one of seven sub-agents (session sync, task collection, task update, weekly
report, review meeting, meeting agenda, archive management).

The API key is read from LYZR_API_KEY unless configured otherwise.

Configuration files are loaded from (in priority order):
1. TASKDESK_* environment variables (e.g. TASKDESK_DISPATCH__MODE=direct)
2. --config <path>       Explicit config file
3. ./taskdesk.toml       Project-level config
4. ~/.config/taskdesk/config.toml   Global config

Example:
  taskdesk sync
  taskdesk scan --add-all
  taskdesk update 3 --status "In Progress"
  taskdesk review --company AWS --group-by priority
  taskdesk send generate-report "Summarize this week's blockers"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Send requests straight to the routed sub-agent instead of the manager
    #[arg(long, global = true)]
    pub direct: bool,

    /// Keep the board in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show board counters and the task table
    Dashboard,

    /// Fetch the current task state from Notion via the session sync agent
    Sync,

    /// Scan mail and meeting notes for new tasks
    Scan {
        /// Add the scanned task with this id to the board (repeatable)
        #[arg(long = "add", value_name = "ID", conflicts_with = "add_all")]
        add: Vec<String>,

        /// Add every scanned task to the board
        #[arg(long)]
        add_all: bool,
    },

    /// Edit a task and forward the changes
    Update {
        /// Task id
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Open, "In Progress", Completed
        #[arg(long)]
        status: Option<TaskStatus>,

        #[arg(long, value_name = "NAME")]
        assignee: Option<String>,

        /// Company; pass an empty string to clear
        #[arg(long)]
        company: Option<String>,

        /// Meeting the task came from; pass an empty string to clear
        #[arg(long)]
        meeting: Option<String>,

        /// High, Medium, Low
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Generate the weekly report
    Report {
        /// Restrict to one company
        #[arg(long)]
        company: Option<String>,
    },

    /// Start a review meeting over unfinished tasks
    Review {
        /// Only tasks assigned to this person
        #[arg(long, value_name = "NAME")]
        member: Option<String>,

        /// Only tasks for this company
        #[arg(long)]
        company: Option<String>,

        /// team-member, company or priority
        #[arg(long, default_value = "team-member")]
        group_by: GroupBy,
    },

    /// Generate a meeting agenda for a company
    Agenda {
        #[arg(long)]
        company: String,

        /// Meeting date, e.g. 2024-12-05
        #[arg(long)]
        date: String,
    },

    /// Archive completed tasks
    Archive {
        /// Task ids
        #[arg(required = true, value_name = "ID")]
        ids: Vec<String>,
    },

    /// Check that the manager agent is reachable
    Health,

    /// Send a free-form message tagged with a request type
    Send {
        /// Request type, e.g. generate-report
        #[arg(value_name = "TYPE")]
        request_type: RequestType,

        message: String,
    },

    /// Print the request type → agent routing table
    Agents,
}
