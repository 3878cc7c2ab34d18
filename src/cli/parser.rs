use crate::export::ExportFormat;
use crate::models::{Ship, UserRole, Zone};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rShipAudit
/// CLI application to record cleaning inspections of ship zones with SQLite
#[derive(Parser)]
#[command(
    name = "rshipaudit",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record cleaning/disinfection inspections of ship zones and produce PDF reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Verdict given to one checklist item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Verdict {
    #[value(alias = "ok")]
    Conforms,
    #[value(name = "not-conforms", alias = "ko")]
    NotConforms,
    /// Remove the current answer
    Clear,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the checklist of a zone (all zones when omitted)
    Checklist {
        #[arg(long, value_enum)]
        zone: Option<Zone>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Log in; the user becomes the default inspector of new submissions
    Login {
        email: String,
        password: String,
    },

    /// Record an inspection step by step
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// Review status of every ship and zone for a day
    Status {
        #[arg(long, help = "Day to check (YYYY-MM-DD or DD/MM/YYYY, default today)")]
        date: Option<String>,
    },

    /// List stored inspections
    List {
        #[arg(long, value_enum)]
        ship: Option<Ship>,

        #[arg(long, value_enum)]
        zone: Option<Zone>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Export stored inspections
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum)]
        ship: Option<Ship>,

        #[arg(long, value_enum)]
        zone: Option<Zone>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long, help = "Include photo payloads in JSON exports")]
        photos: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate the PDF report of one inspection
    Report {
        #[arg(long, value_enum)]
        ship: Ship,

        #[arg(long, value_enum)]
        zone: Zone,

        #[arg(long, help = "Inspection day (default today)")]
        date: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output file (default in reports_dir)")]
        file: Option<String>,

        #[arg(long = "no-ai", help = "Skip the narrative evaluation")]
        no_ai: bool,

        #[arg(long, help = "Open the report when done")]
        open: bool,
    },
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a user
    Add {
        email: String,
        password: String,

        #[arg(long, value_enum, default_value = "inspector")]
        role: UserRole,
    },
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// Start a visit of one ship zone
    Start {
        #[arg(long, value_enum)]
        ship: Ship,

        #[arg(long, value_enum)]
        zone: Zone,

        #[arg(long, help = "Discard a visit already in progress")]
        force: bool,
    },

    /// Answer an item (by number or full key)
    Answer {
        item: String,

        #[arg(value_enum)]
        verdict: Verdict,
    },

    /// Set or clear the pest / repair flags of an item
    #[command(group(ArgGroup::new("flags").required(true).multiple(true).args(["pest", "repair"])))]
    Flag {
        item: String,

        #[arg(long)]
        pest: bool,

        #[arg(long)]
        repair: bool,

        #[arg(long, help = "Clear the given flags instead of setting them")]
        off: bool,
    },

    /// Attach an observation to an item (empty text clears it)
    Note { item: String, text: String },

    /// Attach a photo file to an item
    Photo {
        item: String,

        #[arg(value_name = "FILE", required_unless_present = "remove")]
        file: Option<String>,

        #[arg(long)]
        remove: bool,
    },

    /// Show the checklist with current answers
    Show,

    /// Submit the visit
    Finish {
        #[arg(long, help = "Submitting user (default: last login)")]
        user: Option<String>,

        #[arg(long, help = "Inspection day (default today)")]
        date: Option<String>,
    },

    /// Discard the visit in progress
    Abort,
}
