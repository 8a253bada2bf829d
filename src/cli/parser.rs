use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rWeekhours
/// CLI application to summarize weekly attendance exports
#[derive(Parser)]
#[command(
    name = "rweekhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly attendance totals per student from check-in/check-out spreadsheet exports",
    long_about = None
)]
pub struct Cli {
    /// Override session database path (useful for tests or parallel sessions)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the required columns are, when the headers are not the usual ones.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Worksheet to read (Excel files only, default: first sheet)
    #[arg(long = "sheet")]
    pub sheet: Option<String>,

    /// Header of the student name column
    #[arg(long = "name-col")]
    pub name_col: Option<String>,

    /// Header of the check-in column
    #[arg(long = "in-col")]
    pub in_col: Option<String>,

    /// Header of the check-out column
    #[arg(long = "out-col")]
    pub out_col: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the session database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Process one weekly export and add it to the session totals
    Upload {
        /// Spreadsheet file (.xlsx, .xls, .ods or .csv)
        file: String,

        /// Week label (Www-YYYY); default: ISO week of the earliest check-in
        #[arg(long = "week")]
        week: Option<String>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Aggregate several exports in order without touching the session
    Report {
        /// Spreadsheet files, one per week, oldest first
        #[arg(required = true)]
        files: Vec<String>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the session overview (one column per uploaded week)
    Show,

    /// End the session: forget cumulative totals and uploaded weeks
    Reset {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        /// Only the most recent N entries
        #[arg(long = "last", value_name = "N")]
        last: Option<usize>,
    },

    /// Export the session overview
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
