use crate::export::ExportFormat;
use crate::models::schema::TableKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for slvm
/// League book for the SLVM Invitational: handicaps and match results on SQLite
#[derive(Parser)]
#[command(
    name = "slvm",
    version = env!("CARGO_PKG_VERSION"),
    about = "SLVM Invitational league book: view handicaps, edit match results (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory holding the seed player portraits
    #[arg(global = true, long = "images", value_name = "DIR")]
    pub images: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the database (seeded on first run)
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Show players and their handicaps
    Players {
        #[arg(
            long = "dump-images",
            value_name = "DIR",
            help = "Write every player portrait into DIR"
        )]
        dump_images: Option<String>,
    },

    /// Show the results table with the row numbers used by edit/del/commit
    Results,

    /// Apply a JSON changeset {edited, added, deleted} to the results table
    Commit {
        #[arg(long, value_name = "FILE", help = "Changeset file, or '-' for stdin")]
        changeset: String,
    },

    /// Edit one result row and commit immediately
    Edit {
        /// Row number as shown by `slvm results`
        row: usize,

        #[arg(
            long = "set",
            value_name = "FIELD=VALUE",
            required = true,
            help = "Field to change, e.g. --set score2=1 --set player3=Marta"
        )]
        set: Vec<String>,
    },

    /// Add a match result and commit immediately
    Add {
        #[arg(long, help = "Day of the match (YYYY-MM-DD or DD-MM-YYYY)")]
        day: String,

        #[arg(
            long = "player",
            value_name = "NAME:SCORE",
            required = true,
            help = "Participant and score, in slot order (2 to 4 times)"
        )]
        players: Vec<String>,
    },

    /// Delete result rows and commit immediately
    Del {
        /// Row numbers as shown by `slvm results`
        #[arg(required = true)]
        rows: Vec<usize>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a table
    Export {
        #[arg(long, value_enum, default_value = "results")]
        table: TableKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
