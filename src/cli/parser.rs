use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time-clock CLI: punch entry, lunch and exit, get daily, weekly and monthly hours",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration (with demo accounts)
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields and bad accounts")]
        check: bool,

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

    /// Print the password digest to store in an account entry
    Digest {
        /// Account username (the digest is salted with it)
        username: String,

        /// Clear-text password
        password: String,
    },

    /// Log in and punch/report interactively (commands are read from stdin)
    Session {
        #[arg(long, short = 'u', help = "Username to log in with")]
        user: String,

        #[arg(
            long,
            short = 'p',
            help = "Password (when omitted, the first stdin line is used)"
        )]
        password: Option<String>,
    },
}
