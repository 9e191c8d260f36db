use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use soiree_core::config::{
    ClientConfig, DEFAULT_API_PREFIX, DEFAULT_API_URL, ENV_API_PREFIX, ENV_API_URL,
    ENV_CREDENTIAL_FILE, ENV_HYDRATION_TIMEOUT,
};

use crate::cli::{ArtistCommands, EventCommands, LoginArgs, RegisterArgs};

/// Command-line client for the Soiree events service
///
/// Log in once and the bearer credential is kept in
/// $XDG_DATA_HOME/soiree/token for later runs. Events are assembled step by
/// step the same way the web wizard does it and submitted in one request.
#[derive(Parser)]
#[command(version, about, name = "soiree")]
pub struct Args {
    /// Base address of the API server
    #[arg(long, global = true, env = ENV_API_URL, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Path prefix prepended to every endpoint
    #[arg(long, global = true, env = ENV_API_PREFIX, default_value = DEFAULT_API_PREFIX)]
    pub api_prefix: String,

    /// Credential file. Defaults to $XDG_DATA_HOME/soiree/token
    #[arg(long, global = true, env = ENV_CREDENTIAL_FILE)]
    pub credential_file: Option<PathBuf>,

    /// Seconds to wait for the server to confirm a stored credential
    #[arg(long, global = true, env = ENV_HYDRATION_TIMEOUT, default_value_t = 10)]
    pub hydration_timeout: u64,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            path_prefix: self.api_prefix.clone(),
            credential_path: self.credential_file.clone(),
            hydration_timeout: Duration::from_secs(self.hydration_timeout),
        }
    }
}

/// Available commands for the Soiree CLI
///
/// Without a command the current session is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the credential
    Login(LoginArgs),
    /// Create an account
    Register(RegisterArgs),
    /// Forget the stored credential
    Logout,
    /// Show who the stored credential belongs to
    Whoami,
    /// Browse the music catalogue
    #[command(alias = "a")]
    Artists {
        #[command(subcommand)]
        command: ArtistCommands,
    },
    /// Plan events
    #[command(alias = "e")]
    Event {
        #[command(subcommand)]
        command: EventCommands,
    },
}
