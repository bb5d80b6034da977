use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::backend::Session;
use crate::tracker::constants::{DEFAULT_API_URL, DEFAULT_WORKOUT_CATALOGUE_URL};

/// HealthTracker — log meals, workouts, and how you slept.
#[derive(Parser, Debug)]
#[command(name = "health_tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Log debug diagnostics (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Where and as whom to save tracked data.
#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// Base URL of the health backend.
    #[arg(long, env = "HEALTH_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// User identifier issued by the backend.
    #[arg(long, env = "HEALTH_USER_ID", global = true)]
    pub user_id: Option<String>,

    /// Session token issued by the backend.
    #[arg(long, env = "HEALTH_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,
}

impl BackendArgs {
    /// A session, if both user id and token were supplied.
    pub fn session(&self) -> Option<Session> {
        match (&self.user_id, &self.token) {
            (Some(user_id), Some(token)) => Some(Session::new(&self.api_url, user_id, token)),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the food table.
    Foods {
        /// Path to a food table JSON file (built-in table if omitted).
        #[arg(short, long)]
        foods: Option<PathBuf>,
    },

    /// Log food portions and see calorie, protein and fat totals.
    Diet {
        /// Path to a food table JSON file (built-in table if omitted).
        #[arg(short, long)]
        foods: Option<PathBuf>,

        /// Write the finished food log to this CSV file.
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Log workouts and see calories burned.
    Fitness {
        /// Workout catalogue: a JSON file path or an http(s) URL.
        #[arg(short, long, default_value = DEFAULT_WORKOUT_CATALOGUE_URL)]
        catalogue: String,

        /// Write the finished workout log to this CSV file.
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Record last night's sleep and today's mood.
    Wellbeing,
}
