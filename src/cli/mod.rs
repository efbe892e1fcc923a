use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "koboldbot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// KoboldAI server URL (defaults to $KOBOLD_ENDPOINT, then http://localhost:5000)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// JSON file with generation parameters
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of tokens to generate (1-512)
    #[arg(long, global = true)]
    pub max_length: Option<u32>,

    #[arg(long, global = true)]
    pub temperature: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a raw prompt to the generation server
    Generate {
        prompt: String,

        /// Stop sequence for this call (repeatable)
        #[arg(short, long)]
        stop: Vec<String>,
    },

    /// Reply to a chat message in the Tensor persona
    Chat {
        input: String,

        /// Conversation so far
        #[arg(long, conflicts_with = "history_file")]
        history: Option<String>,

        /// Read the conversation so far from a file
        #[arg(long)]
        history_file: Option<PathBuf>,

        /// Use the agent template with an observation slot
        #[arg(long)]
        agent: bool,

        /// Tool result placed before the response cue (agent template only)
        #[arg(long, requires = "agent")]
        observation: Option<String>,

        /// Stop sequence for this call (repeatable)
        #[arg(short, long)]
        stop: Vec<String>,
    },

    /// Print a prompt template, or list them all
    Template {
        name: Option<String>,
    },

    /// Print the identifying generation parameters as JSON
    Params,
}
