//! CLI frontend for the tymora luck-roll engine.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tymora",
    about = "tymora — luck rolls for the whole table",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll luck for every player character in a scene
    Roll {
        /// Scene file to roll from
        #[arg(short, long, default_value = "scene.json")]
        scene: PathBuf,

        /// Ability whose modifier feeds the roll
        #[arg(short, long, default_value = tymora_roster::DEFAULT_ABILITY)]
        ability: String,

        /// RNG seed for reproducible rolls (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: table, html, json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the actors in a scene with their scores and modifiers
    List {
        /// Scene file to read
        #[arg(short, long, default_value = "scene.json")]
        scene: PathBuf,

        /// Ability whose score and modifier to show
        #[arg(short, long, default_value = tymora_roster::DEFAULT_ABILITY)]
        ability: String,
    },

    /// Create a starter scene file
    Init {
        /// Name of the scene to create
        name: String,

        /// Scene file to write
        #[arg(short, long, default_value = "scene.json")]
        scene: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            scene,
            ability,
            seed,
            format,
            output,
        } => commands::roll::run(&scene, &ability, seed, &format, output.as_deref()),
        Commands::List { scene, ability } => commands::list::run(&scene, &ability),
        Commands::Init { name, scene } => commands::init::run(&name, &scene),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
