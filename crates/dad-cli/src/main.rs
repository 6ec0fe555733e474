//! CLI frontend for the Dadlands draw engine.

mod campaign;
mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dad",
    about = "Dadlands — a token-draw table runner for dads after the end of the world",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new campaign file
    New {
        /// Campaign name
        name: String,

        /// Campaign file to create
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Add a dad to the roster
    Add {
        /// Character name
        name: String,

        /// Clan the character belongs to
        #[arg(short, long, default_value = "")]
        clan: String,

        /// Short biography
        #[arg(short, long, default_value = "")]
        bio: String,

        /// Starting Law tokens
        #[arg(long, default_value = "4")]
        law: u32,

        /// Starting Chaos tokens
        #[arg(long, default_value = "3")]
        chaos: u32,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Teach a character a special move
    Learn {
        /// Character name
        character: String,

        /// Move name
        name: String,

        /// Approach the move draws on: law or chaos
        #[arg(default_value = "law")]
        approach: String,

        /// What the move looks like at the table
        #[arg(short, long, default_value = "")]
        description: String,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Add an item to a character's gear
    Pack {
        /// Character name
        character: String,

        /// Item name
        item: String,

        /// How many
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Weight per item
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Set one side of a character's token pool
    Set {
        /// Character name
        character: String,

        /// Token kind: law or chaos
        kind: String,

        /// New count
        count: u32,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// List the dads in the campaign
    Roster {
        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Show a character sheet
    Show {
        /// Character name (case-insensitive)
        name: String,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Resolve a move for a character
    Move {
        /// Character name
        character: String,

        /// Approach: law or chaos
        approach: String,

        /// Number of tokens to draw
        difficulty: u32,

        #[command(flatten)]
        resolve: commands::ResolveArgs,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Resolve one of a character's special moves
    Use {
        /// Character name
        character: String,

        /// Special move name (case-insensitive)
        name: String,

        /// Number of tokens to draw
        difficulty: u32,

        #[command(flatten)]
        resolve: commands::ResolveArgs,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Run an interactive table session
    Play {
        /// RNG seed for a reproducible session
        #[arg(short, long)]
        seed: Option<u64>,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },

    /// Export the campaign move log
    Export {
        /// Output format: json, markdown, text
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Campaign file
        #[arg(short, long, default_value = "campaign.json")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { name, file } => commands::new::run(&name, &file),
        Commands::Add {
            name,
            clan,
            bio,
            law,
            chaos,
            file,
        } => commands::add::run(&name, &clan, &bio, law, chaos, &file),
        Commands::Learn {
            character,
            name,
            approach,
            description,
            file,
        } => commands::learn::run(&character, &name, &approach, &description, &file),
        Commands::Pack {
            character,
            item,
            quantity,
            weight,
            file,
        } => commands::pack::run(&character, &item, quantity, weight, &file),
        Commands::Set {
            character,
            kind,
            count,
            file,
        } => commands::set::run(&character, &kind, count, &file),
        Commands::Roster { file } => commands::roster::run(&file),
        Commands::Show { name, file } => commands::show::run(&name, &file),
        Commands::Move {
            character,
            approach,
            difficulty,
            resolve,
            file,
        } => commands::make_move::run(&character, &approach, difficulty, &resolve, &file),
        Commands::Use {
            character,
            name,
            difficulty,
            resolve,
            file,
        } => commands::use_move::run(&character, &name, difficulty, &resolve, &file),
        Commands::Play { seed, file } => commands::play::run(seed, &file),
        Commands::Export {
            format,
            output,
            file,
        } => commands::export::run(&format, output.as_deref(), &file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
