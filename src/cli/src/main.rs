#![warn(clippy::pedantic)]

mod config;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use config::CubeConfig;
use cube_core::{
    Color, Cube, FaceletIndexer, MoveKind, MoveTable, State, UnfoldedNet,
    notation::{compose_moves, invert_moves},
};
use itertools::Itertools;
use log::{LevelFilter, debug};
use owo_colors::OwoColorize;

/// Turn N×N×N cubes and print their facelets
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Defaults for the size and scrambles, in TOML format
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Number of layers per side; overrides the config file
    #[arg(long, short = 'n', global = true)]
    size: Option<usize>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the facelet numbering, face numbers and face letters of the net
    Definition,
    /// Apply a move string to a solved cube and print the result
    Apply {
        /// The move string, e.g. "R U' 2Fw2"
        moves: String,
        /// Print the cube after every move
        #[arg(long)]
        steps: bool,
        /// Also print the composed permutation
        #[arg(long)]
        permutation: bool,
    },
    /// Scramble a solved cube with a reproducible random move string
    Scramble {
        /// Number of moves; overrides the config file
        #[arg(long)]
        count: Option<usize>,
        /// Random seed; overrides the config file
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the move string that undoes the given one
    Invert {
        /// The move string to undo
        moves: String,
    },
    /// List the moves available for the cube size
    Moves {
        /// Only list one kind of move
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum KindArg {
    Outer,
    Inner,
    Block,
    Rotation,
}

impl From<KindArg> for MoveKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Outer => MoveKind::Outer,
            KindArg::Inner => MoveKind::Inner,
            KindArg::Block => MoveKind::Block,
            KindArg::Rotation => MoveKind::Rotation,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let config = CubeConfig::load(cli.config.as_deref())?;
    let size = cli.size.unwrap_or(config.size);
    debug!("Using {config:?} with size {size}");

    match cli.command {
        Commands::Definition => print_definition(&FaceletIndexer::new(size)?),
        Commands::Apply {
            moves,
            steps,
            permutation,
        } => {
            let mut cube = Cube::new(size)?;

            if steps {
                let mut before = cube.state().clone();

                for (token, after) in cube.trace(&moves)? {
                    println!("{}", token.bold());
                    print_transition(&before, &after);
                    before = after;
                }
            }

            cube.apply_moves(&moves)?;

            if permutation {
                let composed = compose_moves(cube.table(), &moves)?;
                println!("{}", composed.mapping().iter().join(" "));
            }

            print_state(cube.state());
            print_status(&cube);
        }
        Commands::Scramble { count, seed } => {
            let mut cube = Cube::new(size)?;
            let moves = cube.scramble(
                count.unwrap_or(config.scramble.count),
                seed.unwrap_or(config.scramble.seed),
            )?;

            println!("{moves}");
            print_state(cube.state());
            print_status(&cube);
        }
        Commands::Invert { moves } => println!("{}", invert_moves(&moves)?),
        Commands::Moves { kind } => {
            let table = MoveTable::new(size)?;

            match kind {
                Some(kind) => println!("{}", table.names_of(kind.into()).join(" ")),
                None => println!("{}", table.moves().map(|move_| &move_.name).join(" ")),
            }
        }
    }

    Ok(())
}

fn print_definition(indexer: &FaceletIndexer) {
    let net = UnfoldedNet::new(indexer);
    let width = (indexer.facelet_count() - 1).to_string().len();

    println!("Facelet indices:");
    print!("{}", net.render(width, |i| i.to_string()));
    println!();
    println!("Face numbers:");
    print!("{}", net.render(1, |i| (indexer.face_of(i) as usize).to_string()));
    println!();
    println!("Face letters:");
    print!("{}", net.render(1, |i| indexer.face_letter(i).to_string()));
}

fn colored(color: Color) -> String {
    let letter = color.letter();

    match color {
        Color::White => letter.white().to_string(),
        Color::Yellow => letter.yellow().to_string(),
        Color::Green => letter.green().to_string(),
        Color::Blue => letter.blue().to_string(),
        Color::Red => letter.red().to_string(),
        Color::Orange => letter.truecolor(255, 140, 0).to_string(),
    }
}

fn print_state(state: &State) {
    let net = UnfoldedNet::new(state.indexer());

    print!("{}", net.render(1, |i| colored(state.colors()[i])));
}

fn print_transition(before: &State, after: &State) {
    let net = UnfoldedNet::new(before.indexer());
    let plain = before.to_string();
    let before = net.render(1, |i| colored(before.colors()[i]));
    let after = net.render(1, |i| colored(after.colors()[i]));
    let width = 3 * net.cols();

    for ((left, right), plain) in before.lines().zip(after.lines()).zip(plain.lines()) {
        // Color codes don't take up columns, pad by the uncolored line
        let pad = width.saturating_sub(plain.len());

        println!("{left}{:pad$}  ==>  {right}", "");
    }
    println!();
}

fn print_status(cube: &Cube) {
    let solved = if cube.is_solved() {
        "solved".green().to_string()
    } else {
        "not solved".red().to_string()
    };
    let normalized = if cube.is_corner_normalized() {
        "reference orientation".green().to_string()
    } else {
        "turned away from reference orientation".yellow().to_string()
    };

    println!("{solved}, {normalized}");
}
