use std::io;

use clap::{ArgAction, Parser};
use log::LevelFilter;
use mazecore::{algorithms::GeneratorKind, AlgorithmChoice, MazeSize};
use mazerace::{
    app::{self, AppError, RunConfig},
    logging,
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazerace")]
struct Args {
    #[clap(short, long, help = "Maze size preset: small, medium or large")]
    size: Option<MazeSize>,
    #[clap(long, requires = "cols", help = "Number of rows, overrides the size preset")]
    rows: Option<usize>,
    #[clap(long, requires = "rows", help = "Number of columns, overrides the size preset")]
    cols: Option<usize>,
    #[clap(short, long, help = "bfs, dfs, dijkstra, astar or compare")]
    algorithm: Option<AlgorithmChoice>,
    #[clap(short, long, help = "Maze generator: backtracker or kruskals")]
    generator: Option<GeneratorKind>,
    #[clap(long, help = "Seed for the maze and the endpoints")]
    seed: Option<u64>,
    #[clap(long, action, help = "Print the maze with the found path")]
    show: bool,
    #[clap(short, long, action = ArgAction::Count, help = "More logging, repeat for even more")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
}

fn verbosity(count: u8, configured: LevelFilter) -> LevelFilter {
    let requested = match count {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    requested.max(configured)
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(LevelFilter::Warn);

    if args.reset_config {
        Settings::reset_config(&Settings::default_path()?)?;
        return Ok(());
    }

    if args.show_config_path {
        println!("{}", Settings::default_path()?.display());
        return Ok(());
    }

    better_panic::install();

    let mut settings = match Settings::default_path() {
        Ok(path) => Settings::load(&path)?,
        Err(err) => {
            log::warn!("{}, using default settings", err);
            Settings::default()
        }
    };

    if let Some(size) = args.size {
        settings = settings.set_size(size);
    }
    if let Some(algorithm) = args.algorithm {
        settings = settings.set_algorithm(algorithm);
    }
    if let Some(generator) = args.generator {
        settings = settings.set_generator(generator);
    }
    if args.show {
        settings = settings.set_show_maze(true);
    }

    logging::init(verbosity(args.verbose, settings.get_log_level()));

    let dims = args.rows.zip(args.cols);
    let config = RunConfig::from_settings(&settings, dims, args.seed);
    app::run(&config, &mut io::stdout().lock())
}
