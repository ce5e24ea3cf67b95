use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand};
use quiz_master::{
    parse_quiz_definition, quality_report, save_quiz, App, JsonFileStore, Player, QuizError,
    QuizSettings, QuizStore, DEFAULT_STORE_PATH,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file holding every saved quiz
    #[arg(long, env = "QUIZ_STORE", default_value = DEFAULT_STORE_PATH, global = true)]
    store: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "QUIZ_LOG_FILE", global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a quiz from text files and save it under a title
    Create {
        title: String,
        #[command(flatten)]
        source: QuizSource,
    },
    /// List saved quizzes
    List,
    /// Take a saved quiz, or browse all of them when no title is given
    Take {
        title: Option<String>,
        /// Seed for question shuffling
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Take a quiz straight from text files without saving it
    Play {
        #[command(flatten)]
        source: QuizSource,
        /// Seed for question shuffling
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Debug)]
struct QuizSource {
    /// Text file with numbered questions and lettered options
    #[arg(short, long)]
    questions: PathBuf,
    /// Text file with one answer per line
    #[arg(short, long)]
    answers: PathBuf,
    /// Reveal correctness after each answer instead of at the end
    #[arg(long)]
    immediate: bool,
    /// Number of questions per attempt (0 for all)
    #[arg(long, default_value_t = 0)]
    count: usize,
    /// Shuffle question order for each attempt
    #[arg(long)]
    random: bool,
}

impl QuizSource {
    fn settings(&self) -> QuizSettings {
        QuizSettings {
            show_answers_at_end: !self.immediate,
            question_count: self.count,
            random_order: self.random,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_file.as_deref()) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "quiz-master failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_file: Option<&Path>) -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), QuizError> {
    let mut store = JsonFileStore::new(cli.store);

    match cli.command {
        Command::Create { title, source } => {
            let definition = read_definition(&source)?;
            for issue in quality_report(&definition) {
                println!("warning: {}", issue);
            }
            let count = definition.questions.len();
            save_quiz(&mut store, &title, definition)?;
            println!("Saved '{}' with {} questions to {}", title, count, store.path().display());
        }
        Command::List => {
            let library = store.load_all()?;
            if library.is_empty() {
                println!("No quizzes available. Create one to get started!");
            }
            for (title, quiz) in &library {
                println!("{}  ({} questions)", title, quiz.questions.len());
            }
        }
        Command::Take { title, seed } => {
            let mut app = new_app(store.load_all()?, seed);
            if let Some(title) = title {
                app.open_quiz(&title);
            }
            Player::from_app(app).run()?;
        }
        Command::Play { source, seed } => {
            let definition = read_definition(&source)?;
            let mut app = new_app(Default::default(), seed);
            app.open_unsaved("Untitled quiz", definition);
            Player::from_app(app).run()?;
        }
    }

    Ok(())
}

fn new_app(library: quiz_master::QuizLibrary, seed: Option<u64>) -> App {
    match seed {
        Some(seed) => App::with_seed(library, seed),
        None => App::new(library),
    }
}

fn read_definition(source: &QuizSource) -> Result<quiz_master::QuizDefinition, QuizError> {
    let questions = fs::read_to_string(&source.questions)?;
    let answers = fs::read_to_string(&source.answers)?;
    Ok(parse_quiz_definition(&questions, &answers, source.settings()))
}
