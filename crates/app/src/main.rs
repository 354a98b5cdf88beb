use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use services::{
    DashboardView, ProgressService, QuestionBank, QuestionView, RemoteCatalog, ResultOutbox,
    ResultView, SessionWorkflow, VideoCatalog,
};
use storage::repository::{PendingSyncRepository as _, Storage};
use study_core::Clock;
use study_core::model::{SessionType, SubjectKey};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSubject { raw: String },
    InvalidSessionType { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSubject { raw } => write!(f, "invalid --subject value: {raw}"),
            ArgsError::InvalidSessionType { raw } => write!(f, "invalid --type value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- stats [--db <sqlite_url>]");
    eprintln!(
        "  cargo run -p app -- demo  [--db <sqlite_url>] [--remote <url>] \
         [--type quick|medium|full] [--subject <key>]..."
    );
    eprintln!("  cargo run -p app -- videos [--remote <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:study.sqlite3?mode=rwc");
    eprintln!("  --type quick");
    eprintln!("  --subject portugues");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  STUDY_DB_URL, STUDY_REMOTE_URL");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Stats,
    Demo,
    Videos,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "stats" => Some(Self::Stats),
            "demo" => Some(Self::Demo),
            "videos" => Some(Self::Videos),
            _ => None,
        }
    }
}

struct Args {
    db_url: String,
    remote_url: Option<String>,
    session_type: SessionType,
    subjects: Vec<SubjectKey>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("STUDY_DB_URL")
            .unwrap_or_else(|_| "sqlite:study.sqlite3?mode=rwc".into());
        let mut remote_url = std::env::var("STUDY_REMOTE_URL").ok();
        let mut session_type = SessionType::Quick;
        let mut subjects = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--remote" => {
                    remote_url = Some(require_value(args, "--remote")?);
                }
                "--type" => {
                    let value = require_value(args, "--type")?;
                    session_type = match value.as_str() {
                        "quick" => SessionType::Quick,
                        "medium" => SessionType::Medium,
                        "full" => SessionType::Full,
                        _ => return Err(ArgsError::InvalidSessionType { raw: value }),
                    };
                }
                "--subject" => {
                    let value = require_value(args, "--subject")?;
                    let subject = SubjectKey::from_str(&value)
                        .map_err(|_| ArgsError::InvalidSubject { raw: value })?;
                    subjects.push(subject);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if subjects.is_empty() {
            subjects.push(SubjectKey::Portugues);
        }

        Ok(Self {
            db_url,
            remote_url,
            session_type,
            subjects,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: show the dashboard when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Stats,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Stats,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // The video catalog is read-only; no store needed.
    if cmd == Command::Videos {
        return show_videos(&args).await;
    }

    let storage = Storage::sqlite(&args.db_url).await?;
    let clock = Clock::default_clock();
    let progress = Arc::new(ProgressService::load(Arc::clone(&storage.progress)).await?);

    match cmd {
        Command::Stats => show_stats(&clock, &progress, &storage).await,
        Command::Demo => run_demo(clock, progress, storage, &args).await,
        Command::Videos => unreachable!("handled above"),
    }
}

async fn show_videos(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match &args.remote_url {
        Some(url) => RemoteCatalog::new(url)?.fetch_videos_or_builtin().await,
        None => VideoCatalog::builtin(),
    };

    println!("Videoaulas disponíveis ({}):", catalog.len());
    for (subject, count) in catalog.subject_counts() {
        println!();
        println!("{} ({count}):", subject.display_name());
        for video in catalog.videos_for(subject) {
            let secs = video.duration_seconds();
            println!("  [{:02}:{:02}] {}", secs / 60, secs % 60, video.title());
            println!("          {}", video.url());
        }
    }

    Ok(())
}

async fn show_stats(
    clock: &Clock,
    progress: &ProgressService,
    storage: &Storage,
) -> Result<(), Box<dyn std::error::Error>> {
    let streak = progress.update_streak(clock).await;
    let view = DashboardView::from_state(&progress.snapshot());

    println!("Sequência de estudos: {streak} dia(s)");
    println!(
        "Questões respondidas: {} ({} corretas, {}% de acerto)",
        view.questions_answered, view.correct_answers, view.accuracy
    );
    println!("Simulados realizados: {}", view.sessions_taken);
    println!("Sessões de foco: {}", view.focus_sessions);

    if !view.subject_averages.is_empty() {
        println!();
        println!("Média por matéria:");
        for avg in &view.subject_averages {
            println!(
                "  {:<28} {:>3}%  ({} simulado(s))",
                avg.subject.display_name(),
                avg.average_percentage,
                avg.sessions
            );
        }
    }

    if !view.recent_activities.is_empty() {
        println!();
        println!("Atividades recentes:");
        for entry in view.recent_activities.iter().take(5) {
            println!("  {}  {}", entry.title, entry.detail);
        }
    }

    let pending = storage.pending.len().await?;
    if pending > 0 {
        println!();
        println!("{pending} resultado(s) aguardando sincronização.");
    }

    Ok(())
}

/// Scripted session run: answers most questions correctly, gets a couple
/// wrong, and leaves one open, so the whole pipeline is exercised.
async fn run_demo(
    clock: Clock,
    progress: Arc<ProgressService>,
    storage: Storage,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let bank = match &args.remote_url {
        Some(url) => RemoteCatalog::new(url)?.fetch_bank_or_builtin().await,
        None => QuestionBank::builtin(),
    };

    let outbox = match &args.remote_url {
        Some(url) => ResultOutbox::new(url, Arc::clone(&storage.pending))?,
        None => ResultOutbox::offline(Arc::clone(&storage.pending)),
    };

    let workflow = SessionWorkflow::new(clock, bank, progress, outbox);
    let mut session = workflow.start(args.session_type, args.subjects.iter().copied())?;

    let first = QuestionView::from_session(&session);
    println!(
        "{} — {} questões, limite sugerido de {} min",
        args.session_type.display_name(),
        first.total,
        args.session_type.time_limit_minutes()
    );
    println!();
    println!("Questão {}/{} ({})", first.number, first.total, first.subject);
    println!("{}", first.prompt);
    for option in &first.options {
        println!("  {}) {}", option.letter, option.text);
    }

    let total = session.plan().len();
    for i in 0..total.saturating_sub(1) {
        session.go_to_position(i)?;
        let answer = if i % 4 == 3 {
            // A deliberate miss now and then keeps the score realistic.
            let len = session.current_question().options().len();
            (session.current_question().correct_option() + 1) % len
        } else {
            session.current_question().correct_option()
        };
        session.select_answer(answer)?;
    }

    let result = workflow.finish(&mut session).await?;
    let view = ResultView::from_result(&result);

    println!();
    println!("{}: {}", view.session_name, view.headline);
    println!(
        "  {} certas, {} erradas, {} em branco — {}% em {}",
        view.correct, view.wrong, view.unanswered, view.percentage, view.elapsed
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
