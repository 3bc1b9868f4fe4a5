//! `staffbook` entry point.
//!
//! # Responsibility
//! - Resolve configuration from flags and `STAFFBOOK_*` environment variables.
//! - Initialize logging, open the record store, and serve one variant.
//!
//! Sub-commands:
//! - `serve`: start the HTTP server for `directory` or `skills`.
//! - `migrate`: apply pending schema migrations and exit.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use rusqlite::Connection;
use staffbook_core::db::migrations::{current_version, latest_version};
use staffbook_core::db::{open_db, open_db_in_memory};
use staffbook_http::{router, serve, AppState, Store, Variant};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "staffbook", about = "Employee record REST service", version)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct LoggingArgs {
    /// trace|debug|info|warn|error; defaults to debug in debug builds.
    #[arg(long, global = true, env = "STAFFBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; defaults to `<cwd>/logs`.
    #[arg(long, global = true, env = "STAFFBOOK_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST server.
    Serve {
        #[arg(long, env = "STAFFBOOK_BIND", default_value = "127.0.0.1:8080")]
        bind: String,

        /// Which deployment to serve: directory or skills.
        #[arg(long, env = "STAFFBOOK_VARIANT", default_value = "directory")]
        variant: Variant,

        #[arg(long, env = "STAFFBOOK_DB", default_value = "staffbook.sqlite3")]
        db: PathBuf,

        /// Use an ephemeral in-memory store; `--db` is ignored.
        #[arg(long)]
        in_memory: bool,
    },
    /// Apply pending schema migrations and exit.
    Migrate {
        #[arg(long, env = "STAFFBOOK_DB", default_value = "staffbook.sqlite3")]
        db: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli.logging) {
        eprintln!("staffbook: {err}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Command::Serve {
            bind,
            variant,
            db,
            in_memory,
        } => run_serve(&bind, variant, (!in_memory).then_some(db)).await,
        Command::Migrate { db } => run_migrate(db),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("staffbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &LoggingArgs) -> Result<(), String> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(staffbook_core::default_log_level());
    let log_dir = match args.log_dir.as_ref() {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|err| format!("cannot resolve current directory: {err}"))?
            .join("logs"),
    };
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", log_dir.display()))?
        .to_owned();

    staffbook_core::init_logging(level, &log_dir)
}

async fn run_serve(bind: &str, variant: Variant, db: Option<PathBuf>) -> Result<(), String> {
    let conn = open_store(db.as_deref())?;
    let store = Store::new(conn).map_err(|err| format!("record store not ready: {err}"))?;
    let app = router(variant, AppState::new(store));

    let listener = TcpListener::bind(bind)
        .await
        .map_err(|err| format!("cannot bind `{bind}`: {err}"))?;
    info!(
        "event=serve_start module=cli status=ok variant={variant} core_version={}",
        staffbook_core::core_version()
    );

    serve(listener, app)
        .await
        .map_err(|err| format!("server stopped: {err}"))
}

fn run_migrate(db: PathBuf) -> Result<(), String> {
    let conn = open_store(Some(db.as_path()))?;
    let version = current_version(&conn).map_err(|err| err.to_string())?;
    info!("event=migrate module=cli status=ok version={version}");
    println!(
        "{}: schema version {version} (latest {})",
        db.display(),
        latest_version()
    );
    Ok(())
}

/// Opens the file store at `path`, or an in-memory store when `None`.
fn open_store(path: Option<&Path>) -> Result<Connection, String> {
    let opened = match path {
        Some(path) => open_db(path),
        None => open_db_in_memory(),
    };
    opened.map_err(|err| format!("cannot open record store: {err}"))
}
