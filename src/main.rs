use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use quickquiz::{quiz_sets::QuizSetProvider, results::SqliteResultSink, router, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file mapping quiz set names to their questions.
    #[arg(long, env, default_value = "public/womens_day_quiz.json")]
    quiz_file: PathBuf,

    /// SQLite database the result documents are written to.
    #[arg(long, env, default_value = "sqlite://quiz.db?mode=rwc")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,

    /// Send the play cookie with the `Secure` attribute (when served over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,quickquiz=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = AppState::new(
        QuizSetProvider::new(&args.quiz_file),
        Arc::new(SqliteResultSink::new(args.database_url)),
    )
    .with_secure_cookies(args.secure_cookies);

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!(
        "serving quiz sets from {} on {}",
        args.quiz_file.display(),
        listener.local_addr()?
    );
    axum::serve(listener, router(state)).await?;

    Ok(())
}
