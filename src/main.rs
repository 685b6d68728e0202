use anyhow::Result;
use autoblog::application::{
    commands::articles::GenerateArticleCommand,
    ports::{
        generation::TextGenerator,
        time::{Clock, Timer},
    },
    scheduler::DailyScheduler,
    services::ApplicationServices,
};
use autoblog::config::AppConfig;
use autoblog::domain::article::{ArticleReadRepository, ArticleWriteRepository, TopicSelector};
use autoblog::infrastructure::{
    database,
    provider::ChatCompletionsClient,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    time::{SystemClock, TokioTimer},
};
use autoblog::presentation::http::{routes::build_router, state::HttpState};
use clap::{Parser, Subcommand};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::{signal, sync::watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "autoblog", version, about = "Daily AI-generated blog articles")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run migrations, then serve HTTP and the daily scheduler (default).
    Serve,
    /// Apply pending database migrations and exit.
    Migrate,
    /// Insert the welcome articles into an empty database.
    Seed,
    /// Run a single generation cycle and print the stored article.
    Generate {
        #[arg(long)]
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, pool).await,
        Command::Migrate => {
            database::run_migrations(&pool).await?;
            tracing::info!("migration complete");
            Ok(())
        }
        Command::Seed => {
            let services = build_services(&config, pool)?;
            let outcome = services.article_commands.seed_articles().await?;
            println!("{}", serde_json::to_string(&outcome)?);
            Ok(())
        }
        Command::Generate { topic } => {
            let services = build_services(&config, pool)?;
            let article = services
                .article_commands
                .generate_article(GenerateArticleCommand { topic })
                .await?;
            println!("{}", serde_json::to_string_pretty(&article)?);
            Ok(())
        }
    }
}

fn build_services(config: &AppConfig, pool: PgPool) -> Result<Arc<ApplicationServices>> {
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    if config.provider().api_key.is_none() {
        tracing::warn!("HUGGINGFACE_API_KEY is not set; article generation will fail until it is");
    }
    let generator: Arc<dyn TextGenerator> =
        Arc::new(ChatCompletionsClient::new(config.provider().clone())?);

    Ok(Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        generator,
        TopicSelector::default(),
    )))
}

async fn serve(config: &AppConfig, pool: PgPool) -> Result<()> {
    database::run_migrations(&pool).await?;
    let services = build_services(config, pool)?;

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let scheduler_task = if config.scheduler_enabled() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let timer: Arc<dyn Timer> = Arc::new(TokioTimer);
        let scheduler = DailyScheduler::new(
            config.schedule(),
            Arc::clone(&services.article_commands),
            clock,
            timer,
        );
        tracing::info!(
            at = %config.schedule().at(),
            offset = %config.schedule().offset(),
            "article scheduler initialised"
        );
        Some(tokio::spawn(async move {
            scheduler
                .run(async move {
                    let _ = stop_rx.changed().await;
                })
                .await;
        }))
    } else {
        tracing::info!("article scheduler disabled");
        None
    };

    let state = HttpState {
        services: Arc::clone(&services),
    };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = stop_tx.send(true);
    if let Some(task) = scheduler_task {
        task.await?;
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
