use anyhow::Context;
use audito_auth::JwtKeys;
use audito_config::AuditoConfig;
use audito_db::bootstrap::{AdminBootstrap, ensure_default_admin, import_legacy_audits};
use audito_db::service::AuditoService;
use audito_server::AppState;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("audito error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = AuditoConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    if config.auth.uses_dev_secret() {
        warn!("JWT secret is the development default; set JWT_SECRET before deploying");
    }

    let store = AuditoService::open(&config.storage.data_dir).with_context(|| {
        format!(
            "failed to open data directory {}",
            config.storage.data_dir.display()
        )
    })?;

    let imported = import_legacy_audits(&store)
        .await
        .context("failed to import legacy audits")?;
    if imported > 0 {
        info!(imported, "imported legacy audits");
    }

    match ensure_default_admin(&store, &config.admin)
        .await
        .context("failed to bootstrap default admin")?
    {
        AdminBootstrap::Created => info!(email = %config.admin.email, "created default admin"),
        AdminBootstrap::PasswordFilled => info!("set default password on first user"),
        AdminBootstrap::Unchanged => {}
    }

    let keys = JwtKeys::new(&config.auth.jwt_secret, config.auth.token_ttl_hours);
    let state = AppState::new(store, keys, config.server.clone());

    let listener = TcpListener::bind(config.server.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "audito backend listening");

    audito_server::serve(listener, state).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("AUDITO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
