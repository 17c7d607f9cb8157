use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum_server::tls_rustls::RustlsConfig;
use clap::Parser;
use fallback_pages::{
    cli::Cli, create_app, demo_routes, AppState, ErrorResponder, ErrorTemplates, ReasonPhrases,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let default_content_type = HeaderValue::from_str(&cli.default_content_type)
        .context("invalid default content type")?;

    let responder = ErrorResponder::new(
        ErrorTemplates::from_dir(&cli.templates_dir),
        ReasonPhrases::default(),
    )
    .with_default_content_type(default_content_type);

    let app = create_app(AppState::new(responder), demo_routes());

    tracing::info!(
        "listening on {}, templates from {}",
        cli.listen,
        cli.templates_dir.display()
    );

    match (cli.tls_cert, cli.tls_key) {
        (Some(cert), Some(key)) => {
            let config = RustlsConfig::from_pem_file(cert, key).await?;

            axum_server::bind_rustls(cli.listen, config)
                .serve(app.into_make_service())
                .await?;
        }
        _ => {
            axum_server::bind(cli.listen)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
