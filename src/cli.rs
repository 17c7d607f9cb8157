use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

use crate::responder::DEFAULT_CONTENT_TYPE;

#[derive(Debug, Parser)]
#[command(version, about = "Serves the default error pages of an application")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "FALLBACK_PAGES_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Directory holding `404.html`, `500.html`, `<code>.html`...
    #[arg(long, env = "FALLBACK_PAGES_TEMPLATES", default_value = "./templates")]
    pub templates_dir: PathBuf,

    /// Content type of pages rendered from templates.
    #[arg(long, env = "FALLBACK_PAGES_CONTENT_TYPE", default_value = DEFAULT_CONTENT_TYPE)]
    pub default_content_type: String,

    #[arg(long, env = "FALLBACK_PAGES_TLS_CERT", requires = "tls_key")]
    pub tls_cert: Option<PathBuf>,

    #[arg(long, env = "FALLBACK_PAGES_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}
