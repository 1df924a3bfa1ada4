use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

mod error;
mod handlers;
mod routes;

use crate::error::ServerError;

const DEFAULT_PORT: u16 = 3000;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory holding index.html, the wasm bundle and image assets.
    #[arg(long)]
    public_dir: Option<PathBuf>,
    /// Listen port. Falls back to $PORT, then 3000.
    #[arg(long)]
    port: Option<u16>,
}

fn resolve_port(flag: Option<u16>, env: Option<String>) -> u16 {
    flag.or_else(|| env.and_then(|value| value.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

fn resolve_public_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
}

async fn serve(args: Args) -> Result<(), ServerError> {
    let public_dir = resolve_public_dir(args.public_dir);
    if !public_dir.join("index.html").is_file() {
        tracing::warn!(dir = %public_dir.display(), "public dir has no index.html");
    }
    let port = resolve_port(args.port, std::env::var("PORT").ok());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    tracing::info!(%port, dir = %public_dir.display(), "board running at http://localhost:{port}");
    axum::serve(listener, routes::app(public_dir))
        .await
        .map_err(ServerError::Serve)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = serve(Args::parse()).await {
        tracing::error!(error = %err, "server stopped");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_flag_wins() {
        assert_eq!(resolve_port(Some(8080), Some("9090".into())), 8080);
    }

    #[test]
    fn port_falls_back_to_env() {
        assert_eq!(resolve_port(None, Some("9090".into())), 9090);
    }

    #[test]
    fn bad_env_port_uses_default() {
        assert_eq!(resolve_port(None, Some("http".into())), DEFAULT_PORT);
        assert_eq!(resolve_port(None, None), DEFAULT_PORT);
    }

    #[test]
    fn public_dir_defaults_next_to_the_workspace() {
        let dir = resolve_public_dir(None);
        assert!(dir.ends_with("public"));
        assert_eq!(
            resolve_public_dir(Some(PathBuf::from("/srv/board"))),
            PathBuf::from("/srv/board")
        );
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from(["skwibbew_server", "--port", "4000", "--public-dir", "site"]);
        assert_eq!(args.port, Some(4000));
        assert_eq!(args.public_dir, Some(PathBuf::from("site")));
    }
}
