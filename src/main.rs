use homeloan::error::ApiError;
use std::env;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: homeloan simulate [flags] | homeloan serve [port]";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homeloan=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = homeloan::api::run_http_server(port).await {
                tracing::error!(error = %e, "server error");
                std::process::exit(1);
            }
        }
        Some("simulate") => {
            let args = raw_args.iter().skip(1).cloned();
            match homeloan::api::run_cli(args) {
                Ok(output) => print!("{output}"),
                // clap prints help/version to stdout with status 0, usage errors to stderr with 2.
                Err(ApiError::Cli(e)) => e.exit(),
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    }
}
