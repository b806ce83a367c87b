use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jira_mcp::config::{self, JiraConfig};
use jira_mcp::jira::JiraClient;
use jira_mcp::mcp;

#[derive(Parser)]
#[command(name = "jira-mcp")]
#[command(about = "Read-only Jira tools over MCP (stdio or SSE)")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP/SSE transport
    Serve {
        /// Port for the SSE endpoint (falls back to HTTP_PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Start MCP server via stdio (for editor/CLI integration)
    Mcp,
}

/// Initialize tracing with output to stderr (for MCP mode) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "jira_mcp=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // MCP mode: log to stderr so stdout is clean for protocol
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // MCP mode needs stderr for logging since stdout is the protocol channel
    let use_stderr = matches!(cli.command, Some(Commands::Mcp));
    init_tracing(use_stderr);

    let jira = JiraClient::new(JiraConfig::from_env()?);

    match cli.command {
        Some(Commands::Mcp) => {
            mcp::run_stdio_server(jira).await?;
        }
        Some(Commands::Serve { port }) => {
            let port = port
                .or_else(config::http_port_from_env)
                .unwrap_or(config::DEFAULT_HTTP_PORT);
            mcp::run_sse_server(jira, port).await?;
        }
        None => {
            // Default: SSE transport on the configured port
            let port = config::http_port_from_env().unwrap_or(config::DEFAULT_HTTP_PORT);
            mcp::run_sse_server(jira, port).await?;
        }
    }

    Ok(())
}
