mod config;
mod corpus;
mod daily;
mod error;
mod model;
mod search;
mod server;
mod session;
mod surahs;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use guidance_common::client::{GuidanceClient, GuidanceClientConfig};

use config::Config;
use corpus::{ChapterSource, StaticCorpus};
use server::QuranGuidanceServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting quran-guidance MCP server");

    let client_config = GuidanceClientConfig::from_env();
    info!(
        base_url = %client_config.base_url,
        timeout_ms = client_config.timeout.as_millis(),
        "guidance client configured"
    );
    let client = Arc::new(GuidanceClient::new(client_config)?);

    let config = Config::from_env()?;
    info!(
        excluded = ?config.guidance_filter.excluded(),
        empty_query_policy = ?config.empty_query_policy,
        "configuration loaded"
    );

    let corpus: Arc<dyn ChapterSource> = Arc::new(StaticCorpus);
    info!(surahs = corpus.chapters().len(), "surah corpus loaded");

    let tcp_listen_addr = config.tcp_listen_addr.clone();
    let server = QuranGuidanceServer::new(client, corpus, config);

    if let Some(addr) = tcp_listen_addr {
        let listener = TcpListener::bind(&addr).await?;
        info!(listen_addr = %addr, "MCP server ready, serving on TCP");
        loop {
            let (stream, peer) = listener.accept().await?;
            let server = server.for_connection();
            tokio::spawn(async move {
                tracing::info!(peer = %peer, "MCP client connected");
                let service = server.serve(stream).await.inspect_err(|e| {
                    tracing::error!(error = %e, "MCP server error");
                })?;
                service.waiting().await?;
                tracing::info!(peer = %peer, "MCP client disconnected");
                Ok::<(), anyhow::Error>(())
            });
        }
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
