use hickory_server::ServerFuture;
use reverse_dns_domain::config::ServerConfig;
use reverse_dns_infrastructure::dns::DnsServerHandler;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// Serves UDP and TCP on the configured address until `shutdown` resolves.
pub async fn start_dns_server(
    config: &ServerConfig,
    handler: DnsServerHandler,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr =
        format!("{}:{}", config.bind_address, config.dns_port).parse()?;

    let mut server = ServerFuture::new(handler);
    server.register_socket(UdpSocket::bind(socket_addr).await?);
    server.register_listener(
        TcpListener::bind(socket_addr).await?,
        Duration::from_secs(config.tcp_timeout),
    );

    info!(bind_address = %socket_addr, "DNS server ready");

    tokio::select! {
        result = server.block_until_done() => {
            result?;
        }
        _ = shutdown => {
            info!("Shutdown signal received, stopping DNS server");
        }
    }

    Ok(())
}
