use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use airport_ops::api::api::api_service;
use airport_ops::api::structs::api_service_data::ApiServiceData;
use airport_ops::config::structs::configuration::Configuration;
use airport_ops::context::structs::data_context::DataContext;
use airport_ops::logging::setup_logging;
use airport_ops::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let context = match DataContext::new(config.clone()).await {
                Ok(context) => Arc::new(context),
                Err(error) => {
                    error!("[BOOT] {}", error);
                    sentry::capture_message(&format!("[BOOT] {error}"), sentry::Level::Fatal);
                    exit(1);
                }
            };

            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);

            let mut api_handle = None;
            if config.api_server.enabled {
                let address: SocketAddr = match config.api_server.bind_address.parse() {
                    Ok(address) => address,
                    Err(error) => {
                        error!("[API] Invalid bind address {}: {}", config.api_server.bind_address, error);
                        exit(1);
                    }
                };
                let data = Arc::new(ApiServiceData { context: context.clone() });
                match api_service(
                    address,
                    data,
                    config.api_server.keep_alive,
                    config.api_server.request_timeout,
                    config.api_server.disconnect_timeout,
                    config.api_server.threads
                ).await {
                    Ok((handle, future)) => {
                        tokio::spawn(async move {
                            if let Err(error) = future.await {
                                error!("[API] Server stopped: {}", error);
                            }
                        });
                        api_handle = Some(handle);
                    }
                    Err(error) => {
                        error!("[API] Unable to bind {}: {}", address, error);
                        exit(1);
                    }
                }
            }

            let console_interval = config.log_console_interval;
            if console_interval > 0 {
                info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
                let stats_context = context.clone();
                let mut stats_shutdown = shutdown_rx.clone();
                tokio::spawn(async move {
                    let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                    loop {
                        tokio::select! {
                            _ = interval.tick() => {
                                let stats = stats_context.cache().get_cache_stats();
                                info!(
                                    "[STATS CACHE] Hits: {} - Misses: {} - Total: {} - Sets: {} - Invalidations: {} - Size: {} | Hit rate: {:.2}% - Miss rate: {:.2}%",
                                    stats.hits, stats.misses, stats.total_queries, stats.sets, stats.invalidations,
                                    stats.cache_size, stats.hit_rate, stats.miss_rate
                                );
                                for pool in stats_context.database().pool_status() {
                                    info!(
                                        "[STATS DATABASE] {} ({}): Size: {} - Idle: {} - Min: {} - Max: {}",
                                        pool.target, pool.driver, pool.size, pool.idle, pool.min, pool.max
                                    );
                                }
                            }
                            _ = stats_shutdown.changed() => {
                                info!("[BOOT] Shutting down thread for console updates...");
                                return;
                            }
                        }
                    }
                });
            }

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("[BOOT] Unable to listen for the shutdown signal: {}", error);
            }
            info!("Shutdown request received, shutting down...");
            let _ = shutdown_tx.send(true);
            if let Some(handle) = api_handle {
                handle.stop(true).await;
            }
            context.shutdown().await;
            info!("Server shutting down completed");
            Ok(())
        })
}
