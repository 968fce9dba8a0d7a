use std::{fs, io::ErrorKind, os::unix::fs::FileTypeExt, path::Path};

use anyhow::{Context, Result, bail};
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{UnixListener, UnixStream},
    signal::unix::{SignalKind, signal},
    sync::mpsc,
};

use crate::{
    config::Config,
    protocol::{
        CONTEXT_PARAMETERS, ClientMessage, ServerMessage, WireErrorCode, parse_client_message,
    },
    recommend::{RecommendEngine, RecommendErrorKind},
};

enum ExitReason {
    SocketMessage,
    Signal(&'static str),
}

pub async fn run(config: Config, engine: RecommendEngine) -> Result<()> {
    prepare_socket_path(&config.server.socket_path)?;
    let listener = UnixListener::bind(&config.server.socket_path).with_context(|| {
        format!(
            "unable to bind socket {}",
            config.server.socket_path.display()
        )
    })?;

    let mut sigint =
        signal(SignalKind::interrupt()).context("unable to listen for SIGINT (Ctrl+C)")?;
    let mut sigterm = signal(SignalKind::terminate()).context("unable to listen for SIGTERM")?;
    let (exit_tx, mut exit_rx) = mpsc::unbounded_channel::<()>();

    tracing::info!(
        target: "server",
        socket = %config.server.socket_path.display(),
        catalog_len = engine.catalog().len(),
        "listening"
    );

    let exit_reason = loop {
        tokio::select! {
            _ = sigint.recv() => break ExitReason::Signal("SIGINT"),
            _ = sigterm.recv() => break ExitReason::Signal("SIGTERM"),
            Some(()) = exit_rx.recv() => break ExitReason::SocketMessage,
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, _)) => {
                        let sender = exit_tx.clone();
                        let engine = engine.clone();
                        tokio::spawn(async move {
                            if let Err(err) = handle_client(stream, engine, sender).await {
                                tracing::warn!(target: "server", error = %format!("{err:#}"), "client_handling_failed");
                            }
                        });
                    }
                    Err(err) => {
                        tracing::warn!(target: "server", error = %err, "accept_failed");
                    }
                }
            }
        }
    };

    cleanup_socket_path(&config.server.socket_path)?;
    match exit_reason {
        ExitReason::SocketMessage => {
            tracing::info!(target: "server", "stopped: received exit message");
        }
        ExitReason::Signal(signal_name) => {
            tracing::info!(target: "server", signal = signal_name, "stopped: received signal");
        }
    }

    Ok(())
}

async fn handle_client(
    stream: UnixStream,
    engine: RecommendEngine,
    exit_tx: mpsc::UnboundedSender<()>,
) -> Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match parse_client_message(line) {
            Ok(ClientMessage::Exit) => {
                let _ = exit_tx.send(());
                break;
            }
            Ok(ClientMessage::Recommend { context, limit }) => {
                if context.is_empty() {
                    ServerMessage::missing_context()
                } else {
                    match engine.recommend(&context, limit) {
                        Ok(items) => ServerMessage::Recommendations {
                            context: context.normalized(),
                            count: items.len(),
                            items,
                        },
                        Err(err) => match err.kind {
                            RecommendErrorKind::InvalidRequest => ServerMessage::Error {
                                code: WireErrorCode::InvalidRequest,
                                message: err.message,
                            },
                            RecommendErrorKind::Internal => {
                                tracing::error!(target: "server", error = %err, "recommend_failed");
                                ServerMessage::internal()
                            }
                        },
                    }
                }
            }
            Err(err) => ServerMessage::Error {
                code: WireErrorCode::InvalidRequest,
                message: format!(
                    "malformed request: {err}; accepted parameters: {}, limit",
                    CONTEXT_PARAMETERS.join(", ")
                ),
            },
        };

        let mut payload =
            serde_json::to_string(&response).context("unable to serialize response")?;
        payload.push('\n');
        write_half.write_all(payload.as_bytes()).await?;
    }

    Ok(())
}

fn prepare_socket_path(socket_path: &Path) -> Result<()> {
    match fs::symlink_metadata(socket_path) {
        Ok(metadata) => {
            if metadata.file_type().is_socket() {
                fs::remove_file(socket_path).with_context(|| {
                    format!(
                        "unable to remove stale socket file {}",
                        socket_path.display()
                    )
                })?;
                return Ok(());
            }
            bail!(
                "socket path {} exists and is not a unix socket",
                socket_path.display()
            );
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| {
            format!("unable to inspect socket path {}", socket_path.display())
        }),
    }
}

fn cleanup_socket_path(socket_path: &Path) -> Result<()> {
    match fs::remove_file(socket_path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| {
            format!("unable to remove socket file {}", socket_path.display())
        }),
    }
}
