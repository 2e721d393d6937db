// ABOUTME: WebSocket route handler for streaming frames into the engine
// ABOUTME: Each inbound message is one frame and each reply is the resulting frame status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Repcount Contributors

//! Frame streaming over WebSocket
//!
//! A connection is one frame stream. Frames are processed strictly in
//! arrival order because the loop awaits each engine call before reading
//! the next message. A malformed message gets an error reply and the
//! stream continues; closing the socket ends the session without touching
//! counters or the schedule.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        ConnectInfo, State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};
use repcount_core::errors::{AppError, ErrorResponse};
use tracing::{debug, info, warn};

use crate::engine::FrameInput;
use crate::logging::AppLogger;
use crate::resources::ServerResources;

/// WebSocket routes implementation
pub struct WebSocketRoutes;

impl WebSocketRoutes {
    /// Create the frame streaming route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ws", get(Self::handle_websocket))
            .with_state(resources)
    }

    /// Upgrade the connection and hand it to the frame loop
    async fn handle_websocket(
        ws: WebSocketUpgrade,
        connect_info: Option<ConnectInfo<SocketAddr>>,
        State(resources): State<Arc<ServerResources>>,
    ) -> impl IntoResponse {
        let peer = connect_info.map_or_else(
            || "unknown".to_owned(),
            |ConnectInfo(addr)| addr.to_string(),
        );
        info!(peer = %peer, "New WebSocket connection request");

        ws.on_upgrade(move |socket: WebSocket| async move {
            debug!("WebSocket upgraded, starting frame stream");
            Self::handle_stream(socket, &resources, &peer).await;
        })
    }

    /// Process frames until the client closes the socket
    async fn handle_stream(socket: WebSocket, resources: &ServerResources, peer: &str) {
        let (mut ws_tx, mut ws_rx) = socket.split();
        let mut frames_processed: u64 = 0;
        AppLogger::log_stream_event(peer, "opened", frames_processed);

        while let Some(message) = ws_rx.next().await {
            let payload = match message {
                Ok(Message::Text(text)) => text.into_bytes(),
                Ok(Message::Binary(bytes)) => bytes,
                Ok(Message::Close(_)) => break,
                Ok(Message::Ping(_) | Message::Pong(_)) => continue,
                Err(e) => {
                    warn!(peer = %peer, error = %e, "WebSocket receive failed");
                    break;
                }
            };

            let reply = Self::process_payload(resources, &payload).await;
            if reply.is_ok() {
                frames_processed += 1;
            }
            let body = match reply {
                Ok(body) | Err(body) => body,
            };

            if let Err(e) = ws_tx.send(Message::Text(body)).await {
                warn!(peer = %peer, error = %e, "Failed to send frame status over WebSocket");
                break;
            }
        }

        AppLogger::log_stream_event(peer, "closed", frames_processed);
    }

    /// Run one payload through the engine; both arms carry the JSON reply
    async fn process_payload(
        resources: &ServerResources,
        payload: &[u8],
    ) -> Result<String, String> {
        let keypoints = serde_json::from_slice::<FrameInput>(payload)
            .map_err(|e| AppError::invalid_input(format!("Invalid frame message: {e}")))
            .and_then(|input| resources.decode_frame(input).map_err(AppError::from));

        match keypoints {
            Ok(keypoints) => {
                let status = resources.engine.process_frame(&keypoints).await;
                serde_json::to_string(&status).map_err(|e| Self::error_body(AppError::from(e)))
            }
            Err(error) => {
                AppLogger::log_rejected_frame("websocket", &error.message);
                Err(Self::error_body(error))
            }
        }
    }

    fn error_body(error: AppError) -> String {
        serde_json::to_string(&ErrorResponse::from(error)).unwrap_or_else(|_| {
            r#"{"code":"INTERNAL_ERROR","message":"Failed to encode error"}"#.to_owned()
        })
    }
}
