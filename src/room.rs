// author: kodeholic (powered by Claude)
// 코디네이터 인바운드 웹소켓 — 등록된 엔드포인트(ws://.../room)의 실제 수신부

pub mod message;

use axum::{
    extract::{ws::{Message, WebSocket, WebSocketUpgrade}, State},
    response::Response,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::core::RoomIdentity;

// ----------------------------------------------------------------------------
// [공유 상태]
// ----------------------------------------------------------------------------

#[derive(Clone)]
pub struct RoomState {
    pub identity: Arc<RoomIdentity>,
}

// ----------------------------------------------------------------------------
// [WS 진입점]
// ----------------------------------------------------------------------------

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<RoomState>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

// 연결 단위 상태 없음 — 프레임 하나당 응답 하나
async fn handle_socket(socket: WebSocket, state: RoomState) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    if ws_tx.send(Message::Text(message::ack_frame().into())).await.is_err() {
        return;
    }
    debug!("[room] coordinator connected");

    while let Some(Ok(msg)) = ws_rx.next().await {
        let text = match msg {
            Message::Text(t) => t,
            Message::Close(_) => break,
            _ => continue,
        };
        trace!("[room] recv: {}", text.as_str());

        let Some(frame) = message::parse_frame(text.as_str()) else {
            warn!("[room] unparseable frame dropped: {}", text.as_str());
            continue;
        };

        if let Some(reply) = message::respond(&frame, &state.identity) {
            if ws_tx.send(Message::Text(reply.into())).await.is_err() {
                break;
            }
        }
    }

    debug!("[room] coordinator disconnected");
}
