/*
[INPUT]:  Scripted JSON replies for sequential connections
[OUTPUT]: In-process mock exchange URL and captured request stream
[POS]:    Client layer - test support (ws analogue of an HTTP mock server)
[UPDATE]: When client tests need different mock exchange behavior
*/

use std::sync::mpsc::{channel, Receiver};

use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message as WsMessage;

/// Spawn a mock exchange that serves one scripted reply per connection.
///
/// The client opens a fresh connection per call, so the server accepts
/// connections sequentially, captures the first text frame of each, and
/// answers with the next reply from the script. Captured requests arrive
/// on the returned channel in call order.
pub(crate) fn spawn_mock_exchange(replies: Vec<Value>) -> (String, Receiver<Value>) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async move {
            listener.set_nonblocking(true).unwrap();
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();

            for reply in replies {
                let (stream, _) = listener.accept().await.unwrap();
                let mut ws = accept_async(stream).await.unwrap();

                while let Some(Ok(frame)) = ws.next().await {
                    if let WsMessage::Text(text) = frame {
                        let received: Value = serde_json::from_str(text.as_str()).unwrap();
                        tx.send(received).unwrap();

                        ws.send(WsMessage::Text(reply.to_string().into()))
                            .await
                            .unwrap();
                        let _ = ws.close(None).await;
                        break;
                    }
                }
            }
        });
    });

    (format!("ws://{addr}"), rx)
}

/// Successful `public/auth` reply with the given token pair
pub(crate) fn auth_reply(access_token: &str, refresh_token: &str) -> Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": {
            "access_token": access_token,
            "refresh_token": refresh_token,
            "expires_in": 900,
            "scope": "session:mysessionname trade:read_write",
            "token_type": "bearer"
        }
    })
}
