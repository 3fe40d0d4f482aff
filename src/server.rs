//! HTTP chat endpoint.
//!
//! A small synchronous server answering POSTed chat messages with the
//! responder's canned replies. Anything that is not a well-formed chat POST
//! gets a plain "ok" so probes and health checks never see an error.

use std::io;
use std::io::Read;

use tiny_http::{Method, Response, Server};

use crate::responder::classify_match;

pub(crate) fn parse_json_body(request: &mut tiny_http::Request) -> Result<serde_json::Value, String> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|e| format!("read body: {e}"))?;
    if body.trim().is_empty() {
        return Ok(serde_json::json!({}));
    }
    serde_json::from_str(&body).map_err(|e| format!("json: {e}"))
}

/// Pull the utterance out of a chat payload. Accepts `text` (our own shape)
/// or `message` (what the dashboard widget sends), trimmed; empty input is
/// treated as absent, mirroring the widget's submit handler.
pub(crate) fn extract_chat_text(payload: &serde_json::Value) -> Option<String> {
    let raw = payload
        .get("text")
        .and_then(|v| v.as_str())
        .or_else(|| payload.get("message").and_then(|v| v.as_str()))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

/// Build the JSON reply for one utterance.
pub(crate) fn chat_reply(text: &str) -> String {
    let matched = classify_match(text);
    serde_json::json!({
        "topic": matched.topic,
        "reply": matched.response,
    })
    .to_string()
}

pub(crate) fn run_chat_server(bind: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{bind}:{port}");
    let server = Server::http(&addr)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("server: {e}")))?;
    eprintln!("stationbot listening on http://{addr}");

    for mut request in server.incoming_requests() {
        if *request.method() != Method::Post {
            let _ = request.respond(Response::from_string("ok"));
            continue;
        }
        let payload = parse_json_body(&mut request).unwrap_or_else(|_| serde_json::json!({}));
        let Some(text) = extract_chat_text(&payload) else {
            let _ = request.respond(Response::from_string("ok"));
            continue;
        };
        eprintln!("chat: {} chars in, topic {}", text.len(), classify_match(&text).topic);
        let _ = request.respond(Response::from_string(chat_reply(&text)));
    }
    Ok(())
}
