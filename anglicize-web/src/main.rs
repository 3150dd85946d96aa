//! Servidor web Axum com WebSocket para transliteração interativa

mod config;

use anglicize_core::{
    changed_words, character_map,
    samples::{demo_texts, REFERENCE_TEXT},
    transliterate, transliterate_batch, transliterate_with_report, Substitution, WordChange,
};
use axum::{
    extract::{
        rejection::JsonRejection,
        ws::{Message, WebSocket, WebSocketUpgrade},
        DefaultBodyLimit, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Estado compartilhado da aplicação
struct AppState {
    config: ServerConfig,
}

#[derive(Deserialize)]
struct TransliterateRequest {
    text: String,
}

#[derive(Deserialize)]
struct BatchRequest {
    texts: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct TransliterateResponse {
    original: String,
    anglicized: String,
    substitutions: Vec<Substitution>,
    changed_words: Vec<WordChange>,
    expansions: usize,
    processing_us: u64,
}

#[derive(Serialize, Deserialize)]
struct BatchResponse {
    results: Vec<String>,
    total: usize,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    info!("Texto original:   {}", REFERENCE_TEXT);
    info!("Texto modificado: {}", transliterate(REFERENCE_TEXT));

    let addr = config.addr.clone();
    let app = app(Arc::new(AppState { config }));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Servidor de transliteração iniciado em http://{}", addr);
    axum::serve(listener, app).await
}

fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // O limite padrão do axum (2 MiB) cortaria textos que a configuração permite
    let text_body_limit = DefaultBodyLimit::max(state.config.text_body_limit());
    let batch_body_limit = DefaultBodyLimit::max(state.config.batch_body_limit());

    Router::new()
        .route("/", get(index_handler))
        .route("/transliterate", post(transliterate_handler).layer(text_body_limit))
        .route("/transliterate/batch", post(batch_handler).layer(batch_body_limit))
        .route("/rules", get(rules_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn too_large_message(limit: usize) -> String {
    format!("Texto excede o limite de {} bytes", limit)
}

fn too_large(limit: usize) -> Response {
    error_response(StatusCode::PAYLOAD_TOO_LARGE, too_large_message(limit))
}

/// Corpo inválido ou grande demais também responde com `{ "error": ... }`
fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Requisição rejeitada: {}", rejection.body_text());
    error_response(rejection.status(), rejection.body_text())
}

/// Executa a transliteração com relatório completo
fn build_response(text: &str) -> TransliterateResponse {
    let start = std::time::Instant::now();
    let report = transliterate_with_report(text);
    let changed = changed_words(text);
    let expansions = report.expansion_count();

    TransliterateResponse {
        original: report.original,
        anglicized: report.anglicized,
        substitutions: report.substitutions,
        changed_words: changed,
        expansions,
        processing_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
    }
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Transliteração via HTTP POST. Texto vazio é válido e resulta em texto vazio.
async fn transliterate_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<TransliterateRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    let limit = state.config.max_text_bytes;
    if req.text.len() > limit {
        warn!("Texto rejeitado: {} bytes (limite {})", req.text.len(), limit);
        return too_large(limit);
    }

    debug!("Transliterando {} chars", req.text.chars().count());
    Json(build_response(&req.text)).into_response()
}

/// Transliteração de vários textos em paralelo (Rayon em thread bloqueante)
async fn batch_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(json) => json,
        Err(rejection) => return rejection_response(rejection),
    };

    if req.texts.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Lista de textos vazia");
    }

    let max_texts = state.config.max_batch_texts;
    if req.texts.len() > max_texts {
        return error_response(
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Lote excede o limite de {} textos", max_texts),
        );
    }

    let limit = state.config.max_text_bytes;
    if req.texts.iter().any(|t| t.len() > limit) {
        return too_large(limit);
    }

    let total = req.texts.len();
    info!("Lote recebido: {} textos", total);

    // Rayon é síncrono: roda fora do runtime para não bloqueá-lo
    match tokio::task::spawn_blocking(move || transliterate_batch(&req.texts)).await {
        Ok(results) => Json(BatchResponse { results, total }).into_response(),
        Err(err) => {
            warn!("Falha no processamento do lote: {}", err);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Falha no processamento do lote")
        }
    }
}

/// Retorna a tabela de mapeamento na ordem de aplicação
async fn rules_handler() -> impl IntoResponse {
    Json(character_map())
}

/// Retorna textos de demonstração com suas versões transliteradas
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(label, text)| {
            serde_json::json!({
                "label": label,
                "text": text,
                "anglicized": transliterate(text),
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Resposta a um frame de texto do WebSocket.
///
/// O frame pode ser JSON `{"text": ...}` ou o próprio texto puro.
fn ws_reply(frame: &str, limit: usize) -> String {
    let text = match serde_json::from_str::<TransliterateRequest>(frame) {
        Ok(req) => req.text,
        Err(_) => frame.to_string(),
    };

    if text.len() > limit {
        return serde_json::json!({ "error": too_large_message(limit) }).to_string();
    }

    debug!("Transliterando via WebSocket: {} chars", text.chars().count());
    serde_json::to_string(&build_response(&text)).unwrap_or_else(|err| {
        warn!("Falha ao serializar resposta: {}", err);
        serde_json::json!({ "error": "Falha ao serializar resposta" }).to_string()
    })
}

/// O que fazer com cada mensagem recebida pelo WebSocket
enum WsAction {
    Send(Message),
    Close,
    Ignore,
}

fn ws_action(msg: Message, limit: usize) -> WsAction {
    match msg {
        Message::Text(text) => WsAction::Send(Message::Text(ws_reply(&text, limit).into())),
        Message::Ping(payload) => WsAction::Send(Message::Pong(payload)),
        Message::Close(_) => WsAction::Close,
        _ => WsAction::Ignore,
    }
}

/// Lógica do WebSocket: cada mensagem de texto recebe o resultado da transliteração
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");
    let limit = state.config.max_text_bytes;

    while let Some(Ok(msg)) = socket.recv().await {
        match ws_action(msg, limit) {
            WsAction::Send(reply) => {
                if socket.send(reply).await.is_err() {
                    return; // cliente desconectou
                }
            }
            WsAction::Close => {
                info!("WebSocket desconectado");
                return;
            }
            WsAction::Ignore => {}
        }
    }
}
