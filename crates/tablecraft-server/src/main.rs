use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use tablecraft_config::{load_config, TablecraftConfig};
use tablecraft_core::layout::{arrange, PlacedItem};
use tablecraft_core::provider::{ChatAssistant, ImageRenderer};
use tablecraft_core::types::{ChatMessage, CultureStyle, ImageRef, MealType, TableSetting};
use tablecraft_providers::build_client;
use tablecraft_runtime::{render_or_placeholder, AssistantChannel, Configurator, SettingOutcome};

#[derive(Debug, Parser)]
#[command(name = "tablecraft-server")]
struct Args {
    #[arg(long, default_value = "config/tablecraft.yaml")]
    config: PathBuf,
    #[arg(long, default_value = "127.0.0.1:8080")]
    listen: SocketAddr,
}

#[derive(Clone)]
struct AppState {
    configurator: Arc<Configurator>,
    renderer: Arc<dyn ImageRenderer>,
    assistant: Arc<dyn ChatAssistant>,
    placeholder: String,
    greeting: Option<String>,
    channels: Arc<Mutex<HashMap<String, AssistantChannel>>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct SettingView {
    source: &'static str,
    setting: TableSetting,
    layout: Vec<PlacedItem>,
}

#[derive(Debug, Deserialize)]
struct RenderRequest {
    description: String,
}

#[derive(Debug, Serialize)]
struct RenderResponse {
    image: ImageRef,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    message: String,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: ChatMessage,
    history_len: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = if args.config.exists() {
        load_config(&args.config).context("load configuration failed")?
    } else {
        TablecraftConfig::default()
    };

    tracing_subscriber::fmt()
        .with_env_filter(config.observability.log_level.clone())
        .init();

    let client = Arc::new(build_client(&config).context("build provider client failed")?);

    let state = AppState {
        configurator: Arc::new(Configurator::new(client.clone())),
        renderer: client.clone(),
        assistant: client,
        placeholder: config.image.placeholder_url.clone(),
        greeting: config.assistant.greeting.clone(),
        channels: Arc::new(Mutex::new(HashMap::new())),
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/settings/{meal}/{culture}", get(fetch_setting))
        .route("/images", post(render_image))
        .route("/chat/{session}/messages", post(send_chat_message))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .context("bind server listener failed")?;
    println!("tablecraft-server listening on http://{}", args.listen);
    axum::serve(listener, app)
        .await
        .context("server terminated with error")
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status":"ok"}))
}

async fn fetch_setting(
    State(state): State<AppState>,
    Path((meal, culture)): Path<(String, String)>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorBody>)> {
    let meal: MealType = meal.parse().map_err(invalid_argument)?;
    let culture: CultureStyle = culture.parse().map_err(invalid_argument)?;

    let outcome = state.configurator.fetch(meal, culture).await;
    let source = match &outcome {
        SettingOutcome::Generated(_) => "generated",
        SettingOutcome::Fallback(_) => "fallback",
    };
    let setting = outcome.into_setting();
    let layout = arrange(&setting.items);

    Ok(Json(SettingView {
        source,
        setting,
        layout,
    }))
}

async fn render_image(
    State(state): State<AppState>,
    Json(payload): Json<RenderRequest>,
) -> Json<RenderResponse> {
    let image = render_or_placeholder(
        state.renderer.as_ref(),
        &payload.description,
        &state.placeholder,
    )
    .await;
    Json(RenderResponse { image })
}

async fn send_chat_message(
    State(state): State<AppState>,
    Path(session): Path<String>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let mut channels = state.channels.lock().await;
    let channel = channels.entry(session).or_insert_with(|| match &state.greeting {
        Some(greeting) => AssistantChannel::with_greeting(state.assistant.clone(), greeting.as_str()),
        None => AssistantChannel::new(state.assistant.clone()),
    });

    let reply = channel.send(payload.message).await.clone();
    let history_len = channel.history().len();
    Json(ChatResponse { reply, history_len })
}

fn invalid_argument(message: String) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            code: "invalid_argument".to_string(),
            message,
        }),
    )
}
