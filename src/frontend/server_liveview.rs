use std::sync::Arc;

use anyhow::Result;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use dioxus_liveview::LiveViewPool;
use indoc::formatdoc;
use tracing::{info, warn};

use super::app::app;
use super::tutor::tutor;
use crate::config::Settings;
use crate::relay::{api_router, ApiState, RelayClient};
use crate::tutor_core::ChatSettings;

fn page(title: &str, socket_url: &str) -> Html<String> {
    Html(formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <title>{title}</title>
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
            </head>
            <body> <div id="main"></div> </body>
            {glue}
        </html>
        "#,
        glue = dioxus_liveview::interpreter_glue(socket_url)
    ))
}

/// Pages, their liveview sockets, and the JSON API in one router.
pub fn router(settings: &Settings) -> Router {
    let reachable_addr = settings.reachable_addr.clone();
    let chat_settings = Arc::new(ChatSettings::default().with_reply_delay(settings.reply_delay));
    let relay = Arc::new(RelayClient::new(settings.relay.clone()));
    let view = Arc::new(LiveViewPool::new());

    let chat_socket = format!("ws://{reachable_addr}/ws");
    let tutor_socket = format!("ws://{reachable_addr}/ws/tutor");

    let api = api_router(ApiState {
        relay: relay.clone(),
        ping_message: settings.ping_message.as_str().into(),
    });

    Router::new()
        .route(
            "/",
            get(move || async move { page("Humanoid AI Chat", &chat_socket) }),
        )
        .route(
            "/tutor",
            get(move || async move { page("Humanoid AI Tutor", &tutor_socket) }),
        )
        .route("/ws", {
            let view = view.clone();
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    let socket = dioxus_liveview::axum_socket(socket);
                    if let Err(err) = view.launch_with_props(socket, app, chat_settings).await {
                        warn!(?err, "chat session ended with an error");
                    }
                })
            })
        })
        .route(
            "/ws/tutor",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    let socket = dioxus_liveview::axum_socket(socket);
                    if let Err(err) = view.launch_with_props(socket, tutor, relay).await {
                        warn!(?err, "tutor session ended with an error");
                    }
                })
            }),
        )
        .merge(api)
}

pub async fn start_server(settings: Settings) -> Result<()> {
    let app = router(&settings);

    info!("Listening on http://{}", settings.listen_addr);
    if settings.relay.api_key.is_none() {
        warn!("AZURE_OPENAI_API_KEY is not set; /api/chat will answer 500");
    }

    axum::Server::bind(&settings.listen_addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
