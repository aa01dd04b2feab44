use std::sync::Arc;

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::config::Config;
use crate::fetcher::{Fetcher, NewsItem};
use crate::prompt;
use crate::synthesis::SynthesisClient;

pub struct AppState {
    pub config: Config,
    /// Credential read from the environment at startup; pre-fills the
    /// sidebar input and can be overridden per request.
    pub default_api_key: String,
    pub fetcher: Fetcher,
    pub synthesizer: SynthesisClient,
}

// Template structs
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub api_key: String,
    pub left_label: String,
    pub right_label: String,
}

#[derive(Template)]
#[template(path = "synthesis.html")]
pub struct SynthesisTemplate {
    pub synthesis: String,
    pub left_label: String,
    pub right_label: String,
    pub left_items: Vec<NewsItem>,
    pub right_items: Vec<NewsItem>,
}

#[derive(Template)]
#[template(path = "key_warning.html")]
pub struct KeyWarningTemplate;

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Route handlers
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {
        api_key: state.default_api_key.clone(),
        left_label: state.config.left.label.clone(),
        right_label: state.config.right.label.clone(),
    })
}

#[derive(Deserialize)]
pub struct SynthesizeForm {
    #[serde(default)]
    pub api_key: String,
}

/// The trigger: fetch both groups, build the prompt, call the model, render
/// the result fragment. With an empty credential nothing is fetched and the
/// model is never called; the warning fragment renders instead.
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SynthesizeForm>,
) -> Response {
    let api_key = form.api_key.trim();
    if api_key.is_empty() {
        return HtmlTemplate(KeyWarningTemplate).into_response();
    }

    let left_items = state
        .fetcher
        .fetch(&state.config.left.urls, state.config.left.limit)
        .await;
    let right_items = state
        .fetcher
        .fetch(&state.config.right.urls, state.config.right.limit)
        .await;

    let prompt = prompt::build(&left_items, &right_items);
    let synthesis = state.synthesizer.synthesize(&prompt, api_key).await;

    HtmlTemplate(SynthesisTemplate {
        synthesis,
        left_label: state.config.left.label.clone(),
        right_label: state.config.right.label.clone(),
        left_items,
        right_items,
    })
    .into_response()
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}
