//! Home page handler for the presentation shell.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Third-party placeholder API fetched for demonstration purposes only.
/// The response is logged, never rendered, and never reaches the backend.
const DEMO_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// A greeting card on the home page.
pub struct Greeting {
    pub name: &'static str,
    pub age: u8,
}

/// The hardcoded greeting cards; the page has no dynamic data source.
const GREETINGS: [Greeting; 3] = [
    Greeting {
        name: "Vineeth",
        age: 19,
    },
    Greeting {
        name: "Vishal Bhat",
        age: 20,
    },
    Greeting {
        name: "Sreenivaas",
        age: 20,
    },
];

/// Template for the home page.
///
/// Renders `templates/home.html` with a static header and the greeting cards.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    greetings: &'static [Greeting],
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Also fires the demo API fetch in the background; the page renders the
/// same static content whether or not that fetch succeeds.
pub async fn home_handler() -> impl IntoResponse {
    tokio::spawn(log_demo_api());

    HomeTemplate {
        greetings: &GREETINGS,
    }
}

/// Fetches the demo API and logs the outcome.
async fn log_demo_api() {
    match fetch_demo_api().await {
        Ok(body) => tracing::info!(url = DEMO_API_URL, "Demo API response: {body}"),
        Err(e) => tracing::warn!(url = DEMO_API_URL, "Demo API fetch failed: {e}"),
    }
}

async fn fetch_demo_api() -> reqwest::Result<serde_json::Value> {
    reqwest::get(DEMO_API_URL).await?.json().await
}
