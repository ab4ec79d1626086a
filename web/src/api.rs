use gloo::net::http::Request;
use jeopardy_core as game;
use jeopardy_protocol::Endpoints;
use serde::de::DeserializeOwned;

/// [`game::ClueSource`] backed by a jService-compatible HTTP API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpClueSource {
    endpoints: Endpoints,
}

impl HttpClueSource {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }
}

impl game::ClueSource for HttpClueSource {
    async fn categories(&self, count: u16) -> game::Result<Vec<game::CategorySummary>> {
        fetch_json(&self.endpoints.categories(count)).await
    }

    async fn category(&self, id: game::CategoryId) -> game::Result<game::CategoryDetail> {
        fetch_json(&self.endpoints.category(id)).await
    }
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> game::Result<T> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| game::TriviaError::Network(format!("{url}: {err}")))?;
    if !response.ok() {
        return Err(game::TriviaError::Network(format!(
            "{url}: HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| game::TriviaError::Malformed(format!("{url}: {err}")))
}
