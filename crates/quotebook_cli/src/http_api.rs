//! Blocking HTTP implementation of `QuoteApi`.
//!
//! # Invariants
//! - Any non-success status becomes `ApiError` carrying the response body.
//! - Transport failures become `ApiError` carrying the transport message.

use log::debug;
use quotebook_core::{ApiError, Quote, QuoteApi};
use reqwest::blocking::{Client, Response};

pub struct HttpQuoteApi {
    client: Client,
    base_url: String,
}

impl HttpQuoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn check(&self, route: &str, result: reqwest::Result<Response>) -> Result<Response, ApiError> {
        let response = result.map_err(|err| ApiError(err.to_string()))?;
        let status = response.status();
        debug!(
            "event=api_call module=cli route={} status={}",
            route,
            status.as_u16()
        );
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .map_err(|err| ApiError(err.to_string()))?;
        if body.trim().is_empty() {
            return Err(ApiError(status.to_string()));
        }
        Err(ApiError(body))
    }
}

impl QuoteApi for HttpQuoteApi {
    fn random_quote(&self) -> Result<Quote, ApiError> {
        let response = self.check(
            "/random-quote",
            self.client.get(self.url("/random-quote")).send(),
        )?;
        response.json().map_err(|err| ApiError(err.to_string()))
    }

    fn add_quote(&self, quote: &Quote) -> Result<(), ApiError> {
        self.check(
            "/add-quote",
            self.client.post(self.url("/add-quote")).json(quote).send(),
        )?;
        Ok(())
    }

    fn all_quotes(&self) -> Result<Vec<Quote>, ApiError> {
        let response = self.check(
            "/all-quotes",
            self.client.get(self.url("/all-quotes")).send(),
        )?;
        response.json().map_err(|err| ApiError(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::HttpQuoteApi;

    #[test]
    fn url_joins_without_double_slash() {
        let api = HttpQuoteApi::new("http://127.0.0.1:3000/");
        assert_eq!(api.url("/all-quotes"), "http://127.0.0.1:3000/all-quotes");
    }
}
