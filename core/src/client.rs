//! Stateless HTTP request builder and response parser for the inventory API.
//!
//! # Design
//! `InventoryClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. Mutating calls go out as POST; the
//! server accepts GET for them too.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, ItemUpdate, Message};

/// Synchronous, stateless client for the inventory API.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    base_url: String,
}

impl InventoryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/", self.base_url),
        }
    }

    pub fn build_show(&self, name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url("show", &[("item", name.to_string())]),
        }
    }

    pub fn build_create(&self, item: &Item) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url(
                "create",
                &[
                    ("name", item.name.clone()),
                    ("price", item.price.to_string()),
                    ("quantity", item.quantity.to_string()),
                ],
            ),
        }
    }

    /// Only the fields set on `update` are sent.
    pub fn build_update(&self, name: &str, update: &ItemUpdate) -> HttpRequest {
        let mut params = vec![("item", name.to_string())];
        if let Some(price) = update.price {
            params.push(("price", price.to_string()));
        }
        if let Some(quantity) = update.quantity {
            params.push(("quantity", quantity.to_string()));
        }
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url("update", &params),
        }
    }

    pub fn build_delete(&self, name: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.url("delete", &[("item", name.to_string())]),
        }
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<HashMap<String, Item>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_show(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 201)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Item, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Returns the server's confirmation message.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<Message, ApiError> {
        check_status(&response, 202)?;
        decode(&response)
    }

    fn url(&self, route: &str, params: &[(&str, String)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}/{route}?{query}", self.base_url)
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    Ok(serde_json::from_str(&response.body)?)
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    match serde_json::from_str::<Message>(&response.body) {
        Ok(msg) => Err(ApiError::Rejected {
            status: response.status,
            message: msg.message,
        }),
        Err(_) => Err(ApiError::HttpError {
            status: response.status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> InventoryClient {
        InventoryClient::new("http://localhost:4000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_targets_root() {
        let req = client().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:4000/");
    }

    #[test]
    fn build_show_encodes_name() {
        let req = client().build_show("ssd nvme/2tb");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:4000/show?item=ssd%20nvme%2F2tb");
    }

    #[test]
    fn build_create_sends_all_fields() {
        let item = Item {
            name: "ram_ddr5".to_string(),
            price: 15999,
            quantity: -2,
        };
        let req = client().build_create(&item);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "http://localhost:4000/create?name=ram_ddr5&price=15999&quantity=-2"
        );
    }

    #[test]
    fn build_update_omits_unset_fields() {
        let update = ItemUpdate {
            price: None,
            quantity: Some(10),
        };
        let req = client().build_update("gpu_nvidia", &update);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "http://localhost:4000/update?item=gpu_nvidia&quantity=10"
        );

        let req = client().build_update("gpu_nvidia", &ItemUpdate::default());
        assert_eq!(req.url, "http://localhost:4000/update?item=gpu_nvidia");
    }

    #[test]
    fn build_delete_produces_post() {
        let req = client().build_delete("cpu_amd");
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:4000/delete?item=cpu_amd");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = InventoryClient::new("http://localhost:4000/");
        assert_eq!(client.build_list().url, "http://localhost:4000/");
        assert_eq!(
            client.build_show("x").url,
            "http://localhost:4000/show?item=x"
        );
    }

    #[test]
    fn parse_list_success() {
        let body = r#"{"cpu_amd":{"name":"cpu_amd","price":24999,"quantity":12}}"#;
        let items = client().parse_list(response(200, body)).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items["cpu_amd"].price, 24999);
    }

    #[test]
    fn parse_show_not_found() {
        let body = r#"{"message":"item not found","status_code":404}"#;
        let err = client().parse_show(response(404, body)).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_create_success_has_no_body() {
        assert!(client().parse_create(response(201, "")).is_ok());
    }

    #[test]
    fn parse_create_rejected_carries_message() {
        let body = r#"{"message":"item cpu_amd already exists","status_code":422}"#;
        let err = client().parse_create(response(422, body)).unwrap_err();
        match err {
            ApiError::Rejected { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "item cpu_amd already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_success() {
        let body = r#"{"name":"gpu_nvidia","price":89999,"quantity":10}"#;
        let item = client().parse_update(response(200, body)).unwrap();
        assert_eq!(item.quantity, 10);
    }

    #[test]
    fn parse_delete_returns_confirmation() {
        let body = r#"{"message":"item deleted","status_code":202}"#;
        let msg = client().parse_delete(response(202, body)).unwrap();
        assert_eq!(msg.message, "item deleted");
        assert_eq!(msg.status_code, 202);
    }

    #[test]
    fn unexpected_status_without_envelope() {
        let err = client()
            .parse_update(response(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
