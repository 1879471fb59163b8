use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{AddItemRequest, AddItemResponse, ApiError, Category, OrderError, Product};

use crate::config::ApiConfig;

/// Remote catalog and order operations used by the order screen.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    async fn list_categories(&self) -> Result<Vec<Category>, OrderError>;

    async fn list_products(&self, category_id: &str) -> Result<Vec<Product>, OrderError>;

    async fn add_item(&self, request: &AddItemRequest) -> Result<AddItemResponse, OrderError>;

    async fn remove_item(&self, item_id: &str) -> Result<(), OrderError>;

    async fn close_order(&self, order_id: &str) -> Result<(), OrderError>;
}

/// Method, path and query parameters of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint<'a> {
    pub method: &'static str,
    pub path: &'static str,
    pub query: Vec<(&'static str, &'a str)>,
}

impl<'a> Endpoint<'a> {
    fn new(method: &'static str, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
        }
    }

    fn with_query(mut self, key: &'static str, value: &'a str) -> Self {
        self.query.push((key, value));
        self
    }

    pub fn list_categories() -> Self {
        Self::new("GET", "/category")
    }

    pub fn list_products(category_id: &'a str) -> Self {
        Self::new("GET", "/category/product").with_query("category_id", category_id)
    }

    pub fn add_item() -> Self {
        Self::new("POST", "/order/add")
    }

    pub fn remove_item(item_id: &'a str) -> Self {
        Self::new("DELETE", "/order/remove").with_query("item_id", item_id)
    }

    pub fn close_order(order_id: &'a str) -> Self {
        Self::new("DELETE", "/order").with_query("order_id", order_id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn request(
        &self,
        endpoint: &Endpoint<'_>,
        body: Option<impl Serialize>,
    ) -> Result<Response, OrderError> {
        let url = self.config.url(endpoint.path);

        let mut request = match endpoint.method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "DELETE" => Request::delete(&url),
            method => return Err(OrderError::Network(format!("Invalid method {}", method))),
        };

        if !endpoint.query.is_empty() {
            request = request.query(endpoint.query.iter().copied());
        }

        if let Some(token) = ApiConfig::auth_token() {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = if let Some(body) = body {
            request
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| OrderError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| OrderError::Network(e.to_string()))?
        } else {
            request
                .send()
                .await
                .map_err(|e| OrderError::Network(e.to_string()))?
        };

        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let status_text = response.status_text();
            let error: ApiError = response.json().await.unwrap_or_default();
            Err(OrderError::Status {
                status,
                message: error_message(error, status_text),
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
        body: Option<impl Serialize>,
    ) -> Result<T, OrderError> {
        let response = self.request(endpoint, body).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| OrderError::Decode(e.to_string()))
    }
}

impl OrderApi for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, OrderError> {
        self.fetch(&Endpoint::list_categories(), None::<()>).await
    }

    async fn list_products(&self, category_id: &str) -> Result<Vec<Product>, OrderError> {
        self.fetch(&Endpoint::list_products(category_id), None::<()>)
            .await
    }

    async fn add_item(&self, request: &AddItemRequest) -> Result<AddItemResponse, OrderError> {
        self.fetch(&Endpoint::add_item(), Some(request)).await
    }

    async fn remove_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.request(&Endpoint::remove_item(item_id), None::<()>)
            .await
            .map(|_| ())
    }

    async fn close_order(&self, order_id: &str) -> Result<(), OrderError> {
        self.request(&Endpoint::close_order(order_id), None::<()>)
            .await
            .map(|_| ())
    }
}

/// Picks the most useful text out of an error body.
fn error_message(error: ApiError, status_text: String) -> String {
    if !error.message.is_empty() {
        error.message
    } else if !error.error.is_empty() {
        error.error
    } else if !status_text.is_empty() {
        status_text
    } else {
        "An unknown error occurred".to_string()
    }
}
