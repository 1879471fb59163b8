pub mod finish_order;
pub mod order;

use leptos_router::ParamsMap;
use shared::OrderRoute;

/// Reads `:number` and `:order_id` from the current route.
pub(crate) fn route_from_params(params: &ParamsMap) -> OrderRoute {
    OrderRoute::new(param(params, "number"), param(params, "order_id"))
}

/// A path segment with percent-encoding undone. Malformed encodings are kept as-is.
fn param(params: &ParamsMap, key: &str) -> String {
    let raw = params.get(key).cloned().unwrap_or_default();
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}
