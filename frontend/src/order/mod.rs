//! Order editing for one open table.

pub mod flow;
pub mod screen;

use shared::{OrderError, OrderRoute};

pub use screen::{Mode, Navigation, OrderScreen};

/// Path of the order screen. Segments are percent-encoded.
pub fn order_path(route: &OrderRoute) -> String {
    format!(
        "/table/{}/order/{}",
        urlencoding::encode(&route.number.to_string()),
        urlencoding::encode(&route.order_id)
    )
}

pub fn finish_path(route: &OrderRoute) -> String {
    format!("{}/finish", order_path(route))
}

/// Logs a failed operation. Nothing else is surfaced to the user.
pub fn log_failure(action: &str, error: &OrderError) {
    match error {
        OrderError::Detached => log::debug!("Ignored {} result: {}", action, error),
        e if e.is_remote() => log::error!("Failed to {}: {}", action, e),
        e => log::warn!("Cannot {}: {}", action, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_paths() {
        let route = OrderRoute::new(5, "abc");
        assert_eq!(order_path(&route), "/table/5/order/abc");
        assert_eq!(finish_path(&route), "/table/5/order/abc/finish");
    }

    #[test]
    fn test_finish_path_keeps_text_table_number() {
        let route = OrderRoute::new("12B", "f00d");
        assert_eq!(finish_path(&route), "/table/12B/order/f00d/finish");
    }

    #[test]
    fn test_paths_encode_reserved_characters() {
        let route = OrderRoute::new("12 B", "a/b?c#d");
        assert_eq!(order_path(&route), "/table/12%20B/order/a%2Fb%3Fc%23d");
        assert_eq!(
            finish_path(&route),
            "/table/12%20B/order/a%2Fb%3Fc%23d/finish"
        );
    }
}
