use leptos::*;
use leptos_router::*;

use crate::order::order_path;
use crate::pages::route_from_params;

/// Landing screen once an order has line items and the waiter moves on.
#[component]
pub fn FinishOrderPage() -> impl IntoView {
    let params = use_params_map();
    let route = params.with_untracked(route_from_params);
    let back_href = order_path(&route);

    view! {
        <div class="dashboard-header">
            <h1 class="dashboard-title">"Finish order"</h1>
            <a href=back_href style="color: var(--text-muted);">
                "← Back to order"
            </a>
        </div>

        <div class="card">
            <div class="task-title">{format!("Table {}", route.number)}</div>
            <div class="task-meta">{format!("Order {}", route.order_id)}</div>
        </div>
    }
}
