use leptos::*;
use shared::LineItem;

/// Text shown for one line, e.g. `3 - Cola`.
pub fn line_label(item: &LineItem) -> String {
    format!("{} - {}", item.amount, item.name)
}

/// One order line with a delete affordance.
#[component]
pub fn OrderItemRow(item: LineItem, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let label = line_label(&item);
    let item_id = item.id;

    view! {
        <div class="task-item order-item">
            <div class="task-content">
                <div class="task-title">{label}</div>
            </div>
            <button
                type="button"
                class="btn btn-icon btn-danger"
                title="Remove item"
                on:click=move |_| on_delete.call(item_id.clone())
            >
                "🗑"
            </button>
        </div>
    }
}
