use leptos::*;
use leptos_router::*;
use shared::LineItem;

use crate::api::ApiClient;
use crate::components::order_item_row::OrderItemRow;
use crate::components::picker_modal::{picker_entries, PickerModal};
use crate::components::quantity_input::QuantityInput;
use crate::order::{finish_path, flow, log_failure, Mode, Navigation, OrderScreen};
use crate::pages::route_from_params;

#[component]
pub fn OrderPage() -> impl IntoView {
    let params = use_params_map();
    let route = params.with_untracked(route_from_params);

    let screen = create_rw_signal(OrderScreen::new(route));
    let title = screen.with_untracked(|s| format!("Table {}", s.route().number));
    let mode = create_memo(move |_| screen.with(|s| s.mode()));
    let api = store_value(ApiClient::default());
    let navigate = store_value(use_navigate());

    let follow = move |navigation: Navigation| match navigation {
        Navigation::Back => {
            if let Err(e) = window().history().and_then(|history| history.back()) {
                log::error!("Failed to navigate back: {:?}", e);
            }
        }
        Navigation::FinishOrder(route) => {
            let path = finish_path(&route);
            if navigate
                .try_with_value(|navigate| navigate(&path, Default::default()))
                .is_none()
            {
                log::debug!("Order screen gone, not navigating to {}", path);
            }
        }
    };

    // Load catalog
    let client = api.get_value();
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = flow::load_categories(&client, &screen).await {
            log_failure("load categories", &e);
        }
    });

    let on_pick_category = Callback::new(move |index: usize| {
        let Some(category) = screen.with_untracked(|s| s.categories().get(index).cloned()) else {
            screen.update(|s| s.dismiss_picker());
            return;
        };

        let client = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = flow::change_category(&client, &screen, category).await {
                log_failure("change category", &e);
            }
        });
    });

    let on_pick_product = Callback::new(move |index: usize| {
        match screen.with_untracked(|s| s.products().get(index).cloned()) {
            Some(product) => {
                if let Err(e) = flow::change_product(&screen, product) {
                    log_failure("change product", &e);
                }
            }
            None => screen.update(|s| s.dismiss_picker()),
        }
    });

    let on_dismiss = Callback::new(move |_: ()| screen.update(|s| s.dismiss_picker()));

    let on_add = move |_| {
        let client = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = flow::add_item(&client, &screen).await {
                log_failure("add item", &e);
            }
        });
    };

    let on_delete = Callback::new(move |item_id: String| {
        let client = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = flow::remove_item(&client, &screen, &item_id).await {
                log_failure("remove item", &e);
            }
        });
    });

    let on_close_order = move |_| {
        let client = api.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            match flow::close_order(&client, &screen).await {
                Ok(navigation) => follow(navigation),
                Err(e) => log_failure("close order", &e),
            }
        });
    };

    let on_advance = move |_| match flow::advance(&screen) {
        Ok(navigation) => follow(navigation),
        Err(e) => log_failure("advance to finish", &e),
    };

    view! {
        <div class="order-screen">
            <div class="dashboard-header order-header">
                <h1 class="dashboard-title">{title}</h1>
                <Show when=move || screen.with(|s| s.can_close()) fallback=|| ()>
                    <button
                        type="button"
                        class="btn btn-icon btn-danger"
                        title="Close order"
                        on:click=on_close_order
                    >
                        "🗑"
                    </button>
                </Show>
            </div>

            <Show when=move || screen.with(|s| s.can_pick_category()) fallback=|| ()>
                <button
                    type="button"
                    class="form-input order-picker"
                    on:click=move |_| screen.update(|s| {
                        s.open_category_picker();
                    })
                >
                    {move || screen.with(|s| {
                        s.selected_category().map(|c| c.name.clone()).unwrap_or_default()
                    })}
                </button>
            </Show>

            <button
                type="button"
                class="form-input order-picker"
                on:click=move |_| screen.update(|s| {
                    s.open_product_picker();
                })
            >
                {move || screen.with(|s| {
                    s.selected_product().map(|p| p.name.clone()).unwrap_or_default()
                })}
            </button>

            <div class="form-group order-quantity">
                <label class="form-label" for="order-quantity">"Quantity"</label>
                <QuantityInput
                    id="order-quantity"
                    value=Signal::derive(move || screen.with(|s| s.quantity().to_string()))
                    on_input=move |text: String| screen.update(|s| s.set_quantity(text))
                />
            </div>

            <div class="order-actions">
                <button type="button" class="btn btn-primary order-add" on:click=on_add>
                    "+"
                </button>
                <button
                    type="button"
                    class="btn btn-success order-advance"
                    disabled=move || !screen.with(|s| s.can_advance())
                    on:click=on_advance
                >
                    "Next"
                </button>
            </div>

            <div class="order-items">
                <For
                    each=move || screen.with(|s| s.items().to_vec())
                    key=|item: &LineItem| item.id.clone()
                    children=move |item: LineItem| view! {
                        <OrderItemRow item=item on_delete=on_delete />
                    }
                />
            </div>

            {move || match mode.get() {
                Mode::Browsing => ().into_view(),
                Mode::PickingCategory => {
                    let (options, selected_id) = screen.with_untracked(|s| {
                        (
                            picker_entries(s.categories()),
                            s.selected_category().map(|c| c.id.clone()),
                        )
                    });
                    view! {
                        <PickerModal
                            title="Category"
                            options=options
                            selected_id=selected_id
                            on_select=on_pick_category
                            on_close=on_dismiss
                        />
                    }.into_view()
                }
                Mode::PickingProduct => {
                    let (options, selected_id) = screen.with_untracked(|s| {
                        (
                            picker_entries(s.products()),
                            s.selected_product().map(|p| p.id.clone()),
                        )
                    });
                    view! {
                        <PickerModal
                            title="Product"
                            options=options
                            selected_id=selected_id
                            on_select=on_pick_product
                            on_close=on_dismiss
                        />
                    }.into_view()
                }
            }}
        </div>
    }
}
