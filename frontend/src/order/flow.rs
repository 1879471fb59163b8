//! Order screen operations that talk to the API.
//!
//! Each operation reads and writes the screen only through [`ScreenStore`]
//! and never holds a borrow of it across an `.await`, so completions from
//! independent taps interleave safely on the UI thread.

use leptos::*;
use shared::{Category, LineItem, OrderError, Product};

use crate::api::OrderApi;
use crate::order::screen::{Navigation, OrderScreen, ProductLoad};

/// Access to the live screen state.
pub trait ScreenStore {
    /// Runs `f` against the screen, or returns `None` once it is unmounted.
    fn update_screen<R>(&self, f: impl FnOnce(&mut OrderScreen) -> R) -> Option<R>;
}

impl ScreenStore for RwSignal<OrderScreen> {
    fn update_screen<R>(&self, f: impl FnOnce(&mut OrderScreen) -> R) -> Option<R> {
        self.try_update(f)
    }
}

fn with_screen<S: ScreenStore, R>(
    screen: &S,
    f: impl FnOnce(&mut OrderScreen) -> R,
) -> Result<R, OrderError> {
    screen.update_screen(f).ok_or(OrderError::Detached)
}

/// Fetches the categories, selects the first one and loads its products.
pub async fn load_categories<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
) -> Result<(), OrderError> {
    let categories = api.list_categories().await?;
    log::debug!("Loaded {} categories", categories.len());

    if let Some(load) = with_screen(screen, |s| s.categories_loaded(categories))? {
        load_products(api, screen, load).await?;
    }
    Ok(())
}

/// Runs one product load. Returns `false` when the result was stale.
pub async fn load_products<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
    load: ProductLoad,
) -> Result<bool, OrderError> {
    let products = api.list_products(&load.category_id).await?;
    let count = products.len();

    let applied = with_screen(screen, |s| s.products_loaded(&load, products))?;
    if applied {
        log::debug!("Loaded {} products for category {}", count, load.category_id);
    } else {
        log::debug!(
            "Discarded stale product list for category {} (generation {})",
            load.category_id,
            load.generation()
        );
    }
    Ok(applied)
}

pub async fn change_category<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
    category: Category,
) -> Result<(), OrderError> {
    if let Some(load) = with_screen(screen, |s| s.select_category(category))?? {
        load_products(api, screen, load).await?;
    }
    Ok(())
}

pub fn change_product<S: ScreenStore>(screen: &S, product: Product) -> Result<(), OrderError> {
    with_screen(screen, |s| s.select_product(product))?
}

pub async fn add_item<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
) -> Result<LineItem, OrderError> {
    let pending = with_screen(screen, |s| s.begin_add())??;
    let response = api.add_item(&pending.request).await?;
    let item = with_screen(screen, |s| s.finish_add(pending, response))?;

    log::info!(
        "Added {} x {} to order as item {}",
        item.amount,
        item.name,
        item.id
    );
    Ok(item)
}

pub async fn remove_item<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
    item_id: &str,
) -> Result<(), OrderError> {
    let item_id = with_screen(screen, |s| s.begin_remove(item_id))??;
    api.remove_item(&item_id).await?;

    if with_screen(screen, |s| s.finish_remove(&item_id))? {
        log::info!("Removed item {} from order", item_id);
    }
    Ok(())
}

/// Deletes the (empty) order and asks to leave the screen.
pub async fn close_order<A: OrderApi, S: ScreenStore>(
    api: &A,
    screen: &S,
) -> Result<Navigation, OrderError> {
    let order_id = with_screen(screen, |s| s.begin_close())??;
    api.close_order(&order_id).await?;
    log::info!("Closed order {}", order_id);

    with_screen(screen, |s| s.finish_close())
}

pub fn advance<S: ScreenStore>(screen: &S) -> Result<Navigation, OrderError> {
    with_screen(screen, |s| s.advance())?
}
