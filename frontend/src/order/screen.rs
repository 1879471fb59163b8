//! Screen-local state of an open table order.
//!
//! Every user action is split into a `begin_*` step, which checks the
//! preconditions and captures what the request needs, and a `finish_*` step,
//! which applies the acknowledged result. Nothing is written locally before
//! the API has answered.

use shared::{AddItemRequest, AddItemResponse, Category, LineItem, OrderError, OrderRoute, Product};

use crate::utils::coerce_amount;

pub const DEFAULT_QUANTITY: &str = "1";

/// Which part of the screen currently has focus. At most one picker is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    PickingCategory,
    PickingProduct,
}

/// Where the screen wants to go once an operation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Back,
    FinishOrder(OrderRoute),
}

/// A product fetch issued for one category.
///
/// Only the most recently issued load may replace the product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLoad {
    generation: u64,
    pub category_id: String,
}

impl ProductLoad {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// An add request together with what it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAdd {
    pub request: AddItemRequest,
    product: Product,
    amount: String,
}

#[derive(Debug, Clone)]
pub struct OrderScreen {
    route: OrderRoute,
    categories: Vec<Category>,
    selected_category: Option<Category>,
    products: Vec<Product>,
    selected_product: Option<Product>,
    quantity: String,
    items: Vec<LineItem>,
    mode: Mode,
    product_generation: u64,
}

impl OrderScreen {
    pub fn new(route: OrderRoute) -> Self {
        Self {
            route,
            categories: Vec::new(),
            selected_category: None,
            products: Vec::new(),
            selected_product: None,
            quantity: DEFAULT_QUANTITY.to_string(),
            items: Vec::new(),
            mode: Mode::Browsing,
            product_generation: 0,
        }
    }

    pub fn route(&self) -> &OrderRoute {
        &self.route
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_category.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.selected_product.as_ref()
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The order can only be thrown away while it has no line items.
    pub fn can_close(&self) -> bool {
        self.items.is_empty()
    }

    pub fn can_advance(&self) -> bool {
        !self.items.is_empty()
    }

    /// The category selector is only shown once categories exist.
    pub fn can_pick_category(&self) -> bool {
        !self.categories.is_empty()
    }

    // ------------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------------

    /// Stores a freshly fetched category list and selects its first entry.
    ///
    /// Returns the product load to run when the selected category changed.
    pub fn categories_loaded(&mut self, categories: Vec<Category>) -> Option<ProductLoad> {
        let first = categories.first().cloned();
        self.categories = categories;
        self.set_category(first)
    }

    /// Applies a product list. Returns `false` when a newer load has been
    /// issued since, in which case the list is dropped.
    pub fn products_loaded(&mut self, load: &ProductLoad, products: Vec<Product>) -> bool {
        if load.generation != self.product_generation {
            return false;
        }

        self.selected_product = products.first().cloned();
        self.products = products;
        true
    }

    fn set_category(&mut self, category: Option<Category>) -> Option<ProductLoad> {
        let unchanged = match (&self.selected_category, &category) {
            (Some(current), Some(next)) => current.id == next.id,
            (None, None) => true,
            _ => false,
        };
        self.selected_category = category;

        if unchanged {
            return None;
        }

        self.product_generation += 1;
        match &self.selected_category {
            Some(category) => Some(ProductLoad {
                generation: self.product_generation,
                category_id: category.id.clone(),
            }),
            None => {
                self.products.clear();
                self.selected_product = None;
                None
            }
        }
    }

    // ------------------------------------------------------------------------
    // Pickers
    // ------------------------------------------------------------------------

    pub fn open_category_picker(&mut self) -> bool {
        if self.mode != Mode::Browsing || !self.can_pick_category() {
            return false;
        }
        self.mode = Mode::PickingCategory;
        true
    }

    pub fn open_product_picker(&mut self) -> bool {
        if self.mode != Mode::Browsing {
            return false;
        }
        self.mode = Mode::PickingProduct;
        true
    }

    pub fn dismiss_picker(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Picks a category from the open category picker and closes it.
    pub fn select_category(&mut self, category: Category) -> Result<Option<ProductLoad>, OrderError> {
        if self.mode != Mode::PickingCategory {
            return Err(OrderError::PickerNotOpen);
        }
        self.mode = Mode::Browsing;
        Ok(self.set_category(Some(category)))
    }

    /// Picks a product from the open product picker and closes it.
    pub fn select_product(&mut self, product: Product) -> Result<(), OrderError> {
        if self.mode != Mode::PickingProduct {
            return Err(OrderError::PickerNotOpen);
        }
        self.mode = Mode::Browsing;
        self.selected_product = Some(product);
        Ok(())
    }

    pub fn set_quantity(&mut self, text: impl Into<String>) {
        self.quantity = text.into();
    }

    // ------------------------------------------------------------------------
    // Line items
    // ------------------------------------------------------------------------

    pub fn begin_add(&self) -> Result<PendingAdd, OrderError> {
        let product = self
            .selected_product
            .clone()
            .ok_or(OrderError::NoProductSelected)?;

        Ok(PendingAdd {
            request: AddItemRequest {
                order_id: self.route.order_id.clone(),
                product_id: product.id.clone(),
                amount: coerce_amount(&self.quantity),
            },
            product,
            amount: self.quantity.clone(),
        })
    }

    pub fn finish_add(&mut self, pending: PendingAdd, response: AddItemResponse) -> LineItem {
        let item = LineItem {
            id: response.id,
            product_id: pending.product.id,
            name: pending.product.name,
            amount: pending.amount,
        };
        self.items.push(item.clone());
        item
    }

    pub fn begin_remove(&self, item_id: &str) -> Result<String, OrderError> {
        if self.items.iter().any(|item| item.id == item_id) {
            Ok(item_id.to_string())
        } else {
            Err(OrderError::UnknownItem(item_id.to_string()))
        }
    }

    /// Drops the acknowledged item. Returns `false` if it was already gone.
    pub fn finish_remove(&mut self, item_id: &str) -> bool {
        match self.items.iter().position(|item| item.id == item_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------------
    // Leaving the screen
    // ------------------------------------------------------------------------

    /// Returns the id of the order to delete.
    pub fn begin_close(&self) -> Result<String, OrderError> {
        if !self.can_close() {
            return Err(OrderError::OrderNotEmpty);
        }
        Ok(self.route.order_id.clone())
    }

    pub fn finish_close(&self) -> Navigation {
        Navigation::Back
    }

    pub fn advance(&self) -> Result<Navigation, OrderError> {
        if !self.can_advance() {
            return Err(OrderError::OrderEmpty);
        }
        Ok(Navigation::FinishOrder(self.route.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TableNumber;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn screen() -> OrderScreen {
        OrderScreen::new(OrderRoute::new(5, "abc"))
    }

    fn screen_with_products() -> OrderScreen {
        let mut screen = screen();
        let load = screen
            .categories_loaded(vec![category("c1", "Drinks"), category("c2", "Food")])
            .unwrap();
        assert!(screen.products_loaded(&load, vec![product("p1", "Cola"), product("p2", "Water")]));
        screen
    }

    fn add(screen: &mut OrderScreen, id: &str) -> LineItem {
        let pending = screen.begin_add().unwrap();
        screen.finish_add(pending, AddItemResponse { id: id.to_string() })
    }

    #[test]
    fn test_initial_state() {
        let screen = screen();
        assert_eq!(screen.quantity(), "1");
        assert_eq!(screen.mode(), Mode::Browsing);
        assert!(screen.selected_category().is_none());
        assert!(screen.selected_product().is_none());
        assert!(screen.can_close());
        assert!(!screen.can_advance());
        assert!(!screen.can_pick_category());
    }

    #[test]
    fn test_categories_loaded_selects_first_and_requests_products() {
        let mut screen = screen();
        let load = screen
            .categories_loaded(vec![category("c1", "Drinks"), category("c2", "Food")])
            .unwrap();

        assert_eq!(screen.selected_category().unwrap().id, "c1");
        assert_eq!(load.category_id, "c1");
        assert_eq!(screen.categories().len(), 2);
    }

    #[test]
    fn test_empty_category_list_requests_nothing() {
        let mut screen = screen();
        assert!(screen.categories_loaded(Vec::new()).is_none());
        assert!(screen.selected_category().is_none());
        assert!(!screen.open_category_picker());
    }

    #[test]
    fn test_products_loaded_selects_first() {
        let screen = screen_with_products();
        assert_eq!(screen.selected_product().unwrap().id, "p1");
        assert_eq!(screen.products().len(), 2);
    }

    #[test]
    fn test_category_change_resets_manual_product_choice() {
        let mut screen = screen_with_products();

        assert!(screen.open_product_picker());
        screen.select_product(product("p2", "Water")).unwrap();
        assert_eq!(screen.selected_product().unwrap().id, "p2");

        assert!(screen.open_category_picker());
        let load = screen
            .select_category(category("c2", "Food"))
            .unwrap()
            .unwrap();
        assert_eq!(load.category_id, "c2");
        assert_eq!(screen.mode(), Mode::Browsing);

        assert!(screen.products_loaded(&load, vec![product("p9", "Pizza")]));
        assert_eq!(screen.selected_product().unwrap().id, "p9");
    }

    #[test]
    fn test_reselecting_current_category_only_closes_picker() {
        let mut screen = screen_with_products();
        assert!(screen.open_category_picker());
        let load = screen.select_category(category("c1", "Drinks")).unwrap();
        assert!(load.is_none());
        assert_eq!(screen.mode(), Mode::Browsing);
        assert_eq!(screen.selected_product().unwrap().id, "p1");
    }

    #[test]
    fn test_stale_product_list_is_discarded() {
        let mut screen = screen_with_products();

        screen.open_category_picker();
        let food = screen.select_category(category("c2", "Food")).unwrap().unwrap();
        screen.open_category_picker();
        let drinks = screen.select_category(category("c1", "Drinks")).unwrap().unwrap();
        assert!(drinks.generation() > food.generation());

        // Newer load resolves first, older one arrives late.
        assert!(screen.products_loaded(&drinks, vec![product("p1", "Cola")]));
        assert!(!screen.products_loaded(&food, vec![product("p9", "Pizza")]));

        assert_eq!(screen.selected_category().unwrap().id, "c1");
        assert_eq!(screen.products(), &[product("p1", "Cola")]);
        assert_eq!(screen.selected_product().unwrap().id, "p1");
    }

    #[test]
    fn test_only_one_picker_open_at_a_time() {
        let mut screen = screen_with_products();
        assert!(screen.open_category_picker());
        assert!(!screen.open_product_picker());
        assert_eq!(screen.mode(), Mode::PickingCategory);

        screen.dismiss_picker();
        assert!(screen.open_product_picker());
        assert!(!screen.open_category_picker());
        assert_eq!(screen.mode(), Mode::PickingProduct);
    }

    #[test]
    fn test_selection_requires_open_picker() {
        let mut screen = screen_with_products();
        assert_eq!(
            screen.select_category(category("c2", "Food")),
            Err(OrderError::PickerNotOpen)
        );
        assert_eq!(
            screen.select_product(product("p2", "Water")),
            Err(OrderError::PickerNotOpen)
        );

        screen.open_category_picker();
        assert_eq!(
            screen.select_product(product("p2", "Water")),
            Err(OrderError::PickerNotOpen)
        );
    }

    #[test]
    fn test_add_without_product_is_rejected() {
        let screen = screen();
        assert_eq!(screen.begin_add(), Err(OrderError::NoProductSelected));
    }

    #[test]
    fn test_add_keeps_raw_quantity_text() {
        let mut screen = screen_with_products();
        screen.set_quantity("3");

        let pending = screen.begin_add().unwrap();
        assert_eq!(pending.request.order_id, "abc");
        assert_eq!(pending.request.product_id, "p1");
        assert_eq!(pending.request.amount, 3.0);

        let item = screen.finish_add(pending, AddItemResponse { id: "i1".to_string() });
        assert_eq!(
            item,
            LineItem {
                id: "i1".to_string(),
                product_id: "p1".to_string(),
                name: "Cola".to_string(),
                amount: "3".to_string(),
            }
        );
        assert_eq!(screen.items(), &[item]);
    }

    #[test]
    fn test_add_with_non_numeric_quantity_sends_nan() {
        let mut screen = screen_with_products();
        screen.set_quantity("two");

        let pending = screen.begin_add().unwrap();
        assert!(pending.request.amount.is_nan());

        let item = screen.finish_add(pending, AddItemResponse { id: "i1".to_string() });
        assert_eq!(item.amount, "two");
    }

    #[test]
    fn test_add_uses_product_selected_when_issued() {
        let mut screen = screen_with_products();
        let pending = screen.begin_add().unwrap();

        screen.open_product_picker();
        screen.select_product(product("p2", "Water")).unwrap();
        screen.set_quantity("8");

        let item = screen.finish_add(pending, AddItemResponse { id: "i1".to_string() });
        assert_eq!(item.product_id, "p1");
        assert_eq!(item.name, "Cola");
        assert_eq!(item.amount, "1");
    }

    #[test]
    fn test_remove_drops_exactly_one_item() {
        let mut screen = screen_with_products();
        add(&mut screen, "i1");
        add(&mut screen, "i2");
        add(&mut screen, "i3");

        assert_eq!(screen.begin_remove("i2"), Ok("i2".to_string()));
        assert!(screen.finish_remove("i2"));

        let ids: Vec<&str> = screen.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["i1", "i3"]);
        assert!(!screen.finish_remove("i2"));
    }

    #[test]
    fn test_remove_unknown_item_is_rejected() {
        let screen = screen_with_products();
        assert_eq!(
            screen.begin_remove("nope"),
            Err(OrderError::UnknownItem("nope".to_string()))
        );
    }

    #[test]
    fn test_close_requires_empty_order() {
        let mut screen = screen_with_products();
        assert_eq!(screen.begin_close(), Ok("abc".to_string()));

        add(&mut screen, "i1");
        assert!(!screen.can_close());
        assert_eq!(screen.begin_close(), Err(OrderError::OrderNotEmpty));

        screen.finish_remove("i1");
        assert_eq!(screen.begin_close(), Ok("abc".to_string()));
        assert_eq!(screen.finish_close(), Navigation::Back);
    }

    #[test]
    fn test_quantity_and_item_edits_keep_mode() {
        let mut screen = OrderScreen::new(OrderRoute::new(5, "abc"));
        let load = screen.categories_loaded(vec![category("c1", "Drinks")]).unwrap();
        screen.products_loaded(&load, vec![product("p1", "Cola")]);
        assert!(screen.open_product_picker());

        screen.set_quantity("3".to_string());
        assert_eq!(screen.mode(), Mode::PickingProduct);
        add(&mut screen, "i1");
        assert_eq!(screen.mode(), Mode::PickingProduct);

        screen.dismiss_picker();
        screen.set_quantity("4".to_string());
        assert_eq!(screen.mode(), Mode::Browsing);
    }

    #[test]
    fn test_advance_forwards_route_unchanged() {
        let mut screen = OrderScreen::new(OrderRoute::new("7B", "xyz"));
        assert_eq!(screen.advance(), Err(OrderError::OrderEmpty));

        let load = screen.categories_loaded(vec![category("c1", "Drinks")]).unwrap();
        screen.products_loaded(&load, vec![product("p1", "Cola")]);
        add(&mut screen, "i1");

        match screen.advance().unwrap() {
            Navigation::FinishOrder(route) => {
                assert_eq!(route.number, TableNumber::Text("7B".to_string()));
                assert_eq!(route.order_id, "xyz");
                assert_eq!(&route, screen.route());
            }
            other => panic!("unexpected navigation: {:?}", other),
        }
    }
}
