use leptos::*;
use leptos_router::*;

use crate::pages::{finish_order::FinishOrderPage, order::OrderPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes>
                    <Route path="/table/:number/order/:order_id" view=OrderPage />
                    <Route path="/table/:number/order/:order_id/finish" view=FinishOrderPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card empty-state">
            <p>"Nothing here."</p>
            <p>"Open an order from the table list to start adding items."</p>
        </div>
    }
}
