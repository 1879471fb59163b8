use leptos::*;

/// Free-text quantity field. The text is passed on verbatim.
#[component]
pub fn QuantityInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] id: Option<String>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            inputmode="numeric"
            class="form-input quantity-input"
            id=id
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}

