use leptos::*;
use shared::PickerOption;

/// `(id, label)` pairs in list order, as shown by [`PickerModal`].
pub fn picker_entries<T: PickerOption>(options: &[T]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|option| (option.id().to_string(), option.label().to_string()))
        .collect()
}

/// Modal list selection. Reports the index of the chosen entry.
#[component]
pub fn PickerModal(
    title: &'static str,
    options: Vec<(String, String)>,
    selected_id: Option<String>,
    #[prop(into)] on_select: Callback<usize>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let close = move |_| on_close.call(());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal picker-modal" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" on:click=close>"×"</button>
                </div>
                <ul class="picker-list">
                    {options.into_iter().enumerate().map(|(index, (id, label))| {
                        let class = if selected_id.as_deref() == Some(id.as_str()) {
                            "picker-item picker-item-selected"
                        } else {
                            "picker-item"
                        };
                        view! {
                            <li class=class on:pointerup=move |_| on_select.call(index)>
                                {label}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </div>
    }
}
