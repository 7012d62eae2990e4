//! Grocery Row
//!
//! One list entry: thumbnail, name, quantity (static text or numeric input
//! while in edit mode), and the minus / edit-or-confirm / plus buttons.

use leptos::prelude::*;

use crate::models::GroceryItem;

#[component]
pub fn GroceryRow(
    item: GroceryItem,
    /// Whether this row currently shows the inline quantity input
    editing: Signal<bool>,
    /// Pending text of the inline input
    pending: Signal<String>,
    on_input: Callback<String>,
    on_decrease: Callback<()>,
    /// Enters edit mode, or confirms the pending value when already editing
    on_toggle_edit: Callback<()>,
    on_increase: Callback<()>,
) -> impl IntoView {
    let quantity_label = format!("{} {}", item.quantity, item.unit);

    view! {
        <div class="grocery-item">
            <img class="grocery-image" src=item.image.clone() alt=item.name.clone() />
            <div class="grocery-details">
                <span class="grocery-name">{item.name.clone()}</span>
                <Show
                    when=move || editing.get()
                    fallback={
                        let quantity_label = quantity_label.clone();
                        move || {
                            view! { <span class="grocery-quantity">{quantity_label.clone()}</span> }
                        }
                    }
                >
                    <input
                        type="text"
                        inputmode="decimal"
                        class="quantity-input"
                        prop:value=move || pending.get()
                        on:input=move |ev| on_input.run(event_target_value(&ev))
                    />
                </Show>
            </div>
            <button class="round-btn minus-btn" on:click=move |_| on_decrease.run(())>
                "−"
            </button>
            <button
                class=move || if editing.get() { "round-btn confirm-btn" } else { "round-btn edit-btn" }
                on:click=move |_| on_toggle_edit.run(())
            >
                {move || if editing.get() { "✔" } else { "✏️" }}
            </button>
            <button class="round-btn plus-btn" on:click=move |_| on_increase.run(())>
                "+"
            </button>
        </div>
    }
}
