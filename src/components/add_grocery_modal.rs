//! Add Grocery Modal
//!
//! Overlay form for creating a new grocery item. The component is mounted
//! only while the modal is open, so the draft resets on every open. The
//! parent decides whether a submit closes the modal: invalid drafts are a
//! silent no-op and the form stays up with its text intact.

use leptos::prelude::*;

use crate::store::GroceryDraft;

#[component]
pub fn AddGroceryModal(
    /// Attempt to add the draft; returns whether it was accepted
    on_add: Callback<GroceryDraft, bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (unit, set_unit) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = GroceryDraft {
            name: name.get(),
            quantity: quantity.get(),
            unit: unit.get(),
        };
        on_add.run(draft);
    };

    // Mirrors the submit button's disabled state; whitespace-only input
    // still reaches the store and no-ops there.
    let missing_field =
        move || name.get().is_empty() || quantity.get().is_empty() || unit.get().is_empty();

    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                <button class="modal-close-btn" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <h2 class="modal-title">"Add New Grocery"</h2>
                <form class="add-grocery-form" on:submit=submit>
                    <input
                        type="text"
                        class="modal-input"
                        placeholder="Grocery Name"
                        prop:value=name
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        inputmode="decimal"
                        class="modal-input"
                        placeholder="Quantity"
                        prop:value=quantity
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        class="modal-input"
                        placeholder="Unit (kg, pcs, etc.)"
                        prop:value=unit
                        on:input=move |ev| set_unit.set(event_target_value(&ev))
                    />
                    <button type="submit" class="modal-add-btn" disabled=missing_field>
                        "Add Item"
                    </button>
                </form>
            </div>
        </div>
    }
}
