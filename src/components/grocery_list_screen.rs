//! Grocery List Screen
//!
//! The one stateful screen. Owns the item collection, the per-row edit
//! state, and the add-modal visibility; all three are created on mount and
//! dropped on unmount, so nothing survives navigating away and back.

use leptos::prelude::*;

use crate::components::{AddGroceryModal, GroceryRow};
use crate::router::use_navigator;
use crate::store::{EditState, GroceryDraft, GroceryList};

#[component]
pub fn GroceryListScreen() -> impl IntoView {
    let nav = use_navigator();

    let (groceries, set_groceries) = signal(GroceryList::seeded());
    let (edit, set_edit) = signal(EditState::default());
    let (modal_open, set_modal_open) = signal(false);

    let open_modal = move |_| {
        web_sys::console::log_1(&"[GroceryList] opening add modal".into());
        set_modal_open.set(true);
    };

    // Closes the modal only when the draft was accepted
    let on_add = Callback::new(move |draft: GroceryDraft| {
        let mut added = false;
        set_groceries.update(|list| added = list.add(&draft));
        if added {
            set_modal_open.set(false);
        }
        added
    });
    let on_close = Callback::new(move |_| set_modal_open.set(false));

    view! {
        <div class="screen grocery-screen">
            <button class="back-btn" on:click=move |_| nav.go_back()>
                "← Back"
            </button>
            <h1 class="screen-title">"Grocery List"</h1>

            <div class="grocery-list">
                <For
                    each=move || groceries.get().items().to_vec()
                    // Quantity is part of the key so a changed row re-renders
                    key=|item| (item.id.clone(), item.quantity.to_bits())
                    children=move |item| {
                        let id = item.id.clone();
                        let editing = Signal::derive({
                            let id = id.clone();
                            move || edit.get().is_editing(&id)
                        });
                        let pending = Signal::derive({
                            let id = id.clone();
                            move || edit.get().input(&id)
                        });
                        let on_input = Callback::new({
                            let id = id.clone();
                            move |value: String| {
                                set_edit.update(|edit| edit.set_input(&id, value));
                            }
                        });
                        let on_decrease = Callback::new({
                            let id = id.clone();
                            move |_| set_groceries.update(|list| list.decrease(&id))
                        });
                        let on_increase = Callback::new({
                            let id = id.clone();
                            move |_| set_groceries.update(|list| list.increase(&id))
                        });
                        let on_toggle_edit = Callback::new({
                            let id = id.clone();
                            move |_| {
                                if edit.get().is_editing(&id) {
                                    let input = edit.get().input(&id);
                                    set_groceries.update(|list| list.confirm_edit(&id, &input));
                                    set_edit.update(|edit| edit.end(&id));
                                } else {
                                    let current = groceries
                                        .get()
                                        .get(&id)
                                        .map(|item| item.quantity)
                                        .unwrap_or(0.0);
                                    set_edit.update(|edit| edit.begin(&id, current));
                                }
                            }
                        });

                        view! {
                            <GroceryRow
                                item=item
                                editing=editing
                                pending=pending
                                on_input=on_input
                                on_decrease=on_decrease
                                on_toggle_edit=on_toggle_edit
                                on_increase=on_increase
                            />
                        }
                    }
                />
            </div>

            <button class="fab" on:click=open_modal>
                "+"
            </button>

            <Show when=move || modal_open.get()>
                <AddGroceryModal on_add=on_add on_close=on_close />
            </Show>
        </div>
    }
}
