//! Delete Modal Component
//!
//! Confirmation step before a task is deleted.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn DeleteModal() -> impl IntoView {
    let ctx = use_app_context();
    let dismiss = move || ctx.with(|c| c.dismiss_delete());

    view! {
        <Show when=move || ctx.view.delete_modal_open.get()>
            <div class="modal-backdrop fade show"></div>
            <div class="modal d-block" id="deleteModal" tabindex="-1" on:click=move |_| dismiss()>
                <div class="modal-dialog modal-sm" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">"Confirm Delete"</h5>
                            <button type="button" class="btn-close" on:click=move |_| dismiss()></button>
                        </div>
                        <div class="modal-body">
                            "Are you sure you want to delete this task? This action cannot be undone."
                        </div>
                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| dismiss()>
                                "Cancel"
                            </button>
                            <button
                                type="button"
                                id="confirmDeleteBtn"
                                class="btn btn-danger"
                                on:click=move |_| {
                                    ctx.spawn(|controller| async move { controller.confirm_delete().await });
                                }
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
