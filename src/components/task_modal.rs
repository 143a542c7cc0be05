//! Task Modal Component
//!
//! Create/edit form. Every way of hiding it (cancel, close button, backdrop
//! click, successful save) goes through `reset_task_form`.

use leptos::prelude::*;
use taskmaster_api::Priority;

use crate::context::use_app_context;

#[component]
pub fn TaskModal() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let dismiss = move || ctx.with(|c| c.reset_task_form());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.spawn(|controller| async move { controller.save_task().await });
    };

    view! {
        <Show when=move || ctx.view.task_modal.with(|m| m.is_open())>
            <div class="modal-backdrop fade show"></div>
            <div class="modal d-block" id="taskModal" tabindex="-1" on:click=move |_| dismiss()>
                <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-content">
                        <form id="taskForm" on:submit=on_submit>
                            <div class="modal-header">
                                <h5 class="modal-title">
                                    {move || ctx.view.task_modal.with(|m| m.heading())}
                                </h5>
                                <button type="button" class="btn-close" on:click=move |_| dismiss()></button>
                            </div>

                            <div class="modal-body">
                                <div class="mb-3">
                                    <label for="taskTitle" class="form-label">"Title"</label>
                                    <input
                                        type="text"
                                        id="taskTitle"
                                        class="form-control"
                                        required
                                        prop:value=move || state.with(|s| s.form.title.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            ctx.with(|c| c.edit_form(|f| f.title = value));
                                        }
                                    />
                                </div>

                                <div class="mb-3">
                                    <label for="taskDescription" class="form-label">"Description"</label>
                                    <textarea
                                        id="taskDescription"
                                        class="form-control"
                                        rows="3"
                                        prop:value=move || state.with(|s| s.form.description.clone())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            ctx.with(|c| c.edit_form(|f| f.description = value));
                                        }
                                    ></textarea>
                                </div>

                                <div class="mb-3">
                                    <label for="taskPriority" class="form-label">"Priority"</label>
                                    <select
                                        id="taskPriority"
                                        class="form-select"
                                        prop:value=move || state.with(|s| s.form.priority.as_str().to_string())
                                        on:change=move |ev| {
                                            let value = event_target_value(&ev);
                                            ctx.with(|c| c.edit_form(|f| f.priority = Priority::from(value)));
                                        }
                                    >
                                        {Priority::CHOICES.into_iter().map(|priority| {
                                            let value = priority.as_str().to_string();
                                            let label = value.clone();
                                            view! { <option value=value>{label}</option> }
                                        }).collect_view()}
                                    </select>
                                </div>

                                <Show when=move || ctx.view.task_modal.with(|m| m.shows_completed_field())>
                                    <div class="form-check" id="completedField">
                                        <input
                                            type="checkbox"
                                            id="taskCompleted"
                                            class="form-check-input"
                                            prop:checked=move || state.with(|s| s.form.completed)
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                ctx.with(|c| c.edit_form(|f| f.completed = checked));
                                            }
                                        />
                                        <label for="taskCompleted" class="form-check-label">"Completed"</label>
                                    </div>
                                </Show>
                            </div>

                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" on:click=move |_| dismiss()>
                                    "Cancel"
                                </button>
                                <button type="submit" id="taskSubmitBtn" class="btn btn-primary">
                                    {move || ctx.view.task_modal.with(|m| m.submit_label())}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </Show>
    }
}
