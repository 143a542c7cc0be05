//! Toolbar Component
//!
//! Search box, completion filter, export links and the add button.

use leptos::prelude::*;
use taskmaster_api::{ExportFormat, TaskFilter};

use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="row g-2 align-items-center mb-3">
            <div class="col-md-5">
                <input
                    type="search"
                    id="searchInput"
                    class="form-control"
                    placeholder="Search tasks..."
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.spawn(move |controller| async move { controller.on_search_input(text).await });
                    }
                />
            </div>

            <div class="col-md-4">
                <div class="btn-group" role="group">
                    {TaskFilter::CHOICES.into_iter().map(|filter| {
                        let id = format!("filter-{}", filter.as_str());
                        view! {
                            <input
                                type="radio"
                                class="btn-check"
                                name="filter"
                                id=id.clone()
                                value=filter.as_str()
                                prop:checked=move || ctx.view.filter.get() == filter
                                on:change=move |_| {
                                    ctx.spawn(move |controller| async move { controller.set_filter(filter).await });
                                }
                            />
                            <label class="btn btn-outline-secondary" for=id>{filter.label()}</label>
                        }
                    }).collect_view()}
                </div>
            </div>

            <div class="col-md-3 text-end">
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm me-1"
                    on:click=move |_| ctx.with(|c| c.export_tasks(ExportFormat::Csv))
                >
                    "Export CSV"
                </button>
                <button
                    type="button"
                    class="btn btn-outline-secondary btn-sm me-1"
                    on:click=move |_| ctx.with(|c| c.export_tasks(ExportFormat::Json))
                >
                    "Export JSON"
                </button>
                <button
                    type="button"
                    class="btn btn-primary btn-sm"
                    on:click=move |_| ctx.with(|c| c.open_create())
                >
                    "Add Task"
                </button>
            </div>
        </div>
    }
}
