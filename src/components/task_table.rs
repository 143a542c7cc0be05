//! Task Table Component

use leptos::prelude::*;

use crate::components::TaskRowView;
use crate::context::use_app_context;
use crate::render::{COLUMN_COUNT, PLACEHOLDER_TEXT};
use crate::state::TableView;

/// Task table; the body always holds either rows, the placeholder, or a spinner
#[component]
pub fn TaskTable() -> impl IntoView {
    let ctx = use_app_context();
    let colspan = COLUMN_COUNT.to_string();

    view! {
        <div class="table-responsive">
            <table class="table table-hover align-middle">
                <thead class="table-light">
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Description"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody id="tasksTableBody">
                    {move || match ctx.view.table.get() {
                        TableView::Loading => view! {
                            <tr>
                                <td colspan=colspan.clone() class="text-center py-4">
                                    <div class="spinner-border text-primary" role="status">
                                        <span class="visually-hidden">"Loading..."</span>
                                    </div>
                                </td>
                            </tr>
                        }.into_any(),
                        TableView::Empty => view! {
                            <tr>
                                <td colspan=colspan.clone() class="text-center py-4 text-muted">
                                    {PLACEHOLDER_TEXT}
                                </td>
                            </tr>
                        }.into_any(),
                        TableView::Rows(rows) => rows
                            .into_iter()
                            .map(|row| view! { <TaskRowView row=row /> })
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}
