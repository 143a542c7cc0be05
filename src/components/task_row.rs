//! Task Row Component
//!
//! Draws a [`TaskRow`] description. Text cells are filled with the
//! pre-escaped markup from `render`, never with raw task fields.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::TaskRow;

#[component]
pub fn TaskRowView(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();
    let TaskRow {
        id,
        row_class,
        title,
        description,
        priority,
        priority_tone,
        status,
        status_tone,
        created,
        actions,
    } = row;

    view! {
        <tr class=row_class>
            <td title=created>{id}</td>
            <td>
                <strong inner_html=title.into_string()></strong>
            </td>
            <td inner_html=description.into_string()></td>
            <td>
                <span class=priority_tone.badge_class() inner_html=priority.into_string()></span>
            </td>
            <td>
                <span class=status_tone.badge_class()>{status}</span>
            </td>
            <td>
                <div class="btn-group btn-group-sm">
                    {actions.into_iter().map(|action| view! {
                        <button
                            type="button"
                            class=action.button_class()
                            title=action.title()
                            on:click=move |_| {
                                ctx.spawn(move |controller| async move { controller.dispatch(action).await });
                            }
                        >
                            <i class=action.icon_class()></i>
                        </button>
                    }).collect_view()}
                </div>
            </td>
        </tr>
    }
}
