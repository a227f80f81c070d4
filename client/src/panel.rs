use leptos::prelude::*;
use statemap_shared::interaction::customer_label;
use statemap_shared::stories::{PanelState, stories_for_state};

use crate::app::WidgetContext;

/// Side panel for the selected state: its name, count and customer stories.
#[component]
pub fn InfoPanel() -> impl IntoView {
    let ctx: WidgetContext = expect_context();
    let on_close = move |_: web_sys::MouseEvent| ctx.close_panel();

    view! {
        {move || {
            let PanelState::Open { name, count } = ctx.panel.get() else {
                return view! { <div style="display:none;" /> }.into_any();
            };
            let stories = ctx
                .engine
                .with_value(|engine| stories_for_state(engine.directory(), engine.records(), &name));

            view! {
                <aside
                    class="info-panel"
                    style="position: absolute; top: 12px; right: 12px; width: 260px; max-height: calc(100% - 24px); overflow-y: auto; background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px; box-shadow: 0 4px 16px rgba(0,0,0,0.12); padding: 14px 16px; z-index: 50;"
                >
                    <div style="display: flex; align-items: baseline; justify-content: space-between; gap: 8px;">
                        <h2 style="margin: 0; font-size: 1.05rem; color: #111827;">{name}</h2>
                        <button
                            class="info-panel-close"
                            aria-label="Close"
                            style="border: none; background: none; font-size: 1.1rem; line-height: 1; color: #6b7280; cursor: pointer;"
                            on:click=on_close
                        >
                            "×"
                        </button>
                    </div>
                    <div style="margin-top: 4px; font-size: 0.85rem; color: #4b5563;">{customer_label(count)}</div>
                    {if stories.is_empty() {
                        view! { <p style="margin: 10px 0 0; font-size: 0.8rem; color: #9ca3af;">"No customer stories yet."</p> }.into_any()
                    } else {
                        view! {
                            <ul style="list-style: none; margin: 10px 0 0; padding: 0;">
                                {stories
                                    .into_iter()
                                    .map(|story| {
                                        let label = match &story.id {
                                            Some(id) => format!("Customer story #{id}"),
                                            None => "Customer story".to_string(),
                                        };
                                        view! {
                                            <li style="padding: 4px 0; border-top: 1px solid #f3f4f6;">
                                                <a
                                                    href=story.blog_url
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    style="font-size: 0.85rem; color: #2563eb; text-decoration: none;"
                                                >
                                                    {label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </aside>
            }
            .into_any()
        }}
    }
}
