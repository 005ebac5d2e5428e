//! Toast notice

use crate::app::use_app_state;
use leptos::prelude::*;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-container position-fixed top-0 end-0 p-3">
            {move || {
                state
                    .notice
                    .get()
                    .map(|notice| {
                        let class = format!("toast show border-{}", notice.kind.as_str());
                        view! {
                            <div class=class role="alert">
                                <div class="toast-header">
                                    <strong class="me-auto">{notice.title}</strong>
                                    <button
                                        type="button"
                                        class="btn-close"
                                        on:click=move |_| state.notice.set(None)
                                    ></button>
                                </div>
                                <div class="toast-body">{notice.text}</div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
