use leptos::*;

use crate::utils::notify::{Notice, NoticeKind};

/// Renders the current notice as a dismissible banner.
#[component]
pub fn NoticeAlert(notice: Notice, #[prop(into)] on_dismiss: Callback<()>) -> impl IntoView {
    let variant_class = match notice.kind {
        NoticeKind::Info => "alert alert-info",
        NoticeKind::Success => "alert alert-success",
        NoticeKind::Error => "alert alert-error",
    };

    view! {
        <div class=variant_class>
            <strong>{notice.title}</strong>
            " "
            {notice.text}
            <button
                class="alert-dismiss"
                type="button"
                on:click=move |_| on_dismiss.call(())
            >
                "×"
            </button>
        </div>
    }
}
