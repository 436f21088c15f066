use leptos::*;

/// Blocking confirmation prompt used before destructive actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] cancel_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel = move |_| on_cancel.call(());

    view! {
        <div class="modal-backdrop" on:click=cancel>
            <div class="modal" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{title}</h3>
                    <button class="modal-close" on:click=cancel>"×"</button>
                </div>
                <p class="modal-text">{text}</p>
                <div class="modal-actions">
                    <button class="btn btn-danger" on:click=move |_| on_confirm.call(())>
                        {confirm_label}
                    </button>
                    <button class="btn" on:click=cancel>
                        {cancel_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
