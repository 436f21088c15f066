use leptos::*;

/// Text input component with consistent styling.
#[component]
pub fn TextInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    /// Fired when the field is committed (blur/enter), with the new value.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Fired when Enter is pressed inside the field.
    #[prop(optional)]
    on_enter: Option<Callback<()>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    let full_class = if let Some(extra) = class {
        format!("form-input {}", extra)
    } else {
        "form-input".to_string()
    };

    view! {
        <input
            type=input_type
            class=full_class
            id=id
            placeholder=placeholder
            disabled=disabled
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
            on:change=move |ev| {
                if let Some(callback) = on_change {
                    callback.call(event_target_value(&ev));
                }
            }
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    if let Some(callback) = on_enter {
                        callback.call(());
                    }
                }
            }
        />
    }
}
