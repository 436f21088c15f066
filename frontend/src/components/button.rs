use leptos::*;

#[derive(Default, Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Success,
}

/// Reusable button component with variants.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Secondary => "btn",
        ButtonVariant::Danger => "btn btn-danger",
        ButtonVariant::Success => "btn btn-success",
    };

    let full_class = if let Some(extra) = class {
        format!("{} {}", variant_class, extra)
    } else {
        variant_class.to_string()
    };

    view! {
        <button
            type="button"
            class=full_class
            disabled=disabled
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
