use leptos::*;

use crate::pages::registry::RegistryPage;
use crate::utils::notify::Notifier;

#[component]
pub fn App() -> impl IntoView {
    // One notification channel for the whole app
    provide_context(Notifier::new());

    view! {
        <main>
            <RegistryPage />
        </main>
    }
}
