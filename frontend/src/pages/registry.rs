use leptos::*;
use shared::{Member, MemberMap, SaveMemberRequest};
use wasm_bindgen::JsCast;

use crate::api::ApiClient;
use crate::components::alert::NoticeAlert;
use crate::components::button::{Button, ButtonVariant};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::member_row::MemberRow;
use crate::components::text_input::TextInput;
use crate::utils::notify::Notifier;
use crate::utils::{filter_members, parse_points};

#[component]
pub fn RegistryPage() -> impl IntoView {
    let notify = expect_context::<Notifier>();

    // Form fields
    let rfid = create_rw_signal(String::new());
    let name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let points = create_rw_signal("0".to_string());

    // RFID of the record the form is bound to. `None` means new-entry mode.
    let selected = create_rw_signal(Option::<String>::None);
    let members = create_rw_signal(MemberMap::new());
    let search = create_rw_signal(String::new());
    let loading = create_rw_signal(true);

    // (rfid, name) awaiting delete confirmation from the list
    let confirm_delete = create_rw_signal(Option::<(String, String)>::None);

    let is_existing = move || selected.get().is_some();

    let reload_members = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::get_members().await {
                Ok(m) => {
                    members.set(m);
                    loading.set(false);
                }
                Err(e) => {
                    notify.error("Error!", &e);
                    loading.set(false);
                }
            }
        });
    };

    let clear_form = move || {
        rfid.set(String::new());
        name.set(String::new());
        phone.set(String::new());
        email.set(String::new());
        points.set("0".to_string());
        selected.set(None);
        focus_rfid();
    };

    // Initial load
    reload_members();

    // An RFID scan (change event on the tag field) decides the form mode:
    // known tag populates the form, unknown tag prepares a blank entry.
    let on_rfid_change = move |value: String| {
        let tag = value.trim().to_string();
        if tag.is_empty() {
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::get_member(&tag).await {
                Ok(Some(member)) => {
                    name.set(member.name.clone());
                    phone.set(member.phone);
                    email.set(member.email);
                    points.set(member.points.to_string());
                    notify.success("Member Found!", &format!("Member {} found", member.name));
                    selected.set(Some(tag));
                }
                Ok(None) => {
                    selected.set(None);
                    name.set(String::new());
                    phone.set(String::new());
                    email.set(String::new());
                    points.set("0".to_string());
                    notify.info("New Member", "RFID is not registered, enter the member details");
                }
                Err(e) => notify.error("Error!", &e),
            }
        });
    };

    let form_request = move || SaveMemberRequest {
        rfid: rfid.get().trim().to_string(),
        name: name.get().trim().to_string(),
        phone: phone.get().trim().to_string(),
        email: email.get().trim().to_string(),
        points: parse_points(&points.get()),
    };

    let on_add = move |_| {
        let request = form_request();

        if request.rfid.is_empty() {
            notify.error("Error!", "RFID must not be empty");
            return;
        }
        if request.name.is_empty() {
            notify.error("Error!", "Name must not be empty");
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::add_member(&request).await {
                Ok(()) => {
                    notify.success("Success!", "Member added");
                    reload_members();
                    clear_form();
                }
                Err(e) => notify.error("Error!", &e),
            }
        });
    };

    let on_update = move |_| {
        if selected.get().is_none() {
            return;
        }

        let request = form_request();
        if request.name.is_empty() {
            notify.error("Error!", "Name must not be empty");
            return;
        }

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::update_member(&request).await {
                Ok(()) => {
                    notify.success("Success!", "Member updated");
                    reload_members();
                    clear_form();
                }
                Err(e) => notify.error("Error!", &e),
            }
        });
    };

    let perform_delete = move |tag: String| {
        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::delete_member(&tag).await {
                Ok(()) => {
                    notify.success("Deleted!", "Member removed");
                    reload_members();
                    clear_form();
                }
                Err(e) => notify.error("Error!", &e),
            }
        });
    };

    let on_delete_selected = move |_| {
        if let Some(tag) = selected.get() {
            perform_delete(tag);
        }
    };

    // Populate the form from a list entry
    let on_edit = move |(tag, member): (String, Member)| {
        rfid.set(tag.clone());
        name.set(member.name);
        phone.set(member.phone);
        email.set(member.email);
        points.set(member.points.to_string());
        selected.set(Some(tag));
    };

    // Search always refetches the full list before filtering, so stale
    // client state never hides a freshly added member.
    let on_search = move || {
        let query = search.get().trim().to_string();

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::get_members().await {
                Ok(all) => {
                    if query.is_empty() {
                        members.set(all);
                    } else {
                        members.set(filter_members(&all, &query));
                    }
                }
                Err(e) => notify.error("Error!", &e),
            }
        });
    };

    let preview = move |signal: RwSignal<String>| {
        move || {
            let value = signal.get();
            if value.trim().is_empty() {
                "-".to_string()
            } else {
                value
            }
        }
    };

    view! {
        {move || notify.current().map(|notice| view! {
            <NoticeAlert notice=notice on_dismiss=move |_| notify.dismiss() />
        })}

        <div class="registry-form">
            <h1 class="registry-title">"Member Registry"</h1>

            <div class="form-group">
                <label for="rfid">"RFID"</label>
                <TextInput
                    value=rfid
                    id="rfid"
                    placeholder="Scan or type an RFID tag"
                    on_change=Callback::new(on_rfid_change)
                />
            </div>
            <div class="form-group">
                <label for="name">"Name"</label>
                <TextInput value=name id="name" placeholder="Member name" />
            </div>
            <div class="form-group">
                <label for="phone">"Phone"</label>
                <TextInput value=phone id="phone" placeholder="Phone number" />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <TextInput value=email id="email" input_type="email" placeholder="Email address" />
            </div>
            <div class="form-group">
                <label for="points">"Points"</label>
                <TextInput value=points id="points" input_type="number" />
            </div>

            <div class="form-actions">
                <Button
                    variant=ButtonVariant::Primary
                    disabled=Signal::derive(is_existing)
                    on_click=Callback::new(on_add)
                >
                    "Add"
                </Button>
                <Button
                    variant=ButtonVariant::Success
                    disabled=Signal::derive(move || !is_existing())
                    on_click=Callback::new(on_update)
                >
                    "Update"
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=Signal::derive(move || !is_existing())
                    on_click=Callback::new(on_delete_selected)
                >
                    "Delete"
                </Button>
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| clear_form())
                >
                    "Clear"
                </Button>
            </div>
        </div>

        <div class="preview-card">
            <h2>"Card Preview"</h2>
            <p>"RFID: " {preview(rfid)}</p>
            <p>"Name: " {preview(name)}</p>
            <p>"Phone: " {preview(phone)}</p>
            <p>"Points: " {move || {
                let value = points.get();
                if value.trim().is_empty() { "0".to_string() } else { value }
            }}</p>
        </div>

        <div class="search-bar">
            <TextInput
                value=search
                id="search"
                placeholder="Search name, phone, email, or RFID"
                on_enter=Callback::new(move |_| on_search())
            />
            <Button on_click=Callback::new(move |_| on_search())>"Search"</Button>
        </div>

        <div class="members-list">
            {move || {
                if loading.get() {
                    return view! { <p class="loading">"Loading..."</p> }.into_view();
                }

                let list = members.get();
                if list.is_empty() {
                    view! { <p class="no-members">"No members registered"</p> }.into_view()
                } else {
                    list.into_iter()
                        .map(|(tag, member)| {
                            view! {
                                <MemberRow
                                    rfid=tag
                                    member=member
                                    on_edit=Callback::new(on_edit)
                                    on_delete=Callback::new(move |(tag, name)| {
                                        confirm_delete.set(Some((tag, name)))
                                    })
                                />
                            }
                        })
                        .collect_view()
                }
            }}
        </div>

        {move || confirm_delete.get().map(|(tag, member_name)| {
            view! {
                <ConfirmDialog
                    title="Delete Member?"
                    text=format!("Are you sure you want to delete {}?", member_name)
                    confirm_label="Yes, delete"
                    cancel_label="Cancel"
                    on_confirm=Callback::new(move |_| {
                        confirm_delete.set(None);
                        perform_delete(tag.clone());
                    })
                    on_cancel=Callback::new(move |_| confirm_delete.set(None))
                />
            }
        })}
    }
}

/// Put the cursor back on the RFID field for the next scan.
fn focus_rfid() {
    if let Some(element) = document().get_element_by_id("rfid") {
        if let Ok(input) = element.dyn_into::<web_sys::HtmlInputElement>() {
            let _ = input.focus();
        }
    }
}
