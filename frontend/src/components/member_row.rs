use leptos::*;
use shared::Member;

/// One entry in the member list with edit and delete actions.
#[component]
pub fn MemberRow(
    rfid: String,
    member: Member,
    /// Receives the rfid and full record for form population.
    #[prop(into)]
    on_edit: Callback<(String, Member)>,
    /// Receives the rfid and display name for the confirmation prompt.
    #[prop(into)]
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let display_name = if member.name.is_empty() {
        "N/A".to_string()
    } else {
        member.name.clone()
    };
    let display_phone = if member.phone.is_empty() {
        "N/A".to_string()
    } else {
        member.phone.clone()
    };

    let edit_rfid = rfid.clone();
    let edit_member = member.clone();
    let delete_rfid = rfid.clone();
    let delete_name = display_name.clone();

    view! {
        <div class="member-item">
            <div class="member-info">
                <h3>{display_name}</h3>
                <p>{format!("RFID: {} | Phone: {} | Points: {}", rfid, display_phone, member.points)}</p>
            </div>
            <div class="member-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| on_edit.call((edit_rfid.clone(), edit_member.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| on_delete.call((delete_rfid.clone(), delete_name.clone()))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
