pub mod notify;

use shared::MemberMap;

/// Case-insensitive substring filter across name, phone, email, and the RFID
/// key itself. Runs against an already-fetched list and never touches the
/// store.
pub fn filter_members(members: &MemberMap, query: &str) -> MemberMap {
    let query = query.to_lowercase();

    members
        .iter()
        .filter(|(rfid, member)| {
            member.name.to_lowercase().contains(&query)
                || member.phone.to_lowercase().contains(&query)
                || member.email.to_lowercase().contains(&query)
                || rfid.to_lowercase().contains(&query)
        })
        .map(|(rfid, member)| (rfid.clone(), member.clone()))
        .collect()
}

/// The points field is free text in the form; anything non-numeric counts
/// as zero.
pub fn parse_points(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
