//! Client-side views over the member roster: search, ordering and the
//! supervisor hierarchy edited in the admin panel.

use std::cmp::Ordering;

use crate::data::Member;
use crate::id::MemberId;

/// `"<rank> <first> <last>"`, skipping an unknown rank.
pub fn display_name(member: &Member) -> String {
    let rank = member.rank.as_str();
    if rank.is_empty() {
        format!("{} {}", member.first_name, member.last_name)
    } else {
        format!("{rank} {} {}", member.first_name, member.last_name)
    }
}

/// Case-insensitive match on first name, last name or rank.
pub fn matches(member: &Member, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        member.first_name.as_str(),
        member.last_name.as_str(),
        member.rank.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&term))
}

fn by_name(a: &Member, b: &Member) -> Ordering {
    a.last_name
        .to_lowercase()
        .cmp(&b.last_name.to_lowercase())
        .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
}

pub fn sort_by_name(members: &mut [Member]) {
    members.sort_by(by_name);
}

/// Matching members, ordered by name.
pub fn search(members: &[Member], term: &str) -> Vec<Member> {
    let mut found: Vec<Member> = members
        .iter()
        .filter(|member| matches(member, term))
        .cloned()
        .collect();
    sort_by_name(&mut found);
    found
}

pub fn subordinates_of(members: &[Member], supervisor: &MemberId) -> Vec<Member> {
    let mut found: Vec<Member> = members
        .iter()
        .filter(|member| member.supervisor_id.as_ref() == Some(supervisor))
        .cloned()
        .collect();
    sort_by_name(&mut found);
    found
}

/// Members without a supervisor who could be assigned to `supervisor`.
pub fn available_for(members: &[Member], supervisor: &MemberId) -> Vec<Member> {
    let mut found: Vec<Member> = members
        .iter()
        .filter(|member| member.supervisor_id.is_none() && &member.id != supervisor)
        .cloned()
        .collect();
    sort_by_name(&mut found);
    found
}

/// Points `member` at `supervisor`. Returns whether anything changed.
pub fn assign(members: &mut [Member], member: &MemberId, supervisor: &MemberId) -> bool {
    if member == supervisor {
        return false;
    }
    match members.iter_mut().find(|m| &m.id == member) {
        Some(found) if found.supervisor_id.as_ref() != Some(supervisor) => {
            found.supervisor_id = Some(supervisor.clone());
            true
        }
        _ => false,
    }
}

/// Detaches `member` from its supervisor. Returns whether anything changed.
pub fn unassign(members: &mut [Member], member: &MemberId) -> bool {
    members
        .iter_mut()
        .find(|m| &m.id == member)
        .and_then(|found| found.supervisor_id.take())
        .is_some()
}
