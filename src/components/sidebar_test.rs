use super::*;

fn labels(role: Role) -> Vec<&'static str> {
    visible_links(role).into_iter().map(|entry| entry.label).collect()
}

// =============================================================
// Link visibility per role
// =============================================================

#[test]
fn student_sees_member_links_only() {
    assert_eq!(
        labels(Role::Student),
        vec!["Home", "Profile", "Network", "Connections", "Job Board", "Events"]
    );
}

#[test]
fn alumni_see_member_links_plus_posting_links() {
    assert_eq!(
        labels(Role::Alumni),
        vec![
            "Home",
            "Profile",
            "Network",
            "Connections",
            "Job Board",
            "Events",
            "Post Job",
            "Create Event",
        ]
    );
}

#[test]
fn admin_sees_admin_section_plus_directories() {
    assert_eq!(
        labels(Role::Admin),
        vec!["Stats", "Verify Users", "View Users", "Job Board", "Events"]
    );
}

#[test]
fn no_role_sees_another_sections_tools() {
    assert!(!labels(Role::Student).contains(&"Post Job"));
    assert!(!labels(Role::Student).contains(&"Verify Users"));
    assert!(!labels(Role::Alumni).contains(&"View Users"));
    assert!(!labels(Role::Admin).contains(&"Profile"));
}

#[test]
fn visible_links_preserve_table_order() {
    let links = visible_links(Role::Alumni);
    let positions: Vec<usize> = links
        .iter()
        .map(|entry| {
            NAV_ENTRIES
                .iter()
                .position(|candidate| std::ptr::eq(*entry, candidate))
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

// =============================================================
// Header target
// =============================================================

#[test]
fn header_route_is_role_aware() {
    assert_eq!(header_route(Role::Admin), "/admin/dashboard");
    assert_eq!(header_route(Role::Student), "/home");
    assert_eq!(header_route(Role::Alumni), "/home");
}
