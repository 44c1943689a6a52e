//! Cross-module checks of the behaviour the shell and views rely on

use ignytion_core::{
    active_item, AdminTab, AdminWorkspace, ContactField, ContactForm, LoginGate, MenuState,
    NoticeBoard, NoticeLevel, OsPlatform, Resolution, RouteTable, SiteConfig, VersionList,
    VersionStatus, ViewId, PRIMARY_NAV,
};

/// Mirror of what the header does on each navigation
fn navigate(table: &RouteTable, menu: MenuState, path: &str) -> (ViewId, String, MenuState) {
    let resolution = table.resolve(path);
    let location = match resolution {
        Resolution::View(_) => path.to_string(),
        Resolution::Redirect { to, .. } => to.to_string(),
    };
    (resolution.view(), location, menu.link_activated())
}

#[test]
fn registered_paths_render_their_view_and_highlight_at_most_one_link() {
    let table = RouteTable::standard().unwrap();

    for route in table.routes() {
        let (view, location, _) = navigate(&table, MenuState::Closed, route.path);
        assert_eq!(view, route.view);
        assert_eq!(location, route.path);

        let active = PRIMARY_NAV
            .iter()
            .filter(|item| item.is_active(&location))
            .count();
        let is_nav_target = PRIMARY_NAV.iter().any(|item| item.path == route.path);
        assert_eq!(active, usize::from(is_nav_target), "{}", route.path);
    }
}

#[test]
fn unknown_path_lands_on_home_with_no_active_link() {
    let table = RouteTable::standard().unwrap();
    let (view, location, _) = navigate(&table, MenuState::Closed, "/careers");

    assert_eq!(view, ViewId::Home);
    assert_eq!(location, "/");
    assert!(active_item(&location).is_none());
}

#[test]
fn history_replay_restores_the_same_views() {
    let table = RouteTable::standard().unwrap();
    let visited = ["/", "/pricing", "/docs", "/admin"];

    let forward: Vec<_> = visited.iter().map(|p| table.resolve(p).view()).collect();
    let back: Vec<_> = visited.iter().rev().map(|p| table.resolve(p).view()).collect();

    let mut expected = forward.clone();
    expected.reverse();
    assert_eq!(back, expected);
}

#[test]
fn following_a_link_from_the_open_mobile_menu_closes_it() {
    let table = RouteTable::standard().unwrap();
    let menu = MenuState::default().toggle();
    assert!(menu.is_open());

    let (view, _, menu) = navigate(&table, menu, "/downloads");
    assert_eq!(view, ViewId::Downloads);
    assert_eq!(menu, MenuState::Closed);
}

#[test]
fn contact_submission_produces_one_notice_and_clears_the_form() {
    let mut board = NoticeBoard::new();
    let mut form = ContactForm::new();
    form.set(ContactField::Name, "Grace");
    form.set(ContactField::Email, "grace@example.com");
    form.set(ContactField::Subject, "Training");
    form.set(ContactField::Message, "Do you run workshops?");

    if let Ok(notice) = form.submit() {
        board.push(notice);
    }

    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].1.level, NoticeLevel::Success);
    assert_eq!(form, ContactForm::default());
}

#[test]
fn failed_then_successful_login() {
    let mut board = NoticeBoard::new();
    let mut gate = LoginGate::new();

    gate.username = "admin".into();
    gate.password = "hunter2".into();
    board.push(gate.attempt());
    assert!(!gate.is_authenticated());
    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].1.level, NoticeLevel::Error);

    gate.password = "admin".into();
    board.push(gate.attempt());
    assert!(gate.is_authenticated());
    assert_eq!(board.entries()[1].1.level, NoticeLevel::Success);
}

#[test]
fn admin_version_workflow() {
    let mut versions = VersionList::seeded();
    let release = chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    let id = versions.add("3.3.0-rc1", release).unwrap();
    assert_eq!(versions.len(), 4);

    versions.publish(id).unwrap();
    assert_eq!(versions.get(id).unwrap().status, VersionStatus::Published);
    assert_eq!(versions.get(3).unwrap().status, VersionStatus::Draft);

    versions.remove(1).unwrap();
    assert_eq!(versions.len(), 3);
    assert!(versions.get(1).is_none());
    assert!(versions.get(id).is_some());
}

#[test]
fn admin_edits_outlive_tab_switches_and_sign_out() {
    let config = SiteConfig::load();
    let mut gate = LoginGate::new();
    let mut workspace = AdminWorkspace::new(&config);
    let release = chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

    gate.username = "admin".into();
    gate.password = "admin".into();
    gate.attempt();

    workspace.select_tab(AdminTab::Versions);
    workspace.add_version("3.2.0", release).unwrap();
    workspace.select_tab(AdminTab::Settings);
    workspace.site.name = "Ignytion Labs".into();

    gate.sign_out();
    assert!(!gate.is_authenticated());
    gate.username = "admin".into();
    gate.password = "admin".into();
    gate.attempt();

    assert_eq!(workspace.current_tab(), AdminTab::Settings);
    assert_eq!(workspace.versions.len(), 4);
    assert_eq!(workspace.site.name, "Ignytion Labs");
    assert_eq!(workspace.content, config.content);
}

#[test]
fn platform_picker_keeps_exactly_one_selected() {
    let mut picker = OsPlatform::picker();
    picker.select(OsPlatform::Windows);
    picker.select(OsPlatform::MacOs);

    let selected: Vec<_> = OsPlatform::ALL
        .into_iter()
        .filter(|p| picker.is_selected(*p))
        .collect();
    assert_eq!(selected, [OsPlatform::MacOs]);
}
