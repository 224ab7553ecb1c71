use fastonosql_core::{ConnectionType, WorkspaceConfig};
use fastonosql_test_support::{FakeConnection, FakeSessionFactory, init_test_logging};
use fastonosql_ui::{TabWorkspace, WorkspaceEvent};

fn open_tabs(workspace: &mut TabWorkspace, n: usize) {
    for i in 0..n {
        let connection = FakeConnection::redis(format!("redis-{}", i)).into_handle();
        workspace.open_session(Some(connection), &format!("KEYS {}*", i));
    }
}

#[test]
fn next_tab_wraps_around() {
    init_test_logging();
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 3);
    workspace.activate(1);

    workspace.next_tab();
    assert_eq!(workspace.active_index(), Some(2));

    workspace.next_tab();
    assert_eq!(workspace.active_index(), Some(0));

    workspace.previous_tab();
    assert_eq!(workspace.active_index(), Some(2));
}

#[test]
fn navigation_on_empty_workspace_is_a_no_op() {
    let mut workspace = TabWorkspace::new(FakeSessionFactory::new().boxed());
    workspace.next_tab();
    workspace.previous_tab();
    workspace.close_current_tab();
    workspace.close_other_tabs();
    workspace.reload_current_tab();

    assert!(workspace.create_new_tab().is_none());
    assert!(workspace.duplicate_current_tab().is_none());
    assert!(!workspace.close_tab(0));
    assert_eq!(workspace.active_index(), None);
    assert!(workspace.drain_events().is_empty());
}

#[test]
fn open_session_without_connection_is_ignored() {
    init_test_logging();
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());

    assert!(workspace.open_session(None, "PING").is_none());
    assert!(workspace.open_session_and_execute(None, "PING").is_none());
    assert!(workspace.is_empty());
    assert_eq!(factory.stats().created, 0);
}

#[test]
fn open_session_labels_and_activates_tab() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    let connection =
        FakeConnection::new("cache.local:11211", ConnectionType::Memcached).into_handle();

    let id = workspace.open_session(Some(connection), "stats").unwrap();

    let tab = workspace.active_tab().unwrap();
    assert_eq!(tab.id(), id);
    assert_eq!(tab.title(), "cache.local:11211");
    assert_eq!(tab.icon_name(), "memcached");
    assert_eq!(tab.session().input_text(), "stats");
    assert_eq!(
        workspace.drain_events(),
        vec![WorkspaceEvent::Opened(id), WorkspaceEvent::Activated(id)]
    );
    assert!(factory.stats().executed.is_empty());
}

#[test]
fn open_session_and_execute_runs_text() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    let connection = FakeConnection::redis("localhost:6379").into_handle();

    workspace.open_session_and_execute(Some(connection), "INFO");

    assert_eq!(factory.stats().executed, vec![(0, "INFO".to_string())]);
    assert_eq!(
        workspace.active_tab().unwrap().session().input_text(),
        "INFO"
    );
}

#[test]
fn new_tab_is_empty_and_duplicate_copies_text() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 1);
    workspace
        .active_tab_mut()
        .unwrap()
        .session_mut()
        .set_input_text("HGETALL user:1");

    workspace.create_new_tab();
    assert_eq!(workspace.len(), 2);
    assert_eq!(workspace.active_index(), Some(1));
    let tab = workspace.active_tab().unwrap();
    assert_eq!(tab.session().input_text(), "");
    assert_eq!(tab.title(), "redis-0");

    workspace.activate(0);
    workspace.duplicate_current_tab();
    assert_eq!(workspace.active_index(), Some(2));
    let tab = workspace.active_tab().unwrap();
    assert_eq!(tab.session().input_text(), "HGETALL user:1");
    assert_eq!(tab.session().connection().display_name(), "redis-0");
}

#[test]
fn duplicate_respects_config() {
    let factory = FakeSessionFactory::new();
    let config = WorkspaceConfig {
        duplicate_copies_text: false,
    };
    let mut workspace = TabWorkspace::with_config(factory.boxed(), config);
    open_tabs(&mut workspace, 1);

    workspace.duplicate_current_tab();
    assert_eq!(workspace.active_tab().unwrap().session().input_text(), "");
}

#[test]
fn close_other_tabs_keeps_previously_active() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 4);
    workspace.activate(2);
    let active = workspace.active_id();

    workspace.close_other_tabs();

    assert_eq!(workspace.len(), 1);
    assert_eq!(workspace.active_index(), Some(0));
    assert_eq!(workspace.active_id(), active);
    assert_eq!(workspace.active_tab().unwrap().title(), "redis-2");

    let mut closed = factory.stats().closed;
    closed.sort_unstable();
    assert_eq!(closed, vec![0, 1, 3]);
}

#[test]
fn close_tab_releases_session_once() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 2);
    workspace.drain_events();

    let closed_id = workspace.tab(1).unwrap().id();
    let survivor = workspace.tab(0).unwrap().id();
    assert!(workspace.close_tab(1));
    assert!(!workspace.close_tab(1));

    assert_eq!(factory.stats().closed, vec![1]);
    assert_eq!(workspace.active_index(), Some(0));
    assert_eq!(
        workspace.drain_events(),
        vec![
            WorkspaceEvent::Closed(closed_id),
            WorkspaceEvent::Activated(survivor)
        ]
    );

    workspace.close_current_tab();
    assert!(workspace.is_empty());
    assert_eq!(workspace.active_index(), None);
}

#[test]
fn closing_inactive_tab_after_active_keeps_index() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 3);
    workspace.activate(0);

    workspace.close_tab(2);
    assert_eq!(workspace.active_index(), Some(0));
    assert_eq!(workspace.len(), 2);
}

#[test]
fn reload_goes_to_active_session() {
    let factory = FakeSessionFactory::new();
    let mut workspace = TabWorkspace::new(factory.boxed());
    open_tabs(&mut workspace, 2);
    workspace.activate(0);

    workspace.reload_current_tab();
    assert_eq!(factory.stats().reloads, vec![0]);
}
