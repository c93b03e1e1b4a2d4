use desktop_runtime::{
    load_boot_snapshot, persist_state, reduce_desktop, AppId, DesktopAction, DesktopState,
    InteractionState, PointerSample, RuntimeEffect, Viewport, LEGACY_STORAGE_KEY,
    STATE_STORAGE_KEY,
};
use platform_host::{MemoryPrefsStore, PrefsStore, Theme, WallpaperId};
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport::new(1440, 900);

struct Session {
    store: MemoryPrefsStore,
    state: DesktopState,
    interaction: InteractionState,
}

impl Session {
    fn boot(store: MemoryPrefsStore, viewport: Viewport) -> Self {
        let mut session = Self {
            state: DesktopState::default(),
            interaction: InteractionState::default(),
            store,
        };
        let snapshot = load_boot_snapshot(&session.store, viewport);
        session.dispatch(DesktopAction::HydrateSnapshot { snapshot });
        session
    }

    fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        let effects =
            reduce_desktop(&mut self.state, &mut self.interaction, action).expect("valid action");
        if effects.contains(&RuntimeEffect::PersistState) {
            persist_state(&self.store, &self.state).expect("persist");
        }
        effects
    }

    fn open(&mut self, app_id: AppId) {
        self.dispatch(DesktopAction::OpenApp {
            app_id,
            viewport: VIEWPORT,
        });
    }

    fn layout(&self) -> Vec<(AppId, u32, bool)> {
        self.state
            .windows
            .iter()
            .map(|w| (w.app_id, w.z_index, w.minimized))
            .collect()
    }
}

#[test]
fn layout_survives_a_reload() {
    let mut first = Session::boot(MemoryPrefsStore::default(), VIEWPORT);
    first.open(AppId::About);
    first.open(AppId::Papers);
    first.open(AppId::Links);
    let about = first.state.window_for_app(AppId::About).expect("about").id.clone();
    let links = first.state.window_for_app(AppId::Links).expect("links").id.clone();
    first.dispatch(DesktopAction::FocusWindow { window_id: about });
    first.dispatch(DesktopAction::MinimizeWindow { window_id: links });
    first.dispatch(DesktopAction::SetWallpaper {
        wallpaper: WallpaperId::Cyberwave,
    });

    let second = Session::boot(first.store.clone(), VIEWPORT);

    assert_eq!(
        second.layout(),
        vec![
            (AppId::Papers, 1, false),
            (AppId::Links, 2, true),
            (AppId::About, 3, false),
        ]
    );
    assert_eq!(second.state.preferences.wallpaper, WallpaperId::Cyberwave);
    assert_eq!(second.state.z_top, 3);
}

#[test]
fn reopened_windows_never_reuse_restored_ids() {
    let mut first = Session::boot(MemoryPrefsStore::default(), VIEWPORT);
    first.open(AppId::About);
    first.open(AppId::Projects);

    let mut second = Session::boot(first.store.clone(), VIEWPORT);
    let about = second.state.window_for_app(AppId::About).expect("about").id.clone();
    second.dispatch(DesktopAction::CloseWindow { window_id: about });
    second.open(AppId::About);

    let reopened = second.state.window_for_app(AppId::About).expect("about");
    assert_eq!(reopened.id.as_str(), "about-3");
    assert_eq!(reopened.z_index, 3);
}

#[test]
fn legacy_layout_is_consumed_once() {
    let store = MemoryPrefsStore::with_entries([(
        LEGACY_STORAGE_KEY,
        r#"{"windows":[
            {"id":"links-4","appId":"links","x":140,"y":150,"width":720,"height":500,"z":12,"minimized":false},
            {"id":"terminal-1","appId":"terminal","x":0,"y":0,"width":400,"height":300,"z":3,"minimized":false},
            {"id":"projects-2","appId":"projects","x":120,"y":130,"width":600,"height":420,"z":7,"minimized":true}
        ]}"#,
    )]);

    let session = Session::boot(store.clone(), VIEWPORT);

    assert_eq!(
        session.layout(),
        vec![(AppId::Projects, 1, true), (AppId::Links, 2, false)]
    );
    assert!(!store.contains_key(LEGACY_STORAGE_KEY));
    // Hydration rewrites the migrated layout under the current key.
    assert!(store.contains_key(STATE_STORAGE_KEY));

    let again = Session::boot(store, VIEWPORT);
    assert_eq!(again.layout(), session.layout());
}

#[test]
fn oversized_stored_id_does_not_exhaust_the_counter() {
    let store = MemoryPrefsStore::with_entries([(
        STATE_STORAGE_KEY,
        r#"{"version":2,"windows":[
            {"id":"about-18446744073709551615","appId":"about","x":96,"y":96,"width":540,"height":360,"z":1,"minimized":false}
        ],"preferences":{"wallpaper":"aurora"}}"#,
    )]);

    let mut session = Session::boot(store, VIEWPORT);
    session.open(AppId::Papers);

    let ids: Vec<&str> = session.state.windows.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["about-2", "papers-3"]);
}

#[test]
fn smaller_viewport_reclamps_restored_windows() {
    let mut first = Session::boot(MemoryPrefsStore::default(), VIEWPORT);
    first.open(AppId::Papers);

    let phone = Viewport::new(390, 700);
    let second = Session::boot(first.store.clone(), phone);
    let rect = second.state.windows[0].rect;

    assert_eq!(rect.w, 358);
    assert!(rect.x + rect.w <= phone.width);
}

#[test]
fn drag_then_reload_keeps_the_dropped_position() {
    let mut first = Session::boot(MemoryPrefsStore::default(), VIEWPORT);
    first.open(AppId::About);
    let about = first.state.windows[0].id.clone();
    let start = first.state.windows[0].rect;

    first.dispatch(DesktopAction::BeginDrag {
        window_id: about,
        pointer: PointerSample {
            pointer_id: 1,
            x: start.x + 10,
            y: start.y + 10,
        },
        button: 0,
    });
    first.dispatch(DesktopAction::PointerMove {
        pointer: PointerSample {
            pointer_id: 1,
            x: 410,
            y: 310,
        },
        viewport: VIEWPORT,
    });
    first.dispatch(DesktopAction::PointerUp { pointer_id: 1 });

    let second = Session::boot(first.store.clone(), VIEWPORT);
    let rect = second.state.windows[0].rect;
    assert_eq!((rect.x, rect.y), (400, 300));
}

#[test]
fn theme_toggle_is_restored_from_the_document() {
    let mut first = Session::boot(MemoryPrefsStore::default(), VIEWPORT);
    assert_eq!(first.state.theme, Theme::Dark);
    first.dispatch(DesktopAction::ToggleTheme);

    let second = Session::boot(first.store.clone(), VIEWPORT);
    assert_eq!(second.state.theme, Theme::Light);
    assert!(second
        .store
        .load_pref(STATE_STORAGE_KEY)
        .expect("load")
        .is_some_and(|raw| raw.contains(r#""theme":"light""#)));
}
