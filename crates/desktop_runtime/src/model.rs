use std::fmt;

use platform_host::{Theme, WallpaperId};
use serde::{Deserialize, Serialize};

pub const STATE_STORAGE_KEY: &str = "terminal-os/state";
pub const LEGACY_STORAGE_KEY: &str = "terminal-os/windows";
pub const THEME_STORAGE_KEY: &str = "theme";
pub const STATE_SCHEMA_VERSION: u32 = 2;

pub const WINDOW_MIN_WIDTH: i32 = 360;
pub const WINDOW_MIN_HEIGHT: i32 = 220;
pub const WINDOW_EDGE_PADDING: i32 = 16;
pub const TASKBAR_HEIGHT: i32 = 48;
pub const COMPACT_VIEWPORT_WIDTH: i32 = 640;

pub const STAGGER_ORIGIN: (i32, i32) = (96, 96);
pub const STAGGER_STEP: (i32, i32) = (24, 16);

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn for_app(app_id: AppId, counter: u64) -> Self {
        Self(format!("{}-{counter}", app_id.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Counter suffix of an `<appId>-<n>` id, when present.
    pub fn counter_suffix(&self) -> Option<u64> {
        self.0.rsplit_once('-')?.1.parse().ok()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppId {
    About,
    Papers,
    Links,
    Projects,
    Settings,
}

impl AppId {
    pub const ALL: [Self; 5] = [
        Self::About,
        Self::Papers,
        Self::Links,
        Self::Projects,
        Self::Settings,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Papers => "papers",
            Self::Links => "links",
            Self::Projects => "projects",
            Self::Settings => "settings",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app_id| app_id.as_str() == raw)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::About => "About Me",
            Self::Papers => "Papers",
            Self::Links => "Links",
            Self::Projects => "Projects",
            Self::Settings => "System Settings",
        }
    }

    /// Default `(width, height)` for a freshly opened window.
    pub const fn default_size(self) -> (i32, i32) {
        match self {
            Self::About => (540, 360),
            Self::Papers => (760, 520),
            Self::Links => (720, 500),
            Self::Projects => (600, 420),
            Self::Settings => (520, 420),
        }
    }

    /// Apps whose content comes from the hosted database.
    pub const fn uses_content_database(self) -> bool {
        matches!(self, Self::Papers | Self::Links)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub rect: WindowRect,
    pub z_index: u32,
    pub minimized: bool,
}

impl WindowRecord {
    pub fn title(&self) -> &'static str {
        self.app_id.title()
    }
}

/// Raw browser viewport (`innerWidth`, `innerHeight`); the taskbar is not subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Used when no browser window is available to measure.
    pub const FALLBACK: Self = Self {
        width: 1280,
        height: 800,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Height available to windows above the taskbar.
    pub const fn work_area_height(self) -> i32 {
        self.height - TASKBAR_HEIGHT
    }

    pub const fn is_compact(self) -> bool {
        self.width < COMPACT_VIEWPORT_WIDTH
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub wallpaper: WallpaperId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopState {
    pub windows: Vec<WindowRecord>,
    pub preferences: Preferences,
    pub theme: Theme,
    pub start_menu_open: bool,
    /// Text of the polite live region.
    pub announcement: String,
    /// Highest z ever handed out; never decreases while the page is loaded.
    pub z_top: u32,
    /// Last window id counter handed out.
    pub window_counter: u64,
}

impl DesktopState {
    /// The non-minimized window with the highest z, if any.
    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.minimized)
            .max_by_key(|w| w.z_index)
            .map(|w| &w.id)
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }
}

/// Layout and appearance restored from storage at boot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BootSnapshot {
    pub windows: Vec<WindowRecord>,
    pub preferences: Preferences,
    pub theme: Theme,
    pub z_top: u32,
    pub window_counter: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
        window_id: WindowId,
        /// Pointer position relative to the window's top-left corner at drag start.
        offset: (i32, i32),
    },
    Resizing {
        pointer_id: i32,
        window_id: WindowId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub gesture: Gesture,
}

impl InteractionState {
    pub fn active_pointer(&self) -> Option<i32> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging { pointer_id, .. } | Gesture::Resizing { pointer_id, .. } => {
                Some(*pointer_id)
            }
        }
    }

    pub fn is_dragging(&self, window_id: &WindowId) -> bool {
        matches!(&self.gesture, Gesture::Dragging { window_id: id, .. } if id == window_id)
    }
}
