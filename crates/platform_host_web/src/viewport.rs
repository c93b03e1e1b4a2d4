//! Viewport probes for window placement.

/// Current `innerWidth`/`innerHeight` in CSS pixels, when a browser window exists.
pub fn inner_size() -> Option<(i32, i32)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width.round() as i32, height.round() as i32))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Returns `true` when the primary pointer is coarse (touch).
pub fn prefers_coarse_pointer() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}
