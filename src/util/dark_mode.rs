//! Dark mode for the marketing and dashboard chrome.
//!
//! The preference lives in `localStorage` and lands on the `<html>` element
//! as a `data-theme` attribute. Chrome theming only: the public profile page
//! is styled solely by the owner's appearance settings and ignores it.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "linkleaf_dark";

/// Resolve and apply the visitor's preference on startup; returns the
/// resulting mode. Stored preference wins, then the system's color scheme.
pub fn init() -> bool {
    let enabled = read_preference();
    apply(enabled);
    enabled
}

fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                return value == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Flip the mode, persist it, and restyle the page; returns the new mode.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
