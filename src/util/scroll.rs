//! Smooth scrolling to marketing-page anchors.
//!
//! Hydrate-only; native/SSR builds no-op so rendering stays deterministic.

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_anchor(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
