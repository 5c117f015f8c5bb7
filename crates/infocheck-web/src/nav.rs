//! Site navigation data and header geometry.

use serde::Serialize;

/// One entry in the site-wide navigation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Static, ordered navigation list consumed by the header on every page.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "/home" },
    NavLink { name: "Inference", href: "/inference" },
    NavLink { name: "Q and A", href: "/search" },
];

/// Header height in px before the page is scrolled.
pub const HEADER_EXPANDED_PX: u32 = 90;
/// Header height in px once scrolled past the threshold.
pub const HEADER_COLLAPSED_PX: u32 = 70;
/// Scroll offset past which the header collapses.
pub const SCROLL_THRESHOLD_PX: u32 = 90;

/// Header height for a given scroll offset. The same constants are rendered
/// into the layout's inline script so the browser behavior cannot drift from
/// this function.
pub fn header_height(scroll_top: u32) -> u32 {
    if scroll_top > SCROLL_THRESHOLD_PX {
        HEADER_COLLAPSED_PX
    } else {
        HEADER_EXPANDED_PX
    }
}
