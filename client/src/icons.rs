use firemap_shared::{Group, IconId};

/// Base path of the blip sprite assets.
pub const BLIP_BASE: &str = "ImgMapInteractive/blips";

/// Blip used for the transient pin-drop marker.
pub const PIN_BLIP: u32 = 1;

/// Icon sizes used by the menu markup.
pub const MENU_GROUP_ICON_SIZE: (u32, u32) = (22, 25);
pub const MENU_MARKER_ICON_SIZE: (u32, u32) = (20, 25);

/// Geometry the rendering surface needs to place an icon: CSS-pixel size,
/// hot-spot anchor, and the popup's anchor relative to that hot-spot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub url: String,
    pub size: (u32, u32),
    pub anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
}

pub fn blip_url(icon: &IconId) -> String {
    format!("{BLIP_BASE}/{icon}.webp")
}

/// Menu/category icon for a group, addressed by its display name.
pub fn group_icon_url(group: Group) -> String {
    format!("{BLIP_BASE}/{}.webp", group.label())
}

/// Icon for a registered marker.
pub fn marker_icon(icon: &IconId) -> MarkerIcon {
    MarkerIcon {
        url: blip_url(icon),
        size: (32, 37),
        anchor: (30, 27),
        popup_anchor: (-10, -27),
    }
}

/// Icon for the pin-drop marker.
pub fn pin_icon() -> MarkerIcon {
    MarkerIcon {
        url: format!("{BLIP_BASE}/{PIN_BLIP}.webp"),
        size: (27, 32),
        anchor: (13, 35),
        popup_anchor: (0, -37),
    }
}
