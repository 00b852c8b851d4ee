//! Wire DTOs for the hosted-backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's relational rows one-to-one so serde
//! round-trips stay lossless. Optional wire fields default rather than fail,
//! because older rows predate some appearance columns.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated session as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token sent on every authenticated request.
    pub access_token: String,
    /// Token used to mint a fresh access token after expiry.
    #[serde(default)]
    pub refresh_token: String,
    /// Account identifier (UUID string) owning this session.
    pub user_id: String,
    /// Email address the account was registered with.
    pub email: String,
}

/// A user's identity row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier (UUID string); equals the account id.
    pub id: String,
    /// Public handle; doubles as the profile URL path segment.
    pub username: String,
    /// Short bio shown under the avatar.
    #[serde(default)]
    pub bio: String,
    /// Avatar image URL, if uploaded.
    pub avatar_url: Option<String>,
    /// Cover image URL, if uploaded.
    pub cover_url: Option<String>,
    /// Plan tier name (e.g. `"free"`, `"pro"`).
    #[serde(default = "default_plan")]
    pub plan: String,
    /// Deactivated profiles force sign-out on next dashboard load.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Grants access to the admin console. Advisory on the client; the
    /// backend enforces the real boundary.
    #[serde(default)]
    pub is_admin: bool,
    /// ISO 8601 creation timestamp, if the backend returns it.
    pub created_at: Option<String>,
}

fn default_plan() -> String {
    "free".to_owned()
}

fn default_true() -> bool {
    true
}

/// One entry in a profile's ordered link list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Unique link identifier (UUID string).
    pub id: String,
    /// Owning profile identifier (UUID string).
    pub user_id: String,
    /// Display title.
    pub title: String,
    /// Destination URL, validated before save and again before render.
    pub url: String,
    /// Inactive links stay in the editor but are hidden on the public page.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Dense render-order index; unique and contiguous from 0 per profile.
    pub position: i32,
    /// Fire-and-forget click counter.
    #[serde(default)]
    pub clicks: i64,
    /// Optional thumbnail image URL.
    pub thumbnail_url: Option<String>,
}

/// Theme presets selectable in the appearance editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreset {
    #[default]
    Midnight,
    Daybreak,
    Forest,
    Ocean,
    Blush,
    Mono,
    /// Owner-uploaded background image; falls back to `Midnight` colors
    /// while the image loads.
    Custom,
}

/// Button outline shape; one of three independent style axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShape {
    Square,
    #[default]
    Rounded,
    Pill,
}

/// Button fill treatment; one of three independent style axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonFill {
    #[default]
    Solid,
    Outline,
    Glass,
}

/// Button drop-shadow treatment; one of three independent style axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonShadow {
    #[default]
    None,
    Soft,
    Hard,
}

/// Font families offered by the appearance editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
    Rounded,
}

/// Per-profile appearance configuration; upserted as a whole row.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    /// Owning profile identifier (UUID string).
    pub user_id: String,
    #[serde(default)]
    pub theme: ThemePreset,
    #[serde(default)]
    pub button_shape: ButtonShape,
    #[serde(default)]
    pub button_fill: ButtonFill,
    #[serde(default)]
    pub button_shadow: ButtonShadow,
    #[serde(default)]
    pub font_family: FontFamily,
    /// Explicit page text color; when set it also forces the button palette
    /// light or dark by luminance, overriding the preset.
    pub font_color: Option<String>,
    /// Background image URL for the `Custom` theme.
    pub background_url: Option<String>,
    /// Overrides the `<title>` of the public page.
    pub seo_title: Option<String>,
    /// Overrides the meta description of the public page.
    pub seo_description: Option<String>,
    /// Hide the "made with" footer tag (paid plans only).
    #[serde(default)]
    pub hide_branding: bool,
}

/// Operator toggles; persisted best-effort and enforced nowhere on the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub maintenance_mode: bool,
    #[serde(default = "default_true")]
    pub registration_open: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            maintenance_mode: false,
            registration_open: true,
        }
    }
}
