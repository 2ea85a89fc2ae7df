//! Visibility toggles for card sections

use serde::{Deserialize, Serialize};

/// One switch per card section. JSON uses camelCase to match the SPA, and
/// missing fields take their default so partial toggle sets deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardToggles {
    pub banner: bool,
    pub avatar: bool,
    pub display_name: bool,
    pub username: bool,
    pub bio: bool,
    pub location: bool,
    pub website: bool,
    pub joined: bool,
    pub followers: bool,
    pub following: bool,
    pub verified: bool,
    pub milestone: bool,
    pub footer_credit: bool,
}

impl Default for CardToggles {
    /// Everything visible except the milestone banner.
    fn default() -> Self {
        Self {
            banner: true,
            avatar: true,
            display_name: true,
            username: true,
            bio: true,
            location: true,
            website: true,
            joined: true,
            followers: true,
            following: true,
            verified: true,
            milestone: false,
            footer_credit: true,
        }
    }
}
