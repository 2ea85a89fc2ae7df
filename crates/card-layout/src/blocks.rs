//! Card layout block types

use serde::{Deserialize, Serialize};

/// A rendered card, or the placeholder when no profile has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CardLayout {
    /// "Load a profile to see the preview here."
    Placeholder,
    /// Visual blocks in top-to-bottom render order.
    Card { blocks: Vec<CardBlock> },
}

/// One visual block of the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CardBlock {
    /// Banner image across the top of the card.
    Banner { url: String },
    /// Flat background strip used when the banner toggle is on but the
    /// profile carries no banner image.
    FlatBackground,
    /// Profile picture, upgraded to the 400x400 variant when possible.
    Avatar { url: String },
    /// Display name row, with the verified badge when applicable.
    Identity {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        verified: bool,
    },
    /// Handle line, "@" prefix included.
    Username { handle: String },
    /// Profile bio, preserved verbatim.
    Bio { text: String },
    /// Follower/following counts and join date, preformatted for display.
    Stats {
        #[serde(skip_serializing_if = "Option::is_none")]
        followers: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        following: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        joined: Option<String>,
    },
    /// Location line and/or external website link.
    Contact {
        #[serde(skip_serializing_if = "Option::is_none")]
        location: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        website: Option<WebsiteLink>,
    },
    /// Free-text milestone banner, shown verbatim.
    Milestone { text: String },
    /// Static attribution line.
    FooterCredit { text: String },
}

/// Clickable external link shown on the contact line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteLink {
    pub href: String,
    pub label: String,
}
