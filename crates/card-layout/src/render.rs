//! Card assembly rules

use profile_record::ProfileRecord;

use crate::blocks::{CardBlock, CardLayout, WebsiteLink};
use crate::format::{format_count, format_joined};
use crate::toggles::CardToggles;

const FOOTER_CREDIT: &str = "Made with X Profile Card Maker";

/// Replace the low-resolution avatar suffix with the 400x400 variant.
///
/// Applied to every avatar URL; URLs without the `_normal.` suffix pass
/// through unchanged.
pub fn upgrade_avatar_url(url: &str) -> String {
    url.replacen("_normal.", "_400x400.", 1)
}

/// Assemble the card layout.
///
/// Every block is gated by its toggle, and by data presence where the
/// underlying field may be absent. The one exception is the banner: with
/// the toggle on but no banner image, the flat background takes its place.
/// A missing profile yields the placeholder regardless of toggles.
pub fn render_card(
    profile: Option<&ProfileRecord>,
    toggles: &CardToggles,
    milestone: &str,
) -> CardLayout {
    let Some(profile) = profile else {
        return CardLayout::Placeholder;
    };

    let mut blocks = Vec::new();

    if toggles.banner {
        match profile.banner.as_deref() {
            Some(url) => blocks.push(CardBlock::Banner {
                url: url.to_string(),
            }),
            None => blocks.push(CardBlock::FlatBackground),
        }
    }

    if toggles.avatar {
        if let Some(url) = profile.avatar.as_deref() {
            blocks.push(CardBlock::Avatar {
                url: upgrade_avatar_url(url),
            });
        }
    }

    let name = if toggles.display_name {
        profile
            .display_name
            .clone()
            .or_else(|| profile.username.clone())
    } else {
        None
    };
    let verified = toggles.verified && profile.is_blue_verified.unwrap_or(false);
    if name.is_some() || verified {
        blocks.push(CardBlock::Identity { name, verified });
    }

    if toggles.username {
        if let Some(username) = profile.username.as_deref() {
            blocks.push(CardBlock::Username {
                handle: format!("@{}", username),
            });
        }
    }

    if toggles.bio {
        if let Some(bio) = profile.bio.as_deref() {
            blocks.push(CardBlock::Bio {
                text: bio.to_string(),
            });
        }
    }

    // Counts render as 0 when absent; the join date is suppressed instead.
    let followers = toggles
        .followers
        .then(|| format_count(profile.followers.unwrap_or(0)));
    let following = toggles
        .following
        .then(|| format_count(profile.following.unwrap_or(0)));
    let joined = if toggles.joined {
        profile.joined.as_deref().and_then(format_joined)
    } else {
        None
    };
    if followers.is_some() || following.is_some() || joined.is_some() {
        blocks.push(CardBlock::Stats {
            followers,
            following,
            joined,
        });
    }

    if toggles.location || toggles.website {
        let location = if toggles.location {
            profile.location.clone()
        } else {
            None
        };
        let website = if toggles.website {
            profile.website.as_deref().map(|url| WebsiteLink {
                href: url.to_string(),
                label: url.to_string(),
            })
        } else {
            None
        };
        blocks.push(CardBlock::Contact { location, website });
    }

    if toggles.milestone {
        blocks.push(CardBlock::Milestone {
            text: milestone.to_string(),
        });
    }

    if toggles.footer_credit {
        blocks.push(CardBlock::FooterCredit {
            text: FOOTER_CREDIT.to_string(),
        });
    }

    CardLayout::Card { blocks }
}
