use crate::session::Profile;

/// Viewport width (px) above which the full-height rail is shown.
pub const WIDE_BREAKPOINT_PX: u32 = 894;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    House,
    BoxOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: &'static str,
    pub icon: NavIcon,
    pub href: &'static str,
    pub count: u32,
    pub current: bool,
}

struct NavItem {
    ordinal: i32,
    name: &'static str,
    icon: NavIcon,
    href: &'static str,
}

const NAV_ITEMS: [NavItem; 2] = [
    NavItem {
        ordinal: 1,
        name: "Home",
        icon: NavIcon::House,
        href: "/home",
    },
    NavItem {
        ordinal: 2,
        name: "Data Package",
        icon: NavIcon::BoxOpen,
        href: "/package",
    },
];

/// Build the navigation list, marking the entry whose ordinal equals `active`.
pub fn navigation_entries(active: i32) -> Vec<NavEntry> {
    NAV_ITEMS
        .iter()
        .map(|item| NavEntry {
            name: item.name,
            icon: item.icon,
            href: item.href,
            // nothing produces badge counts yet
            count: 0,
            current: item.ordinal == active,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Top bar with a disclosure panel on small screens.
    Compact,
    /// Fixed full-height left rail.
    Full,
}

impl LayoutVariant {
    pub fn select(wide: bool) -> Self {
        if wide {
            LayoutVariant::Full
        } else {
            LayoutVariant::Compact
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Placeholder,
}

impl Avatar {
    pub fn from_profile(profile: &Profile) -> Self {
        match profile.first_image_url() {
            Some(url) => Avatar::Image(url.to_string()),
            None => Avatar::Placeholder,
        }
    }
}

/// What the account menu trigger shows in a given layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileControl {
    pub avatar: Avatar,
    /// Display name beside the avatar; the top bar shows the avatar alone.
    pub label: Option<String>,
}

impl ProfileControl {
    pub fn for_variant(variant: LayoutVariant, profile: &Profile) -> Self {
        let label = match variant {
            LayoutVariant::Compact => None,
            LayoutVariant::Full => Some(profile.display_name().to_string()),
        };
        Self {
            avatar: Avatar::from_profile(profile),
            label,
        }
    }
}

/// Which way the account menu opens from its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAnchor {
    Below,
    Above,
}

impl MenuAnchor {
    pub fn class(self) -> &'static str {
        match self {
            MenuAnchor::Below => "account-menu account-menu-below",
            MenuAnchor::Above => "account-menu account-menu-above",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLink {
    pub label: &'static str,
    pub href: &'static str,
    /// Leaves the app (full page navigation).
    pub external: bool,
}

pub const ACCOUNT_LINKS: [AccountLink; 3] = [
    AccountLink {
        label: "Privacy Policy",
        href: "/privacy",
        external: false,
    },
    AccountLink {
        label: "Remove Account",
        href: "https://spotify.com/us/account/apps",
        external: true,
    },
    AccountLink {
        label: "Sign Out",
        href: "https://spotify.com/logout",
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ProfileImage;

    fn profile(name: &str, images: &[&str]) -> Profile {
        Profile {
            display_name: Some(name.to_string()),
            images: images
                .iter()
                .map(|url| ProfileImage {
                    url: url.to_string(),
                })
                .collect(),
        }
    }

    fn current_names(active: i32) -> Vec<&'static str> {
        navigation_entries(active)
            .into_iter()
            .filter(|e| e.current)
            .map(|e| e.name)
            .collect()
    }

    #[test]
    fn test_active_marks_matching_entry() {
        assert_eq!(current_names(1), vec!["Home"]);
        assert_eq!(current_names(2), vec!["Data Package"]);
    }

    #[test]
    fn test_out_of_range_active_marks_nothing() {
        for active in [0, 3, -1, 42, i32::MIN, i32::MAX] {
            assert!(current_names(active).is_empty(), "active={}", active);
        }
    }

    #[test]
    fn test_entries_are_fixed() {
        let entries = navigation_entries(1);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].href, "/home");
        assert_eq!(entries[0].icon, NavIcon::House);
        assert_eq!(entries[1].href, "/package");
        assert_eq!(entries[1].icon, NavIcon::BoxOpen);
        assert!(entries.iter().all(|e| e.count == 0));
    }

    #[test]
    fn test_layout_follows_breakpoint_signal() {
        assert_eq!(LayoutVariant::select(false), LayoutVariant::Compact);
        assert_eq!(LayoutVariant::select(true), LayoutVariant::Full);
    }

    #[test]
    fn test_avatar_placeholder_for_empty_images() {
        assert_eq!(Avatar::from_profile(&profile("Ada", &[])), Avatar::Placeholder);
    }

    #[test]
    fn test_avatar_uses_first_image() {
        let p = profile("Ada", &["https://i.scdn.co/first.jpg", "https://i.scdn.co/second.jpg"]);
        assert_eq!(
            Avatar::from_profile(&p),
            Avatar::Image("https://i.scdn.co/first.jpg".to_string())
        );
    }

    #[test]
    fn test_placeholder_in_both_variants() {
        let ada = profile("Ada", &[]);
        for variant in [LayoutVariant::Compact, LayoutVariant::Full] {
            assert_eq!(ProfileControl::for_variant(variant, &ada).avatar, Avatar::Placeholder);
        }
    }

    #[test]
    fn test_first_image_in_both_variants() {
        let ada = profile("Ada", &["https://i.scdn.co/first.jpg", "https://i.scdn.co/second.jpg"]);
        for variant in [LayoutVariant::Compact, LayoutVariant::Full] {
            assert_eq!(
                ProfileControl::for_variant(variant, &ada).avatar,
                Avatar::Image("https://i.scdn.co/first.jpg".to_string())
            );
        }
    }

    #[test]
    fn test_footer_label_only_on_rail() {
        let ada = profile("Ada", &[]);
        assert_eq!(ProfileControl::for_variant(LayoutVariant::Full, &ada).label.as_deref(), Some("Ada"));
        assert_eq!(ProfileControl::for_variant(LayoutVariant::Compact, &ada).label, None);
    }

    #[test]
    fn test_account_links_fixed_order() {
        let labels: Vec<_> = ACCOUNT_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Privacy Policy", "Remove Account", "Sign Out"]);
        assert!(!ACCOUNT_LINKS[0].external);
        assert!(ACCOUNT_LINKS[1].external && ACCOUNT_LINKS[2].external);
    }

    #[test]
    fn test_menu_anchor_classes_differ() {
        assert_ne!(MenuAnchor::Below.class(), MenuAnchor::Above.class());
    }

    #[test]
    fn test_wide_data_package_scenario() {
        let ada = profile("Ada", &[]);

        assert_eq!(LayoutVariant::select(true), LayoutVariant::Full);
        let entries = navigation_entries(2);
        let home = entries.iter().find(|e| e.name == "Home").unwrap();
        let package = entries.iter().find(|e| e.name == "Data Package").unwrap();
        assert!(!home.current);
        assert!(package.current);
        let control = ProfileControl::for_variant(LayoutVariant::Full, &ada);
        assert_eq!(control.avatar, Avatar::Placeholder);
        assert_eq!(control.label.as_deref(), Some("Ada"));
    }
}
