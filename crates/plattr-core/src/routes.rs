//! Route table: the static back-navigation map and the prefix rules.
//!
//! This is the only place route fallbacks are defined. The UI back hook and
//! the hardware back-button listener both read from here.

use std::borrow::Cow;

pub const ROOT: &str = "/";

/// Category listing template; `{token}` is the category or meal-type slug.
const CATEGORY_PREFIX: &str = "/categories/";

/// Static fallbacks: current path -> where "back" goes when history is unusable.
pub const NAVIGATION_MAP: &[(&str, &str)] = &[
    ("/categories", ROOT),
    ("/cart", ROOT),
    ("/orders", ROOT),
    ("/profile", ROOT),
    ("/search", ROOT),
    ("/login", ROOT),
    ("/catering", ROOT),
    ("/meal-box", ROOT),
    ("/party-planner", ROOT),
    ("/checkout", "/cart"),
    ("/order-confirmation", "/orders"),
    ("/thank-you", ROOT),
    ("/addresses", "/profile"),
    ("/notifications", "/profile"),
];

/// Prefix rule applied when the exact lookup misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternRule {
    /// `/{segment}/{token}[/..]` -> `/categories/{token}`.
    CategoryDetail { segment: &'static str },
    /// Any path whose leading segments equal `segments` -> `to`.
    Prefix {
        segments: &'static [&'static str],
        to: &'static str,
    },
}

/// Rules in priority order.
pub const PATTERN_RULES: &[PatternRule] = &[
    PatternRule::CategoryDetail { segment: "dishes" },
    PatternRule::CategoryDetail {
        segment: "planner-detail",
    },
    PatternRule::Prefix {
        segments: &["categories"],
        to: ROOT,
    },
    PatternRule::Prefix {
        segments: &["order-detail"],
        to: "/orders",
    },
    PatternRule::Prefix {
        segments: &["party-planner", "results"],
        to: "/party-planner",
    },
];

impl PatternRule {
    /// Destination for `path` (already normalized), or `None` if the rule does not apply.
    pub fn apply(&self, path: &str) -> Option<String> {
        let parts: Vec<&str> = segments(path).collect();
        match *self {
            PatternRule::CategoryDetail { segment } => match parts.as_slice() {
                [first, token, ..] if *first == segment => Some(category_path(token)),
                _ => None,
            },
            PatternRule::Prefix { segments: prefix, to } => {
                if parts.len() >= prefix.len() && parts[..prefix.len()] == *prefix {
                    Some(to.to_string())
                } else {
                    None
                }
            }
        }
    }
}

/// Listing path for a category token.
pub fn category_path(token: &str) -> String {
    format!("{CATEGORY_PREFIX}{token}")
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalize a route for lookup.
///
/// Drops query and fragment, guarantees a leading `/`, collapses repeated
/// slashes and removes a trailing slash. Empty input becomes the root.
pub fn normalize_route(path: &str) -> Cow<'_, str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];

    let already_clean = path.starts_with('/')
        && (path == ROOT || !path.ends_with('/'))
        && !path.contains("//");
    if already_clean {
        return Cow::Borrowed(path);
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in segments(path) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    Cow::Owned(out)
}

pub fn is_root(path: &str) -> bool {
    normalize_route(path) == ROOT
}

/// Exact lookup in [`NAVIGATION_MAP`].
pub fn lookup(path: &str) -> Option<&'static str> {
    NAVIGATION_MAP
        .iter()
        .find(|(from, _)| *from == path)
        .map(|(_, to)| *to)
}

/// First matching pattern rule's destination.
pub fn match_pattern(path: &str) -> Option<String> {
    PATTERN_RULES.iter().find_map(|rule| rule.apply(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn map_keys_are_unique() {
        let keys: HashSet<&str> = NAVIGATION_MAP.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), NAVIGATION_MAP.len());
    }

    #[test]
    fn map_keys_are_normalized() {
        for (from, to) in NAVIGATION_MAP {
            assert_eq!(normalize_route(from), *from);
            assert_eq!(normalize_route(to), *to);
        }
    }

    #[test]
    fn normalize() {
        assert_eq!(normalize_route(""), "/");
        assert_eq!(normalize_route("/"), "/");
        assert_eq!(normalize_route("cart"), "/cart");
        assert_eq!(normalize_route("/cart/"), "/cart");
        assert_eq!(normalize_route("//dishes//snacks"), "/dishes/snacks");
        assert_eq!(normalize_route("/cart?coupon=x"), "/cart");
        assert_eq!(normalize_route("/orders#top"), "/orders");
        assert_eq!(normalize_route("?q=1"), "/");
    }

    #[test]
    fn normalize_borrows_clean_paths() {
        assert!(matches!(normalize_route("/dishes/snacks"), Cow::Borrowed(_)));
        assert!(matches!(normalize_route("/"), Cow::Borrowed(_)));
    }

    #[test]
    fn detail_rules() {
        assert_eq!(
            match_pattern("/dishes/lunch-dinner").as_deref(),
            Some("/categories/lunch-dinner")
        );
        assert_eq!(
            match_pattern("/planner-detail/breakfast/42").as_deref(),
            Some("/categories/breakfast")
        );
        assert_eq!(match_pattern("/dishes"), None);
    }

    #[test]
    fn prefix_rules() {
        assert_eq!(match_pattern("/categories/tiffins").as_deref(), Some("/"));
        assert_eq!(match_pattern("/order-detail/881").as_deref(), Some("/orders"));
        assert_eq!(
            match_pattern("/party-planner/results").as_deref(),
            Some("/party-planner")
        );
        assert_eq!(match_pattern("/party-planner/setup"), None);
        assert_eq!(match_pattern("/categoriesx/foo"), None);
    }

    #[test]
    fn root_detection() {
        assert!(is_root("/"));
        assert!(is_root(""));
        assert!(is_root("/?tab=home"));
        assert!(!is_root("/cart"));
    }
}
