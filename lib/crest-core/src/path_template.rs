//! Path templates synthesised from symbolic names.
//!
//! `UsersDetails` becomes `users/${}/details`: every camelCase hump opens a
//! slot for the identifier of the resource before it.

use std::fmt;

use crate::Keywords;

/// Marker for a positional slot inside a [`PathTemplate`].
pub const SLOT: &str = "${}";

/// Separator inserted where a slot opens between two segments.
const SLOT_SEPARATOR: &str = "/${}/";

/// A lowercase path with `/` separators and [`SLOT`] markers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PathTemplate(String);

/// One element of a [`PathTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied into the URL as-is.
    Literal(&'a str),
    /// Position filled by the next path argument.
    Slot,
}

impl PathTemplate {
    /// Wrap an already-built template string.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Get the template string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty segments, left to right.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> {
        self.0
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| {
                if part == SLOT {
                    Segment::Slot
                } else {
                    Segment::Literal(part)
                }
            })
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.segments()
            .filter(|segment| matches!(segment, Segment::Slot))
            .count()
    }

    /// Returns `true` if the template has no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments().next().is_none()
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build the path template for the part of a symbolic name after its verb.
///
/// Keyword overrides are applied first, once each, in
/// [`override_order`](crate::override_order). Each one replaces the first
/// occurrence of its fragment with a slot followed by the lowercased
/// replacement; a match at the very start gets no slot. The rest of the name
/// is then split on camelCase humps and lowercased.
///
/// ```
/// use crest_core::{Keywords, build_template};
///
/// let template = build_template("UsersDetails", &Keywords::new());
/// assert_eq!(template.as_str(), "users/${}/details");
/// ```
#[must_use]
pub fn build_template(remainder: &str, keywords: &Keywords) -> PathTemplate {
    let mut working = remainder.to_string();

    for (fragment, replacement) in keywords.in_application_order() {
        if fragment.is_empty() {
            continue;
        }
        if let Some(start) = working.find(fragment) {
            let replacement = replacement.to_lowercase();
            let substituted = if start == 0 {
                replacement
            } else {
                format!("{SLOT_SEPARATOR}{replacement}")
            };
            working.replace_range(start..start + fragment.len(), &substituted);
        }
    }

    PathTemplate(split_humps(&working).to_lowercase())
}

/// Open a slot at each lowercase-to-uppercase hump, and start a new segment
/// where an uppercase letter directly follows a closed slot.
fn split_humps(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut previous: Option<char> = None;

    for current in input.chars() {
        if current.is_ascii_uppercase() {
            match previous {
                Some(p) if p.is_ascii_lowercase() => out.push_str(SLOT_SEPARATOR),
                Some('}') => out.push('/'),
                _ => {}
            }
        }
        out.push(current);
        previous = Some(current);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(remainder: &str) -> String {
        build_template(remainder, &Keywords::new()).to_string()
    }

    #[test]
    fn converts_camel_case() {
        assert_eq!(template(""), "");
        assert_eq!(template("Accounts"), "accounts");
        assert_eq!(template("UsersDetails"), "users/${}/details");
        assert_eq!(
            template("CompaniesCustomersLikes"),
            "companies/${}/customers/${}/likes"
        );
    }

    #[test]
    fn only_lower_to_upper_opens_a_slot() {
        assert_eq!(template("HTTPStatus"), "httpstatus");
        assert_eq!(template("V2Users"), "v2users");
        assert_eq!(template("users"), "users");
    }

    #[test]
    fn accepts_keywords() {
        let keywords = Keywords::from([("Accounts", "users")]);
        assert_eq!(build_template("Accounts", &keywords).as_str(), "users");

        let keywords = Keywords::from([("UsersDetails", "users-details")]);
        assert_eq!(
            build_template("UsersDetails", &keywords).as_str(),
            "users-details"
        );

        let keywords = Keywords::from([("CustomersStats", "customers-stats")]);
        assert_eq!(
            build_template("CompaniesCustomersStats", &keywords).as_str(),
            "companies/${}/customers-stats"
        );
    }

    #[test]
    fn keyword_followed_by_hump() {
        let keywords = Keywords::from([("Accounts", "users")]);
        assert_eq!(
            build_template("AccountsDetails", &keywords).as_str(),
            "users/${}/details"
        );
    }

    #[test]
    fn keyword_replacement_is_lowercased() {
        let keywords = Keywords::from([("Stats", "Statistics")]);
        assert_eq!(
            build_template("Stats", &keywords).as_str(),
            "statistics"
        );
    }

    #[test]
    fn keyword_ending_in_slots() {
        let keywords = Keywords::from([("Repos", "repos/${}/${}")]);
        let template = build_template("ReposContributors", &keywords);
        assert_eq!(template.as_str(), "repos/${}/${}/contributors");
        assert_eq!(template.slot_count(), 2);
    }

    #[test]
    fn keyword_replaces_first_occurrence_only() {
        let keywords = Keywords::from([("Users", "people")]);
        assert_eq!(
            build_template("UsersFriendsUsers", &keywords).as_str(),
            "people/${}/friends/${}/users"
        );
    }

    #[test]
    fn overlapping_keywords_use_descending_order() {
        // "CustomersStats" sorts after "Customers", so it is applied first.
        let keywords = Keywords::from([
            ("Customers", "clients"),
            ("CustomersStats", "customers-stats"),
        ]);
        assert_eq!(
            build_template("CompaniesCustomersStats", &keywords).as_str(),
            "companies/${}/customers-stats"
        );

        // Disjoint fragments both apply.
        let keywords = Keywords::from([("Customers", "clients"), ("Zones", "areas")]);
        assert_eq!(
            build_template("CustomersZones", &keywords).as_str(),
            "clients/${}/areas"
        );
    }

    #[test]
    fn missing_keyword_is_ignored() {
        let keywords = Keywords::from([("Orders", "purchases")]);
        assert_eq!(
            build_template("UsersDetails", &keywords).as_str(),
            "users/${}/details"
        );
    }

    #[test]
    fn segments_view() {
        let template = PathTemplate::new("companies/${}/customers-stats");
        let segments: Vec<_> = template.segments().collect();
        assert_eq!(
            segments,
            [
                Segment::Literal("companies"),
                Segment::Slot,
                Segment::Literal("customers-stats"),
            ]
        );
        assert_eq!(template.slot_count(), 1);
        assert!(PathTemplate::default().is_empty());
    }

    #[test]
    fn slot_count_ignores_arguments() {
        let keywords = Keywords::from([("CustomersStats", "customers-stats")]);
        let first = build_template("CompaniesCustomersStats", &keywords);
        let second = build_template("CompaniesCustomersStats", &keywords);
        assert_eq!(first, second);
        assert_eq!(first.slot_count(), 1);
    }
}
