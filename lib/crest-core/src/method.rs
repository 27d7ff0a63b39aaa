//! HTTP verbs and symbolic method-name parsing.

use derive_more::Display;

/// HTTP request method recognised as a symbolic-name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Method {
    /// GET method - retrieve a resource.
    #[display("GET")]
    Get,
    /// POST method - create a resource.
    #[display("POST")]
    Post,
    /// PUT method - replace a resource.
    #[display("PUT")]
    Put,
    /// PATCH method - partially update a resource.
    #[display("PATCH")]
    Patch,
    /// DELETE method - remove a resource.
    #[display("DELETE")]
    Delete,
}

/// Verbs in the order [`split_method`] tests them.
///
/// No verb may be a prefix of a verb listed after it.
pub const VERBS: [Method; 5] = [
    Method::Get,
    Method::Post,
    Method::Put,
    Method::Patch,
    Method::Delete,
];

impl Method {
    /// The lowercase prefix that selects this verb in a symbolic name.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }
}

/// Split a symbolic name such as `getUsersDetails` into its verb and the
/// remaining identifier (`Get`, `"UsersDetails"`).
///
/// The match is case-sensitive and needs no separator. Returns `None` when the
/// name starts with none of the [`VERBS`], i.e. it is not a request method.
///
/// ```
/// use crest_core::{Method, split_method};
///
/// assert_eq!(split_method("getCompanies"), Some((Method::Get, "Companies")));
/// assert_eq!(split_method("setBearer"), None);
/// ```
#[must_use]
pub fn split_method(name: &str) -> Option<(Method, &str)> {
    VERBS.iter().find_map(|verb| {
        name.strip_prefix(verb.prefix())
            .map(|remainder| (*verb, remainder))
    })
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_known_verbs() {
        assert_eq!(
            split_method("getCompanies"),
            Some((Method::Get, "Companies"))
        );
        assert_eq!(
            split_method("deleteAccounts"),
            Some((Method::Delete, "Accounts"))
        );
        assert_eq!(split_method("postUsers"), Some((Method::Post, "Users")));
        assert_eq!(split_method("putUsers"), Some((Method::Put, "Users")));
        assert_eq!(
            split_method("patchUsersDetails"),
            Some((Method::Patch, "UsersDetails"))
        );
    }

    #[test]
    fn split_bare_verb() {
        assert_eq!(split_method("get"), Some((Method::Get, "")));
        assert_eq!(split_method("delete"), Some((Method::Delete, "")));
    }

    #[test]
    fn split_needs_no_separator() {
        // "getaway" still parses as GET; the remainder is kept verbatim.
        assert_eq!(split_method("getaway"), Some((Method::Get, "away")));
    }

    #[test]
    fn split_is_case_sensitive() {
        assert_eq!(split_method("GetUsers"), None);
        assert_eq!(split_method("setBearer"), None);
        assert_eq!(split_method(""), None);
    }

    #[test]
    fn verbs_are_prefix_free_in_order() {
        for (i, earlier) in VERBS.iter().enumerate() {
            for later in VERBS.iter().skip(i + 1) {
                assert!(
                    !later.prefix().starts_with(earlier.prefix()),
                    "{earlier} shadows {later}"
                );
            }
        }
    }

    #[test]
    fn method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn converts_to_http_method() {
        for verb in VERBS {
            assert_eq!(http::Method::from(verb).as_str(), verb.to_string());
        }
    }
}
