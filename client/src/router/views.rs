//! Closed set of routed views.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use std::fmt;
use std::str::FromStr;

/// Logical view names surfaced to the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewName {
    Login,
    Dashboard,
    Article,
}

/// Every routed view. Adding a view means adding it here.
pub const ROUTE_TABLE: [ViewName; 3] = [ViewName::Login, ViewName::Dashboard, ViewName::Article];

impl ViewName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Article => "Article",
        }
    }

    /// Bundle the view is fetched from. `Article` ships in the dashboard chunk.
    #[must_use]
    pub fn chunk(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard | Self::Article => "dashboard",
        }
    }

    /// Path segment the router matches.
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Dashboard => "",
            Self::Article => "article",
        }
    }

    /// Absolute path for links.
    #[must_use]
    pub fn href(self) -> String {
        format!("/{}", self.segment())
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view `{0}`")]
pub struct UnknownView(pub String);

impl FromStr for ViewName {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ROUTE_TABLE
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_owned()))
    }
}
