use std::fmt;
use std::str::FromStr;

/// Path of the search page.
pub const LIST_PATH: &str = "/Nasa";

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/Nasa`: search form and result grid.
    List,
    /// `/asset/{id}`: one asset. The id is the opaque upstream `nasa_id`.
    Asset(String),
    /// Anything else.
    NotFound(String),
}

impl Route {
    /// Match `path` against the known routes. Matching ignores ASCII case
    /// and a trailing slash.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if normalized.eq_ignore_ascii_case(LIST_PATH) {
            return Route::List;
        }

        let mut segments = normalized.strip_prefix('/').unwrap_or("").split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(head), Some(id), None) if head.eq_ignore_ascii_case("asset") && !id.is_empty() => {
                Route::Asset(id.to_string())
            }
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::Asset(id) => format!("/asset/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}
