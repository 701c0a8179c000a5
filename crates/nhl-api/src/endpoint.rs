//! Logical endpoint groups of the NHL API.

/// A base URL grouping a family of resource paths.
///
/// The NHL exposes its data across several hosts; every resource method
/// addresses exactly one of these groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Primary game-data API (`api-web.nhle.com/v1/`).
    Web,
    /// Core API (`api.nhle.com/`).
    Core,
    /// Statistics REST API (`api.nhle.com/stats/rest/`).
    Stats,
    /// Player search API (`search.d3.nhle.com/api/v1/`).
    Search,
}

impl Endpoint {
    /// All endpoint groups, in override-table order.
    pub(crate) const ALL: [Self; 4] = [Self::Web, Self::Core, Self::Stats, Self::Search];

    /// Default base URL for this endpoint group.
    ///
    /// Trailing slashes matter: resource paths are joined onto these.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Web => "https://api-web.nhle.com/v1/",
            Self::Core => "https://api.nhle.com/",
            Self::Stats => "https://api.nhle.com/stats/rest/",
            Self::Search => "https://search.d3.nhle.com/api/v1/",
        }
    }

    /// Index into the per-endpoint override table.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Web => 0,
            Self::Core => 1,
            Self::Stats => 2,
            Self::Search => 3,
        }
    }
}
