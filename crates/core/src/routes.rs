//! Client-side route table.
//!
//! Pure bidirectional mapping between URL paths and named app routes.
//! Navigation, history, and guards live in whatever shell hosts the client;
//! this module only answers "which route is this path" and "which path is
//! this route".

use crate::types::DbId;

/// Every navigable destination in the app.
///
/// Paths follow the convention `/{area}` for listings and
/// `/{area}/{id}[/action]` for entity views:
///
/// | route            | path                  |
/// |------------------|-----------------------|
/// | `Dashboard`      | `/`                   |
/// | `Collection`     | `/collection`         |
/// | `CardDetails`    | `/collection/{id}`    |
/// | `GatchaRoll`     | `/gatcha`             |
/// | `CreatorStudio`  | `/studio`             |
/// | `Characters`     | `/characters`         |
/// | `SeriesList`     | `/series`             |
/// | `Themes`         | `/themes`             |
/// | `History`        | `/history`            |
/// | `CharacterNew`   | `/character/new`      |
/// | `CharacterEdit`  | `/character/{id}/edit`|
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Collection,
    CardDetails { id: DbId },
    GatchaRoll,
    CreatorStudio,
    Characters,
    SeriesList,
    Themes,
    History,
    CharacterNew,
    CharacterEdit { id: DbId },
}

impl Route {
    /// Match a URL path against the route table.
    ///
    /// A single trailing slash is tolerated (`/collection/` matches
    /// `Collection`). Unknown paths and malformed ids return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gatcha_core::routes::Route;
    ///
    /// assert_eq!(Route::parse("/"), Some(Route::Dashboard));
    /// assert_eq!(Route::parse("/collection/7"), Some(Route::CardDetails { id: 7 }));
    /// assert_eq!(Route::parse("/character/new"), Some(Route::CharacterNew));
    /// assert_eq!(Route::parse("/collection/seven"), None);
    /// ```
    pub fn parse(path: &str) -> Option<Route> {
        // "/collection/" and "/collection" are the same destination; "/" is
        // already canonical.
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        let rest = path.strip_prefix('/')?;

        let segments: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };

        match segments.as_slice() {
            [] => Some(Route::Dashboard),
            ["collection"] => Some(Route::Collection),
            ["collection", id] => parse_id(id).map(|id| Route::CardDetails { id }),
            ["gatcha"] => Some(Route::GatchaRoll),
            ["studio"] => Some(Route::CreatorStudio),
            ["characters"] => Some(Route::Characters),
            ["series"] => Some(Route::SeriesList),
            ["themes"] => Some(Route::Themes),
            ["history"] => Some(Route::History),
            ["character", "new"] => Some(Route::CharacterNew),
            ["character", id, "edit"] => parse_id(id).map(|id| Route::CharacterEdit { id }),
            _ => None,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Collection => "/collection".to_string(),
            Route::CardDetails { id } => format!("/collection/{id}"),
            Route::GatchaRoll => "/gatcha".to_string(),
            Route::CreatorStudio => "/studio".to_string(),
            Route::Characters => "/characters".to_string(),
            Route::SeriesList => "/series".to_string(),
            Route::Themes => "/themes".to_string(),
            Route::History => "/history".to_string(),
            Route::CharacterNew => "/character/new".to_string(),
            Route::CharacterEdit { id } => format!("/character/{id}/edit"),
        }
    }

    /// Stable route name, used in logs and view lookup.
    pub const fn name(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Collection => "collection",
            Route::CardDetails { .. } => "card-details",
            Route::GatchaRoll => "gatcha-roll",
            Route::CreatorStudio => "creator-studio",
            Route::Characters => "characters",
            Route::SeriesList => "series-list",
            Route::Themes => "themes",
            Route::History => "history",
            Route::CharacterNew => "character-new",
            Route::CharacterEdit { .. } => "character-edit",
        }
    }
}

/// Parse a path segment as a decimal id. Digits only, so negative ids and
/// `+`-prefixed numbers are rejected.
fn parse_id(segment: &str) -> Option<DbId> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_dashboard() {
        assert_eq!(Route::parse("/"), Some(Route::Dashboard));
    }

    #[test]
    fn plain_listings() {
        assert_eq!(Route::parse("/collection"), Some(Route::Collection));
        assert_eq!(Route::parse("/characters"), Some(Route::Characters));
        assert_eq!(Route::parse("/series"), Some(Route::SeriesList));
        assert_eq!(Route::parse("/themes"), Some(Route::Themes));
        assert_eq!(Route::parse("/history"), Some(Route::History));
        assert_eq!(Route::parse("/gatcha"), Some(Route::GatchaRoll));
        assert_eq!(Route::parse("/studio"), Some(Route::CreatorStudio));
    }

    #[test]
    fn card_details_with_id() {
        assert_eq!(
            Route::parse("/collection/42"),
            Some(Route::CardDetails { id: 42 })
        );
    }

    #[test]
    fn character_new_is_not_an_edit() {
        assert_eq!(Route::parse("/character/new"), Some(Route::CharacterNew));
        assert_eq!(
            Route::parse("/character/9/edit"),
            Some(Route::CharacterEdit { id: 9 })
        );
        // "new" is not a valid id, so no edit route can swallow it.
        assert_eq!(Route::parse("/character/new/edit"), None);
    }

    #[test]
    fn trailing_slash_tolerated() {
        assert_eq!(Route::parse("/collection/"), Some(Route::Collection));
        assert_eq!(
            Route::parse("/character/3/edit/"),
            Some(Route::CharacterEdit { id: 3 })
        );
    }

    #[test]
    fn unknown_paths_rejected() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/collection/7/extra"), None);
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("collection"), None);
    }

    #[test]
    fn malformed_ids_rejected() {
        assert_eq!(Route::parse("/collection/seven"), None);
        assert_eq!(Route::parse("/collection/-1"), None);
        assert_eq!(Route::parse("/collection/1.5"), None);
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            Route::Dashboard,
            Route::Collection,
            Route::CardDetails { id: 7 },
            Route::GatchaRoll,
            Route::CreatorStudio,
            Route::Characters,
            Route::SeriesList,
            Route::Themes,
            Route::History,
            Route::CharacterNew,
            Route::CharacterEdit { id: 12 },
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn names_are_stable() {
        assert_eq!(Route::Dashboard.name(), "dashboard");
        assert_eq!(Route::CardDetails { id: 1 }.name(), "card-details");
        assert_eq!(Route::CharacterEdit { id: 1 }.name(), "character-edit");
    }
}
