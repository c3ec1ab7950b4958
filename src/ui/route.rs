use crate::api::PostId;

/// Navigable screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: all posts.
    Index,
    /// `/posts/new`: create form.
    New,
    /// `/posts/{id}`: one post.
    Show(PostId),
}

impl Route {
    /// Parse a path. Unknown paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::Index);
        }

        let mut segments = trimmed.strip_prefix('/')?.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some("posts"), Some("new"), None) => Some(Route::New),
            (Some("posts"), Some(id), None) if !id.is_empty() => Some(Route::Show(PostId::parse(id))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => "/".to_string(),
            Route::New => "/posts/new".to_string(),
            Route::Show(id) => format!("/posts/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Index));
        assert_eq!(Route::parse(""), Some(Route::Index));
        assert_eq!(Route::parse("/posts/new"), Some(Route::New));
        assert_eq!(Route::parse("/posts/12"), Some(Route::Show(PostId::Number(12))));
        assert_eq!(
            Route::parse("/posts/abc/"),
            Some(Route::Show(PostId::Text("abc".to_string())))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/posts"), None);
        assert_eq!(Route::parse("/posts/1/edit"), None);
        assert_eq!(Route::parse("/about"), None);
        assert_eq!(Route::parse("posts/1"), None);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Index, Route::New, Route::Show(PostId::Number(3))] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }
}
