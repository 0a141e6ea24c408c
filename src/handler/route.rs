use axum::http::Method;

/// Everything an invocation can ask for. Anything else is an invalid route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Preflight,
    List(Listing),
    Create(Creation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Albums,
    Videos,
    Lyrics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Creation {
    Album,
    Track,
    Video,
    Lyric,
}

const ROUTES: &[(Method, &str, Route)] = &[
    (Method::GET, "albums", Route::List(Listing::Albums)),
    (Method::GET, "videos", Route::List(Listing::Videos)),
    (Method::GET, "lyrics", Route::List(Listing::Lyrics)),
    (Method::POST, "album", Route::Create(Creation::Album)),
    (Method::POST, "track", Route::Create(Creation::Track)),
    (Method::POST, "video", Route::Create(Creation::Video)),
    (Method::POST, "lyric", Route::Create(Creation::Lyric)),
];

impl Route {
    /// Preflight matches any path; everything else is an exact lookup.
    pub fn resolve(method: &Method, path: &str) -> Option<Self> {
        if method == Method::OPTIONS {
            return Some(Route::Preflight);
        }
        ROUTES
            .iter()
            .find(|(m, p, _)| m == method && *p == path)
            .map(|(_, _, route)| *route)
    }
}
