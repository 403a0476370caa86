//! Site routes

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Projects,
    Contact,
    /// Serves the CV document rather than a page
    ViewCv,
}

/// Routes that render a mountable page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
}

impl Page {
    pub fn route(self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::About => Route::About,
            Page::Projects => Route::Projects,
            Page::Contact => Route::Contact,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route().path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route for `{0}`")]
pub struct UnknownRoute(pub String);

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Contact,
        Route::ViewCv,
    ];

    /// Entries of the navigation bar
    pub const NAV: [Route; 3] = [Route::About, Route::Projects, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
            Route::ViewCv => "/api/view-cv",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::ViewCv => "CV",
        }
    }

    /// The page this route renders, `None` for the document endpoint
    pub fn page(self) -> Option<Page> {
        match self {
            Route::Home => Some(Page::Home),
            Route::About => Some(Page::About),
            Route::Projects => Some(Page::Projects),
            Route::Contact => Some(Page::Contact),
            Route::ViewCv => None,
        }
    }

    pub fn is_page(self) -> bool {
        self.page().is_some()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    /// Accepts paths with or without the leading or trailing slash
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('/');
        Route::ALL
            .into_iter()
            .find(|route| route.path().trim_matches('/') == trimmed)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}
