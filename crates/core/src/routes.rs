//! Declarative SPA route table and navigation guard

/// Access rule attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable by anyone.
    Public,
    /// Requires an authenticated session.
    RequiresAuth,
    /// Only meaningful for logged-out users (login, register, ...).
    GuestOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub name: &'static str,
    pub path: &'static str,
    pub access: RouteAccess,
}

/// The storefront route table. `:param` segments match any single segment.
pub const ROUTES: &[Route] = &[
    Route { name: "home", path: "/", access: RouteAccess::Public },
    Route { name: "login", path: "/login", access: RouteAccess::GuestOnly },
    Route { name: "register", path: "/register", access: RouteAccess::GuestOnly },
    Route { name: "password-reset", path: "/password-reset", access: RouteAccess::GuestOnly },
    Route {
        name: "password-reset-confirm",
        path: "/password-reset/confirm",
        access: RouteAccess::GuestOnly,
    },
    Route { name: "email-verify", path: "/email/verify", access: RouteAccess::Public },
    Route { name: "profile", path: "/profile", access: RouteAccess::RequiresAuth },
    Route { name: "profile-edit", path: "/profile/edit", access: RouteAccess::RequiresAuth },
    Route {
        name: "change-password",
        path: "/profile/change-password",
        access: RouteAccess::RequiresAuth,
    },
    Route { name: "products", path: "/products", access: RouteAccess::Public },
    Route { name: "product-detail", path: "/products/:slug", access: RouteAccess::Public },
    Route { name: "cart", path: "/cart", access: RouteAccess::RequiresAuth },
];

/// Outcome of the navigation guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    Allow,
    /// Authenticated user on a guest-only page.
    RedirectHome,
    /// Unauthenticated user on a protected page; `redirect` preserves the
    /// intended destination so it can be resumed after login.
    RedirectLogin { redirect: String },
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

fn matches(route: &Route, path: &str) -> bool {
    let mut pattern = segments(route.path);
    let mut target = segments(path);
    loop {
        match (pattern.next(), target.next()) {
            (None, None) => return true,
            (Some(expected), Some(actual)) => {
                if !expected.starts_with(':') && expected != actual {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Resolve a path against the route table. Longer literal paths are declared
/// after their prefixes, so the first match with the most literal segments
/// wins; unmatched paths fall through to `None` (the not-found view).
pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = path.split('?').next().unwrap_or(path);
    // Prefer literal matches over parameterized ones (`/password-reset/confirm`
    // vs `/products/:slug`).
    ROUTES
        .iter()
        .filter(|route| matches(route, path))
        .max_by_key(|route| route.path.split(':').next().unwrap_or("").len())
}

/// Navigation guard: mirrors the SPA's `beforeEach` hook.
pub fn check_navigation(path: &str, authenticated: bool) -> Guard {
    let Some(route) = find_route(path) else {
        return Guard::Allow;
    };
    match route.access {
        RouteAccess::GuestOnly if authenticated => Guard::RedirectHome,
        RouteAccess::RequiresAuth if !authenticated => Guard::RedirectLogin {
            redirect: path.to_string(),
        },
        _ => Guard::Allow,
    }
}
