//! Navigation seam for terminal authentication failures

/// Injected by the embedding frontend; invoked exactly once when a refresh
/// cycle fails terminally and the user must re-authenticate.
pub trait Navigator: Send + Sync {
    /// Transition to the login entry point. `redirect` carries the originally
    /// intended destination so the user can resume after logging in.
    ///
    /// The value is the API path of the request that could no longer be
    /// authenticated (e.g. `/cart/`), not an SPA route: implementations that
    /// feed it into the route table should map it to the corresponding view
    /// (or ignore it) rather than match it verbatim.
    fn redirect_to_login(&self, redirect: Option<&str>);
}

/// Default navigator for headless use (tests, CLIs).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_login(&self, _redirect: Option<&str>) {}
}
