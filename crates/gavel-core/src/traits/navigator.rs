//! Navigation trait and route targets.

/// A navigation target the core can send the embedding UI to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The entry/login view.
    Login,
    Questions,
    Question(String),
    Profiles,
    Profile(String),
    Submissions,
    /// Static permission-denied error view.
    Error403,
    /// Static not-found error view.
    Error404,
}

/// Navigation seam implemented by the embedding UI.
///
/// `reload` is the trigger used after every state-mutating call: it
/// re-runs the current route so all on-screen data is re-fetched from the
/// server instead of patched in place. The default re-navigates to
/// `current()`.
pub trait Navigator: Send + Sync {
    /// Replace the active view with `route`.
    fn navigate(&self, route: Route);

    /// The route of the active view.
    fn current(&self) -> Route;

    /// Re-run the current route's data-fetch sequence.
    fn reload(&self) {
        self.navigate(self.current());
    }
}
