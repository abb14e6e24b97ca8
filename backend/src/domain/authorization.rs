//! Route access policy.
//!
//! Pure function of the requested path and whether a user is signed in; the
//! HTTP middleware supplies both and acts on the verdict.

use super::navigation::{DASHBOARD_PATH, LOGIN_PATH};

/// Verdict for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Serve the request.
    Allow,
    /// Send the caller elsewhere instead.
    Redirect(&'static str),
}

/// Decide whether `path` may be served.
///
/// - Dashboard paths need a signed-in user; others are sent to sign in.
/// - Signed-in users asking for the sign-in page go to the dashboard.
///
/// # Examples
/// ```
/// use invoicing::domain::authorization::{Access, authorize};
///
/// assert_eq!(authorize("/dashboard/invoices", false), Access::Redirect("/login"));
/// assert_eq!(authorize("/dashboard/invoices", true), Access::Allow);
/// ```
pub fn authorize(path: &str, signed_in: bool) -> Access {
    if path.starts_with(DASHBOARD_PATH) {
        return if signed_in {
            Access::Allow
        } else {
            Access::Redirect(LOGIN_PATH)
        };
    }
    if signed_in && path.starts_with(LOGIN_PATH) {
        return Access::Redirect(DASHBOARD_PATH);
    }
    Access::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/dashboard", false, Access::Redirect(LOGIN_PATH))]
    #[case("/dashboard/invoices/abc", false, Access::Redirect(LOGIN_PATH))]
    #[case("/dashboard", true, Access::Allow)]
    #[case("/login", true, Access::Redirect(DASHBOARD_PATH))]
    #[case("/login", false, Access::Allow)]
    #[case("/register", false, Access::Allow)]
    #[case("/register", true, Access::Allow)]
    #[case("/", false, Access::Allow)]
    fn policy(#[case] path: &str, #[case] signed_in: bool, #[case] expected: Access) {
        assert_eq!(authorize(path, signed_in), expected);
    }
}
