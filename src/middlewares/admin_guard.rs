use crate::{constants::paths, middlewares::RouteAccess, utils::Claims};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
}

/// Anonymous callers go to sign-in, signed-in non-admins back to the
/// overview.
pub fn admin_guard(claims: Option<&Claims>) -> GuardOutcome {
    match claims {
        Some(claims) if claims.is_admin() => GuardOutcome::Render,
        Some(_) => GuardOutcome::Redirect(paths::dashboard::OVERVIEW),
        None => GuardOutcome::Redirect(paths::auth::SIGN_IN),
    }
}

pub fn enforce(access: RouteAccess, claims: Option<&Claims>) -> GuardOutcome {
    match access {
        RouteAccess::Public => GuardOutcome::Render,
        RouteAccess::AdminOnly => admin_guard(claims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::schema::UserRole;

    #[test]
    fn admin_renders() {
        let admin = Claims::new("a", UserRole::Admin, 60);
        assert_eq!(admin_guard(Some(&admin)), GuardOutcome::Render);
        assert_eq!(enforce(RouteAccess::AdminOnly, Some(&admin)), GuardOutcome::Render);
    }

    #[test]
    fn non_admin_is_sent_to_overview() {
        let user = Claims::new("u", UserRole::User, 60);
        assert_eq!(admin_guard(Some(&user)), GuardOutcome::Redirect("/dashboard"));
    }

    #[test]
    fn anonymous_is_sent_to_sign_in() {
        assert_eq!(admin_guard(None), GuardOutcome::Redirect("/auth/sign-in"));
        assert_eq!(enforce(RouteAccess::AdminOnly, None), GuardOutcome::Redirect("/auth/sign-in"));
    }

    #[test]
    fn public_routes_always_render() {
        let user = Claims::new("u", UserRole::User, 60);
        assert_eq!(enforce(RouteAccess::Public, None), GuardOutcome::Render);
        assert_eq!(enforce(RouteAccess::Public, Some(&user)), GuardOutcome::Render);
    }
}
