//! Role gate: the decision table that guards routes and menus.
//!
//! Each portal declares one `{route -> RoutePolicy}` table and both its router
//! guard and its navigation menus consult it through [`gate`]. There is no
//! other role check in the render tree, so the table is the single source of
//! truth for what a given role may see.

/// Who may visit a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy<R: 'static> {
    /// Anyone, signed in or not.
    Public,
    /// Any signed-in account, role irrelevant.
    Authenticated,
    /// Signed-in accounts whose role is in the set.
    Allowed(&'static [R]),
}

/// Outcome of gating a route against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// Not signed in; send to the login page.
    ToLogin,
    /// Signed in but the role is outside the allowed set; send home.
    ToHome,
}

/// Pure decision table: policy x current role -> decision.
///
/// `role` is `None` when no session exists. This never inspects anything but
/// the role value; authorization proper is enforced server-side.
pub fn gate<R: Copy + PartialEq>(policy: RoutePolicy<R>, role: Option<R>) -> GateDecision {
    match (policy, role) {
        (RoutePolicy::Public, _) => GateDecision::Allow,
        (_, None) => GateDecision::ToLogin,
        (RoutePolicy::Authenticated, Some(_)) => GateDecision::Allow,
        (RoutePolicy::Allowed(roles), Some(role)) => {
            if roles.contains(&role) {
                GateDecision::Allow
            } else {
                GateDecision::ToHome
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Role {
        Student,
        Staff,
        Admin,
    }

    const ALL: [Role; 3] = [Role::Student, Role::Staff, Role::Admin];

    #[test]
    fn test_public_routes_never_redirect() {
        assert_eq!(gate::<Role>(RoutePolicy::Public, None), GateDecision::Allow);
        for role in ALL {
            assert_eq!(
                gate(RoutePolicy::Public, Some(role)),
                GateDecision::Allow
            );
        }
    }

    #[test]
    fn test_unauthenticated_goes_to_login() {
        assert_eq!(
            gate::<Role>(RoutePolicy::Authenticated, None),
            GateDecision::ToLogin
        );
        assert_eq!(
            gate(RoutePolicy::Allowed(&[Role::Admin]), None),
            GateDecision::ToLogin
        );
    }

    #[test]
    fn test_role_outside_allowed_set_goes_home() {
        let staff_only = RoutePolicy::Allowed(&[Role::Staff, Role::Admin]);
        // Every role not in the set redirects, never renders.
        for role in ALL {
            let expected = if matches!(role, Role::Staff | Role::Admin) {
                GateDecision::Allow
            } else {
                GateDecision::ToHome
            };
            assert_eq!(gate(staff_only, Some(role)), expected);
        }
    }

    #[test]
    fn test_authenticated_allows_any_role() {
        for role in ALL {
            assert_eq!(
                gate(RoutePolicy::Authenticated, Some(role)),
                GateDecision::Allow
            );
        }
    }
}
