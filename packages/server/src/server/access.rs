//! Route access table
//!
//! An ordered list of (pattern, access) rules. The first matching rule decides what the
//! request needs before it reaches a handler. Paths marked `Anonymous` never have their
//! credentials parsed.

use crate::common::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
}

impl PathPattern {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == *p,
            PathPattern::Prefix(p) => path.starts_with(p),
            PathPattern::Contains(p) => path.contains(p),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Open to everyone; the Authorization header is ignored
    Anonymous,
    /// Open to everyone; a valid credential is still resolved when present
    Public,
    /// Any valid principal
    Authenticated,
    /// A principal with exactly this role
    Role(Role),
}

impl Access {
    pub fn reads_credentials(&self) -> bool {
        !matches!(self, Access::Anonymous)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<(PathPattern, Access)>,
    fallback: Access,
}

impl RouteTable {
    pub fn new(rules: Vec<(PathPattern, Access)>, fallback: Access) -> Self {
        Self { rules, fallback }
    }

    /// The table the API is served with
    pub fn standard() -> Self {
        use PathPattern::{Contains, Exact, Prefix};

        Self::new(
            vec![
                (Exact("/"), Access::Anonymous),
                (Exact("/health"), Access::Anonymous),
                (Prefix("/api/auth/"), Access::Anonymous),
                (Prefix("/api/dishes/"), Access::Anonymous),
                (Prefix("/api/restaurants/"), Access::Anonymous),
                (Prefix("/api/test/"), Access::Anonymous),
                (Exact("/api/test"), Access::Anonymous),
                (Contains("/test"), Access::Anonymous),
                (Prefix("/api/owner/"), Access::Role(Role::Owner)),
                (Prefix("/api/admin/"), Access::Role(Role::Admin)),
                (Prefix("/api/student/"), Access::Role(Role::Student)),
                (Prefix("/api/feedback/dishes/"), Access::Public),
                (Prefix("/api/feedback/student/"), Access::Role(Role::Student)),
                (Prefix("/api/feedback/owner/"), Access::Role(Role::Owner)),
                (Prefix("/api/feedback/admin/"), Access::Role(Role::Admin)),
            ],
            Access::Authenticated,
        )
    }

    pub fn access_for(&self, path: &str) -> Access {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, access)| *access)
            .unwrap_or(self.fallback)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths_skip_credentials() {
        let table = RouteTable::standard();
        for path in [
            "/",
            "/health",
            "/api/auth/login",
            "/api/dishes/all",
            "/api/restaurants/approved",
            "/api/test",
            "/api/test/auth",
            "/api/owner/test",
        ] {
            assert_eq!(table.access_for(path), Access::Anonymous, "{}", path);
        }
    }

    #[test]
    fn test_role_prefixes() {
        let table = RouteTable::standard();
        assert_eq!(table.access_for("/api/owner/restaurants"), Access::Role(Role::Owner));
        assert_eq!(table.access_for("/api/admin/users"), Access::Role(Role::Admin));
        assert_eq!(table.access_for("/api/student/orders"), Access::Role(Role::Student));
        assert_eq!(
            table.access_for("/api/feedback/student/my-feedback"),
            Access::Role(Role::Student)
        );
        assert_eq!(
            table.access_for("/api/feedback/owner/restaurants/1/feedback"),
            Access::Role(Role::Owner)
        );
        assert_eq!(table.access_for("/api/feedback/admin/all"), Access::Role(Role::Admin));
    }

    #[test]
    fn test_dish_rating_is_public_but_resolved() {
        let table = RouteTable::standard();
        let access = table.access_for("/api/feedback/dishes/abc/rating");
        assert_eq!(access, Access::Public);
        assert!(access.reads_credentials());
    }

    #[test]
    fn test_unlisted_paths_need_authentication() {
        let table = RouteTable::standard();
        assert_eq!(table.access_for("/api/orders"), Access::Authenticated);
        assert_eq!(table.access_for("/api/auth"), Access::Authenticated);
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(
            vec![
                (PathPattern::Prefix("/a/"), Access::Anonymous),
                (PathPattern::Prefix("/a/b/"), Access::Role(Role::Admin)),
            ],
            Access::Authenticated,
        );
        assert_eq!(table.access_for("/a/b/c"), Access::Anonymous);
    }
}
