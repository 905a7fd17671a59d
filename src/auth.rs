use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

use crate::config::Config;

pub const SESSION_COOKIE: &str = "session";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    User,
}

/// Authenticated caller context for one request. Token issuance lives in an
/// external collaborator; here the token is an opaque string classified by
/// comparison against the configured admin credential.
#[derive(Clone, Debug)]
pub struct Principal {
    pub role: Role,
}

/// Derives the current principal from the bearer header or session cookie.
/// Returns None when no credential is presented.
pub fn current_principal(config: &Config, headers: &HeaderMap, jar: &CookieJar) -> Option<Principal> {
    let token = bearer_token(headers)
        .or_else(|| jar.get(SESSION_COOKIE).map(|c| c.value().to_string()))?;

    if token.is_empty() {
        return None;
    }

    let role = if !config.admin_token.is_empty() && token == config.admin_token {
        Role::Admin
    } else {
        Role::User
    };

    Some(Principal { role })
}

/// Absent principal and non-admin principal both classify as not admin.
pub fn is_admin(principal: Option<&Principal>) -> bool {
    matches!(principal, Some(p) if p.role == Role::Admin)
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(admin_token: &str) -> Config {
        Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            admin_token: admin_token.to_string(),
        }
    }

    #[test]
    fn matching_bearer_token_is_admin() {
        let config = test_config("sekrit");
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer sekrit".parse().unwrap());

        let principal = current_principal(&config, &headers, &CookieJar::new());
        assert!(is_admin(principal.as_ref()));
    }

    #[test]
    fn other_token_is_plain_user() {
        let config = test_config("sekrit");
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer someone-else".parse().unwrap());

        let principal = current_principal(&config, &headers, &CookieJar::new()).unwrap();
        assert_eq!(principal.role, Role::User);
        assert!(!is_admin(Some(&principal)));
    }

    #[test]
    fn no_credential_means_no_principal() {
        let config = test_config("sekrit");
        let principal = current_principal(&config, &HeaderMap::new(), &CookieJar::new());
        assert!(principal.is_none());
        assert!(!is_admin(principal.as_ref()));
    }

    #[test]
    fn empty_admin_token_never_grants_admin() {
        let config = test_config("");
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer ".parse().unwrap());
        assert!(current_principal(&config, &headers, &CookieJar::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer anything".parse().unwrap());
        let principal = current_principal(&config, &headers, &CookieJar::new()).unwrap();
        assert_eq!(principal.role, Role::User);
    }
}
