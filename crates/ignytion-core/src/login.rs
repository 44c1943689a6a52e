//! Demo login gate for the admin view
//!
//! A placeholder, not an auth system: the credentials are literals and the
//! authenticated flag lives only as long as the view does.

use crate::notice::Notice;
use crate::prelude::*;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin";

pub const LOGIN_OK: &str = "Successfully logged in!";
pub const LOGIN_FAILED: &str = "Invalid credentials";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginGate {
    pub username: String,
    pub password: String,
    authenticated: bool,
}

impl LoginGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check the typed credentials against the demo pair
    ///
    /// Always yields exactly one notice. A mismatch leaves the flag as it was.
    pub fn attempt(&mut self) -> Notice {
        let ok = self.username == DEMO_USERNAME && self.password == DEMO_PASSWORD;
        info!(username = %self.username, ok, "demo login attempt");

        if ok {
            self.authenticated = true;
            Notice::success(LOGIN_OK)
        } else {
            Notice::error(LOGIN_FAILED)
        }
    }

    /// Drop back to the login form with empty inputs
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeLevel;

    fn gate(username: &str, password: &str) -> LoginGate {
        LoginGate {
            username: username.to_string(),
            password: password.to_string(),
            ..LoginGate::default()
        }
    }

    #[test]
    fn test_demo_credentials_authenticate() {
        let mut gate = gate("admin", "admin");
        let notice = gate.attempt();
        assert!(gate.is_authenticated());
        assert_eq!(notice, Notice::success(LOGIN_OK));
    }

    #[test]
    fn test_wrong_credentials_rejected() {
        for (user, pass) in [
            ("admin", "wrong"),
            ("root", "admin"),
            ("", ""),
            ("Admin", "admin"),
            ("admin ", "admin"),
        ] {
            let mut gate = gate(user, pass);
            let notice = gate.attempt();
            assert!(!gate.is_authenticated(), "{user:?}/{pass:?}");
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(notice.message, LOGIN_FAILED);
        }
    }

    #[test]
    fn test_sign_out_resets() {
        let mut gate = gate("admin", "admin");
        gate.attempt();
        gate.sign_out();
        assert!(!gate.is_authenticated());
        assert!(gate.username.is_empty());
        assert!(gate.password.is_empty());
    }
}
