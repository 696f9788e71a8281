//! Per-user default target languages.
//!
//! Created on the first set-language command, overwritten on later ones,
//! never deleted automatically. In-memory only; lost on restart by design.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::gateway::UserId;

#[derive(Debug, Default)]
pub struct UserPreferences {
    defaults: Mutex<HashMap<UserId, String>>,
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `target` as the user's default, returning the previous one.
    pub fn set_default(&self, user: &UserId, target: &str) -> Option<String> {
        self.lock().insert(user.clone(), target.to_string())
    }

    /// Returns the user's stored default target, if any.
    pub fn default_target(&self, user: &UserId) -> Option<String> {
        self.lock().get(user).cloned()
    }

    #[allow(clippy::unwrap_used)]
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<UserId, String>> {
        // Lock scopes are short and never hold user code; poisoning cannot occur.
        self.defaults.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_absent_until_set() {
        let prefs = UserPreferences::new();
        assert_eq!(prefs.default_target(&"u1".to_string()), None);
    }

    #[test]
    fn test_set_then_get() {
        let prefs = UserPreferences::new();
        assert_eq!(prefs.set_default(&"u1".to_string(), "es"), None);
        assert_eq!(prefs.default_target(&"u1".to_string()), Some("es".to_string()));
    }

    #[test]
    fn test_set_overwrites_and_returns_previous() {
        let prefs = UserPreferences::new();
        prefs.set_default(&"u1".to_string(), "es");
        assert_eq!(
            prefs.set_default(&"u1".to_string(), "ja"),
            Some("es".to_string())
        );
        assert_eq!(prefs.default_target(&"u1".to_string()), Some("ja".to_string()));
    }

    #[test]
    fn test_users_are_independent() {
        let prefs = UserPreferences::new();
        prefs.set_default(&"u1".to_string(), "es");
        assert_eq!(prefs.default_target(&"u2".to_string()), None);
    }
}
