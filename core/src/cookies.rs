//! Cookie store seam.
//!
//! The admin site keeps the session token and the caller's claims in
//! cookies. Models only ever read or write whole named values, so the store
//! is a flat string map.

use std::cell::RefCell;
use std::collections::BTreeMap;

pub const SESSION_TOKEN: &str = "session-token";
pub const AUTH_CLAIMS: &str = "auth-claims";

pub trait CookieStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);

    fn session_token(&self) -> Option<String> {
        self.get(SESSION_TOKEN)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) {
        (**self).set(name, value)
    }
}

impl<T: CookieStore + ?Sized> CookieStore for std::rc::Rc<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&self, name: &str, value: &str) {
        (**self).set(name, value)
    }
}

/// In-process cookie store. Last write wins.
#[derive(Debug, Default)]
pub struct MemoryCookieStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }
}

impl CookieStore for MemoryCookieStore {
    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let store = MemoryCookieStore::new().with(SESSION_TOKEN, "old");
        store.set(SESSION_TOKEN, "new");
        assert_eq!(store.session_token().as_deref(), Some("new"));
    }

    #[test]
    fn missing_cookie_is_none() {
        let store = MemoryCookieStore::new();
        assert_eq!(store.get(AUTH_CLAIMS), None);
        assert_eq!(store.session_token(), None);
    }
}
