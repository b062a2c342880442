use leptos::prelude::*;

use crate::storage;

pub const ACCESS_KEY: &str = "access";
pub const REFRESH_KEY: &str = "refresh";

/// Process-wide auth state. The access token is mirrored into a signal so
/// components re-render on login/logout; localStorage holds the durable copy.
#[derive(Clone, Copy)]
pub struct SessionContext {
    access: ReadSignal<Option<String>>,
    set_access: WriteSignal<Option<String>>,
}

impl SessionContext {
    /// Seed from whatever a previous visit left behind.
    pub fn load() -> Self {
        let (access, set_access) = signal(storage::get(ACCESS_KEY));
        Self { access, set_access }
    }

    pub fn token(&self) -> Option<String> {
        self.access.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.access.with(|t| t.is_some())
    }

    /// Store both tokens after a successful login.
    pub fn store(&self, access: &str, refresh: &str) {
        storage::set(ACCESS_KEY, access);
        storage::set(REFRESH_KEY, refresh);
        self.set_access.set(Some(access.to_string()));
    }

    /// Drop the credential pair (logout or expiry).
    pub fn clear(&self) {
        storage::remove(ACCESS_KEY);
        storage::remove(REFRESH_KEY);
        self.set_access.set(None);
    }
}
