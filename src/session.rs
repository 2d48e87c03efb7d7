//! Session records and the pure decision logic over them.
//!
//! DESIGN
//! ======
//! Everything here is DOM-free so the rules (identity formatting, role and
//! tab checks, the authenticated/unauthenticated decision) can be unit
//! tested natively. The `guard` module owns the side effects.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

/// Identity record stored by the login flow. Every field is optional and
/// missing ones degrade to placeholder text in [`User::display_label`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Permission record stored by the login flow. The tab list keeps its
/// stored order; membership is a linear containment check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub accessible_tabs: Vec<String>,
}

/// Outcome of the page-load authentication check. The caller decides
/// whether to navigate; this type only carries the decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCheck {
    Authenticated(User),
    Unauthenticated,
}

/// Silent-default decode policy: absent or malformed serialized records
/// become `Default::default()`, never an error surfaced to the caller.
pub fn decode_or_default<T>(raw: Option<&str>) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    match raw {
        None => T::default(),
        Some(json) => serde_json::from_str(json).unwrap_or_else(|err| {
            log::debug!("stored record unreadable, using empty default: {err}");
            T::default()
        }),
    }
}

impl User {
    /// Identity line shown in the page header, e.g. `👤 Ana (admin)`.
    ///
    /// Name wins over email; empty strings count as absent. Missing
    /// identity falls back to `User`, missing role to `Unknown`.
    pub fn display_label(&self) -> String {
        let who = non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.email.as_deref()))
            .unwrap_or("User");
        let role = non_empty(self.role.as_deref()).unwrap_or("Unknown");
        format!("👤 {who} ({role})")
    }

    /// Exact, case-sensitive match against the `admin` role.
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

impl Permissions {
    pub fn allows_tab(&self, tab: &str) -> bool {
        self.accessible_tabs.iter().any(|t| t == tab)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
