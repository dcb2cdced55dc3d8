use roamly_shared::Masked;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Traveler,
    Admin,
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TRAVELER" | "USER" => Ok(Role::Traveler),
            "ADMIN" => Ok(Role::Admin),
            other => Err(CoreError::IdentityError(format!("unknown role: {}", other))),
        }
    }
}

/// Authenticated identity handed over by the auth layer.
///
/// The token is opaque here; it is issued and verified elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    pub token: Masked<String>,
    pub name: String,
    pub email: Masked<String>,
}

impl Session {
    pub fn new(role: Role, token: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            role,
            token: Masked::new(token.into()),
            name: name.into(),
            email: Masked::new(email.into()),
        }
    }

    pub fn is_traveler(&self) -> bool {
        self.role == Role::Traveler && !self.token.expose().is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin && !self.token.expose().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("traveler".parse::<Role>().unwrap(), Role::Traveler);
        assert_eq!("USER".parse::<Role>().unwrap(), Role::Traveler);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("guest".parse::<Role>().is_err());
    }

    #[test]
    fn test_empty_token_is_not_authenticated() {
        let session = Session::new(Role::Traveler, "", "Asha", "asha@example.com");
        assert!(!session.is_traveler());
        let session = Session::new(Role::Traveler, "tok", "Asha", "asha@example.com");
        assert!(session.is_traveler());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_debug_masks_token() {
        let session = Session::new(Role::Admin, "tok-123", "Ops", "ops@example.com");
        let rendered = format!("{:?}", session);
        assert!(!rendered.contains("tok-123"));
        assert!(!rendered.contains("ops@example.com"));
    }
}
