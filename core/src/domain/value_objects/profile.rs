//! Read-only user profile projection returned by authenticated lookup.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Profile data exposed to an authenticated caller
///
/// Deliberately excludes the internal identifier and anything derived from
/// the raw token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_projection() {
        let user = User::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "+14085551234".to_string(),
        );
        let profile = UserProfile::from(user.clone());

        assert_eq!(profile.name, user.name);
        assert_eq!(profile.email, user.email);
        assert_eq!(profile.phone, user.phone);

        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("id").is_none());
    }
}
