//! User profile response DTO

use serde::{Deserialize, Serialize};

use vt_core::domain::value_objects::UserProfile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
        }
    }
}
