//! User repository trait defining the interface for user data persistence.
//!
//! Implementations handle the actual database operations while maintaining
//! the abstraction boundary between domain and infrastructure layers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user whose email OR phone matches the given values
    ///
    /// Used by registration to detect collisions on either contact field.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - A user with either contact value exists
    /// * `Ok(None)` - Neither value is taken
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Find a user by their phone number (exact match)
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// The check-and-insert is atomic with respect to the uniqueness of
    /// `email` and `phone`: a concurrent duplicate insert must fail with
    /// `AuthError::UserAlreadyExists` rather than produce a second record.
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email/phone)
    async fn create(&self, user: User) -> Result<User, DomainError>;
}
