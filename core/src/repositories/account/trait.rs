//! Account repository trait defining the interface for account persistence.
//!
//! The verification gate consumes this as its Account Store collaborator:
//! a lookup that treats every credential sub-record's email as an
//! equivalent identity, and a save that persists mutations atomically per
//! document. Implementations own the actual storage engine.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use uuid::Uuid;
/// use jp_core::repositories::AccountRepository;
/// use jp_core::domain::entities::account::Account;
/// use jp_core::errors::DomainError;
///
/// struct MongoAccountRepository {
///     // database handle
/// }
///
/// #[async_trait]
/// impl AccountRepository for MongoAccountRepository {
///     async fn find_by_email(&self, _email: &str) -> Result<Option<Account>, DomainError> {
///         // Implementation here
///         Ok(None)
///     }
///
///     async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, DomainError> {
///         Ok(None)
///     }
///
///     async fn create(&self, account: Account) -> Result<Account, DomainError> {
///         Ok(account)
///     }
///
///     async fn update(&self, account: Account) -> Result<Account, DomainError> {
///         Ok(account)
///     }
///
///     async fn exists_by_email(&self, _email: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by email across all credential sub-records
    ///
    /// The email is matched against both the local credential email and
    /// the Google OAuth email after normalization.
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account holds this email under any identity
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Create a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The created account
    /// * `Err(DomainError)` - Creation failed (e.g., duplicate email)
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Persist mutations to an existing account
    ///
    /// The save is all-or-nothing: on failure the stored record is left as
    /// it was before the call.
    async fn update(&self, account: Account) -> Result<Account, DomainError>;

    /// Check whether any account holds the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
