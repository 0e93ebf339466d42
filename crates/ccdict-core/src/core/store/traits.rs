use super::error::StoreError;
use crate::core::models::category::Category;

/// Read access to a keyed store of component containers.
///
/// Implementors enumerate container names in their native order and fetch
/// individual categories by container and category name.
pub trait ObjectStore {
    /// Names of all containers, in the order the store enumerates them.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn container_index(&self) -> Result<Vec<String>, StoreError>;

    /// Fetches one category of one container.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` if either the container or the category is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn fetch_object(
        &self,
        container_name: &str,
        object_name: &str,
    ) -> Result<Option<Category>, StoreError>;
}
