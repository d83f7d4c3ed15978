use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

/// Role-based policy shared by every catalog resource.
///
/// Reads are open to any authenticated identity; mutations require the admin role.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogPolicy;

impl CatalogPolicy {
    pub fn can_view(&self, _identity: &Identity) -> Result<bool, CoreError> {
        Ok(true)
    }

    pub fn can_manage(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(identity.is_admin())
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_policy() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
        assert_eq!(
            ensure_policy(Ok(false), "insufficient permissions"),
            Err(CoreError::Forbidden("insufficient permissions".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::Unauthorized), "nope"),
            Err(CoreError::Unauthorized)
        );
    }
}
