use crate::{
    error::ConfigError,
    messages,
    property::{PropertyDescriptor, PropertyShape, PropertyValue},
    result::AdminError,
};
use derive_more::Deref;
use std::collections::BTreeSet;

///
/// PropertyCatalog
///
/// Ordered collection of descriptors scoped to one operation (create or
/// update) for one entity kind. Ordering follows registration order so
/// identity-establishing properties can be listed first.
///

#[derive(Clone, Deref)]
pub struct PropertyCatalog<E> {
    descriptors: Vec<PropertyDescriptor<E>>,
}

// not derived: a derive would put a Debug bound on E
impl<E> std::fmt::Debug for PropertyCatalog<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyCatalog")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

impl<E> PropertyCatalog<E> {
    #[must_use]
    pub fn new(descriptors: Vec<PropertyDescriptor<E>>) -> Self {
        Self { descriptors }
    }

    /// Derive an update catalog from the entity's registration table,
    /// preserving declaration order and dropping read-only descriptors.
    #[must_use]
    pub fn from_shape() -> Self
    where
        E: PropertyShape,
    {
        Self::new(
            E::properties()
                .into_iter()
                .filter(|prop| !prop.is_read_only())
                .collect(),
        )
    }

    #[must_use]
    pub fn get(&self, ty: &str) -> Option<&PropertyDescriptor<E>> {
        self.descriptors.iter().find(|prop| prop.ty() == ty)
    }

    /// Validate a create batch, collecting every error.
    ///
    /// Each entry is resolved by wire type; unknown types contribute an
    /// "invalid" error without aborting the rest of the batch. Duplicate
    /// entries are validated independently. Pure with respect to inputs;
    /// mutation happens only via [`apply`](Self::apply) once the caller has
    /// confirmed zero errors.
    #[must_use]
    pub fn validate_batch(&self, properties: &[PropertyValue]) -> Vec<String> {
        let mut errors = Vec::new();

        for property in properties {
            match self.get(&property.ty) {
                None => errors.push(messages::property_invalid(&property.ty)),
                Some(prop) => {
                    if let Some(error) = prop.validate(property.value.as_deref()) {
                        errors.push(error);
                    }
                }
            }
        }

        errors
    }

    /// Validate a single set-property call.
    ///
    /// A missing type and an unknown type are distinct conditions with
    /// distinct messages.
    #[must_use]
    pub fn validate_single(&self, ty: &str, value: Option<&str>) -> Vec<String> {
        if ty.trim().is_empty() {
            return vec![messages::PROPERTY_TYPE_REQUIRED.to_string()];
        }

        match self.get(ty) {
            None => vec![messages::property_invalid(ty)],
            Some(prop) => prop.validate(value).into_iter().collect(),
        }
    }

    /// Apply one raw value to the backing entity.
    ///
    /// An unknown wire type here is a catalog/entity wiring defect, not a
    /// user error: callers must have validated the type first, so a miss
    /// surfaces as a [`ConfigError`] and never degrades to "field ignored".
    pub fn apply(&self, entity: &mut E, ty: &str, value: Option<&str>) -> Result<(), AdminError> {
        let prop = self.get(ty).ok_or_else(|| ConfigError::UnknownProperty {
            ty: ty.to_string(),
        })?;

        prop.try_set(entity, value)
            .map_err(AdminError::validation)
    }

    /// Wire types must be unique within a catalog.
    pub(crate) fn check_unique(
        &self,
        entity: &'static str,
        catalog: &'static str,
    ) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();

        for prop in &self.descriptors {
            if !seen.insert(prop.ty()) {
                return Err(ConfigError::DuplicateWireType {
                    entity,
                    catalog,
                    ty: prop.ty(),
                });
            }
        }

        Ok(())
    }
}
