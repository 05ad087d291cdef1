use crate::{
    error::ConfigError,
    property::{DataType, PropertyCatalog},
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// EntityMetadata
///
/// Aggregates the create and update catalogs plus capability flags for one
/// entity kind. Built eagerly in the service constructor and validated
/// there, so by the time any request runs there is exactly one immutable
/// metadata snapshot and no lazy-build race to guard.
///

pub struct EntityMetadata<E> {
    entity: &'static str,
    create: PropertyCatalog<E>,
    update: PropertyCatalog<E>,
    supports_create: bool,
    supports_delete: bool,
}

impl<E> EntityMetadata<E> {
    #[must_use]
    pub fn new(
        entity: &'static str,
        create: PropertyCatalog<E>,
        update: PropertyCatalog<E>,
    ) -> Self {
        Self {
            entity,
            create,
            update,
            supports_create: true,
            supports_delete: true,
        }
    }

    #[must_use]
    pub fn without_create(mut self) -> Self {
        self.supports_create = false;
        self
    }

    #[must_use]
    pub fn without_delete(mut self) -> Self {
        self.supports_delete = false;
        self
    }

    /// Enforce the construction invariants and seal the metadata.
    ///
    /// Failure is a startup/configuration defect in the hosting service;
    /// it is never surfaced to an end user.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.create.check_unique(self.entity, "create")?;
        self.update.check_unique(self.entity, "update")?;

        if self.supports_create && self.create.is_empty() {
            return Err(ConfigError::EmptyCatalog {
                entity: self.entity,
                catalog: "create",
            });
        }
        if self.update.is_empty() {
            return Err(ConfigError::EmptyCatalog {
                entity: self.entity,
                catalog: "update",
            });
        }

        Ok(self)
    }

    #[must_use]
    pub const fn entity(&self) -> &'static str {
        self.entity
    }

    #[must_use]
    pub const fn supports_create(&self) -> bool {
        self.supports_create
    }

    #[must_use]
    pub const fn supports_delete(&self) -> bool {
        self.supports_delete
    }

    #[must_use]
    pub const fn create(&self) -> &PropertyCatalog<E> {
        &self.create
    }

    #[must_use]
    pub const fn update(&self) -> &PropertyCatalog<E> {
        &self.update
    }

    /// Presentation snapshot consumed by the form-rendering layer.
    #[must_use]
    pub fn view(&self) -> MetadataView {
        MetadataView {
            supports_create: self.supports_create,
            supports_delete: self.supports_delete,
            create_properties: self.create.iter().map(PropertyRef::from_descriptor).collect(),
            update_properties: self.update.iter().map(PropertyRef::from_descriptor).collect(),
        }
    }
}

// not derived: a derive would put a Debug bound on E
impl<E> fmt::Debug for EntityMetadata<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityMetadata")
            .field("entity", &self.entity)
            .field("create", &self.create)
            .field("update", &self.update)
            .field("supports_create", &self.supports_create)
            .field("supports_delete", &self.supports_delete)
            .finish()
    }
}

///
/// PropertyRef
///
/// Serializable view of one descriptor: just enough for a client to render
/// a dynamic form field.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRef {
    #[serde(rename = "type")]
    pub ty: String,

    pub name: String,
    pub data_type: DataType,
    pub required: bool,
}

impl PropertyRef {
    fn from_descriptor<E>(prop: &crate::property::PropertyDescriptor<E>) -> Self {
        Self {
            ty: prop.ty().to_string(),
            name: prop.name().to_string(),
            data_type: prop.data_type(),
            required: prop.is_required(),
        }
    }
}

///
/// MetadataView
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataView {
    pub supports_create: bool,
    pub supports_delete: bool,
    pub create_properties: Vec<PropertyRef>,
    pub update_properties: Vec<PropertyRef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyDescriptor, PropertyShape};
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Gadget {
        name: String,
        enabled: bool,
    }

    impl PropertyShape for Gadget {
        fn properties() -> Vec<PropertyDescriptor<Self>> {
            vec![
                PropertyDescriptor::text(
                    "GadgetName",
                    |g: &Self| g.name.clone(),
                    |g, v| g.name = v,
                ),
                PropertyDescriptor::flag("Enabled", |g: &Self| g.enabled, |g, v| g.enabled = v),
            ]
        }
    }

    fn create_catalog() -> PropertyCatalog<Gadget> {
        PropertyCatalog::new(vec![
            PropertyDescriptor::text(
                "GadgetName",
                |g: &Gadget| g.name.clone(),
                |g, v| g.name = v,
            )
            .required(),
        ])
    }

    #[test]
    fn validated_metadata_defaults_to_full_capability() {
        let meta = EntityMetadata::new(
            "gadget",
            create_catalog(),
            PropertyCatalog::from_shape(),
        )
        .validated()
        .expect("well-formed metadata");

        assert!(meta.supports_create());
        assert!(meta.supports_delete());
        assert_eq!(meta.create().len(), 1);
        assert_eq!(meta.update().len(), 2);
    }

    #[test]
    fn capability_flags_can_be_switched_off() {
        let meta = EntityMetadata::new(
            "gadget",
            create_catalog(),
            PropertyCatalog::from_shape(),
        )
        .without_delete()
        .validated()
        .expect("well-formed metadata");

        assert!(meta.supports_create());
        assert!(!meta.supports_delete());
    }

    #[test]
    fn duplicate_wire_types_fail_validation() {
        let update = PropertyCatalog::new(vec![
            PropertyDescriptor::<Gadget>::flag("Enabled", |g| g.enabled, |g, v| g.enabled = v),
            PropertyDescriptor::<Gadget>::flag("Enabled", |g| g.enabled, |g, v| g.enabled = v),
        ]);

        let err = EntityMetadata::new("gadget", create_catalog(), update)
            .validated()
            .unwrap_err();

        assert_eq!(
            err,
            ConfigError::DuplicateWireType {
                entity: "gadget",
                catalog: "update",
                ty: "Enabled",
            }
        );
    }

    #[test]
    fn empty_catalogs_fail_validation() {
        let err = EntityMetadata::new(
            "gadget",
            PropertyCatalog::<Gadget>::new(Vec::new()),
            PropertyCatalog::from_shape(),
        )
        .validated()
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::EmptyCatalog {
                entity: "gadget",
                catalog: "create",
            }
        );

        // an empty create catalog is fine when creation is unsupported
        let meta = EntityMetadata::new(
            "gadget",
            PropertyCatalog::<Gadget>::new(Vec::new()),
            PropertyCatalog::from_shape(),
        )
        .without_create()
        .validated();

        assert!(meta.is_ok());
    }

    #[test]
    fn view_serializes_for_form_rendering() {
        let meta = EntityMetadata::new(
            "gadget",
            create_catalog(),
            PropertyCatalog::from_shape(),
        )
        .validated()
        .expect("well-formed metadata");

        let view = serde_json::to_value(meta.view()).expect("serializable view");

        assert_eq!(
            view["createProperties"],
            json!([{
                "type": "GadgetName",
                "name": "Gadget Name",
                "dataType": "String",
                "required": true,
            }])
        );
        assert_eq!(view["updateProperties"][1]["dataType"], json!("Boolean"));
        assert_eq!(view["supportsCreate"], json!(true));
    }
}
