use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Wiring defects in the hosting service: a catalog that disagrees with its
/// backing entity, or metadata assembled from unusable catalogs. These are
/// developer errors, not user errors. They fail the operation loudly and are
/// never folded into a validation error list.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("duplicate wire type '{ty}' in {entity} {catalog} catalog")]
    DuplicateWireType {
        entity: &'static str,
        catalog: &'static str,
        ty: &'static str,
    },

    #[error("{entity} {catalog} catalog is empty")]
    EmptyCatalog {
        entity: &'static str,
        catalog: &'static str,
    },

    #[error("no descriptor bound for property type '{ty}'")]
    UnknownProperty { ty: String },
}
