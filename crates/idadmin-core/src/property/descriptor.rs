use crate::{
    messages,
    property::{Converted, DataType},
};
use convert_case::{Case, Casing};
use std::fmt;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Binding
///
/// Accessor/mutator pair tying a descriptor to one field of the backing
/// entity. The variant fixes the conversion applied to raw wire values, so
/// a descriptor can never be registered against a field of the wrong type.
///

pub enum Binding<E> {
    Text {
        get: fn(&E) -> String,
        set: fn(&mut E, String),
    },
    Flag {
        get: fn(&E) -> bool,
        set: fn(&mut E, bool),
    },
    Number {
        get: fn(&E) -> i64,
        set: fn(&mut E, i64),
    },
    Timestamp {
        get: fn(&E) -> Option<OffsetDateTime>,
        set: fn(&mut E, Option<OffsetDateTime>),
    },
}

// fn pointers are Copy regardless of E, derive would demand E: Clone
impl<E> Clone for Binding<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Binding<E> {}

///
/// PropertyDescriptor
///
/// Describes one named, typed property of a backing entity: its wire type,
/// display label, rendering tag, required/read-only flags, and the binding
/// used to validate, convert, read, and write values. Constructed once at
/// service start-up and immutable thereafter.
///

pub struct PropertyDescriptor<E> {
    ty: &'static str,
    name: String,
    data_type: DataType,
    required: bool,
    read_only: bool,
    binding: Binding<E>,
}

impl<E> PropertyDescriptor<E> {
    fn with_binding(ty: &'static str, data_type: DataType, binding: Binding<E>) -> Self {
        Self {
            ty,
            name: ty.to_case(Case::Title),
            data_type,
            required: false,
            read_only: false,
            binding,
        }
    }

    #[must_use]
    pub fn text(ty: &'static str, get: fn(&E) -> String, set: fn(&mut E, String)) -> Self {
        Self::with_binding(ty, DataType::String, Binding::Text { get, set })
    }

    #[must_use]
    pub fn flag(ty: &'static str, get: fn(&E) -> bool, set: fn(&mut E, bool)) -> Self {
        Self::with_binding(ty, DataType::Boolean, Binding::Flag { get, set })
    }

    #[must_use]
    pub fn number(ty: &'static str, get: fn(&E) -> i64, set: fn(&mut E, i64)) -> Self {
        Self::with_binding(ty, DataType::Integer, Binding::Number { get, set })
    }

    #[must_use]
    pub fn timestamp(
        ty: &'static str,
        get: fn(&E) -> Option<OffsetDateTime>,
        set: fn(&mut E, Option<OffsetDateTime>),
    ) -> Self {
        Self::with_binding(ty, DataType::DateTime, Binding::Timestamp { get, set })
    }

    /// Text binding rendered as a URL input.
    #[must_use]
    pub fn url(ty: &'static str, get: fn(&E) -> String, set: fn(&mut E, String)) -> Self {
        Self::with_binding(ty, DataType::Url, Binding::Text { get, set })
    }

    /// Text binding rendered as a password input.
    #[must_use]
    pub fn password(ty: &'static str, get: fn(&E) -> String, set: fn(&mut E, String)) -> Self {
        Self::with_binding(ty, DataType::Password, Binding::Text { get, set })
    }

    /// Text binding rendered as a fixed-choice input.
    #[must_use]
    pub fn choice(ty: &'static str, get: fn(&E) -> String, set: fn(&mut E, String)) -> Self {
        Self::with_binding(ty, DataType::Enum, Binding::Text { get, set })
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Excluded from update catalogs.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Override the display label derived from the wire type.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub const fn ty(&self) -> &'static str {
        self.ty
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.data_type
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Validate a raw wire value against required-ness and data type.
    ///
    /// Malformed input is an expected, reportable condition; this never
    /// panics. `None` means the value is acceptable.
    #[must_use]
    pub fn validate(&self, raw: Option<&str>) -> Option<String> {
        let raw = raw.unwrap_or_default();

        if raw.trim().is_empty() {
            return self
                .required
                .then(|| messages::property_required(self.ty));
        }

        match self.binding {
            Binding::Text { .. } => None,
            Binding::Flag { .. } => parse_flag(raw)
                .is_none()
                .then(|| messages::property_not_valid(self.ty)),
            Binding::Number { .. } => raw
                .trim()
                .parse::<i64>()
                .is_err()
                .then(|| messages::property_not_valid(self.ty)),
            Binding::Timestamp { .. } => OffsetDateTime::parse(raw, &Rfc3339)
                .is_err()
                .then(|| messages::property_not_valid(self.ty)),
        }
    }

    /// Map a raw value into its display-typed form.
    ///
    /// Read-path only: raw values are trusted here because they either came
    /// from the backing store or passed [`validate`](Self::validate)
    /// upstream. Unparseable input falls back to the type's default.
    #[must_use]
    pub fn convert(&self, raw: &str) -> Converted {
        match self.binding {
            Binding::Text { .. } => Converted::Text(raw.to_string()),
            Binding::Flag { .. } => Converted::Flag(parse_flag(raw).unwrap_or_default()),
            Binding::Number { .. } => {
                Converted::Number(raw.trim().parse().unwrap_or_default())
            }
            Binding::Timestamp { .. } => {
                Converted::Timestamp(OffsetDateTime::parse(raw, &Rfc3339).ok())
            }
        }
    }

    /// Validate `raw` and, on success, assign the converted value onto the
    /// bound field. The only mutating operation in this module; it touches
    /// exactly one field of one entity.
    pub fn try_set(&self, entity: &mut E, raw: Option<&str>) -> Result<(), String> {
        if let Some(error) = self.validate(raw) {
            return Err(error);
        }

        let raw = raw.unwrap_or_default();
        match self.binding {
            Binding::Text { set, .. } => set(entity, raw.to_string()),
            Binding::Flag { set, .. } => set(entity, parse_flag(raw).unwrap_or_default()),
            Binding::Number { set, .. } => set(entity, raw.trim().parse().unwrap_or_default()),
            Binding::Timestamp { set, .. } => {
                set(entity, OffsetDateTime::parse(raw, &Rfc3339).ok());
            }
        }

        Ok(())
    }

    /// Read the bound field and serialize it to its raw wire form.
    #[must_use]
    pub fn try_get(&self, entity: &E) -> String {
        match self.binding {
            Binding::Text { get, .. } => get(entity),
            Binding::Flag { get, .. } => {
                if get(entity) { "true" } else { "false" }.to_string()
            }
            Binding::Number { get, .. } => get(entity).to_string(),
            Binding::Timestamp { get, .. } => get(entity)
                .and_then(|ts| ts.format(&Rfc3339).ok())
                .unwrap_or_default(),
        }
    }
}

impl<E> Clone for PropertyDescriptor<E> {
    fn clone(&self) -> Self {
        Self {
            ty: self.ty,
            name: self.name.clone(),
            data_type: self.data_type,
            required: self.required,
            read_only: self.read_only,
            binding: self.binding,
        }
    }
}

impl<E> fmt::Debug for PropertyDescriptor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("ty", &self.ty)
            .field("name", &self.name)
            .field("data_type", &self.data_type)
            .field("required", &self.required)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

// bool::from_str is strict lowercase; the wire historically carries "True"
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
