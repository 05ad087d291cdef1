use crate::{
    error::ConfigError,
    messages,
    property::{Converted, DataType, PropertyCatalog, PropertyDescriptor, PropertyShape, PropertyValue},
    result::AdminError,
};
use proptest::prelude::*;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

// ---- fixture -----------------------------------------------------------

#[derive(Debug, Default)]
struct Widget {
    name: String,
    enabled: bool,
    weight: i64,
    expires: Option<OffsetDateTime>,
    homepage: String,
}

impl PropertyShape for Widget {
    fn properties() -> Vec<PropertyDescriptor<Self>> {
        vec![
            PropertyDescriptor::text("WidgetName", |w: &Self| w.name.clone(), |w, v| w.name = v)
                .required(),
            PropertyDescriptor::flag("Enabled", |w: &Self| w.enabled, |w, v| w.enabled = v),
            PropertyDescriptor::number("Weight", |w: &Self| w.weight, |w, v| w.weight = v),
            PropertyDescriptor::timestamp("Expires", |w: &Self| w.expires, |w, v| w.expires = v),
            PropertyDescriptor::url(
                "Homepage",
                |w: &Self| w.homepage.clone(),
                |w, v| w.homepage = v,
            )
            .read_only(),
        ]
    }
}

fn catalog() -> PropertyCatalog<Widget> {
    PropertyCatalog::new(Widget::properties())
}

fn name_prop() -> PropertyDescriptor<Widget> {
    PropertyDescriptor::text("WidgetName", |w: &Widget| w.name.clone(), |w, v| w.name = v)
        .required()
}

// ---- descriptor --------------------------------------------------------

#[test]
fn display_name_derived_from_wire_type() {
    let prop = name_prop();
    assert_eq!(prop.name(), "Widget Name");

    let renamed = name_prop().named("Widget");
    assert_eq!(renamed.name(), "Widget");
}

#[test]
fn required_rejects_null_and_empty() {
    let prop = name_prop();

    assert_eq!(
        prop.validate(None),
        Some("WidgetName is required.".to_string())
    );
    assert_eq!(
        prop.validate(Some("")),
        Some("WidgetName is required.".to_string())
    );
    assert_eq!(
        prop.validate(Some("   ")),
        Some("WidgetName is required.".to_string())
    );
    assert_eq!(prop.validate(Some("anything")), None);
}

#[test]
fn optional_accepts_null_and_empty() {
    let prop = PropertyDescriptor::<Widget>::flag("Enabled", |w| w.enabled, |w, v| w.enabled = v);

    assert_eq!(prop.validate(None), None);
    assert_eq!(prop.validate(Some("")), None);
}

#[test]
fn flag_rejects_non_boolean_text() {
    let prop = PropertyDescriptor::<Widget>::flag("Enabled", |w| w.enabled, |w, v| w.enabled = v);

    assert_eq!(
        prop.validate(Some("yes")),
        Some("Enabled is not valid.".to_string())
    );
    assert_eq!(prop.validate(Some("true")), None);
    assert_eq!(prop.validate(Some("False")), None);
}

#[test]
fn number_rejects_unparseable_text() {
    let prop = PropertyDescriptor::<Widget>::number("Weight", |w| w.weight, |w, v| w.weight = v);

    assert_eq!(
        prop.validate(Some("heavy")),
        Some("Weight is not valid.".to_string())
    );
    assert_eq!(prop.validate(Some("-42")), None);
    assert_eq!(prop.validate(Some(" 7 ")), None);
}

#[test]
fn timestamp_rejects_non_rfc3339_text() {
    let prop = PropertyDescriptor::<Widget>::timestamp(
        "Expires",
        |w| w.expires,
        |w, v| w.expires = v,
    );

    assert_eq!(
        prop.validate(Some("next tuesday")),
        Some("Expires is not valid.".to_string())
    );
    assert_eq!(prop.validate(Some("2026-01-02T03:04:05Z")), None);
}

#[test]
fn convert_maps_raw_to_display_values() {
    let props = Widget::properties();

    assert_eq!(props[0].convert("abc"), Converted::Text("abc".to_string()));
    assert_eq!(props[1].convert("True"), Converted::Flag(true));
    assert_eq!(props[2].convert("-9"), Converted::Number(-9));

    let ts = OffsetDateTime::parse("2026-01-02T03:04:05Z", &Rfc3339).expect("valid timestamp");
    assert_eq!(props[3].convert("2026-01-02T03:04:05Z"), Converted::Timestamp(Some(ts)));
}

#[test]
fn try_set_then_try_get_round_trips() {
    let catalog = catalog();
    let mut widget = Widget::default();

    for (ty, raw) in [
        ("WidgetName", "petstore"),
        ("Enabled", "true"),
        ("Weight", "1200"),
        ("Expires", "2026-01-02T03:04:05Z"),
    ] {
        let prop = catalog.get(ty).expect("descriptor registered");
        prop.try_set(&mut widget, Some(raw)).expect("value applies");

        let stored = prop.try_get(&widget);
        assert_eq!(prop.convert(&stored), prop.convert(raw), "{ty} round trip");
    }
}

#[test]
fn try_set_rejects_invalid_input_without_mutating() {
    let catalog = catalog();
    let mut widget = Widget {
        weight: 5,
        ..Widget::default()
    };

    let prop = catalog.get("Weight").expect("descriptor registered");
    let err = prop.try_set(&mut widget, Some("heavy")).unwrap_err();

    assert_eq!(err, "Weight is not valid.");
    assert_eq!(widget.weight, 5);
}

// ---- catalog -----------------------------------------------------------

#[test]
fn catalog_preserves_registration_order() {
    let order: Vec<_> = catalog().iter().map(|p| p.ty()).collect();
    assert_eq!(
        order,
        vec!["WidgetName", "Enabled", "Weight", "Expires", "Homepage"]
    );
}

#[test]
fn from_shape_excludes_read_only_descriptors() {
    let update = PropertyCatalog::<Widget>::from_shape();

    assert!(update.get("Homepage").is_none());
    assert!(update.get("WidgetName").is_some());
    assert_eq!(update.len(), 4);
}

#[test]
fn batch_missing_required_value_reports_exactly_one_error() {
    // Scenario A
    let errors = catalog().validate_batch(&[PropertyValue::new("WidgetName", "")]);
    assert_eq!(errors, vec!["WidgetName is required.".to_string()]);
}

#[test]
fn batch_unknown_type_reports_invalid_and_continues() {
    // Scenario B, plus the no-abort guarantee
    let errors = catalog().validate_batch(&[
        PropertyValue::new("Bogus", "x"),
        PropertyValue::new("WidgetName", ""),
    ]);

    assert_eq!(
        errors,
        vec![
            "Bogus is invalid".to_string(),
            "WidgetName is required.".to_string(),
        ]
    );
}

#[test]
fn batch_with_all_valid_values_is_clean_and_applies() {
    // Scenario C
    let catalog = catalog();
    let bag = vec![
        PropertyValue::new("WidgetName", "petstore"),
        PropertyValue::new("Weight", "12"),
    ];

    assert!(catalog.validate_batch(&bag).is_empty());

    let mut widget = Widget::default();
    for entry in &bag {
        catalog
            .apply(&mut widget, &entry.ty, entry.value.as_deref())
            .expect("validated entry applies");
    }

    assert_eq!(widget.name, "petstore");
    assert_eq!(widget.weight, 12);
}

#[test]
fn empty_batch_produces_no_errors() {
    assert!(catalog().validate_batch(&[]).is_empty());
}

#[test]
fn duplicate_entries_validate_independently_and_last_wins() {
    let catalog = catalog();
    let bag = vec![
        PropertyValue::new("Weight", "1"),
        PropertyValue::new("Weight", "oops"),
        PropertyValue::new("Weight", "3"),
    ];

    let errors = catalog.validate_batch(&bag);
    assert_eq!(errors, vec!["Weight is not valid.".to_string()]);

    let mut widget = Widget::default();
    for entry in &bag {
        // apply only the entries that validate, in input order
        if catalog.validate_batch(std::slice::from_ref(entry)).is_empty() {
            catalog
                .apply(&mut widget, &entry.ty, entry.value.as_deref())
                .expect("valid entry applies");
        }
    }
    assert_eq!(widget.weight, 3);
}

#[test]
fn batch_validation_is_idempotent() {
    let catalog = catalog();
    let bag = vec![
        PropertyValue::new("Bogus", "x"),
        PropertyValue::unset("WidgetName"),
        PropertyValue::new("Enabled", "maybe"),
    ];

    assert_eq!(catalog.validate_batch(&bag), catalog.validate_batch(&bag));
}

#[test]
fn single_set_distinguishes_missing_type_from_unknown_type() {
    // Scenario D
    let catalog = catalog();

    assert_eq!(
        catalog.validate_single("", Some("x")),
        vec![messages::PROPERTY_TYPE_REQUIRED.to_string()]
    );
    assert_eq!(
        catalog.validate_single("Bogus", Some("x")),
        vec!["Bogus is invalid".to_string()]
    );
    assert_eq!(
        catalog.validate_single("Weight", Some("heavy")),
        vec!["Weight is not valid.".to_string()]
    );
    assert!(catalog.validate_single("Weight", Some("9")).is_empty());
}

#[test]
fn apply_with_unknown_type_is_a_config_error() {
    let mut widget = Widget::default();
    let err = catalog()
        .apply(&mut widget, "Bogus", Some("x"))
        .unwrap_err();

    assert_eq!(
        err,
        AdminError::Config(ConfigError::UnknownProperty {
            ty: "Bogus".to_string()
        })
    );
}

#[test]
fn data_type_tags_follow_constructors() {
    let props = Widget::properties();

    assert_eq!(props[0].data_type(), DataType::String);
    assert_eq!(props[1].data_type(), DataType::Boolean);
    assert_eq!(props[2].data_type(), DataType::Integer);
    assert_eq!(props[3].data_type(), DataType::DateTime);
    assert_eq!(props[4].data_type(), DataType::Url);
}

// ---- properties --------------------------------------------------------

proptest! {
    #[test]
    fn number_values_round_trip(n in any::<i64>()) {
        let catalog = catalog();
        let prop = catalog.get("Weight").expect("descriptor registered");
        let mut widget = Widget::default();

        prop.try_set(&mut widget, Some(&n.to_string())).expect("number applies");
        prop_assert_eq!(widget.weight, n);
        prop_assert_eq!(prop.try_get(&widget), n.to_string());
    }

    #[test]
    fn validation_never_panics_and_is_pure(raw in ".*") {
        let catalog = catalog();
        for prop in catalog.iter() {
            let first = prop.validate(Some(&raw));
            let second = prop.validate(Some(&raw));
            prop_assert_eq!(first, second);
        }
    }
}
