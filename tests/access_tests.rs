#![cfg(feature = "access")]
//! Integration tests for property, field, object and method accessors.

use fnkit::access::{
    field, fields, has_field, has_fields, has_prop, has_props, includes, invoke, method,
    modify, object_of, prop, props, trigger,
};
use fnkit::{Error, Function, TypeTag, Value, argument, compose};
use rstest::{fixture, rstest};

#[fixture]
fn order() -> Value {
    Value::object([
        ("id", Value::from(17)),
        (
            "customer",
            Value::object([
                ("name", Value::from("Ada")),
                ("tags", Value::array(["vip", "early"])),
            ]),
        ),
        (
            "lines",
            Value::array([
                Value::object([("sku", Value::from("A-1")), ("quantity", Value::from(2))]),
                Value::object([("sku", Value::from("B-7")), ("quantity", Value::from(1))]),
            ]),
        ),
    ])
}

// =============================================================================
// Properties
// =============================================================================

#[rstest]
#[case(Value::from("id"), Value::from(17))]
#[case(Value::array(["customer", "name"]), Value::from("Ada"))]
#[case(Value::array([Value::from("lines"), Value::from(1), Value::from("sku")]), Value::from("B-7"))]
#[case(Value::array(["customer", "tags", "length"]), Value::from(2))]
#[case(Value::array(["customer", "address", "city"]), Value::Undefined)]
fn test_prop_paths(order: Value, #[case] path: Value, #[case] expected: Value) {
    assert_eq!(prop(&path, &order), expected);
}

#[rstest]
fn test_props_mixes_keys_and_paths(order: Value) {
    let result = props(
        &Value::array([Value::from("id"), Value::array(["customer", "name"])]),
        &order,
    )
    .unwrap();
    assert_eq!(result, Value::array([Value::from(17), Value::from("Ada")]));
}

#[rstest]
fn test_has_prop_and_has_props(order: Value) {
    assert!(has_prop(&Value::array(["customer", "tags"]), &order));
    assert!(!has_prop(&Value::array(["customer", "email"]), &order));
    assert_eq!(
        has_props(&Value::array(["id", "total"]), &order).unwrap(),
        Value::array([true, false])
    );
}

#[rstest]
fn test_props_accepts_array_like_objects(order: Value) {
    let keys = Value::object([("0", Value::from("id")), ("length", Value::from(1))]);
    assert_eq!(props(&keys, &order).unwrap(), Value::array([17]));
}

// =============================================================================
// Fields
// =============================================================================

#[rstest]
fn test_field_reads_each_collection_kind() {
    let map = Value::map([(Value::from(true), Value::from("yes"))]);
    assert_eq!(field(&Value::from(true), &map).unwrap(), Value::from("yes"));
    assert_eq!(
        field(&Value::from(-2), &Value::array([1, 2, 3])).unwrap(),
        Value::from(2)
    );
    assert_eq!(
        field(&Value::from(1), &Value::object([("1", "one")])).unwrap(),
        Value::from("one")
    );
}

#[rstest]
fn test_field_on_set_is_unsupported() {
    let error = field(&Value::from(0), &Value::set([1])).unwrap_err();
    assert_eq!(
        error,
        Error::Unsupported {
            operation: "Getter",
            type_tag: TypeTag::Set,
        }
    );
    assert_eq!(error.to_string(), "Getter for type \"Set\" is not implemented");
}

#[rstest]
fn test_fields_and_has_fields(order: Value) {
    assert_eq!(
        fields(&Value::array(["id", "missing"]), &order).unwrap(),
        Value::array([Value::from(17), Value::Undefined])
    );
    let tags = prop(&Value::array(["customer", "tags"]), &order);
    assert_eq!(
        has_fields(&Value::array(["vip", "late"]), &tags).unwrap(),
        Value::array([true, false])
    );
    assert!(has_field(&Value::from("early"), &tags).unwrap());
}

#[rstest]
fn test_includes_uses_same_value_zero() {
    let values = Value::array([Value::from(0.0), Value::from(f64::NAN)]);
    assert!(includes(&Value::from(-0.0), &values).unwrap());
    assert!(includes(&Value::from(f64::NAN), &values).unwrap());
    assert!(!includes(&Value::from("0"), &values).unwrap());
}

#[rstest]
fn test_includes_on_object_is_unsupported() {
    assert!(matches!(
        includes(&Value::from(1), &Value::object([("a", 1)])),
        Err(Error::Unsupported { .. })
    ));
}

// =============================================================================
// Objects
// =============================================================================

#[rstest]
fn test_modify_with_transformers(order: Value) {
    let increment = Value::from(Function::new(1, |arguments| {
        Ok(Value::from(argument(&arguments, 0).to_number() + 1.0))
    }));
    let by = Value::object([("id", increment)]);

    let modified = modify(&by, &order).unwrap();
    assert_eq!(modified.property(&Value::from("id")), Value::from(18));
    assert_eq!(order.property(&Value::from("id")), Value::from(17));
    assert_eq!(
        modified.property(&Value::from("customer")),
        order.property(&Value::from("customer"))
    );
}

#[rstest]
fn test_object_of_zips_keys_with_values() {
    let built = object_of(&Value::array(["x", "y"]), &Value::array([3, 4])).unwrap();
    assert_eq!(built, Value::object([("x", 3), ("y", 4)]));
}

// =============================================================================
// Methods
// =============================================================================

#[rstest]
fn test_invoke_builtin_array_method() {
    let result = invoke(
        &Value::from("at"),
        &Value::array(["a", "b", "c"]),
        &[Value::from(1)],
    );
    assert_eq!(result.unwrap(), Value::from("b"));
}

#[rstest]
fn test_method_on_string() {
    assert_eq!(
        method(&Value::from("trim"), &Value::from("  spaced  "), &[]).unwrap(),
        Value::from("spaced")
    );
}

#[rstest]
#[case(Value::from(1))]
#[case(Value::Null)]
fn test_invoke_on_primitive_fails(#[case] receiver: Value) {
    let error = invoke(&Value::from("toString"), &receiver, &[]).unwrap_err();
    assert!(error.is_validation());
}

#[rstest]
fn test_trigger_in_composition(order: Value) {
    let upper = trigger(&Value::from("toUpperCase"), &[]);
    let name = Function::new(1, |arguments| {
        Ok(prop(&Value::array(["customer", "name"]), &argument(&arguments, 0)))
    });
    let composed = compose(&[Value::from(upper), Value::from(name)]).unwrap();
    assert_eq!(composed.call([order]).unwrap(), Value::from("ADA"));
}
