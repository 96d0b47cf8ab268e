use super::*;

#[test]
fn test_render_types() {
    let cases = vec![
        ("any", ExprType::Any, "any"),
        ("null", ExprType::Null, "null"),
        ("number", ExprType::Number, "number"),
        ("bool", ExprType::Bool, "bool"),
        ("string", ExprType::String, "string"),
        ("empty object", ExprType::empty_object(), "object"),
        (
            "empty strict props object",
            ExprType::empty_strict_object(),
            "{}",
        ),
        (
            "strict object",
            ExprType::strict_object([("foo", ExprType::String)]),
            "{foo: string}",
        ),
        (
            "non-strict object",
            ExprType::object([("foo", ExprType::String)]),
            "object",
        ),
        (
            "map object",
            ExprType::map_object(ExprType::Number),
            "object",
        ),
        ("array", ExprType::array(ExprType::Any), "array<any>"),
        (
            "nested array",
            ExprType::array(ExprType::array_deref(ExprType::Bool)),
            "array<array<bool>>",
        ),
        (
            "object",
            ExprType::strict_object([(
                "foo",
                ExprType::array(ExprType::strict_object([(
                    "bar",
                    ExprType::array(ExprType::String),
                )])),
            )]),
            "{foo: array<{bar: array<string>}>}",
        ),
    ];

    for (what, ty, want) in cases {
        assert_eq!(ty.to_string(), want, "{what}");
    }
}

#[test]
fn test_strict_object_keys_are_sorted() {
    let ty = ExprType::strict_object([
        ("zeta", ExprType::Number),
        ("alpha", ExprType::Bool),
        ("mid", ExprType::Null),
    ]);
    assert_eq!(ty.to_string(), "{alpha: bool, mid: null, zeta: number}");
}

#[test]
fn test_deref_flag_is_not_rendered() {
    assert_eq!(
        ExprType::array(ExprType::Bool).to_string(),
        ExprType::array_deref(ExprType::Bool).to_string()
    );
}

#[test]
fn test_open_object_inside_strict_object() {
    let ty = ExprType::strict_object([
        ("env", ExprType::map_object(ExprType::String)),
        ("job", ExprType::object([("status", ExprType::String)])),
    ]);
    assert_eq!(ty.to_string(), "{env: object, job: object}");
}

#[test]
fn test_render_object_and_array_directly() {
    let obj = ObjectType::strict([("a", ExprType::Any)]);
    assert_eq!(obj.to_string(), "{a: any}");

    let arr = ArrayType::new(ExprType::Number, true);
    assert_eq!(arr.to_string(), "array<number>");
}

#[test]
fn test_render_deeply_nested_array() {
    let mut ty = ExprType::Number;
    for _ in 0..1_000 {
        ty = ExprType::array(ty);
    }
    let rendered = ty.to_string();
    assert!(rendered.starts_with("array<array<"));
    assert!(rendered.contains("number"));
    assert_eq!(rendered.matches('>').count(), 1_000);
}
