// Tests for the serde feature: LuaData <-> serde_json::Value
use serde_json::json;

use crate::lua_data::{LuaData, LuaTable};
use crate::serde::{json_string_to_lua, json_to_lua, lua_to_json, lua_to_json_string};

#[test]
fn test_json_string_to_lua() {
    let value = json_string_to_lua(r#"{"a": 1, "b": [true, null], "c": 1.5}"#).unwrap();

    let expected = LuaData::Table(LuaTable::from([
        (LuaData::from("a"), LuaData::Int32(1)),
        (
            LuaData::from("b"),
            LuaData::Table(LuaTable::from([
                (LuaData::Int32(0), LuaData::Boolean(true)),
                (LuaData::Int32(1), LuaData::Nil),
            ])),
        ),
        (LuaData::from("c"), LuaData::Number(1.5)),
    ]));
    assert_eq!(value, expected);
}

#[test]
fn test_integer_width_selection() {
    assert_eq!(json_to_lua(&json!(7)).unwrap(), LuaData::Int32(7));
    assert_eq!(
        json_to_lua(&json!(i64::from(i32::MAX) + 1)).unwrap(),
        LuaData::Number((i64::from(i32::MAX) + 1) as f32)
    );
}

#[test]
fn test_sequential_int_keys_become_an_array() {
    let table = LuaTable::from([
        (LuaData::Int32(0), LuaData::from("x")),
        (LuaData::Int32(1), LuaData::from("y")),
    ]);
    assert_eq!(lua_to_json(&LuaData::Table(table)).unwrap(), json!(["x", "y"]));

    // A gap breaks the array shape: keys render as object keys instead
    let table = LuaTable::from([(LuaData::Int32(1), LuaData::from("x"))]);
    assert_eq!(
        lua_to_json(&LuaData::Table(table)).unwrap(),
        json!({"1": "x"})
    );
}

#[test]
fn test_raw_json_passes_through_as_structure() {
    let value = LuaData::json(r#"{ "k": [1, 2] }"#);
    assert_eq!(lua_to_json(&value).unwrap(), json!({"k": [1, 2]}));
}

#[test]
fn test_json_round_trip() {
    let source = json!({
        "name": "demo",
        "flags": [true, false],
        "count": 3,
        "ratio": 0.5,
        "nothing": null,
    });

    let lua = json_to_lua(&source).unwrap();
    assert_eq!(lua_to_json(&lua).unwrap(), source);
}

#[test]
fn test_unrepresentable_values_fail() {
    assert!(lua_to_json(&LuaData::Userdata(1)).is_err());
    assert!(lua_to_json(&LuaData::Unknown).is_err());
    assert!(lua_to_json(&LuaData::String(vec![0xff])).is_err());
    assert!(lua_to_json(&LuaData::json("not valid json")).is_err());
}

#[test]
fn test_pretty_and_compact_strings() {
    let value = LuaData::Table(LuaTable::from([(
        LuaData::from("k"),
        LuaData::Int32(1),
    )]));

    assert_eq!(lua_to_json_string(&value, false).unwrap(), r#"{"k":1}"#);
    assert!(lua_to_json_string(&value, true).unwrap().contains('\n'));
}
