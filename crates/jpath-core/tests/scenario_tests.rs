/// End-to-end scenarios run against every root type.
///
/// The object scenario builds up and then tears down a mixed tree through
/// string paths, list paths and a custom separator; afterwards the root must
/// be an empty object again. The array scenario does the same for roots that
/// may hold an array at the top level.
use jpath_core::{get, get_or, path, remove, set, Document, JsonRoot, PathSyntax};
use serde_json::{json, Map, Value};

fn object_scenario<R: JsonRoot>(doc: &mut R) {
    // Missing values are absent, not null.
    assert_eq!(get(doc, "nonexistent"), None);
    assert_eq!(get_or(doc, "nonexistent", json!(55)), json!(55));
    assert_eq!(get(doc, &path![""]), None, "empty key is absent at first");

    // Simple attributes in the root.
    set(doc, "name0", "def");
    assert_eq!(get(doc, &path![""]), None);
    set(doc, &path![""], "abc");
    assert_eq!(get(doc, "name0"), Some(json!("def")));
    assert_eq!(get(doc, &path![""]), Some(json!("abc")));

    // Nested attributes.
    set(doc, "name1/name1", 20);
    assert_eq!(get(doc, "name1/name1"), Some(json!(20)));
    assert_eq!(get(doc, "name1"), Some(json!({"name1": 20})));
    assert_eq!(get(doc, "name1/nonexistent"), None);
    assert_eq!(get_or(doc, "name1/nonexistent", json!("66")), json!("66"));

    // List paths allow separators and brackets inside names.
    set(doc, &path!["name2", "name /2", "time [ms]"], "x");
    assert_eq!(
        get_or(doc, &path!["name2", "name /2", "time [ms]"], json!("y")),
        json!("x")
    );
    assert_eq!(get(doc, &path!["name2", "name /2", "nonexistent"]), None);
    assert_eq!(
        get_or(doc, &path!["name2", "name2", "nonexistent"], json!(77)),
        json!(77)
    );
    assert_eq!(
        get(doc, "name2"),
        Some(json!({"name /2": {"time [ms]": "x"}}))
    );

    // Complex values.
    let nested = json!({"name2": {"name2": "x"}});
    set(doc, "name2/name3", nested.clone());
    assert_eq!(get(doc, "name2/name3"), Some(nested.clone()));

    let list = json!([1, 2, 3]);
    set(doc, "name2/name21/name2", list.clone());
    assert_eq!(get_or(doc, "name2/name21/name2", json!("y2")), list);
    assert_eq!(get_or(doc, "name2/name210/name2", nested.clone()), nested);

    // Array indices.
    set(doc, "name3[0]", "xy");
    assert_eq!(get(doc, "name3[0]"), Some(json!("xy")));
    assert_eq!(get(doc, "name3[1]"), None);
    assert_eq!(get_or(doc, "name3[1]", json!("88")), json!("88"));

    set(doc, "name3[2]", "xyz");
    assert_eq!(get(doc, "name3[1]"), Some(Value::Null), "gap filled with null");
    assert_eq!(get(doc, "name3[2]"), Some(json!("xyz")));
    assert_eq!(get(doc, "name3[-1]"), Some(json!("xyz")));

    // In list paths strings are names and integers are indices.
    set(doc, &path!["name3", 1, "name30", "name31"], "asd");
    assert_eq!(get(doc, "name3[1]/name30/name31"), Some(json!("asd")));

    set(doc, "name3[1]/name31[2]/name31", "qqq");
    assert_eq!(get(doc, "name3[1]/name31[2]/name31"), Some(json!("qqq")));

    set(doc, "name3[1]/name32/name31[1]", true);
    assert_eq!(
        get_or(doc, "name3[1]/name32/name31[1]", json!(false)),
        json!(true)
    );

    // Another separator.
    let dotted = PathSyntax::new('.').unwrap();
    assert_eq!(
        get(doc, &dotted.split("name3[1].name31[2].name31")),
        Some(json!("qqq"))
    );
    set(doc, &dotted.split("name3[1].name32.name31[1]"), "sep");
    assert_eq!(
        get_or(doc, &dotted.split("name3[1].name32.name31[1]"), json!(333)),
        json!("sep")
    );

    // Replace a complex entry by null.
    set(doc, "name3[1]", Value::Null);
    assert_eq!(get_or(doc, "name3[1]", json!(false)), Value::Null);

    // Nested arrays.
    set(doc, "name3[3][3]", "qwe");
    assert_eq!(get(doc, "name3[3][3]"), Some(json!("qwe")));
    assert_eq!(get(doc, "name3[-1][-1]"), Some(json!("qwe")));

    // Removal.
    remove(doc, "name3[3][3]");
    assert_eq!(get(doc, "name3[3][3]"), None);

    remove(doc, "name3[3]");
    assert_eq!(get(doc, "name3[3]"), None);

    remove(doc, "name3");
    assert_eq!(get(doc, "name3"), None);

    remove(doc, "name2");
    remove(doc, &path![""]);
    remove(doc, "name1");
    remove(doc, "name0");
    assert_eq!(get(doc, "name2"), None);
    assert_eq!(get(doc, ""), Some(json!({})), "root is an empty object again");
}

fn array_scenario<R: JsonRoot>(arr: &mut R) {
    set(arr, "[1]", "uvw");
    assert_eq!(get_or(arr, "[1]", json!(false)), json!("uvw"));

    set(arr, "[1]/name0/name1", 2.5);
    assert_eq!(get_or(arr, "[1]/name0/name1", json!(false)), json!(2.5));

    remove(arr, "[1]");
    assert_eq!(get(arr, "[1]"), None);
    assert_eq!(get(arr, "[0]"), Some(Value::Null));

    remove(arr, "[0]");
    assert_eq!(get(arr, "[0]"), None);
    assert_eq!(get(arr, ""), Some(json!([])), "root is an empty array again");
}

#[test]
fn generic_value_root() {
    let mut value = Value::Null;
    object_scenario(&mut value);
    assert_eq!(value, json!({}));

    array_scenario(&mut value);
    assert_eq!(value, json!([]));
}

#[test]
fn object_root() {
    let mut map = Map::new();
    object_scenario(&mut map);
    assert!(map.is_empty());
}

#[test]
fn array_root() {
    let mut arr: Vec<Value> = Vec::new();
    array_scenario(&mut arr);
    assert!(arr.is_empty());
}

#[test]
fn document_root() {
    let mut doc = Document::default();
    object_scenario(&mut doc);
    assert_eq!(doc, Document::default());

    array_scenario(&mut doc);
    assert_eq!(doc, Document::Array(Vec::new()));
}
