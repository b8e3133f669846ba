use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use shapegen_core::{
    resolve_types, AppError, Category, Operation, ResolvedTypes, Shape, ShapeRoles, Vocabulary,
};

fn shapes(value: Value) -> IndexMap<String, Shape> {
    serde_json::from_value(value).unwrap()
}

fn resolve(value: Value, roles: &ShapeRoles) -> Result<ResolvedTypes, AppError> {
    resolve_types(shapes(value), roles, &Vocabulary::default())
}

#[test]
fn test_boolean_scenario() {
    let resolved = resolve(json!({ "Active": { "type": "boolean" } }), &ShapeRoles::default())
        .unwrap();

    let active = &resolved.types()[0];
    assert_eq!(active.name, "Active");
    assert_eq!(active.type_, "Bool");
    assert_eq!(active.decoder, "JD.bool");
    assert_eq!(active.json_encoder, "JE.bool");
    assert_eq!(active.query_encoder_type, "AWS.Core.Encode.bool");
}

#[test]
fn test_scalars_resolve_identically_twice() {
    let input = json!({
        "Flag": { "type": "boolean" },
        "Ratio": { "type": "float" },
        "Precise": { "type": "double" },
        "Count": { "type": "integer" },
        "Big": { "type": "long" },
        "Name": { "type": "string" },
        "Payload": { "type": "blob" }
    });
    let roles = ShapeRoles::default();

    let first = resolve(input.clone(), &roles).unwrap().into_vec();
    let second = resolve(input, &roles).unwrap().into_vec();
    assert_eq!(first, second);

    let types: Vec<&str> = first.iter().map(|d| d.type_.as_str()).collect();
    assert_eq!(
        types,
        vec!["Bool", "Float", "Float", "Int", "Int", "String", "String"]
    );
    assert_eq!(first[1].decoder, first[2].decoder);
    assert_eq!(first[3].json_encoder, first[4].json_encoder);
    assert_eq!(first[5].query_encoder, first[6].query_encoder);
}

#[test]
fn test_enum_scenario() {
    let resolved = resolve(
        json!({ "Tier": { "type": "string", "enum": ["Gold", "Silver"] } }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let tier = resolved.find_by_type("Tier").unwrap();
    assert_eq!(tier.category, Some(Category::Union));
    assert_eq!(
        tier.enum_variants,
        Some(vec!["Gold".to_string(), "Silver".to_string()])
    );
    assert_eq!(tier.decoder, "tierDecoder");
}

#[test]
fn test_list_of_enum_embeds_enum_codec() {
    let resolved = resolve(
        json!({
            "Tiers": { "type": "list", "member": { "shape": "Tier" } },
            "Tier": { "type": "string", "enum": ["Gold", "Silver"] }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let tier = resolved.find_by_type("Tier").unwrap();
    let tiers = resolved.find_by_type("(List Tier)").unwrap();
    assert_eq!(tiers.decoder, format!("(JD.list {})", tier.decoder));
    assert_eq!(
        tiers.json_encoder,
        format!("(List.map ({})) >> JE.list", tier.json_encoder)
    );
    assert_eq!(tiers.query_encoder_type, tier.query_encoder_type);
}

#[test]
fn test_float_keyed_map_scenario() {
    let resolved = resolve(
        json!({
            "Prices": { "type": "map", "key": { "shape": "Ratio" }, "value": { "shape": "Amount" } },
            "Ratio": { "type": "string", "enum": ["1.0", "2.0"] },
            "Amount": { "type": "integer" }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let prices = &resolved.types()[0];
    assert_eq!(prices.type_, "(Dict Float Int)");
    assert_eq!(prices.decoder, "(JDX.dict2 JD.float JD.int)");
    assert!(prices.category.is_none());
}

#[test]
fn test_string_enum_keyed_map() {
    let resolved = resolve(
        json!({
            "Limits": { "type": "map", "key": { "shape": "Tier" }, "value": { "shape": "Amount" } },
            "Tier": { "type": "string", "enum": ["Gold", "1.0"] },
            "Amount": { "type": "integer" }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let limits = &resolved.types()[0];
    assert_eq!(limits.type_, "(Dict String Int)");
    assert_eq!(
        limits.query_encoder_type,
        "AWS.Core.Enum.toString >> Result.withDefault \"\""
    );
    assert!(limits.extra_imports.contains("import AWS.Core.Enum"));
}

#[test]
fn test_map_with_structure_key_is_rejected() {
    let err = resolve(
        json!({
            "Index": { "type": "map", "key": { "shape": "Point" }, "value": { "shape": "Point" } },
            "Point": { "type": "structure", "members": {} }
        }),
        &ShapeRoles::default(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::UnsupportedMapKeyType { .. }));
}

#[test]
fn test_response_scenario_and_exception_precedence() {
    let operations: IndexMap<String, Operation> = serde_json::from_value(json!({
        "DescribeFoo": {
            "input": { "shape": "DescribeFooRequest" },
            "output": { "shape": "DescribeFooResponse" }
        },
        "Fail": { "output": { "shape": "FooFault" } }
    }))
    .unwrap();
    let roles = ShapeRoles::from_operations(&operations);

    let resolved = resolve(
        json!({
            "DescribeFooRequest": { "type": "structure", "members": {} },
            "DescribeFooResponse": { "type": "structure", "members": {} },
            "FooFault": { "type": "structure", "members": {}, "exception": true },
            "Foo": { "type": "structure", "members": {}, "documentation": "A foo" }
        }),
        &roles,
    )
    .unwrap();

    let categories: Vec<Option<Category>> = resolved.iter().map(|d| d.category).collect();
    assert_eq!(
        categories,
        vec![
            Some(Category::Request),
            Some(Category::Response),
            Some(Category::Exception),
            Some(Category::Record),
        ]
    );

    let response = resolved.find_by_type("DescribeFooResponse").unwrap();
    assert_eq!(
        response.doc.as_deref(),
        Some("Type of HTTP response from describeFoo")
    );
    assert_eq!(
        resolved.find_by_type("Foo").unwrap().doc.as_deref(),
        Some("A foo")
    );
}

#[test]
fn test_member_decode_keys() {
    let resolved = resolve(
        json!({
            "Instance": {
                "type": "structure",
                "members": {
                    "InstanceId": { "shape": "Id" },
                    "state": { "shape": "Id" },
                    "launch_time": { "shape": "When" }
                }
            },
            "Id": { "type": "string" },
            "When": { "type": "timestamp" }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let members = resolved.types()[0].members.as_ref().unwrap();
    for member in members {
        assert!((1..=3).contains(&member.decode_keys.len()));
        assert_eq!(member.decode_keys[0], member.raw_key);
    }
    assert_eq!(members[0].key, "instanceId");
    assert_eq!(members[0].decode_keys, vec!["InstanceId", "instanceId"]);
    assert_eq!(members[2].value.type_, "Date");
}

#[test]
fn test_unknown_member_reference_aborts_run() {
    let result = resolve(
        json!({
            "Good": { "type": "boolean" },
            "Broken": {
                "type": "structure",
                "members": { "Ghost": { "shape": "DoesNotExist" } }
            }
        }),
        &ShapeRoles::default(),
    );

    match result {
        Err(AppError::UnknownShapeReference { name }) => assert_eq!(name, "DoesNotExist"),
        Err(other) => panic!("Expected UnknownShapeReference, got {other}"),
        Ok(_) => panic!("Resolution should fail"),
    }
}

#[test]
fn test_mutually_recursive_structures() {
    let resolved = resolve(
        json!({
            "Folder": {
                "type": "structure",
                "members": { "Files": { "shape": "FileList" } }
            },
            "FileList": { "type": "list", "member": { "shape": "File" } },
            "File": {
                "type": "structure",
                "members": { "Parent": { "shape": "Folder" } }
            }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    assert_eq!(resolved.len(), 3);
    let file = resolved.find_by_type("File").unwrap();
    let parent = &file.members.as_ref().unwrap()[0].value;
    assert_eq!(parent.type_, "Folder");
    assert_eq!(parent.decoder, "folderDecoder");
    assert_eq!(parent, &{
        let mut folder = resolved.find_by_type("Folder").unwrap().clone();
        folder.members = None;
        folder
    });
}

#[test]
fn test_custom_vocabulary() {
    let vocab: Vocabulary = serde_json::from_value(json!({
        "jsonDecode": "Decode",
        "jsonEncode": "Encode",
        "coreModule": "Runtime"
    }))
    .unwrap();

    let resolved = resolve_types(
        shapes(json!({ "Ids": { "type": "list", "member": { "shape": "Id" } }, "Id": { "type": "long" } })),
        &ShapeRoles::default(),
        &vocab,
    )
    .unwrap();

    let ids = &resolved.types()[0];
    assert_eq!(ids.decoder, "(Decode.list Decode.int)");
    assert_eq!(
        ids.render_query_encoder("Ids"),
        "Runtime.Encode.addListToQueryArgs False (Runtime.Encode.addOneToQueryArgs toString \"\") \"Ids\""
    );
}

#[test]
fn test_descriptors_serialize_for_renderer() {
    let resolved = resolve(
        json!({ "Tier": { "type": "string", "enum": ["Gold"] } }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let value = serde_json::to_value(&resolved.types()[0]).unwrap();
    assert_eq!(value["name"], json!("Tier"));
    assert_eq!(value["category"], json!("union"));
    assert_eq!(value["enum"], json!(["Gold"]));
    assert_eq!(value["extraImports"], json!(["import AWS.Core.Enum"]));
}

#[test]
fn test_type_names_are_safe_identifiers() {
    let resolved = resolve(
        json!({
            "2xlarge": { "type": "string", "enum": ["a", "b"] },
            "Sizes": { "type": "list", "member": { "shape": "2xlarge" } }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let size = &resolved.types()[0];
    assert_eq!(size.name, "V2xlarge");
    assert_eq!(size.type_, "V2xlarge");
    assert_eq!(size.decoder, "v2xlargeDecoder");
    assert_eq!(resolved.types()[1].type_, "(List V2xlarge)");
}

#[test]
fn test_acronyms_survive_casing() {
    let operations: IndexMap<String, Operation> = serde_json::from_value(json!({
        "DescribeDBInstances": { "output": { "shape": "DescribeDBInstancesResponse" } }
    }))
    .unwrap();

    let resolved = resolve(
        json!({
            "DescribeDBInstancesResponse": {
                "type": "structure",
                "members": { "DBInstanceIdentifier": { "shape": "Id" } }
            },
            "Id": { "type": "string" }
        }),
        &ShapeRoles::from_operations(&operations),
    )
    .unwrap();

    let response = resolved.find_by_type("DescribeDBInstancesResponse").unwrap();
    assert_eq!(response.category, Some(Category::Response));
    assert_eq!(response.decoder, "describeDBInstancesResponseDecoder");
    assert_eq!(
        response.doc.as_deref(),
        Some("Type of HTTP response from describeDBInstances")
    );

    let member = &response.members.as_ref().unwrap()[0];
    assert_eq!(member.key, "dBInstanceIdentifier");
    assert_eq!(
        member.decode_keys,
        vec!["DBInstanceIdentifier", "dBInstanceIdentifier"]
    );
}

#[test]
fn test_names_differing_only_in_case_style_both_resolve() {
    let resolved = resolve(
        json!({
            "foo_bar": { "type": "boolean" },
            "FooBar": { "type": "integer" }
        }),
        &ShapeRoles::default(),
    )
    .unwrap();

    let names: Vec<&str> = resolved.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["FooBar", "FooBar2"]);
}
