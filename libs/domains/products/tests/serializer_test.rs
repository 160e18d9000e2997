use domain_products::InfoProductDto;
use serializer::{Introspect, XmlSerializer};
use uuid::Uuid;

fn fixture() -> InfoProductDto {
    InfoProductDto {
        id: "c249fc5b-4a25-4212-83ca-2c6ec0d57d0b".parse::<Uuid>().unwrap(),
        name: "ProductName".to_string(),
        price: 100.0,
        weight: 50.0,
    }
}

/// Whitespace-insensitive comparison: layouts differ, content must not.
fn normalize(xml: &str) -> String {
    xml.split_whitespace().collect()
}

#[test]
fn product_renders_to_the_expected_xml() {
    let xml = XmlSerializer::new().serialize(&fixture()).unwrap();

    let expected = r#"
        <InfoProductDto>
            <id>c249fc5b-4a25-4212-83ca-2c6ec0d57d0b</id>
            <name>ProductName</name>
            <price>100.0</price>
            <weight>50.0</weight>
        </InfoProductDto>
    "#;

    assert_eq!(normalize(&xml), normalize(expected));
}

#[test]
fn introspection_lists_fields_in_declaration_order() {
    let fields = fixture().fields();
    let names: Vec<_> = fields.iter().map(|f| f.name).collect();

    assert_eq!(InfoProductDto::type_name(), "InfoProductDto");
    assert_eq!(names, ["id", "name", "price", "weight"]);
    assert_eq!(fields[2].value, "100.0");
    assert_eq!(fields[3].value, "50.0");
}
