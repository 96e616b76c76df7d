// SPDX-License-Identifier: MIT

use dining_gateway::decode;
use dining_gateway::error::AppError;
use dining_gateway::models::DiningLocation;
use serde_json::Value;

const TWO_LOCATION_FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ns:locations xmlns:ns="http://example.edu/dining">
  <ns:location>
    <ns:name>Whitman College</ns:name>
    <ns:mapName>Whitman</ns:mapName>
    <ns:dbid>1</ns:dbid>
    <ns:geoloc lat="40.3449" long="-74.6612"/>
    <ns:building>
      <ns:name>Community Hall</ns:name>
      <ns:location_id>5001</ns:location_id>
    </ns:building>
    <ns:amenities>
      <ns:amenity name="Kosher"/>
      <ns:amenity name="Halal"/>
    </ns:amenities>
  </ns:location>
  <ns:location>
    <ns:name>Forbes College</ns:name>
    <ns:mapName>Forbes</ns:mapName>
    <ns:dbid>2</ns:dbid>
    <ns:geoloc lat="40.3421" long="-74.6654"/>
    <ns:building>
      <ns:name>Forbes Main</ns:name>
      <ns:location_id>5002</ns:location_id>
    </ns:building>
    <ns:amenities>
      <ns:amenity name="Late meal"/>
    </ns:amenities>
  </ns:location>
</ns:locations>
"#;

#[test]
fn test_repeated_children_collapse_to_sequence() {
    let xml = "<menu><item>a</item><item>b</item><item>c</item></menu>";
    let value = decode::xml::decode(xml).unwrap();

    let items = value["menu"]["item"].as_array().expect("sequence expected");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], "a");
    assert_eq!(items[2], "c");
}

#[test]
fn test_single_child_stays_scalar() {
    let xml = "<menu><item>a</item></menu>";
    let value = decode::xml::decode(xml).unwrap();

    assert!(value["menu"]["item"].is_string());
}

#[test]
fn test_namespaced_tags_decode_under_local_name() {
    let xml = r#"<ns:Foo xmlns:ns="http://example.edu/x"><ns:Bar>1</ns:Bar></ns:Foo>"#;
    let value = decode::xml::decode(xml).unwrap();

    assert_eq!(value["Foo"]["Bar"], "1");
    assert!(value.get("ns:Foo").is_none());
}

#[test]
fn test_text_alongside_children_uses_reserved_key() {
    let xml = "<note><to>staff</to>closing early</note>";
    let value = decode::xml::decode(xml).unwrap();

    assert_eq!(value["note"]["to"], "staff");
    assert_eq!(value["note"]["text"], "closing early");
}

#[test]
fn test_malformed_xml_is_decode_error() {
    let err = decode::xml::decode("<locations><location></locations>").unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[test]
fn test_two_location_fixture_end_to_end() {
    let document = decode::xml::decode(TWO_LOCATION_FIXTURE).unwrap();
    let locations = DiningLocation::list_from_document(&document);

    assert_eq!(locations.len(), 2);

    let whitman = &locations[0];
    assert_eq!(whitman.name, "Whitman College");
    assert_eq!(whitman.map_name, "Whitman");
    assert_eq!(whitman.dbid, "1");
    assert_eq!(whitman.geoloc.lat, "40.3449");
    assert_eq!(whitman.building.name, "Community Hall");
    assert_eq!(whitman.amenities, vec!["Kosher", "Halal"]);

    // Second location has a single amenity: the decoder produces an object
    // instead of a list, and normalization still yields a one-entry list.
    let forbes = &locations[1];
    assert_eq!(forbes.name, "Forbes College");
    assert_eq!(forbes.dbid, "2");
    assert_eq!(forbes.amenities, vec!["Late meal"]);
}

#[test]
fn test_missing_location_fields_default_to_empty() {
    let document = decode::xml::decode("<locations><location><name>Annex</name></location></locations>").unwrap();
    let locations = DiningLocation::list_from_document(&document);

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].name, "Annex");
    assert_eq!(locations[0].dbid, "");
    assert_eq!(locations[0].geoloc.lat, "");
    assert!(locations[0].amenities.is_empty());
}

#[test]
fn test_empty_document_yields_no_locations() {
    let document = decode::xml::decode("<locations/>").unwrap();
    assert_eq!(document["locations"], Value::Null);
    assert!(DiningLocation::list_from_document(&document).is_empty());
}
