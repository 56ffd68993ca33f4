//! Tests for Datastream construction

use super::super::datastream::DatastreamBuilder;
use super::*;

#[test]
fn test_every_row_yields_both_channels() {
    let row = create_test_row();
    let datastreams = DatastreamBuilder::new().build(&row);

    assert_eq!(datastreams.len(), 2);
    assert_eq!(datastreams[0].iot_id, "11117-temperature");
    assert_eq!(datastreams[1].iot_id, "11117-humidity");
}

#[test]
fn test_channels_are_built_even_without_readings() {
    let row = StationRow {
        temperature: None,
        relative_humidity: None,
        ..create_test_row()
    };
    let datastreams = DatastreamBuilder::new().build(&row);

    assert_eq!(datastreams.len(), 2);
}

#[test]
fn test_temperature_channel_vocabulary() {
    let row = create_test_row();
    let datastreams = DatastreamBuilder::new().build(&row);
    let temperature = &datastreams[0];

    assert_eq!(temperature.name, "Temperature Datastream for Gurtenpark");
    assert_eq!(temperature.description, "Temperature measurements");
    assert_eq!(temperature.unit_of_measurement.symbol, "°C");
    assert_eq!(temperature.unit_of_measurement.name, "Degree Celsius");
    assert_eq!(temperature.observed_property.name, "Temperature");
    assert_eq!(
        temperature.observed_property.definition,
        "http://sensorthings.org/Temperature"
    );
    assert_eq!(temperature.sensor.name, "Temperature Sensor");
    assert_eq!(temperature.sensor.description, "Measures air temperature");
}

#[test]
fn test_humidity_channel_vocabulary() {
    let row = create_test_row();
    let datastreams = DatastreamBuilder::new().build(&row);
    let humidity = &datastreams[1];

    assert_eq!(humidity.name, "Humidity Datastream for Gurtenpark");
    assert_eq!(humidity.description, "Humidity measurements");
    assert_eq!(humidity.unit_of_measurement.symbol, "%");
    assert_eq!(humidity.unit_of_measurement.name, "Percentage");
    assert_eq!(humidity.observed_property.name, "Humidity");
    assert_eq!(humidity.sensor.name, "Humidity Sensor");
    assert_eq!(humidity.sensor.description, "Measures relative humidity");
}

#[test]
fn test_channels_reference_the_owning_thing() {
    let row = create_test_row();
    let datastreams = DatastreamBuilder::new().build(&row);

    for datastream in &datastreams {
        assert_eq!(datastream.thing.iot_id, StationId::from("11117"));
        assert_eq!(
            datastream.observation_type,
            "http://www.opengis.net/def/observationType/OGC-OM/2.0/OM_Measurement"
        );
    }
}

#[test]
fn test_wire_shape_uses_sensorthings_keys() {
    let row = create_test_row();
    let datastreams = DatastreamBuilder::new().build(&row);

    let value = serde_json::to_value(&datastreams[0]).unwrap();
    assert_eq!(value["@iot.id"], "11117-temperature");
    assert_eq!(value["Thing"]["@iot.id"], "11117");
    assert_eq!(value["ObservedProperty"]["name"], "Temperature");
    assert_eq!(value["Sensor"]["name"], "Temperature Sensor");
    assert_eq!(value["unitOfMeasurement"]["symbol"], "°C");
}
