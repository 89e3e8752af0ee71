use httpmock::prelude::*;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};
use vehicles_api::app::commands::{self, Action};
use vehicles_api::{Settings, VehicleError};

fn settings_for(pricing: &MockServer, maps: &MockServer, temp_dir: &TempDir) -> Settings {
    Settings {
        pricing_endpoint: pricing.base_url(),
        maps_endpoint: maps.base_url(),
        data_file: Some(
            temp_dir
                .path()
                .join("fleet.json")
                .to_str()
                .unwrap()
                .to_string(),
        ),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_save_get_list_delete_through_commands() {
    let temp_dir = TempDir::new().unwrap();
    let pricing = MockServer::start();
    let maps = MockServer::start();
    let settings = settings_for(&pricing, &maps, &temp_dir);

    pricing.mock(|when, then| {
        when.method(GET)
            .path("/services/price")
            .query_param("vehicleId", "1");
        then.status(200)
            .json_body(serde_json::json!({"currency": "USD", "price": "21999.99", "vehicleId": 1}));
    });
    maps.mock(|when, then| {
        when.method(GET).path("/maps");
        then.status(200)
            .json_body(serde_json::json!({"address": "777 Brockton Avenue", "city": "Abington", "state": "MA", "zip": "2351"}));
    });

    let service = assert_ok!(commands::build_service(&settings).await);

    let vehicle = assert_ok!(commands::parse_vehicle(
        r#"{"condition": "USED", "details": {"model": "Impala"}, "location": {"lat": 40.73, "lon": -73.99}}"#
    ));
    let saved = assert_ok!(commands::execute(&service, Action::Save(vehicle)).await);
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved["id"], 1);
    assert_eq!(saved["createdAt"], saved["modifiedAt"]);

    let fetched = assert_ok!(commands::execute(&service, Action::Get(1)).await);
    let fetched: serde_json::Value = serde_json::from_str(&fetched).unwrap();
    assert_eq!(fetched["price"], "21999.99");
    assert_eq!(fetched["location"]["address"], "777 Brockton Avenue");

    let listed = assert_ok!(commands::execute(&service, Action::List).await);
    let listed: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    // Listing never enriches.
    assert!(listed[0].get("price").is_none());

    let deleted = assert_ok!(commands::execute(&service, Action::Delete(1)).await);
    assert_eq!(deleted, "Deleted vehicle 1");

    let err = assert_err!(commands::execute(&service, Action::Delete(1)).await);
    assert!(matches!(err, VehicleError::NotFound { id: Some(1) }));
}

#[tokio::test]
async fn test_data_file_is_shared_between_service_instances() {
    let temp_dir = TempDir::new().unwrap();
    let pricing = MockServer::start();
    let maps = MockServer::start();
    let settings = settings_for(&pricing, &maps, &temp_dir);

    {
        let service = assert_ok!(commands::build_service(&settings).await);
        let vehicle = assert_ok!(commands::parse_vehicle(
            r#"{"location": {"lat": 1.5, "lon": 2.5}}"#
        ));
        assert_ok!(commands::execute(&service, Action::Save(vehicle)).await);
    }

    let service = assert_ok!(commands::build_service(&settings).await);
    let listed = assert_ok!(commands::execute(&service, Action::List).await);
    let listed: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(listed[0]["location"]["lat"], 1.5);
}
