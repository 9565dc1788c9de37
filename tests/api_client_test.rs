use anyhow::Result;
use drone_fleet_admin::core::ResourceKind;
use drone_fleet_admin::domain::model::{
    Cyclus, CyclusInput, Drone, DroneInput, DroneStatus, Event, EventInput, VluchtCyclus,
    VluchtCyclusInput, VluchtCyclusStatus, Zone,
};
use drone_fleet_admin::{ApiClient, FleetError, FleetSettings};
use httpmock::prelude::*;
use serde_json::json;

fn client_for(server: &MockServer) -> ApiClient<FleetSettings> {
    ApiClient::new(FleetSettings::new(server.url("/api"))).unwrap()
}

/// 列表回傳時兩種 id 寫法都能解析
#[tokio::test]
async fn test_list_drones() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/drones")
            .header("Accept", "application/json")
            .header("Cache-Control", "no-store");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"Id": 1, "status": "AVAILABLE", "batterij": 95, "magOpstijgen": true},
                {"id": 2, "status": "IN_USE", "batterij": 40, "magOpstijgen": false}
            ]));
    });

    let drones: Vec<Drone> = client_for(&server).list().await?;

    mock.assert();
    assert_eq!(drones.len(), 2);
    assert_eq!(drones[0].status, DroneStatus::Available);
    assert_eq!(drones[1].id, 2);
    Ok(())
}

#[tokio::test]
async fn test_list_zones_with_event_filter() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/zones")
            .query_param("event_id", "3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([
                {"Id": 7, "naam": "Noord", "breedte": 10.0, "lengte": 20.0, "EvenementId": 3}
            ]));
    });

    let zones: Vec<Zone> = client_for(&server)
        .list_filtered(&[("event_id", "3".to_string())])
        .await?;

    mock.assert();
    assert_eq!(zones[0].evenement_id, Some(3));
    Ok(())
}

#[tokio::test]
async fn test_list_rejects_non_json_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/events");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html>login</html>");
    });

    let result = client_for(&server).list::<Event>().await;
    assert!(matches!(
        result,
        Err(FleetError::UnexpectedContentType { .. })
    ));
}

#[tokio::test]
async fn test_list_failure_uses_status_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/drones");
        then.status(500).body("boom");
    });

    let err = client_for(&server).list::<Drone>().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch drones (500)");
    assert!(matches!(err, FleetError::ApiError { status: 500, .. }));
}

#[tokio::test]
async fn test_create_drone_posts_form() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/drones")
            .json_body(json!({"status": "AVAILABLE", "batterij": 80, "magOpstijgen": true}));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({"Id": 11, "status": "AVAILABLE", "batterij": 80, "magOpstijgen": true}));
    });

    let input = DroneInput {
        status: DroneStatus::Available,
        batterij: 80,
        mag_opstijgen: true,
    };
    let created: Drone = client_for(&server).create(&input).await?;

    mock.assert();
    assert_eq!(created.id, 11);
    Ok(())
}

/// 驗證失敗時不應送出請求
#[tokio::test]
async fn test_invalid_form_is_not_sent() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/drones");
        then.status(201);
    });

    let input = DroneInput {
        status: DroneStatus::Offline,
        batterij: 120,
        mag_opstijgen: false,
    };
    let err = client_for(&server)
        .create::<Drone>(&input)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "batterij must be between 0 and 100");
    assert_eq!(mock.hits(), 0);

    let input = VluchtCyclusInput {
        drone_id: Some(1),
        plaats_id: None,
        zone_id: None,
    };
    let err = client_for(&server)
        .create::<VluchtCyclus>(&input)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Drone and location are required");
}

#[tokio::test]
async fn test_create_event_sends_normalized_times() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/events").json_body(json!({
            "Naam": "Airshow",
            "StartDatum": "2025-06-01",
            "EindDatum": "2025-06-01",
            "StartTijd": "09:30:00",
            "Tijdsduur": "02:00:00"
        }));
        then.status(201)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "Id": 4,
                "Naam": "Airshow",
                "StartDatum": "2025-06-01",
                "EindDatum": "2025-06-01",
                "StartTijd": "09:30:00",
                "Tijdsduur": "02:00:00"
            }));
    });

    let input = EventInput {
        naam: "  Airshow ".to_string(),
        start_datum: "2025-06-01".to_string(),
        eind_datum: "2025-06-01".to_string(),
        start_tijd: "09:30".to_string(),
        tijdsduur: "02:00".to_string(),
    };
    let event: Event = client_for(&server).create(&input).await?;

    mock.assert();
    assert_eq!(event.id, 4);
    Ok(())
}

#[tokio::test]
async fn test_update_cyclus_puts_full_form() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT).path("/api/cycli/5").json_body(json!({
            "startuur": "10:00:00",
            "tijdstip": "10:45:00",
            "vluchtcyclus_id": 2
        }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"Id": 5, "startuur": "10:00:00", "tijdstip": "10:45:00", "VluchtCyclusId": 2}));
    });

    let input = CyclusInput {
        startuur: "10:00".to_string(),
        tijdstip: "10:45".to_string(),
        vlucht_cyclus_id: Some(2),
    };
    let cyclus: Cyclus = client_for(&server).update(5, &input).await?;

    mock.assert();
    assert_eq!(cyclus.vlucht_cyclus_id, Some(2));
    Ok(())
}

#[tokio::test]
async fn test_get_missing_record_is_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/drones/42");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(json!({"error": "Drone not found"}));
    });

    let err = client_for(&server).get::<Drone>(42).await.unwrap_err();
    assert_eq!(err.to_string(), "drone 42 not found");
}

#[tokio::test]
async fn test_delete_and_conflict() -> Result<()> {
    let server = MockServer::start();
    let ok = server.mock(|when, then| {
        when.method(DELETE).path("/api/zones/3");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "Zone deleted successfully"}));
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/vlucht-cycli/9");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(json!({"error": "Cannot delete flight cycle in progress"}));
    });

    let client = client_for(&server);
    client.delete::<Zone>(3).await?;
    ok.assert();

    let err = client.delete::<VluchtCyclus>(9).await.unwrap_err();
    assert!(matches!(err, FleetError::Conflict { .. }));
    assert_eq!(
        err.to_string(),
        "Cannot delete a vlucht cyclus that is in progress."
    );
    Ok(())
}

/// 204 沒有 body 也沒有 Content-Type，刪除仍算成功
#[tokio::test]
async fn test_delete_with_no_content() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(DELETE).path("/api/drones/5");
        then.status(204);
    });

    client_for(&server).delete::<Drone>(5).await?;

    mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_vlucht_cyclus_sub_routes() -> Result<()> {
    let server = MockServer::start();
    let status = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/vlucht-cycli/4/status")
            .json_body(json!({"status": "COMPLETED"}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "ok"}));
    });
    let attach = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/vlucht-cycli/4/verslag")
            .json_body(json!({"verslagId": 12}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({"message": "ok"}));
    });

    let client = client_for(&server);
    client
        .update_vlucht_cyclus_status(4, &VluchtCyclusStatus::Completed)
        .await?;
    client.attach_verslag(4, 12).await?;

    status.assert();
    attach.assert();

    let err = client
        .update_vlucht_cyclus_status(4, &VluchtCyclusStatus::Unknown("FLYING".to_string()))
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::ValidationError { .. }));
    assert_eq!(status.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn test_endpoint_override() -> Result<()> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/docking-cyclus");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!([]));
    });

    let settings = FleetSettings::new(server.url("/api"))
        .with_endpoint(ResourceKind::DockingCyclus, "docking-cyclus");
    let client = ApiClient::new(settings)?;
    let items: Vec<drone_fleet_admin::domain::model::DockingCyclus> = client.list().await?;

    mock.assert();
    assert!(items.is_empty());
    Ok(())
}
