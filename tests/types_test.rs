//! Type deserialization tests
//!
//! Tests that verify SmartZone API records decode the shapes the controller returns,
//! including missing fields and loosely typed values.

use serde_json::json;
use smartzone_exporter::smartzone::types::*;
use smartzone_exporter::smartzone::QueryMode;

#[test]
fn test_ap_record_deserialize() {
    // Given: A query/ap list entry
    let value = json!({
        "apMac": "AA:BB:CC:00:00:01",
        "deviceName": "ap-lobby",
        "zoneName": "Campus",
        "apGroupName": "default",
        "model": "R750",
        "status": "Online",
        "alerts": 2,
        "latency24G": 12.5,
        "latency50G": "8",
        "numClients24G": 4,
        "numClients5G": 10,
        "deviceGps": "1.0,2.0"
    });

    // When: Deserializing
    let ap: ApRecord = serde_json::from_value(value).unwrap();

    // Then: Fields are mapped, numeric strings accepted, missing fields absent
    assert_eq!(ap.device_name.as_deref(), Some("ap-lobby"));
    assert_eq!(ap.alerts, Some(2.0));
    assert_eq!(ap.latency_24g, Some(12.5));
    assert_eq!(ap.latency_5g, Some(8.0));
    assert_eq!(ap.latency_6g, None);
    assert_eq!(ap.num_clients_6g, None);
    assert_eq!(ap.status(), ApStatus::Online);
}

#[test]
fn test_null_and_unparseable_numbers_are_absent() {
    let ap: ApRecord = serde_json::from_value(json!({
        "alerts": null,
        "latency24G": "n/a",
        "numClients5G": [1, 2]
    }))
    .unwrap();

    assert_eq!(ap.alerts, None);
    assert_eq!(ap.latency_24g, None);
    assert_eq!(ap.num_clients_5g, None);
}

#[test]
fn test_boolean_counters_decode_as_zero_or_one() {
    // Given: A WLAN whose counters arrive as booleans
    let wlan: WlanRecord = serde_json::from_value(json!({
        "name": "guest",
        "ssid": "Guest",
        "alerts": true,
        "clients": false
    }))
    .unwrap();

    // Then: true is 1, false is 0
    assert_eq!(wlan.alerts, Some(1.0));
    assert_eq!(wlan.clients, Some(0.0));
}

#[test]
fn test_numeric_identifiers_decode_as_text() {
    let zone: ZoneRecord = serde_json::from_value(json!({
        "zoneId": 42,
        "zoneName": "Campus",
        "totalAPs": 3
    }))
    .unwrap();

    assert_eq!(zone.zone_id.as_deref(), Some("42"));
    assert_eq!(zone.total_aps, Some(3.0));
    assert_eq!(zone.clients, None);
}

#[test]
fn test_numeric_label_text_decodes_as_text() {
    // Given: An AP whose name, zone and model the controller sent as numbers
    let ap: ApRecord = serde_json::from_value(json!({
        "apMac": "AA:BB:CC:00:00:01",
        "deviceName": 42,
        "zoneName": 7,
        "apGroupName": null,
        "model": 750,
        "status": "Online"
    }))
    .unwrap();

    // Then: They decode as their textual form, null stays absent
    assert_eq!(ap.device_name.as_deref(), Some("42"));
    assert_eq!(ap.zone_name.as_deref(), Some("7"));
    assert_eq!(ap.model.as_deref(), Some("750"));
    assert_eq!(ap.ap_group_name, None);

    let wlan: WlanRecord =
        serde_json::from_value(json!({ "zoneName": 2024, "name": "guest", "ssid": 1234 }))
            .unwrap();
    assert_eq!(wlan.zone_name.as_deref(), Some("2024"));
    assert_eq!(wlan.ssid.as_deref(), Some("1234"));

    let controller: ControllerRecord =
        serde_json::from_value(json!({ "id": "c1", "hostName": 1, "serialNumber": 99 }))
            .unwrap();
    assert_eq!(controller.host_name.as_deref(), Some("1"));
    assert_eq!(controller.serial_number.as_deref(), Some("99"));
}

#[test]
fn test_gps_with_two_parts_is_available() {
    let gps = GpsCoordinate::parse(Some("45.5, -73.6"));

    assert_eq!(gps.labels(), ("45.5", "-73.6"));
}

#[test]
fn test_gps_placeholder_for_malformed_values() {
    // Given: Missing, empty, single-part, three-part and half-empty values
    let inputs = [None, Some(""), Some("45.5"), Some("1,2,3"), Some("45.5,"), Some(",1")];

    for input in inputs {
        // Then: Both coordinates use the placeholder
        assert_eq!(
            GpsCoordinate::parse(input),
            GpsCoordinate::Unavailable,
            "input {:?}",
            input
        );
        assert_eq!(GpsCoordinate::parse(input).labels(), ("none", "none"));
    }
}

#[test]
fn test_ap_status_parse() {
    assert_eq!(ApStatus::parse(Some("Offline")), ApStatus::Offline);
    assert_eq!(ApStatus::parse(Some("Flagged")), ApStatus::Flagged);
    assert_eq!(
        ApStatus::parse(Some("Provisioning")),
        ApStatus::Other("Provisioning".to_string())
    );
    assert!(!ApStatus::INDICATORS.contains(&ApStatus::parse(None)));
}

#[test]
fn test_schedule_kind_from_type() {
    let always_on = ScheduleRef {
        schedule_type: Some("AlwaysOn".to_string()),
        ..Default::default()
    };
    let custom = ScheduleRef {
        schedule_type: Some("Customized".to_string()),
        id: Some("sched-1".to_string()),
        ..Default::default()
    };

    assert_eq!(always_on.kind(), ScheduleKind::AlwaysOn);
    assert_eq!(always_on.custom_schedule_id(), None);
    assert_eq!(custom.kind(), ScheduleKind::Custom);
    assert_eq!(custom.custom_schedule_id(), Some("sched-1"));
}

#[test]
fn test_schedule_id_sentinels_are_absent() {
    // Given: Custom schedules whose id is missing, empty or the "none" sentinel
    for id in [None, Some(""), Some("none"), Some("None"), Some("  ")] {
        let schedule = ScheduleRef {
            schedule_type: Some("Customized".to_string()),
            id: id.map(str::to_string),
            name: None,
        };

        // Then: No schedule record should be fetched
        assert_eq!(schedule.custom_schedule_id(), None, "id {:?}", id);
    }
}

#[test]
fn test_wlan_detail_deserialize() {
    let detail: WlanDetailRecord = serde_json::from_value(json!({
        "id": "wlan-1",
        "encryption": { "method": "WPA2", "passphrase": "hunter2", "algorithm": "AES" },
        "schedule": { "type": "Customized", "id": "sched-1", "name": "Office hours" }
    }))
    .unwrap();

    let encryption = detail.encryption.unwrap();
    assert_eq!(encryption.wpa2_passphrase(), Some("hunter2"));
    assert_eq!(
        detail.schedule.unwrap().custom_schedule_id(),
        Some("sched-1")
    );
}

#[test]
fn test_non_wpa2_has_no_passphrase() {
    let open = Encryption {
        method: Some("None".to_string()),
        passphrase: None,
    };
    let wpa3 = Encryption {
        method: Some("WPA3".to_string()),
        passphrase: Some("secret".to_string()),
    };

    assert_eq!(open.wpa2_passphrase(), None);
    assert_eq!(wpa3.wpa2_passphrase(), None);
}

#[test]
fn test_schedule_record_days_order() {
    let schedule: ScheduleRecord = serde_json::from_value(json!({
        "name": "Office hours",
        "sun": [],
        "mon": ["08:00-12:00", "13:00-18:00"],
        "sat": ["09:00-12:00"]
    }))
    .unwrap();

    let days = schedule.days();
    assert!(days[0].is_empty());
    assert_eq!(days[1].len(), 2);
    assert!(days[2].is_empty());
    assert_eq!(days[6], ["09:00-12:00".to_string()]);
}

#[test]
fn test_list_response_truncation() {
    // Given: A listing that reports more entries than it returned
    let truncated: ListResponse<ZoneRecord> = serde_json::from_value(json!({
        "totalCount": 3,
        "hasMore": false,
        "list": [{}, {}]
    }))
    .unwrap();
    let complete: ListResponse<ZoneRecord> = serde_json::from_value(json!({
        "totalCount": 2,
        "list": [{}, {}]
    }))
    .unwrap();
    let more: ListResponse<ZoneRecord> =
        serde_json::from_value(json!({ "hasMore": true, "list": [] })).unwrap();

    assert!(truncated.is_truncated());
    assert!(!complete.is_truncated());
    assert!(more.is_truncated());
}

#[test]
fn test_list_response_without_list_is_empty() {
    let response: ListResponse<ApRecord> = serde_json::from_value(json!({})).unwrap();

    assert!(response.list.is_empty());
}

#[test]
fn test_api_info_supports_version() {
    let info: ApiInfo = serde_json::from_value(json!({
        "apiSupportVersions": ["v9_1_0.0.0", "v11_1_0.0.0"]
    }))
    .unwrap();

    assert!(info.supports("v11_1"));
    assert!(!info.supports("v12_0"));
}

#[test]
fn test_query_mode_for_path() {
    assert_eq!(QueryMode::for_path("query/ap"), QueryMode::Paginated);
    assert_eq!(QueryMode::for_path("query/wlan"), QueryMode::Paginated);
    assert_eq!(QueryMode::for_path("controller"), QueryMode::Plain);
    assert_eq!(QueryMode::for_path("system/inventory"), QueryMode::Plain);
}

#[test]
fn test_page_request_shape() {
    let body = serde_json::to_value(PageRequest {
        page: 1,
        limit: 1000,
    })
    .unwrap();

    assert_eq!(body, json!({ "page": 1, "limit": 1000 }));
}
