//! Domain service tests over in-memory repositories

mod common;

use common::{airline, airport, route, seed_cdg, MockStore};
use travel_service::contract::*;
use travel_service::domain::repository::DocumentRepository;

// ===== CRUD =====

#[tokio::test]
async fn create_then_get_returns_equal_document() {
    let store = MockStore::new();
    let service = store.service();

    let doc = airline(10, "40-Mile Air", "United States");
    let created = service.airlines().create(doc.clone()).await.unwrap();
    assert_eq!(created, doc);

    let fetched = service.airlines().get_by_id(10).await.unwrap();
    assert_eq!(fetched, doc);
}

#[tokio::test]
async fn get_missing_document_is_not_found() {
    let store = MockStore::new();
    let service = store.service();

    let err = service.airlines().get_by_id(999_999).await.unwrap_err();
    assert_eq!(err, TravelError::not_found("airline", 999_999));

    let err = service.routes().get_by_id(5).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn update_replaces_all_fields_and_keeps_id() {
    let store = MockStore::new();
    let service = store.service();
    service
        .airports()
        .create(airport(1254, "Calais Dunkerque", "CQF", "France"))
        .await
        .unwrap();

    let update = AirportUpdate {
        airportname: "Calais".to_string(),
        city: "Calais".to_string(),
        country: "France".to_string(),
        faa: "CQF".to_string(),
        icao: "LFAC".to_string(),
        tz: "Europe/Paris".to_string(),
        geo: Geo { alt: 12.0, lat: 50.962097, lon: 1.954764 },
    };
    let updated = service.airports().update_by_id(1254, update).await.unwrap();

    assert_eq!(updated.id, 1254);
    assert_eq!(updated.airportname, "Calais");
    assert_eq!(updated.tz, "Europe/Paris");
    assert_eq!(updated.geo.lat, 50.962097);

    let stored = store.airports.find_by_id(1254).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_missing_document_is_not_found_and_writes_nothing() {
    let store = MockStore::new();
    let service = store.service();

    let err = service
        .routes()
        .update_by_id(77, RouteUpdate::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(store.routes.count(), 0);
}

#[tokio::test]
async fn delete_removes_document_and_second_delete_is_not_found() {
    let store = MockStore::new();
    let service = store.service();
    service.routes().create(route(10000, 137, "TLV", "MRS", 0)).await.unwrap();

    service.routes().delete_by_id(10000).await.unwrap();
    assert!(service.routes().get_by_id(10000).await.unwrap_err().is_not_found());

    let err = service.routes().delete_by_id(10000).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn create_with_existing_id_overwrites() {
    let store = MockStore::new();
    let service = store.service();

    service.airlines().create(airline(1, "First", "France")).await.unwrap();
    service.airlines().create(airline(1, "Second", "France")).await.unwrap();

    assert_eq!(store.airlines.count(), 1);
    assert_eq!(service.airlines().get_by_id(1).await.unwrap().name, "Second");
}

// ===== Listings =====

#[tokio::test]
async fn list_filters_country_case_insensitively() {
    let store = MockStore::new();
    let service = store.service();
    for doc in [
        airline(1, "Air France", "France"),
        airline(2, "Corsair", "france"),
        airline(3, "Delta Air Lines", "United States"),
    ] {
        service.airlines().create(doc).await.unwrap();
    }

    let query = ListQuery::new(Some("FRANCE".to_string()), Page::default());
    let items = service.list_airlines(&query).await.unwrap();

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|a| a.country.eq_ignore_ascii_case("france")));
}

#[tokio::test]
async fn list_is_sorted_by_name_and_bounded_by_limit() {
    let store = MockStore::new();
    let service = store.service();
    for (id, name) in [(1, "Zeta"), (2, "Alpha"), (3, "Mu"), (4, "Beta")] {
        service.airlines().create(airline(id, name, "France")).await.unwrap();
    }

    let items = service
        .list_airlines(&ListQuery::new(None, Page::new(3, 0)))
        .await
        .unwrap();
    let names: Vec<_> = items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Mu"]);

    let items = service
        .list_airlines(&ListQuery::new(None, Page::new(3, 3)))
        .await
        .unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Zeta");
}

#[tokio::test]
async fn airport_list_is_sorted_by_airport_name() {
    let store = MockStore::new();
    let service = store.service();
    service.airports().create(airport(1, "Orly", "ORY", "France")).await.unwrap();
    service.airports().create(airport(2, "Charles De Gaulle", "CDG", "France")).await.unwrap();

    let items = service.list_airports(&ListQuery::default()).await.unwrap();
    assert_eq!(items[0].faa, "CDG");
    assert_eq!(items[1].faa, "ORY");
}

#[tokio::test]
async fn list_with_no_matches_is_not_found() {
    let store = MockStore::new();
    let service = store.service();
    service.airlines().create(airline(1, "Air France", "France")).await.unwrap();

    let query = ListQuery::new(Some("Narnia".to_string()), Page::default());
    assert!(service.list_airlines(&query).await.unwrap_err().is_not_found());

    // offset past the end
    let query = ListQuery::new(None, Page::new(10, 5));
    assert!(service.list_airlines(&query).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn list_on_empty_collection_is_not_found() {
    let store = MockStore::new();
    let service = store.service();

    let err = service.list_airports(&ListQuery::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

// ===== Graph lookups =====

#[tokio::test]
async fn airlines_to_airport_returns_distinct_airlines() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    // second Air France route into JFK must not duplicate the airline
    store.routes.upsert(&route(104, 1, "ORY", "JFK", 0)).await.unwrap();
    let service = store.service();

    let items = service.airlines_to_airport("jfk", Page::default()).await.unwrap();

    let names: Vec<_> = items.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Air France", "Delta Air Lines"]);
}

#[tokio::test]
async fn airlines_to_airport_pages_results() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    let service = store.service();

    let items = service.airlines_to_airport("JFK", Page::new(1, 1)).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Delta Air Lines");
}

#[tokio::test]
async fn airlines_to_unknown_airport_is_not_found() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    let service = store.service();

    let err = service.airlines_to_airport("XXX", Page::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn direct_connections_skip_routes_with_stops() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    let service = store.service();

    let items = service.direct_connections("CDG", Page::default()).await.unwrap();

    let codes: Vec<_> = items.iter().map(|d| d.destinationairport.as_str()).collect();
    assert_eq!(codes, vec!["JFK", "LHR"]);
}

#[tokio::test]
async fn direct_connections_match_source_case_insensitively() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    let service = store.service();

    let items = service.direct_connections("cdg", Page::new(1, 0)).await.unwrap();
    assert_eq!(items, vec![DestinationAirport { destinationairport: "JFK".to_string() }]);
}

#[tokio::test]
async fn direct_connections_from_unserved_airport_is_not_found() {
    let store = MockStore::new();
    seed_cdg(&store).await;
    let service = store.service();

    let err = service.direct_connections("SFO", Page::default()).await.unwrap_err();
    assert!(err.is_not_found());
}

// ===== Store failures =====

#[tokio::test]
async fn store_failure_maps_to_store_failure() {
    let store = MockStore::new();
    let service = store.service();
    store.set_failing(true);

    let err = service.airlines().get_by_id(1).await.unwrap_err();
    assert!(matches!(err, TravelError::StoreFailure { .. }));

    let err = service.list_airlines(&ListQuery::default()).await.unwrap_err();
    assert!(matches!(err, TravelError::StoreFailure { .. }));

    let err = service.direct_connections("CDG", Page::default()).await.unwrap_err();
    match err {
        TravelError::StoreFailure { message } => assert!(message.contains("connection refused")),
        other => panic!("expected StoreFailure, got {other:?}"),
    }
}

#[tokio::test]
async fn native_client_delegates_to_service() {
    use std::sync::Arc;
    use travel_service::api::native::NativeClient;

    let store = MockStore::new();
    let client: Arc<dyn TravelApi> = Arc::new(NativeClient::new(store.service()));

    client.create_airline(airline(5, "Air Austral", "France")).await.unwrap();
    let fetched = client.get_airline(5).await.unwrap();
    assert_eq!(fetched.name, "Air Austral");

    client.delete_airline(5).await.unwrap();
    assert!(client.get_airline(5).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_air_cdg_to_jfk_scenario() {
    let store = MockStore::new();
    let service = store.service();
    service.airlines().create(airline(10, "Test Air", "France")).await.unwrap();
    service.routes().create(route(1, 10, "CDG", "JFK", 0)).await.unwrap();

    let connections = service.direct_connections("CDG", Page::default()).await.unwrap();
    assert_eq!(connections, vec![DestinationAirport { destinationairport: "JFK".to_string() }]);

    let airlines = service.airlines_to_airport("JFK", Page::default()).await.unwrap();
    assert_eq!(airlines.len(), 1);
    assert_eq!(airlines[0].name, "Test Air");
    assert_eq!(airlines[0].country, "France");
}

#[tokio::test]
async fn airlines_to_airport_resolves_document_key_references() {
    let store = MockStore::new();
    store.airlines.upsert(&airline(137, "Air France", "France")).await.unwrap();
    let mut keyed = route(10000, 137, "TLV", "MRS", 0);
    keyed.airlineid = "airline_137".to_string();
    store.routes.upsert(&keyed).await.unwrap();
    let service = store.service();

    let airlines = service.airlines_to_airport("MRS", Page::default()).await.unwrap();
    assert_eq!(airlines.len(), 1);
    assert_eq!(airlines[0].name, "Air France");
}
