//! End-to-end tests for a full stock-check run, with `wiremock` standing
//! in for the retailer and a temp directory for the data dir.

use serde_json::{json, Value};
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use psc_core::app_config::AppConfig;
use psc_core::types::StoreStockResult;
use psc_core::Medication;

use super::run_stock_check;

fn config(base_url: &str, data_dir: &std::path::Path) -> AppConfig {
    AppConfig {
        base_url: base_url.to_owned(),
        radius_miles: 50,
        request_timeout_secs: 5,
        user_agent: "psc-test/0.1".to_owned(),
        inter_request_delay_ms: 0,
        stock_batch_size: 10,
        include_trailing_batch: false,
        data_dir: data_dir.to_path_buf(),
        log_level: "info".to_owned(),
    }
}

fn geocoder_json() -> Value {
    json!({"results": [{"geometry": {"location": {"lat": 51.5, "lng": -0.14}}}]})
}

fn store_page_json(offset: u32, size: u32, total: u32) -> Value {
    let results: Vec<Value> = (0..size)
        .map(|i| {
            let id = offset + i + 1;
            json!({
                "Location": {
                    "id": id,
                    "displayname": format!("Store {id}"),
                    "Address": {"postcode": format!("PC{id}")},
                    "contactDetails": {"phone": format!("0114 000 {id:04}")}
                }
            })
        })
        .collect();
    json!({"size": size, "total": total, "results": results})
}

fn stock_body(product_id: &str, store_ids: &[i64]) -> Value {
    json!({"productIdList": [product_id], "storeIdList": store_ids})
}

fn stock_levels_json(store_ids: &[i64], level: &str) -> Value {
    let levels: Vec<Value> = store_ids
        .iter()
        .map(|id| json!({"storeId": id.to_string(), "stockLevel": level}))
        .collect();
    json!({"stockLevels": levels})
}

fn report_files(data_dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(data_dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("stock_"))
                })
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// The headline scenario: 23 stores over three pages, no cache present.
/// The first run geocodes, walks offsets 0/10/20, caches the list, and
/// sweeps two full stock batches. The second, identical run hits the
/// cache — the geocoder and store-search expectations stay at one call
/// each while the stock endpoint is swept again.
#[tokio::test]
async fn second_run_hits_the_store_cache() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let cfg = config(&server.uri(), dir.path());
    let medication = Medication::Lisdexamfetamine30mg;
    let ids: Vec<i64> = (1..=23).collect();

    Mock::given(method("GET"))
        .and(path("/geocoder/postalcode"))
        .and(query_param("postalcode", "SW1A 1AA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&geocoder_json()))
        .expect(1)
        .mount(&server)
        .await;

    for (offset, size) in [(0u32, 10u32), (10, 10), (20, 3)] {
        Mock::given(method("GET"))
            .and(path("/search/store"))
            .and(query_param("from", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(&store_page_json(offset, size, 23)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    // Two full batches per run; ids 21–23 are the truncated tail. Each
    // batch is queried once per run.
    Mock::given(method("POST"))
        .and(path("/itemStock"))
        .and(body_json(stock_body(medication.product_id(), &ids[0..10])))
        .respond_with(ResponseTemplate::new(200).set_body_json(&stock_levels_json(&ids[0..10], "G")))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/itemStock"))
        .and(body_json(stock_body(medication.product_id(), &ids[10..20])))
        .respond_with(ResponseTemplate::new(200).set_body_json(&stock_levels_json(&ids[10..20], "R")))
        .expect(2)
        .mount(&server)
        .await;

    run_stock_check(&cfg, "SW1A 1AA", medication, false)
        .await
        .unwrap();

    let cache_path = dir.path().join("stores_SW1A1AA_50.json");
    assert!(cache_path.exists(), "first run must persist the store cache");

    run_stock_check(&cfg, "SW1A 1AA", medication, false)
        .await
        .unwrap();

    let reports = report_files(dir.path());
    assert!(!reports.is_empty(), "each run writes a report");
    let raw = std::fs::read_to_string(&reports[0]).unwrap();
    let parsed: Vec<StoreStockResult> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed.len(), 20, "20 stores were queried across 2 batches");
    assert_eq!(
        parsed.iter().filter(|r| r.stock_status.is_in_stock()).count(),
        10
    );
}

/// `--refresh` ignores an existing cache and re-enumerates.
#[tokio::test]
async fn refresh_re_enumerates_despite_a_warm_cache() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let cfg = config(&server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/geocoder/postalcode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&geocoder_json()))
        .expect(2)
        .mount(&server)
        .await;

    // Three stores — fewer than one batch, so no stock requests at all.
    Mock::given(method("GET"))
        .and(path("/search/store"))
        .and(query_param("from", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&store_page_json(0, 3, 3)))
        .expect(2)
        .mount(&server)
        .await;

    run_stock_check(&cfg, "S1 2HE", Medication::Lisdexamfetamine20mg, false)
        .await
        .unwrap();
    run_stock_check(&cfg, "S1 2HE", Medication::Lisdexamfetamine20mg, true)
        .await
        .unwrap();
}

/// A geocoding failure is fatal: no cache, no report.
#[tokio::test]
async fn geocode_failure_aborts_with_nothing_written() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let cfg = config(&server.uri(), dir.path());

    Mock::given(method("GET"))
        .and(path("/geocoder/postalcode"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = run_stock_check(&cfg, "SW1A 1AA", Medication::Lisdexamfetamine20mg, false).await;

    assert!(result.is_err(), "geocode failure must abort the run");
    assert!(
        std::fs::read_dir(dir.path()).map(|mut d| d.next().is_none()).unwrap_or(true),
        "nothing may be written on a fatal failure"
    );
}
