//! Link-entity enrichment against a real database: the bulk (list) path and
//! the single-row (get-by-id) path must agree, unresolved foreign keys fall
//! back to "Unknown", and CHAR padding never leaks into display fields.
//!
//! Requires DATABASE_URL pointing at a Postgres with sql/schema.sql applied;
//! run with `cargo test -- --ignored`.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

const REGION_ID: i64 = 91;
const TERRITORY_ID: &str = "91101";
const ORPHAN_TERRITORY_ID: &str = "91999";

async fn cleanup(client: &reqwest::Client, base_url: &str, employee_id: i64) {
    for url in [
        format!("{}/api/EmployeeTerritory/DeleteEmployeeTerritory/{}/{}", base_url, employee_id, TERRITORY_ID),
        format!("{}/api/EmployeeTerritory/DeleteEmployeeTerritory/{}/{}", base_url, employee_id, ORPHAN_TERRITORY_ID),
        format!("{}/api/Employee/DeleteEmployee/{}", base_url, employee_id),
        format!("{}/api/Territory/DeleteTerritory/{}", base_url, TERRITORY_ID),
        format!("{}/api/Region/DeleteRegion/{}", base_url, REGION_ID),
    ] {
        let _ = client.delete(url).send().await;
    }
}

#[tokio::test]
#[ignore = "requires a Northwind Postgres database"]
async fn employee_territory_enrichment_agrees_across_paths() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Start clean in case an earlier run left fixtures behind
    let _ = client
        .delete(format!("{}/api/Territory/DeleteTerritory/{}", server.base_url, TERRITORY_ID))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/api/Region/DeleteRegion/{}", server.base_url, REGION_ID))
        .send()
        .await;

    // Fixtures: a region, a territory in it, and an employee
    let res = client
        .post(format!("{}/api/Region/AddRegion", server.base_url))
        .json(&json!({ "RegionID": REGION_ID, "RegionDescription": "Testlands" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/Territory/AddTerritory", server.base_url))
        .json(&json!({
            "TerritoryID": TERRITORY_ID,
            "TerritoryDescription": "Springfield",
            "RegionID": REGION_ID
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/Employee/AddEmployee", server.base_url))
        .json(&json!({ "LastName": "Sellers", "FirstName": "Pat" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let employee = res.json::<serde_json::Value>().await?;
    let employee_id = employee["EmployeeID"].as_i64().unwrap();

    // Link them
    let res = client
        .post(format!("{}/api/EmployeeTerritory/AddEmployeeTerritory", server.base_url))
        .json(&json!({ "EmployeeID": employee_id, "TerritoryID": TERRITORY_ID }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Single-row path: display fields resolved, description unpadded despite
    // the CHAR(50) storage
    let res = client
        .get(format!(
            "{}/api/EmployeeTerritory/GetEmployeeTerritoryById/{}/{}",
            server.base_url, employee_id, TERRITORY_ID
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let single = res.json::<serde_json::Value>().await?;
    assert_eq!(single["Employee"], "Pat Sellers");
    assert_eq!(single["Territory"], "Springfield");

    // Bulk path must produce the same display values
    let res = client
        .get(format!("{}/api/EmployeeTerritory/GetAllEmployeeTerritories", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let all = res.json::<serde_json::Value>().await?;
    let listed = all
        .as_array()
        .unwrap()
        .iter()
        .find(|et| et["EmployeeID"] == employee_id && et["TerritoryID"] == TERRITORY_ID)
        .expect("link row missing from list");
    assert_eq!(listed["Employee"], single["Employee"]);
    assert_eq!(listed["Territory"], single["Territory"]);

    // A link whose territory does not exist enriches to the sentinel on both
    // paths (link tables carry no FK constraints)
    let res = client
        .post(format!("{}/api/EmployeeTerritory/AddEmployeeTerritory", server.base_url))
        .json(&json!({ "EmployeeID": employee_id, "TerritoryID": ORPHAN_TERRITORY_ID }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!(
            "{}/api/EmployeeTerritory/GetEmployeeTerritoryById/{}/{}",
            server.base_url, employee_id, ORPHAN_TERRITORY_ID
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let orphan = res.json::<serde_json::Value>().await?;
    assert_eq!(orphan["Employee"], "Pat Sellers");
    assert_eq!(orphan["Territory"], "Unknown");

    let res = client
        .get(format!("{}/api/EmployeeTerritory/GetAllEmployeeTerritories", server.base_url))
        .send()
        .await?;
    let all = res.json::<serde_json::Value>().await?;
    let listed_orphan = all
        .as_array()
        .unwrap()
        .iter()
        .find(|et| et["EmployeeID"] == employee_id && et["TerritoryID"] == ORPHAN_TERRITORY_ID)
        .expect("orphan link missing from list");
    assert_eq!(listed_orphan["Territory"], "Unknown");

    cleanup(&client, &server.base_url, employee_id).await;
    Ok(())
}

#[tokio::test]
#[ignore = "requires a Northwind Postgres database"]
async fn territory_reads_are_trimmed() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let _ = client
        .delete(format!("{}/api/Territory/DeleteTerritory/91501", server.base_url))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/api/Region/DeleteRegion/92", server.base_url))
        .send()
        .await;

    let res = client
        .post(format!("{}/api/Region/AddRegion", server.base_url))
        .json(&json!({ "RegionID": 92, "RegionDescription": "Eastern" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/Territory/AddTerritory", server.base_url))
        .json(&json!({
            "TerritoryID": "91501",
            "TerritoryDescription": "Eastern",
            "RegionID": 92
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // CHAR(50) storage pads the value; both read paths must return it trimmed
    let res = client
        .get(format!("{}/api/Territory/GetTerritoryById/91501", server.base_url))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["TerritoryDescription"], "Eastern");

    let res = client
        .get(format!("{}/api/Territory/GetAllTerritories", server.base_url))
        .send()
        .await?;
    let all = res.json::<serde_json::Value>().await?;
    let listed = all
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["TerritoryID"] == "91501")
        .expect("territory missing from list");
    assert_eq!(listed["TerritoryDescription"], "Eastern");

    let _ = client
        .delete(format!("{}/api/Territory/DeleteTerritory/91501", server.base_url))
        .send()
        .await;
    let _ = client
        .delete(format!("{}/api/Region/DeleteRegion/92", server.base_url))
        .send()
        .await;

    Ok(())
}

#[tokio::test]
#[ignore = "requires a Northwind Postgres database"]
async fn order_detail_enrichment_resolves_order_and_product() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/Product/AddProduct", server.base_url))
        .json(&json!({ "ProductName": "Test Tonic", "UnitPrice": 18.0, "Discontinued": false }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let product_id = res.json::<serde_json::Value>().await?["ProductID"].as_i64().unwrap();

    let res = client
        .post(format!("{}/api/Order/AddOrder", server.base_url))
        .json(&json!({ "ShipName": "Test Shipment" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let order_id = res.json::<serde_json::Value>().await?["OrderID"].as_i64().unwrap();

    let res = client
        .post(format!("{}/api/OrderDetail/AddOrderDetail", server.base_url))
        .json(&json!({
            "OrderID": order_id,
            "ProductID": product_id,
            "UnitPrice": 18.0,
            "Quantity": 3,
            "Discount": 0.0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .get(format!(
            "{}/api/OrderDetail/GetOrderDetailById/{}/{}",
            server.base_url, order_id, product_id
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let detail = res.json::<serde_json::Value>().await?;
    assert_eq!(detail["OrderName"], "Test Shipment");
    assert_eq!(detail["ProductName"], "Test Tonic");
    assert_eq!(detail["Quantity"], 3);

    // Cleanup
    for url in [
        format!("{}/api/OrderDetail/DeleteOrderDetail/{}/{}", server.base_url, order_id, product_id),
        format!("{}/api/Order/DeleteOrder/{}", server.base_url, order_id),
        format!("{}/api/Product/DeleteProduct/{}", server.base_url, product_id),
    ] {
        let res = client.delete(url).send().await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    Ok(())
}
