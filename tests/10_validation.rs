//! Surface-level checks that run without a database: validation failures are
//! rejected at the boundary, before any repository call is made.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn root_describes_the_service() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["name"], "Northwind API");
    assert!(body["entities"].is_array());

    Ok(())
}

#[tokio::test]
async fn category_name_over_limit_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/Category/AddCategory", server.base_url))
        .json(&json!({ "CategoryName": "Confections Plus" })) // 16 chars
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["field_errors"]["CategoryName"]
        .as_str()
        .unwrap()
        .contains("15"));

    Ok(())
}

#[tokio::test]
async fn employee_birth_after_hire_is_rejected_before_any_db_call() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // This environment has no database; a 400 here proves the request never
    // reached the repository (a pass-through would have produced a 5xx).
    let res = client
        .put(format!("{}/api/Employee/EditEmployee", server.base_url))
        .json(&json!({
            "EmployeeID": 1,
            "LastName": "Davolio",
            "FirstName": "Nancy",
            "BirthDate": "1995-05-01T00:00:00",
            "HireDate": "1992-05-01T00:00:00"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body["field_errors"]["BirthDate"],
        "Birth date cannot be greater than hire date"
    );

    Ok(())
}

#[tokio::test]
async fn lowercase_customer_id_is_rejected() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/Customer/AddCustomer", server.base_url))
        .json(&json!({ "CustomerID": "alfki", "CompanyName": "Alfreds Futterkiste" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"]["CustomerID"]
        .as_str()
        .unwrap()
        .contains("uppercase"));

    Ok(())
}

#[tokio::test]
async fn non_numeric_key_in_path_is_a_bad_request() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/Region/GetRegionById/abc", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
