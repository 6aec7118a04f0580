use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use nivaran_atoms::cases::{BaseCaseStore, Case, CaseStatus};
use nivaran_atoms::ngos::{BaseNgoStore, Ngo};
use nivaran_atoms::{RescueError, Result};
use std::collections::HashMap;

pub type Item = HashMap<String, AttributeValue>;

/// Cases table: one item per case, partition key `case_id`.
#[derive(Clone)]
pub struct DynamoCaseStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoCaseStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl BaseCaseStore for DynamoCaseStore {
    async fn put_case(&self, case: &Case) -> Result<()> {
        // Cases are written once; never clobber an existing id
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(case_to_item(case)))
            .condition_expression("attribute_not_exists(case_id)")
            .send()
            .await
            .map_err(|e| {
                RescueError::collaborator(format!("DynamoDB put_item error: {}", DisplayErrorContext(&e)))
            })?;

        Ok(())
    }

    async fn scan_cases(&self) -> Result<Vec<Case>> {
        let mut cases = Vec::new();
        let mut start_key: Option<Item> = None;
        let mut pages = 0;

        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    RescueError::collaborator(format!("DynamoDB scan error: {}", DisplayErrorContext(&e)))
                })?;
            pages += 1;

            for item in result.items() {
                match case_from_item(item) {
                    Ok(case) => cases.push(case),
                    Err(e) => tracing::warn!("⚠️ Skipping unreadable case item: {}", e),
                }
            }

            match result.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!("Scanned {} cases in {} page(s) from {}", cases.len(), pages, self.table_name);
        Ok(cases)
    }
}

/// NGOs table: partition key `ngo_id`. Maintained by the registration flow.
#[derive(Clone)]
pub struct DynamoNgoStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoNgoStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl BaseNgoStore for DynamoNgoStore {
    async fn get_ngo(&self, ngo_id: &str) -> Result<Option<Ngo>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("ngo_id", AttributeValue::S(ngo_id.to_string()))
            .send()
            .await
            .map_err(|e| {
                RescueError::collaborator(format!("DynamoDB get_item error: {}", DisplayErrorContext(&e)))
            })?;

        match result.item() {
            Some(item) => ngo_from_item(ngo_id, item)
                .map(Some)
                .map_err(RescueError::collaborator),
            None => Ok(None),
        }
    }
}

// ========== ITEM MAPPING ==========

pub fn case_to_item(case: &Case) -> Item {
    let mut item = HashMap::new();
    item.insert("case_id".to_string(), AttributeValue::S(case.case_id.clone()));
    item.insert("s3_key".to_string(), AttributeValue::S(case.image_ref.clone()));
    item.insert(
        "labels".to_string(),
        AttributeValue::L(case.labels.iter().cloned().map(AttributeValue::S).collect()),
    );
    item.insert("status".to_string(), AttributeValue::S(case.status.to_string()));
    item.insert("message".to_string(), AttributeValue::S(case.message.clone()));
    item.insert("created_at".to_string(), AttributeValue::S(case.created_at.clone()));

    // Coordinates are only written when the reporter supplied them
    if let Some(latitude) = case.latitude {
        item.insert("latitude".to_string(), AttributeValue::N(latitude.to_string()));
    }
    if let Some(longitude) = case.longitude {
        item.insert("longitude".to_string(), AttributeValue::N(longitude.to_string()));
    }

    item
}

pub fn case_from_item(item: &Item) -> std::result::Result<Case, String> {
    let case_id = string_attr(item, "case_id").ok_or("item has no case_id")?;

    Ok(Case {
        image_ref: string_attr(item, "s3_key").unwrap_or_default(),
        labels: string_list_attr(item, "labels"),
        status: CaseStatus::from(string_attr(item, "status").unwrap_or_default()),
        message: string_attr(item, "message").unwrap_or_default(),
        latitude: number_attr(item, "latitude"),
        longitude: number_attr(item, "longitude"),
        created_at: string_attr(item, "created_at").unwrap_or_default(),
        case_id,
    })
}

pub fn ngo_from_item(ngo_id: &str, item: &Item) -> std::result::Result<Ngo, String> {
    let required = |name: &str| {
        number_attr(item, name)
            .ok_or_else(|| format!("NGO record {} has no numeric {}", ngo_id, name))
    };

    Ok(Ngo {
        ngo_id: string_attr(item, "ngo_id").unwrap_or_else(|| ngo_id.to_string()),
        latitude: required("latitude")?,
        longitude: required("longitude")?,
        service_radius_km: required("service_radius_km")?,
    })
}

fn string_attr(item: &Item, name: &str) -> Option<String> {
    item.get(name).and_then(|v| v.as_s().ok()).map(|s| s.to_string())
}

/// DynamoDB numbers arrive as decimal strings ("12", "27.7172"); both become plain f64.
fn number_attr(item: &Item, name: &str) -> Option<f64> {
    item.get(name)
        .and_then(|v| v.as_n().ok())
        .and_then(|n| n.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Labels are a list of strings; a string set is accepted too.
fn string_list_attr(item: &Item, name: &str) -> Vec<String> {
    match item.get(name) {
        Some(AttributeValue::L(values)) => values
            .iter()
            .filter_map(|v| v.as_s().ok())
            .map(|s| s.to_string())
            .collect(),
        Some(AttributeValue::Ss(values)) => values.clone(),
        _ => vec![],
    }
}
