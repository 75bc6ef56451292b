use crate::aws::{decode, AwsCli};
use crate::utils::errors::Result;
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const ORIGIN_ID: &str = "Id";
pub const ORIGIN_DOMAIN_NAME: &str = "DomainName";
pub const ORIGIN_PATH: &str = "OriginPath";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDistributionsResponse {
    #[serde(rename = "DistributionList", alias = "Distributionlist", default)]
    pub distribution_list: DistributionList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionList {
    #[serde(rename = "Items", default)]
    pub items: Vec<DistributionRecord>,
}

/// A CloudFront distribution. Only the fields used for summaries are typed;
/// the record serializes back from the mapping it was decoded from, so
/// exports keep every key, including explicit nulls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "OrderMap<String, Value>",
    into = "OrderMap<String, Value>"
)]
pub struct DistributionRecord {
    pub id: Option<String>,
    pub domain_name: Option<String>,
    pub status: Option<String>,
    pub origins: Option<OriginList>,
    pub aliases: Option<AliasList>,
    raw: OrderMap<String, Value>,
}

#[derive(Deserialize)]
struct TypedFields {
    #[serde(rename = "Id", default)]
    id: Option<String>,
    #[serde(rename = "DomainName", default)]
    domain_name: Option<String>,
    #[serde(rename = "Status", default)]
    status: Option<String>,
    #[serde(rename = "Origins", default)]
    origins: Option<OriginList>,
    #[serde(rename = "Aliases", default)]
    aliases: Option<AliasList>,
}

impl TryFrom<OrderMap<String, Value>> for DistributionRecord {
    type Error = serde_json::Error;

    fn try_from(raw: OrderMap<String, Value>) -> std::result::Result<Self, Self::Error> {
        let object = raw
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let fields: TypedFields = serde_json::from_value(Value::Object(object))?;

        Ok(Self {
            id: fields.id,
            domain_name: fields.domain_name,
            status: fields.status,
            origins: fields.origins,
            aliases: fields.aliases,
            raw,
        })
    }
}

impl From<DistributionRecord> for OrderMap<String, Value> {
    fn from(record: DistributionRecord) -> Self {
        record.raw
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OriginList {
    #[serde(rename = "Items", default)]
    pub items: Option<Vec<Origin>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AliasList {
    #[serde(rename = "Items", default)]
    pub items: Option<Vec<String>>,
}

/// One origin entry, kept as an open mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Origin(pub OrderMap<String, Value>);

impl Origin {
    /// String value of `key`; missing and non-string values are `None`
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str(ORIGIN_ID)
    }

    pub fn domain_name(&self) -> Option<&str> {
        self.get_str(ORIGIN_DOMAIN_NAME)
    }

    pub fn origin_path(&self) -> Option<&str> {
        self.get_str(ORIGIN_PATH)
    }
}

impl DistributionRecord {
    /// The record as decoded, in its original key order
    pub fn raw(&self) -> &OrderMap<String, Value> {
        &self.raw
    }

    pub fn origins(&self) -> &[Origin] {
        self.origins
            .as_ref()
            .and_then(|list| list.items.as_deref())
            .unwrap_or_default()
    }

    pub fn aliases(&self) -> &[String] {
        self.aliases
            .as_ref()
            .and_then(|list| list.items.as_deref())
            .unwrap_or_default()
    }
}

/// `aws cloudfront list-distributions`
pub fn list_distributions(aws: &dyn AwsCli) -> Result<Vec<DistributionRecord>> {
    let out = aws.run("cloudfront", "list-distributions")?;
    let response: ListDistributionsResponse = decode(&out)?;
    tracing::info!(
        "Found {} distributions",
        response.distribution_list.items.len()
    );
    Ok(response.distribution_list.items)
}
