use crate::aws::{decode, AwsCli};
use crate::utils::errors::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListServerCertificatesResponse {
    #[serde(default)]
    pub server_certificate_metadata_list: Vec<ServerCertificateMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerCertificateMetadata {
    pub server_certificate_id: String,
    pub server_certificate_name: String,
    pub expiration: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<DateTime<Utc>>,
}

/// `aws iam list-server-certificates`
pub fn list_server_certificates(aws: &dyn AwsCli) -> Result<Vec<ServerCertificateMetadata>> {
    let out = aws.run("iam", "list-server-certificates")?;
    let response: ListServerCertificatesResponse = decode(&out)?;
    tracing::info!(
        "Found {} server certificates",
        response.server_certificate_metadata_list.len()
    );
    Ok(response.server_certificate_metadata_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_certificates() {
        let json = r#"{
            "ServerCertificateMetadataList": [
                {
                    "Path": "/cloudfront/",
                    "ServerCertificateName": "www-2024",
                    "ServerCertificateId": "ASCAEXAMPLE1",
                    "Arn": "arn:aws:iam::123456789012:server-certificate/cloudfront/www-2024",
                    "UploadDate": "2024-01-10T09:00:00+00:00",
                    "Expiration": "2025-02-01T23:59:59+00:00"
                },
                {
                    "ServerCertificateName": "api",
                    "ServerCertificateId": "ASCAEXAMPLE2",
                    "Expiration": "2025-03-01T10:00:00Z"
                }
            ],
            "IsTruncated": false
        }"#;

        let response: ListServerCertificatesResponse = serde_json::from_str(json).unwrap();
        let certs = response.server_certificate_metadata_list;

        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].server_certificate_id, "ASCAEXAMPLE1");
        assert_eq!(certs[0].path.as_deref(), Some("/cloudfront/"));
        assert_eq!(
            certs[0].expiration,
            Utc.with_ymd_and_hms(2025, 2, 1, 23, 59, 59).unwrap()
        );
        assert!(certs[1].arn.is_none());
    }

    #[test]
    fn test_decode_empty_response() {
        let response: ListServerCertificatesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.server_certificate_metadata_list.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_expiration() {
        let json = r#"{"ServerCertificateMetadataList": [
            {"ServerCertificateId": "X", "ServerCertificateName": "x"}
        ]}"#;
        assert!(serde_json::from_str::<ListServerCertificatesResponse>(json).is_err());
    }
}
