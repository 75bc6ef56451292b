use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// Stand-in for the aws CLI. Serves `$FAKE_AWS_DIR/certs.json` and
/// `$FAKE_AWS_DIR/dists.json`, fails with the contents of `$FAKE_AWS_DIR/fail`
/// when that file exists, and logs its arguments to `calls.log`.
const FAKE_AWS: &str = r#"#!/bin/sh
echo "$@" >> "$FAKE_AWS_DIR/calls.log"
case "$1 $2" in
  "iam list-server-certificates") file="$FAKE_AWS_DIR/certs.json" ;;
  "cloudfront list-distributions") file="$FAKE_AWS_DIR/dists.json" ;;
  *) echo "unknown command: $1 $2" >&2; exit 255 ;;
esac
if [ -f "$FAKE_AWS_DIR/fail" ]; then
  cat "$FAKE_AWS_DIR/fail" >&2
  exit 1
fi
cat "$file"
"#;

/// Written once per test binary, before any test spawns a process.
/// The directory lives in a static and is not removed when the binary exits.
fn fake_aws() -> &'static Path {
    static SCRIPT: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = SCRIPT.get_or_init(|| {
        let dir = TempDir::new().expect("create script dir");
        let path = dir.path().join("aws");
        fs::write(&path, FAKE_AWS).expect("write fake aws");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod fake aws");
        (dir, path)
    });
    path
}

pub struct TestEnv {
    tmp: TempDir,
    pub fixtures: PathBuf,
    pub config_home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let fixtures = tmp.path().join("fixtures");
        let config_home = tmp.path().join("config");
        let work = tmp.path().join("work");
        for dir in [&fixtures, &config_home, &work] {
            fs::create_dir_all(dir).expect("create test dir");
        }

        Self {
            tmp,
            fixtures,
            config_home,
            work,
        }
    }

    pub fn with_certs(self, json: &str) -> Self {
        fs::write(self.fixtures.join("certs.json"), json).expect("write certs fixture");
        self
    }

    pub fn with_dists(self, json: &str) -> Self {
        fs::write(self.fixtures.join("dists.json"), json).expect("write dists fixture");
        self
    }

    pub fn failing_with(self, stderr: &str) -> Self {
        fs::write(self.fixtures.join("fail"), stderr).expect("write fail marker");
        self
    }

    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(self.config_path(), yaml).expect("write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.fixtures.join("config.yaml")
    }

    pub fn calls(&self) -> String {
        fs::read_to_string(self.fixtures.join("calls.log")).unwrap_or_default()
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("awsutils").expect("awsutils binary");
        cmd.current_dir(&self.work)
            .env("HOME", self.tmp.path())
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("FAKE_AWS_DIR", &self.fixtures)
            .env("AWSUTILS_AWS_BIN", fake_aws())
            .env("NO_COLOR", "1");
        cmd
    }
}

pub const CERTS: &str = r#"{
    "ServerCertificateMetadataList": [
        {
            "Path": "/cloudfront/",
            "ServerCertificateName": "www-example",
            "ServerCertificateId": "ASCAFUTURE",
            "Arn": "arn:aws:iam::123456789012:server-certificate/cloudfront/www-example",
            "UploadDate": "2020-01-10T09:00:00+00:00",
            "Expiration": "2999-01-01T00:00:00+00:00"
        },
        {
            "Path": "/",
            "ServerCertificateName": "legacy",
            "ServerCertificateId": "ASCAPAST",
            "Arn": "arn:aws:iam::123456789012:server-certificate/legacy",
            "UploadDate": "2000-01-10T09:00:00+00:00",
            "Expiration": "2001-01-01T00:00:00+00:00"
        }
    ]
}"#;

pub const DISTS: &str = r#"{
    "DistributionList": {
        "Marker": "",
        "MaxItems": 100,
        "IsTruncated": false,
        "Quantity": 3,
        "Items": [
            {
                "Id": "E1",
                "DomainName": "d1.cloudfront.net",
                "Status": "Deployed",
                "Aliases": {"Quantity": 1, "Items": ["www.zeta.com"]},
                "Origins": {"Quantity": 1, "Items": [
                    {"Id": "zeta-web", "DomainName": "web.zeta.com", "OriginPath": ""}
                ]},
                "ViewerCertificate": {"IAMCertificateId": "ASCAFUTURE", "SSLSupportMethod": "sni-only"},
                "Enabled": true
            },
            {
                "Id": "E2",
                "DomainName": "d2.cloudfront.net",
                "Status": "InProgress",
                "Aliases": {"Quantity": 2, "Items": ["alpha.com", "www.alpha.com"]},
                "Origins": {"Quantity": 2, "Items": [
                    {"Id": "alpha-assets", "DomainName": "assets.alpha.com", "OriginPath": "/static"},
                    {"Id": "alpha-web", "DomainName": "web.alpha.com", "OriginPath": ""}
                ]},
                "Enabled": true
            },
            {
                "Id": "E3",
                "DomainName": "d3.cloudfront.net",
                "Status": "Deployed",
                "Aliases": {"Quantity": 0},
                "Origins": {"Quantity": 1, "Items": [
                    {"Id": "S3-bucket/logs", "DomainName": "logs.s3.amazonaws.com", "OriginPath": ""}
                ]},
                "Enabled": false
            }
        ]
    }
}"#;
