use crate::domain::listing::resource::Resource;
use crate::domain::shared::pagination::FilterValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Public identifier printed on the certificate, e.g. "CERT-EH-2024-001".
    pub certificate_id: String,
    pub title: String,
    pub issue_date: NaiveDate,
    pub status: CertificateStatus,
    pub credits_earned: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateStatus {
    Issued,
    Revoked,
}

impl FilterValue for CertificateStatus {
    const PARAM: &'static str = "status";

    fn as_param(&self) -> &'static str {
        match self {
            Self::Issued => "Issued",
            Self::Revoked => "Revoked",
        }
    }
}

pub struct MyCertificates;

impl Resource for MyCertificates {
    type Item = Certificate;
    type Filter = CertificateStatus;

    const PATH: &'static str = "users/me/certificates/";
    const REQUIRES_AUTH: bool = true;
}
