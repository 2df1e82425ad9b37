use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

use crate::db::models::NewApplication;

/// Body of `POST /apply`
///
/// `job_id` is not checked against existing jobs.
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct ApplyRequest {
    #[serde(default, deserialize_with = "job_id_from_json")]
    #[validate(required(message = "job_id required"))]
    pub job_id: Option<i64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "applicant_email required"))]
    pub applicant_email: String,
}

/// Accepts a number or a numeric string; `null`, `0` and `""` count as missing
fn job_id_from_json<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawJobId {
        Number(i64),
        Text(String),
    }

    match Option::<RawJobId>::deserialize(deserializer)? {
        None | Some(RawJobId::Number(0)) => Ok(None),
        Some(RawJobId::Number(id)) => Ok(Some(id)),
        Some(RawJobId::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawJobId::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("job_id is not a number: {:?}", text))),
    }
}

impl From<ApplyRequest> for NewApplication {
    /// Only called on validated requests, where `job_id` is always present
    fn from(request: ApplyRequest) -> Self {
        NewApplication {
            job_id: request.job_id.unwrap_or_default(),
            applicant_email: request.applicant_email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ApplyRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn negative_and_string_ids_are_present() {
        assert_eq!(parse(r#"{"job_id": -1, "applicant_email": "a@x.com"}"#).job_id, Some(-1));
        assert_eq!(parse(r#"{"job_id": "5", "applicant_email": "a@x.com"}"#).job_id, Some(5));
        assert!(parse(r#"{"job_id": -1, "applicant_email": "a@x.com"}"#).validate().is_ok());
    }

    #[test]
    fn absent_null_zero_and_empty_ids_are_missing() {
        for body in [
            r#"{"applicant_email": "a@x.com"}"#,
            r#"{"job_id": null, "applicant_email": "a@x.com"}"#,
            r#"{"job_id": 0, "applicant_email": "a@x.com"}"#,
            r#"{"job_id": "", "applicant_email": "a@x.com"}"#,
        ] {
            let request = parse(body);
            assert_eq!(request.job_id, None, "{}", body);
            assert!(request.validate().is_err(), "{}", body);
        }
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert!(serde_json::from_str::<ApplyRequest>(r#"{"job_id": "abc"}"#).is_err());
    }
}
