/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::event::ObjectRef;

/// Subject of every notification published for a newly created object.
pub const OBJECT_CREATED_SUBJECT: &str = "S3 Object Created";

/// Message returned to the runtime when an invocation completes.
pub const SUCCESS_MESSAGE: &str = "Lambda function executed successfully";

/// AWS account identifier of the credentials the function executes with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The account identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amazon Resource Name of the SNS topic notifications are published to.
///
/// NOTE: The ARN is only templated, the topic is never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicArn(String);

impl TopicArn {
    /// Build the topic ARN `arn:{partition}:sns:{region}:{account_id}:{topic_name}`
    pub fn new(partition: &str, region: &str, account_id: &AccountId, topic_name: &str) -> Self {
        Self(format!(
            "arn:{partition}:sns:{region}:{account_id}:{topic_name}"
        ))
    }

    /// The ARN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Subject and body of a notification about an uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    subject: String,
    message: String,
}

impl Notification {
    /// Notification for a newly created object, using the given subject
    pub fn object_created(subject: impl Into<String>, object: &ObjectRef) -> Self {
        Self {
            subject: subject.into(),
            message: format!(
                "File '{}' was uploaded to bucket '{}'",
                object.key(),
                object.bucket()
            ),
        }
    }

    /// The notification subject
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The notification body
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Response returned to the function runtime.
///
/// Serializes as `{"statusCode": 200, "body": "\"...\""}` where `body` holds a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    /// HTTP style status code
    pub status_code: u16,
    /// JSON encoded response body
    pub body: String,
}

impl InvocationResult {
    /// The result of a successful invocation
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::String(SUCCESS_MESSAGE.to_owned()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_arn() {
        let arn = TopicArn::new(
            "aws",
            "us-east-1",
            &AccountId::new("123456789012"),
            "s3-lambda-sns",
        );
        assert_eq!("arn:aws:sns:us-east-1:123456789012:s3-lambda-sns", arn.as_str());
    }

    #[test]
    fn test_object_created_notification() {
        let notification = Notification::object_created(
            OBJECT_CREATED_SUBJECT,
            &ObjectRef::new("my-bucket", "file.txt"),
        );
        assert_eq!("S3 Object Created", notification.subject());
        assert_eq!(
            "File 'file.txt' was uploaded to bucket 'my-bucket'",
            notification.message()
        );
    }

    #[test]
    fn test_success_result_shape() {
        let result = InvocationResult::success();
        assert_eq!(200, result.status_code);
        assert_eq!("\"Lambda function executed successfully\"", result.body);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            serde_json::json!({
                "statusCode": 200,
                "body": "\"Lambda function executed successfully\""
            }),
            json
        );
    }
}
