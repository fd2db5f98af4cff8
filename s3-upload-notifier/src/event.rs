/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Amazon S3 event notification delivered to the function.
///
/// Records that lack a bucket name or object key still deserialize and are rejected with
/// [`ErrorKind::MalformedEvent`](crate::error::ErrorKind::MalformedEvent) by
/// [`first_object`](UploadEvent::first_object).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct UploadEvent(S3Event);

impl From<S3Event> for UploadEvent {
    fn from(value: S3Event) -> Self {
        Self(value)
    }
}

/// The bucket and key an upload notification refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    bucket: String,
    key: String,
}

impl ObjectRef {
    /// Create a new object reference
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// The bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// The object key
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl UploadEvent {
    /// Parse an event from a JSON document.
    ///
    /// A document that is not an S3 event notification is a [`MalformedEvent`](crate::error::ErrorKind::MalformedEvent).
    pub fn from_value(value: serde_json::Value) -> Result<Self, Error> {
        serde_json::from_value(value).map_err(error::malformed_event)
    }

    /// Parse an event from raw JSON bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(raw).map_err(error::malformed_event)
    }

    /// Event records, in delivery order
    pub fn records(&self) -> &[S3EventRecord] {
        &self.0.records
    }

    /// Extract the bucket and key of the first record.
    ///
    /// Any further records are ignored.
    pub fn first_object(&self) -> Result<ObjectRef, Error> {
        let records = self.records();
        let record = records
            .first()
            .ok_or_else(|| error::malformed_event("event contains no records"))?;

        if records.len() > 1 {
            tracing::debug!(
                ignored = records.len() - 1,
                "event contains additional records; only the first is processed"
            );
        }

        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .ok_or_else(|| error::malformed_event("first record is missing `s3.bucket.name`"))?;

        let key = record
            .s3
            .object
            .key
            .as_deref()
            .ok_or_else(|| error::malformed_event("first record is missing `s3.object.key`"))?;

        Ok(ObjectRef::new(bucket, key))
    }
}

/// S3 notification document with one `ObjectCreated:Put` record per `(bucket, key)` pair
#[cfg(test)]
pub(crate) fn test_notification(objects: &[(&str, &str)]) -> serde_json::Value {
    let records: Vec<_> = objects
        .iter()
        .map(|(bucket, key)| {
            serde_json::json!({
                "eventVersion": "2.1",
                "eventSource": "aws:s3",
                "awsRegion": "us-east-1",
                "eventTime": "2024-01-01T00:00:00.000Z",
                "eventName": "ObjectCreated:Put",
                "userIdentity": { "principalId": "AWS:AIDAEXAMPLE" },
                "requestParameters": { "sourceIPAddress": "127.0.0.1" },
                "responseElements": { "x-amz-request-id": "EXAMPLE123456789" },
                "s3": {
                    "s3SchemaVersion": "1.0",
                    "configurationId": "upload-notifications",
                    "bucket": {
                        "name": bucket,
                        "ownerIdentity": { "principalId": "EXAMPLE" },
                        "arn": format!("arn:aws:s3:::{bucket}")
                    },
                    "object": {
                        "key": key,
                        "size": 1024,
                        "eTag": "0123456789abcdef0123456789abcdef",
                        "sequencer": "0A1B2C3D4E5F678901"
                    }
                }
            })
        })
        .collect();

    serde_json::json!({ "Records": records })
}

#[cfg(test)]
pub(crate) fn test_event(bucket: &str, key: &str) -> UploadEvent {
    UploadEvent::from_value(test_notification(&[(bucket, key)])).unwrap()
}
