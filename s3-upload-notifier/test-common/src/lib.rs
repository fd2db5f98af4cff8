/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_sns::operation::publish::PublishOutput;
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityOutput;
use aws_smithy_mocks::{mock, mock_client, Rule, RuleMode};
use s3_upload_notifier::event::UploadEvent;

/// Account id returned by [`caller_identity_rule`] unless told otherwise
pub const TEST_ACCOUNT_ID: &str = "123456789012";

/// Build an upload event for `bucket`/`key` from a full S3 notification document,
/// the way Amazon S3 delivers it to Lambda.
pub fn s3_put_event(bucket: &str, key: &str) -> UploadEvent {
    UploadEvent::from_value(s3_put_event_json(&[(bucket, key)])).unwrap()
}

/// Raw S3 notification document with one `ObjectCreated:Put` record per `(bucket, key)` pair
pub fn s3_put_event_json(objects: &[(&str, &str)]) -> serde_json::Value {
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
                "responseElements": {
                    "x-amz-request-id": "EXAMPLE123456789",
                    "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
                },
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

/// Mock rule answering `GetCallerIdentity` with the given account
pub fn caller_identity_rule(account: &'static str) -> Rule {
    mock!(aws_sdk_sts::Client::get_caller_identity).then_output(move || {
        GetCallerIdentityOutput::builder()
            .account(account)
            .user_id("AIDAEXAMPLE")
            .arn(format!("arn:aws:iam::{account}:user/notifier"))
            .build()
    })
}

/// Mock rule accepting a `Publish` to `topic_arn` with the given message body
pub fn publish_rule(topic_arn: &'static str, message: impl Into<String>) -> Rule {
    let message = message.into();
    mock!(aws_sdk_sns::Client::publish)
        .match_requests(move |r| {
            r.topic_arn() == Some(topic_arn) && r.message() == Some(message.as_str())
        })
        .then_output(|| PublishOutput::builder().message_id("test-message-id").build())
}

/// Mock rule accepting any `Publish` whose subject is `subject`
pub fn publish_subject_rule(subject: &'static str) -> Rule {
    mock!(aws_sdk_sns::Client::publish)
        .match_requests(move |r| r.subject() == Some(subject))
        .then_output(|| PublishOutput::builder().build())
}

/// Notifier client whose STS and SNS calls are answered, in order, by the given rules.
///
/// Both SDK clients have retries disabled, matching what
/// [`from_env`](s3_upload_notifier::from_env) loads, so every call
/// the notifier makes reaches the rules exactly once.
pub fn mock_notifier(sts_rules: &[&Rule], sns_rules: &[&Rule]) -> s3_upload_notifier::Client {
    let sts = mock_client!(aws_sdk_sts, RuleMode::Sequential, sts_rules, |conf| conf
        .retry_config(aws_sdk_sts::config::retry::RetryConfig::disabled()));
    let sns = mock_client!(aws_sdk_sns, RuleMode::Sequential, sns_rules, |conf| conf
        .retry_config(aws_sdk_sns::config::retry::RetryConfig::disabled()));

    let config = s3_upload_notifier::Config::builder()
        .sts_client(sts)
        .sns_client(sns)
        .build()
        .unwrap();
    s3_upload_notifier::Client::new(config)
}
