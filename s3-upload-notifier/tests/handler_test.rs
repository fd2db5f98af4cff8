/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_sns::operation::publish::PublishError;
use aws_smithy_mocks::mock;
use aws_smithy_runtime::test_util::capture_test_logs::capture_test_logs;
use aws_smithy_types::error::ErrorMetadata;
use lambda_runtime::{Context, LambdaEvent};
use s3_upload_notifier::error::{Error, ErrorKind};
use s3_upload_notifier::event::UploadEvent;
use s3_upload_notifier::handler::handler;
use s3_upload_notifier::types::InvocationResult;
use test_common::{
    caller_identity_rule, mock_notifier, publish_rule, publish_subject_rule, s3_put_event,
    s3_put_event_json, TEST_ACCOUNT_ID,
};

const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:s3-lambda-sns";

fn lambda_event(payload: UploadEvent) -> LambdaEvent<UploadEvent> {
    LambdaEvent::new(payload, Context::default())
}

/// Extract the notifier error kind from the error handed back to the runtime
fn error_kind(err: &lambda_runtime::Error) -> &ErrorKind {
    err.downcast_ref::<Error>()
        .expect("notifier error")
        .kind()
}

#[tokio::test]
async fn test_upload_is_published_to_account_topic() {
    let identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let publish = publish_rule(
        TOPIC_ARN,
        "File 'file.txt' was uploaded to bucket 'my-bucket'",
    );
    let client = mock_notifier(&[&identity], &[&publish]);

    let result = handler(&client, lambda_event(s3_put_event("my-bucket", "file.txt")))
        .await
        .unwrap();

    assert_eq!(InvocationResult::success(), result);
    assert_eq!(
        serde_json::json!({
            "statusCode": 200,
            "body": "\"Lambda function executed successfully\""
        }),
        serde_json::to_value(&result).unwrap()
    );
    assert_eq!(1, identity.num_calls());
    assert_eq!(1, publish.num_calls());
}

#[tokio::test]
async fn test_event_without_records_fails() {
    let identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let publish = publish_subject_rule("S3 Object Created");
    let client = mock_notifier(&[&identity], &[&publish]);

    let payload: UploadEvent = serde_json::from_str(r#"{"Records": []}"#).unwrap();
    let err = handler(&client, lambda_event(payload)).await.unwrap_err();

    assert_eq!(&ErrorKind::MalformedEvent, error_kind(&err));
    assert_eq!(0, identity.num_calls());
    assert_eq!(0, publish.num_calls());
}

#[tokio::test]
async fn test_event_without_object_key_fails() {
    let identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let publish = publish_subject_rule("S3 Object Created");
    let client = mock_notifier(&[&identity], &[&publish]);

    let mut json = s3_put_event_json(&[("my-bucket", "file.txt")]);
    json["Records"][0]["s3"]["object"]
        .as_object_mut()
        .unwrap()
        .remove("key");
    let payload: UploadEvent = serde_json::from_value(json).unwrap();

    let err = handler(&client, lambda_event(payload)).await.unwrap_err();

    assert_eq!(&ErrorKind::MalformedEvent, error_kind(&err));
    assert_eq!(0, publish.num_calls());
}

#[tokio::test]
async fn test_subject_is_fixed() {
    let objects = [
        ("my-bucket", "file.txt"),
        ("another-bucket", "nested/path/to/image.png"),
        ("b", "S3 Object Deleted"),
    ];

    for (bucket, key) in objects {
        let identity = caller_identity_rule(TEST_ACCOUNT_ID);
        let publish = publish_subject_rule("S3 Object Created");
        let client = mock_notifier(&[&identity], &[&publish]);

        handler(&client, lambda_event(s3_put_event(bucket, key)))
            .await
            .unwrap();
        assert_eq!(1, publish.num_calls(), "{bucket}/{key}");
    }
}

#[tokio::test]
async fn test_identity_resolved_once_per_event() {
    let first_identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let second_identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let first_publish = publish_rule(TOPIC_ARN, "File 'a.txt' was uploaded to bucket 'my-bucket'");
    let second_publish =
        publish_rule(TOPIC_ARN, "File 'b.txt' was uploaded to bucket 'my-bucket'");
    let client = mock_notifier(
        &[&first_identity, &second_identity],
        &[&first_publish, &second_publish],
    );

    handler(&client, lambda_event(s3_put_event("my-bucket", "a.txt")))
        .await
        .unwrap();
    assert_eq!(1, first_identity.num_calls());
    assert_eq!(0, second_identity.num_calls());

    handler(&client, lambda_event(s3_put_event("my-bucket", "b.txt")))
        .await
        .unwrap();
    assert_eq!(1, first_identity.num_calls());
    assert_eq!(1, second_identity.num_calls());
    assert_eq!(1, first_publish.num_calls());
    assert_eq!(1, second_publish.num_calls());
}

#[tokio::test]
async fn test_only_first_record_is_published() {
    let identity = caller_identity_rule(TEST_ACCOUNT_ID);
    let publish = publish_rule(
        TOPIC_ARN,
        "File 'first.txt' was uploaded to bucket 'bucket-a'",
    );
    let client = mock_notifier(&[&identity], &[&publish]);

    let payload: UploadEvent = serde_json::from_value(s3_put_event_json(&[
        ("bucket-a", "first.txt"),
        ("bucket-b", "second.txt"),
    ]))
    .unwrap();

    handler(&client, lambda_event(payload)).await.unwrap();
    assert_eq!(1, identity.num_calls());
    assert_eq!(1, publish.num_calls());
}

#[tokio::test]
async fn test_publish_failure_fails_invocation_without_retry() {
    let (_guard, _rx) = capture_test_logs();
    let identity = caller_identity_rule(TEST_ACCOUNT_ID);
    // throttling is retryable under the SDK's standard retry strategy
    let publish = mock!(aws_sdk_sns::Client::publish).then_error(|| {
        PublishError::generic(
            ErrorMetadata::builder()
                .code("Throttling")
                .message("Rate exceeded")
                .build(),
        )
    });
    let client = mock_notifier(&[&identity], &[&publish]);

    let err = handler(&client, lambda_event(s3_put_event("my-bucket", "file.txt")))
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::PublishFailed, error_kind(&err));
    assert_eq!(1, identity.num_calls());
    assert_eq!(1, publish.num_calls());
}

#[tokio::test]
async fn test_topic_follows_configured_region_and_name() {
    let identity = caller_identity_rule("210987654321");
    let publish = publish_rule(
        "arn:aws:sns:eu-west-1:210987654321:uploads",
        "File 'file.txt' was uploaded to bucket 'my-bucket'",
    );

    let base = mock_notifier(&[&identity], &[&publish]);
    let config = s3_upload_notifier::Config::builder()
        .region("eu-west-1")
        .topic_name("uploads")
        .sts_client(base.config().sts_client().clone())
        .sns_client(base.config().sns_client().clone())
        .build()
        .unwrap();
    let client = s3_upload_notifier::Client::new(config);

    handler(&client, lambda_event(s3_put_event("my-bucket", "file.txt")))
        .await
        .unwrap();
    assert_eq!(1, publish.num_calls());
}
