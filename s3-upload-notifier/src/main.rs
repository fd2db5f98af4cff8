/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use s3_upload_notifier::event::UploadEvent;
use s3_upload_notifier::handler::handler;

/// Optional overrides for the notification topic
const REGION_ENV: &str = "NOTIFIER_REGION";
const TOPIC_NAME_ENV: &str = "NOTIFIER_TOPIC_NAME";
const PARTITION_ENV: &str = "NOTIFIER_PARTITION";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    tracing::trace!("initiating lambda");

    let mut loader = s3_upload_notifier::from_env();
    if let Ok(region) = std::env::var(REGION_ENV) {
        loader = loader.region(region);
    }
    if let Ok(topic_name) = std::env::var(TOPIC_NAME_ENV) {
        loader = loader.topic_name(topic_name);
    }
    if let Ok(partition) = std::env::var(PARTITION_ENV) {
        loader = loader.partition(partition);
    }

    let client = s3_upload_notifier::Client::new(loader.load().await?);

    tracing::debug!(
        region = client.config().region(),
        topic_name = client.config().topic_name(),
        "notifier configured"
    );

    let func = service_fn(move |event: LambdaEvent<UploadEvent>| {
        let client = client.clone();

        async move { handler(&client, event).await }
    });

    run(func).await
}
