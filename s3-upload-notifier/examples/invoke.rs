/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::error::Error;
use std::path::PathBuf;

use aws_smithy_types::error::display::DisplayErrorContext;
use clap::Parser;
use s3_upload_notifier::event::UploadEvent;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "invoke")]
#[command(about = "Runs the upload notifier once against a local S3 event document.")]
pub struct Args {
    /// Path to a JSON file holding an S3 event notification
    #[arg(required = true)]
    event: PathBuf,

    /// Region of the notification topic
    #[arg(long)]
    region: Option<String>,

    /// Name of the notification topic
    #[arg(long)]
    topic_name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let raw = tokio::fs::read(&args.event).await?;
    let event = UploadEvent::from_slice(&raw)?;

    let mut loader = s3_upload_notifier::from_env();
    if let Some(region) = args.region {
        loader = loader.region(region);
    }
    if let Some(topic_name) = args.topic_name {
        loader = loader.topic_name(topic_name);
    }
    let client = s3_upload_notifier::Client::new(loader.load().await?);

    match client.notify_upload().event(event).send().await {
        Ok(output) => {
            tracing::debug!(message_id = ?output.message_id(), "notification published");
            println!("{}", serde_json::to_string_pretty(&output.invocation_result())?);
        }
        Err(err) => {
            tracing::error!("invocation failed: {}", DisplayErrorContext(&err));
            return Err(err.into());
        }
    }

    Ok(())
}
