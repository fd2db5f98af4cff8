/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use lambda_runtime::{Error, LambdaEvent};

use crate::event::UploadEvent;
use crate::types::InvocationResult;

/// Handles a single S3 upload event delivered by the Lambda runtime.
///
/// Any failure is returned to the runtime, which records the invocation as failed.
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    client: &crate::Client,
    event: LambdaEvent<UploadEvent>,
) -> Result<InvocationResult, Error> {
    tracing::trace!("processing event");

    let output = client.notify_upload().event(event.payload).send().await?;

    Ok(output.invocation_result())
}
