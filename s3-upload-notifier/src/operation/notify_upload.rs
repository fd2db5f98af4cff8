/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use crate::error::{self, ErrorKind};
use crate::types::{AccountId, Notification, TopicArn};
/// Request type for upload notifications
pub use input::{NotifyUploadInput, NotifyUploadInputBuilder};
/// Response type for upload notifications
pub use output::NotifyUploadOutput;
use tracing::Instrument;

use std::sync::Arc;

/// Operation struct for publishing a single upload notification
#[derive(Clone, Default, Debug)]
pub(crate) struct NotifyUpload;

impl NotifyUpload {
    /// Execute a single `NotifyUpload` operation
    ///
    /// Steps run strictly in order and the first failure ends the operation; nothing is retried.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: NotifyUploadInput,
    ) -> Result<NotifyUploadOutput, error::Error> {
        let config = &handle.config;

        let object = input.event.first_object()?;
        let notification = Notification::object_created(config.subject(), &object);
        tracing::info!(
            bucket = object.bucket(),
            key = object.key(),
            "{}",
            notification.message()
        );

        let account_id = resolve_account_id(config.sts_client())
            .instrument(tracing::debug_span!("resolve-account-id"))
            .await?;

        let topic_arn = TopicArn::new(
            config.partition(),
            config.region(),
            &account_id,
            config.topic_name(),
        );

        let message_id = publish(config.sns_client(), &topic_arn, &notification)
            .instrument(tracing::debug_span!("publish", topic_arn = %topic_arn))
            .await?;

        tracing::info!(message_id = ?message_id, topic_arn = %topic_arn, "published notification");

        Ok(NotifyUploadOutput {
            object,
            account_id,
            topic_arn,
            notification,
            message_id,
        })
    }
}

/// Look up the account of the credentials the clients were built with.
async fn resolve_account_id(client: &aws_sdk_sts::Client) -> Result<AccountId, error::Error> {
    let resp = client
        .get_caller_identity()
        .send()
        .await
        .map_err(error::from_kind(ErrorKind::IdentityLookupFailed))?;

    let account = resp.account().ok_or_else(|| {
        error::Error::new(
            ErrorKind::IdentityLookupFailed,
            "GetCallerIdentity response did not include an account",
        )
    })?;

    tracing::trace!(account, "resolved caller account");
    Ok(AccountId::new(account))
}

async fn publish(
    client: &aws_sdk_sns::Client,
    topic_arn: &TopicArn,
    notification: &Notification,
) -> Result<Option<String>, error::Error> {
    let resp = client
        .publish()
        .topic_arn(topic_arn.as_str())
        .subject(notification.subject())
        .message(notification.message())
        .send()
        .await
        .map_err(error::from_kind(ErrorKind::PublishFailed))?;

    Ok(resp.message_id().map(str::to_owned))
}
