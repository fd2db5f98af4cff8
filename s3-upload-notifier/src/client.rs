/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Upload notifier client wrapping AWS STS and Amazon SNS.
///
/// Cloning is cheap; a single client is meant to be created at cold start and shared by every
/// invocation.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a notifier config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Publish a notification for the object referenced by an upload event.
    ///
    /// Constructs a fluent builder for the
    /// [`NotifyUpload`](crate::operation::notify_upload::builders::NotifyUploadFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use s3_upload_notifier::event::UploadEvent;
    ///
    /// async fn notify(
    ///     client: &s3_upload_notifier::Client,
    ///     event: UploadEvent,
    /// ) -> Result<(), s3_upload_notifier::error::Error> {
    ///     let output = client.notify_upload().event(event).send().await?;
    ///     println!("published to {}", output.topic_arn());
    ///     Ok(())
    /// }
    /// ```
    pub fn notify_upload(
        &self,
    ) -> crate::operation::notify_upload::builders::NotifyUploadFluentBuilder {
        crate::operation::notify_upload::builders::NotifyUploadFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
