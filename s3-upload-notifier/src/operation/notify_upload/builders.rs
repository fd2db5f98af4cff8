/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::event::UploadEvent;

use super::{NotifyUploadInputBuilder, NotifyUploadOutput};

/// Fluent builder for constructing an upload notification
#[derive(Debug)]
pub struct NotifyUploadFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: NotifyUploadInputBuilder,
}

impl NotifyUploadFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Resolve the caller's account and publish the notification for the event's first record.
    pub async fn send(self) -> Result<NotifyUploadOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::notify_upload::NotifyUpload::orchestrate(self.handle, input).await
    }

    /// The upload event the function was triggered with
    pub fn event(mut self, input: UploadEvent) -> Self {
        self.inner = self.inner.event(input);
        self
    }

    /// The upload event the function was triggered with
    pub fn set_event(mut self, input: Option<UploadEvent>) -> Self {
        self.inner = self.inner.set_event(input);
        self
    }

    /// The upload event the function was triggered with
    pub fn get_event(&self) -> &Option<UploadEvent> {
        self.inner.get_event()
    }
}

impl crate::operation::notify_upload::input::NotifyUploadInputBuilder {
    /// Publish the notification with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<NotifyUploadOutput, Error> {
        let mut fluent_builder = client.notify_upload();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
