/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

use crate::event::UploadEvent;

/// Request type for publishing a notification about an uploaded object
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyUploadInput {
    /// The upload event the function was triggered with
    pub(crate) event: UploadEvent,
}

impl NotifyUploadInput {
    /// Creates a new builder-style object to manufacture [`NotifyUploadInput`](crate::operation::notify_upload::NotifyUploadInput).
    pub fn builder() -> NotifyUploadInputBuilder {
        NotifyUploadInputBuilder::default()
    }

    /// The upload event the function was triggered with
    pub fn event(&self) -> &UploadEvent {
        &self.event
    }
}

/// A builder for [`NotifyUploadInput`](crate::operation::notify_upload::NotifyUploadInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct NotifyUploadInputBuilder {
    pub(crate) event: Option<UploadEvent>,
}

impl NotifyUploadInputBuilder {
    /// The upload event the function was triggered with
    ///
    /// This field is required.
    pub fn event(mut self, input: UploadEvent) -> Self {
        self.event = Some(input);
        self
    }

    /// The upload event the function was triggered with
    pub fn set_event(mut self, input: Option<UploadEvent>) -> Self {
        self.event = input;
        self
    }

    /// The upload event the function was triggered with
    pub fn get_event(&self) -> &Option<UploadEvent> {
        &self.event
    }

    /// Consumes the builder and constructs a [`NotifyUploadInput`](crate::operation::notify_upload::NotifyUploadInput).
    pub fn build(self) -> Result<NotifyUploadInput, BuildError> {
        let event = self
            .event
            .ok_or_else(|| BuildError::missing_field("event", "an upload event is required"))?;
        Ok(NotifyUploadInput { event })
    }
}
