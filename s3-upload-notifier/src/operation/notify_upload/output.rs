/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::event::ObjectRef;
use crate::types::{AccountId, InvocationResult, Notification, TopicArn};

/// Output from publishing an upload notification
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct NotifyUploadOutput {
    /// The object the notification refers to
    pub object: ObjectRef,

    /// The account identifier resolved for this invocation
    pub account_id: AccountId,

    /// The topic the notification was published to
    pub topic_arn: TopicArn,

    /// The published notification
    pub notification: Notification,

    /// Message id assigned by Amazon SNS, if one was returned
    pub message_id: Option<String>,
}

impl NotifyUploadOutput {
    /// The object the notification refers to
    pub fn object(&self) -> &ObjectRef {
        &self.object
    }

    /// The account identifier resolved for this invocation
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// The topic the notification was published to
    pub fn topic_arn(&self) -> &TopicArn {
        &self.topic_arn
    }

    /// The published notification
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Message id assigned by Amazon SNS
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// The response to hand back to the function runtime.
    ///
    /// This is the same for every successful notification.
    pub fn invocation_result(&self) -> InvocationResult {
        InvocationResult::success()
    }
}
