/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_types::region::Region;

use crate::config::{Builder, DEFAULT_REGION};
use crate::error::Error;
use crate::Config;

/// Load notifier [`Config`] from the environment.
///
/// Credentials come from the default AWS credential provider chain. The SDK clients are
/// created in the topic's region with retries disabled, each call is attempted once.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// The ARN partition of the notification topic.
    ///
    /// Default is `aws`.
    pub fn partition(mut self, partition: impl Into<String>) -> Self {
        self.builder = self.builder.partition(partition);
        self
    }

    /// The region of the notification topic. The SDK clients are created in this region.
    ///
    /// Default is `us-east-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// The name of the notification topic.
    ///
    /// Default is `s3-lambda-sns`.
    pub fn topic_name(mut self, topic_name: impl Into<String>) -> Self {
        self.builder = self.builder.topic_name(topic_name);
        self
    }

    /// The subject of published notifications.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.builder = self.builder.subject(subject);
        self
    }

    /// Load the default configuration
    ///
    /// If fields have been overridden during builder construction, the override values will be
    /// used. Otherwise, the default values for each field will be provided.
    pub async fn load(self) -> Result<Config, Error> {
        let region = self
            .builder
            .get_region()
            .unwrap_or(DEFAULT_REGION)
            .to_owned();

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        tracing::debug!(region = ?shared_config.region(), "loaded shared AWS configuration");

        self.builder
            .sts_client(aws_sdk_sts::Client::new(&shared_config))
            .sns_client(aws_sdk_sns::Client::new(&shared_config))
            .build()
    }
}
