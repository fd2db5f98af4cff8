/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{self, Error};
use crate::types::OBJECT_CREATED_SUBJECT;

pub(crate) mod loader;

/// Region the notification topic lives in when none is configured
pub const DEFAULT_REGION: &str = "us-east-1";

/// Name of the notification topic when none is configured
pub const DEFAULT_TOPIC_NAME: &str = "s3-lambda-sns";

/// ARN partition of the notification topic when none is configured
pub const DEFAULT_PARTITION: &str = "aws";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    partition: String,
    region: String,
    topic_name: String,
    subject: String,
    sts_client: aws_sdk_sts::Client,
    sns_client: aws_sdk_sns::Client,
}

impl Config {
    /// Create a new `Config` builder
    ///
    /// The notifier applies no retry policy of its own. Retries are whatever the supplied
    /// STS and SNS clients are configured with; clients built by [`from_env`](crate::from_env)
    /// have retries disabled.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The ARN partition of the notification topic
    pub fn partition(&self) -> &str {
        &self.partition
    }

    /// The region of the notification topic
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The name of the notification topic
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// The subject used for published notifications
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The AWS STS client used to resolve the caller's account identifier.
    pub fn sts_client(&self) -> &aws_sdk_sts::Client {
        &self.sts_client
    }

    /// The Amazon SNS client used to publish notifications.
    pub fn sns_client(&self) -> &aws_sdk_sns::Client {
        &self.sns_client
    }
}

/// Fluent style builder for [Config]
///
/// Retry behavior is taken from the STS and SNS clients passed to
/// [`sts_client`](Builder::sts_client) and [`sns_client`](Builder::sns_client).
#[derive(Debug, Clone, Default)]
pub struct Builder {
    partition: Option<String>,
    region: Option<String>,
    topic_name: Option<String>,
    subject: Option<String>,
    sts_client: Option<aws_sdk_sts::Client>,
    sns_client: Option<aws_sdk_sns::Client>,
}

impl Builder {
    /// The ARN partition of the notification topic.
    ///
    /// Default is `aws`.
    pub fn partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// The region of the notification topic.
    ///
    /// Default is `us-east-1`.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// The configured region, if any
    pub fn get_region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The name of the notification topic.
    ///
    /// Default is `s3-lambda-sns`.
    pub fn topic_name(mut self, topic_name: impl Into<String>) -> Self {
        self.topic_name = Some(topic_name.into());
        self
    }

    /// The subject of published notifications.
    ///
    /// Default is `S3 Object Created`.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set an explicit STS client to use.
    pub fn sts_client(mut self, client: aws_sdk_sts::Client) -> Self {
        self.sts_client = Some(client);
        self
    }

    /// Set an explicit SNS client to use.
    pub fn sns_client(mut self, client: aws_sdk_sns::Client) -> Self {
        self.sns_client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// Fails if either SDK client is missing or if a topic setting is empty.
    pub fn build(self) -> Result<Config, Error> {
        let sts_client = self
            .sts_client
            .ok_or_else(|| error::invalid_configuration("an STS client is required"))?;
        let sns_client = self
            .sns_client
            .ok_or_else(|| error::invalid_configuration("an SNS client is required"))?;

        let partition = non_empty("partition", self.partition, DEFAULT_PARTITION)?;
        let region = non_empty("region", self.region, DEFAULT_REGION)?;
        let topic_name = non_empty("topic_name", self.topic_name, DEFAULT_TOPIC_NAME)?;

        Ok(Config {
            partition,
            region,
            topic_name,
            subject: self
                .subject
                .unwrap_or_else(|| OBJECT_CREATED_SUBJECT.to_owned()),
            sts_client,
            sns_client,
        })
    }
}

fn non_empty(field: &str, value: Option<String>, default: &str) -> Result<String, Error> {
    match value {
        Some(value) if value.trim().is_empty() => Err(error::invalid_configuration(format!(
            "`{field}` must not be empty"
        ))),
        Some(value) => Ok(value),
        None => Ok(default.to_owned()),
    }
}
