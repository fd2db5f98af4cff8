/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! An AWS Lambda function that announces new Amazon S3 objects on an Amazon SNS topic.
//!
//! For every upload event the function resolves the account it runs in through
//! [`GetCallerIdentity`], builds the ARN of the notification topic in that account and
//! publishes a short message naming the uploaded object.
//!
//! [`GetCallerIdentity`]: https://docs.aws.amazon.com/STS/latest/APIReference/API_GetCallerIdentity.html
//!
//! # Examples
//!
//! Load the default configuration and publish a notification for an S3 event document:
//!
//! ```no_run
//! # async fn example(raw: &[u8]) -> Result<(), s3_upload_notifier::error::Error> {
//! use s3_upload_notifier::event::UploadEvent;
//!
//! let event = UploadEvent::from_slice(raw)?;
//! let config = s3_upload_notifier::from_env().load().await?;
//! let client = s3_upload_notifier::Client::new(config);
//!
//! let output = client
//!     .notify_upload()
//!     .event(event)
//!     .send()
//!     .await?;
//!
//! println!("published to {}", output.topic_arn());
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `s3-upload-notifier`
pub mod error;

/// Upload event payload
pub mod event;

/// Common types used by `s3-upload-notifier`
pub mod types;

/// Notifier client
pub mod client;

/// Notifier operations
pub mod operation;

/// Notifier configuration
pub mod config;

/// Lambda runtime entry point
pub mod handler;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
