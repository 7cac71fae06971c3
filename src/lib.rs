//! The messenger of the gods, for messages of a more operational kind.
//!
//! An incoming webhook is a pre-shared URL which accepts POSTed JSON and
//! relays it into a chat channel. [Message] models the payload,
//! [WebhookClient] and [send] deliver it, and [Dialect] renders user
//! mentions for whichever platform sits on the other end.
//!
//! Delivery is a single POST per call. There's no queuing, no retrying and
//! no rate-limit handling; a rejection surfaces as [SendError] with the
//! status code and body intact so that callers can make those decisions
//! themselves.
//!
//! ```no_run
//! use iris::{send, Attachment, Message};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let message = Message {
//!     username: Some("mybot".into()),
//!     icon_emoji: Some(":star:".into()),
//!     text: Some("Hello World!".into()),
//!     attachments: vec![Attachment {
//!         title: Some("ALERT".into()),
//!         text: Some("Hello World!".into()),
//!         color: Some("danger".into()),
//!         ..Attachment::default()
//!     }],
//!     ..Message::default()
//! };
//!
//! send("https://hooks.slack.com/services/...", &message)
//!     .await
//!     .expect("could not deliver the message");
//! # }
//! ```

pub mod client;
pub mod dialect;
pub mod error;
pub mod message;

pub use client::{send, WebhookClient};
pub use dialect::Dialect;
pub use error::SendError;
pub use message::{Attachment, AttachmentAction, AttachmentField, Message};
