//! The webhook message payload and its wire format.
//!
//! Member names follow Slack's documented payload schema, which Mattermost
//! also understands. See <https://api.slack.com/docs/message-formatting>
//! and <https://api.slack.com/docs/message-attachments>.

use serde::Serialize;
use serde_with::skip_serializing_none;
use url::Url;

/// A message posted via an incoming webhook.
///
/// Every member is optional, and unset members are omitted from the wire
/// form entirely rather than sent as `null` or an empty string, leaving the
/// receiving platform to apply its own defaults. An empty `Message`
/// serializes to `{}`.
///
/// The `Option<bool>` flags are tri-state: `Some(false)` observably disables
/// a behaviour, which is not the same thing as `None` leaving the platform
/// default in place. See
/// <https://api.slack.com/docs/message-link-unfurling>.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    /// Display name to post under, overriding the webhook's configuration.
    pub username: Option<String>,
    /// Channel to post in, overriding the webhook's configuration.
    pub channel: Option<String>,
    /// Emoji name used as the avatar, e.g. `:star:`.
    pub icon_emoji: Option<String>,
    /// Image URL used as the avatar.
    pub icon_url: Option<Url>,
    pub text: Option<String>,
    /// Set `Some(false)` to disable mrkdwn formatting of the text.
    pub mrkdwn: Option<bool>,
    /// Set `Some(false)` to disable unfurling of media links.
    pub unfurl_media: Option<bool>,
    /// Set `Some(true)` to enable unfurling of text links.
    pub unfurl_links: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A rich-content block within a [Message].
///
/// Serializes by the same rule as its parent: unset members are omitted.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attachment {
    /// Plaintext summary shown by clients that can't render the attachment.
    pub fallback: Option<String>,
    /// Sidebar colour, either `good`/`warning`/`danger` or a hex code.
    pub color: Option<String>,
    /// Text shown above the attachment itself.
    pub pretext: Option<String>,
    pub author_name: Option<String>,
    pub author_link: Option<Url>,
    pub author_icon: Option<Url>,
    pub title: Option<String>,
    pub title_link: Option<Url>,
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<AttachmentAction>,
    pub image_url: Option<Url>,
    pub thumb_url: Option<Url>,
    pub footer: Option<String>,
    pub footer_icon: Option<Url>,
    /// Unix timestamp shown alongside the footer.
    #[serde(rename = "ts")]
    pub timestamp: Option<i64>,
    /// Which members should be rendered as mrkdwn. Valid values are
    /// `pretext`, `text` and `fields`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

/// A titled key-value pair within an [Attachment].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachmentField {
    pub title: Option<String>,
    pub value: Option<String>,
    /// Render the field inline alongside its neighbours. The platform treats
    /// an absent `short` as false, so false is elided from the wire form.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub short: bool,
}

/// An interactive element within an [Attachment], e.g. a link button.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachmentAction {
    /// The action type, e.g. `button`.
    #[serde(rename = "type")]
    pub typ: Option<String>,
    /// Label shown on the action.
    pub text: Option<String>,
    pub url: Option<Url>,
    /// Visual treatment, e.g. `primary` or `danger`.
    pub style: Option<String>,
}
