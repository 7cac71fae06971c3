//! Switch small points of formatting between the two supported platforms.
//!
//! Slack and Mattermost accept the same webhook payload but differ in
//! message syntax, notably user mentions. See
//! <https://api.slack.com/reference/surfaces/formatting#mentioning-users>
//! and <https://docs.mattermost.com/collaborate/mention-people.html>.

/// The platform on the receiving end of the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Slack,
    Mattermost,
}

impl Dialect {
    /// Render a user mention the way the platform expects. An empty username
    /// renders to nothing at all.
    ///
    /// ```
    /// use iris::Dialect;
    ///
    /// assert_eq!(Dialect::Slack.mention("foo"), "<@foo>");
    /// assert_eq!(Dialect::Mattermost.mention("foo"), "@foo");
    /// ```
    pub fn mention(&self, username: &str) -> String {
        if username.is_empty() {
            return String::new();
        }

        match self {
            Dialect::Slack => format!("<@{}>", username),
            Dialect::Mattermost => format!("@{}", username),
        }
    }
}
