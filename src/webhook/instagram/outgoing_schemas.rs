//! # Instagram Outgoing Message Schemas
//!
//! Data structures for the bodies POSTed to the Graph API messages endpoint.

use serde::{Deserialize, Serialize};

/// Message recipient reference
#[derive(Debug, Serialize, Deserialize)]
pub struct Recipient {
    /// Instagram-scoped user ID
    pub id: String,
}

/// Text message to send through the Graph API
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingTextMessage {
    /// Recipient of the message
    pub recipient: Recipient,
    /// Text content
    pub message: TextContent,
}

impl OutgoingTextMessage {
    /// Creates a new text message
    pub fn new(recipient_id: String, text: String) -> Self {
        Self {
            recipient: Recipient { id: recipient_id },
            message: TextContent { text },
        }
    }
}

/// Text content for outgoing messages
#[derive(Debug, Serialize, Deserialize)]
pub struct TextContent {
    /// Message body text
    pub text: String,
}

/// Attachment types accepted by the messages endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentType {
    Image,
    Audio,
    Video,
    /// The "like heart" sticker; the only type sent without a payload
    LikeHeart,
}

/// Attachment message to send through the Graph API
#[derive(Debug, Serialize, Deserialize)]
pub struct OutgoingAttachmentMessage {
    /// Recipient of the message
    pub recipient: Recipient,
    /// Attachment content
    pub message: AttachmentContent,
}

impl OutgoingAttachmentMessage {
    /// Creates a media attachment message pointing at a public URL
    pub fn new_media(recipient_id: String, attachment_type: AttachmentType, url: String) -> Self {
        Self {
            recipient: Recipient { id: recipient_id },
            message: AttachmentContent {
                attachment: Attachment {
                    attachment_type,
                    payload: Some(AttachmentPayload { url }),
                },
            },
        }
    }

    /// Creates a "like heart" sticker message; carries no payload
    pub fn new_sticker(recipient_id: String) -> Self {
        Self {
            recipient: Recipient { id: recipient_id },
            message: AttachmentContent {
                attachment: Attachment {
                    attachment_type: AttachmentType::LikeHeart,
                    payload: None,
                },
            },
        }
    }
}

/// Attachment content wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct AttachmentContent {
    /// The attachment itself
    pub attachment: Attachment,
}

/// Attachment descriptor
#[derive(Debug, Serialize, Deserialize)]
pub struct Attachment {
    /// Attachment type
    #[serde(rename = "type")]
    pub attachment_type: AttachmentType,
    /// Media payload; absent for sticker attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<AttachmentPayload>,
}

/// Media payload with a publicly reachable URL
#[derive(Debug, Serialize, Deserialize)]
pub struct AttachmentPayload {
    /// Public URL of the media
    pub url: String,
}

/// Acknowledgement returned by the Graph API when sending a message
#[derive(Debug, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// Instagram-scoped ID of the recipient
    pub recipient_id: String,
    /// ID of the message that was created
    pub message_id: String,
}
