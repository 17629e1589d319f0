//! Collaboration messages exchanged between reviewers of a comparison
//!
//! Messages are tagged JSON objects. Transport and room membership live
//! outside this crate; [`relay`] only decides what gets rebroadcast.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::annotate::ChangeId;

/// A reviewer comment, optionally pinned to a change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_id: Option<ChangeId>,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(room_id: impl Into<String>, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            change_id: None,
            author: author.into(),
            body: body.into(),
            created_at: Utc::now(),
        }
    }

    pub fn on_change(mut self, id: ChangeId) -> Self {
        self.change_id = Some(id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum CollabMessage {
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_id: String },

    /// Opaque client state shared with the rest of the room
    #[serde(rename_all = "camelCase")]
    CollaborationUpdate {
        room_id: String,
        payload: serde_json::Value,
    },

    NewComment { comment: Comment },

    BroadcastComment { comment: Comment },
}

impl CollabMessage {
    pub fn room_id(&self) -> &str {
        match self {
            CollabMessage::JoinRoom { room_id }
            | CollabMessage::CollaborationUpdate { room_id, .. } => room_id,
            CollabMessage::NewComment { comment } | CollabMessage::BroadcastComment { comment } => {
                &comment.room_id
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Message to send to the other members of the sender's room, if any.
///
/// Updates are forwarded unchanged and new comments go out as broadcasts.
/// Joins and broadcasts are not relayed.
pub fn relay(message: &CollabMessage) -> Option<CollabMessage> {
    match message {
        CollabMessage::JoinRoom { .. } | CollabMessage::BroadcastComment { .. } => None,
        CollabMessage::CollaborationUpdate { .. } => Some(message.clone()),
        CollabMessage::NewComment { comment } => Some(CollabMessage::BroadcastComment {
            comment: comment.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_room_json() {
        let message = CollabMessage::from_json(r#"{"event":"joinRoom","roomId":"doc-42"}"#).unwrap();

        assert_eq!(
            message,
            CollabMessage::JoinRoom {
                room_id: "doc-42".to_string()
            }
        );
        assert_eq!(message.room_id(), "doc-42");
        assert_eq!(relay(&message), None);
    }

    #[test]
    fn test_update_is_forwarded() {
        let message = CollabMessage::CollaborationUpdate {
            room_id: "doc-42".to_string(),
            payload: json!({ "focused": 3 }),
        };

        let value: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();
        assert_eq!(value["event"], "collaborationUpdate");
        assert_eq!(value["payload"]["focused"], 3);

        assert_eq!(relay(&message), Some(message));
    }

    #[test]
    fn test_new_comment_becomes_broadcast() {
        let comment = Comment::new("doc-42", "reviewer", "Why was this removed?").on_change(ChangeId(2));
        let message = CollabMessage::NewComment {
            comment: comment.clone(),
        };

        let relayed = relay(&message).unwrap();

        assert_eq!(relayed, CollabMessage::BroadcastComment { comment });
        assert_eq!(relayed.room_id(), "doc-42");
        assert_eq!(relay(&relayed), None);
    }

    #[test]
    fn test_comment_json_shape() {
        let comment = Comment::new("doc-42", "reviewer", "Looks good").on_change(ChangeId(7));
        let value = serde_json::to_value(CollabMessage::NewComment { comment }).unwrap();

        assert_eq!(value["event"], "newComment");
        assert_eq!(value["comment"]["roomId"], "doc-42");
        assert_eq!(value["comment"]["changeId"], 7);

        let unpinned = serde_json::to_value(Comment::new("doc-42", "a", "b")).unwrap();
        assert!(unpinned.get("changeId").is_none());
    }
}
