use serde::{Deserialize, Serialize};

/// A customer review with an optional manager reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub author: String,
    pub rating: u8,
    pub text: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReviewReply>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewReply {
    pub author: String,
    pub text: String,
    pub created_at: String,
}

/// `POST /reviews` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub author: String,
    pub rating: u8,
    pub text: String,
}

/// `POST /reviews/{id}/reply` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRequest {
    pub reply: String,
    pub author: String,
}

/// `PATCH /reviews/{id}` body; only set fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
