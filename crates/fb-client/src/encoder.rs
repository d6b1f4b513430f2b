//! Payload encoders turning a [`FactRequest`] into an HTTP body.
//!
//! The facts API accepts the same fields either form-urlencoded or as JSON.
//! Which one is used is a configuration choice, see [`encoder_for`].

use fb_core::{FactRequest, PayloadEncoding};

use crate::error::ClientError;

/// Encoded request body plus the `Content-Type` to send it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub content_type: &'static str,
    pub body: String,
}

pub trait PayloadEncoder: Send + Sync {
    fn encoding(&self) -> PayloadEncoding;

    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if the request cannot be serialized.
    fn encode(&self, fact: &FactRequest) -> Result<EncodedBody, ClientError>;
}

/// `application/x-www-form-urlencoded`, keys sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormEncoder;

impl PayloadEncoder for FormEncoder {
    fn encoding(&self) -> PayloadEncoding {
        PayloadEncoding::Form
    }

    fn encode(&self, fact: &FactRequest) -> Result<EncodedBody, ClientError> {
        let mut fields = fact.fields();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        let body = fields
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        Ok(EncodedBody {
            content_type: PayloadEncoding::Form.content_type(),
            body,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl PayloadEncoder for JsonEncoder {
    fn encoding(&self) -> PayloadEncoding {
        PayloadEncoding::Json
    }

    fn encode(&self, fact: &FactRequest) -> Result<EncodedBody, ClientError> {
        let body = serde_json::to_string(fact).map_err(|e| ClientError::Encode(e.to_string()))?;
        Ok(EncodedBody {
            content_type: PayloadEncoding::Json.content_type(),
            body,
        })
    }
}

#[must_use]
pub fn encoder_for(encoding: PayloadEncoding) -> Box<dyn PayloadEncoder> {
    match encoding {
        PayloadEncoding::Form => Box::new(FormEncoder),
        PayloadEncoding::Json => Box::new(JsonEncoder),
    }
}
