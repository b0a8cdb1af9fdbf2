use rmp_serde::Serializer;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Frames exchanged on the presence channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WsMessage {
    /// A user came online (server -> client)
    Connect { info: String },
    /// A user went offline (server -> client)
    Disconnect { info: String },
    /// Something in your requests or friends changed, refresh (server -> client)
    ReceiveNotification,
    /// Ask the server to notify user `id` (client -> server)
    SendFollow { id: Uuid },
    /// Application-level heartbeat
    Ping,
    Pong,
    /// Error message from server
    Error { code: String, message: String },
}

/// Encoding a client asked for when it connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireFormat {
    #[default]
    Json,
    Msgpack,
}

pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
}

impl WsMessage {
    pub fn encode(&self, format: WireFormat) -> Result<Frame, String> {
        match format {
            WireFormat::Json => serde_json::to_string(self)
                .map(Frame::Text)
                .map_err(|e| format!("JSON encode error: {}", e)),
            WireFormat::Msgpack => {
                let mut buf = Vec::new();
                let mut serializer = Serializer::new(&mut buf).with_struct_map();
                self.serialize(&mut serializer)
                    .map_err(|e| format!("MessagePack encode error: {}", e))?;
                Ok(Frame::Binary(buf))
            }
        }
    }

    /// Parse a frame from either MessagePack bytes or a JSON string.
    pub fn decode(data: &[u8], is_binary: bool) -> Result<Self, String> {
        if is_binary {
            rmp_serde::from_slice(data).map_err(|e| format!("MessagePack parse error: {}", e))
        } else {
            serde_json::from_slice(data).map_err(|e| format!("JSON parse error: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape_is_adjacently_tagged() {
        let msg = WsMessage::Connect { info: "alice is online".to_string() };
        let Ok(Frame::Text(text)) = msg.encode(WireFormat::Json) else {
            panic!("expected a text frame");
        };
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "Connect");
        assert_eq!(value["payload"]["info"], "alice is online");

        let Ok(Frame::Text(text)) = WsMessage::ReceiveNotification.encode(WireFormat::Json) else {
            panic!("expected a text frame");
        };
        assert_eq!(text, r#"{"type":"ReceiveNotification"}"#);
    }

    #[test]
    fn test_decode_client_frames() {
        let id = Uuid::new_v4();
        let raw = format!(r#"{{"type":"SendFollow","payload":{{"id":"{}"}}}}"#, id);
        assert_eq!(
            WsMessage::decode(raw.as_bytes(), false).unwrap(),
            WsMessage::SendFollow { id }
        );
        assert_eq!(WsMessage::decode(br#"{"type":"Ping"}"#, false).unwrap(), WsMessage::Ping);
        assert!(WsMessage::decode(br#"{"type":"Nope"}"#, false).is_err());
    }

    #[test]
    fn test_msgpack_frames_are_binary() {
        let msg = WsMessage::Disconnect { info: "bob is offline".to_string() };
        let Ok(Frame::Binary(buf)) = msg.encode(WireFormat::Msgpack) else {
            panic!("expected a binary frame");
        };
        assert_eq!(WsMessage::decode(&buf, true).unwrap(), msg);
    }

    #[test]
    fn test_wire_format_from_query() {
        #[derive(Deserialize)]
        struct Q {
            #[serde(default)]
            format: WireFormat,
        }
        let q: Q = serde_json::from_str(r#"{"format":"msgpack"}"#).unwrap();
        assert_eq!(q.format, WireFormat::Msgpack);
        let q: Q = serde_json::from_str("{}").unwrap();
        assert_eq!(q.format, WireFormat::Json);
    }
}
