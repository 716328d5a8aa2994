//! Feed frame codec.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};
use sicbo_core::config::FeedConfig;
use sicbo_core::errors::FeedError;
use sicbo_core::{RoundResult, UpcomingRound};

/// Message type of a game-data push frame.
const PUSH_FRAME: u64 = 5;
/// `cmd` of a finished-round announcement.
pub const CMD_ROUND_RESULT: u64 = 2006;
/// `cmd` of an upcoming-round announcement.
pub const CMD_UPCOMING_ROUND: u64 = 2005;
/// `cmd` sent to subscribe to the game channel.
pub const CMD_SUBSCRIBE: u64 = 2001;

const HEARTBEAT: &str = "2";

/// A decoded inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    RoundResult(RoundResult),
    UpcomingRound(UpcomingRound),
    /// Valid JSON that carries nothing the forecaster uses.
    Ignored,
}

#[derive(Deserialize)]
struct RoundPayload {
    sid: u64,
    d1: u32,
    d2: u32,
    d3: u32,
}

#[derive(Deserialize)]
struct UpcomingPayload {
    sid: u64,
    md5: String,
}

/// Decode one text frame.
///
/// Frames that are not push frames, or push frames with another `cmd`,
/// decode to [`FeedEvent::Ignored`]. A round-result frame without `d1` is
/// ignored as well. Invalid JSON, or a recognized `cmd` with missing or
/// mistyped fields, is [`FeedError::Malformed`]; dice outside 1..=6 are
/// [`FeedError::InvalidRound`].
pub fn decode_frame(line: &str) -> Result<FeedEvent, FeedError> {
    let frame: Value = serde_json::from_str(line)?;

    let Some(data) = push_payload(&frame) else {
        return Ok(FeedEvent::Ignored);
    };

    match data.get("cmd").and_then(Value::as_u64) {
        Some(CMD_ROUND_RESULT) if data.get("d1").is_some() => {
            let payload = RoundPayload::deserialize(data)?;
            let round = RoundResult::new(payload.sid, [payload.d1, payload.d2, payload.d3])?;
            Ok(FeedEvent::RoundResult(round))
        }
        Some(CMD_UPCOMING_ROUND) => {
            let payload = UpcomingPayload::deserialize(data)?;
            Ok(FeedEvent::UpcomingRound(UpcomingRound {
                round_id: payload.sid,
                md5: payload.md5,
            }))
        }
        _ => Ok(FeedEvent::Ignored),
    }
}

/// The `d` object of a `[5, {"d": {...}}]` frame.
fn push_payload(frame: &Value) -> Option<&Value> {
    let items = frame.as_array()?;
    if items.len() != 2 || items[0].as_u64() != Some(PUSH_FRAME) {
        return None;
    }
    items[1].get("d").filter(|d| d.is_object())
}

/// Builds the outbound handshake frames from `[feed]` settings.
#[derive(Debug, Clone)]
pub struct FrameEncoder {
    plugin: String,
    agent_id: String,
    access_token: String,
    heartbeat_interval: Duration,
}

impl FrameEncoder {
    pub fn new(config: &FeedConfig) -> Self {
        Self {
            plugin: config.effective_plugin().to_string(),
            agent_id: config.effective_agent_id().to_string(),
            access_token: config.effective_access_token().to_string(),
            heartbeat_interval: Duration::from_secs(config.effective_heartbeat_secs()),
        }
    }

    /// `[1,"MiniGame","","",{"agentId":..,"accessToken":..,"reconnect":false}]`
    pub fn auth(&self) -> String {
        json!([
            1,
            "MiniGame",
            "",
            "",
            {
                "agentId": self.agent_id,
                "accessToken": self.access_token,
                "reconnect": false
            }
        ])
        .to_string()
    }

    /// `[6,"MiniGame",<plugin>,{"cmd":2001}]`
    pub fn subscribe(&self) -> String {
        json!([6, "MiniGame", self.plugin, { "cmd": CMD_SUBSCRIBE }]).to_string()
    }

    pub fn heartbeat(&self) -> &'static str {
        HEARTBEAT
    }

    pub fn heartbeat_interval(&self) -> Duration {
        self.heartbeat_interval
    }
}

impl Default for FrameEncoder {
    fn default() -> Self {
        Self::new(&FeedConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sicbo_core::{OutcomeError, Side};

    #[test]
    fn decodes_round_result() {
        let event =
            decode_frame(r#"[5,{"d":{"cmd":2006,"sid":510213,"d1":4,"d2":4,"d3":3}}]"#).unwrap();
        let FeedEvent::RoundResult(round) = event else {
            panic!("expected a round result, got {event:?}");
        };
        assert_eq!(round.round_id(), 510213);
        assert_eq!(round.dice(), [4, 4, 3]);
        assert_eq!(round.outcome().total(), 11);
        assert_eq!(round.outcome().side(), Side::High);
    }

    #[test]
    fn decodes_upcoming_round() {
        let event = decode_frame(r#"[5,{"d":{"cmd":2005,"sid":7,"md5":"abc"}}]"#).unwrap();
        assert_eq!(
            event,
            FeedEvent::UpcomingRound(UpcomingRound {
                round_id: 7,
                md5: "abc".to_string()
            })
        );
    }

    #[test]
    fn other_frames_are_ignored() {
        for line in [
            r#"[1,"MiniGame",true,null,{"status":"connected"}]"#,
            r#"[5,{"d":{"cmd":2001,"htr":[]}}]"#,
            r#"[5,{"d":"text"}]"#,
            r#"[5,{"d":{"cmd":2006,"sid":3}}]"#,
            r#"[7,"MiniGame",1,2]"#,
            r#"{"cmd":2006}"#,
            "2",
        ] {
            assert_eq!(decode_frame(line).unwrap(), FeedEvent::Ignored, "{line}");
        }
    }

    #[test]
    fn invalid_json_is_malformed() {
        assert!(matches!(
            decode_frame("not json at all"),
            Err(FeedError::Malformed(_))
        ));
    }

    #[test]
    fn missing_fields_are_malformed() {
        assert!(matches!(
            decode_frame(r#"[5,{"d":{"cmd":2006,"sid":1,"d1":2,"d2":3}}]"#),
            Err(FeedError::Malformed(_))
        ));
        assert!(matches!(
            decode_frame(r#"[5,{"d":{"cmd":2005,"sid":1}}]"#),
            Err(FeedError::Malformed(_))
        ));
    }

    #[test]
    fn impossible_dice_are_rejected() {
        assert!(matches!(
            decode_frame(r#"[5,{"d":{"cmd":2006,"sid":1,"d1":9,"d2":1,"d3":1}}]"#),
            Err(FeedError::InvalidRound(OutcomeError::FaceOutOfRange { face: 9 }))
        ));
    }

    #[test]
    fn encodes_handshake_from_config() {
        let config = FeedConfig {
            plugin: Some("customPlugin".to_string()),
            agent_id: Some("42".to_string()),
            access_token: Some("tok".to_string()),
            heartbeat_secs: Some(10),
        };
        let encoder = FrameEncoder::new(&config);
        assert_eq!(
            encoder.auth(),
            r#"[1,"MiniGame","","",{"accessToken":"tok","agentId":"42","reconnect":false}]"#
        );
        assert_eq!(encoder.subscribe(), r#"[6,"MiniGame","customPlugin",{"cmd":2001}]"#);
        assert_eq!(encoder.heartbeat(), "2");
        assert_eq!(encoder.heartbeat_interval(), Duration::from_secs(10));
    }

    #[test]
    fn default_encoder_uses_default_plugin() {
        let encoder = FrameEncoder::default();
        assert_eq!(encoder.subscribe(), r#"[6,"MiniGame","taixiuKCBPlugin",{"cmd":2001}]"#);
        assert_eq!(encoder.heartbeat_interval(), Duration::from_secs(25));
    }
}
