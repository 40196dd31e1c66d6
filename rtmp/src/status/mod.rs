//! Playback and session status values delivered to clients via `onStatus`.
//!
//! # Examples
//!
//! ```
//! use rml_rtmp_channels::status::{codes, Status, StatusLevel};
//!
//! let status = Status::new(codes::NS_PLAY_STREAMNOTFOUND, "No stream named 'abc'")
//!     .with_details("abc");
//!
//! assert_eq!(status.level(), StatusLevel::Error);
//! ```

pub mod codes;

use rml_amf0::Amf0Value;
use std::collections::HashMap;
use std::fmt;

/// The severity reported in the `level` property of a status object
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub enum StatusLevel {
    Status,
    Warning,
    Error,
}

impl StatusLevel {
    /// The level clients expect for a well known status code.  Codes that are not part of the
    /// error or warning vocabulary are plain status notifications.
    pub fn for_code(code: &str) -> StatusLevel {
        match code {
            codes::NC_CALL_FAILED
            | codes::NC_CALL_BADVERSION
            | codes::NC_CONNECT_APPSHUTDOWN
            | codes::NC_CONNECT_FAILED
            | codes::NC_CONNECT_REJECTED
            | codes::NC_CONNECT_INVALID_APPLICATION
            | codes::NS_INVALID_ARGUMENT
            | codes::NS_CLEAR_FAILED
            | codes::NS_PUBLISH_BADNAME
            | codes::NS_FAILED
            | codes::NS_RECORD_NOACCESS
            | codes::NS_RECORD_FAILED
            | codes::NS_PLAY_STREAMNOTFOUND
            | codes::NS_PLAY_FAILED
            | codes::NS_PLAY_FILE_STRUCTURE_INVALID
            | codes::NS_PLAY_NO_SUPPORTED_TRACK_FOUND
            | codes::NS_SEEK_FAILED
            | codes::APP_SCRIPT_ERROR
            | codes::SO_NO_READ_ACCESS
            | codes::SO_NO_WRITE_ACCESS
            | codes::SO_CREATION_FAILED
            | codes::SO_PERSISTENCE_MISMATCH => StatusLevel::Error,

            codes::NS_PLAY_INSUFFICIENT_BW
            | codes::APP_SCRIPT_WARNING
            | codes::APP_RESOURCE_LOWMEMORY => StatusLevel::Warning,

            _ => StatusLevel::Status,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            StatusLevel::Status => "status",
            StatusLevel::Warning => "warning",
            StatusLevel::Error => "error",
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable status notification (code, description and any auxiliary data)
#[derive(PartialEq, Debug, Clone)]
pub struct Status {
    code: String,
    level: StatusLevel,
    description: String,
    details: Option<String>,
    client_id: Option<u32>,
    additional_properties: HashMap<String, Amf0Value>,
}

impl Status {
    /// Creates a status with the level clients expect for the given code
    pub fn new(code: &str, description: &str) -> Status {
        Status {
            code: code.to_string(),
            level: StatusLevel::for_code(code),
            description: description.to_string(),
            details: None,
            client_id: None,
            additional_properties: HashMap::new(),
        }
    }

    pub fn with_level(mut self, level: StatusLevel) -> Status {
        self.level = level;
        self
    }

    pub fn with_details(mut self, details: &str) -> Status {
        self.details = Some(details.to_string());
        self
    }

    pub fn with_client_id(mut self, client_id: u32) -> Status {
        self.client_id = Some(client_id);
        self
    }

    /// Attaches an extra property to the status object.  Properties that collide with
    /// the standard status keys are ignored when the object is rendered.
    pub fn with_property(mut self, name: &str, value: Amf0Value) -> Status {
        self.additional_properties.insert(name.to_string(), value);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn level(&self) -> StatusLevel {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn client_id(&self) -> Option<u32> {
        self.client_id
    }

    /// Renders the status as the amf0 object sent as the argument of an `onStatus` command
    pub fn to_amf0_object(&self) -> Amf0Value {
        let mut properties = self.additional_properties.clone();
        properties.insert("level".to_string(), Amf0Value::Utf8String(self.level.as_str().to_string()));
        properties.insert("code".to_string(), Amf0Value::Utf8String(self.code.clone()));
        properties.insert("description".to_string(), Amf0Value::Utf8String(self.description.clone()));

        match self.details {
            Some(ref details) => {
                properties.insert("details".to_string(), Amf0Value::Utf8String(details.clone()));
            }
            None => {
                properties.remove("details");
            }
        }

        match self.client_id {
            Some(client_id) => {
                properties.insert("clientid".to_string(), Amf0Value::Number(client_id as f64));
            }
            None => {
                properties.remove("clientid");
            }
        }

        Amf0Value::Object(properties)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.level, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_properties(value: Amf0Value) -> HashMap<String, Amf0Value> {
        match value {
            Amf0Value::Object(properties) => properties,
            x => panic!("Expected an amf0 object but got {:?}", x),
        }
    }

    #[test]
    fn level_is_inferred_from_code() {
        assert_eq!(Status::new(codes::NS_PLAY_START, "").level(), StatusLevel::Status);
        assert_eq!(Status::new(codes::NS_PLAY_FAILED, "").level(), StatusLevel::Error);
        assert_eq!(Status::new(codes::NS_PLAY_INSUFFICIENT_BW, "").level(), StatusLevel::Warning);
        assert_eq!(Status::new("Custom.Code", "").level(), StatusLevel::Status);
    }

    #[test]
    fn amf0_object_contains_standard_properties() {
        let status = Status::new(codes::NS_PLAY_START, "Started playing abc");
        let properties = get_properties(status.to_amf0_object());

        assert_eq!(properties.len(), 3, "Unexpected number of properties");
        assert_eq!(properties.get("level"), Some(&Amf0Value::Utf8String("status".to_string())), "Unexpected level value");
        assert_eq!(properties.get("code"), Some(&Amf0Value::Utf8String("NetStream.Play.Start".to_string())), "Unexpected code value");
        assert_eq!(properties.get("description"), Some(&Amf0Value::Utf8String("Started playing abc".to_string())), "Unexpected description value");
    }

    #[test]
    fn amf0_object_includes_details_and_client_id_when_set() {
        let status = Status::new(codes::NS_PLAY_RESET, "Reset")
            .with_details("abc")
            .with_client_id(15);

        let properties = get_properties(status.to_amf0_object());

        assert_eq!(properties.get("details"), Some(&Amf0Value::Utf8String("abc".to_string())));
        assert_eq!(properties.get("clientid"), Some(&Amf0Value::Number(15.0)));
    }

    #[test]
    fn additional_properties_cannot_override_standard_keys() {
        let status = Status::new(codes::NS_PLAY_START, "Started")
            .with_property("code", Amf0Value::Utf8String("bogus".to_string()))
            .with_property("details", Amf0Value::Utf8String("bogus".to_string()))
            .with_property("isFastPlay", Amf0Value::Boolean(false));

        let properties = get_properties(status.to_amf0_object());

        assert_eq!(properties.get("code"), Some(&Amf0Value::Utf8String("NetStream.Play.Start".to_string())));
        assert_eq!(properties.get("details"), None);
        assert_eq!(properties.get("isFastPlay"), Some(&Amf0Value::Boolean(false)));
    }

    #[test]
    fn explicit_level_overrides_inferred_level() {
        let status = Status::new(codes::NS_PLAY_STOP, "Stopped").with_level(StatusLevel::Warning);

        assert_eq!(status.level(), StatusLevel::Warning);
    }
}
