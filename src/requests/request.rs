//! Request types and command payload parsing.
//!
//! The command surface mirrors what a player types after the host's command
//! prefix:
//!
//! ```text
//! zone:set <id> <rx> <rz> "<title>" "<subtitle>"
//! zone:del <id>
//! zone:list
//! ```
//!
//! Ids are word characters; titles and subtitles are quoted strings without
//! embedded unescaped quotes. The created zone is centered on the block the
//! requester stands on, which is why requests carry no center coordinates.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::core::ZoneId;
use crate::zones::RegistryError;

/// Command event name for creating a zone.
pub const SET_EVENT: &str = "zone:set";
/// Command event name for deleting a zone.
pub const DELETE_EVENT: &str = "zone:del";
/// Command event name for listing zones.
pub const LIST_EVENT: &str = "zone:list";

static SET_PAYLOAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(\w+)\s+(\d+)\s+(\d+)\s+"(.*?)"\s+"(.*?)"$"#)
        .expect("set payload pattern is valid")
});

/// A validated zone management request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Create a zone centered on the requester.
    Set {
        id: ZoneId,
        rx: u32,
        rz: u32,
        title: String,
        subtitle: String,
    },
    /// Delete a zone by id.
    Delete { id: ZoneId },
    /// List registered zones.
    List,
}

/// A submission from the form surface.
///
/// Field-for-field the same data as the command surface; hosts fill this
/// from their form UI and the engine lowers it into a [`Request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormRequest {
    /// Add a zone centered on the requester.
    Add {
        id: String,
        rx: u32,
        rz: u32,
        title: String,
        subtitle: String,
    },
    /// Remove a zone picked from the list.
    Remove { id: String },
    /// Show the zone list.
    List,
}

/// User-visible request failure.
///
/// The `Display` text is the reply shown to the requesting player. These
/// are expected usage outcomes, so none of them are warn-logged and none
/// mutate the registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("usage: zone:set <id> <rx> <rz> \"<title>\" \"<subtitle>\"")]
    SetUsage,

    #[error("usage: zone:del <id>")]
    DeleteUsage,

    #[error("zone id must not be empty")]
    EmptyId,

    #[error("unknown request '{0}'")]
    UnknownRequest(String),

    #[error("zone '{0}' already exists")]
    AlreadyExists(ZoneId),

    #[error("zone '{0}' not found")]
    NotFound(ZoneId),
}

impl From<RegistryError> for RequestError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::AlreadyExists(id) => Self::AlreadyExists(id),
            RegistryError::NotFound(id) => Self::NotFound(id),
        }
    }
}

/// Parse a command event plus free-text payload into a request.
pub fn parse_command(event: &str, payload: &str) -> Result<Request, RequestError> {
    match event {
        SET_EVENT => parse_set_payload(payload),
        DELETE_EVENT => {
            let id = payload.trim();
            if id.is_empty() {
                return Err(RequestError::DeleteUsage);
            }
            Ok(Request::Delete {
                id: ZoneId::new(id),
            })
        }
        LIST_EVENT => Ok(Request::List),
        other => Err(RequestError::UnknownRequest(other.to_owned())),
    }
}

fn parse_set_payload(payload: &str) -> Result<Request, RequestError> {
    let captures = SET_PAYLOAD
        .captures(payload.trim())
        .ok_or(RequestError::SetUsage)?;

    // Out-of-range radii (beyond u32) read as malformed input.
    let rx: u32 = captures[2].parse().map_err(|_| RequestError::SetUsage)?;
    let rz: u32 = captures[3].parse().map_err(|_| RequestError::SetUsage)?;

    Ok(Request::Set {
        id: ZoneId::new(&captures[1]),
        rx,
        rz,
        title: captures[4].to_owned(),
        subtitle: captures[5].to_owned(),
    })
}

impl TryFrom<FormRequest> for Request {
    type Error = RequestError;

    fn try_from(form: FormRequest) -> Result<Self, Self::Error> {
        match form {
            FormRequest::Add {
                id,
                rx,
                rz,
                title,
                subtitle,
            } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(RequestError::EmptyId);
                }
                Ok(Request::Set {
                    id: ZoneId::new(id),
                    rx,
                    rz,
                    title,
                    subtitle,
                })
            }
            FormRequest::Remove { id } => {
                let id = id.trim();
                if id.is_empty() {
                    return Err(RequestError::EmptyId);
                }
                Ok(Request::Delete {
                    id: ZoneId::new(id),
                })
            }
            FormRequest::List => Ok(Request::List),
        }
    }
}
