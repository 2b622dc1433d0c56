//! Request handlers: registry CRUD plus acknowledgement text.
//!
//! Thin by design. Handlers validate, call the notifier facade (which owns
//! persistence), and render the reply the host relays to the requester.
//! A not-found delete or duplicate create comes back as a user-visible
//! error, never as a fault.

use crate::core::BlockPoint;
use crate::notifier::ZoneNotifier;
use crate::store::KeyValueStore;
use crate::zones::ZoneRect;

use super::request::{parse_command, FormRequest, Request, RequestError};

/// Parse and apply a command payload.
///
/// `origin` is the requester's floored position; a created zone is centered
/// there.
pub fn handle_command<B: KeyValueStore>(
    notifier: &mut ZoneNotifier<B>,
    origin: BlockPoint,
    event: &str,
    payload: &str,
) -> Result<String, RequestError> {
    apply(notifier, origin, parse_command(event, payload)?)
}

/// Validate and apply a form submission.
pub fn handle_form<B: KeyValueStore>(
    notifier: &mut ZoneNotifier<B>,
    origin: BlockPoint,
    form: FormRequest,
) -> Result<String, RequestError> {
    apply(notifier, origin, Request::try_from(form)?)
}

/// Apply a validated request, returning the reply for the requester.
pub fn apply<B: KeyValueStore>(
    notifier: &mut ZoneNotifier<B>,
    origin: BlockPoint,
    request: Request,
) -> Result<String, RequestError> {
    match request {
        Request::Set {
            id,
            rx,
            rz,
            title,
            subtitle,
        } => {
            let rect = ZoneRect::new(origin, rx, rz);
            notifier.create_zone(id.clone(), rect, title, subtitle)?;
            log::debug!("zone '{id}' created at {origin} (r{rx}x{rz})");
            Ok(format!("Zone '{id}' set at {origin} with size {rx}x{rz}."))
        }

        Request::Delete { id } => {
            notifier.delete_zone(&id)?;
            Ok(format!("Zone '{id}' deleted."))
        }

        Request::List => {
            let registry = notifier.registry();
            if registry.is_empty() {
                return Ok("No zones registered.".to_owned());
            }

            let mut reply = format!("Zones ({}):", registry.len());
            for (id, zone) in registry.iter() {
                reply.push_str(&format!(
                    "\n  {id} @ {} size {}x{} \"{}\"",
                    zone.rect.center(),
                    zone.rect.rx,
                    zone.rect.rz,
                    zone.title
                ));
            }
            Ok(reply)
        }
    }
}
