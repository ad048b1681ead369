//! open / close / validate / confirm for the alert dialog

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::{AlertDialog, AlertDialogState, ConfirmOutcome};
use hearth_ui::Region;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
struct Confirmation {
    confirmation: Option<String>,
}

pub fn routes(store: Store<AlertDialogState>, widget: AlertDialog, region: Region) -> Router {
    let mount = Mount::new(store, widget, region);
    Router::new()
        .route(&mount.path("open"), post(open))
        .route(&mount.path("close"), post(close))
        .route(&mount.path("validate"), post(validate))
        .route(&mount.path("confirm"), post(confirm))
        .with_state(mount)
}

async fn open(State(mount): State<Mount<AlertDialog>>) -> Result<Fragment> {
    let state = mount.update("open", |dialog, s| dialog.open(s));
    Ok(mount.fragment(&state))
}

async fn close(State(mount): State<Mount<AlertDialog>>) -> Result<Fragment> {
    let state = mount.update("close", |dialog, s| dialog.close(s));
    Ok(mount.fragment(&state))
}

/// Answers with only the out-of-band confirm button.
async fn validate(
    State(mount): State<Mount<AlertDialog>>,
    Params(req): Params<Confirmation>,
) -> Result<Fragment> {
    let submitted = req.confirmation.unwrap_or_default();
    let state = mount.update("validate", |dialog, s| {
        dialog.validate(s, &submitted);
    });
    Ok(Fragment::empty().oob(mount.widget.render_validation(&mount.region, &state)))
}

async fn confirm(
    State(mount): State<Mount<AlertDialog>>,
    Params(req): Params<Confirmation>,
) -> Result<Fragment> {
    let (outcome, state) = mount.update_with("confirm", |dialog, s| {
        dialog.confirm(s, req.confirmation.as_deref())
    });
    match outcome {
        ConfirmOutcome::Confirmed => {
            let fragment = mount.fragment(&state);
            Ok(match mount.widget.confirm_event.as_deref() {
                Some(event) => fragment.trigger(event),
                None => fragment,
            })
        }
        ConfirmOutcome::Rejected => {
            debug!(id = mount.id(), "Confirmation rejected");
            Ok(
                Fragment::new(mount.widget.render_rejected(&mount.region, &state))
                    .oob(mount.widget.rejection(&mount.region)),
            )
        }
    }
}
