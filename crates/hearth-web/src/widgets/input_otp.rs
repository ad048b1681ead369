//! OTP verification route

use super::Mount;
use crate::error::Result;
use crate::fragment::Fragment;
use crate::params::Params;
use crate::store::Store;
use axum::extract::State;
use axum::routing::post;
use axum::Router;
use hearth_ui::components::input_otp::VERIFIED_EVENT;
use hearth_ui::components::InputOtp;
use hearth_ui::Region;
use std::collections::HashMap;
use tracing::debug;

pub fn routes(widget: InputOtp, region: Region) -> Router {
    let mount = Mount::new(Store::new(), widget, region);
    Router::new()
        .route(&mount.path("verify"), post(verify))
        .with_state(mount)
}

/// Always answers out of band; the cells keep their values for a retry.
async fn verify(
    State(mount): State<Mount<InputOtp>>,
    Params(fields): Params<HashMap<String, String>>,
) -> Result<Fragment> {
    let code = mount.widget.collect_code(&fields);
    let result = mount.widget.check_code(&code);
    debug!(id = mount.id(), accepted = result.is_ok(), "OTP verification");
    let fragment = Fragment::empty().oob(mount.widget.verdict(&mount.region, &result));
    Ok(match result {
        Ok(_) => fragment.trigger(VERIFIED_EVENT),
        Err(_) => fragment,
    })
}
