//! REST API endpoint implementations.
//!
//! Each resource module exposes free async functions taking an
//! [`ApiContext`]; [`crate::DatadogClient`] wraps them as methods.

mod boards;
mod downtimes;
mod hosts;
mod logs_pipelines;
mod monitors;
pub mod request;
mod roles;
mod screenboards;
mod slo;
mod synthetics;
pub mod url_encoding;

pub use boards::{create_board, delete_board, get_board, list_boards, update_board};
pub use downtimes::{
    create_downtime, delete_downtime, get_downtime, list_downtimes, update_downtime,
};
pub use hosts::{get_host_totals, mute_host, unmute_host};
pub use logs_pipelines::{
    create_logs_pipeline, delete_logs_pipeline, get_logs_pipeline, get_logs_pipeline_order,
    list_logs_pipelines, update_logs_pipeline, update_logs_pipeline_order,
};
pub use monitors::{
    create_monitor, delete_monitor, get_monitor, list_monitors, mute_all_monitors, mute_monitor,
    unmute_all_monitors, unmute_monitor, update_monitor,
};
pub use request::{ApiContext, NO_BODY, RetryPolicy, send_json, send_request_with_retry};
pub use roles::{
    create_role, delete_role, get_role, grant_permission, list_permissions,
    list_role_permissions, list_roles, revoke_permission,
};
pub use screenboards::{
    create_screenboard, delete_screenboard, get_screenboard, list_screenboards,
    revoke_screenboard, share_screenboard, update_screenboard,
};
pub use slo::{create_slo, delete_slo, get_slo, list_slos, update_slo};
pub use synthetics::{
    create_synthetics_test, delete_synthetics_tests, get_synthetics_test, list_synthetics_tests,
    set_synthetics_test_status, update_synthetics_test,
};
pub use url_encoding::encode_path_segment;
