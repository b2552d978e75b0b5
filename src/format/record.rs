//! Boxed multi-line record rendering.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::OnlineModel;

/// Top and bottom border of a rendered record.
pub const RECORD_BORDER: &str = "+-------------------------------------------------+";

const NULL: &str = "null";

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Serialize a value as single-line JSON.
pub fn to_compact_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| NULL.to_string())
}

fn or_null<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| NULL.to_string(), ToString::to_string)
}

fn json_or_null<T: Serialize>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| NULL.to_string(), to_compact_json)
}

/// Render an online model as labeled lines inside an ASCII box.
///
/// The first and last lines are blank so consecutive records stay apart.
pub fn format_online_model(model: &OnlineModel) -> Vec<String> {
    let fields: [(&str, String); 20] = [
        ("Project", model.project.clone()),
        ("Name", model.name.clone()),
        ("Version", or_null(&model.version)),
        ("Owner", or_null(&model.owner)),
        (
            "CreateTime",
            model
                .created_time
                .as_ref()
                .map_or_else(|| NULL.to_string(), format_datetime),
        ),
        (
            "LastModifiedTime",
            model
                .last_modified_time
                .as_ref()
                .map_or_else(|| NULL.to_string(), format_datetime),
        ),
        ("OfflineModelProject", or_null(&model.offline_model_project)),
        ("OfflineModelName", or_null(&model.offline_model_name)),
        ("OfflineModelId", or_null(&model.offline_model_id)),
        ("ApplyResource", json_or_null(&model.apply_resource)),
        ("UsedResource", json_or_null(&model.used_resource)),
        ("QOS", json_or_null(&model.apply_qos)),
        ("InstanceNum", or_null(&model.instance_num)),
        ("Status", or_null(&model.status)),
        ("ServiceTag", or_null(&model.service_tag)),
        ("ServiceName", or_null(&model.service_name)),
        ("LastFailMsg", or_null(&model.last_fail_msg)),
        ("ABTest", or_null(&model.ab_test)),
        ("PredictDesc", or_null(&model.predict_desc)),
        ("Runtime", or_null(&model.runtime)),
    ];

    let mut lines = Vec::with_capacity(fields.len() + 4);
    lines.push(String::new());
    lines.push(RECORD_BORDER.to_string());
    for (label, value) in fields {
        lines.push(format!("| {label}: {value}"));
    }
    lines.push(RECORD_BORDER.to_string());
    lines.push(String::new());
    lines
}
