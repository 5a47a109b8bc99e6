use super::lenient::{opt_f64, opt_text};
use crate::utils::date::parse_flexible_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One attendance entry as delivered by the attendance source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttendanceRecord {
    #[serde(rename = "ngay_cham_cong", default, deserialize_with = "opt_text")]
    pub attendance_date: Option<String>,
    #[serde(rename = "ngay", default, deserialize_with = "opt_text")]
    pub date: Option<String>,
    #[serde(default)]
    pub employee_did: String,
    #[serde(rename = "gio_vao", default, deserialize_with = "opt_text")]
    pub clock_in: Option<String>,
    #[serde(rename = "gio_ra", default, deserialize_with = "opt_text")]
    pub clock_out: Option<String>,
    #[serde(rename = "tong_gio_lam", default, deserialize_with = "opt_f64")]
    pub total_hours: Option<f64>,
    #[serde(rename = "gio_lam_them", default, deserialize_with = "opt_f64")]
    pub overtime_hours: Option<f64>,
    #[serde(rename = "trang_thai", default)]
    pub status: Option<AttendanceStatus>,
    #[serde(rename = "loai_ngay", default)]
    pub day_type: Option<DayType>,
    #[serde(rename = "xac_thuc_qua", default, deserialize_with = "opt_text")]
    pub verified_via: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub transaction_hash: Option<String>,
}

impl AttendanceRecord {
    /// Raw date following the `ngay_cham_cong` → `ngay` fallback chain.
    pub fn raw_date(&self) -> Option<&str> {
        self.attendance_date.as_deref().or(self.date.as_deref())
    }

    /// The single date every comparison and display uses.
    pub fn canonical_date(&self) -> Option<NaiveDate> {
        self.raw_date().and_then(parse_flexible_date)
    }

    pub fn total(&self) -> f64 {
        self.total_hours.unwrap_or(0.0)
    }

    pub fn overtime(&self) -> f64 {
        self.overtime_hours.unwrap_or(0.0)
    }

    pub fn is_on_chain(&self) -> bool {
        self.transaction_hash.is_some()
    }

    pub fn is_completed(&self) -> bool {
        self.status == Some(AttendanceStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    Completed,
    Absent,
    Leave,
    Sick,
    Other(String),
}

impl AttendanceStatus {
    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Completed => "Đã chấm công",
            AttendanceStatus::Absent => "Vắng mặt",
            AttendanceStatus::Leave => "Nghỉ phép",
            AttendanceStatus::Sick => "Nghỉ ốm",
            AttendanceStatus::Other(s) => s,
        }
    }
}

impl From<String> for AttendanceStatus {
    fn from(s: String) -> Self {
        let t = s.trim();
        match t.to_lowercase().as_str() {
            "đã chấm công" | "completed" => AttendanceStatus::Completed,
            "vắng mặt" | "absent" => AttendanceStatus::Absent,
            "nghỉ phép" | "leave" => AttendanceStatus::Leave,
            "nghỉ ốm" | "sick" => AttendanceStatus::Sick,
            _ => AttendanceStatus::Other(t.to_string()),
        }
    }
}

impl From<&str> for AttendanceStatus {
    fn from(s: &str) -> Self {
        AttendanceStatus::from(s.to_string())
    }
}

impl From<AttendanceStatus> for String {
    fn from(s: AttendanceStatus) -> Self {
        s.label().to_string()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DayType {
    Weekday,
    Weekend,
    Holiday,
    Other(String),
}

impl DayType {
    pub fn label(&self) -> &str {
        match self {
            DayType::Weekday => "Ngày thường",
            DayType::Weekend => "Cuối tuần",
            DayType::Holiday => "Lễ",
            DayType::Other(s) => s,
        }
    }
}

impl From<String> for DayType {
    fn from(s: String) -> Self {
        match s.trim() {
            "Ngày thường" => DayType::Weekday,
            "Cuối tuần" => DayType::Weekend,
            "Lễ" => DayType::Holiday,
            _ => DayType::Other(s),
        }
    }
}

impl From<DayType> for String {
    fn from(d: DayType) -> Self {
        d.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_full_record() {
        let r: AttendanceRecord = serde_json::from_value(json!({
            "ngay_cham_cong": "2025-09-01T00:00:00.000Z",
            "employee_did": "E1",
            "gio_vao": "08:01:12",
            "gio_ra": "17:30:00",
            "tong_gio_lam": "8.5",
            "gio_lam_them": 1.25,
            "trang_thai": "Đã chấm công",
            "loai_ngay": "Cuối tuần",
            "xac_thuc_qua": "Face ID",
            "transaction_hash": "0xdeadbeef"
        }))
        .unwrap();

        assert_eq!(r.canonical_date(), NaiveDate::from_ymd_opt(2025, 9, 1));
        assert_eq!(r.total(), 8.5);
        assert_eq!(r.overtime(), 1.25);
        assert!(r.is_completed());
        assert!(r.is_on_chain());
        assert_eq!(r.day_type, Some(DayType::Weekend));
    }

    #[test]
    fn absent_numbers_default_to_zero() {
        let r: AttendanceRecord = serde_json::from_value(json!({
            "employee_did": "E2",
            "tong_gio_lam": null,
            "gio_lam_them": "n/a",
            "transaction_hash": ""
        }))
        .unwrap();

        assert_eq!(r.total(), 0.0);
        assert_eq!(r.overtime(), 0.0);
        assert!(!r.is_on_chain());
        assert_eq!(r.status, None);
    }

    #[test]
    fn date_falls_back_to_secondary_field() {
        let r: AttendanceRecord =
            serde_json::from_value(json!({ "ngay": "2025-10-02", "employee_did": "E1" })).unwrap();
        assert_eq!(r.raw_date(), Some("2025-10-02"));
        assert_eq!(r.canonical_date(), NaiveDate::from_ymd_opt(2025, 10, 2));
    }

    #[test]
    fn status_accepts_english_aliases() {
        assert_eq!(AttendanceStatus::from("Completed"), AttendanceStatus::Completed);
        assert_eq!(AttendanceStatus::from("absent"), AttendanceStatus::Absent);
        assert_eq!(
            AttendanceStatus::from("Remote"),
            AttendanceStatus::Other("Remote".into())
        );
    }
}
