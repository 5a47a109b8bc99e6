#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Snapshot files plus a config pointing at them, all inside one tempdir.
pub struct Fixture {
    pub dir: TempDir,
    pub config: PathBuf,
}

impl Fixture {
    /// The reference data set: one employee, one department, two attendance
    /// records (one completed, one by an unknown employee) and three logs.
    pub fn new() -> Self {
        Self::with_data(employees(), departments(), attendance(), logs())
    }

    pub fn with_data(employees: Value, departments: Value, attendance: Value, logs: Value) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        write_json(&root.join("employees.json"), &employees);
        write_json(&root.join("departments.json"), &departments);
        write_json(&root.join("attendance.json"), &attendance);
        write_json(&root.join("logs.json"), &logs);

        let config = root.join("rattendance.conf");
        let yaml = format!(
            "sources:\n  attendance: {a}\n  employees: {e}\n  departments: {d}\n  logs: {l}\nexport_dir: {x}\nsettings_file: {s}\n",
            a = root.join("attendance.json").display(),
            e = root.join("employees.json").display(),
            d = root.join("departments.json").display(),
            l = root.join("logs.json").display(),
            x = root.join("out").display(),
            s = root.join("settings.json").display(),
        );
        fs::write(&config, yaml).expect("write config");

        Self { dir, config }
    }

    /// Command with `--config` set and HOME pointed at the tempdir.
    pub fn cmd(&self) -> Command {
        let mut cmd = rat();
        cmd.env("HOME", self.dir.path())
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.path(name)).expect("remove snapshot file");
    }

    /// Files written into the export directory.
    pub fn exported(&self) -> Vec<PathBuf> {
        let out = self.path("out");
        if !out.exists() {
            return Vec::new();
        }
        let mut files: Vec<PathBuf> = fs::read_dir(out)
            .expect("read export dir")
            .map(|e| e.expect("dir entry").path())
            .collect();
        files.sort();
        files
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).expect("write snapshot");
}

pub fn employees() -> Value {
    json!({
        "message": "ok",
        "data": [
            { "employee_did": "E1", "ho_ten": "A", "phong_ban_id": "D1", "chuc_vu": "Sales Manager" },
            { "employee_did": "E3", "ho_ten": "Chi", "phong_ban_id": "D2", "chuc_vu": "Senior Engineer" }
        ]
    })
}

pub fn departments() -> Value {
    json!([
        { "phong_ban_id": "D1", "ten_phong_ban": "Sales", "truong_phong_did": "E1" },
        { "phong_ban_id": "D2", "ten_phong_ban": "Engineering", "truong_phong_did": "E9" }
    ])
}

pub fn attendance() -> Value {
    json!({
        "data": {
            "data": [
                {
                    "employee_did": "E1", "ngay_cham_cong": "2025-09-05",
                    "trang_thai": "Completed", "gio_lam_them": 1.5, "tong_gio_lam": 8,
                    "gio_vao": "08:00:00", "gio_ra": "17:00:00"
                },
                { "employee_did": "E2", "ngay": "2025-09-06", "trang_thai": "Absent" }
            ]
        }
    })
}

pub fn logs() -> Value {
    json!([
        {
            "transaction_hash": "0xAB01", "contract_address": "0xc0ffee",
            "function_name": "checkIn", "status": "Success", "gas_used": "21000",
            "block_number": 12, "timestamp": "2025-09-05T09:00:00Z",
            "event_logs": [ { "event": "CheckedIn", "data": { "employee": "E1" } } ]
        },
        {
            "transaction_hash": "0xcd02", "contract_address": "0xbeef",
            "function_name": "payroll", "status": "Failed", "gas_used": 5000,
            "createdAt": "2025-09-06 10:00:00"
        },
        {
            "transaction_hash": "0xef03", "contract_address": "0xc0ffee",
            "function_name": "checkOut", "status": "Pending"
        }
    ])
}
