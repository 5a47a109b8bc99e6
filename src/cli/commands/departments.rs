use crate::cli::commands::{load_snapshot, report_duplicates};
use crate::config::Config;
use crate::core::{DepartmentView, ManagerResolution, department_views};
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, PositionRank};
use crate::ui::messages::{field, header, info};
use crate::utils::table::Table;

/// Handle the `departments` subcommand: overview, or one department in detail.
pub async fn handle(id: Option<&str>, cfg: &Config) -> AppResult<()> {
    let snapshot = load_snapshot(cfg).await;
    let dir = snapshot.directory();
    report_duplicates(&dir);

    let views = department_views(&dir, &snapshot.employees, &snapshot.departments);

    match id {
        Some(id) => {
            let view = views
                .iter()
                .find(|v| v.department.id == id)
                .ok_or_else(|| AppError::DepartmentNotFound(id.to_string()))?;
            print_detail(view, &snapshot.employees);
        }
        None => print_overview(&views),
    }
    Ok(())
}

fn print_overview(views: &[DepartmentView<'_>]) {
    header("Departments");
    if views.is_empty() {
        info("No departments loaded.");
        return;
    }

    let mut table = Table::new(&["id", "name", "members", "manager"]);
    for v in views {
        table.add_row(vec![
            v.department.id.clone(),
            v.department.display_name().to_string(),
            v.member_count().to_string(),
            v.manager.label(),
        ]);
    }
    print!("{}", table.render());
}

fn print_detail(view: &DepartmentView<'_>, employees: &[Employee]) {
    let d = view.department;

    header(format!("Department {}", d.id));
    field("Name", d.display_name());
    field("Description", d.description.as_deref().unwrap_or("--"));
    field("Manager", manager_line(&view.manager));
    field("Members", view.member_count());
    println!();

    if view.members.is_empty() {
        info("No members.");
    } else {
        let mut table = Table::new(&["did", "name", "position", "status", "role"]);
        for m in &view.members {
            table.add_row(vec![
                m.did.clone(),
                m.display_name().to_string(),
                m.position.clone().unwrap_or_else(|| "--".into()),
                m.status
                    .as_ref()
                    .map(|s| s.label().to_string())
                    .unwrap_or_else(|| "--".into()),
                role(view, m).to_string(),
            ]);
        }
        print!("{}", table.render());
    }

    let candidates = view.candidates(employees);
    println!();
    info(format!("{} employee(s) available for assignment", candidates.len()));
}

fn manager_line(manager: &ManagerResolution<'_>) -> String {
    match manager {
        ManagerResolution::Outsider(e) => format!(
            "{} (member of {})",
            manager.label(),
            e.department_id.as_deref().unwrap_or("no department")
        ),
        ManagerResolution::Missing(_) => format!("{} (unknown employee)", manager.label()),
        _ => manager.label(),
    }
}

fn role(view: &DepartmentView<'_>, member: &Employee) -> &'static str {
    if view.is_manager(member) {
        return "Manager";
    }
    match member.rank() {
        PositionRank::Leadership => "Lead",
        PositionRank::Senior => "Senior",
        PositionRank::Staff => "",
    }
}
