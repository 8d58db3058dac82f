use crate::model::{Day, Shift};
use crate::scheduler::{AssignOptions, CoverageStats, PlanEvent, Scheduler};
use serde::Serialize;

/// Permet de customiser le rendu des événements du moteur (texte, log, etc.).
pub trait EventRenderer {
    fn render(&self, event: &PlanEvent) -> String;
}

/// Rendu texte une-ligne-par-événement, destiné à la console.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextEvents;

impl EventRenderer for TextEvents {
    fn render(&self, event: &PlanEvent) -> String {
        match event {
            PlanEvent::Preferred {
                employee,
                day,
                shift,
            } => format!("Assigned {employee} to {day} - {shift}"),
            PlanEvent::Backfilled {
                employee,
                day,
                shift,
            } => format!("Randomly assigned {employee} to {day} - {shift}"),
            PlanEvent::Understaffed {
                day,
                shift,
                missing,
            } => format!("WARNING: {day} - {shift} still needs {missing} employee(s)"),
            PlanEvent::DuplicateResolved {
                employee,
                day,
                kept,
                removed,
            } => format!("Conflict on {day}: kept {employee} in {kept}, removed from {removed}"),
        }
    }
}

/// Planning hebdomadaire lisible, groupé jour puis créneau, avec effectifs et
/// marqueurs de sous-effectif.
pub fn schedule_text(scheduler: &Scheduler, opts: AssignOptions) -> String {
    let mut out = String::new();
    for day in Day::ALL {
        out.push_str(&format!("{}\n", day.label().to_uppercase()));
        for shift in Shift::ALL {
            let employees = scheduler.roster().slot(day, shift);
            let status = if employees.is_empty() {
                "UNDERSTAFFED".to_string()
            } else if employees.len() < opts.min_per_shift {
                format!("needs {} more", opts.min_per_shift - employees.len())
            } else {
                "ok".to_string()
            };
            out.push_str(&format!(
                "  {:<10} ({} employees) {}\n",
                shift.label(),
                employees.len(),
                status
            ));
            if !employees.is_empty() {
                out.push_str(&format!("             -> {}\n", employees.join(", ")));
            }
        }
        out.push('\n');
    }
    out
}

/// Récapitulatif de charge par employé, trié alphabétiquement.
pub fn work_summary_text(scheduler: &Scheduler, opts: AssignOptions) -> String {
    let mut names: Vec<&String> = scheduler.employees().iter().collect();
    names.sort();

    let mut out = String::new();
    for name in names {
        let days = scheduler.workload().days_worked(name);
        let marker = if days > opts.max_days_per_week {
            " OVER LIMIT"
        } else {
            ""
        };
        out.push_str(&format!("  {name:<20} {days} day(s){marker}\n"));
    }
    out
}

/// Bloc statistiques, un compteur par ligne.
pub fn stats_text(stats: &CoverageStats) -> String {
    format!(
        "Total shifts: {}\nFilled shifts: {}\nUnderstaffed shifts: {}\nTotal employees: {}\nAverage days per employee: {:.2}\n",
        stats.total_slots,
        stats.filled_slots,
        stats.understaffed_slots,
        stats.employees,
        stats.avg_days_per_employee
    )
}

/// Bilan sérialisable de la planification (export JSON côté CLI).
#[derive(Debug, Clone, Serialize)]
pub struct RosterReport {
    pub days: Vec<DayReport>,
    pub work_summary: Vec<EmployeeDays>,
    pub stats: CoverageStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayReport {
    pub day: Day,
    pub shifts: Vec<SlotReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SlotReport {
    pub shift: Shift,
    pub employees: Vec<String>,
    pub understaffed_by: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeDays {
    pub employee: String,
    pub days_worked: u32,
}

impl RosterReport {
    pub fn new(scheduler: &Scheduler, opts: AssignOptions) -> Self {
        let days = Day::ALL
            .into_iter()
            .map(|day| DayReport {
                day,
                shifts: Shift::ALL
                    .into_iter()
                    .map(|shift| {
                        let employees = scheduler.roster().slot(day, shift).to_vec();
                        SlotReport {
                            shift,
                            understaffed_by: opts.min_per_shift.saturating_sub(employees.len()),
                            employees,
                        }
                    })
                    .collect(),
            })
            .collect();

        let mut work_summary: Vec<EmployeeDays> = scheduler
            .employees()
            .iter()
            .map(|name| EmployeeDays {
                employee: name.clone(),
                days_worked: scheduler.workload().days_worked(name),
            })
            .collect();
        work_summary.sort_by(|a, b| a.employee.cmp(&b.employee));

        Self {
            days,
            work_summary,
            stats: scheduler.statistics(opts),
        }
    }
}
