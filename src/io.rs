use crate::model::{Day, Shift};
use crate::render::RosterReport;
use crate::scheduler::Scheduler;
use anyhow::Context;
use csv::{ReaderBuilder, Trim};
use std::fs;
use std::path::Path;

/// Bilan d'un chargement : compteurs et lignes écartées (avertissements).
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub employees_added: usize,
    pub preferences_loaded: usize,
    pub skipped: Vec<LineSkip>,
}

/// Ligne écartée lors du chargement, avec son numéro dans le fichier.
#[derive(Debug, Clone)]
pub struct LineSkip {
    pub line: u64,
    pub reason: String,
}

/// Charge des préférences depuis un fichier délimité :
/// `employé,jour,créneau[,créneau...]`, une ligne par enregistrement.
///
/// Lignes vides et lignes `#` ignorées. Une ligne trop courte, un jour hors
/// ensemble ou une liste sans créneau valide écarte la ligne (avertissement)
/// sans interrompre le chargement ; seul un fichier illisible est une erreur.
/// La première occurrence d'un nom enregistre l'employé.
pub fn load_preferences_csv<P: AsRef<Path>>(
    scheduler: &mut Scheduler,
    path: P,
) -> anyhow::Result<LoadReport> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut report = LoadReport::default();

    for rec in rdr.records() {
        let rec = rec.with_context(|| format!("reading {}", path.display()))?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);

        if rec.iter().all(str::is_empty) {
            continue;
        }
        if rec.len() < 3 {
            report.skip(line, "insufficient fields (need employee,day,shift)");
            continue;
        }

        let employee = rec.get(0).unwrap_or_default();
        let day_raw = rec.get(1).unwrap_or_default();
        let Some(day) = Day::parse(day_raw) else {
            report.skip(line, format!("invalid day '{day_raw}'"));
            continue;
        };

        // Les libellés hors ensemble sont simplement filtrés.
        let shifts: Vec<Shift> = rec.iter().skip(2).filter_map(Shift::parse).collect();
        if shifts.is_empty() {
            report.skip(line, "no valid shifts");
            continue;
        }

        if scheduler.add_employee(employee).is_ok() {
            report.employees_added += 1;
        }
        if scheduler.add_preference(employee, day, &shifts).is_ok() {
            report.preferences_loaded += 1;
        }
    }

    Ok(report)
}

impl LoadReport {
    fn skip(&mut self, line: u64, reason: impl Into<String>) {
        self.skipped.push(LineSkip {
            line,
            reason: reason.into(),
        });
    }
}

/// Export JSON du bilan de planification (jolie mise en forme).
pub fn export_report_json<P: AsRef<Path>>(path: P, report: &RosterReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json)
        .with_context(|| format!("writing {}", path.as_ref().display()))?;
    Ok(())
}
