use super::{AssignOptions, CoverageStats, Scheduler};
use crate::model::{Day, Shift};

/// Dérive la couverture du planning courant. Aucune mutation, aucune erreur :
/// un planning vide ou sans employé donne simplement des compteurs à zéro.
pub(super) fn coverage(scheduler: &Scheduler, opts: AssignOptions) -> CoverageStats {
    let mut filled = 0usize;
    let mut understaffed = 0usize;
    let total = Day::ALL.len() * Shift::ALL.len();

    for day in Day::ALL {
        for shift in Shift::ALL {
            let count = scheduler.roster().slot(day, shift).len();
            if count > 0 {
                filled += 1;
            }
            if count < opts.min_per_shift {
                understaffed += 1;
            }
        }
    }

    let employees = scheduler.employees().len();
    let avg_days_per_employee = if employees == 0 {
        0.0
    } else {
        f64::from(scheduler.workload().total_days()) / employees as f64
    };

    CoverageStats {
        total_slots: total,
        filled_slots: filled,
        understaffed_slots: understaffed,
        employees,
        avg_days_per_employee,
    }
}
