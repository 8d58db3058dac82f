use super::{PlanEvent, Scheduler};
use crate::model::{Day, Shift};
use std::collections::BTreeSet;

/// Résolution des doublons, jour par jour : un employé présent sur plusieurs
/// créneaux du même jour est conservé sur le premier créneau (ordre
/// canonique) et retiré des suivants, un jour travaillé décompté par retrait.
///
/// Deux jours différents ne sont jamais en conflit entre eux. Rejouer la
/// résolution sur un planning déjà résolu ne change rien.
pub(super) fn resolve_conflicts(scheduler: &mut Scheduler) -> Vec<PlanEvent> {
    let mut events = Vec::new();

    for day in Day::ALL {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut duplicates: BTreeSet<String> = BTreeSet::new();
        for employee in scheduler.roster.employees_on(day) {
            if !seen.insert(employee.to_string()) {
                duplicates.insert(employee.to_string());
            }
        }

        for employee in duplicates {
            let mut kept: Option<Shift> = None;
            for shift in Shift::ALL {
                if !scheduler.roster.contains(day, shift, &employee) {
                    continue;
                }
                match kept {
                    None => kept = Some(shift),
                    Some(kept_shift) => {
                        // Retire toutes les occurrences résiduelles du créneau.
                        while scheduler.roster.remove(day, shift, &employee) {
                            scheduler.workload.decrement(&employee);
                            events.push(PlanEvent::DuplicateResolved {
                                employee: employee.clone(),
                                day,
                                kept: kept_shift,
                                removed: shift,
                            });
                        }
                    }
                }
            }
        }
    }

    events
}
