use super::{AssignOptions, PlanEvent, Scheduler};
use crate::model::{Day, Shift};
use rand::seq::SliceRandom;
use rand::Rng;

pub(super) fn assign_shifts<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
    rng: &mut R,
) -> Vec<PlanEvent> {
    scheduler.roster.clear();
    scheduler.workload.clear();

    let mut events = Vec::new();
    place_preferred(scheduler, opts, &mut events);
    backfill(scheduler, opts, rng, &mut events);
    events
}

/// Phase 1 : parcourt les employés dans l'ordre d'enregistrement puis les
/// jours dans l'ordre canonique, et place chacun sur le premier créneau de sa
/// liste de préférences. Les alternatives déclarées ne sont pas consommées.
fn place_preferred(scheduler: &mut Scheduler, opts: AssignOptions, events: &mut Vec<PlanEvent>) {
    let employees = scheduler.employees.clone();
    for employee in &employees {
        for day in Day::ALL {
            let Some(&shift) = scheduler
                .preferences
                .get(employee, day)
                .and_then(|prefs| prefs.first())
            else {
                continue;
            };

            if scheduler.workload.days_worked(employee) >= opts.max_days_per_week {
                continue;
            }
            // Jamais vrai dans cette phase (un seul passage par employé),
            // mais c'est la même garde que la phase 2.
            if scheduler.workload.is_assigned_on(employee, day) {
                continue;
            }

            scheduler.roster.push(day, shift, employee.clone());
            scheduler.workload.record(employee, day);
            events.push(PlanEvent::Preferred {
                employee: employee.clone(),
                day,
                shift,
            });
        }
    }
}

/// Phase 2 : complète chaque créneau sous le plancher d'effectif en tirant
/// uniformément dans le vivier des employés encore plaçables ce jour-là.
fn backfill<R: Rng + ?Sized>(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
    rng: &mut R,
    events: &mut Vec<PlanEvent>,
) {
    for day in Day::ALL {
        for shift in Shift::ALL {
            let current = scheduler.roster.slot(day, shift).len();
            if current >= opts.min_per_shift {
                continue;
            }
            let needed = opts.min_per_shift - current;

            let mut pool: Vec<String> = scheduler
                .employees
                .iter()
                .filter(|e| {
                    scheduler.workload.days_worked(e) < opts.max_days_per_week
                        && !scheduler.workload.is_assigned_on(e, day)
                })
                .cloned()
                .collect();

            if pool.is_empty() {
                events.push(PlanEvent::Understaffed {
                    day,
                    shift,
                    missing: needed,
                });
                continue;
            }

            pool.shuffle(rng);
            for employee in pool.into_iter().take(needed) {
                scheduler.roster.push(day, shift, employee.clone());
                scheduler.workload.record(&employee, day);
                events.push(PlanEvent::Backfilled {
                    employee,
                    day,
                    shift,
                });
            }
        }
    }
}
