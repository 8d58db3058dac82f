mod assignment;
mod conflicts;
mod stats;
mod types;

pub use types::{AssignOptions, CoverageStats, PlanEvent, SchedError};

use crate::model::{Day, PreferenceStore, Shift, WeekRoster, Workload};
use rand::Rng;

/// Scheduler : encapsule l'état d'une semaine en cours de planification
/// (registre d'employés, préférences, planning, charge).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scheduler {
    employees: Vec<String>,
    preferences: PreferenceStore,
    roster: WeekRoster,
    workload: Workload,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Employés dans leur ordre d'enregistrement.
    pub fn employees(&self) -> &[String] {
        &self.employees
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn roster(&self) -> &WeekRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut WeekRoster {
        &mut self.roster
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    pub fn workload_mut(&mut self) -> &mut Workload {
        &mut self.workload
    }

    /// Enregistre un employé. Les noms sont la clé d'identité : un doublon
    /// est rejeté sans modifier l'état.
    pub fn add_employee(&mut self, name: &str) -> Result<(), SchedError> {
        if self.employees.iter().any(|e| e == name) {
            return Err(SchedError::DuplicateEmployee(name.to_string()));
        }
        self.employees.push(name.to_string());
        Ok(())
    }

    /// Déclare (ou écrase) la préférence d'un employé pour un jour.
    ///
    /// Le filtrage des libellés invalides relève des frontières texte
    /// (chargeur, CLI) ; ici la liste est typée, seul le vide est rejeté.
    pub fn add_preference(
        &mut self,
        employee: &str,
        day: Day,
        shifts: &[Shift],
    ) -> Result<(), SchedError> {
        if !self.employees.iter().any(|e| e == employee) {
            return Err(SchedError::UnknownEmployee(employee.to_string()));
        }
        if shifts.is_empty() {
            return Err(SchedError::EmptyShiftList);
        }
        self.preferences.set(employee, day, shifts);
        Ok(())
    }

    /// Tournée complète d'affectation : remise à zéro, phase 1 (préférences),
    /// phase 2 (complément aléatoire des créneaux sous-dotés).
    ///
    /// Déterministe pour une même graine du générateur injecté.
    pub fn assign_shifts<R: Rng + ?Sized>(
        &mut self,
        opts: AssignOptions,
        rng: &mut R,
    ) -> Vec<PlanEvent> {
        assignment::assign_shifts(self, opts, rng)
    }

    /// Garantit au plus un créneau par employé et par jour. Idempotent.
    pub fn resolve_conflicts(&mut self) -> Vec<PlanEvent> {
        conflicts::resolve_conflicts(self)
    }

    /// Couverture et charge du planning courant.
    pub fn statistics(&self, opts: AssignOptions) -> CoverageStats {
        stats::coverage(self, opts)
    }
}
