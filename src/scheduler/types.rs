use crate::model::{Day, Shift};
use serde::Serialize;
use thiserror::Error;

/// Options d'affectation
#[derive(Debug, Clone, Copy)]
pub struct AssignOptions {
    /// Plafond de jours travaillés par employé et par semaine.
    pub max_days_per_week: u32,
    /// Effectif minimal attendu par créneau.
    pub min_per_shift: usize,
}

impl Default for AssignOptions {
    fn default() -> Self {
        Self {
            max_days_per_week: 5,
            min_per_shift: 2,
        }
    }
}

/// Rejets non fatals : l'opération fautive est ignorée, l'exécution continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("employee already registered: {0}")]
    DuplicateEmployee(String),
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("no valid shift in preference list")]
    EmptyShiftList,
}

/// Événement structuré émis par les phases du moteur ; le rendu texte est
/// laissé à la couche de présentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanEvent {
    /// Phase 1 : placé sur son premier créneau préféré du jour.
    Preferred {
        employee: String,
        day: Day,
        shift: Shift,
    },
    /// Phase 2 : tiré au sort pour compléter un créneau sous-doté.
    Backfilled {
        employee: String,
        day: Day,
        shift: Shift,
    },
    /// Phase 2 : plus aucun candidat, le créneau reste sous-doté.
    Understaffed {
        day: Day,
        shift: Shift,
        missing: usize,
    },
    /// Résolution : doublon du jour retiré, premier créneau conservé.
    DuplicateResolved {
        employee: String,
        day: Day,
        kept: Shift,
        removed: Shift,
    },
}

/// Couverture et charge dérivées du planning final. Lecture seule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageStats {
    /// Nombre de cases de la semaine (7 × 3).
    pub total_slots: usize,
    /// Cases avec au moins un employé.
    pub filled_slots: usize,
    /// Cases sous le plancher d'effectif (une case pleine peut l'être aussi).
    pub understaffed_slots: usize,
    /// Employés enregistrés.
    pub employees: usize,
    /// Moyenne de jours travaillés par employé (0.0 sans employé).
    pub avg_days_per_employee: f64,
}
