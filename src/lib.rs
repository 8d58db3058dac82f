#![forbid(unsafe_code)]
//! Semainier — bibliothèque de planification hebdomadaire locale (sans BD).
//!
//! - Semaine fixe : 7 jours × 3 créneaux (Morning/Afternoon/Evening).
//! - Placement par préférences, puis complément aléatoire des créneaux
//!   sous-dotés (générateur injectable, reproductible par graine).
//! - Résolution des doublons jour par jour, statistiques de couverture.
//! - Chargement de préférences depuis un fichier délimité.

pub mod io;
pub mod model;
pub mod render;
pub mod scheduler;

pub use io::{load_preferences_csv, LineSkip, LoadReport};
pub use model::{Day, PreferenceStore, Shift, WeekRoster, Workload};
pub use render::{EventRenderer, RosterReport, TextEvents};
pub use scheduler::{AssignOptions, CoverageStats, PlanEvent, SchedError, Scheduler};
