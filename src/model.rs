use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

/// Jour de la semaine (ensemble fermé, ordre canonique = ordre de déclaration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Correspondance exacte avec le libellé (sensible à la casse).
    pub fn parse(label: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|d| d.label() == label)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Créneau journalier (ensemble fermé ; l'ordre sert de départage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }

    /// Correspondance exacte avec le libellé (sensible à la casse).
    pub fn parse(label: &str) -> Option<Shift> {
        Shift::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Planning hebdomadaire : 7 × 3 cases, chacune une liste ordonnée d'employés.
///
/// L'ordre dans une case est l'ordre d'affectation, pas l'ordre alphabétique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekRoster {
    cells: [[Vec<String>; 3]; 7],
}

impl WeekRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vide toutes les cases (début de chaque tournée d'affectation).
    pub fn clear(&mut self) {
        for day in &mut self.cells {
            for cell in day {
                cell.clear();
            }
        }
    }

    pub fn slot(&self, day: Day, shift: Shift) -> &[String] {
        &self.cells[day as usize][shift as usize]
    }

    pub fn push(&mut self, day: Day, shift: Shift, employee: String) {
        self.cells[day as usize][shift as usize].push(employee);
    }

    pub fn contains(&self, day: Day, shift: Shift, employee: &str) -> bool {
        self.slot(day, shift).iter().any(|e| e == employee)
    }

    /// Retire la première occurrence de l'employé dans la case. `true` si retiré.
    pub fn remove(&mut self, day: Day, shift: Shift, employee: &str) -> bool {
        let cell = &mut self.cells[day as usize][shift as usize];
        match cell.iter().position(|e| e == employee) {
            Some(pos) => {
                cell.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Tous les employés du jour, créneaux parcourus en ordre canonique.
    pub fn employees_on(&self, day: Day) -> impl Iterator<Item = &str> {
        Shift::ALL
            .into_iter()
            .flat_map(move |shift| self.slot(day, shift).iter().map(String::as_str))
    }

    /// Jours distincts où l'employé apparaît, tous créneaux confondus.
    pub fn days_of(&self, employee: &str) -> BTreeSet<Day> {
        Day::ALL
            .into_iter()
            .filter(|day| self.employees_on(*day).any(|e| e == employee))
            .collect()
    }
}

/// Charge de travail courante : jours travaillés et jours déjà affectés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workload {
    days_worked: HashMap<String, u32>,
    assigned_days: HashMap<String, BTreeSet<Day>>,
}

impl Workload {
    pub fn clear(&mut self) {
        self.days_worked.clear();
        self.assigned_days.clear();
    }

    pub fn days_worked(&self, employee: &str) -> u32 {
        self.days_worked.get(employee).copied().unwrap_or(0)
    }

    pub fn is_assigned_on(&self, employee: &str, day: Day) -> bool {
        self.assigned_days
            .get(employee)
            .is_some_and(|days| days.contains(&day))
    }

    /// Enregistre une affectation : +1 jour travaillé, jour marqué pris.
    pub fn record(&mut self, employee: &str, day: Day) {
        *self.days_worked.entry(employee.to_string()).or_insert(0) += 1;
        self.assigned_days
            .entry(employee.to_string())
            .or_default()
            .insert(day);
    }

    /// Annule un jour travaillé (résolution de doublon) sans libérer le jour :
    /// l'employé reste affecté sur le créneau conservé.
    pub fn decrement(&mut self, employee: &str) {
        if let Some(count) = self.days_worked.get_mut(employee) {
            *count = count.saturating_sub(1);
        }
    }

    pub fn total_days(&self) -> u32 {
        self.days_worked.values().sum()
    }
}

/// Préférences déclarées : (employé, jour) → liste ordonnée de créneaux acceptés.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceStore {
    by_employee: HashMap<String, BTreeMap<Day, Vec<Shift>>>,
}

impl PreferenceStore {
    /// Écrase la préférence (employé, jour). Les doublons de créneau sont
    /// retirés en conservant la première occurrence.
    pub fn set(&mut self, employee: &str, day: Day, shifts: &[Shift]) {
        let mut deduped: Vec<Shift> = Vec::with_capacity(shifts.len());
        for shift in shifts {
            if !deduped.contains(shift) {
                deduped.push(*shift);
            }
        }
        self.by_employee
            .entry(employee.to_string())
            .or_default()
            .insert(day, deduped);
    }

    pub fn get(&self, employee: &str, day: Day) -> Option<&[Shift]> {
        self.by_employee
            .get(employee)
            .and_then(|days| days.get(&day))
            .map(Vec::as_slice)
    }
}
