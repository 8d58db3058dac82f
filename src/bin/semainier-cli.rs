#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use semainier::{io, render, AssignOptions, EventRenderer, RosterReport, Scheduler, TextEvents};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification hebdomadaire (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Graine du tirage de complément (reproductible) ; aléatoire sinon
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Affiche les événements d'affectation au fil de l'eau
    #[arg(long, global = true)]
    events: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Planifier la semaine à partir d'un jeu d'essai intégré
    Demo {
        #[arg(long, default_value_t = 5)]
        max_days: u32,
        #[arg(long, default_value_t = 2)]
        min_per_shift: usize,
    },

    /// Planifier la semaine à partir d'un fichier de préférences
    Plan {
        /// Fichier `employé,jour,créneau[,créneau...]`
        #[arg(long)]
        csv: String,
        #[arg(long, default_value_t = 5)]
        max_days: u32,
        #[arg(long, default_value_t = 2)]
        min_per_shift: usize,
        /// Export JSON du bilan (optionnel)
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
    #[cfg(not(feature = "logging"))]
    let _ = cli.log;

    let code = match cli.cmd {
        Commands::Demo {
            max_days,
            min_per_shift,
        } => {
            let mut scheduler = Scheduler::new();
            seed_demo(&mut scheduler);
            let opts = AssignOptions {
                max_days_per_week: max_days,
                min_per_shift,
            };
            plan_and_print(&mut scheduler, opts, cli.seed, cli.events, None)?
        }
        Commands::Plan {
            csv,
            max_days,
            min_per_shift,
            out_json,
        } => {
            let mut scheduler = Scheduler::new();
            let report = io::load_preferences_csv(&mut scheduler, &csv)?;
            for skip in &report.skipped {
                eprintln!("Warning: line {} skipped: {}", skip.line, skip.reason);
            }
            println!(
                "Loaded {} employee(s) with {} preference(s)",
                report.employees_added, report.preferences_loaded
            );
            if scheduler.employees().is_empty() {
                bail!("no employees loaded from {csv}");
            }
            let opts = AssignOptions {
                max_days_per_week: max_days,
                min_per_shift,
            };
            plan_and_print(&mut scheduler, opts, cli.seed, cli.events, out_json.as_deref())?
        }
    };

    std::process::exit(code);
}

/// Tournée complète puis rendu : planning, récapitulatif, statistiques.
/// Code 2 = planning établi mais incomplet (créneaux sous-dotés).
fn plan_and_print(
    scheduler: &mut Scheduler,
    opts: AssignOptions,
    seed: Option<u64>,
    show_events: bool,
    out_json: Option<&str>,
) -> Result<i32> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut events = scheduler.assign_shifts(opts, &mut rng);
    events.extend(scheduler.resolve_conflicts());

    if show_events {
        let renderer = TextEvents;
        for event in &events {
            println!("{}", renderer.render(event));
        }
        println!();
    }

    print!("{}", render::schedule_text(scheduler, opts));
    println!("Work summary:");
    print!("{}", render::work_summary_text(scheduler, opts));
    println!();
    let stats = scheduler.statistics(opts);
    print!("{}", render::stats_text(&stats));

    if let Some(path) = out_json {
        let report = RosterReport::new(scheduler, opts);
        io::export_report_json(path, &report)?;
    }

    Ok(if stats.understaffed_slots > 0 { 2 } else { 0 })
}

/// Jeu d'essai : huit employés et leurs préférences types.
fn seed_demo(scheduler: &mut Scheduler) {
    use semainier::Day::*;
    use semainier::Shift::*;

    let prefs: &[(&str, semainier::Day, &[semainier::Shift])] = &[
        ("Alice", Monday, &[Morning, Afternoon]),
        ("Alice", Wednesday, &[Morning]),
        ("Alice", Friday, &[Afternoon]),
        ("Bob", Monday, &[Morning]),
        ("Bob", Tuesday, &[Afternoon]),
        ("Bob", Thursday, &[Evening]),
        ("Bob", Saturday, &[Morning]),
        ("Charlie", Tuesday, &[Morning, Afternoon]),
        ("Charlie", Wednesday, &[Afternoon]),
        ("Charlie", Friday, &[Morning]),
        ("Charlie", Sunday, &[Afternoon]),
        ("Diana", Monday, &[Afternoon]),
        ("Diana", Wednesday, &[Evening]),
        ("Diana", Thursday, &[Morning]),
        ("Diana", Saturday, &[Afternoon]),
        ("Eve", Tuesday, &[Evening]),
        ("Eve", Thursday, &[Afternoon]),
        ("Eve", Friday, &[Evening]),
        ("Eve", Sunday, &[Morning]),
        ("Frank", Monday, &[Evening]),
        ("Frank", Wednesday, &[Morning]),
        ("Frank", Friday, &[Afternoon]),
        ("Frank", Saturday, &[Evening]),
        ("Grace", Tuesday, &[Morning]),
        ("Grace", Thursday, &[Morning]),
        ("Grace", Friday, &[Evening]),
        ("Grace", Sunday, &[Afternoon]),
        ("Henry", Monday, &[Morning]),
        ("Henry", Wednesday, &[Afternoon]),
        ("Henry", Thursday, &[Evening]),
        ("Henry", Saturday, &[Morning]),
    ];

    for (name, day, shifts) in prefs {
        let _ = scheduler.add_employee(name);
        let _ = scheduler.add_preference(name, *day, shifts);
    }
}
