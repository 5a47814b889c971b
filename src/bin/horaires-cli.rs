#![forbid(unsafe_code)]
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use horaires::{
    format_legacy_rows, format_week, io, legacy, Business, BusinessId, Day, Directory, Edge,
    HoursField, JsonStorage, Period, ScheduleEditor, Storage, TimeSlot,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI des horaires d'ouverture des commerces partenaires
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`, filtre via RUST_LOG)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de l'annuaire des commerces
    #[arg(
        long,
        global = true,
        env = "HORAIRES_DIRECTORY",
        default_value = "businesses.json"
    )]
    directory: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un commerce
    AddBusiness {
        #[arg(long)]
        name: String,
        /// Valeur initiale du champ horaires (texte libre ou encodage)
        #[arg(long)]
        horaires: Option<String>,
    },

    /// Importer des commerces depuis un CSV (`name,horaires`)
    Import {
        #[arg(long)]
        csv: String,
    },

    /// Lire un texte libre d'horaires
    Parse {
        #[arg(long)]
        text: String,
        /// Sortie JSON
        #[arg(long)]
        json: bool,
    },

    /// Afficher les horaires stockés d'un commerce, lus en texte libre
    Show {
        /// Identifiant ou nom
        #[arg(long)]
        business: String,
    },

    /// Modifier la semaine structurée d'un commerce
    Edit {
        /// Identifiant ou nom
        #[arg(long)]
        business: String,
        /// Jour à ouvrir/fermer (répétable)
        #[arg(long = "toggle-closed")]
        toggle_closed: Vec<String>,
        /// `JOUR:PERIODE:BORNE=HH:MM`, ex. `Lun:morning:start=08:30` (répétable)
        #[arg(long = "set")]
        set: Vec<String>,
    },

    /// Aperçu de la semaine structurée d'un commerce
    Preview {
        #[arg(long)]
        business: String,
    },

    /// Lister les heures proposées par l'éditeur
    TimeOptions,

    /// Exporter l'annuaire
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
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

    let storage = JsonStorage::open(&cli.directory);
    let mut directory = storage.load_or_default()?;

    match cli.cmd {
        Commands::AddBusiness { name, horaires } => {
            let mut business = Business::new(name);
            business.horaires = horaires;
            println!("{}", business.id.as_str());
            directory.businesses.push(business);
            storage.save(&directory)?;
        }
        Commands::Import { csv } => {
            let businesses = io::import_businesses_csv(csv)?;
            println!("imported {} business(es)", businesses.len());
            directory.businesses.extend(businesses);
            storage.save(&directory)?;
        }
        Commands::Parse { text, json } => {
            let entries = legacy::parse(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for row in format_legacy_rows(&entries) {
                    println!("{row}");
                }
            }
        }
        Commands::Show { business } => {
            let id = resolve_business(&directory, &business)?;
            match directory.read_hours(&id)? {
                Some(raw) => {
                    for row in format_legacy_rows(&legacy::parse(raw)) {
                        println!("{row}");
                    }
                }
                None => println!("(aucun horaire)"),
            }
        }
        Commands::Edit {
            business,
            toggle_closed,
            set,
        } => {
            let id = resolve_business(&directory, &business)?;
            let stored = directory.read_hours(&id)?.map(str::to_owned);

            let mut last: Option<String> = None;
            let mut editor =
                ScheduleEditor::initialize(stored.as_deref(), |s: &str| last = Some(s.to_owned()));
            for day in &toggle_closed {
                editor.toggle_closed(day.parse()?)?;
            }
            for assignment in &set {
                let (day, period, edge, time) = parse_assignment(assignment)?;
                editor.set_time(day, period, edge, time)?;
            }
            let week = format_week(editor.schedule());
            drop(editor);

            for line in week {
                println!("{line}");
            }
            if let Some(encoded) = last {
                directory.write_hours(&id, encoded)?;
                storage.save(&directory)?;
            }
        }
        Commands::Preview { business } => {
            let id = resolve_business(&directory, &business)?;
            let stored = directory.read_hours(&id)?;
            let editor = ScheduleEditor::initialize(stored, |_: &str| {});
            for line in format_week(editor.schedule()) {
                println!("{line}");
            }
        }
        Commands::TimeOptions => {
            for t in TimeSlot::options() {
                println!("{t}");
            }
        }
        Commands::Export {
            out_json,
            out_csv,
        } => {
            if let Some(path) = out_json {
                io::export_directory_json(path, &directory)?;
            }
            if let Some(path) = out_csv {
                io::export_legacy_rows_csv(path, &directory)?;
            }
        }
    }

    Ok(())
}

fn resolve_business(directory: &Directory, key: &str) -> Result<BusinessId> {
    directory
        .lookup(key)
        .map(|b| b.id.clone())
        .ok_or_else(|| anyhow!("unknown business: {key}"))
}

fn parse_assignment(raw: &str) -> Result<(Day, Period, Edge, TimeSlot)> {
    let (target, time) = raw
        .split_once('=')
        .with_context(|| format!("expected JOUR:PERIODE:BORNE=HH:MM, got {raw}"))?;
    let mut parts = target.splitn(3, ':');
    let (Some(day), Some(period), Some(edge)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(anyhow!("expected JOUR:PERIODE:BORNE=HH:MM, got {raw}"));
    };
    Ok((day.parse()?, period.parse()?, edge.parse()?, time.parse()?))
}
