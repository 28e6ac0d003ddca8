//! Utility to set the stored profile from the command line
//!
//! Usage: set_profile <unit> <activity> <height> <weight>

use hydration::settings::Settings;
use hydration::store::SqliteStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [unit, activity, height, weight] = args.as_slice() else {
        eprintln!("Usage: set_profile <metric|imperial> <sedentary|active|athlete> <height> <weight>");
        std::process::exit(2);
    };

    let db_path = hydration::db::default_path();
    println!("Database path: {}", db_path.display());
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let database = hydration::db::Database::new(&db_path)?;
    database.with_conn(|conn| {
        hydration::db::migrations::run_migrations(conn)?;
        Ok(())
    })?;

    let mut settings = Settings::load(SqliteStore::new(database))?;

    // Unit first so height and weight are recorded in it
    let edits = [
        ("unit", settings.handle_unit_change(unit)?),
        ("activity", settings.handle_activity_change(activity)?),
        ("height", settings.handle_height_change(height)?),
        ("weight", settings.handle_weight_change(weight)?),
    ];
    for (field, accepted) in edits {
        if !accepted {
            eprintln!("Ignored invalid {}", field);
        }
    }

    let summary = settings.summary();
    println!("Profile set:");
    println!("  Unit: {}", summary.unit);
    println!("  Activity: {}", summary.activity);
    println!("  Height: {} {}", summary.height, summary.height_unit);
    println!("  Weight: {} {}", summary.weight, summary.weight_unit);
    println!("  Hydration goal: {} {}", summary.hydration_goal, summary.liquid_unit);
    println!("  BMI: {}", summary.bmi);

    Ok(())
}
