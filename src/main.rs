//! Greenside core - demo entry point
//!
//! Exercises the localization table and the secure save store from the
//! command line: loads the sample resource, prints lookups in every
//! supported language, then runs a save/load round trip.

use anyhow::Result;

use greenside::localization::LocalizationTable;
use greenside::save::{GameStateRecord, SecureSaveStore, Vec2, Vec3};

const SAMPLE_RESOURCE: &str = "ui";
const SAMPLE_CSV: &str = include_str!("../assets/localization.csv");

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Greenside core demo v{}", env!("CARGO_PKG_VERSION"));

    let table = LocalizationTable::new("en");
    let report = table.load(SAMPLE_RESOURCE, SAMPLE_CSV);
    println!(
        "Loaded '{}': {} languages, {} entries",
        SAMPLE_RESOURCE, report.languages, report.entries
    );

    for code in table.supported_languages(SAMPLE_RESOURCE) {
        table.set_language(&code);
        println!(
            "[{}] {} / {}",
            code,
            table.localized_text(SAMPLE_RESOURCE, "GREETING"),
            table.localized_text(SAMPLE_RESOURCE, "GAME_OVER"),
        );
    }

    let store = SecureSaveStore::at_default_location();
    let mut record = match store.load() {
        Ok(Some(record)) => record,
        Ok(None) => {
            log::info!("No save file found, starting fresh");
            GameStateRecord::new()
        }
        Err(e) => {
            // Documented recovery: treat an unreadable save as absent
            log::warn!("Save file unusable ({}), starting fresh", e);
            GameStateRecord::new()
        }
    };

    record.record_coin();
    record.add_time(1.5);
    record.record_ball_state(Vec3::new(1.0, 2.0, 0.0), Vec2::new(0.5, -1.0));
    store.save(&record)?;

    println!(
        "Saved {} coins after {:.1}s of play to {:?}",
        record.coins,
        record.elapsed_seconds,
        store.save_path()
    );

    log::info!("Greenside core demo finished");
    Ok(())
}
