//! Character Creation Walkthrough
//!
//! This example walks the full wizard flow end to end:
//! - Load and denormalise the bundled dataset
//! - Pick a race and class
//! - Assign ability points from the class defaults
//! - Choose skills (rolling replacement) and spells (hard cap)
//! - Serialise the submission snapshot
//!
//! Run with: cargo run --example walkthrough

use chargen::{load_dataset, AbilityKey, CharacterSession, ChargenError};
use std::sync::Arc;

fn main() -> Result<(), ChargenError> {
    let data = load_dataset(include_str!("dataset.json"))?;
    println!(
        "Loaded dataset: {} races, {} classes, {} items",
        data.races.len(),
        data.classes.len(),
        data.items.len()
    );

    let mut session = CharacterSession::new(Arc::new(data))?;

    // ========================================================================
    // Race and class
    // ========================================================================

    session.set_race("elf".into());
    session.set_class("wizard".into());
    println!(
        "\nPlaying {} {}",
        session.race().map(|r| r.name.as_str()).unwrap_or("?"),
        session.class().map(|c| c.name.as_str()).unwrap_or("?"),
    );
    println!("Spellcaster: {}", session.is_spellcaster()?);

    // ========================================================================
    // Ability points
    // ========================================================================

    session.reset_points_to_class_defaults()?;
    println!("\nAbility scores (base -> adjusted, modifier):");
    for key in AbilityKey::ALL {
        println!(
            "  {:13} {:>3} -> {:>3}  ({:+})",
            key.name(),
            session.base_score(key),
            session.adjusted_score(key),
            session.ability_modifier(key),
        );
    }

    // What could constitution still be set to?
    let options = session.point_options(AbilityKey::Constitution);
    println!("\nConstitution options: {options:?}");

    // ========================================================================
    // Skills, cantrips, spells
    // ========================================================================

    println!("\nSkill capacity: {}", session.skill_capacity());
    session.toggle_skill("arcana".into());
    session.toggle_skill("history".into());
    // A third pick rolls the oldest one out.
    let outcome = session.toggle_skill("stealth".into());
    println!("Third skill pick: {outcome:?}");

    session.add_cantrip("fire-bolt".into())?;
    session.add_cantrip("light".into())?;
    session.add_spell("magic-missile".into())?;
    session.add_spell("sleep".into())?;

    // The cap is hard: this one is rejected.
    if let Err(err) = session.add_spell("shield-spell".into()) {
        println!("Spell rejected as expected: {err}");
    }

    // ========================================================================
    // Submission
    // ========================================================================

    let mut snapshot = session.snapshot();
    snapshot.name = "Aranel".to_string();
    snapshot.alignment = "Chaotic Good".to_string();

    println!(
        "\nSubmission payload:\n{}",
        serde_json::to_string_pretty(&snapshot).expect("character serialises")
    );
    Ok(())
}
