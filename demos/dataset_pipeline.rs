//! Dataset Pipeline Example
//!
//! Shows the two dataset forms side by side: the raw document with id
//! references, and the denormalised form with embedded entities. The
//! conversion consumes the raw value, so there is no way to run it
//! twice over the same data.
//!
//! Run with: cargo run --example dataset_pipeline

use chargen::{denormalise, ChargenError, RawDataset};

fn main() -> Result<(), ChargenError> {
    let raw: RawDataset = serde_json::from_str(include_str!("dataset.json"))?;

    println!("Raw collections:");
    println!("  weapons: {}", raw.weapons.len());
    println!("  armor:   {}", raw.armor.len());
    println!("  items:   {}", raw.items.len());
    for class in &raw.classes {
        println!(
            "  class {:8} references {} equipment ids, caster: {}",
            class.name,
            class.equipment.len(),
            class.spellcasting.ability.is_some(),
        );
    }

    let data = denormalise(raw)?;

    println!("\nDenormalised:");
    println!("  items (strict union): {}", data.items.len());
    for item in &data.items {
        println!("    {:12} [{:?}]", item.name, item.category);
    }

    for class in &data.classes {
        println!("\n  {}:", class.name);
        for equipment in &class.equipment {
            println!("    {} x{}", equipment.item.name, equipment.quantity);
        }
        println!(
            "    saving throws: {}",
            class
                .proficiencies
                .saving_throws
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        match &class.spellcasting {
            Some(casting) => println!(
                "    casts with {}: {} cantrips, {} spells",
                casting.ability.name, casting.cantrips.choose, casting.spells.choose
            ),
            None => println!("    not a caster"),
        }
    }

    for race in &data.races {
        let bonuses: Vec<String> = race
            .ability_bonuses
            .iter()
            .filter(|b| b.bonus != 0)
            .map(|b| format!("{} {:+}", b.ability.name, b.bonus))
            .collect();
        println!("\n  {}: {}", race.name, bonuses.join(", "));
    }

    Ok(())
}
