use std::fs;

use rarity_theme::{
    select_adapter, ColorContext, ColorMode, CustomEntry, DefaultEntry, ModuleSettings, SheetItem,
    SheetProbe, SystemTaxonomy,
};

fn dnd5e_taxonomy() -> SystemTaxonomy {
    let mut taxonomy = SystemTaxonomy::default();
    for (key, label) in [
        ("common", "Common"),
        ("uncommon", "Uncommon"),
        ("rare", "Rare"),
        ("veryRare", "Very Rare"),
        ("legendary", "Legendary"),
        ("artifact", "Artifact"),
    ] {
        taxonomy
            .item_rarity
            .insert(key.to_string(), DefaultEntry::Label(label.to_string()));
    }
    taxonomy
}

#[test]
fn fresh_install_colors_items_from_builtin_tables() {
    let context = ColorContext::initialize(
        ModuleSettings::default(),
        &SystemTaxonomy::default(),
        None,
        false,
    )
    .unwrap();

    let palette = context.palette();
    assert_eq!(palette.len(), 21);
    assert_eq!(
        context.color_for(&SheetItem::physical("Cloak of Billowing", Some("common"))),
        "#000000"
    );
    assert_eq!(
        context.color_for(&SheetItem::physical("Vorpal Sword", Some("legendary"))),
        "#ffa500ff"
    );
    assert_eq!(context.color_for(&SheetItem::spell("Wish", None)), "#4a8396ff");
    assert_eq!(
        context.color_for(&SheetItem::feature("Rage", None)),
        "#48d1ccff"
    );
}

#[test]
fn captured_taxonomy_survives_a_settings_round_trip() {
    let mut settings = ModuleSettings::default();
    settings.color_mode = ColorMode::OnlyText;
    assert!(settings.configurations.capture_defaults(&dnd5e_taxonomy()));

    let dir = std::env::temp_dir().join("rarity_theme_scenario_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.toml");
    settings.save_to_file(&path).unwrap();

    let reloaded = ModuleSettings::from_file(&path).unwrap();
    assert_eq!(reloaded, settings);
    fs::remove_dir_all(&dir).unwrap();

    // Captured labels carry the category fallback color; the second
    // capture is a no-op.
    let mut reloaded = reloaded;
    assert!(!reloaded.configurations.capture_defaults(&dnd5e_taxonomy()));

    let context =
        ColorContext::initialize(reloaded, &dnd5e_taxonomy(), None, false).unwrap();
    assert_eq!(
        context.color_for(&SheetItem::physical("Apparatus", Some("veryrare"))),
        "#000000"
    );
}

#[test]
fn user_customizations_drive_the_rendered_plan() {
    let mut settings = ModuleSettings::default();
    settings.color_mode = ColorMode::OnlyText;
    settings.configurations.item_rarity.custom.insert(
        "0".to_string(),
        CustomEntry {
            key: "Very Rare".to_string(),
            color: Some("#123456ff".to_string()),
            name: Some("Very Rare".to_string()),
            label: None,
        },
    );

    let context =
        ColorContext::initialize(settings, &SystemTaxonomy::default(), None, false).unwrap();

    // The declared key is normalized before it lands in the map.
    let item = SheetItem::physical("Apparatus of Kwalish", Some("veryRare"));
    assert_eq!(context.color_for(&item), "#123456ff");

    let adapter = select_adapter(&SheetProbe::named("ActorSheet5e"));
    let plan = context.plan_for(&item, adapter);
    assert_eq!(plan.text.as_deref(), Some("#123456ff"));
    assert_eq!(plan.background, None);
    assert_eq!(plan.border, None);
}

#[test]
fn common_items_keep_their_default_display() {
    let context = ColorContext::initialize(
        ModuleSettings::default(),
        &SystemTaxonomy::default(),
        None,
        false,
    )
    .unwrap();

    // `common` maps to the default sentinel, so the plan clears styles.
    let item = SheetItem::physical("Torch", Some("common"));
    let adapter = select_adapter(&SheetProbe::named("ActorSheet5e"));
    assert_eq!(
        context.plan_for(&item, adapter),
        rarity_theme::StylePlan::clear()
    );
}
