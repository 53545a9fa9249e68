//! Menu Strings Through a Translator
//!
//! Builds a small resource catalog, wraps it in the translating layer with
//! a dictionary-backed service, and walks every lookup kind once.
//!
//! Run: `cargo run -p reslate-catalog --example menu_demo`
//!
//! Set `RUST_LOG=trace` to watch the wrapper route lookups through the
//! service.

use std::collections::HashMap;

use reslate::{ResourceId, RichText, TextAttrs, TextProvider, Translate, Translated};
use reslate_catalog::{Catalog, PluralForms};
use tracing_subscriber::EnvFilter;

const SAVE: ResourceId = ResourceId(0x0100);
const OPEN_RECENT: ResourceId = ResourceId(0x0101);
const DELETE_PROMPT: ResourceId = ResourceId(0x0102);
const UNSAVED_BADGE: ResourceId = ResourceId(0x0103);
const ITEM_COUNT: ResourceId = ResourceId(0x0104);
const THEMES: ResourceId = ResourceId(0x0105);
const MISSING: ResourceId = ResourceId(0x01ff);

/// Word-for-word phrasebook; anything unknown passes through.
struct Phrasebook(HashMap<&'static str, &'static str>);

impl Phrasebook {
    fn french() -> Self {
        Self(HashMap::from([
            ("Save file", "Enregistrer le fichier"),
            ("Open recent", "Ouvrir récent"),
            ("Delete 3 items?", "Supprimer 3 éléments ?"),
            ("Unsaved changes", "Modifications non enregistrées"),
            ("Not available", "Indisponible"),
        ]))
    }
}

impl Translate for Phrasebook {
    fn translate(&self, text: &str) -> String {
        self.0
            .get(text)
            .map_or_else(|| text.to_owned(), |hit| (*hit).to_owned())
    }
}

fn build_catalog() -> Catalog {
    let mut catalog = Catalog::for_locale("en");
    catalog.insert_string(SAVE, "Save file");
    catalog.insert_string(OPEN_RECENT, "Open recent");
    catalog.insert_string(DELETE_PROMPT, "Delete {0} items?");
    catalog.insert_rich(
        UNSAVED_BADGE,
        RichText::plain("Unsaved changes").with_span(0, 7, TextAttrs::BOLD),
    );
    catalog.insert_plural(
        ITEM_COUNT,
        PluralForms::simple("{count} item", "{count} items"),
    );
    catalog.insert_array(THEMES, ["Light", "Dark", "High contrast"]);
    catalog
}

fn main() -> reslate::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let menu = Translated::new(build_catalog(), Phrasebook::french());

    println!("plain:     {}", menu.string(SAVE)?);
    println!("plain:     {}", menu.string(OPEN_RECENT)?);
    println!("formatted: {}", menu.format(DELETE_PROMPT, &["3"])?);
    println!("rich:      {}", menu.text(UNSAVED_BADGE)?);
    println!(
        "default:   {}",
        menu.text_or(MISSING, RichText::plain("Not available"))
    );
    println!("plural(1): {}", menu.plural(ITEM_COUNT, 1)?);
    println!("plural(4): {}", menu.plural(ITEM_COUNT, 4)?);
    println!("array:     {}", menu.string_array(THEMES)?.join(" | "));

    // Failures keep their provider error; nothing gets translated.
    if let Err(err) = menu.string(MISSING) {
        println!("missing:   {err}");
    }

    Ok(())
}
