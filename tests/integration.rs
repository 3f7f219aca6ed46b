// SPDX-License-Identifier: MPL-2.0
use iced_tee::app::config::{self, Config, CustomizerConfig, GeneralConfig};
use iced_tee::app::keymap::Action;
use iced_tee::app::{App, Flags, Message};
use iced_tee::domain::{GarmentColor, PrintText};
use iced_tee::i18n::fluent::I18n;
use iced_tee::media::model::{load_garment, LoadOutcome};
use iced_tee::media::{GarmentAssets, ImageData, PendingFile};
use iced_tee::ui::preview::flat::Base;
use iced_tee::ui::preview::orbit::Orbit;
use iced_tee::ui::preview::{render, FlatComposite, LoadState, PreviewMode, Scene};
use iced_tee::ui::uploader;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn app_with(config: Config) -> App {
    let flags = Flags {
        lang: Some("en-US".into()),
        ..Flags::default()
    };
    App::with_config(flags, config, None).0
}

fn drop_file(app: &mut App, path: &str) -> uploader::UploadTicket {
    let _ = app.update(Message::Uploader(uploader::Message::Dropped(PathBuf::from(
        path,
    ))));
    app.uploader().latest_ticket().expect("image accepted")
}

fn decoded(ticket: uploader::UploadTicket, path: &str) -> Message {
    Message::ImageDecoded {
        ticket,
        file: PendingFile::from_path(PathBuf::from(path)),
        result: Ok(ImageData::from_rgba(2, 2, vec![0; 16])),
    }
}

const TRIANGLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let french = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    // CLI wins over the file.
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn color_cycle_is_modular_from_every_start() {
    for start in 0..GarmentColor::ALL.len() {
        for presses in 0..13 {
            let config = Config {
                customizer: CustomizerConfig {
                    color: Some(GarmentColor::from_index(start).name().to_string()),
                    ..CustomizerConfig::default()
                },
                ..Config::default()
            };
            let mut app = app_with(config);
            for _ in 0..presses {
                let _ = app.update(Message::Shortcut(Action::CycleColor));
            }
            assert_eq!(app.color(), GarmentColor::from_index(start + presses));
        }
    }
}

#[test]
fn toggling_preview_twice_keeps_customization() {
    let mut app = app_with(Config::default());
    let _ = app.update(Message::Shortcut(Action::CycleColor));
    let before = app.customization().clone();

    let _ = app.update(Message::Shortcut(Action::TogglePreview));
    assert_eq!(app.preview_mode(), PreviewMode::Model);
    let _ = app.update(Message::Shortcut(Action::TogglePreview));

    assert_eq!(app.preview_mode(), PreviewMode::Flat);
    assert_eq!(app.customization(), &before);
}

#[test]
fn second_upload_supersedes_a_slow_first_one() {
    let mut app = app_with(Config::default());
    let a = drop_file(&mut app, "/uploads/a.png");
    let b = drop_file(&mut app, "/uploads/b.jpg");

    let _ = app.update(decoded(b, "/uploads/b.jpg"));
    let _ = app.update(decoded(a, "/uploads/a.png"));

    let url = app.customization().image.clone().expect("b is shown");
    assert!(app.assets().is_live(&url));
    assert_eq!(app.assets().live_count(), 1);
    assert_eq!(
        app.uploader().pending().map(|file| file.path.clone()),
        Some(PathBuf::from("/uploads/b.jpg"))
    );
}

#[test]
fn hello_world_composite_on_navy() {
    let assets = GarmentAssets::empty(&PathBuf::from("/nonexistent"));
    let text = PrintText::new("HELLO\nWORLD");

    let composite = FlatComposite::compose(GarmentColor::Navy, &text, None, &assets);

    assert_eq!(composite.base, Base::Silhouette(GarmentColor::Navy));
    assert_eq!(composite.lines, vec!["HELLO", "WORLD"]);
    assert!(composite.overlay.is_none());
}

#[test]
fn stored_text_never_exceeds_three_lines() {
    for raw in ["a\nb\nc\nd", "\n\n\n\n\n", "one\r\ntwo\r\nthree\r\nfour"] {
        assert!(PrintText::new(raw).as_str().split('\n').count() <= 3);
    }
}

#[test]
fn missing_material_library_loads_fallback() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("models")).expect("mkdir");
    fs::write(dir.path().join("models/Male_Tshirt.obj"), TRIANGLE_OBJ).expect("write obj");
    let paths = GarmentAssets::scan(dir.path()).model_paths();

    let result = load_garment(&paths);
    assert!(matches!(result, Ok(LoadOutcome::Fallback { .. })));

    let mut scene = Scene::new(GarmentColor::Navy);
    let ticket = scene.begin_load();
    scene.finish_load(ticket, result);
    assert!(matches!(scene.state(), LoadState::LoadedFallback { .. }));
}

#[test]
fn missing_model_fails_but_keeps_rendering() {
    let dir = tempdir().expect("tempdir");
    let paths = GarmentAssets::scan(dir.path()).model_paths();

    let mut scene = Scene::new(GarmentColor::Navy);
    let ticket = scene.begin_load();
    scene.finish_load(ticket, load_garment(&paths));

    assert!(matches!(scene.state(), LoadState::Failed { .. }));
    scene.tick(Instant::now() + Duration::from_millis(16));
    assert!(scene.elapsed() > Duration::ZERO);

    let orbit = Orbit::new();
    let grid = render::grid_segments(&orbit.view_projection(0.75), iced::Size::new(420.0, 560.0));
    assert!(!grid.is_empty());
}
