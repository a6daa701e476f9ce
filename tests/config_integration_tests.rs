// tests/config_integration_tests.rs
//! Loading real config files from disk

use std::io::Write;

use lwt::settings::{Scrollback, SpawnTimeout, Transparency};
use lwt::{Color, Config, Settings};
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn sixteen_color_theme() -> String {
    let mut s = String::from("[theme]\nfg = #d0d0d0\nbg = #101010\nbold_is_bright = true\n");
    for i in 0..16 {
        s.push_str(&format!("{} = #{:02x}0000\n", i, i * 16));
    }
    s
}

#[test]
fn absent_file_resolves_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("lwt.conf"));

    let s = &config.settings;
    assert_eq!(s.font, lwt::constants::DEFAULT_FONT);
    assert_eq!(s.shell, lwt::settings::user_shell());
    assert_eq!(s.opacity, 1.0);
    assert_eq!(s.scrollback, Scrollback::Lines(1_000_000));
    assert_eq!(s.spawn_timeout, SpawnTimeout::Unbounded);
    assert_eq!(s.spawn_timeout.as_millis_i32(), -1);
    assert!(!s.select_to_clipboard);
    assert_eq!(config.theme, None);
}

#[test]
fn empty_file_matches_absent_file() {
    let file = write_config("");
    let dir = TempDir::new().unwrap();
    assert_eq!(Config::load(file.path()), Config::load(&dir.path().join("none.conf")));
}

#[test]
fn full_sixteen_color_theme() {
    let file = write_config(&format!("[lwt]\nfont = Hack 10\n{}", sixteen_color_theme()));
    let config = Config::load(file.path());

    assert_eq!(config.settings.font, "Hack 10");
    let theme = config.theme.expect("theme should resolve");
    assert_eq!(theme.palette_size(), 16);
    assert_eq!(theme.foreground, Color::parse("#d0d0d0").unwrap());
    assert_eq!(theme.background, Color::parse("#101010").unwrap());
    for (i, c) in theme.palette.iter().enumerate() {
        assert_eq!(*c, Color::parse(&format!("#{:02x}0000", i * 16)).unwrap(), "entry {i}");
    }
    assert!(theme.bold_is_bright);
}

#[test]
fn one_bad_color_discards_theme_only() {
    let data = sixteen_color_theme().replace("fg = #d0d0d0", "fg = chartreuse-ish");
    let file = write_config(&format!("[lwt]\nscrollback = -1\n{data}"));
    let config = Config::load(file.path());

    assert_eq!(config.theme, None);
    assert_eq!(config.settings.scrollback, Scrollback::Unlimited);
}

#[test]
fn half_transparent_without_compositor_stays_opaque() {
    let file = write_config("[lwt]\nopacity = 0.5\n");
    let config = Config::load(file.path());

    assert_eq!(config.settings.opacity, 0.5);
    assert_eq!(config.settings.transparency(false), Transparency::Unavailable);
    assert_eq!(config.settings.transparency(true), Transparency::Apply(0.5));
}

#[test]
fn reloading_is_idempotent() {
    let file = write_config(&format!(
        "[lwt]\nshell = /bin/zsh\nspawn_timeout = 750\nselect_to_clipboard = true\n{}",
        sixteen_color_theme()
    ));
    let first = Config::load(file.path());
    let second = Config::load(file.path());
    assert_eq!(first, second);
    assert_eq!(
        first.settings,
        Settings {
            shell: "/bin/zsh".into(),
            spawn_timeout: SpawnTimeout::Millis(750),
            select_to_clipboard: true,
            ..Settings::with_shell("/bin/zsh")
        }
    );
}
